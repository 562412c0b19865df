use teloxide::prelude::*;
use teraboxbot::download::{download_video, VIDEO_FILE_NAME};
use teraboxbot::notify::Notifier;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MESSAGE_JSON: &str =
    r#"{"ok":true,"result":{"message_id":1,"date":0,"chat":{"id":1,"type":"private"}}}"#;

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

fn bot(server: &MockServer, client: reqwest::Client) -> Bot {
    Bot::with_client("TEST", client).set_api_url(reqwest::Url::parse(&server.uri()).unwrap())
}

async fn mount_telegram(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(MESSAGE_JSON, "application/json"))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/botTEST/EditMessageText"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(MESSAGE_JSON, "application/json"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn downloads_payload_and_measures_size() {
    let server = MockServer::start().await;
    mount_telegram(&server).await;

    let payload = vec![7u8; 3 * 1024 * 1024];
    Mock::given(method("GET"))
        .and(path("/v.mp4"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client();
    let bot = bot(&server, client.clone());
    let notifier = Notifier::new(bot, ChatId(1));
    let dir = tempfile::tempdir().unwrap();

    let mut progress = notifier.progress();
    let video = download_video(
        &client,
        &format!("{}/v.mp4", server.uri()),
        dir.path(),
        &mut progress,
    )
    .await
    .unwrap();

    assert!((video.size_mb - 3.0).abs() < 1e-9);
    assert_eq!(video.path, dir.path().join(VIDEO_FILE_NAME));
    assert_eq!(std::fs::read(&video.path).unwrap(), payload);
    server.verify().await;
}

#[tokio::test]
async fn small_payload_reports_once_at_end() {
    let server = MockServer::start().await;

    // Under the report granularity, so the only progress update is terminal.
    Mock::given(method("GET"))
        .and(path("/v.mp4"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8; 4096]))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(MESSAGE_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client();
    let bot = bot(&server, client.clone());
    let notifier = Notifier::new(bot, ChatId(1));
    let dir = tempfile::tempdir().unwrap();

    let mut progress = notifier.progress();
    let video = download_video(
        &client,
        &format!("{}/v.mp4", server.uri()),
        dir.path(),
        &mut progress,
    )
    .await
    .unwrap();

    assert!(video.size_mb < 0.01);
    server.verify().await;
}

#[tokio::test]
async fn http_error_status_fails_the_download() {
    let server = MockServer::start().await;
    mount_telegram(&server).await;

    Mock::given(method("GET"))
        .and(path("/v.mp4"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client();
    let bot = bot(&server, client.clone());
    let notifier = Notifier::new(bot, ChatId(1));
    let dir = tempfile::tempdir().unwrap();

    let mut progress = notifier.progress();
    let result = download_video(
        &client,
        &format!("{}/v.mp4", server.uri()),
        dir.path(),
        &mut progress,
    )
    .await;

    assert!(result.is_err());
    assert!(!dir.path().join(VIDEO_FILE_NAME).exists());
}
