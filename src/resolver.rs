use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

/// Where and how to reach the link-resolution service.
#[derive(Clone)]
pub struct ResolverConfig {
    pub api_url: String,
    pub api_key: String,
}

#[derive(Deserialize)]
struct LinkResponse {
    download_link: Option<String>,
    estimated_size: Option<f64>,
}

/// A resolved direct download link.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectLink {
    pub url: String,
    /// Size as reported by the resolution service, when it reports one.
    pub estimated_size: Option<f64>,
}

/// Ask the resolution service for a direct download link.
///
/// `Ok(None)` means the service answered but produced no usable link; the
/// request cannot proceed and there is no retry. Transport and decode
/// failures propagate as errors.
pub async fn fetch_ddl(
    http: &reqwest::Client,
    cfg: &ResolverConfig,
    source_url: &str,
) -> Result<Option<DirectLink>> {
    let resp = http
        .get(&cfg.api_url)
        .query(&[("url", source_url), ("api_key", cfg.api_key.as_str())])
        .send()
        .await?;

    let raw = resp.text().await?;
    let snippet: String = raw.chars().take(200).collect();
    debug!(snippet = %snippet, "resolver response body");

    let data: LinkResponse = serde_json::from_str(&raw)?;
    Ok(data.download_link.map(|url| DirectLink {
        url,
        estimated_size: data.estimated_size,
    }))
}
