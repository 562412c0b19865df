use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures_util::StreamExt;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::notify::ProgressMessage;
use crate::progress::{Progress, MIB};

/// Fixed name of the downloaded file inside the job directory.
pub const VIDEO_FILE_NAME: &str = "video.mp4";

/// Granularity of progress reports, in bytes of received payload.
pub const CHUNK_SIZE: u64 = 1024 * 1024;

/// A finished download.
#[derive(Debug)]
pub struct Downloaded {
    pub path: PathBuf,
    /// Measured size in MiB (bytes / 1,048,576).
    pub size_mb: f64,
}

/// Stream `url` into `dir`, reporting progress after every received MiB and
/// once at the end of the stream.
pub async fn download_video(
    http: &reqwest::Client,
    url: &str,
    dir: &Path,
    progress_msg: &mut ProgressMessage<'_>,
) -> Result<Downloaded> {
    let resp = http.get(url).send().await?.error_for_status()?;
    let total = resp.content_length();

    let path = dir.join(VIDEO_FILE_NAME);
    let mut file = File::create(&path)
        .await
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut progress = Progress::new(total);
    let mut unreported: u64 = 0;
    let mut stream = resp.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        progress.advance(chunk.len() as u64);
        unreported += chunk.len() as u64;
        if unreported >= CHUNK_SIZE {
            progress_msg.update(&progress).await?;
            unreported = 0;
        }
    }
    file.flush().await?;
    progress_msg.update(&progress).await?;

    tracing::debug!(
        path = %path.display(),
        bytes = progress.downloaded(),
        "download finished"
    );

    Ok(Downloaded {
        path,
        size_mb: progress.downloaded() as f64 / MIB,
    })
}
