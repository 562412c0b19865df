use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tokio::process::Command;
use tracing::info;

/// Cap passed to ffmpeg for each produced part.
pub const PART_SIZE_CAP: &str = "48M";

pub const PART1_FILE_NAME: &str = "part1.mp4";
pub const PART2_FILE_NAME: &str = "part2.mp4";

/// Cut `input` into two parts inside `dir`, each capped at 48 MB.
///
/// The exit status is checked and both output files must exist afterwards;
/// nothing is ever sent to the chat on the strength of a silent failure.
pub async fn split_video(input: &Path, dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let part1 = dir.join(PART1_FILE_NAME);
    let part2 = dir.join(PART2_FILE_NAME);

    info!(input = %input.display(), "splitting video");
    let output = Command::new("ffmpeg")
        .args(ffmpeg_args(input, &part1, &part2))
        .output()
        .await
        .context("failed to run ffmpeg")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("ffmpeg exited with {}: {}", output.status, stderr.trim());
    }

    verify_outputs(&part1, &part2)?;
    Ok((part1, part2))
}

fn ffmpeg_args(input: &Path, part1: &Path, part2: &Path) -> Vec<OsString> {
    vec![
        OsString::from("-y"),
        OsString::from("-i"),
        input.as_os_str().to_os_string(),
        OsString::from("-fs"),
        OsString::from(PART_SIZE_CAP),
        part1.as_os_str().to_os_string(),
        OsString::from("-fs"),
        OsString::from(PART_SIZE_CAP),
        part2.as_os_str().to_os_string(),
    ]
}

fn verify_outputs(part1: &Path, part2: &Path) -> Result<()> {
    for part in [part1, part2] {
        if !part.is_file() {
            bail!("ffmpeg did not produce {}", part.display());
        }
    }
    Ok(())
}
