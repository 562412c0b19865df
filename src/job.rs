use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use teloxide::types::ChatId;

static JOB_SEQ: AtomicU64 = AtomicU64::new(0);

/// Working directory for a single `/getvideo` invocation.
///
/// Named from the chat id plus a process-wide sequence number, so overlapping
/// invocations never share file paths. Removed best-effort on drop, success
/// or failure.
#[derive(Debug)]
pub struct JobDir {
    path: PathBuf,
}

impl JobDir {
    pub fn create(root: &Path, chat: ChatId) -> Result<Self> {
        let seq = JOB_SEQ.fetch_add(1, Ordering::Relaxed);
        let path = root.join(format!("{}-{seq}", chat.0));
        fs::create_dir_all(&path)
            .with_context(|| format!("failed to create job directory {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for JobDir {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_dir_all(&self.path) {
            tracing::warn!(
                error = %err,
                path = %self.path.display(),
                "Failed to remove job directory"
            );
        }
    }
}
