//! Download progress accounting, kept free of any I/O so the arithmetic is
//! trivially testable.

pub const MIB: f64 = 1_048_576.0;

/// Bytes received so far against the response's declared length.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    downloaded: u64,
    total: Option<u64>,
}

impl Progress {
    pub fn new(total: Option<u64>) -> Self {
        // A declared length of zero is as useless as none at all.
        let total = total.filter(|&t| t > 0);
        Self {
            downloaded: 0,
            total,
        }
    }

    pub fn advance(&mut self, bytes: u64) {
        self.downloaded += bytes;
    }

    pub fn downloaded(&self) -> u64 {
        self.downloaded
    }

    /// Percentage complete, or `None` when the server declared no usable
    /// content length.
    pub fn percent(&self) -> Option<f64> {
        self.total
            .map(|total| self.downloaded as f64 / total as f64 * 100.0)
    }

    pub fn downloaded_mb(&self) -> f64 {
        self.downloaded as f64 / MIB
    }

    /// Whether the declared length has been fully received. Always false for
    /// an unknown length; the end of the stream settles it instead.
    pub fn complete(&self) -> bool {
        self.total.is_some_and(|total| self.downloaded >= total)
    }
}

/// Whether a metric moved far enough since the last rendered value to be
/// worth another message update.
pub fn step_reached(last: Option<f64>, current: f64, step: f64) -> bool {
    match last {
        None => true,
        Some(last) => current - last >= step,
    }
}
