//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and
//! are easy to update or translate.

use crate::resolver::DirectLink;

pub const USAGE: &str = "Usage: /getvideo <terabox-url>";

pub const FETCHING_DDL: &str = "Fetching Direct Download Link...";
pub const DDL_FAILED: &str = "Failed to fetch DDL.";
pub const STARTING_DOWNLOAD: &str = "Starting video download...";

pub const SPLITTING: &str = "Splitting the video into two parts...";
pub const SPLIT_FAILED: &str =
    "Failed to split the video. Please download manually from the DDL above.";

pub const CAPTION_PART1: &str = "Part 1";
pub const CAPTION_PART2: &str = "Part 2";
pub const CAPTION_SINGLE: &str = "Here is your video!";

pub fn link_info(link: &DirectLink) -> String {
    match link.estimated_size {
        Some(size) => format!("Download Link: {}\nEstimated Size: {size} MB", link.url),
        None => format!("Download Link: {}\nEstimated Size: unknown", link.url),
    }
}

pub fn oversize_notice(size_mb: f64) -> String {
    format!(
        "Video size exceeds limit ({size_mb:.2} MB). Please download manually from the DDL above."
    )
}

pub fn progress_percent(percent: f64) -> String {
    format!("Download Progress: {percent:.2}%")
}

pub fn progress_bytes(mb: f64) -> String {
    format!("Downloaded {mb:.2} MB so far...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_info_with_size() {
        let link = DirectLink {
            url: "https://cdn.example.com/v.mp4".to_string(),
            estimated_size: Some(42.0),
        };
        assert_eq!(
            link_info(&link),
            "Download Link: https://cdn.example.com/v.mp4\nEstimated Size: 42 MB"
        );
    }

    #[test]
    fn link_info_without_size() {
        let link = DirectLink {
            url: "https://cdn.example.com/v.mp4".to_string(),
            estimated_size: None,
        };
        assert!(link_info(&link).ends_with("Estimated Size: unknown"));
    }

    #[test]
    fn oversize_notice_has_two_decimals() {
        assert!(oversize_notice(150.0).contains("150.00 MB"));
        assert!(oversize_notice(98.009).contains("98.01 MB"));
    }

    #[test]
    fn progress_lines() {
        assert_eq!(progress_percent(33.333), "Download Progress: 33.33%");
        assert_eq!(progress_bytes(1.5), "Downloaded 1.50 MB so far...");
    }
}
