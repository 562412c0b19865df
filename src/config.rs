use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::resolver::ResolverConfig;

/// Resolution endpoint used when `TERABOX_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://terabox-api.example.com/get_link";

#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub resolver: ResolverConfig,
    pub download_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let bot_token = env::var("BOT_TOKEN").context("BOT_TOKEN is not set")?;
        let api_key = env::var("TERABOX_API_KEY").context("TERABOX_API_KEY is not set")?;
        let api_url = env::var("TERABOX_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let download_dir: PathBuf = env::var("DOWNLOAD_DIR")
            .unwrap_or_else(|_| "downloads".to_string())
            .into();
        let log_file: PathBuf = env::var("LOG_FILE")
            .unwrap_or_else(|_| "bot.log".to_string())
            .into();

        Ok(Self {
            bot_token,
            resolver: ResolverConfig { api_url, api_key },
            download_dir,
            log_file,
        })
    }
}
