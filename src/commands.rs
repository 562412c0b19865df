use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::config::Config;
use crate::handlers::process_video;

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "fetch a Terabox video and upload it to this chat.")]
    GetVideo(String),
}

impl Command {
    pub async fn dispatch(
        self,
        bot: Bot,
        msg: Message,
        cfg: Config,
        http: reqwest::Client,
    ) -> Result<()> {
        match self {
            Command::GetVideo(url) => process_video(bot, msg, cfg, http, url).await?,
        }
        Ok(())
    }
}
