use std::path::Path;

use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{InputFile, MessageId},
};

use crate::messages;
use crate::progress::{step_reached, Progress};

/// Minimum movement, in points of the reported metric, between two rendered
/// progress updates. The terminal update is always rendered.
const RENDER_STEP: f64 = 5.0;

/// Outbound messaging for a single chat.
///
/// Passed explicitly into every component that talks to the user, so there is
/// no process-wide bot handle.
#[derive(Clone)]
pub struct Notifier {
    bot: Bot,
    chat: ChatId,
}

impl Notifier {
    pub fn new(bot: Bot, chat: ChatId) -> Self {
        Self { bot, chat }
    }

    pub async fn say(&self, text: impl Into<String>) -> Result<Message> {
        Ok(self.bot.send_message(self.chat, text).await?)
    }

    pub async fn send_video(&self, path: &Path, caption: &str) -> Result<()> {
        self.bot
            .send_video(self.chat, InputFile::file(path.to_path_buf()))
            .caption(caption)
            .await?;
        Ok(())
    }

    pub fn progress(&self) -> ProgressMessage<'_> {
        ProgressMessage {
            notifier: self,
            message: None,
            last_rendered: None,
        }
    }
}

/// A single progress message edited in place as the download moves, instead
/// of one message per received chunk.
pub struct ProgressMessage<'a> {
    notifier: &'a Notifier,
    message: Option<MessageId>,
    last_rendered: Option<f64>,
}

impl ProgressMessage<'_> {
    pub async fn update(&mut self, progress: &Progress) -> Result<()> {
        let metric = match progress.percent() {
            Some(percent) => percent,
            None => progress.downloaded_mb(),
        };
        if self.last_rendered == Some(metric) {
            return Ok(());
        }
        if !progress.complete() && !step_reached(self.last_rendered, metric, RENDER_STEP) {
            return Ok(());
        }

        let text = match progress.percent() {
            Some(percent) => messages::progress_percent(percent),
            None => messages::progress_bytes(progress.downloaded_mb()),
        };

        match self.message {
            None => {
                let sent = self.notifier.say(text).await?;
                self.message = Some(sent.id);
            }
            Some(id) => {
                // Progress is cosmetic; a failed edit must not abort the download.
                if let Err(err) = self
                    .notifier
                    .bot
                    .edit_message_text(self.notifier.chat, id, text)
                    .await
                {
                    tracing::warn!(error = %err, "Failed to edit progress message");
                }
            }
        }
        self.last_rendered = Some(metric);
        Ok(())
    }
}
