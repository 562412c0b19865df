use anyhow::Result;
use teloxide::prelude::*;

use crate::config::Config;
use crate::download::download_video;
use crate::job::JobDir;
use crate::messages;
use crate::notify::Notifier;
use crate::resolver::fetch_ddl;
use crate::split::split_video;

/// Upper bound, in MiB, for a video the bot will upload at all.
const OVERSIZE_LIMIT_MB: f64 = 98.0;
/// Sizes from here up to the limit are split into two parts first.
const SPLIT_THRESHOLD_MB: f64 = 50.0;

/// What to do with a finished download of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Too large even for a two-part split; the user keeps the DDL.
    Oversize,
    Split,
    Single,
}

impl Delivery {
    pub fn classify(size_mb: f64) -> Self {
        if size_mb > OVERSIZE_LIMIT_MB {
            Delivery::Oversize
        } else if size_mb >= SPLIT_THRESHOLD_MB {
            Delivery::Split
        } else {
            Delivery::Single
        }
    }
}

/// The `/getvideo` flow: resolve the link, download with progress updates,
/// deliver by size.
pub async fn process_video(
    bot: Bot,
    msg: Message,
    cfg: Config,
    http: reqwest::Client,
    url: String,
) -> Result<()> {
    let notifier = Notifier::new(bot, msg.chat.id);

    let url = url.trim();
    if url.is_empty() {
        notifier.say(messages::USAGE).await?;
        return Ok(());
    }

    tracing::info!(chat_id = msg.chat.id.0, url, "Processing /getvideo");
    notifier.say(messages::FETCHING_DDL).await?;

    let Some(link) = fetch_ddl(&http, &cfg.resolver, url).await? else {
        tracing::info!(chat_id = msg.chat.id.0, "Resolver returned no usable link");
        notifier.say(messages::DDL_FAILED).await?;
        return Ok(());
    };
    notifier.say(messages::link_info(&link)).await?;

    let job = JobDir::create(&cfg.download_dir, msg.chat.id)?;

    notifier.say(messages::STARTING_DOWNLOAD).await?;
    let mut progress = notifier.progress();
    let video = download_video(&http, &link.url, job.path(), &mut progress).await?;

    tracing::info!(
        chat_id = msg.chat.id.0,
        size_mb = video.size_mb,
        "Download complete"
    );

    match Delivery::classify(video.size_mb) {
        Delivery::Oversize => {
            notifier.say(messages::oversize_notice(video.size_mb)).await?;
        }
        Delivery::Split => {
            notifier.say(messages::SPLITTING).await?;
            match split_video(&video.path, job.path()).await {
                Ok((part1, part2)) => {
                    notifier.send_video(&part1, messages::CAPTION_PART1).await?;
                    notifier.send_video(&part2, messages::CAPTION_PART2).await?;
                }
                Err(err) => {
                    tracing::error!(chat_id = msg.chat.id.0, error = %err, "Split failed");
                    notifier.say(messages::SPLIT_FAILED).await?;
                }
            }
        }
        Delivery::Single => {
            notifier
                .send_video(&video.path, messages::CAPTION_SINGLE)
                .await?;
        }
    }

    Ok(())
}
