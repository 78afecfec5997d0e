//! Discord client setup and lifecycle management.

use crate::handler::ShardManagerKey;
use crate::{BotContext, BotError, BotErrorKind, BotResult, NetheriteHandler, Settings};
use serenity::Client;
use std::sync::Arc;
use tracing::{info, instrument};

/// The Netherite Discord bot.
///
/// Owns the Serenity client and the shared [`BotContext`] the command
/// handlers run against.
///
/// # Example
/// ```no_run
/// use netherite_bot::{NetheriteBot, Settings};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let settings = Settings::load(None)?;
///     let mut bot = NetheriteBot::new(settings).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct NetheriteBot {
    client: Client,
    context: Arc<BotContext>,
}

impl NetheriteBot {
    /// Build the client from loaded settings.
    ///
    /// # Errors
    /// Returns an error when the token is blank or the Serenity client
    /// fails to initialize.
    #[instrument(skip(settings), fields(prefix = %settings.prefix))]
    pub async fn new(settings: Settings) -> BotResult<Self> {
        if settings.token.trim().is_empty() {
            return Err(BotError::new(BotErrorKind::InvalidToken));
        }

        let context = Arc::new(BotContext::new(settings));
        let handler = NetheriteHandler::new(context.clone());
        let intents = NetheriteHandler::intents();
        info!(?intents, "Building Serenity client");

        let client = Client::builder(&context.settings().token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                BotError::new(BotErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {e}"
                )))
            })?;

        // Handlers read heartbeat latency through the shard manager.
        client
            .data
            .write()
            .await
            .insert::<ShardManagerKey>(client.shard_manager.clone());

        Ok(Self { client, context })
    }

    /// Connect and run until shutdown.
    ///
    /// # Errors
    /// Returns an error if the gateway connection fails fatally. Command
    /// failures never propagate here.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> BotResult<()> {
        info!("Starting Discord bot");
        self.client.start().await.map_err(|e| {
            BotError::new(BotErrorKind::ConnectionFailed(format!("Client error: {e}")))
        })?;
        Ok(())
    }

    /// The shared handler context.
    pub fn context(&self) -> &Arc<BotContext> {
        &self.context
    }
}
