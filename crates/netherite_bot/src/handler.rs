//! Serenity event handler: where messages become command invocations.

use crate::{commands, dispatch, render, BotContext, GatewayInfo};
use netherite_format as fmt;
use serenity::async_trait;
use serenity::gateway::ShardManager;
use serenity::model::channel::Message;
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::prelude::{Context, EventHandler, TypeMapKey};
use std::sync::Arc;
use tracing::{info, warn};

/// TypeMap slot holding the shard manager so handlers can read heartbeat
/// latency. Inserted by [`NetheriteBot::new`](crate::NetheriteBot::new).
pub struct ShardManagerKey;

impl TypeMapKey for ShardManagerKey {
    type Value = Arc<ShardManager>;
}

/// Heartbeat latency of the shard that delivered the current event, in
/// whole milliseconds. `None` until the first heartbeat ack arrives.
async fn shard_latency_ms(ctx: &Context) -> Option<u64> {
    let manager = ctx.data.read().await.get::<ShardManagerKey>().cloned()?;
    let runners = manager.runners.lock().await;
    runners
        .get(&ctx.shard_id)
        .and_then(|runner| runner.latency)
        .map(|latency| latency.as_millis() as u64)
}

/// Event handler driving the command dispatch loop.
pub struct NetheriteHandler {
    context: Arc<BotContext>,
}

impl NetheriteHandler {
    /// Create a handler over the shared bot context.
    pub fn new(context: Arc<BotContext>) -> Self {
        Self { context }
    }

    /// Gateway intents the bot needs: guild membership for stats, messages
    /// and their content for prefix commands.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }
}

#[async_trait]
impl EventHandler for NetheriteHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "Connected to the Discord gateway"
        );
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(invocation) = dispatch::parse(&self.context.settings().prefix, &msg.content)
        else {
            return;
        };

        // Cooldowns gate before any cache or HTTP work.
        let user = msg.author.id.get();
        let reply = match self
            .context
            .cooldowns()
            .check(user, invocation.command().class())
        {
            Ok(()) => {
                // Bind before the await: the cache ref is not `Send`.
                let current_user_id = ctx.cache.current_user().id.get();
                let gateway = GatewayInfo {
                    guild_count: ctx.cache.guild_count() as u64,
                    current_user_id,
                    latency_ms: shard_latency_ms(&ctx).await,
                };
                commands::execute(&self.context, &gateway, &invocation).await
            }
            Err(wait) => {
                let wait = fmt::humanize_timedelta(wait.as_secs().max(1));
                commands::Reply::Text(fmt::warning(&format!(
                    "Easy there! Try that again in {wait}."
                )))
            }
        };

        if let Err(e) = msg
            .channel_id
            .send_message(&ctx.http, render::render(&reply))
            .await
        {
            warn!(error = %e, channel = %msg.channel_id, "Reply failed to send");
        }
    }
}
