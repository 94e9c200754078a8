use std::future::Future;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use pageturn_commands::{handle_interaction, handle_message, handle_reaction, handle_ready};
use pageturn_core::{Config, Context};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let token = config.discord_token.clone();

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(token.clone()));
    let ctx = Context::new(Arc::clone(&http), config);

    // Reactions drive message pagination, so reaction events are needed too
    let intents = Intents::GUILDS
        | Intents::GUILD_MESSAGES
        | Intents::MESSAGE_CONTENT
        | Intents::GUILD_MESSAGE_REACTIONS;

    // A shard is one Gateway WebSocket connection to Discord
    let mut shard = Shard::new(ShardId::new(0, 1), token, intents);

    info!("Pageturn is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(ready) => {
                info!(user = %ready.user.name, "Pageturn has successfully awoken!");
                spawn_handler("ready", handle_ready(ctx.clone(), ready));
            }
            Event::MessageCreate(msg) => {
                spawn_handler("message", handle_message(ctx.clone(), msg));
            }
            Event::InteractionCreate(interaction) => {
                spawn_handler("interaction", handle_interaction(ctx.clone(), interaction));
            }
            Event::ReactionAdd(reaction) => {
                spawn_handler("reaction", handle_reaction(ctx.clone(), reaction));
            }
            _ => {} // Ignore unused events
        }
    }
    Ok(()) // Return Success, shutdown cleanly
}

/// Run a handler without blocking the gateway loop, logging its failure.
fn spawn_handler<F>(kind: &'static str, handler: F)
where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(source) = handler.await {
            error!(kind, error = ?source, "event handler failed");
        }
    });
}
