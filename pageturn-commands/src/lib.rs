pub mod present;
pub mod utility;

use tracing::info;
use twilight_model::{
    application::interaction::InteractionData,
    gateway::payload::incoming::{InteractionCreate, MessageCreate, ReactionAdd, Ready},
};

use pageturn_core::Context;
use pageturn_utils::COMMAND_PREFIX;
use pageturn_utils::pagination::{dispatch_activation, dispatch_reaction, is_pagination_control};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InteractionRoute {
    PagetestCommand,
    Pagination,
}

fn route_interaction(data: &InteractionData) -> Option<InteractionRoute> {
    match data {
        InteractionData::ApplicationCommand(command)
            if command.name == utility::pagetest::SLASH_META.name =>
        {
            Some(InteractionRoute::PagetestCommand)
        }
        InteractionData::MessageComponent(component)
            if is_pagination_control(&component.custom_id) =>
        {
            Some(InteractionRoute::Pagination)
        }
        _ => None,
    }
}

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::pagetest::META,
    utility::pagetest::SLASH_META,
    // Add new commands here
];

/// Record the bot identity and register slash commands.
pub async fn handle_ready(ctx: Context, ready: Ready) -> anyhow::Result<()> {
    ctx.set_bot_user_id(ready.user.id);

    if ctx.config.register_commands {
        let commands = [utility::pagetest::slash_command()];
        ctx.http
            .interaction(ready.application.id)
            .set_global_commands(&commands)
            .await?;
        info!(count = commands.len(), "registered global slash commands");
    }

    Ok(())
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.trim();
    let Some(content) = content.strip_prefix(COMMAND_PREFIX) else {
        return Ok(());
    };

    let cmd = content
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match cmd.as_str() {
        "help" => utility::help::run(ctx.clone(), msg).await?,
        "pagetest" => utility::pagetest::run(ctx.clone(), msg).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    let Some(route) = interaction.data.as_ref().and_then(route_interaction) else {
        return Ok(());
    };

    match route {
        InteractionRoute::PagetestCommand => {
            utility::pagetest::run_slash(ctx.clone(), interaction).await?;
        }
        InteractionRoute::Pagination => {
            let _handled =
                dispatch_activation(ctx.delivery.as_ref(), &ctx.registry, &interaction).await?;
        }
    }

    Ok(())
}

pub async fn handle_reaction(ctx: Context, reaction: Box<ReactionAdd>) -> anyhow::Result<()> {
    let _handled = dispatch_reaction(&ctx.registry, &reaction.0, ctx.bot_user_id()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use twilight_model::gateway::event::Event;

    use super::*;

    fn ready_payload(event: Event) -> Option<Ready> {
        match event {
            Event::Ready(ready) => Some(ready),
            _ => None,
        }
    }

    fn assert_handler<P, F, Fut>(_payload: fn(Event) -> Option<P>, _handler: F)
    where
        F: Fn(Context, P) -> Fut,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
    }

    #[test]
    fn ready_handler_takes_the_gateway_payload_as_delivered() {
        assert_handler(ready_payload, handle_ready);
        assert!(ready_payload(Event::GatewayHeartbeatAck).is_none());
    }
}
