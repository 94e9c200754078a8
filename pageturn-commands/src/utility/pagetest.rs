use std::sync::Arc;

use async_trait::async_trait;
use twilight_model::{
    application::command::{Command, CommandType},
    gateway::payload::incoming::{InteractionCreate, MessageCreate},
    id::{Id, marker::UserMarker},
};
use twilight_util::builder::command::CommandBuilder;

use crate::CommandMeta;
use crate::present::{present_component_pages, present_reaction_pages};
use pageturn_core::Context;
use pageturn_utils::embed::build_paginated_embed;
use pageturn_utils::pagination::{PageRenderer, RenderedPage, chunk_pages};

pub const META: CommandMeta = CommandMeta {
    name: "pagetest",
    desc: "Test reaction pagination behavior.",
    category: "utility",
    usage: "!pagetest",
};

pub const SLASH_META: CommandMeta = CommandMeta {
    name: "pagetest",
    desc: "Test button and menu pagination behavior.",
    category: "utility",
    usage: "/pagetest",
};

const ITEMS_PER_PAGE: usize = 5;

/// Send the sample list as a reaction-navigated message.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    present_reaction_pages(
        &ctx,
        msg.channel_id,
        sample_pages(),
        sample_renderer(),
        Some(msg.author.id),
    )
    .await?;

    Ok(())
}

/// Answer the `/pagetest` slash command with a component-navigated response.
pub async fn run_slash(ctx: Context, interaction: Box<InteractionCreate>) -> anyhow::Result<()> {
    present_component_pages(
        &ctx,
        &interaction,
        sample_pages(),
        sample_renderer(),
        interaction.author_id(),
    )
    .await?;

    Ok(())
}

/// Slash command definition registered on ready.
pub fn slash_command() -> Command {
    CommandBuilder::new(SLASH_META.name, SLASH_META.desc, CommandType::ChatInput).build()
}

fn sample_renderer() -> Arc<dyn PageRenderer<Vec<String>, Id<UserMarker>>> {
    Arc::new(SampleListRenderer)
}

/// Renders a chunk of sample items, addressed to the requesting user.
pub struct SampleListRenderer;

#[async_trait]
impl PageRenderer<Vec<String>, Id<UserMarker>> for SampleListRenderer {
    async fn render(
        &self,
        page: usize,
        total: usize,
        data: &Vec<String>,
        context: Option<&Id<UserMarker>>,
    ) -> anyhow::Result<RenderedPage> {
        let mut description = format!("- {}", data.join("\n- "));
        if let Some(user_id) = context {
            description.push_str(&format!("\n\nRequested by <@{user_id}>"));
        }

        let embed = build_paginated_embed("Pagination Test", description, page, total)?;
        Ok(RenderedPage::embed(embed))
    }
}

pub fn sample_pages() -> Vec<Vec<String>> {
    let items: Vec<String> = (1..=24)
        .map(|index| format!("Sample pagination item #{index}"))
        .collect();

    chunk_pages(&items, ITEMS_PER_PAGE)
}
