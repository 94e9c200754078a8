use std::sync::Arc;

use async_trait::async_trait;
use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::present::present_reaction_pages;
use crate::{COMMANDS, CommandMeta};
use pageturn_core::Context;
use pageturn_utils::embed::build_paginated_embed_with_footer_note;
use pageturn_utils::pagination::{PageRenderer, RenderedPage};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands, one per page.",
    category: "utility",
    usage: "!help",
};

/// Render the command catalog as a reaction-navigated message.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let pages = sorted_commands();
    if pages.is_empty() {
        ctx.http
            .create_message(msg.channel_id)
            .content("No commands are registered.")
            .await?;
        return Ok(());
    }

    let renderer: Arc<dyn PageRenderer<&'static CommandMeta>> = Arc::new(HelpRenderer);
    present_reaction_pages(&ctx, msg.channel_id, pages, renderer, None).await?;

    Ok(())
}

/// Renders one command's metadata per page.
pub struct HelpRenderer;

#[async_trait]
impl PageRenderer<&'static CommandMeta> for HelpRenderer {
    async fn render(
        &self,
        page: usize,
        total: usize,
        data: &&'static CommandMeta,
        _context: Option<&()>,
    ) -> anyhow::Result<RenderedPage> {
        let description = format!("{}\n\nUsage: `{}`", data.desc, data.usage);
        let title = format!("Help: {}", data.name);
        let embed = build_paginated_embed_with_footer_note(
            &title,
            description,
            page,
            total,
            Some(data.category),
        )?;

        Ok(RenderedPage::embed(embed))
    }
}

fn sorted_commands() -> Vec<&'static CommandMeta> {
    let mut commands: Vec<&'static CommandMeta> = COMMANDS.iter().collect();

    commands.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
            .then_with(|| left.usage.cmp(right.usage))
    });

    commands
}
