//! Glue between feature modules and the pagination engine.
//!
//! Feature modules compute their pages up front and hand them over here; the
//! paginator sends the first page and is registered for later navigation.

use std::sync::Arc;

use tracing::debug;
use twilight_model::{
    gateway::payload::incoming::InteractionCreate,
    id::{Id, marker::ChannelMarker},
};

use pageturn_core::Context;
use pageturn_utils::pagination::{
    ComponentNavigation, ComponentPaginator, InteractionSession, MessageRef, PageRenderer,
    ReactionNavigation, ReactionPaginator, schedule_reaction_cleanup, schedule_session_cleanup,
};

/// Post `pages` to a channel and register them for reaction navigation.
pub async fn present_reaction_pages<T, C>(
    ctx: &Context,
    channel_id: Id<ChannelMarker>,
    pages: Vec<T>,
    renderer: Arc<dyn PageRenderer<T, C>>,
    context: Option<C>,
) -> anyhow::Result<MessageRef>
where
    T: Send + Sync + 'static,
    C: Send + Sync + 'static,
{
    let paginator = ReactionPaginator::send(
        channel_id,
        pages,
        renderer,
        Arc::clone(&ctx.delivery),
        context,
        ctx.config.reaction_stagger,
    )
    .await?;

    let message = paginator.message();
    if paginator.total_pages() > 1 {
        debug!(
            message_id = message.message_id.get(),
            total = paginator.total_pages(),
            "registering reaction paginator"
        );
        let navigation: Arc<dyn ReactionNavigation> = Arc::new(paginator);
        ctx.registry
            .register_reaction(message.message_id, Arc::clone(&navigation))
            .await;
        schedule_reaction_cleanup(
            Arc::clone(&ctx.registry),
            message.message_id,
            navigation,
            ctx.config.reaction_ttl,
        );
    }

    Ok(message)
}

/// Answer an interaction with `pages` and register them for component navigation.
///
/// Returns `None` when the initial response could not be delivered.
pub async fn present_component_pages<T, C>(
    ctx: &Context,
    interaction: &InteractionCreate,
    pages: Vec<T>,
    renderer: Arc<dyn PageRenderer<T, C>>,
    context: Option<C>,
) -> anyhow::Result<Option<MessageRef>>
where
    T: Send + Sync + 'static,
    C: Send + Sync + 'static,
{
    let session = InteractionSession::from_interaction(interaction);
    let paginator = ComponentPaginator::new(
        session.clone(),
        pages,
        renderer,
        Arc::clone(&ctx.delivery),
        context,
    )?;

    let Some(message) = paginator.create().await? else {
        return Ok(None);
    };

    if paginator.total_pages() > 1 {
        debug!(
            message_id = message.message_id.get(),
            total = paginator.total_pages(),
            "registering component paginator"
        );
        let navigation: Arc<dyn ComponentNavigation> = Arc::new(paginator);
        ctx.registry
            .register_session(message.message_id, Arc::clone(&navigation))
            .await;
        schedule_session_cleanup(
            Arc::clone(&ctx.registry),
            Arc::clone(&ctx.delivery),
            session,
            message.message_id,
            navigation,
            ctx.config.session_ttl,
        );
    }

    Ok(Some(message))
}
