//! Replies to stale pagination controls and scheduled registry cleanup.

use std::{sync::Arc, time::Duration};

use tracing::{debug, warn};
use twilight_model::id::{Id, marker::MessageMarker};

use super::delivery::{DeliveryTarget, InteractionSession, PageDelivery};
use super::interactive::ComponentNavigation;
use super::reaction::ReactionNavigation;
use super::registry::SessionRegistry;

/// Generic message shown when a pagination session is no longer live.
pub const PAGINATION_EXPIRED_MESSAGE: &str =
    "This pagination session expired. Run the command again.";
/// Generic message shown when a pagination interaction payload is invalid.
pub const PAGINATION_INVALID_MESSAGE: &str = "Invalid pagination interaction.";

/// How long before token expiry the controls are stripped.
const CLEANUP_MARGIN: Duration = Duration::from_secs(5);

/// Respond with the standard expired pagination message.
pub async fn respond_expired(
    delivery: &dyn PageDelivery,
    session: &InteractionSession,
) -> anyhow::Result<()> {
    delivery
        .respond_ephemeral(session, PAGINATION_EXPIRED_MESSAGE)
        .await
}

/// Respond with the standard invalid pagination message.
pub async fn respond_invalid(
    delivery: &dyn PageDelivery,
    session: &InteractionSession,
) -> anyhow::Result<()> {
    delivery
        .respond_ephemeral(session, PAGINATION_INVALID_MESSAGE)
        .await
}

/// Retire a component-bound paginator shortly before its session token expires.
///
/// The registry entry is dropped and the controls stripped through the
/// original session. A paginator that has been superseded meanwhile is left
/// alone, since its message now belongs to the newer instance.
pub fn schedule_session_cleanup(
    registry: Arc<SessionRegistry>,
    delivery: Arc<dyn PageDelivery>,
    session: InteractionSession,
    message_id: Id<MessageMarker>,
    paginator: Arc<dyn ComponentNavigation>,
    ttl: Duration,
) -> tokio::task::JoinHandle<()> {
    let delay = ttl.saturating_sub(CLEANUP_MARGIN);

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        if !registry.remove_session_if(message_id, &paginator).await {
            debug!(
                message_id = message_id.get(),
                "pagination session superseded before cleanup"
            );
            return;
        }

        if let Err(source) = delivery
            .clear_controls(&DeliveryTarget::Interaction(session))
            .await
        {
            warn!(
                ?source,
                message_id = message_id.get(),
                "failed to strip expired pagination controls"
            );
        }
    })
}

/// Forget a reaction-bound paginator once `ttl` has passed.
///
/// Reactions on the message stop navigating afterwards. A paginator that has
/// been superseded meanwhile is left alone.
pub fn schedule_reaction_cleanup(
    registry: Arc<SessionRegistry>,
    message_id: Id<MessageMarker>,
    paginator: Arc<dyn ReactionNavigation>,
    ttl: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;

        if registry.remove_reaction_if(message_id, &paginator).await {
            debug!(message_id = message_id.get(), "reaction paginator expired");
        }
    })
}
