//! Routing of navigation events to the paginator registered for their message.

use tracing::debug;
use twilight_model::{
    application::interaction::InteractionData,
    channel::message::EmojiReactionType,
    gateway::{GatewayReaction, payload::incoming::InteractionCreate},
    id::{
        Id,
        marker::{MessageMarker, UserMarker},
    },
};

use super::control::{Activation, is_pagination_control};
use super::delivery::{InteractionSession, PageDelivery};
use super::page::PageMove;
use super::registry::SessionRegistry;
use super::respond::{respond_expired, respond_invalid};
use super::{NEXT_EMOJI, PREVIOUS_EMOJI};

const VARIATION_SELECTOR: char = '\u{fe0f}';

/// Map a reaction emoji to the move it requests, if any.
pub fn reaction_move(emoji: &EmojiReactionType) -> Option<PageMove> {
    let EmojiReactionType::Unicode { name } = emoji else {
        return None;
    };

    let name = name.trim_end_matches(VARIATION_SELECTOR);
    if name == PREVIOUS_EMOJI.trim_end_matches(VARIATION_SELECTOR) {
        Some(PageMove::Previous)
    } else if name == NEXT_EMOJI.trim_end_matches(VARIATION_SELECTOR) {
        Some(PageMove::Next)
    } else {
        None
    }
}

/// Dispatch a gateway reaction to the paginator bound to its message.
///
/// Returns `false` when the reaction is not a navigation request for a live
/// paginator, including the bot's own emoji.
pub async fn dispatch_reaction(
    registry: &SessionRegistry,
    reaction: &GatewayReaction,
    bot_user_id: Option<Id<UserMarker>>,
) -> anyhow::Result<bool> {
    dispatch_emoji(
        registry,
        reaction.message_id,
        reaction.user_id,
        &reaction.emoji,
        bot_user_id,
    )
    .await
}

/// Dispatch one emoji added by `user_id` to the message `message_id`.
pub async fn dispatch_emoji(
    registry: &SessionRegistry,
    message_id: Id<MessageMarker>,
    user_id: Id<UserMarker>,
    emoji: &EmojiReactionType,
    bot_user_id: Option<Id<UserMarker>>,
) -> anyhow::Result<bool> {
    if bot_user_id == Some(user_id) {
        return Ok(false);
    }

    let Some(page_move) = reaction_move(emoji) else {
        return Ok(false);
    };

    let Some(paginator) = registry.lookup_reaction(message_id).await else {
        return Ok(false);
    };

    debug!(
        message_id = message_id.get(),
        user_id = user_id.get(),
        ?page_move,
        "dispatching reaction navigation"
    );

    match page_move {
        PageMove::Next => paginator.next().await?,
        PageMove::Previous => paginator.previous().await?,
        PageMove::Select(_) => return Ok(false),
    }

    Ok(true)
}

/// Dispatch a gateway interaction to the paginator bound to its message.
///
/// Returns `false` for anything but a message component activation.
pub async fn dispatch_activation(
    delivery: &dyn PageDelivery,
    registry: &SessionRegistry,
    interaction: &InteractionCreate,
) -> anyhow::Result<bool> {
    let Some(InteractionData::MessageComponent(component_data)) = interaction.data.as_ref() else {
        return Ok(false);
    };

    let session = InteractionSession::from_interaction(interaction);
    let activation = Activation::from_component(component_data);
    dispatch_component(delivery, registry, &session, &activation).await
}

/// Dispatch a component activation arriving through `session`.
///
/// Returns:
/// - `false` when the activation is not a pagination control,
/// - `true` when it was handled, including stale sessions answered with an
///   ephemeral notice.
///
/// Unrecognized pagination moves propagate as errors without any response.
pub async fn dispatch_component(
    delivery: &dyn PageDelivery,
    registry: &SessionRegistry,
    session: &InteractionSession,
    activation: &Activation,
) -> anyhow::Result<bool> {
    if !is_pagination_control(&activation.control_id) {
        return Ok(false);
    }

    let Some(message) = session.message else {
        respond_invalid(delivery, session).await?;
        return Ok(true);
    };

    let Some(paginator) = registry.lookup_session(message.message_id).await else {
        respond_expired(delivery, session).await?;
        return Ok(true);
    };

    paginator.handle_page(session, activation).await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unicode(name: &str) -> EmojiReactionType {
        EmojiReactionType::Unicode {
            name: name.to_owned(),
        }
    }

    #[test]
    fn navigation_emoji_map_to_moves() {
        assert_eq!(reaction_move(&unicode(PREVIOUS_EMOJI)), Some(PageMove::Previous));
        assert_eq!(reaction_move(&unicode(NEXT_EMOJI)), Some(PageMove::Next));
    }

    #[test]
    fn variation_selector_is_ignored() {
        assert_eq!(reaction_move(&unicode("\u{2b05}")), Some(PageMove::Previous));
        assert_eq!(reaction_move(&unicode("\u{27a1}\u{fe0f}")), Some(PageMove::Next));
    }

    #[test]
    fn other_emoji_are_not_navigation() {
        assert_eq!(reaction_move(&unicode("👍")), None);
        assert_eq!(
            reaction_move(&EmojiReactionType::Custom {
                animated: false,
                id: Id::new(42),
                name: Some("next".to_owned()),
            }),
            None
        );
    }
}
