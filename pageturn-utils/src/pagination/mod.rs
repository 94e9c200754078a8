//! Stable facade for the pagination engine used by feature modules.

use std::time::Duration;

/// Platform cap on select-menu options; callers pre-chunk to stay within it.
pub const MAX_SELECT_OPTIONS: usize = 25;
/// Lifetime of an interaction session's continuation token.
pub const SESSION_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);
/// Default delay between attaching the two navigation emoji.
pub const DEFAULT_REACTION_STAGGER: Duration = Duration::from_millis(750);
/// Default time a reaction-bound paginator stays registered.
pub const DEFAULT_REACTION_TTL: Duration = Duration::from_secs(60 * 60);
/// Emoji requesting the previous page.
pub const PREVIOUS_EMOJI: &str = "\u{2b05}\u{fe0f}";
/// Emoji requesting the next page.
pub const NEXT_EMOJI: &str = "\u{27a1}\u{fe0f}";

mod components;
pub mod control;
pub mod delivery;
pub mod dispatch;
mod error;
mod interactive;
mod page;
mod reaction;
mod registry;
mod render;
pub mod respond;

pub use components::build_pagination_rows;
pub use control::{Activation, is_pagination_control};
pub use delivery::{DeliveryTarget, HttpDelivery, InteractionSession, MessageRef, PageDelivery};
pub use dispatch::{
    dispatch_activation, dispatch_component, dispatch_emoji, dispatch_reaction, reaction_move,
};
pub use error::{BoxError, PaginationError};
pub use interactive::{ComponentNavigation, ComponentPaginator};
pub use page::{Cursor, PageMove, chunk_pages, page_window, step, total_pages};
pub use reaction::{ReactionNavigation, ReactionPaginator};
pub use registry::SessionRegistry;
pub use render::{OutgoingMessage, PageAttachment, PageRenderer, RenderedPage};
pub use respond::{schedule_reaction_cleanup, schedule_session_cleanup};
