//! Lookup from bound message to the live paginator controlling it.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use twilight_model::id::{Id, marker::MessageMarker};

use super::interactive::ComponentNavigation;
use super::reaction::ReactionNavigation;

type ReactionMap = HashMap<Id<MessageMarker>, Arc<dyn ReactionNavigation>>;
type SessionMap = HashMap<Id<MessageMarker>, Arc<dyn ComponentNavigation>>;

/// Live paginators keyed by the message they control.
///
/// Registering a paginator for a message that already has one supersedes
/// the old instance; it is dropped once nothing else holds it.
#[derive(Default)]
pub struct SessionRegistry {
    reactions: RwLock<ReactionMap>,
    sessions: RwLock<SessionMap>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reaction-bound paginator, returning the one it superseded.
    pub async fn register_reaction(
        &self,
        message_id: Id<MessageMarker>,
        paginator: Arc<dyn ReactionNavigation>,
    ) -> Option<Arc<dyn ReactionNavigation>> {
        self.reactions.write().await.insert(message_id, paginator)
    }

    /// Remove a reaction-bound paginator only if `expected` is still the
    /// registered instance.
    pub async fn remove_reaction_if(
        &self,
        message_id: Id<MessageMarker>,
        expected: &Arc<dyn ReactionNavigation>,
    ) -> bool {
        let mut reactions = self.reactions.write().await;
        let is_current = reactions
            .get(&message_id)
            .is_some_and(|current| same_instance(current, expected));

        if is_current {
            reactions.remove(&message_id);
        }

        is_current
    }

    pub async fn lookup_reaction(
        &self,
        message_id: Id<MessageMarker>,
    ) -> Option<Arc<dyn ReactionNavigation>> {
        self.reactions.read().await.get(&message_id).cloned()
    }

    /// Register a component-bound paginator, returning the one it superseded.
    pub async fn register_session(
        &self,
        message_id: Id<MessageMarker>,
        paginator: Arc<dyn ComponentNavigation>,
    ) -> Option<Arc<dyn ComponentNavigation>> {
        self.sessions.write().await.insert(message_id, paginator)
    }

    pub async fn lookup_session(
        &self,
        message_id: Id<MessageMarker>,
    ) -> Option<Arc<dyn ComponentNavigation>> {
        self.sessions.read().await.get(&message_id).cloned()
    }

    /// Remove a component-bound paginator only if `expected` is still the
    /// registered instance.
    pub async fn remove_session_if(
        &self,
        message_id: Id<MessageMarker>,
        expected: &Arc<dyn ComponentNavigation>,
    ) -> bool {
        let mut sessions = self.sessions.write().await;
        let is_current = sessions
            .get(&message_id)
            .is_some_and(|current| same_instance(current, expected));

        if is_current {
            sessions.remove(&message_id);
        }

        is_current
    }

    /// Number of live paginators of both kinds.
    pub async fn len(&self) -> usize {
        self.reactions.read().await.len() + self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn same_instance<T: ?Sized>(left: &Arc<T>, right: &Arc<T>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(left), Arc::as_ptr(right))
}
