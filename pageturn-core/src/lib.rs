use std::sync::{Arc, OnceLock};

use twilight_http::Client;
use twilight_model::id::{Id, marker::UserMarker};

use pageturn_utils::pagination::{HttpDelivery, PageDelivery, SessionRegistry};

/// Environment-driven bot configuration.
pub mod config;

pub use config::Config;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    /// Live paginators, keyed by the message they control.
    pub registry: Arc<SessionRegistry>,
    pub delivery: Arc<dyn PageDelivery>,
    pub config: Arc<Config>,
    bot_user_id: Arc<OnceLock<Id<UserMarker>>>,
}

impl Context {
    /// Create a new application context with an empty session registry.
    pub fn new(http: Arc<Client>, config: Config) -> Self {
        let delivery = Arc::new(HttpDelivery::new(Arc::clone(&http)));

        Self {
            http,
            registry: Arc::new(SessionRegistry::new()),
            delivery,
            config: Arc::new(config),
            bot_user_id: Arc::new(OnceLock::new()),
        }
    }

    /// Record the bot's own user once the gateway reports ready.
    pub fn set_bot_user_id(&self, user_id: Id<UserMarker>) {
        let _ = self.bot_user_id.set(user_id);
    }

    /// The bot's own user, once known.
    pub fn bot_user_id(&self) -> Option<Id<UserMarker>> {
        self.bot_user_id.get().copied()
    }
}
