//! Paginator bound to an interaction session and driven by component activations.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::components::build_pagination_rows;
use super::control::Activation;
use super::delivery::{DeliveryTarget, InteractionSession, MessageRef, PageDelivery};
use super::error::PaginationError;
use super::page::Cursor;
use super::render::{PageRenderer, RenderedPage};

/// Navigation surface of a component-bound paginator, as seen by dispatch.
#[async_trait]
pub trait ComponentNavigation: Send + Sync {
    /// Apply the move encoded in `activation` and update the message in place
    /// through the activation's own session.
    async fn handle_page(
        &self,
        activation_session: &InteractionSession,
        activation: &Activation,
    ) -> Result<(), PaginationError>;

    /// Zero-based index of the page currently shown.
    fn current_index(&self) -> usize;

    fn total_pages(&self) -> usize;
}

/// Cursor over pre-computed pages shown as an interaction response.
///
/// The whole component tree is rebuilt on every transition so the select
/// menu's default option always tracks the current page.
pub struct ComponentPaginator<T, C = ()> {
    pages: Vec<T>,
    cursor: Cursor,
    renderer: Arc<dyn PageRenderer<T, C>>,
    delivery: Arc<dyn PageDelivery>,
    session: InteractionSession,
    context: Option<C>,
    /// Serializes transitions; the cursor itself is read without it.
    in_flight: Mutex<()>,
}

impl<T, C> ComponentPaginator<T, C>
where
    T: Send + Sync + 'static,
    C: Send + Sync + 'static,
{
    /// Bind a paginator to the session whose main reply it will complete.
    pub fn new(
        session: InteractionSession,
        pages: Vec<T>,
        renderer: Arc<dyn PageRenderer<T, C>>,
        delivery: Arc<dyn PageDelivery>,
        context: Option<C>,
    ) -> Result<Self, PaginationError> {
        let cursor = Cursor::new(pages.len())?;

        Ok(Self {
            pages,
            cursor,
            renderer,
            delivery,
            session,
            context,
            in_flight: Mutex::new(()),
        })
    }

    /// The session this paginator answered.
    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    /// Render the current page and send it as the session's initial response.
    ///
    /// Returns the resulting message, or `None` when delivery failed.
    pub async fn create(&self) -> Result<Option<MessageRef>, PaginationError> {
        let _serialized = self.in_flight.lock().await;

        let rendered = self.render_with_controls(self.cursor.index()).await?;
        let target = DeliveryTarget::Interaction(self.session.clone());

        match self.delivery.send_initial(&target, &rendered).await {
            Ok(message) => Ok(Some(message)),
            Err(source) => {
                warn!(
                    ?source,
                    interaction_id = self.session.interaction_id.get(),
                    "failed to send initial paginated response"
                );
                Ok(None)
            }
        }
    }

    async fn render_with_controls(&self, index: usize) -> Result<RenderedPage, PaginationError> {
        let page = index + 1;
        let total = self.cursor.total();
        let mut rendered = self
            .renderer
            .render(page, total, &self.pages[index], self.context.as_ref())
            .await
            .map_err(|source| PaginationError::render(page, source))?;

        rendered
            .components
            .extend(build_pagination_rows(index, total));

        Ok(rendered)
    }
}

#[async_trait]
impl<T, C> ComponentNavigation for ComponentPaginator<T, C>
where
    T: Send + Sync + 'static,
    C: Send + Sync + 'static,
{
    async fn handle_page(
        &self,
        activation_session: &InteractionSession,
        activation: &Activation,
    ) -> Result<(), PaginationError> {
        let page_move = activation.page_move()?;

        let _serialized = self.in_flight.lock().await;

        let index = self.cursor.apply(page_move)?;
        let page = index + 1;
        debug!(
            interaction_id = activation_session.interaction_id.get(),
            control_id = %activation.control_id,
            page,
            total = self.cursor.total(),
            "component pagination transition"
        );

        let rendered = self.render_with_controls(index).await?;
        let target = DeliveryTarget::Interaction(activation_session.clone());
        self.delivery
            .send_update(&target, &rendered)
            .await
            .map_err(|source| PaginationError::delivery(page, source))?;

        Ok(())
    }

    fn current_index(&self) -> usize {
        self.cursor.index()
    }

    fn total_pages(&self) -> usize {
        self.cursor.total()
    }
}
