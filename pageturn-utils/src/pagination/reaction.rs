//! Paginator bound to a channel message and driven by emoji reactions.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use twilight_model::id::{Id, marker::ChannelMarker};

use super::delivery::{DeliveryTarget, MessageRef, PageDelivery};
use super::error::PaginationError;
use super::page::{Cursor, PageMove};
use super::render::{PageRenderer, RenderedPage};
use super::{NEXT_EMOJI, PREVIOUS_EMOJI};

/// Navigation surface of a reaction-bound paginator, as seen by dispatch.
#[async_trait]
pub trait ReactionNavigation: Send + Sync {
    async fn next(&self) -> Result<(), PaginationError>;

    async fn previous(&self) -> Result<(), PaginationError>;

    /// Zero-based index of the page currently shown.
    fn current_index(&self) -> usize;

    fn total_pages(&self) -> usize;
}

/// Cursor over pre-computed pages shown in one channel message.
pub struct ReactionPaginator<T, C = ()> {
    pages: Vec<T>,
    cursor: Cursor,
    renderer: Arc<dyn PageRenderer<T, C>>,
    delivery: Arc<dyn PageDelivery>,
    message: MessageRef,
    context: Option<C>,
    /// Serializes transitions; the cursor itself is read without it.
    in_flight: Mutex<()>,
}

impl<T, C> ReactionPaginator<T, C>
where
    T: Send + Sync + 'static,
    C: Send + Sync + 'static,
{
    /// Bind a paginator to a message that already shows the first page.
    ///
    /// When more than one page exists and a runtime is live, the navigation
    /// emoji are attached in the background, `stagger` apart. Failing to
    /// attach them is logged and otherwise ignored.
    pub fn new(
        message: MessageRef,
        pages: Vec<T>,
        renderer: Arc<dyn PageRenderer<T, C>>,
        delivery: Arc<dyn PageDelivery>,
        context: Option<C>,
        stagger: Duration,
    ) -> Result<Self, PaginationError> {
        let cursor = Cursor::new(pages.len())?;

        if cursor.total() > 1 && tokio::runtime::Handle::try_current().is_ok() {
            spawn_navigation_emoji(Arc::clone(&delivery), message, stagger);
        }

        Ok(Self {
            pages,
            cursor,
            renderer,
            delivery,
            message,
            context,
            in_flight: Mutex::new(()),
        })
    }

    /// Render the first page into a new channel message and bind to it.
    pub async fn send(
        channel_id: Id<ChannelMarker>,
        pages: Vec<T>,
        renderer: Arc<dyn PageRenderer<T, C>>,
        delivery: Arc<dyn PageDelivery>,
        context: Option<C>,
        stagger: Duration,
    ) -> Result<Self, PaginationError> {
        let first = pages.first().ok_or(PaginationError::EmptyPages)?;
        let rendered = renderer
            .render(1, pages.len(), first, context.as_ref())
            .await
            .map_err(|source| PaginationError::render(1, source))?;

        let message = delivery
            .send_initial(&DeliveryTarget::Channel(channel_id), &rendered)
            .await
            .map_err(|source| PaginationError::delivery(1, source))?;

        Self::new(message, pages, renderer, delivery, context, stagger)
    }

    /// The message this paginator controls.
    pub fn message(&self) -> MessageRef {
        self.message
    }

    async fn transition(&self, page_move: PageMove) -> Result<(), PaginationError> {
        let _serialized = self.in_flight.lock().await;

        let index = self.cursor.apply(page_move)?;
        let page = index + 1;
        debug!(
            message_id = self.message.message_id.get(),
            page,
            total = self.cursor.total(),
            "reaction pagination transition"
        );

        let rendered = self.render(index).await?;
        self.delivery
            .send_update(&DeliveryTarget::Message(self.message), &rendered)
            .await
            .map_err(|source| PaginationError::delivery(page, source))?;

        Ok(())
    }

    async fn render(&self, index: usize) -> Result<RenderedPage, PaginationError> {
        let page = index + 1;
        self.renderer
            .render(
                page,
                self.cursor.total(),
                &self.pages[index],
                self.context.as_ref(),
            )
            .await
            .map_err(|source| PaginationError::render(page, source))
    }
}

#[async_trait]
impl<T, C> ReactionNavigation for ReactionPaginator<T, C>
where
    T: Send + Sync + 'static,
    C: Send + Sync + 'static,
{
    async fn next(&self) -> Result<(), PaginationError> {
        self.transition(PageMove::Next).await
    }

    async fn previous(&self) -> Result<(), PaginationError> {
        self.transition(PageMove::Previous).await
    }

    fn current_index(&self) -> usize {
        self.cursor.index()
    }

    fn total_pages(&self) -> usize {
        self.cursor.total()
    }
}

fn spawn_navigation_emoji(delivery: Arc<dyn PageDelivery>, message: MessageRef, stagger: Duration) {
    tokio::spawn(async move {
        if let Err(source) = delivery.attach_reaction(message, PREVIOUS_EMOJI).await {
            warn!(
                ?source,
                message_id = message.message_id.get(),
                "failed to attach previous emoji"
            );
        }

        tokio::time::sleep(stagger).await;

        if let Err(source) = delivery.attach_reaction(message, NEXT_EMOJI).await {
            warn!(
                ?source,
                message_id = message.message_id.get(),
                "failed to attach next emoji"
            );
        }
    });
}
