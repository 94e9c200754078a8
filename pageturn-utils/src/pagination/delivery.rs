//! Outbound delivery seam and its Twilight HTTP implementation.

use std::sync::Arc;

use anyhow::bail;
use async_trait::async_trait;
use twilight_http::{Client, request::channel::reaction::RequestReactionType};
use twilight_model::{
    channel::{
        Message,
        message::{MessageFlags, component::Component},
    },
    gateway::payload::incoming::InteractionCreate,
    http::interaction::{InteractionResponse, InteractionResponseData, InteractionResponseType},
    id::{
        Id,
        marker::{ApplicationMarker, ChannelMarker, InteractionMarker, MessageMarker},
    },
};
use twilight_util::builder::InteractionResponseDataBuilder;

use super::render::RenderedPage;

/// Location of a message the bot has sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
}

impl MessageRef {
    pub fn new(channel_id: Id<ChannelMarker>, message_id: Id<MessageMarker>) -> Self {
        Self {
            channel_id,
            message_id,
        }
    }
}

impl From<&Message> for MessageRef {
    fn from(message: &Message) -> Self {
        Self::new(message.channel_id, message.id)
    }
}

/// A platform-issued interaction session.
///
/// The token is valid for a fixed window after issuance; see
/// [`SESSION_TOKEN_TTL`](super::SESSION_TOKEN_TTL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionSession {
    pub application_id: Id<ApplicationMarker>,
    pub interaction_id: Id<InteractionMarker>,
    pub token: String,
    /// Message the interaction originated from, when it came from a component.
    pub message: Option<MessageRef>,
}

impl InteractionSession {
    pub fn from_interaction(interaction: &InteractionCreate) -> Self {
        Self {
            application_id: interaction.application_id,
            interaction_id: interaction.id,
            token: interaction.token.clone(),
            message: interaction.message.as_ref().map(MessageRef::from),
        }
    }
}

/// Where a rendered page is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// A channel that does not yet hold the message.
    Channel(Id<ChannelMarker>),
    /// An existing channel message.
    Message(MessageRef),
    /// An interaction session awaiting its response.
    Interaction(InteractionSession),
}

/// Outbound side of the pagination engine.
///
/// `send_initial` and `send_update` are distinct protocol operations: the
/// first completes a session's main reply or posts a fresh message, the second
/// edits a message that already exists in place.
#[async_trait]
pub trait PageDelivery: Send + Sync {
    async fn send_initial(
        &self,
        target: &DeliveryTarget,
        page: &RenderedPage,
    ) -> anyhow::Result<MessageRef>;

    async fn send_update(
        &self,
        target: &DeliveryTarget,
        page: &RenderedPage,
    ) -> anyhow::Result<MessageRef>;

    async fn attach_reaction(&self, message: MessageRef, emoji: &str) -> anyhow::Result<()>;

    /// Strip interactive components from a delivered message.
    async fn clear_controls(&self, target: &DeliveryTarget) -> anyhow::Result<()>;

    /// Answer a session with a message only the invoking user can see.
    async fn respond_ephemeral(
        &self,
        session: &InteractionSession,
        content: &str,
    ) -> anyhow::Result<()>;
}

/// [`PageDelivery`] backed by the shared Twilight HTTP client.
#[derive(Clone)]
pub struct HttpDelivery {
    http: Arc<Client>,
}

impl HttpDelivery {
    pub fn new(http: Arc<Client>) -> Self {
        Self { http }
    }

    async fn respond(
        &self,
        session: &InteractionSession,
        kind: InteractionResponseType,
        data: InteractionResponseData,
    ) -> anyhow::Result<()> {
        let response = InteractionResponse {
            kind,
            data: Some(data),
        };

        self.http
            .interaction(session.application_id)
            .create_response(session.interaction_id, &session.token, &response)
            .await?;

        Ok(())
    }

    async fn original_response(&self, session: &InteractionSession) -> anyhow::Result<MessageRef> {
        let message = self
            .http
            .interaction(session.application_id)
            .response(&session.token)
            .await?
            .model()
            .await?;

        Ok(MessageRef::from(&message))
    }
}

#[async_trait]
impl PageDelivery for HttpDelivery {
    async fn send_initial(
        &self,
        target: &DeliveryTarget,
        page: &RenderedPage,
    ) -> anyhow::Result<MessageRef> {
        match target {
            DeliveryTarget::Channel(channel_id) => {
                let uploads = page.uploads();
                let mut request = self
                    .http
                    .create_message(*channel_id)
                    .embeds(page.body.embeds())
                    .components(&page.components)
                    .attachments(&uploads);
                if let Some(content) = page.body.content() {
                    request = request.content(content);
                }

                let message = request.await?.model().await?;
                Ok(MessageRef::from(&message))
            }
            DeliveryTarget::Interaction(session) => {
                let kind = InteractionResponseType::ChannelMessageWithSource;
                self.respond(session, kind, page_response_data(kind, page))
                    .await?;
                self.original_response(session).await
            }
            DeliveryTarget::Message(message) => {
                bail!(
                    "message {} already exists; initial delivery needs a channel or session",
                    message.message_id
                )
            }
        }
    }

    async fn send_update(
        &self,
        target: &DeliveryTarget,
        page: &RenderedPage,
    ) -> anyhow::Result<MessageRef> {
        match target {
            DeliveryTarget::Message(message) => {
                let uploads = page.uploads();
                self.http
                    .update_message(message.channel_id, message.message_id)
                    .content(page.body.content())
                    .embeds(Some(page.body.embeds()))
                    .components(Some(&page.components))
                    .attachments(&uploads)
                    .await?;
                Ok(*message)
            }
            DeliveryTarget::Interaction(session) => {
                let kind = InteractionResponseType::UpdateMessage;
                self.respond(session, kind, page_response_data(kind, page))
                    .await?;
                match session.message {
                    Some(message) => Ok(message),
                    None => self.original_response(session).await,
                }
            }
            DeliveryTarget::Channel(channel_id) => {
                bail!("channel {channel_id} has no message to update")
            }
        }
    }

    async fn attach_reaction(&self, message: MessageRef, emoji: &str) -> anyhow::Result<()> {
        self.http
            .create_reaction(
                message.channel_id,
                message.message_id,
                &RequestReactionType::Unicode { name: emoji },
            )
            .await?;

        Ok(())
    }

    async fn clear_controls(&self, target: &DeliveryTarget) -> anyhow::Result<()> {
        let empty_components: [Component; 0] = [];
        match target {
            DeliveryTarget::Message(message) => {
                self.http
                    .update_message(message.channel_id, message.message_id)
                    .components(Some(&empty_components))
                    .await?;
            }
            DeliveryTarget::Interaction(session) => {
                self.http
                    .interaction(session.application_id)
                    .update_response(&session.token)
                    .components(Some(&empty_components))
                    .await?;
            }
            DeliveryTarget::Channel(channel_id) => {
                bail!("channel {channel_id} has no message to clear")
            }
        }

        Ok(())
    }

    async fn respond_ephemeral(
        &self,
        session: &InteractionSession,
        content: &str,
    ) -> anyhow::Result<()> {
        let data = InteractionResponseDataBuilder::new()
            .content(content)
            .flags(MessageFlags::EPHEMERAL)
            .build();

        self.respond(session, InteractionResponseType::ChannelMessageWithSource, data)
            .await
    }
}

/// Build the response payload carrying `page`.
///
/// An in-place update always sets the content, so a page without text
/// clears whatever the previous page showed.
fn page_response_data(
    kind: InteractionResponseType,
    page: &RenderedPage,
) -> InteractionResponseData {
    let mut data = InteractionResponseDataBuilder::new()
        .embeds(page.body.embeds().to_vec())
        .components(page.components.clone())
        .attachments(page.uploads());

    match (kind, page.body.content()) {
        (_, Some(content)) => data = data.content(content),
        (InteractionResponseType::UpdateMessage, None) => data = data.content(String::new()),
        _ => {}
    }

    data.build()
}

#[cfg(test)]
mod tests {
    use twilight_util::builder::embed::EmbedBuilder;

    use super::*;
    use crate::pagination::render::OutgoingMessage;

    fn embed_page() -> RenderedPage {
        RenderedPage::embed(EmbedBuilder::new().title("page").build())
    }

    #[test]
    fn update_without_text_clears_previous_content() {
        let data = page_response_data(InteractionResponseType::UpdateMessage, &embed_page());

        assert_eq!(data.content.as_deref(), Some(""));
        assert_eq!(data.embeds.map(|embeds| embeds.len()), Some(1));
    }

    #[test]
    fn update_with_text_sends_it() {
        let page = RenderedPage::new(OutgoingMessage::ContentWithEmbeds {
            content: "hello".to_owned(),
            embeds: vec![],
        });
        let data = page_response_data(InteractionResponseType::UpdateMessage, &page);

        assert_eq!(data.content.as_deref(), Some("hello"));
    }

    #[test]
    fn initial_response_without_text_omits_content() {
        let data =
            page_response_data(InteractionResponseType::ChannelMessageWithSource, &embed_page());

        assert_eq!(data.content, None);
    }
}
