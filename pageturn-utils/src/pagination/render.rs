//! Page renderer contract and the rendered-page shape it produces.

use async_trait::async_trait;
use twilight_model::{
    channel::message::{component::Component, embed::Embed},
    http::attachment::Attachment,
};

/// Message body produced for a single page.
#[derive(Debug, Clone, PartialEq)]
pub enum OutgoingMessage {
    /// Plain text only.
    Content(String),
    /// One or more embeds without text.
    Embeds(Vec<Embed>),
    /// Text alongside embeds.
    ContentWithEmbeds { content: String, embeds: Vec<Embed> },
}

impl OutgoingMessage {
    /// Text content, if this body carries any.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Content(content) | Self::ContentWithEmbeds { content, .. } => Some(content),
            Self::Embeds(_) => None,
        }
    }

    /// Embeds carried by this body; empty for text-only messages.
    pub fn embeds(&self) -> &[Embed] {
        match self {
            Self::Embeds(embeds) | Self::ContentWithEmbeds { embeds, .. } => embeds,
            Self::Content(_) => &[],
        }
    }
}

/// File uploaded alongside a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAttachment {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl PageAttachment {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Convert into the upload form expected by the HTTP client.
    pub fn to_upload(&self) -> Attachment {
        Attachment::from_bytes(self.filename.clone(), self.bytes.clone(), 0)
    }
}

/// Everything a renderer returns for one page.
///
/// `components` holds rows owned by the feature itself; the component-bound
/// paginator appends its own navigation rows after them.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub body: OutgoingMessage,
    pub attachment: Option<PageAttachment>,
    pub components: Vec<Component>,
}

impl RenderedPage {
    pub fn new(body: OutgoingMessage) -> Self {
        Self {
            body,
            attachment: None,
            components: Vec::new(),
        }
    }

    /// Shorthand for a page consisting of a single embed.
    pub fn embed(embed: Embed) -> Self {
        Self::new(OutgoingMessage::Embeds(vec![embed]))
    }

    pub fn with_attachment(mut self, attachment: PageAttachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    /// Attachment in upload form, as a zero- or one-element list.
    pub fn uploads(&self) -> Vec<Attachment> {
        self.attachment
            .iter()
            .map(PageAttachment::to_upload)
            .collect()
    }
}

/// Turns one opaque page payload into a message.
///
/// `page` is one-based and `total` is the full page count. Implementations may
/// await further data but must not talk to the platform themselves, and must
/// return the same message when called again for the same page.
#[async_trait]
pub trait PageRenderer<T, C = ()>: Send + Sync {
    async fn render(
        &self,
        page: usize,
        total: usize,
        data: &T,
        context: Option<&C>,
    ) -> anyhow::Result<RenderedPage>;
}
