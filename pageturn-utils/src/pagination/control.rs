//! Pagination control identifiers and activation parsing.

use twilight_model::application::interaction::message_component::MessageComponentInteractionData;

use super::error::PaginationError;
use super::page::PageMove;

/// Shared prefix of every pagination control identifier.
pub const CONTROL_PREFIX: &str = "pagination.";
/// Control identifier of the "next" button.
pub const NEXT_CONTROL: &str = "pagination.next";
/// Control identifier of the "previous" button.
pub const PREVIOUS_CONTROL: &str = "pagination.previous";
/// Control identifier of the page-select menu.
pub const SELECT_CONTROL: &str = "pagination.select";

/// An inbound component activation, reduced to what navigation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub control_id: String,
    pub values: Vec<String>,
}

impl Activation {
    pub fn new(control_id: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            control_id: control_id.into(),
            values,
        }
    }

    pub fn from_component(data: &MessageComponentInteractionData) -> Self {
        Self::new(data.custom_id.clone(), data.values.clone())
    }

    /// Decode the requested move.
    ///
    /// For `select`, the first value must parse to a zero-based page index.
    pub fn page_move(&self) -> Result<PageMove, PaginationError> {
        match self.control_id.as_str() {
            NEXT_CONTROL => Ok(PageMove::Next),
            PREVIOUS_CONTROL => Ok(PageMove::Previous),
            SELECT_CONTROL => {
                let raw = self
                    .values
                    .first()
                    .ok_or(PaginationError::MissingSelection)?;
                raw.trim()
                    .parse::<usize>()
                    .map(PageMove::Select)
                    .map_err(|_| PaginationError::InvalidSelection(raw.clone()))
            }
            other => Err(PaginationError::UnknownControl(other.to_owned())),
        }
    }
}

/// Whether a component custom ID belongs to the pagination engine.
pub fn is_pagination_control(custom_id: &str) -> bool {
    custom_id.starts_with(CONTROL_PREFIX)
}
