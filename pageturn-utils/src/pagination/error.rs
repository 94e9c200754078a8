//! Error taxonomy for pagination transitions.

/// Boxed error carried as the source of render and delivery failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures raised by paginator construction and navigation.
#[derive(Debug, thiserror::Error)]
pub enum PaginationError {
    /// A paginator was constructed without any pages.
    #[error("cannot paginate an empty page sequence")]
    EmptyPages,
    /// An activation carried a control identifier this engine does not know.
    #[error("unrecognized pagination control `{0}`")]
    UnknownControl(String),
    /// A page-select activation arrived without a selected value.
    #[error("page selection carried no value")]
    MissingSelection,
    /// A page-select value was not a zero-based page index.
    #[error("page selection `{0}` is not a page index")]
    InvalidSelection(String),
    /// A page-select value pointed past the last page.
    #[error("page index {index} is out of range for {total} pages")]
    OutOfRange { index: usize, total: usize },
    /// The renderer failed to produce the requested page.
    #[error("failed to render page {page}")]
    Render {
        page: usize,
        #[source]
        source: BoxError,
    },
    /// The outbound delivery of a rendered page failed.
    #[error("failed to deliver page {page}")]
    Delivery {
        page: usize,
        #[source]
        source: BoxError,
    },
}

impl PaginationError {
    /// Whether this error stems from a malformed activation rather than I/O.
    ///
    /// Usage errors are raised before any render or delivery call is made.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownControl(_)
                | Self::MissingSelection
                | Self::InvalidSelection(_)
                | Self::OutOfRange { .. }
        )
    }

    pub(crate) fn render(page: usize, source: anyhow::Error) -> Self {
        Self::Render {
            page,
            source: source.into(),
        }
    }

    pub(crate) fn delivery(page: usize, source: anyhow::Error) -> Self {
        Self::Delivery {
            page,
            source: source.into(),
        }
    }
}
