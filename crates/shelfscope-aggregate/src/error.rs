use thiserror::Error;

/// Run-aborting failures. The `Display` text is the user-facing message.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("could not identify the product in {url}")]
    Unidentifiable { url: String },

    #[error("could not retrieve item {id}")]
    ItemUnavailable { id: String },

    #[error("failed to render report: {0}")]
    Render(String),
}
