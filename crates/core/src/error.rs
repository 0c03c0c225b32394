//! Error type for request shaping

/// Errors raised while turning caller input into an [`ApiRequest`](crate::request::ApiRequest)
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Failed to encode request payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Search parameters must serialize to an object, got {0}")]
    NotAnObject(&'static str),
}
