use astra::Response;
use thiserror::Error;

/// Errors originating from the HTTP layer (routing, malformed requests,
/// response building). Pipeline failures are rendered as normal pages and
/// never reach this type.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
