use {http::header::*, thiserror::*};

//
// CacheControlError
//

/// `Cache-Control` error.
#[derive(Debug, Error)]
pub enum CacheControlError {
    /// `max-age` value is not a non-negative integer.
    #[error("invalid max-age: {0:?}")]
    InvalidMaxAge(String),

    /// `max-age` without a value.
    #[error("max-age without a value")]
    MissingMaxAge,

    /// Header value is not visible ASCII.
    #[error("header value is not visible ASCII: {0}")]
    NotVisibleAscii(#[from] ToStrError),
}
