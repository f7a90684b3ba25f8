//! Error taxonomy for client operations.

use thiserror::Error;

/// Errors that can occur while building or performing a request.
///
/// Argument validation failures never reach the network; every other
/// variant maps to a single failed request. No operation retries and no
/// partial results are synthesized on failure.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A client-side precondition was violated before any request was made
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP request could not be completed (connection, DNS, timeout)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status and no decodable
    /// service error body
    #[error("server returned {status} for {url}")]
    Status {
        /// HTTP status code of the failed response
        status: u16,
        /// Full URL that was requested
        url: String,
    },

    /// HTTP 429 from the service, which allows 500 requests per minute
    #[error("rate limit exceeded: 500 requests per minute")]
    RateLimited,

    /// A failure reported by the service itself, either as an error body
    /// or embedded in an otherwise successful envelope
    #[error("API error (code {code}): {msg}")]
    Api {
        /// Service error code (not necessarily an HTTP status)
        code: i32,
        /// Service error message
        msg: String,
    },

    /// The response body was not valid JSON or did not match the
    /// documented shape
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope carried neither data nor an error
    #[error("empty response from API")]
    EmptyResponse,
}
