//! # HTTP Transport
//!
//! The client reaches the service through a single capability: fetch a
//! URL, hand back the response body. [`HttpTransport`] is the production
//! implementation, built on reqwest; tests substitute their own recording
//! transports. The seam is narrow enough that no runtime-environment
//! detection or global client state is ever needed.

use std::future::Future;
use std::time::Duration;

use crate::error::ClientError;
use crate::types::ApiErrorBody;

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// `User-Agent` sent with every request.
pub(crate) const USER_AGENT: &str = concat!("tabua-mare/", env!("CARGO_PKG_VERSION"));

/// A minimal HTTP GET capability.
///
/// Implementations resolve status failures themselves and only ever hand
/// the client a body it is expected to decode. Cancellation and timeouts
/// belong to the implementation; the client adds neither.
pub trait Transport {
    /// Perform a GET and return the body of a successful response.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ClientError>> + Send;
}

/// Production transport backed by a reqwest client.
///
/// Sends `Accept: application/json` and a crate-versioned `User-Agent`,
/// and maps the failure modes of a response onto [`ClientError`]:
/// 429 becomes `RateLimited`, other non-2xx statuses become `Api` when
/// the body carries a decodable service error and `Status` otherwise.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the default timeout and headers.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Build a transport with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ClientError> {
        Self::with_options(timeout, USER_AGENT)
    }

    pub(crate) fn with_options(timeout: Duration, user_agent: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ClientError>> + Send {
        async move {
            let response = self
                .client
                .get(url)
                .header("Accept", "application/json")
                .send()
                .await?;

            let status = response.status();
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(ClientError::RateLimited);
            }
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Error statuses usually carry a `{msg, code}` body; keep
                // those distinguishable from bare status failures.
                if let Ok(err) = serde_json::from_str::<ApiErrorBody>(&body) {
                    if !err.msg.is_empty() {
                        return Err(ClientError::Api {
                            code: err.code,
                            msg: err.msg,
                        });
                    }
                }
                return Err(ClientError::Status {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }

            Ok(response.text().await?)
        }
    }
}
