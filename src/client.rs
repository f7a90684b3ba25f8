//! # Tábua de Marés Client
//!
//! [`TabuaMareClient`] translates typed method calls into HTTP GET
//! requests against the tide-table service and decodes the JSON envelopes
//! into the records in [`crate::types`].
//!
//! ## Request Model
//!
//! Every operation is a single GET, single attempt, fail fast. Argument
//! validation runs before any network activity; a rejected call never
//! touches the wire. The client holds nothing but the base URL and a
//! transport, so one instance can serve any number of concurrent tasks
//! without coordination.
//!
//! ## Path Construction
//!
//! The interesting work is in the path segments: day selections and id
//! lists are normalized by [`crate::params`] and percent-encoded before
//! they are appended, so `vec![1, 2, 3]` travels as `%5B1%2C2%2C3%5D`.

use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::ClientError;
use crate::params::{encode_segment, DayExpr, HarborIds};
use crate::transport::{HttpTransport, Transport};
use crate::types::{ApiResponse, Envelope, Harbor, HarborName, TideTable};

/// Production endpoint used when no base URL override is given.
pub const DEFAULT_BASE_URL: &str = "https://tabuamare.devtu.qzz.io/api/v1";

/// Client for the Tábua de Marés tide-table and harbor-lookup service.
///
/// The only state is the base URL and the transport; both are fixed at
/// construction. Instances are cheap to clone and safe to share across
/// tasks.
///
/// # Example
///
/// ```no_run
/// use tabua_mare::TabuaMareClient;
///
/// # async fn example() -> Result<(), tabua_mare::ClientError> {
/// let client = TabuaMareClient::new()?;
/// let harbors = client.get_harbors_by_state("pb").await?;
/// for harbor in &harbors.data {
///     println!("{}: {}", harbor.id, harbor.harbor_name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TabuaMareClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl TabuaMareClient<HttpTransport> {
    /// Create a client against the production endpoint.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint, e.g. a staging
    /// deployment. A trailing slash on the base URL is trimmed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self::with_transport(base_url, HttpTransport::new()?))
    }

    /// Create a client from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let transport = HttpTransport::with_options(
            Duration::from_secs(config.http.timeout_secs),
            &config.http.user_agent,
        )?;
        Ok(Self::with_transport(config.api.base_url.clone(), transport))
    }
}

impl<T: Transport> TabuaMareClient<T> {
    /// Create a client with a caller-supplied transport.
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            transport,
        }
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the coastal states covered by the service, as lowercase
    /// two-letter codes.
    pub async fn get_states(&self) -> Result<ApiResponse<Vec<String>>, ClientError> {
        self.request("/states").await
    }

    /// List the harbors of a state. The state code is accepted in any
    /// casing and lowercased before the request.
    pub async fn get_harbors_by_state(
        &self,
        state: &str,
    ) -> Result<ApiResponse<Vec<HarborName>>, ClientError> {
        if state.is_empty() {
            return Err(ClientError::InvalidArgument(
                "state must not be empty".into(),
            ));
        }
        let path = format!("/harbor_names/{}", state.to_lowercase());
        self.request(&path).await
    }

    /// Fetch one or more harbors by id. Accepts a single id, an id
    /// sequence, or a preformatted comma list.
    pub async fn get_harbors(
        &self,
        ids: impl Into<HarborIds>,
    ) -> Result<ApiResponse<Vec<Harbor>>, ClientError> {
        let ids = ids.into();
        ids.validate()?;
        let path = format!("/harbors/{}", ids.to_segment());
        self.request(&path).await
    }

    /// Fetch a single harbor by id.
    pub async fn get_harbor(&self, id: u32) -> Result<Harbor, ClientError> {
        let response = self.get_harbors(id).await?;
        response
            .data
            .into_iter()
            .next()
            .ok_or(ClientError::EmptyResponse)
    }

    /// Fetch tide tables for a harbor, month, and day selection.
    ///
    /// `days` accepts an integer sequence (`vec![1, 2, 3]`), an inclusive
    /// range (`1..=7`), or an expression string (`"[1-7]"`); see
    /// [`DayExpr`] for the normalization rules.
    ///
    /// A zero `harbor_id` or `month` reads as absent, not as out of
    /// range, and is rejected before any request is made.
    pub async fn get_tide_table(
        &self,
        harbor_id: u32,
        month: u32,
        days: impl Into<DayExpr>,
    ) -> Result<ApiResponse<Vec<TideTable>>, ClientError> {
        if harbor_id == 0 || month == 0 {
            return Err(ClientError::InvalidArgument(
                "harbor id and month are required".into(),
            ));
        }
        if month > 12 {
            return Err(ClientError::InvalidArgument(
                "month must be between 1 and 12".into(),
            ));
        }
        let days = days.into();
        days.validate()?;
        let path = format!(
            "/tabua-mare/{harbor_id}/{month}/{}",
            encode_segment(&days.to_segment())
        );
        self.request(&path).await
    }

    /// Fetch tide tables for an inclusive day range, `[start_day-end_day]`.
    pub async fn get_tide_table_range(
        &self,
        harbor_id: u32,
        month: u32,
        start_day: u32,
        end_day: u32,
    ) -> Result<ApiResponse<Vec<TideTable>>, ClientError> {
        self.get_tide_table(harbor_id, month, start_day..=end_day)
            .await
    }

    /// Fetch tide tables for the whole month, as `[1-31]`. The service
    /// clamps the range to the real month length; the client performs no
    /// calendar awareness.
    pub async fn get_tide_table_month(
        &self,
        harbor_id: u32,
        month: u32,
    ) -> Result<ApiResponse<Vec<TideTable>>, ClientError> {
        self.get_tide_table(harbor_id, month, "[1-31]").await
    }

    /// Find the harbors nearest to a coordinate, across state boundaries.
    ///
    /// Coordinates are validated before any request: both must be finite,
    /// latitude within ±90 and longitude within ±180. The payload is
    /// [`Harbor`]-shaped; the remote contract adds no distance fields
    /// despite the result name.
    pub async fn get_nearest_harbor(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<ApiResponse<Vec<Harbor>>, ClientError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(ClientError::InvalidArgument(
                "Latitude and longitude must be numbers".into(),
            ));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ClientError::InvalidArgument(
                "Latitude must be between -90 and 90".into(),
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(ClientError::InvalidArgument(
                "Longitude must be between -180 and 180".into(),
            ));
        }
        let path = format!("/nearest-harbor-independent-state/{lat:.6},{lng:.6}");
        self.request(&path).await
    }

    /// Issue the GET and unpack the envelope. A service-reported error
    /// beats the payload; a missing payload without an error is an empty
    /// response.
    async fn request<R: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<R>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");
        let body = self.transport.fetch(&url).await?;
        let envelope: Envelope<R> = serde_json::from_str(&body)?;
        if let Some(error) = envelope.error {
            warn!("service reported error {}: {}", error.code, error.msg);
            return Err(ClientError::Api {
                code: error.code,
                msg: error.msg,
            });
        }
        let data = envelope.data.ok_or(ClientError::EmptyResponse)?;
        Ok(ApiResponse {
            data,
            total: envelope.total,
        })
    }
}
