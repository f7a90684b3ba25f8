//! Typed records for the service's wire format.
//!
//! Every endpoint answers with an envelope `{ "data": ..., "total": n }`,
//! optionally carrying an `error` member instead of data when the service
//! reports a failure inside a 2xx body. The records here decode strictly:
//! a shape mismatch is a [`ClientError::Decode`](crate::ClientError::Decode)
//! rather than a silently missing field.
//!
//! All values are immutable snapshots created fresh per response and owned
//! entirely by the caller; nothing is cached or merged across calls.

use serde::{Deserialize, Serialize};

/// A successful response: the decoded payload plus the total record count
/// reported by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// The decoded payload
    pub data: T,
    /// Total number of records the service reports for the query
    pub total: u32,
}

/// Service-reported failure carried in a response body.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    /// Human-readable message
    pub msg: String,
    /// Service error code
    pub code: i32,
}

/// Raw wire envelope. `data` is optional because error bodies omit it;
/// the client turns the three cases into [`ApiResponse`], an `Api` error,
/// or an `EmptyResponse` error.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub total: u32,
    pub error: Option<ApiErrorBody>,
}

/// Geographic coordinates of a harbor, as formatted by the service:
/// sexagesimal and decimal forms plus hemisphere direction markers.
/// The strings pass through without numeric validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeoLocation {
    pub lat: String,
    pub lng: String,
    pub decimal_lat: String,
    pub decimal_lng: String,
    pub lat_direction: String,
    pub lng_direction: String,
}

/// A named coastal location with geographic and administrative metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Harbor {
    pub id: u32,
    pub harbor_name: String,
    pub state: String,
    pub timezone: String,
    pub card: String,
    pub geo_location: Vec<GeoLocation>,
    pub mean_level: f64,
}

/// Lightweight harbor reference returned by the per-state listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HarborName {
    pub id: u32,
    pub year: u32,
    pub harbor_name: String,
    pub data_collection_institution: String,
}

/// Tide height at a given hour of a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TideHour {
    /// Clock time as formatted by the service, e.g. `"04:11"`
    pub hour: String,
    /// Water level in meters relative to the harbor's chart datum
    pub level: f64,
}

/// Hourly water levels for one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TideDay {
    pub weekday_name: String,
    pub day: u32,
    pub hours: Vec<TideHour>,
}

/// One month of a tide table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TideMonth {
    pub month_name: String,
    pub month: u32,
    pub days: Vec<TideDay>,
}

/// A complete tide table for one harbor and year: per-hour water level
/// predictions organized by month and day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TideTable {
    pub year: u32,
    pub harbor_name: String,
    pub state: String,
    pub timezone: String,
    pub card: String,
    pub data_collection_institution: String,
    pub mean_level: f64,
    pub months: Vec<TideMonth>,
}
