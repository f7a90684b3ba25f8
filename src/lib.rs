//! # Tábua de Marés API Client
//!
//! Typed Rust client for the Tábua de Marés service, which publishes
//! per-hour water level predictions and harbor metadata for the Brazilian
//! coast.
//!
//! The client translates method calls into HTTP GET requests against a
//! fixed base URL and decodes the JSON responses into the records in
//! [`types`]. That is the whole job: there is no caching, no retrying,
//! no pagination beyond what the remote API returns, and no shared
//! mutable state. A [`TabuaMareClient`] is an independent value that can
//! serve any number of concurrent tasks once constructed.
//!
//! ## Example
//!
//! ```no_run
//! use tabua_mare::TabuaMareClient;
//!
//! # async fn example() -> Result<(), tabua_mare::ClientError> {
//! let client = TabuaMareClient::new()?;
//!
//! // Which states have tide tables?
//! let states = client.get_states().await?;
//! println!("{} states covered", states.total);
//!
//! // First week of January for harbor 1.
//! let tables = client.get_tide_table_range(1, 1, 1, 7).await?;
//! for table in &tables.data {
//!     println!("{} ({}): {} months", table.harbor_name, table.state, table.months.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Day Expressions
//!
//! The tide-table endpoint selects days with a bracketed path segment,
//! and [`DayExpr`] converts the natural Rust shapes into it:
//!
//! - `vec![1, 2, 3]` → `[1,2,3]`
//! - `1..=7` → `[1-7]`
//! - `"15"` → `[15]`; `"[1-7]"` passes through unchanged
//!
//! The rendered expression is percent-encoded as a single path segment
//! before the request is issued.
//!
//! ## Errors
//!
//! Every failure mode is a [`ClientError`] variant: argument validation
//! (never reaches the network), transport failures carrying status and
//! URL, service-reported errors, and JSON decode mismatches. All errors
//! propagate directly; nothing is retried or suppressed.

pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod transport;
pub mod types;

pub use client::{TabuaMareClient, DEFAULT_BASE_URL};
pub use config::Config;
pub use error::ClientError;
pub use params::{DayExpr, HarborIds};
pub use transport::{HttpTransport, Transport};
pub use types::{
    ApiResponse, GeoLocation, Harbor, HarborName, TideDay, TideHour, TideMonth, TideTable,
};
