//! # Request-Parameter Encoding
//!
//! The tide-table endpoint selects days with a bracketed path segment:
//! `[1,2,3]` for specific days, `[1-7]` for a range. [`DayExpr`] normalizes
//! the shapes callers naturally have in hand (integer sequences, inclusive
//! ranges, raw expression strings) into that syntax. The harbor endpoint
//! takes one id or a comma list, covered by [`HarborIds`].
//!
//! Both render to a single path segment which must be percent-encoded
//! before the request is issued, since `[`, `]` and `,` are not safe
//! inside a URL path.

use std::ops::RangeInclusive;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ClientError;

/// Characters escaped when a bracket expression travels as one path
/// segment. Everything but ASCII alphanumerics and `-` `_` `.` `~` is
/// encoded, so `[1,2,3]` becomes `%5B1%2C2%2C3%5D` and `[1-7]` becomes
/// `%5B1-7%5D`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a rendered expression as a single path segment.
pub(crate) fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Day selection for a tide-table request.
///
/// Conversions exist for the common caller shapes:
///
/// - `vec![1, 2, 3]`, `&[1, 2, 3]`, `[1, 2, 3]` → `[1,2,3]`
/// - `5` → `[5]`
/// - `1..=7` → `[1-7]`
/// - `"1,2,3"` → `[1,2,3]`; `"[1-7]"` passes through unchanged
///
/// Raw strings are wrapped in brackets unless already bracketed, which
/// lets callers hand over any expression the service understands without
/// the client second-guessing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayExpr {
    /// Specific days of the month, rendered `[d1,d2,...]` with no
    /// internal whitespace
    Days(Vec<u32>),
    /// An inclusive day range, rendered `[start-end]`
    Range(u32, u32),
    /// A raw expression, passed through (bracketed on demand)
    Raw(String),
}

impl DayExpr {
    /// Render the unencoded bracket expression.
    pub(crate) fn to_segment(&self) -> String {
        match self {
            DayExpr::Days(days) => {
                let joined = days
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("[{joined}]")
            }
            DayExpr::Range(start, end) => format!("[{start}-{end}]"),
            DayExpr::Raw(expr) => {
                if expr.starts_with('[') {
                    expr.clone()
                } else {
                    format!("[{expr}]")
                }
            }
        }
    }

    /// Preconditions checked before any request is built. Raw expressions
    /// are deliberately not validated; the service owns their grammar.
    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        match self {
            DayExpr::Days(days) if days.is_empty() => Err(ClientError::InvalidArgument(
                "at least one day is required".into(),
            )),
            DayExpr::Days(days) if days.iter().any(|d| !(1..=31).contains(d)) => Err(
                ClientError::InvalidArgument("days must be between 1 and 31".into()),
            ),
            DayExpr::Range(start, end) if !(1..=31).contains(start) || !(1..=31).contains(end) => {
                Err(ClientError::InvalidArgument(
                    "days must be between 1 and 31".into(),
                ))
            }
            DayExpr::Range(start, end) if start > end => Err(ClientError::InvalidArgument(
                "start day must not be after end day".into(),
            )),
            _ => Ok(()),
        }
    }
}

impl From<Vec<u32>> for DayExpr {
    fn from(days: Vec<u32>) -> Self {
        DayExpr::Days(days)
    }
}

impl From<&[u32]> for DayExpr {
    fn from(days: &[u32]) -> Self {
        DayExpr::Days(days.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for DayExpr {
    fn from(days: [u32; N]) -> Self {
        DayExpr::Days(days.to_vec())
    }
}

impl From<u32> for DayExpr {
    fn from(day: u32) -> Self {
        DayExpr::Days(vec![day])
    }
}

impl From<RangeInclusive<u32>> for DayExpr {
    fn from(range: RangeInclusive<u32>) -> Self {
        DayExpr::Range(*range.start(), *range.end())
    }
}

impl From<&str> for DayExpr {
    fn from(expr: &str) -> Self {
        DayExpr::Raw(expr.to_owned())
    }
}

impl From<String> for DayExpr {
    fn from(expr: String) -> Self {
        DayExpr::Raw(expr)
    }
}

/// Harbor selection for the `/harbors` endpoint: a single id, an id
/// sequence (joined with commas), or a raw comma list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarborIds {
    /// Ids joined with commas, `1,2,3`
    Ids(Vec<u32>),
    /// A preformatted id list, passed through unchanged
    Raw(String),
}

impl HarborIds {
    pub(crate) fn to_segment(&self) -> String {
        match self {
            HarborIds::Ids(ids) => ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
            HarborIds::Raw(ids) => ids.clone(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        match self {
            HarborIds::Ids(ids) if ids.is_empty() => Err(ClientError::InvalidArgument(
                "at least one harbor id is required".into(),
            )),
            HarborIds::Ids(ids) if ids.contains(&0) => Err(ClientError::InvalidArgument(
                "harbor ids must be positive integers".into(),
            )),
            HarborIds::Raw(ids) if ids.is_empty() => Err(ClientError::InvalidArgument(
                "harbor ids must not be empty".into(),
            )),
            _ => Ok(()),
        }
    }
}

impl From<u32> for HarborIds {
    fn from(id: u32) -> Self {
        HarborIds::Ids(vec![id])
    }
}

impl From<Vec<u32>> for HarborIds {
    fn from(ids: Vec<u32>) -> Self {
        HarborIds::Ids(ids)
    }
}

impl From<&[u32]> for HarborIds {
    fn from(ids: &[u32]) -> Self {
        HarborIds::Ids(ids.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for HarborIds {
    fn from(ids: [u32; N]) -> Self {
        HarborIds::Ids(ids.to_vec())
    }
}

impl From<&str> for HarborIds {
    fn from(ids: &str) -> Self {
        HarborIds::Raw(ids.to_owned())
    }
}

impl From<String> for HarborIds {
    fn from(ids: String) -> Self {
        HarborIds::Raw(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_list_renders_without_whitespace() {
        let expr = DayExpr::from(vec![1, 2, 3]);
        assert_eq!(expr.to_segment(), "[1,2,3]");
    }

    #[test]
    fn test_single_day_is_bracketed() {
        assert_eq!(DayExpr::from(5).to_segment(), "[5]");
    }

    #[test]
    fn test_range_renders_dash_expression() {
        assert_eq!(DayExpr::from(1..=7).to_segment(), "[1-7]");
    }

    #[test]
    fn test_plain_string_is_wrapped() {
        assert_eq!(DayExpr::from("1,2,3").to_segment(), "[1,2,3]");
        assert_eq!(DayExpr::from("1-7").to_segment(), "[1-7]");
    }

    #[test]
    fn test_bracketed_string_passes_through() {
        assert_eq!(DayExpr::from("[1-7]").to_segment(), "[1-7]");
        // Same segment as the equivalent range conversion
        assert_eq!(
            DayExpr::from("[1-7]").to_segment(),
            DayExpr::from(1..=7).to_segment()
        );
    }

    #[test]
    fn test_encode_segment_escapes_brackets_and_commas() {
        assert_eq!(encode_segment("[1,2,3]"), "%5B1%2C2%2C3%5D");
        assert_eq!(encode_segment("[1-7]"), "%5B1-7%5D");
        assert_eq!(encode_segment("[1-31]"), "%5B1-31%5D");
    }

    #[test]
    fn test_day_validation_bounds() {
        assert!(DayExpr::Days(vec![]).validate().is_err());
        assert!(DayExpr::Days(vec![0]).validate().is_err());
        assert!(DayExpr::Days(vec![32]).validate().is_err());
        assert!(DayExpr::Days(vec![1, 31]).validate().is_ok());
        assert!(DayExpr::Range(7, 1).validate().is_err());
        assert!(DayExpr::Range(0, 7).validate().is_err());
        assert!(DayExpr::Range(1, 7).validate().is_ok());
        // Raw expressions are the service's to reject
        assert!(DayExpr::Raw(String::new()).validate().is_ok());
    }

    #[test]
    fn test_harbor_ids_join_with_commas() {
        assert_eq!(HarborIds::from(vec![1, 2, 3]).to_segment(), "1,2,3");
        assert_eq!(HarborIds::from(1).to_segment(), "1");
        assert_eq!(HarborIds::from("4,5").to_segment(), "4,5");
    }

    #[test]
    fn test_harbor_ids_validation() {
        assert!(HarborIds::Ids(vec![]).validate().is_err());
        assert!(HarborIds::Ids(vec![1, 0]).validate().is_err());
        assert!(HarborIds::Raw(String::new()).validate().is_err());
        assert!(HarborIds::from(vec![27]).validate().is_ok());
    }
}
