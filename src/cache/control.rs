use super::error::*;

use {
    http::header::*,
    std::{fmt, result::Result},
};

/// `max-age` directive name.
pub const MAX_AGE: &str = "max-age";

/// Largest `max-age` we represent.
///
/// Larger values are clamped to it, see
/// [RFC 9111 section 1.2.2](https://www.rfc-editor.org/rfc/rfc9111#section-1.2.2).
pub const MAX_AGE_LIMIT: u64 = 2_147_483_648;

// `chrono::Duration::seconds` panics when out of range, so longer arguments never reach the
// `cache_control` crate
const MAX_AGE_ARGUMENT_LENGTH: usize = 10;

/// Parse the request's `Cache-Control` header(s).
///
/// Never fails: malformed or missing headers produce an absent `max-age`. See
/// [CacheControl::from_headers].
pub fn parse_cache_control(headers: &HeaderMap) -> CacheControl {
    CacheControl::from_headers(headers)
}

//
// CacheControl
//

/// Parsed `Cache-Control`.
///
/// Only `max-age` is supported. Other directives are skipped.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CacheControl {
    /// `max-age` in seconds.
    ///
    /// [None] means that the directive was not specified.
    pub max_age: Option<u64>,
}

impl CacheControl {
    /// Constructor.
    pub fn new(max_age: Option<u64>) -> Self {
        Self { max_age }
    }

    /// Constructor with `max-age`.
    pub fn with_max_age(max_age: u64) -> Self {
        Self::new(Some(max_age))
    }

    /// Parse a single header value.
    ///
    /// Directive names are case-insensitive. If `max-age` appears more than once then the first
    /// occurrence decides, and it is an error if that occurrence is malformed.
    pub fn parse(value: &str) -> Result<Self, CacheControlError> {
        max_ages(value).next().transpose().map(Self::new)
    }

    /// Parse all `Cache-Control` header lines.
    ///
    /// The lines are treated, in order, as a single comma-separated list. It is an error if any
    /// line is not visible ASCII.
    pub fn try_from_headers(headers: &HeaderMap) -> Result<Self, CacheControlError> {
        let values = headers
            .get_all(CACHE_CONTROL)
            .iter()
            .map(|value| value.to_str())
            .collect::<Result<Vec<_>, _>>()?;

        values
            .into_iter()
            .flat_map(|value| max_ages(value))
            .next()
            .transpose()
            .map(Self::new)
    }

    /// Parse all `Cache-Control` header lines.
    ///
    /// Lines that are not visible ASCII and malformed `max-age` occurrences are logged and
    /// skipped. The first well-formed `max-age` wins. If there is none then `max-age` is absent.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let max_age = headers
            .get_all(CACHE_CONTROL)
            .iter()
            .filter_map(|value| match value.to_str() {
                Ok(value) => Some(value),
                Err(error) => {
                    tracing::debug!("ignoring {} line ({})", CACHE_CONTROL, error);
                    None
                }
            })
            .flat_map(|value| max_ages(value))
            .find_map(|max_age| match max_age {
                Ok(max_age) => Some(max_age),
                Err(error) => {
                    tracing::debug!("ignoring {} ({})", MAX_AGE, error);
                    None
                }
            });

        Self::new(max_age)
    }
}

impl fmt::Display for CacheControl {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.max_age {
            Some(max_age) => write!(formatter, "{}={}", MAX_AGE, max_age),
            None => Ok(()),
        }
    }
}

// Every `max-age` occurrence in a header value, in order.
fn max_ages(value: &str) -> impl Iterator<Item = Result<u64, CacheControlError>> + '_ {
    value.split(',').filter_map(|directive| {
        let (name, argument) = match directive.split_once('=') {
            Some((name, argument)) => (name.trim(), Some(argument.trim())),
            None => (directive.trim(), None),
        };

        name.eq_ignore_ascii_case(MAX_AGE).then(|| match argument {
            Some(argument) => parse_max_age(argument),
            None => Err(CacheControlError::MissingMaxAge),
        })
    })
}

fn parse_max_age(argument: &str) -> Result<u64, CacheControlError> {
    if argument.len() > MAX_AGE_ARGUMENT_LENGTH {
        return if argument.bytes().all(|byte| byte.is_ascii_digit()) {
            Ok(MAX_AGE_LIMIT)
        } else {
            Err(CacheControlError::InvalidMaxAge(argument.into()))
        };
    }

    ::cache_control::CacheControl::from_value(&format!("{}={}", MAX_AGE, argument))
        .and_then(|cache_control| cache_control.max_age)
        .map(|max_age| max_age.as_secs())
        .map(|max_age| max_age.min(MAX_AGE_LIMIT))
        .ok_or_else(|| CacheControlError::InvalidMaxAge(argument.into()))
}
