//! Query DTOs - shared query-string shapes for the list endpoints

use serde::{Deserialize, Serialize};

/// Pagination window for list endpoints.
///
/// Values are kept as raw strings and parsed lazily: a value that is absent
/// or does not parse as a base-10 integer falls back to the default instead
/// of rejecting the request. Negative values are passed through to the store
/// untouched, where a negative limit means "no limit".
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PageQuery {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const DEFAULT_OFFSET: i64 = 0;

    /// Parsed `limit`, or 10 when absent or unparseable.
    pub fn limit_or_default(&self) -> i64 {
        Self::parse_or(self.limit.as_deref(), Self::DEFAULT_LIMIT)
    }

    /// Parsed `offset`, or 0 when absent or unparseable.
    pub fn offset_or_default(&self) -> i64 {
        Self::parse_or(self.offset.as_deref(), Self::DEFAULT_OFFSET)
    }

    fn parse_or(raw: Option<&str>, default: i64) -> i64 {
        raw.and_then(|value| value.parse().ok()).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let query = PageQuery::default();

        assert_eq!(query.limit_or_default(), 10);
        assert_eq!(query.offset_or_default(), 0);
    }

    #[test]
    fn numeric_values_are_parsed() {
        let query = PageQuery {
            limit: Some("5".to_string()),
            offset: Some("20".to_string()),
        };

        assert_eq!(query.limit_or_default(), 5);
        assert_eq!(query.offset_or_default(), 20);
    }

    #[test]
    fn unparseable_values_fall_back_to_defaults() {
        let query = PageQuery {
            limit: Some("ten".to_string()),
            offset: Some("3.5".to_string()),
        };

        assert_eq!(query.limit_or_default(), 10);
        assert_eq!(query.offset_or_default(), 0);
    }

    #[test]
    fn negative_values_are_passed_through() {
        let query = PageQuery {
            limit: Some("-1".to_string()),
            offset: Some("-7".to_string()),
        };

        assert_eq!(query.limit_or_default(), -1);
        assert_eq!(query.offset_or_default(), -7);
    }
}
