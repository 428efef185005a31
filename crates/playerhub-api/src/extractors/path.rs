//! Typed path parameter helpers.

use std::str::FromStr;

use crate::error::ApiError;

/// Parses a positive integer identifier from a path segment.
///
/// `resource` names the family in the error, e.g. `"player"` gives
/// `"Invalid player ID"`.
pub fn parse_id<T: FromStr>(raw: &str, resource: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid {resource} ID")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use playerhub_core::types::{AchievementId, PlayerId};

    #[test]
    fn test_parse_valid() {
        let id: PlayerId = parse_id("12", "player").unwrap();
        assert_eq!(id, PlayerId(12));
    }

    #[test]
    fn test_parse_invalid_names_resource() {
        let err = parse_id::<AchievementId>("abc", "achievement").unwrap_err();
        assert_eq!(err.0.message, "Invalid achievement ID");
        assert!(parse_id::<PlayerId>("0", "player").is_err());
    }
}
