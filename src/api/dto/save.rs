//! DTOs for the create-mapping endpoint.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::api::dto::response::STATUS_OK;

/// Characters allowed in a caller-supplied alias. Empty means "generate one".
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Aliases that would be shadowed by fixed routes.
pub const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Request to store a URL under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The destination URL (must be well-formed). Blank counts as missing.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "field url is required to fill"),
        url(message = "field url is not valid URL")
    )]
    pub url: Option<String>,

    /// Optional alias; generated when missing or empty.
    #[serde(default)]
    #[validate(
        length(max = 64, message = "field alias is not valid"),
        regex(path = "*ALIAS_REGEX", message = "field alias is not valid"),
        custom(function = "reject_reserved_alias")
    )]
    pub alias: Option<String>,
}

impl SaveRequest {
    pub fn new(url: Option<String>, alias: Option<String>) -> Self {
        Self {
            url: url.filter(|u| !u.trim().is_empty()),
            alias,
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|u| !u.trim().is_empty()))
}

fn reject_reserved_alias(alias: &str) -> Result<(), ValidationError> {
    if RESERVED_ALIASES.contains(&alias) {
        return Err(ValidationError::new("reserved").with_message("field alias is not valid".into()));
    }
    Ok(())
}

/// Successful create response: `{"status": "OK", "alias": "..."}`.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            status: STATUS_OK,
            alias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: Option<&str>, alias: Option<&str>) -> SaveRequest {
        SaveRequest::new(url.map(str::to_string), alias.map(str::to_string))
    }

    #[test]
    fn test_valid_request_with_alias() {
        assert!(request(Some("https://example.com"), Some("ex_1-A")).validate().is_ok());
    }

    #[test]
    fn test_empty_alias_is_allowed() {
        assert!(request(Some("https://example.com"), Some("")).validate().is_ok());
        assert!(request(Some("https://example.com"), None).validate().is_ok());
    }

    #[test]
    fn test_missing_url_is_required() {
        let errors = request(None, None).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_blank_url_counts_as_missing() {
        for blank in ["", "   "] {
            let errors = request(Some(blank), None).validate().unwrap_err();
            let url_errors = &errors.field_errors()["url"];
            assert_eq!(url_errors.len(), 1);
            assert_eq!(url_errors[0].code, "required");
        }
    }

    #[test]
    fn test_blank_url_in_json_is_missing() {
        let payload: SaveRequest = serde_json::from_str(r#"{"url": ""}"#).unwrap();
        assert!(payload.url.is_none());
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        assert!(request(Some("not a url"), None).validate().is_err());
    }

    #[test]
    fn test_alias_with_slash_is_rejected() {
        let errors = request(Some("https://example.com"), Some("a/b"))
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("alias"));
    }

    #[test]
    fn test_overlong_alias_is_rejected() {
        let alias = "a".repeat(65);
        assert!(request(Some("https://example.com"), Some(&alias)).validate().is_err());
    }

    #[test]
    fn test_reserved_aliases_are_rejected() {
        for &reserved in RESERVED_ALIASES {
            assert!(
                request(Some("https://example.com"), Some(reserved))
                    .validate()
                    .is_err(),
                "Reserved alias '{}' should be invalid",
                reserved
            );
        }
    }
}
