//! Request DTOs for the oracle API
//!
//! Defines the structure of the incoming form submission and its validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{OracleError, Result};

/// `local@domain.tld` shape, no RFC 5322 compliance.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Request body for POST /api/oracle
///
/// # Fields
/// - `name`, `email`, `birthdate`: required, must be non-empty
/// - `birthtime`, `birthplace`, `focus`: optional, passed through untouched
///
/// A field holding anything other than a JSON string is treated as absent on
/// its own; the rest of the submission is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OracleRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub birthdate: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub birthtime: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub birthplace: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub focus: Option<String>,
}

impl OracleRequest {
    /// Parses a raw request body.
    ///
    /// A body that is not a JSON object yields an empty submission, which
    /// then fails required-field validation.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Validates required fields, then the email format.
    pub fn validate(&self) -> Result<()> {
        let required = [&self.name, &self.email, &self.birthdate];
        if required.iter().any(|field| is_blank(field)) {
            return Err(OracleError::MissingFields);
        }

        match self.email.as_deref() {
            Some(email) if is_valid_email(email) => Ok(()),
            _ => Err(OracleError::InvalidEmail),
        }
    }
}

/// Returns true if `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}
