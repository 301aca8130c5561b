use crate::domain::model::ParsedNumber;
use crate::utils::error::{ApiError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Explicit parse step for the `number` query token. Accepts any integer an
/// i64 can hold, including negatives; float tokens and everything else come
/// back as `Invalid` carrying the original token.
pub fn parse_number_token(raw: Option<&str>) -> ParsedNumber {
    match raw {
        None => ParsedNumber::Invalid(None),
        Some(token) => match token.trim().parse::<i64>() {
            Ok(n) => ParsedNumber::Valid(n),
            Err(_) => ParsedNumber::Invalid(Some(token.to_string())),
        },
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: port.to_string(),
            reason: "Port must be between 1 and 65535".to_string(),
        });
    }
    Ok(())
}
