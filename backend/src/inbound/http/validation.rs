//! Shared validation helpers for inbound HTTP requests.
//!
//! Validation happens here, ahead of the store; the store itself accepts
//! whatever it is handed. Messages mirror the site's form copy.

use serde_json::json;

use crate::domain::DomainError;

fn field_error(field: &'static str, code: &'static str, message: impl Into<String>) -> DomainError {
    DomainError::invalid_request(message).with_details(json!({
        "field": field,
        "code": code,
    }))
}

/// Accept addresses with one `@`, a non-empty local part, and a domain
/// containing an interior dot. Deliberately loose: the goal is catching
/// obvious typos, not RFC 5321 conformance.
fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, rest)) => !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'),
        None => false,
    }
}

pub(crate) fn validate_email(field: &'static str, value: &str) -> Result<(), DomainError> {
    if is_plausible_email(value) {
        Ok(())
    } else {
        Err(field_error(
            field,
            "invalid_email",
            "Please enter a valid email address",
        ))
    }
}

pub(crate) fn validate_min_chars(
    field: &'static str,
    value: &str,
    min: usize,
    message: &str,
) -> Result<(), DomainError> {
    if value.chars().count() < min {
        Err(field_error(field, "too_short", message))
    } else {
        Ok(())
    }
}

pub(crate) fn validate_max_chars(
    field: &'static str,
    value: &str,
    max: usize,
    message: &str,
) -> Result<(), DomainError> {
    if value.chars().count() > max {
        Err(field_error(field, "too_long", message))
    } else {
        Ok(())
    }
}
