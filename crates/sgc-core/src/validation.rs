//! Client-side field validation for the edit forms
//!
//! Failures here never reach the network; the forms show them inline next to
//! the offending field.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Why a single form field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter {0}")]
    Required(&'static str),

    #[error("Not a valid email address")]
    InvalidEmail,

    #[error("Host must not be blank")]
    BlankHost,

    #[error("Port must be an integer between 1 and 65535")]
    InvalidPort,

    #[error("Cron expression needs 5 or 6 fields")]
    InvalidCron,

    #[error("Not a valid http(s) URL: {0}")]
    InvalidUrl(String),
}

pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// Non-empty after trimming
pub fn validate_required<'a>(value: &'a str, what: &'static str) -> FieldResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FieldError::Required(what))
    } else {
        Ok(trimmed)
    }
}

pub fn validate_email(value: &str) -> FieldResult<&str> {
    let value = validate_required(value, "an email")?;
    if EMAIL_PATTERN.is_match(value) {
        Ok(value)
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// Passwords are taken verbatim, only presence is checked
pub fn validate_password(value: &str) -> FieldResult<&str> {
    if value.is_empty() {
        Err(FieldError::Required("a password"))
    } else {
        Ok(value)
    }
}

/// Optional SMTP host: empty means unset, whitespace-only is rejected
pub fn validate_host(value: &str) -> FieldResult<&str> {
    if value.is_empty() {
        Ok(value)
    } else if value.trim().is_empty() {
        Err(FieldError::BlankHost)
    } else {
        Ok(value.trim())
    }
}

/// Optional SMTP port: empty means unset (`None`)
pub fn validate_port(value: &str) -> FieldResult<Option<u16>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<u32>() {
        Ok(port) if (1..=65535).contains(&port) => Ok(Some(port as u16)),
        _ => Err(FieldError::InvalidPort),
    }
}

/// Standard 5-field cron, or 6 with leading seconds
pub fn validate_cron(value: &str) -> FieldResult<&str> {
    let value = validate_required(value, "a cron expression")?;
    match value.split_whitespace().count() {
        5 | 6 => Ok(value),
        _ => Err(FieldError::InvalidCron),
    }
}

pub fn validate_http_url(value: &str) -> FieldResult<&str> {
    let value = validate_required(value, "a URL")?;
    let parsed = url::Url::parse(value).map_err(|e| FieldError::InvalidUrl(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(value),
        other => Err(FieldError::InvalidUrl(format!("unsupported scheme '{}'", other))),
    }
}
