use crate::utils::error::{CartError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> CartError {
    CartError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// `/products/{id}` and `/stock/{id}` are appended to the endpoint, so it must
/// be an http(s) base without query or fragment.
pub fn validate_api_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| invalid("api_endpoint", endpoint, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid(
                "api_endpoint",
                endpoint,
                format!("Unsupported URL scheme: {}", scheme),
            ))
        }
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            "api_endpoint",
            endpoint,
            "Endpoint cannot carry a query or fragment",
        ));
    }
    Ok(())
}

pub fn validate_storage_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid("storage_path", path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid("storage_path", path, "Path contains null bytes"));
    }
    Ok(())
}

/// The key doubles as a file name for `FileStore`, where every character
/// other than `[A-Za-z0-9._-]` becomes `_`. A key without a single letter or
/// digit would collide with unrelated keys after that mapping.
pub fn validate_storage_key(key: &str) -> Result<()> {
    if key.chars().any(char::is_control) {
        return Err(invalid("storage_key", key.escape_debug(), "Key contains control characters"));
    }
    if !key.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid(
            "storage_key",
            key,
            "Key must contain at least one letter or digit",
        ));
    }
    Ok(())
}

pub fn validate_request_timeout(seconds: Option<u64>) -> Result<()> {
    match seconds {
        Some(0) => Err(invalid(
            "request_timeout",
            0,
            "Timeout must be at least 1 second, omit it to wait indefinitely",
        )),
        _ => Ok(()),
    }
}
