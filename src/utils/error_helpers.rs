use crate::error::ApiError;

/// Helper functions for standardizing reqwest error conversions.
/// Convert reqwest errors to ApiError with endpoint context
pub fn convert_request_error(error: reqwest::Error, endpoint: &str, timeout_ms: u64) -> ApiError {
    if error.is_timeout() {
        return convert_timeout_error(endpoint, timeout_ms);
    }

    ApiError::Http {
        status: error.status().map(|s| s.as_u16()).unwrap_or(0),
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}

/// Convert timeout errors to ApiError with endpoint context
pub fn convert_timeout_error(endpoint: &str, timeout_ms: u64) -> ApiError {
    ApiError::Timeout {
        timeout_ms,
        endpoint: endpoint.to_string(),
    }
}

/// Convert JSON deserialization errors to ApiError with endpoint context
pub fn convert_json_error(error: reqwest::Error, endpoint: &str) -> ApiError {
    ApiError::Decode {
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}
