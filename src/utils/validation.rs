//! Input validation for command-line values and configuration.

use crate::error::ConfigError;

/// Validate that a URL is properly formatted
pub fn validate_url(field: &str, url: &str) -> Result<(), ConfigError> {
    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: url.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        });
    }

    Ok(())
}

/// Return the value when it is present and non-empty
pub fn require_value<'a>(
    value: Option<&'a str>,
    field: &str,
    flag: &str,
) -> Result<&'a str, ConfigError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(field, flag)),
    }
}

/// Return the id when it is present and non-zero
pub fn require_id(value: Option<i64>, field: &str, flag: &str) -> Result<i64, ConfigError> {
    match value {
        Some(id) if id != 0 => Ok(id),
        _ => Err(missing(field, flag)),
    }
}

/// Parse a comma separated list of collection ids, e.g. `"12,40,7"`.
pub fn parse_collection_ids(list: &str) -> Result<Vec<i64>, ConfigError> {
    let mut ids = Vec::new();

    for token in list.split(',') {
        let token = token.trim();
        let id = token
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "collections".to_string(),
                value: token.to_string(),
                reason: format!("invalid collection ID '{}': {}", token, e),
            })?;

        if id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "collections".to_string(),
                value: token.to_string(),
                reason: "collection ID must be non-zero".to_string(),
            });
        }
        ids.push(id);
    }

    Ok(ids)
}

fn missing(field: &str, flag: &str) -> ConfigError {
    ConfigError::MissingField {
        field: field.to_string(),
        flag: flag.to_string(),
    }
}
