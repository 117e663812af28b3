use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("RenderError: {0}")]
    Render(#[from] RenderError),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    /// Non-200 answer from the Guide API. Displays the server supplied message.
    #[error("{}", upstream_display(*status, message))]
    Upstream {
        status: u16,
        endpoint: String,
        message: String,
        errors: Vec<String>,
    },
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

fn upstream_display(status: u16, message: &str) -> String {
    if message.is_empty() {
        format!("request failed with status {}", status)
    } else {
        message.to_string()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing {field}")]
    MissingField { field: String, flag: String },
    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Destination {id} ({name}) has no banner images")]
    MissingBannerImage { id: i64, name: String },
    #[error("Template file not found: {path}")]
    TemplateNotFound { path: String },
    #[error("Failed to read template {path}: {source}")]
    TemplateIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Api(api_error) => match api_error {
                ApiError::Timeout { .. } => ErrorSeverity::Medium,
                ApiError::Upstream { status, .. } | ApiError::Http { status, .. }
                    if *status >= 500 =>
                {
                    ErrorSeverity::High
                }
                ApiError::Upstream { status: 401 | 403, .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Low,
            AppError::Render(RenderError::MissingBannerImage { .. }) => ErrorSeverity::Medium,
            AppError::Render(_) => ErrorSeverity::Critical,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::MissingField { flag, .. }) => {
                Some(format!("pass {} on the command line", flag))
            }
            AppError::Api(ApiError::Timeout { .. }) => Some(
                "Check your connection or raise timeout_ms in config.toml and try again"
                    .to_string(),
            ),
            AppError::Api(ApiError::Upstream {
                status: 401 | 403, ..
            }) => Some("Check --guide-api-key and --company-api-key".to_string()),
            AppError::Render(RenderError::TemplateNotFound { .. }) => Some(
                "Run from the directory containing template.html or pass --template".to_string(),
            ),
            AppError::Render(RenderError::MissingBannerImage { .. }) => {
                Some("Add a banner image to the destination in Guide".to_string())
            }
            _ => None,
        }
    }
}
