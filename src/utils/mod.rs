//! Utils module - Shared utilities and helpers

/// reqwest error conversion with endpoint context
pub mod error_helpers;

/// Logger setup and error reporting
pub mod logging;

/// Command-line value validation and parsing
pub mod validation;
