pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → API / Display)
pub mod cli; // Command-line interface
pub mod core; // Fetch, merge and render orchestration
pub mod storage; // Configuration file

/// Support modules (used across layers)
pub mod api; // Guide API client
pub mod display; // HTML rendering
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
