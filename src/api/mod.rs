//! API layer - Guide HTTP client and data models

pub mod client;
pub mod models;

pub use client::GuideClient;
pub use models::{ApiErrorBody, Collection, Destination, FindCollectionInput};
