pub mod aggregator;
pub mod services;
