pub mod page_service;
pub mod traits;

pub use page_service::{PageRequest, PageService};
pub use traits::CollectionSource;
