pub mod page;
pub mod row;

pub use page::{DEFAULT_TEMPLATE_PATH, Page, PageRenderer};
pub use row::{Row, TrustedHtml, build_rows, image_url};
