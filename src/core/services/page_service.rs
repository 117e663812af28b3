use crate::core::aggregator::merge_collections;
use crate::core::services::traits::CollectionSource;
use crate::display::page::{Page, PageRenderer};
use crate::display::row::build_rows;
use std::io::Write;

/// What to put on one landing page
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub region_id: i64,
    pub collection_ids: Vec<i64>,
    pub company_api_key: String,
}

pub struct PageService<S> {
    source: S,
    renderer: PageRenderer,
    image_host: String,
}

impl<S: CollectionSource> PageService<S> {
    pub fn new(source: S, renderer: PageRenderer, image_host: String) -> Self {
        Self {
            source,
            renderer,
            image_host: image_host.trim_end_matches('/').to_string(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch, merge and render. Returns the number of rows written.
    pub async fn generate<W: Write>(&self, request: &PageRequest, out: &mut W) -> crate::Result<usize> {
        let destinations = merge_collections(
            &self.source,
            request.region_id,
            &request.collection_ids,
            &request.company_api_key,
        )
        .await?;

        let rows = build_rows(&destinations, &self.image_host)?;
        let count = rows.len();

        self.renderer.render(&Page::new(rows), out)?;
        log::info!("Rendered {} rows", count);
        Ok(count)
    }
}
