//! Merge destinations from several collections into one set keyed by id.
//!
//! Rows keep the position where an id was first seen; the record itself is
//! the one from the last collection that contained it.

use crate::api::models::{Collection, Destination, FindCollectionInput};
use crate::core::services::traits::CollectionSource;
use crate::error::ApiError;
use indexmap::IndexMap;

pub fn merge_destinations<I>(collections: I) -> IndexMap<i64, Destination>
where
    I: IntoIterator<Item = Collection>,
{
    let mut by_id = IndexMap::new();
    for collection in collections {
        for destination in collection.destinations {
            by_id.insert(destination.id, destination);
        }
    }
    by_id
}

/// Fetch each collection in order and merge the results.
///
/// Stops at the first failed fetch; later ids are never requested.
pub async fn merge_collections<S>(
    source: &S,
    region_id: i64,
    collection_ids: &[i64],
    company_api_key: &str,
) -> Result<Vec<Destination>, ApiError>
where
    S: CollectionSource + ?Sized,
{
    let mut collections = Vec::with_capacity(collection_ids.len());

    for &collection_id in collection_ids {
        let input = FindCollectionInput {
            company_api_key: company_api_key.to_string(),
            region_id,
            collection_id,
        };
        let collection = source.find_collection(&input).await?;
        log::info!(
            "collection {} '{}': {} destinations",
            collection_id,
            collection.name,
            collection.destinations.len()
        );
        collections.push(collection);
    }

    let merged = merge_destinations(collections);
    log::info!("{} unique destinations", merged.len());
    Ok(merged.into_values().collect())
}
