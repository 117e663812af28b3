use crate::api::client::GuideClient;
use crate::api::models::{Collection, FindCollectionInput};
use crate::error::ApiError;
use async_trait::async_trait;

/// Anything that can look up a collection by region and id
#[async_trait]
pub trait CollectionSource {
    async fn find_collection(&self, input: &FindCollectionInput) -> Result<Collection, ApiError>;
}

#[async_trait]
impl CollectionSource for GuideClient {
    async fn find_collection(&self, input: &FindCollectionInput) -> Result<Collection, ApiError> {
        GuideClient::find_collection(self, input).await
    }
}
