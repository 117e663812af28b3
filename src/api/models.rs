use serde::{Deserialize, Deserializer};

/// Custom deserializer: an explicit `null` becomes the type's zero value,
/// the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Collection models
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Collection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub destinations: Vec<Destination>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Destination {
    // Required: rows are keyed by id, so a record without one is rejected
    // rather than merged under 0
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// HTML authored in Guide; rendered without escaping
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "webSite", default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(rename = "bannerImages", default, deserialize_with = "null_as_default")]
    pub banner_images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suburb: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postcode: String,
}

// Error payload returned with non-200 responses
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ApiErrorBody {
    #[serde(rename = "errorMessage", default, deserialize_with = "null_as_default")]
    pub error_message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
}

/// Parameters for a single collection lookup
#[derive(Debug, Clone)]
pub struct FindCollectionInput {
    pub company_api_key: String,
    pub region_id: i64,
    pub collection_id: i64,
}
