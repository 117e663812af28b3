use crate::api::models::{ApiErrorBody, Collection, FindCollectionInput};
use crate::error::ApiError;
use crate::utils::error_helpers::*;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://guide.app";
pub const DEFAULT_TIMEOUT_MS: u64 = 2500;
const USER_AGENT: &str = concat!("guide-seo/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct GuideClient {
    client: Client,
    pub base_url: String,
    api_key: String,
    timeout_ms: u64,
}

impl GuideClient {
    // Create client with the default host and timeout
    pub fn new(api_key: String) -> Result<Self, ApiError> {
        Self::with_settings(DEFAULT_BASE_URL.to_string(), api_key, DEFAULT_TIMEOUT_MS)
    }

    pub fn with_settings(
        base_url: String,
        api_key: String,
        timeout_ms: u64,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init", timeout_ms))?;

        Ok(GuideClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout_ms,
        })
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header("apiKey", &self.api_key)
    }

    /// Fetch one collection of a region. A single attempt, no retries.
    pub async fn find_collection(&self, input: &FindCollectionInput) -> Result<Collection, ApiError> {
        let endpoint = format!(
            "/api/v1/regions/{}/collections/{}?type=Collection",
            input.region_id, input.collection_id
        );
        log::debug!("GET {}{}", self.base_url, endpoint);

        let response = self
            .build_request(Method::GET, &endpoint)
            .header("companyKey", &input.company_api_key)
            .send()
            .await
            .map_err(|e| convert_request_error(e, &endpoint, self.timeout_ms))?;

        let status = response.status();
        log::debug!("{} -> {}", endpoint, status);

        if status != StatusCode::OK {
            // An unreadable error body leaves the message empty
            let body = response.json::<ApiErrorBody>().await.unwrap_or_default();

            return Err(ApiError::Upstream {
                status: status.as_u16(),
                endpoint,
                message: body.error_message,
                errors: body.errors,
            });
        }

        response
            .json::<Collection>()
            .await
            .map_err(|e| convert_json_error(e, &endpoint))
    }
}
