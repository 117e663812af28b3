use crate::api::client::GuideClient;
use crate::cli::main_types::Cli;
use crate::core::services::page_service::{PageRequest, PageService};
use crate::display::page::{DEFAULT_TEMPLATE_PATH, PageRenderer};
use crate::error::AppError;
use crate::storage::config::Config;
use crate::utils::validation::{parse_collection_ids, require_id, require_value};
use std::io::Write;
use std::path::PathBuf;

/// Command-line values after validation
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    pub guide_api_key: String,
    pub company_api_key: String,
    pub region_id: i64,
    pub collection_ids: Vec<i64>,
    pub template_path: PathBuf,
}

impl RunArgs {
    /// Check required values in flag order. Nothing here touches the network.
    pub fn from_cli(cli: &Cli, config: &Config) -> Result<Self, AppError> {
        let guide_api_key =
            require_value(cli.guide_api_key.as_deref(), "guide api key", "--guide-api-key")?;
        let company_api_key = require_value(
            cli.company_api_key.as_deref(),
            "company api key",
            "--company-api-key",
        )?;
        let region_id = require_id(cli.region, "region ID", "--region")?;

        let collection_ids = match (cli.collection, cli.collections.as_deref()) {
            (Some(id), _) => vec![require_id(Some(id), "collection ID", "--collection")?],
            (None, list) => {
                let list = require_value(list, "collection IDs", "--collections")?;
                parse_collection_ids(list)?
            }
        };

        let template_path = cli
            .template
            .clone()
            .or_else(|| config.template_path.clone())
            .unwrap_or_else(|| DEFAULT_TEMPLATE_PATH.to_string());

        Ok(Self {
            guide_api_key: guide_api_key.to_string(),
            company_api_key: company_api_key.to_string(),
            region_id,
            collection_ids,
            template_path: PathBuf::from(template_path),
        })
    }
}

pub struct Dispatcher {
    config: Config,
}

impl Dispatcher {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Validate, load the template, then fetch and render into `out`.
    pub async fn dispatch<W: Write>(&self, cli: &Cli, out: &mut W) -> Result<usize, AppError> {
        self.config.validate()?;
        let args = RunArgs::from_cli(cli, &self.config)?;

        log::debug!(
            "region {} collections {:?} template {}",
            args.region_id,
            args.collection_ids,
            args.template_path.display()
        );

        let renderer = PageRenderer::from_file(&args.template_path)?;
        let client = GuideClient::with_settings(
            self.config.api_base_url.clone(),
            args.guide_api_key.clone(),
            self.config.timeout_ms,
        )?;
        let service = PageService::new(client, renderer, self.config.image_host.clone());

        let request = PageRequest {
            region_id: args.region_id,
            collection_ids: args.collection_ids,
            company_api_key: args.company_api_key,
        };
        service.generate(&request, out).await
    }
}
