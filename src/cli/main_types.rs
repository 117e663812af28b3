use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "guide-seo")]
#[command(about = "Render Guide destination collections into a static SEO landing page")]
#[command(version)]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding config.toml
    #[arg(long)]
    pub config_dir: Option<String>,

    /// HTML template to fill (default: template.html)
    #[arg(long)]
    pub template: Option<String>,

    /// Guide API key
    #[arg(long, env = "GUIDE_API_KEY", hide_env_values = true)]
    pub guide_api_key: Option<String>,

    /// Company API key
    #[arg(long, env = "GUIDE_COMPANY_API_KEY", hide_env_values = true)]
    pub company_api_key: Option<String>,

    /// Region ID
    #[arg(long)]
    pub region: Option<i64>,

    /// Single collection ID
    #[arg(long, conflicts_with = "collections")]
    pub collection: Option<i64>,

    /// Comma separated collection IDs, e.g. 12,40,7
    #[arg(long)]
    pub collections: Option<String>,
}
