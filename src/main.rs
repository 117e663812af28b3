use clap::Parser;
use guide_seo::AppError;
use guide_seo::cli::dispatcher::Dispatcher;
use guide_seo::cli::main_types::Cli;
use guide_seo::storage::config::Config;
use guide_seo::utils::logging::{init_logger, report_error};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(err) => {
            report_error(&AppError::from(err));
            std::process::exit(1);
        }
    };

    let dispatcher = Dispatcher::new(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = dispatcher.dispatch(&cli, &mut out).await {
        report_error(&e);
        std::process::exit(1);
    }
}
