use crate::error::AppError;
use env_logger::{Env, Target};

/// Send log records to stderr so stdout carries only the rendered page.
/// `RUST_LOG` overrides the level picked from `verbose`.
pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    // A second init (tests) is not an error
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

/// Print a fatal error and its hint to stderr regardless of log level.
pub fn report_error(err: &AppError) {
    eprintln!("Error: {}", err);
    if let Some(hint) = err.troubleshooting_hint() {
        eprintln!("Hint: {}", hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_init_logger_twice() {
        init_logger(false);
        init_logger(true);
        report_error(&AppError::Config(ConfigError::MissingField {
            field: "region ID".to_string(),
            flag: "--region".to_string(),
        }));
    }
}
