//! Fixed file locations and logging setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

/// Routing table dump read on every run.
pub const INPUT_FILE: &str = "routes.txt";
/// Report written on every run.
pub const OUTPUT_FILE: &str = "routes.csv";

/// Env var overriding the log4rs config location.
pub const LOG_CONFIG_ENV: &str = "ROUTE_PARSE_LOG_CONFIG";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub fn log_config_path() -> String {
    std::env::var(LOG_CONFIG_ENV).unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string())
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

/// Initialise log4rs from the yaml config, or warn-level stderr logging
/// when that file is missing or broken.
pub fn init_logging() {
    let path = log_config_path();
    if let Err(file_err) = log4rs::init_file(&path, Default::default()) {
        match fallback_config().map(log4rs::init_config) {
            Ok(Ok(_handle)) => {
                log::warn!("Using stderr logging, could not load {path}: {file_err}")
            }
            Ok(Err(e)) => eprintln!("Error initializing log4rs: {e}"),
            Err(e) => eprintln!("Error building log config: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_config_builds() {
        assert!(fallback_config().is_ok());
    }

    #[test]
    fn test_log_config_path_default() {
        if std::env::var(LOG_CONFIG_ENV).is_err() {
            assert_eq!(log_config_path(), "log4rs.yml");
        }
    }
}
