//! Tracing subscriber setup shared by the binaries

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(config: &LoggingConfig) -> String {
    let level = config.level.to_ascii_lowercase();
    format!("fairverify={level},fairverify_api={level},tower_http={level}")
}

/// Install the global subscriber on stderr, leaving stdout to command output.
/// Later calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let config = LoggingConfig {
            level: "DEBUG".to_string(),
            ansi: false,
        };
        assert_eq!(
            default_filter(&config),
            "fairverify=debug,fairverify_api=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_init_twice() {
        let config = LoggingConfig::default();
        init_logging(&config);
        init_logging(&config);
    }
}
