use ferrous_lookup_domain::config::LogFormat;
use ferrous_lookup_domain::{CliOverrides, Config};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const FALLBACK_LOG_SPEC: &str = "warn";

pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// `RUST_LOG` when set and non-empty, otherwise the configured level.
fn effective_log_spec(config_level: &str, rust_log: Option<String>) -> String {
    match rust_log {
        Some(spec) if !spec.trim().is_empty() => spec,
        _ => config_level.to_string(),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// the lookup result.
pub fn init_logging(config: &Config) {
    let spec = effective_log_spec(&config.logging.level, std::env::var("RUST_LOG").ok());

    let (filter, rejected) = match EnvFilter::try_new(&spec) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new(FALLBACK_LOG_SPEC), true),
    };

    let registry = tracing_subscriber::registry().with(filter);

    match config.logging.format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr);
            let _ = registry.with(layer).try_init();
        }
        LogFormat::Text => {
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            let _ = registry.with(layer).try_init();
        }
    }

    if rejected {
        warn!(spec = %spec, fallback = FALLBACK_LOG_SPEC, "Invalid log filter, using fallback");
    }
    debug!(spec = %spec, format = ?config.logging.format, "Logging initialized");
}
