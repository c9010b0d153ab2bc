//! Log configuration.

use std::str::FromStr;

use appscout_config::Config;
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

const DEFAULT_ENV_CONFIG: &str = "warn,appscout=info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error(
        "Could not set tracing global default subscriber,\n  caused by: {}",
        source
    )]
    TracingSetGlobalDefaultError {
        source: tracing::dispatcher::SetGlobalDefaultError,
    },
    #[error("Could not initialize tracing log tracer,\n  caused by: {}", source)]
    TracingLogTracerError {
        source: tracing::log::SetLoggerError,
    },
    #[error(
        "Wrong env filter configuration: {}\n  caused by: {}",
        configuration,
        source
    )]
    EnvFilterConfigurationError {
        source: tracing_subscriber::filter::ParseError,
        configuration: String,
    },
}

/// Build the env filter, from `RUST_LOG` or the default directives.
fn build_filter_layer(log_config: Option<String>) -> Result<EnvFilter, LoggingError> {
    let log_config = log_config.unwrap_or_else(|| DEFAULT_ENV_CONFIG.to_string());

    EnvFilter::from_str(&log_config).map_err(|e| LoggingError::EnvFilterConfigurationError {
        source: e,
        configuration: log_config,
    })
}

/// Configure logging.
///
/// Everything goes to stderr, stdout is reserved for reports.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|e| LoggingError::TracingLogTracerError { source: e })?;

    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let filter_layer = build_filter_layer(std::env::var("RUST_LOG").ok())?;

    let hierarchical_layer = {
        if config.logging.use_bunyan {
            None
        } else {
            Some(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
        }
    };
    let error_layer = ErrorLayer::default();
    let json_storage_layer = {
        if config.logging.use_bunyan {
            Some(JsonStorageLayer)
        } else {
            None
        }
    };
    let bunyan_layer = {
        if config.logging.use_bunyan {
            Some(BunyanFormattingLayer::new(app_name, std::io::stderr))
        } else {
            None
        }
    };

    let subscriber = tracing_subscriber::registry()
        .with(error_layer)
        .with(hierarchical_layer)
        .with(filter_layer)
        .with(json_storage_layer)
        .with(bunyan_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::TracingSetGlobalDefaultError { source: e })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_valid() {
        assert!(build_filter_layer(None).is_ok());
    }

    #[test]
    fn custom_filter() {
        assert!(build_filter_layer(Some("debug,appscout_core=trace".into())).is_ok());
        assert!(matches!(
            build_filter_layer(Some("appscout=notalevel".into())),
            Err(LoggingError::EnvFilterConfigurationError { .. })
        ));
    }
}
