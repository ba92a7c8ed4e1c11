//! Log configuration.

use std::str::FromStr;

use hookfeed_config::Config;
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

const DEFAULT_ENV_CONFIG: &str = "info,sqlx=error,hookfeed=debug";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not set tracing global default subscriber: {source}")]
    TracingSetGlobalDefaultError {
        source: tracing::dispatcher::SetGlobalDefaultError,
    },
    #[error("Could not initialize tracing log tracer: {source}")]
    TracingLogTracerError {
        source: tracing::log::SetLoggerError,
    },
    #[error("Wrong env filter configuration: {configuration}: {source}")]
    EnvFilterConfigurationError {
        source: tracing_subscriber::filter::ParseError,
        configuration: String,
    },
}

/// Configure logging.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|e| LoggingError::TracingLogTracerError { source: e })?;

    let log_config = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_ENV_CONFIG.to_string());
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();

    let filter_layer = EnvFilter::from_str(&log_config).map_err(|e| {
        LoggingError::EnvFilterConfigurationError {
            source: e,
            configuration: log_config,
        }
    })?;

    let use_bunyan = config.logging.use_bunyan;
    let hierarchical_layer = if use_bunyan {
        None
    } else {
        Some(
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
    };
    let json_storage_layer = use_bunyan.then_some(JsonStorageLayer);
    let bunyan_layer = use_bunyan.then(|| BunyanFormattingLayer::new(app_name, std::io::stdout));

    let subscriber = tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(hierarchical_layer)
        .with(filter_layer)
        .with(json_storage_layer)
        .with(bunyan_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::TracingSetGlobalDefaultError { source: e })?;

    Ok(())
}
