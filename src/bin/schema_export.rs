// Exports the OpenAPI document for the shared error body.
// Run with: cargo run --features schema-export --bin rest-errors-schema

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use rest_errors::config::SchemaExportConfig;
use rest_errors::openapi::ErrorApiDoc;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean JSON document
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rest_errors=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = SchemaExportConfig::from_env().context("Failed to load configuration")?;

    let doc = ErrorApiDoc::openapi();
    let json = if config.pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    }
    .context("Failed to serialize OpenAPI spec to JSON")?;

    match &config.output_path {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("OpenAPI specification written to {}", path.display());
        }
        None => {
            println!("{}", json);
            info!("OpenAPI specification generated successfully");
        }
    }

    Ok(())
}
