use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SchemaExportConfig {
    /// File to write the document to; stdout when unset
    pub output_path: Option<PathBuf>,
    pub pretty: bool,
}

impl SchemaExportConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(SchemaExportConfig {
            output_path: lookup("REST_ERRORS_SCHEMA_OUT")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            pretty: lookup("REST_ERRORS_SCHEMA_PRETTY")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .context("REST_ERRORS_SCHEMA_PRETTY must be true or false")?,
        })
    }
}
