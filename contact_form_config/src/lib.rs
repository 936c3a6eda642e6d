use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the configuration from the given TOML files. Later files override
/// values of earlier ones.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub page: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageConfig {
    /// Shown as the page title and as the form header.
    pub title: String,
    /// Value of the `lang` attribute of the page.
    pub lang: String,
}
