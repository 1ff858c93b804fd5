use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use detailing_models::{
    channel::{ChannelEndpoints, RecipientNumber},
    page::PageSection,
};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the config from the given files. Later files override values of
/// earlier ones.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let sources = paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    from_sources(sources.iter().map(String::as_str))
}

/// Builds the config from TOML sources, later sources taking precedence.
pub fn from_sources<'a>(sources: impl IntoIterator<Item = &'a str>) -> anyhow::Result<Config> {
    sources
        .into_iter()
        .fold(config::Config::builder(), |builder, source| {
            builder.add_source(File::from_str(source, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub booking: BookingConfig,
    pub channel: ChannelConfig,
    pub page: PageConfig,
}

#[derive(Debug, Deserialize)]
pub struct BookingConfig {
    pub business_name: String,
    pub submit_delay: Duration,
    pub fallback_delay: Duration,
    pub min_lead_days: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChannelConfig {
    pub recipient: RecipientNumber,
    pub app_url: Url,
    pub web_url: Url,
    pub alternate_url: Url,
}

#[derive(Debug, Deserialize)]
pub struct PageConfig {
    pub faq_items: usize,
    pub sections: Vec<PageSection>,
}

impl ChannelConfig {
    pub fn endpoints(&self) -> ChannelEndpoints {
        ChannelEndpoints {
            recipient: self.recipient.clone(),
            app_url: self.app_url.clone(),
            web_url: self.web_url.clone(),
            alternate_url: self.alternate_url.clone(),
        }
    }
}
