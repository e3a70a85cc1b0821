//! Single property lookup command.

use crate::config::Config;
use crate::easybroker::{EasyBrokerClient, ListingApi};
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::info;

/// Looks up a property by public id.
pub struct PropertyCommand {
    config: Config,
}

impl PropertyCommand {
    /// Creates a new property command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches a property and returns formatted output.
    pub async fn execute(&self, id: &str) -> Result<String> {
        let client =
            EasyBrokerClient::from_config(&self.config).context("Failed to create API client")?;

        self.execute_with_client(&client, id).await
    }

    /// Fetches a property with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl ListingApi, id: &str) -> Result<String> {
        let id = id.trim();
        if id.is_empty() {
            anyhow::bail!("Property id cannot be empty");
        }

        info!("Looking up property: {}", id);

        match client.get_property_by_id(id).await? {
            Some(property) => Ok(Formatter::new(self.config.format).format_property(&property)),
            None => Ok(format!("Property not found: {}", id)),
        }
    }
}
