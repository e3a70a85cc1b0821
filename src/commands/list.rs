//! Listing commands: one page, or every page.

use crate::config::Config;
use crate::easybroker::{EasyBrokerClient, ListingApi, ListingRequest, StatusOption};
use crate::format::Formatter;
use crate::query::SearchOptions;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Lists properties.
pub struct ListCommand {
    config: Config,
}

impl ListCommand {
    /// Creates a new list command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches one page and returns formatted output.
    pub async fn execute(&self, page: u32, limit: u32, statuses: &[StatusOption]) -> Result<String> {
        let client =
            EasyBrokerClient::from_config(&self.config).context("Failed to create API client")?;

        self.execute_with_client(&client, page, limit, statuses).await
    }

    /// Fetches one page with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ListingApi,
        page: u32,
        limit: u32,
        statuses: &[StatusOption],
    ) -> Result<String> {
        let mut request = ListingRequest::new(page, limit)?;

        if !statuses.is_empty() {
            let options = SearchOptions::new().statuses(statuses.iter().copied());
            for filter in options.filters() {
                debug!("Active filter: {}", filter.description());
            }
            request = request.with_options(options);
        }

        let list = client.get_property_list(&request).await.context("Failed to list properties")?;

        info!(
            "Page {} of listing returned {} properties ({} total)",
            list.pagination.page,
            list.count(),
            list.pagination.total
        );

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_properties(&list.content))
    }

    /// Fetches every page and returns formatted output.
    pub async fn execute_all(&self) -> Result<String> {
        let client =
            EasyBrokerClient::from_config(&self.config).context("Failed to create API client")?;

        self.execute_all_with_client(&client).await
    }

    /// Fetches every page with a provided client (for testing).
    pub async fn execute_all_with_client(&self, client: &impl ListingApi) -> Result<String> {
        let properties =
            client.get_all_properties().await.context("Failed to fetch all properties")?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_properties(&properties))
    }
}
