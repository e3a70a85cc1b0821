//! Contact request submission command.

use crate::config::Config;
use crate::easybroker::{ContactRequest, EasyBrokerClient, ListingApi};
use anyhow::{Context, Result};
use tracing::info;

/// Submits a lead for a property.
pub struct ContactCommand {
    config: Config,
}

impl ContactCommand {
    /// Creates a new contact command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Submits the request and returns a confirmation line.
    pub async fn execute(&self, request: &ContactRequest) -> Result<String> {
        let client =
            EasyBrokerClient::from_config(&self.config).context("Failed to create API client")?;

        self.execute_with_client(&client, request).await
    }

    /// Submits the request with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ListingApi,
        request: &ContactRequest,
    ) -> Result<String> {
        info!("Sending contact request for {}", request.property_id);

        client
            .post_contact_request(request)
            .await
            .context("Failed to submit contact request")?;

        Ok(format!("Contact request sent for property {}", request.property_id))
    }
}
