//! HTTP client for the EasyBroker listings API.

use super::models::{ContactRequest, Property, PropertyList};
use crate::config::Config;
use crate::error::{ClientError, Result, MAX_LIMIT};
use crate::query::SearchOptions;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};
use wreq::header::{ACCEPT, CONTENT_TYPE};
use wreq::{Client, RequestBuilder, StatusCode};

/// Default API root.
pub const EASYBROKER_BASE: &str = "https://api.stagingeb.com/v1";

/// Header carrying the API key.
pub const AUTH_HEADER: &str = "X-Authorization";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;

/// Parameters for one listings page request.
///
/// The limit is checked here, so an oversized request never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    page: u32,
    limit: u32,
    options: Option<SearchOptions>,
}

impl ListingRequest {
    /// Creates a request for `page` with `limit` items per page.
    ///
    /// Fails with [`ClientError::LimitExceeded`] when `limit` is above 50. Page 0 is treated as 1.
    pub fn new(page: u32, limit: u32) -> Result<Self> {
        if limit > MAX_LIMIT {
            return Err(ClientError::LimitExceeded { limit });
        }

        Ok(Self { page: page.max(1), limit, options: None })
    }

    /// Attaches search filters.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn options(&self) -> Option<&SearchOptions> {
        self.options.as_ref()
    }

    /// Builds the path and query relative to the API root.
    pub fn path_and_query(&self) -> String {
        let mut path = format!("properties?page={}&limit={}", self.page, self.limit);

        if let Some(options) = &self.options {
            let fragment = options.to_query();
            if !fragment.is_empty() {
                path.push('&');
                path.push_str(&fragment);
            }
        }

        path
    }
}

impl Default for ListingRequest {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_LIMIT, options: None }
    }
}

/// Operations offered by the listings API - enables mocking for tests.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// Fetches one page of properties.
    async fn get_property_list(&self, request: &ListingRequest) -> Result<PropertyList>;

    /// Fetches a single property. `Ok(None)` means the API answered 404.
    async fn get_property_by_id(&self, id: &str) -> Result<Option<Property>>;

    /// Submits a contact request. Resolves to `true` once the API accepts it.
    async fn post_contact_request(&self, request: &ContactRequest) -> Result<bool>;

    /// Fetches every property, 50 per page, until the cursor reports no next page.
    ///
    /// Pages are requested one after another. The first failure aborts and is returned as is.
    async fn get_all_properties(&self) -> Result<Vec<Property>> {
        let mut properties = Vec::new();
        let mut page = 1;

        loop {
            let request = ListingRequest::new(page, MAX_LIMIT)?;
            let list = self.get_property_list(&request).await?;

            debug!(
                "Page {} returned {} properties (total {})",
                page,
                list.content.len(),
                list.pagination.total
            );

            properties.extend(list.content);

            if list.pagination.next_page.is_none() {
                break;
            }

            page += 1;
        }

        info!("Fetched {} properties across {} pages", properties.len(), page);
        Ok(properties)
    }
}

/// EasyBroker HTTP client. Holds the API key and API root for its whole lifetime.
pub struct EasyBrokerClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl EasyBrokerClient {
    /// Creates a client against the default API root.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, EASYBROKER_BASE)
    }

    /// Creates a client with a custom API root (for testing).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::build(api_key.into(), base_url.into(), None)
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(ClientError::MissingApiKey)?;
        Self::build(api_key, config.base_url.clone(), config.proxy.as_deref())
    }

    fn build(api_key: String, base_url: String, proxy: Option<&str>) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        let mut builder = Client::builder().gzip(true).brotli(true);

        if let Some(proxy_url) = proxy {
            debug!("Configuring proxy: {}", proxy_url);
            builder = builder.proxy(wreq::Proxy::all(proxy_url)?);
        }

        let client = builder.build()?;

        Ok(Self { client, api_key, base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// Returns the API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Attaches the credential and JSON negotiation headers.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(AUTH_HEADER, self.api_key.as_str())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
    }

    /// Sends a request and returns the status with the raw body.
    async fn send(&self, builder: RequestBuilder) -> Result<(StatusCode, String)> {
        let response = self.authorize(builder).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;
        Ok((status, body))
    }
}

/// Builds the error for a non-success response, keeping the JSON body verbatim.
fn remote_error(status: StatusCode, body: &str) -> ClientError {
    warn!("EasyBroker returned status: {}", status);

    match serde_json::from_str::<Value>(body) {
        Ok(payload) => ClientError::Remote { status: status.as_u16(), payload },
        Err(e) => ClientError::Decode(e),
    }
}

#[async_trait]
impl ListingApi for EasyBrokerClient {
    async fn get_property_list(&self, request: &ListingRequest) -> Result<PropertyList> {
        let url = self.url(&request.path_and_query());

        info!("Listing properties (page {}, limit {})", request.page(), request.limit());
        debug!("GET {}", url);

        let (status, body) = self.send(self.client.get(url.as_str())).await?;
        if !status.is_success() {
            return Err(remote_error(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn get_property_by_id(&self, id: &str) -> Result<Option<Property>> {
        let url = self.url(&format!("properties/{}", urlencoding::encode(id)));

        info!("Fetching property: {}", id);
        debug!("GET {}", url);

        let (status, body) = self.send(self.client.get(url.as_str())).await?;
        if status == StatusCode::NOT_FOUND {
            debug!("Property {} not found", id);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(remote_error(status, &body));
        }

        Ok(Some(serde_json::from_str(&body)?))
    }

    async fn post_contact_request(&self, request: &ContactRequest) -> Result<bool> {
        let url = self.url("contact_requests");
        let payload = serde_json::to_string(request)?;

        info!("Submitting contact request for property: {}", request.property_id);
        debug!("POST {}", url);

        let (status, body) = self.send(self.client.post(url.as_str()).body(payload)).await?;
        if !status.is_success() {
            return Err(remote_error(status, &body));
        }

        Ok(true)
    }
}
