//! easybroker-client - Async client for the EasyBroker listings API
//!
//! Authenticated access to paginated property listings, single property lookup,
//! and contact request submission, plus a CLI built on top of it.

pub mod commands;
pub mod config;
pub mod easybroker;
pub mod error;
pub mod format;
pub mod query;

pub use config::Config;
pub use easybroker::{
    ContactRequest, EasyBrokerClient, ListingApi, ListingRequest, Property, PropertyList,
    StatusOption,
};
pub use error::{ClientError, Result};
pub use query::SearchOptions;
