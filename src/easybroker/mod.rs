//! EasyBroker API client, data models, and listing statuses.

pub mod client;
pub mod models;
pub mod status;

pub use client::{EasyBrokerClient, ListingApi, ListingRequest, EASYBROKER_BASE};
pub use models::{ContactRequest, Image, Location, NextPage, Pagination, Property, PropertyList};
pub use status::StatusOption;
