//! In-memory `ListingApi` used by command tests.

use crate::easybroker::{
    ContactRequest, ListingApi, ListingRequest, Location, NextPage, Pagination, Property,
    PropertyList,
};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

pub fn make_property(id: &str, title: &str) -> Property {
    Property {
        public_id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        title_image_full: None,
        title_image_thumb: None,
        images: Vec::new(),
        property_type: "Casa".to_string(),
        location: Location { name: "Guadalajara".to_string() },
    }
}

/// Serves fixed pages in order; the last page carries no next page.
pub struct MockListingClient {
    pages: Vec<Vec<Property>>,
    list_call_count: AtomicU32,
    requests: Mutex<Vec<ListingRequest>>,
    contacts: Mutex<Vec<ContactRequest>>,
}

impl MockListingClient {
    pub fn with_pages(pages: Vec<Vec<Property>>) -> Self {
        Self {
            pages,
            list_call_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
            contacts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.list_call_count.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ListingRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn contacts(&self) -> Vec<ContactRequest> {
        self.contacts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListingApi for MockListingClient {
    async fn get_property_list(&self, request: &ListingRequest) -> Result<PropertyList> {
        self.list_call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let idx = (request.page() - 1) as usize;
        let content = self.pages.get(idx).cloned().unwrap_or_default();
        let next_page = (idx + 1 < self.pages.len()).then(|| NextPage::Number(request.page() + 1));

        Ok(PropertyList {
            pagination: Pagination {
                limit: request.limit(),
                page: request.page(),
                total: self.pages.iter().map(Vec::len).sum::<usize>() as u64,
                next_page,
            },
            content,
        })
    }

    async fn get_property_by_id(&self, id: &str) -> Result<Option<Property>> {
        Ok(self.pages.iter().flatten().find(|p| p.public_id == id).cloned())
    }

    async fn post_contact_request(&self, request: &ContactRequest) -> Result<bool> {
        self.contacts.lock().unwrap().push(request.clone());
        Ok(true)
    }
}
