use std::sync::Arc;

use tracing::info;

use super::{BlogStore, FixtureStore, InquiryStore, Latency};
use crate::fixtures::Fixtures;
use crate::model::{Capability, Certification, Product};

/// Every store the site serves from, shared by all request handlers
pub struct Catalog {
    pub products: Arc<FixtureStore<Product>>,
    pub capabilities: Arc<FixtureStore<Capability>>,
    pub certifications: Arc<FixtureStore<Certification>>,
    pub blog: Arc<BlogStore>,
    pub inquiries: Arc<InquiryStore>,
}

impl Catalog {
    pub fn new(fixtures: Fixtures, latency: Latency) -> Self {
        info!(
            "Catalog loaded: {} products, {} capabilities, {} certifications, {} blog posts",
            fixtures.products.len(),
            fixtures.capabilities.len(),
            fixtures.certifications.len(),
            fixtures.blogs.len()
        );
        if latency.is_enabled() {
            info!("Simulated store latency enabled: {:?}", latency);
        }

        Self {
            products: Arc::new(FixtureStore::new(fixtures.products, latency)),
            capabilities: Arc::new(FixtureStore::new(fixtures.capabilities, latency)),
            certifications: Arc::new(FixtureStore::new(fixtures.certifications, latency)),
            blog: Arc::new(BlogStore::new(fixtures.blogs, latency)),
            inquiries: Arc::new(InquiryStore::new(latency)),
        }
    }
}
