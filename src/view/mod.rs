//! Page-level view state: loading, derived listings and the detail overlay

pub mod content;
pub mod listing;
pub mod loadable;
pub mod modal;
pub mod spec_sheet;

pub use content::{Block, Span};
pub use listing::ListingPage;
pub use loadable::{FetchGuard, FetchTicket, Loadable};
pub use modal::{ModalState, ScrollFlag, ScrollLock};
pub use spec_sheet::{SpecSheet, SpecSheetError, spec_sheet};

use crate::model::{Id, Product};

/// Where the detail overlay's quote button leads
pub const QUOTE_PAGE: &str = "/contact";

/// Products page: filterable grid plus the product detail overlay
#[derive(Debug)]
pub struct ProductBrowser {
    pub listing: ListingPage<Product>,
    pub detail: ModalState<Product>,
}

impl ProductBrowser {
    pub fn new() -> Self {
        Self {
            listing: ListingPage::new("products"),
            detail: ModalState::new(),
        }
    }

    pub fn with_detail(detail: ModalState<Product>) -> Self {
        Self {
            listing: ListingPage::new("products"),
            detail,
        }
    }

    /// Open the overlay on a product from the visible grid
    pub fn view_details(&mut self, id: Id) -> bool {
        match self.listing.visible().iter().find(|p| p.id == id) {
            Some(product) => {
                let product = product.clone();
                self.detail.open(product);
                true
            }
            None => false,
        }
    }
}

impl Default for ProductBrowser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, category: &str) -> Product {
        Product {
            id: Id::new(id),
            name: format!("Part {}", id),
            category: category.to_string(),
            description: String::new(),
            images: vec!["part.jpg".to_string()],
            materials: Vec::new(),
            lead_time: "2 weeks".to_string(),
            specifications: Default::default(),
        }
    }

    #[test]
    fn test_view_details_only_from_visible() {
        static FLAG: ScrollFlag = ScrollFlag::new();
        let mut browser = ProductBrowser::with_detail(ModalState::with_flag(&FLAG));
        let ticket = browser.listing.begin_load();
        browser
            .listing
            .finish_load(ticket, Ok(vec![product(1, "A"), product(2, "B")]));
        browser.listing.set_category("A");

        assert!(!browser.view_details(Id::new(2)));
        assert!(!browser.detail.is_open());

        assert!(browser.view_details(Id::new(1)));
        assert_eq!(browser.detail.selected().map(|p| p.id), Some(Id::new(1)));
        assert!(FLAG.is_locked());

        browser.detail.close();
        assert!(!browser.detail.is_open());
        assert!(!FLAG.is_locked());
    }
}
