use tracing::debug;

use super::{FetchGuard, FetchTicket, Loadable};
use crate::filter::{self, Filter, Searchable};
use crate::store::StoreResult;

/// A filterable list page: base collection, filter state, derived visible subset
#[derive(Debug)]
pub struct ListingPage<T> {
    noun: &'static str,
    records: Loadable<Vec<T>>,
    filter: Filter,
    visible: Vec<T>,
    fetches: FetchGuard,
}

impl<T: Searchable + Clone> ListingPage<T> {
    /// `noun` names the records in messages ("products", "posts")
    pub fn new(noun: &'static str) -> Self {
        Self {
            noun,
            records: Loadable::Loading,
            filter: Filter::default(),
            visible: Vec::new(),
            fetches: FetchGuard::default(),
        }
    }

    /// Enter the loading state and hand out the ticket for the fetch result
    pub fn begin_load(&mut self) -> FetchTicket {
        self.records = Loadable::Loading;
        self.fetches.begin()
    }

    /// Apply a fetch result unless it went stale; returns whether it was applied
    pub fn finish_load(&mut self, ticket: FetchTicket, result: StoreResult<Vec<T>>) -> bool {
        if !self.fetches.is_current(ticket) {
            debug!("Discarding stale {} result", self.noun);
            return false;
        }
        self.records = match result {
            Ok(records) => Loadable::Ready(records),
            Err(e) => {
                debug!("Loading {} failed: {}", self.noun, e);
                Loadable::Failed(format!("Failed to load {}. Please try again.", self.noun))
            }
        };
        self.recompute();
        true
    }

    /// Re-issue the fetch after a failure
    pub fn retry(&mut self) -> FetchTicket {
        self.begin_load()
    }

    pub fn teardown(&mut self) {
        self.fetches.teardown();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = Some(search.into());
        self.recompute();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = Some(category.into());
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.filter = Filter::default();
        self.recompute();
    }

    pub fn state(&self) -> &Loadable<Vec<T>> {
        &self.records
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    pub fn total(&self) -> usize {
        self.records.ready().map_or(0, Vec::len)
    }

    /// "Showing 3 of 12 products"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} {}",
            self.visible.len(),
            self.total(),
            self.noun
        )
    }

    fn recompute(&mut self) {
        self.visible = match &self.records {
            Loadable::Ready(records) => filter::apply(records, &self.filter),
            _ => Vec::new(),
        };
    }
}
