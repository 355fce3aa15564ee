//! Search and category derivation shared by the stores and the pages
//!
//! A [`Filter`] is pure data; [`apply`] rescans the whole collection on
//! every call and keeps input order.

use serde::{Deserialize, Serialize};

use crate::model::{BlogPost, Product};

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// A record that can be narrowed by category and free-text search
pub trait Searchable {
    fn category(&self) -> &str;

    /// Every text a search term is matched against; list fields contribute each element
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Product {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.materials.iter().map(String::as_str));
        fields
    }
}

impl Searchable for BlogPost {
    fn category(&self) -> &str {
        self.category.label()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.excerpt.as_str(),
            self.content.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

/// Search text and category selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Filter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Selected category, unless unset, empty or [`ALL_CATEGORIES`]
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty() && *category != ALL_CATEGORIES)
    }

    /// Lowercased search term, unless unset or empty
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|search| !search.is_empty())
            .map(str::to_lowercase)
    }

    pub fn is_active(&self) -> bool {
        self.category().is_some() || self.search_term().is_some()
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        matches_parts(record, self.category(), self.search_term().as_deref())
    }
}

fn matches_parts<T: Searchable>(record: &T, category: Option<&str>, term: Option<&str>) -> bool {
    if let Some(category) = category {
        if record.category() != category {
            return false;
        }
    }
    match term {
        Some(term) => record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(term)),
        None => true,
    }
}

/// Records passing `filter`, in input order
pub fn apply<T: Searchable + Clone>(records: &[T], filter: &Filter) -> Vec<T> {
    let category = filter.category();
    let term = filter.search_term();
    records
        .iter()
        .filter(|record| matches_parts(*record, category, term.as_deref()))
        .cloned()
        .collect()
}
