use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EntityKind, Id, Identified};

/// Blog category; four editorial sections plus anything else found in fixtures
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlogCategory {
    IndustryInsights,
    CompanyNews,
    ManufacturingTips,
    Quality,
    Other(String),
}

impl BlogCategory {
    /// Editorial sections in menu order
    pub const SECTIONS: [BlogCategory; 4] = [
        BlogCategory::IndustryInsights,
        BlogCategory::CompanyNews,
        BlogCategory::ManufacturingTips,
        BlogCategory::Quality,
    ];

    pub fn label(&self) -> &str {
        match self {
            BlogCategory::IndustryInsights => "Industry Insights",
            BlogCategory::CompanyNews => "Company News",
            BlogCategory::ManufacturingTips => "Manufacturing Tips",
            BlogCategory::Quality => "Quality",
            BlogCategory::Other(label) => label,
        }
    }
}

impl From<String> for BlogCategory {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Industry Insights" => BlogCategory::IndustryInsights,
            "Company News" => BlogCategory::CompanyNews,
            "Manufacturing Tips" => BlogCategory::ManufacturingTips,
            "Quality" => BlogCategory::Quality,
            _ => BlogCategory::Other(label),
        }
    }
}

impl From<BlogCategory> for String {
    fn from(category: BlogCategory) -> Self {
        match category {
            BlogCategory::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Insights article; read-only once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "Id")]
    pub id: Id,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: BlogCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    pub published_at: NaiveDate,
    /// Minutes
    pub read_time: u32,
    #[serde(default)]
    pub featured: bool,
}

impl Identified for BlogPost {
    const KIND: EntityKind = EntityKind::BlogPost;

    fn id(&self) -> Id {
        self.id
    }
}
