use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{Entity, EntityKind, Id, Identified};

/// A single value in a product's specification table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Number(Number),
    Text(String),
    List(Vec<SpecValue>),
}

/// Specification table in fixture order
pub type Specifications = IndexMap<String, SpecValue>;

impl SpecValue {
    /// Nothing to print: zero, blank text or an empty list
    pub fn is_blank(&self) -> bool {
        match self {
            SpecValue::Number(n) => n.as_f64() == Some(0.0),
            SpecValue::Text(text) => text.is_empty(),
            SpecValue::List(items) => items.is_empty(),
        }
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Number(n) => write!(f, "{}", n),
            SpecValue::Text(text) => f.write_str(text),
            SpecValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for SpecValue {
    fn from(text: &str) -> Self {
        SpecValue::Text(text.to_string())
    }
}

impl From<i64> for SpecValue {
    fn from(n: i64) -> Self {
        SpecValue::Number(n.into())
    }
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "Id", default)]
    pub id: Id,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub lead_time: String,
    #[serde(default)]
    pub specifications: Specifications,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub materials: Option<Vec<String>>,
    pub lead_time: Option<String>,
    pub specifications: Option<Specifications>,
}

impl Identified for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Product {
    type Patch = ProductPatch;

    fn set_id(&mut self, id: Id) {
        self.id = id;
    }

    fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(materials) = patch.materials {
            self.materials = materials;
        }
        if let Some(lead_time) = patch.lead_time {
            self.lead_time = lead_time;
        }
        if let Some(specifications) = patch.specifications {
            self.specifications = specifications;
        }
    }
}
