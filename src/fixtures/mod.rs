//! Fixture loading for the entity stores
//!
//! The JSON arrays under `data/` are compiled into the binary. A fixture
//! directory may replace any of them by providing a file with the same name.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::model::{BlogPost, Capability, Certification, Id, Identified, Product};

pub const PRODUCTS_FILE: &str = "products.json";
pub const CAPABILITIES_FILE: &str = "capabilities.json";
pub const CERTIFICATIONS_FILE: &str = "certifications.json";
pub const BLOGS_FILE: &str = "blogs.json";

const BUNDLED_PRODUCTS: &str = include_str!("data/products.json");
const BUNDLED_CAPABILITIES: &str = include_str!("data/capabilities.json");
const BUNDLED_CERTIFICATIONS: &str = include_str!("data/certifications.json");
const BUNDLED_BLOGS: &str = include_str!("data/blogs.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse fixture '{file}': {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("fixture '{file}' contains a record with id 0")]
    ZeroId { file: String },

    #[error("fixture '{file}' repeats id {id}")]
    DuplicateId { file: String, id: Id },
}

/// Every fixture collection, validated
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub products: Vec<Product>,
    pub capabilities: Vec<Capability>,
    pub certifications: Vec<Certification>,
    pub blogs: Vec<BlogPost>,
}

impl Fixtures {
    /// The fixtures compiled into the binary
    pub fn bundled() -> Result<Self, FixtureError> {
        Self::load(None)
    }

    /// Bundled fixtures, each replaced by its file in `dir` when present
    pub fn load(dir: Option<&Path>) -> Result<Self, FixtureError> {
        Ok(Self {
            products: load_collection(dir, PRODUCTS_FILE, BUNDLED_PRODUCTS)?,
            capabilities: load_collection(dir, CAPABILITIES_FILE, BUNDLED_CAPABILITIES)?,
            certifications: load_collection(dir, CERTIFICATIONS_FILE, BUNDLED_CERTIFICATIONS)?,
            blogs: load_collection(dir, BLOGS_FILE, BUNDLED_BLOGS)?,
        })
    }
}

fn load_collection<T>(dir: Option<&Path>, file: &str, bundled: &str) -> Result<Vec<T>, FixtureError>
where
    T: DeserializeOwned + Identified,
{
    if let Some(dir) = dir {
        let path = dir.join(file);
        if path.exists() {
            let text = fs::read_to_string(&path).map_err(|source| FixtureError::Read {
                path: path.clone(),
                source,
            })?;
            info!("Loading {} from {}", file, path.display());
            return decode(file, &text);
        }
    }
    decode(file, bundled)
}

/// Parse one fixture array and check its identifiers
pub fn decode<T>(file: &str, text: &str) -> Result<Vec<T>, FixtureError>
where
    T: DeserializeOwned + Identified,
{
    let records: Vec<T> = serde_json::from_str(text).map_err(|source| FixtureError::Parse {
        file: file.to_string(),
        source,
    })?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        let id = record.id();
        if id.get() == 0 {
            return Err(FixtureError::ZeroId {
                file: file.to_string(),
            });
        }
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId {
                file: file.to_string(),
                id,
            });
        }
    }
    Ok(records)
}
