//! Entity records served by the site
//!
//! Four independent fixture-backed kinds (products, capabilities,
//! certifications, blog posts) plus the transient contact inquiry.

pub mod blog;
pub mod capability;
pub mod certification;
pub mod inquiry;
pub mod product;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

pub use blog::{BlogCategory, BlogPost};
pub use capability::{Capability, CapabilityPatch};
pub use certification::{Certification, CertificationPatch};
pub use inquiry::{AttachmentRef, Inquiry, InquirySubmission, InquiryType};
pub use product::{Product, ProductPatch, SpecValue, Specifications};

/// Record identifier, unique and positive within one entity kind
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Id(u32);

impl Id {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The identifier following this one, `None` once `u32::MAX` is taken
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Parse an identifier taken from a route or query string
    pub fn parse(text: &str) -> Result<Self, StoreError> {
        match text.trim().parse::<u32>() {
            Ok(0) | Err(_) => Err(StoreError::InvalidId(text.to_string())),
            Ok(value) => Ok(Self(value)),
        }
    }
}

/// Entity kinds, used to label lookups and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum EntityKind {
    Product,
    Capability,
    Certification,
    #[display("Blog post")]
    BlogPost,
    Inquiry,
}

/// A record addressable by its identifier
pub trait Identified {
    const KIND: EntityKind;

    fn id(&self) -> Id;
}

/// A record managed through the CRUD store
pub trait Entity: Identified + Clone + Send + Sync + 'static {
    /// Partial record; present fields overwrite, absent fields are kept
    type Patch: Send + 'static;

    fn set_id(&mut self, id: Id);

    fn apply(&mut self, patch: Self::Patch);
}
