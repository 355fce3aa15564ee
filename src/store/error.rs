use thiserror::Error;

use crate::model::{EntityKind, Id};

/// Failure of a store operation; the only error convention for every store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{kind} not found")]
    NotFound { kind: EntityKind, id: Id },

    #[error("invalid identifier '{0}'")]
    InvalidId(String),

    #[error("no identifiers left for new {0} records")]
    IdsExhausted(EntityKind),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(kind: EntityKind, id: Id) -> Self {
        StoreError::NotFound { kind, id }
    }

    pub(crate) fn poisoned() -> Self {
        StoreError::Unavailable("lock poisoned".to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
