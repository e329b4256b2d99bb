use thiserror::Error;

use crate::domain::{CategoryId, LocationId};

/// Errors raised when building or mutating a [`crate::store::LocationStore`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("duplicate category id `{0}`")]
    DuplicateCategory(CategoryId),

    #[error("category id `{0}` is reserved for the all-locations filter")]
    ReservedCategoryId(CategoryId),

    #[error("duplicate location id `{0}`")]
    DuplicateLocation(LocationId),

    #[error("no location with id `{0}`")]
    UnknownLocation(LocationId),
}
