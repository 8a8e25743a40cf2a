//! Core error types.

use thiserror::Error;

/// Domain and persistence errors.
#[derive(Debug, Error)]
pub enum Error {
    /// An entity looked up by id does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind ("Owner", "Pet", "PetType").
        entity: &'static str,
        /// The id that was looked up.
        id: u32,
    },

    /// Input rejected by a domain rule.
    #[error("invalid data: {0}")]
    Validation(String),

    /// Backing store failure.
    #[error("storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Owner lookup miss.
    pub fn owner_not_found(id: u32) -> Self {
        Error::NotFound { entity: "Owner", id }
    }

    /// Pet lookup miss.
    pub fn pet_not_found(id: u32) -> Self {
        Error::NotFound { entity: "Pet", id }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
