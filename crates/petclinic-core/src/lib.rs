//! Pet Clinic Core - Domain model and persistence for the customers service.
//!
//! This crate holds the owner, pet and pet type model, the repository traits
//! the HTTP layer talks to, and an in-memory store implementing them.

pub mod error;
pub mod model;
pub mod repository;
pub mod seed;
pub mod store;

pub use error::{Error, Result};
pub use model::{Owner, OwnerId, Pet, PetId, PetType, PetTypeId};
pub use repository::{OwnerRepository, PetRepository};
pub use store::MemoryStore;
