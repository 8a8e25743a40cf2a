//! Repository seams between the HTTP layer and persistence.
//!
//! Handlers only see these traits, so tests can swap in canned
//! implementations without touching a store.

use crate::error::Result;
use crate::model::{Owner, OwnerId, Pet, PetId, PetType, PetTypeId};

/// Owner persistence.
pub trait OwnerRepository: Send + Sync {
    /// Look up an owner, with its pets, by id.
    fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>>;

    /// All owners ordered by id.
    fn find_all(&self) -> Result<Vec<Owner>>;

    /// Insert (no id) or replace (with id) an owner's own fields.
    ///
    /// Returns the stored owner with its id assigned and pets attached.
    fn save(&self, owner: Owner) -> Result<Owner>;
}

/// Pet and pet type persistence.
pub trait PetRepository: Send + Sync {
    /// Look up a pet by id.
    fn find_by_id(&self, id: PetId) -> Result<Option<Pet>>;

    /// All pet types in store order.
    fn find_pet_types(&self) -> Result<Vec<PetType>>;

    /// Look up a pet type by id.
    fn find_pet_type_by_id(&self, id: PetTypeId) -> Result<Option<PetType>>;

    /// Insert (no id) or replace (with id) a pet.
    ///
    /// The pet must reference an existing owner and pet type.
    fn save(&self, pet: Pet) -> Result<Pet>;
}
