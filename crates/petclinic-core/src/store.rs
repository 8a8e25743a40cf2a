//! In-memory implementation of the repositories.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Owner, OwnerId, Pet, PetId, PetType, PetTypeId};
use crate::repository::{OwnerRepository, PetRepository};

/// Owner and pet tables shared by both repository impls.
///
/// Owners are stored without pets; pets carry the owner id and are attached
/// on read.
#[derive(Debug, Default)]
struct Tables {
    owners: BTreeMap<OwnerId, Owner>,
    pets: BTreeMap<PetId, Pet>,
    pet_types: Vec<PetType>,
    next_owner_id: OwnerId,
    next_pet_id: PetId,
}

impl Tables {
    fn attach_pets(&self, mut owner: Owner) -> Owner {
        let owner_id = owner.id;
        for pet in self.pets.values().filter(|p| p.owner_id == owner_id) {
            owner.add_pet(pet.clone());
        }
        owner
    }

    fn pet_type(&self, id: PetTypeId) -> Option<&PetType> {
        self.pet_types.iter().find(|t| t.id == id)
    }
}

/// Thread-safe in-process store.
///
/// Cloning is cheap and clones share the same tables.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store with no pet types.
    pub fn new() -> Self {
        Self::with_pet_types(Vec::new())
    }

    /// Create an empty store with the given pet type reference data.
    pub fn with_pet_types(pet_types: Vec<PetType>) -> Self {
        let tables = Tables {
            pet_types,
            next_owner_id: 1,
            next_pet_id: 1,
            ..Tables::default()
        };
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    /// Number of stored owners.
    pub fn owner_count(&self) -> usize {
        self.tables.read().owners.len()
    }

    /// Number of stored pets.
    pub fn pet_count(&self) -> usize {
        self.tables.read().pets.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OwnerRepository for MemoryStore {
    fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>> {
        let tables = self.tables.read();
        Ok(tables
            .owners
            .get(&id)
            .cloned()
            .map(|owner| tables.attach_pets(owner)))
    }

    fn find_all(&self) -> Result<Vec<Owner>> {
        let tables = self.tables.read();
        Ok(tables
            .owners
            .values()
            .cloned()
            .map(|owner| tables.attach_pets(owner))
            .collect())
    }

    fn save(&self, owner: Owner) -> Result<Owner> {
        owner.validate()?;

        let mut tables = self.tables.write();
        let id = match owner.id {
            Some(id) if tables.owners.contains_key(&id) => id,
            Some(id) => return Err(Error::owner_not_found(id)),
            None => {
                let id = tables.next_owner_id;
                tables.next_owner_id += 1;
                id
            }
        };

        let mut stored = owner.without_pets();
        stored.id = Some(id);
        tables.owners.insert(id, stored.clone());
        debug!(owner_id = id, "Stored owner");

        Ok(tables.attach_pets(stored))
    }
}

impl PetRepository for MemoryStore {
    fn find_by_id(&self, id: PetId) -> Result<Option<Pet>> {
        Ok(self.tables.read().pets.get(&id).cloned())
    }

    fn find_pet_types(&self) -> Result<Vec<PetType>> {
        Ok(self.tables.read().pet_types.clone())
    }

    fn find_pet_type_by_id(&self, id: PetTypeId) -> Result<Option<PetType>> {
        Ok(self.tables.read().pet_type(id).cloned())
    }

    fn save(&self, mut pet: Pet) -> Result<Pet> {
        pet.validate()?;

        let mut tables = self.tables.write();

        let owner_id = pet
            .owner_id
            .ok_or_else(|| Error::Validation("pet has no owner".to_string()))?;
        if !tables.owners.contains_key(&owner_id) {
            return Err(Error::owner_not_found(owner_id));
        }

        pet.pet_type = tables
            .pet_type(pet.pet_type.id)
            .cloned()
            .ok_or_else(|| Error::Validation(format!("unknown pet type {}", pet.pet_type.id)))?;

        let id = match pet.id {
            Some(id) if tables.pets.contains_key(&id) => id,
            Some(id) => return Err(Error::pet_not_found(id)),
            None => {
                let id = tables.next_pet_id;
                tables.next_pet_id += 1;
                id
            }
        };

        pet.id = Some(id);
        tables.pets.insert(id, pet.clone());
        debug!(pet_id = id, owner_id, "Stored pet");

        Ok(pet)
    }
}
