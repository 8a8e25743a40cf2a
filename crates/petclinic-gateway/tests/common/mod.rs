//! Shared test helpers: canned repositories and server construction.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use petclinic_core::{
    seed, Error, MemoryStore, Owner, OwnerId, OwnerRepository, Pet, PetId, PetRepository,
    PetType, PetTypeId, Result,
};
use petclinic_gateway::{create_router, AppState, GatewayConfig};

/// Owner repository answering from a fixed map and recording saves.
#[derive(Default)]
pub struct StubOwnerRepository {
    owners: HashMap<OwnerId, Owner>,
    saved: Mutex<Vec<Owner>>,
}

impl StubOwnerRepository {
    pub fn given_owner(mut self, owner: Owner) -> Self {
        let id = owner.id.expect("stub owners need an id");
        self.owners.insert(id, owner);
        self
    }

    pub fn saved(&self) -> Vec<Owner> {
        self.saved.lock().unwrap().clone()
    }
}

impl OwnerRepository for StubOwnerRepository {
    fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>> {
        Ok(self.owners.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Owner>> {
        let mut owners: Vec<Owner> = self.owners.values().cloned().collect();
        owners.sort_by_key(|o| o.id);
        Ok(owners)
    }

    fn save(&self, owner: Owner) -> Result<Owner> {
        self.saved.lock().unwrap().push(owner.clone());
        Ok(owner)
    }
}

/// Pet repository answering from fixed data and recording saves.
#[derive(Default)]
pub struct StubPetRepository {
    pets: HashMap<PetId, Pet>,
    pet_types: Vec<PetType>,
    saved: Mutex<Vec<Pet>>,
    broken: bool,
}

impl StubPetRepository {
    pub fn given_pet(mut self, pet: Pet) -> Self {
        let id = pet.id.expect("stub pets need an id");
        self.pets.insert(id, pet);
        self
    }

    pub fn given_pet_types(mut self, pet_types: Vec<PetType>) -> Self {
        self.pet_types = pet_types;
        self
    }

    /// Every call fails with a storage error.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Vec<Pet> {
        self.saved.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        if self.broken {
            return Err(Error::Storage("connection refused".to_string()));
        }
        Ok(())
    }
}

impl PetRepository for StubPetRepository {
    fn find_by_id(&self, id: PetId) -> Result<Option<Pet>> {
        self.check()?;
        Ok(self.pets.get(&id).cloned())
    }

    fn find_pet_types(&self) -> Result<Vec<PetType>> {
        self.check()?;
        Ok(self.pet_types.clone())
    }

    fn find_pet_type_by_id(&self, id: PetTypeId) -> Result<Option<PetType>> {
        self.check()?;
        Ok(self.pet_types.iter().find(|t| t.id == id).cloned())
    }

    fn save(&self, mut pet: Pet) -> Result<Pet> {
        self.check()?;
        if pet.id.is_none() {
            pet.id = Some(100);
        }
        self.saved.lock().unwrap().push(pet.clone());
        Ok(pet)
    }
}

/// A server over stub repositories, with handles kept for inspecting saves.
pub struct StubbedServer {
    pub server: TestServer,
    pub owners: Arc<StubOwnerRepository>,
    pub pets: Arc<StubPetRepository>,
}

pub fn stubbed_server(owners: StubOwnerRepository, pets: StubPetRepository) -> StubbedServer {
    let owners = Arc::new(owners);
    let pets = Arc::new(pets);
    let state = AppState::new(owners.clone(), pets.clone(), GatewayConfig::default());
    let server = TestServer::new(create_router(state)).unwrap();

    StubbedServer {
        server,
        owners,
        pets,
    }
}

/// A server over a store loaded with the reference data.
pub fn seeded_server() -> (TestServer, MemoryStore) {
    let store = seed::seeded_store().unwrap();
    let state = AppState::with_store(store.clone(), GatewayConfig::default());
    (TestServer::new(create_router(state)).unwrap(), store)
}
