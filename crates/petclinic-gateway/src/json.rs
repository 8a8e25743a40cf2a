//! JSON request and response types for the HTTP gateway.

use chrono::NaiveDate;
use petclinic_core::{Owner, Pet, PetId, PetType, PetTypeId};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Gateway version.
    pub version: String,
}

/// Body of pet create and update requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRequest {
    /// Only meaningful on update; must match the path id when present.
    #[serde(default)]
    pub id: Option<PetId>,
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    pub type_id: PetTypeId,
}

/// A pet as returned by `GET /owners/{ownerId}/pets/{petId}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDetails {
    pub id: Option<PetId>,
    pub name: String,
    /// Owner display name, `None` when the owner can't be resolved.
    pub owner: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: PetType,
}

impl PetDetails {
    pub fn new(pet: Pet, owner: Option<&Owner>) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            owner: owner.map(Owner::full_name),
            birth_date: pet.birth_date,
            pet_type: pet.pet_type,
        }
    }
}

/// Body of owner create and update requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl OwnerRequest {
    /// Copy the request fields onto an owner, keeping its id and pets.
    pub fn apply_to(self, mut owner: Owner) -> Owner {
        owner.first_name = self.first_name;
        owner.last_name = self.last_name;
        owner.address = self.address;
        owner.city = self.city;
        owner.telephone = self.telephone;
        owner
    }

    /// Build a new, unsaved owner.
    pub fn into_owner(self) -> Owner {
        Owner::new(self.first_name, self.last_name)
            .with_address(self.address, self.city)
            .with_telephone(self.telephone)
    }
}
