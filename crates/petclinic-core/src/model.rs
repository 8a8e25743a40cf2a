//! Owner, pet and pet type model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Owner identifier.
pub type OwnerId = u32;
/// Pet identifier.
pub type PetId = u32;
/// Pet type identifier.
pub type PetTypeId = u32;

/// Longest telephone number accepted, in digits.
pub const MAX_TELEPHONE_DIGITS: usize = 12;

/// A kind of pet (cat, dog, ...). Reference data, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetType {
    pub id: PetTypeId,
    pub name: String,
}

impl PetType {
    pub fn new(id: PetTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An animal belonging to an owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Assigned by the repository on first save.
    pub id: Option<PetId>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    /// Set when the pet is added to an owner.
    #[serde(skip)]
    pub owner_id: Option<OwnerId>,
}

impl Pet {
    /// Create an unsaved pet without an owner.
    pub fn new(name: impl Into<String>, pet_type: PetType) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date: None,
            pet_type,
            owner_id: None,
        }
    }

    /// Set the id.
    pub fn with_id(mut self, id: PetId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the birth date.
    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Point the pet at its owner.
    pub fn owned_by(mut self, owner: &Owner) -> Self {
        self.owner_id = owner.id;
        self
    }

    /// Check the pet's own fields.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("pet name must not be blank".to_string()));
        }
        Ok(())
    }
}

/// A clinic customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Assigned by the repository on first save.
    pub id: Option<OwnerId>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    /// Kept sorted by name.
    pets: Vec<Pet>,
}

impl Owner {
    /// Create an unsaved owner with no contact details.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: String::new(),
            city: String::new(),
            telephone: String::new(),
            pets: Vec::new(),
        }
    }

    /// Set the id.
    pub fn with_id(mut self, id: OwnerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the postal address.
    pub fn with_address(mut self, address: impl Into<String>, city: impl Into<String>) -> Self {
        self.address = address.into();
        self.city = city.into();
        self
    }

    /// Set the telephone number.
    pub fn with_telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = telephone.into();
        self
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Take ownership of a pet. The pet's owner reference is rewritten.
    pub fn add_pet(&mut self, pet: Pet) {
        let pet = pet.owned_by(self);
        let key = pet.name.to_lowercase();
        let pos = self.pets.partition_point(|p| p.name.to_lowercase() <= key);
        self.pets.insert(pos, pet);
    }

    /// Pets ordered by name, ignoring case.
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Find an owned pet by name, ignoring case.
    pub fn get_pet(&self, name: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub(crate) fn without_pets(mut self) -> Self {
        self.pets.clear();
        self
    }

    /// Check names, address and telephone.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!("{} must not be blank", field)));
            }
        }

        let digits_only = self.telephone.chars().all(|c| c.is_ascii_digit());
        if self.telephone.is_empty()
            || !digits_only
            || self.telephone.len() > MAX_TELEPHONE_DIGITS
        {
            return Err(Error::Validation(format!(
                "telephone must be 1 to {} digits",
                MAX_TELEPHONE_DIGITS
            )));
        }
        Ok(())
    }
}
