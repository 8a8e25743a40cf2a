//! Standard pet clinic reference data.
//!
//! Six pet types, ten owners and thirteen pets. Loading into an empty store
//! reproduces the familiar ids (owner 1 is George Franklin, pet type 6 is
//! hamster, and so on).

use chrono::NaiveDate;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::{Owner, Pet, PetType};
use crate::repository::{OwnerRepository, PetRepository};
use crate::store::MemoryStore;

const PET_TYPES: [&str; 6] = ["cat", "dog", "lizard", "snake", "bird", "hamster"];

// (first name, last name, address, city, telephone)
const OWNERS: [(&str, &str, &str, &str, &str); 10] = [
    ("George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
    ("Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    ("Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
    ("Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
    ("Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
    ("Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
    ("Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
    ("Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
    ("David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
    ("Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
];

// (name, birth date, pet type id, owner id)
const PETS: [(&str, &str, u32, u32); 13] = [
    ("Leo", "2010-09-07", 1, 1),
    ("Basil", "2012-08-06", 6, 2),
    ("Rosy", "2011-04-17", 2, 3),
    ("Jewel", "2010-03-07", 2, 3),
    ("Iggy", "2010-11-30", 3, 4),
    ("George", "2010-01-20", 4, 5),
    ("Samantha", "2012-09-04", 1, 6),
    ("Max", "2012-09-04", 1, 6),
    ("Lucky", "2011-08-06", 5, 7),
    ("Mulligan", "2007-02-24", 2, 8),
    ("Freddy", "2010-03-09", 5, 9),
    ("Lucky", "2010-06-24", 2, 10),
    ("Sly", "2012-06-08", 1, 10),
];

/// The six standard pet types, ids 1 to 6.
pub fn pet_types() -> Vec<PetType> {
    PET_TYPES
        .iter()
        .zip(1..)
        .map(|(name, id)| PetType::new(id, *name))
        .collect()
}

/// Build a store holding the full reference data set.
pub fn seeded_store() -> Result<MemoryStore> {
    let store = MemoryStore::with_pet_types(pet_types());
    insert_owners_and_pets(&store)?;
    info!(
        owners = store.owner_count(),
        pets = store.pet_count(),
        "Loaded seed data"
    );
    Ok(store)
}

/// Insert the reference owners and pets into a store that already has the
/// standard pet types.
pub fn insert_owners_and_pets(store: &MemoryStore) -> Result<()> {
    for (first, last, address, city, telephone) in OWNERS {
        let owner = Owner::new(first, last)
            .with_address(address, city)
            .with_telephone(telephone);
        OwnerRepository::save(store, owner)?;
    }

    for (name, birth_date, type_id, owner_id) in PETS {
        let birth_date = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d")
            .map_err(|e| Error::Validation(format!("bad seed date {}: {}", birth_date, e)))?;
        let pet_type = PetRepository::find_pet_type_by_id(store, type_id)?
            .ok_or_else(|| Error::Validation(format!("unknown pet type {}", type_id)))?;

        let mut pet = Pet::new(name, pet_type).with_birth_date(birth_date);
        pet.owner_id = Some(owner_id);
        PetRepository::save(store, pet)?;
    }

    Ok(())
}
