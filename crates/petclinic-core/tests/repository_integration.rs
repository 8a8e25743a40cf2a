//! Integration tests for the repositories through their trait objects.

use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use petclinic_core::seed;
use petclinic_core::{MemoryStore, Owner, OwnerRepository, Pet, PetRepository, PetType};

struct TestContext {
    store: MemoryStore,
    owners: Arc<dyn OwnerRepository>,
    pets: Arc<dyn PetRepository>,
}

impl TestContext {
    fn seeded() -> Self {
        let store = seed::seeded_store().unwrap();
        Self {
            owners: Arc::new(store.clone()),
            pets: Arc::new(store.clone()),
            store,
        }
    }
}

fn new_owner(first: &str) -> Owner {
    Owner::new(first, "Tester")
        .with_address("1 Main St.", "Madison")
        .with_telephone("6085550000")
}

#[test]
fn test_find_existing_and_missing_pet() {
    let ctx = TestContext::seeded();

    let basil = ctx.pets.find_by_id(2).unwrap().unwrap();
    assert_eq!(basil.name, "Basil");
    assert_eq!(
        basil.birth_date,
        Some(NaiveDate::from_ymd_opt(2012, 8, 6).unwrap())
    );

    assert!(ctx.pets.find_by_id(999).unwrap().is_none());
}

#[test]
fn test_pet_types_in_reference_order() {
    let ctx = TestContext::seeded();
    let names: Vec<String> = ctx
        .pets
        .find_pet_types()
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(
        names,
        vec!["cat", "dog", "lizard", "snake", "bird", "hamster"]
    );
}

#[test]
fn test_new_pet_continues_id_sequence() {
    let ctx = TestContext::seeded();
    let mut george = ctx.owners.find_by_id(1).unwrap().unwrap();

    george.add_pet(Pet::new("Fluffy", PetType::new(2, "dog")));
    let fluffy = george.get_pet("Fluffy").cloned().unwrap();
    let saved = ctx.pets.save(fluffy).unwrap();

    assert_eq!(saved.id, Some(14));
    let george = ctx.owners.find_by_id(1).unwrap().unwrap();
    let names: Vec<&str> = george.pets().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Fluffy", "Leo"]);
}

#[test]
fn test_update_pet_keeps_owner() {
    let ctx = TestContext::seeded();
    let mut iggy = ctx.pets.find_by_id(5).unwrap().unwrap();
    iggy.name = "Ziggy".to_string();
    iggy.pet_type = PetType::new(4, "");

    let saved = ctx.pets.save(iggy).unwrap();
    assert_eq!(saved.pet_type, PetType::new(4, "snake"));

    let harold = ctx.owners.find_by_id(4).unwrap().unwrap();
    assert_eq!(harold.pets().len(), 1);
    assert_eq!(harold.pets()[0].name, "Ziggy");
}

#[test]
fn test_update_owner_keeps_pets() {
    let ctx = TestContext::seeded();
    let mut jean = ctx.owners.find_by_id(6).unwrap().unwrap();
    jean.city = "Madison".to_string();

    let saved = ctx.owners.save(jean).unwrap();
    assert_eq!(saved.city, "Madison");
    assert_eq!(saved.pets().len(), 2);
    assert_eq!(ctx.store.owner_count(), 10);
}

#[test]
fn test_concurrent_owner_inserts_get_unique_ids() {
    let ctx = TestContext::seeded();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let owners = ctx.owners.clone();
            thread::spawn(move || {
                owners
                    .save(new_owner(&format!("Owner{}", i)))
                    .unwrap()
                    .id
                    .unwrap()
            })
        })
        .collect();

    let mut ids: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (11..=18).collect::<Vec<_>>());
    assert_eq!(ctx.store.owner_count(), 18);
}
