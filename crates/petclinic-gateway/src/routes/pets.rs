//! Pet and pet type endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use petclinic_core::{OwnerId, Pet, PetId, PetType};
use tracing::{info, warn};

use crate::error::AppError;
use crate::json::{PetDetails, PetRequest};
use crate::AppState;

/// Pet routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/petTypes", get(handle_get_pet_types))
        .route("/owners/:owner_id/pets", post(handle_create_pet))
        .route(
            "/owners/:owner_id/pets/:pet_id",
            get(handle_get_pet).put(handle_update_pet),
        )
}

/// List all pet types in repository order.
async fn handle_get_pet_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<PetType>>, AppError> {
    Ok(Json(state.pets.find_pet_types()?))
}

/// Look up a single pet. The owner segment of the path is not checked.
async fn handle_get_pet(
    State(state): State<AppState>,
    Path((_owner_id, pet_id)): Path<(OwnerId, PetId)>,
) -> Result<Json<PetDetails>, AppError> {
    let pet = find_pet(&state, pet_id)?;
    let owner = match pet.owner_id {
        Some(owner_id) => state.owners.find_by_id(owner_id)?,
        None => None,
    };
    Ok(Json(PetDetails::new(pet, owner.as_ref())))
}

/// Create a pet under an existing owner.
///
/// The body is parsed only once the owner is known to exist.
async fn handle_create_pet(
    State(state): State<AppState>,
    Path(owner_id): Path<OwnerId>,
    body: Bytes,
) -> Result<(StatusCode, Json<Pet>), AppError> {
    let owner = state
        .owners
        .find_by_id(owner_id)?
        .ok_or_else(|| AppError::NotFound(format!("Owner {} not found", owner_id)))?;
    let request: PetRequest = serde_json::from_slice(&body)?;

    let pet_type = resolve_pet_type(&state, &request)?;
    let pet = Pet::new(request.name.clone(), pet_type).owned_by(&owner);
    let saved = save_pet(&state, pet, request)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Replace a pet's name, birth date and type.
async fn handle_update_pet(
    State(state): State<AppState>,
    Path((_owner_id, pet_id)): Path<(OwnerId, PetId)>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let pet = find_pet(&state, pet_id)?;
    let request: PetRequest = serde_json::from_slice(&body)?;

    if let Some(body_id) = request.id {
        if body_id != pet_id {
            warn!(pet_id, body_id, "Rejected pet update with mismatched id");
            return Err(AppError::BadRequest(format!(
                "pet id {} in body does not match path id {}",
                body_id, pet_id
            )));
        }
    }

    let pet_type = resolve_pet_type(&state, &request)?;
    save_pet(&state, Pet { pet_type, ..pet }, request)?;
    Ok(StatusCode::NO_CONTENT)
}

fn find_pet(state: &AppState, pet_id: PetId) -> Result<Pet, AppError> {
    state
        .pets
        .find_by_id(pet_id)?
        .ok_or_else(|| AppError::NotFound(format!("Pet {} not found", pet_id)))
}

fn resolve_pet_type(state: &AppState, request: &PetRequest) -> Result<PetType, AppError> {
    state
        .pets
        .find_pet_type_by_id(request.type_id)?
        .ok_or_else(|| AppError::BadRequest(format!("unknown pet type {}", request.type_id)))
}

fn save_pet(state: &AppState, pet: Pet, request: PetRequest) -> Result<Pet, AppError> {
    let pet = Pet {
        name: request.name,
        birth_date: request.birth_date,
        ..pet
    };
    pet.validate()?;

    info!(pet_id = ?pet.id, owner_id = ?pet.owner_id, name = %pet.name, "Saving pet");
    Ok(state.pets.save(pet)?)
}
