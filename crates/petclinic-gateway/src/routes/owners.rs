//! Owner endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use petclinic_core::{Owner, OwnerId};
use tracing::info;

use crate::error::AppError;
use crate::json::OwnerRequest;
use crate::AppState;

/// Owner routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/owners", get(handle_list_owners).post(handle_create_owner))
        .route(
            "/owners/:owner_id",
            get(handle_get_owner).put(handle_update_owner),
        )
}

async fn handle_list_owners(State(state): State<AppState>) -> Result<Json<Vec<Owner>>, AppError> {
    Ok(Json(state.owners.find_all()?))
}

async fn handle_get_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<OwnerId>,
) -> Result<Json<Owner>, AppError> {
    Ok(Json(find_owner(&state, owner_id)?))
}

async fn handle_create_owner(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Owner>), AppError> {
    let request: OwnerRequest = serde_json::from_slice(&body)?;
    let owner = request.into_owner();
    owner.validate()?;

    info!(name = %owner.full_name(), "Saving owner");
    let saved = state.owners.save(owner)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn handle_update_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<OwnerId>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let owner = find_owner(&state, owner_id)?;
    let request: OwnerRequest = serde_json::from_slice(&body)?;
    let owner = request.apply_to(owner);
    owner.validate()?;

    info!(owner_id, name = %owner.full_name(), "Updating owner");
    state.owners.save(owner)?;
    Ok(StatusCode::NO_CONTENT)
}

fn find_owner(state: &AppState, owner_id: OwnerId) -> Result<Owner, AppError> {
    state
        .owners
        .find_by_id(owner_id)?
        .ok_or_else(|| AppError::NotFound(format!("Owner {} not found", owner_id)))
}
