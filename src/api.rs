//! HTTP surface for the entity store.
//!
//! A single path carries both operations: POST inserts an entity, GET
//! retrieves one by the `get` query parameter. The store is shared behind a
//! lock; guards are released before any await point.

use std::sync::{Arc, RwLock};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::dto::Entity;
use crate::stores::EntitiesStore;

/// Shared entity store handed to every request handler.
pub type SharedEntities = Arc<RwLock<EntitiesStore>>;

/// Creates a new, empty shared store.
pub fn new_shared_store() -> SharedEntities {
    Arc::new(RwLock::new(EntitiesStore::new()))
}

/// Builds the two-operation router over the given store.
pub fn router(store: SharedEntities) -> Router {
    Router::new()
        .route("/", post(insert_entity).get(get_entity))
        .with_state(store)
}

#[derive(Debug, Deserialize)]
struct GetParams {
    get: String,
}

/// POST / — stores the entity unless its id is taken.
/// A duplicate id answers 409 with the entity already in the store.
async fn insert_entity(
    State(store): State<SharedEntities>,
    Json(entity): Json<Entity>,
) -> (StatusCode, Json<Entity>) {
    let mut entities = store.write().unwrap();
    match entities.try_insert(entity.id, entity) {
        Ok(created) => {
            tracing::info!(id = %created.id, "entity stored");
            (StatusCode::CREATED, Json(created.clone()))
        }
        Err(existing) => {
            tracing::warn!(id = %existing.id, "insert rejected: id already present");
            (StatusCode::CONFLICT, Json(existing.clone()))
        }
    }
}

/// GET /?get=<guid> — fetches an entity by id.
/// The key must be a well-formed GUID before the store is consulted.
async fn get_entity(
    State(store): State<SharedEntities>,
    Query(params): Query<GetParams>,
) -> Result<Json<Entity>, StatusCode> {
    let id = Uuid::parse_str(&params.get).map_err(|_| {
        tracing::warn!(key = %params.get, "lookup rejected: malformed guid");
        StatusCode::BAD_REQUEST
    })?;

    let entities = store.read().unwrap();
    entities
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
