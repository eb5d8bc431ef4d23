use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::Db;

const PET_STATUSES: [&str; 3] = ["available", "pending", "sold"];

/// Fields the server validates; everything else is stored verbatim.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub photo_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pet {
    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self
                .status
                .as_deref()
                .is_none_or(|status| PET_STATUSES.contains(&status))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct StatusQuery {
    status: Option<String>,
}

#[derive(Deserialize)]
struct LoginQuery {
    username: Option<String>,
    password: Option<String>,
}

pub fn routes() -> Router<Db> {
    Router::new()
        .route("/pet", post(add_pet))
        .route("/pet/findByStatus", get(find_pets_by_status))
        .route("/pet/{petId}", get(get_pet).put(update_pet).delete(delete_pet))
        .route("/user", post(create_user))
        .route("/user/login", get(login_user))
}

async fn add_pet(
    State(db): State<Db>,
    body: Result<Json<Pet>, JsonRejection>,
) -> Result<Json<Pet>, StatusCode> {
    let Json(mut pet) = body.map_err(|rejection| {
        debug!(%rejection, "addPet body rejected");
        StatusCode::BAD_REQUEST
    })?;
    if !pet.is_valid() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let mut store = db.write().await;
    let id = store.claim_id(pet.id).ok_or(StatusCode::BAD_REQUEST)?;
    pet.id = Some(id);
    store.pets.insert(id, pet.clone());
    info!(id, name = %pet.name, "pet added");
    Ok(Json(pet))
}

async fn find_pets_by_status(
    State(db): State<Db>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<Pet>>, StatusCode> {
    let status = query.status.unwrap_or_else(|| "available".to_string());
    if !PET_STATUSES.contains(&status.as_str()) {
        return Err(StatusCode::BAD_REQUEST);
    }

    let store = db.read().await;
    let pets = store
        .pets
        .values()
        .filter(|pet| pet.status.as_deref() == Some(status.as_str()))
        .cloned()
        .collect();
    Ok(Json(pets))
}

async fn get_pet(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Pet>, StatusCode> {
    let Path(id) = id.map_err(|_| StatusCode::BAD_REQUEST)?;
    let store = db.read().await;
    store.pets.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_pet(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Pet>, JsonRejection>,
) -> Result<Json<Pet>, StatusCode> {
    let Path(id) = id.map_err(|_| StatusCode::BAD_REQUEST)?;
    let mut store = db.write().await;
    if !store.pets.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }

    let Json(mut pet) = body.map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
    if !pet.is_valid() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    pet.id = Some(id);
    store.pets.insert(id, pet.clone());
    Ok(Json(pet))
}

async fn delete_pet(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> StatusCode {
    let Ok(Path(id)) = id else {
        return StatusCode::BAD_REQUEST;
    };
    match db.write().await.pets.remove(&id) {
        Some(_) => StatusCode::OK,
        None => StatusCode::BAD_REQUEST,
    }
}

async fn create_user(
    State(db): State<Db>,
    body: Result<Json<User>, JsonRejection>,
) -> Result<Json<User>, StatusCode> {
    let Json(user) = body.map_err(|_| StatusCode::BAD_REQUEST)?;
    if let Some(username) = &user.username {
        db.write().await.users.insert(username.clone(), user.clone());
        info!(%username, "user created");
    }
    Ok(Json(user))
}

async fn login_user(
    State(db): State<Db>,
    Query(query): Query<LoginQuery>,
) -> Result<Json<String>, StatusCode> {
    let (Some(username), Some(password)) = (query.username, query.password) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    if username.is_empty() || password.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let store = db.read().await;
    let rejected = store
        .users
        .get(&username)
        .and_then(|user| user.password.as_deref())
        .is_some_and(|stored| stored != password);
    if rejected {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(Json(format!("logged in user session:{username}")))
}
