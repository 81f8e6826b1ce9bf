//! CRUD endpoints, shared by every resource.
//!
//! `router::<R>()` mounts:
//! - `GET    /api/<resource>`
//! - `POST   /api/<resource>`
//! - `GET    /api/<resource>/{id}`
//! - `PUT    /api/<resource>/{id}`
//! - `DELETE /api/<resource>/{id}`

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use rpm_core::Record;
use rpm_core::store::Store;
use serde::Serialize;

use crate::routes::{AppError, blocking};
use crate::state::{AppState, StoreOf};

pub fn router<R: Record>() -> Router<AppState>
where
    AppState: StoreOf<R>,
{
    let base = format!("/api/{}", R::RESOURCE.slug());

    Router::new()
        .route(&base, get(list::<R>).post(create::<R>))
        .route(
            &format!("{base}/{{id}}"),
            get(show::<R>).put(update::<R>).delete(remove::<R>),
        )
}

/// Response for successful deletes
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn store<R: Record>(state: &AppState) -> Store<R>
where
    AppState: StoreOf<R>,
{
    StoreOf::<R>::store_of(state).clone()
}

/// GET /api/:resource - All records in store order
async fn list<R: Record>(State(state): State<AppState>) -> Result<Json<Vec<R>>, AppError>
where
    AppState: StoreOf<R>,
{
    let store = store::<R>(&state);
    let records = blocking(move || store.list()).await?;
    Ok(Json(records))
}

/// GET /api/:resource/:id
async fn show<R: Record>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<R>, AppError>
where
    AppState: StoreOf<R>,
{
    let store = store::<R>(&state);
    let record = blocking(move || store.get(&id)).await?;
    Ok(Json(record))
}

/// POST /api/:resource - Create a record; the server assigns its id
async fn create<R: Record>(
    State(state): State<AppState>,
    payload: Result<Json<R>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), AppError>
where
    AppState: StoreOf<R>,
{
    let Json(record) = payload?;
    let store = store::<R>(&state);
    let created = blocking(move || store.create(record)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/:resource/:id - Replace a record, keeping its id
async fn update<R: Record>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<R>, JsonRejection>,
) -> Result<Json<R>, AppError>
where
    AppState: StoreOf<R>,
{
    let Json(record) = payload?;
    let store = store::<R>(&state);
    let updated = blocking(move || store.update(&id, record)).await?;
    Ok(Json(updated))
}

/// DELETE /api/:resource/:id
async fn remove<R: Record>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError>
where
    AppState: StoreOf<R>,
{
    let store = store::<R>(&state);
    let label = store.label();
    blocking(move || store.delete(&id)).await?;
    Ok(Json(MessageResponse {
        message: format!("{label} deleted"),
    }))
}
