//! Operaciones CRUD genéricas
//!
//! Todas las entidades comparten el mismo patrón: delegar en el repositorio
//! del recurso y traducir el resultado a HTTP. Los handlers de cada ruta
//! extraen y validan la request y llaman a estas funciones.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::repositories::CrudRepository;
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Recurso REST respaldado por un repositorio del estado
pub trait Resource: Send + Sync + 'static {
    type Repository: CrudRepository + ?Sized;

    fn repository(state: &AppState) -> &Self::Repository;
}

pub type RecordOf<R> = <<R as Resource>::Repository as CrudRepository>::Record;
pub type RequestOf<R> = <<R as Resource>::Repository as CrudRepository>::Request;

/// Respuesta de creación: `{"id": n}`
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedId {
    #[schema(example = 1)]
    pub id: i32,
}

pub async fn create<R: Resource>(
    state: &AppState,
    request: &RequestOf<R>,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    let id = R::repository(state).create(request).await?;
    Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

pub async fn list<R: Resource>(state: &AppState) -> AppResult<Json<Vec<RecordOf<R>>>> {
    let records = R::repository(state).list().await?;
    Ok(Json(records))
}

pub async fn get_one<R: Resource>(state: &AppState, id: i32) -> AppResult<Json<RecordOf<R>>> {
    let record = R::repository(state).find_by_id(id).await?;
    Ok(Json(record))
}

pub async fn update<R: Resource>(
    state: &AppState,
    id: i32,
    request: &RequestOf<R>,
) -> AppResult<Json<RecordOf<R>>> {
    let record = R::repository(state).update(id, request).await?;
    Ok(Json(record))
}

pub async fn delete<R: Resource>(state: &AppState, id: i32) -> AppResult<StatusCode> {
    R::repository(state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
