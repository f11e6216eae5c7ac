use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::state::AppState;
use crate::usecase::director::{
    CreateDirectorInput, CreateDirectorUseCase, DeleteDirectorUseCase, DirectorWithCount,
    GetDirectorUseCase, ListDirectorsUseCase, UpdateDirectorInput, UpdateDirectorUseCase,
};

#[derive(Serialize)]
pub struct DirectorResponse {
    pub id: i32,
    pub name: String,
    pub movies_count: u64,
}

impl From<DirectorWithCount> for DirectorResponse {
    fn from(d: DirectorWithCount) -> Self {
        Self {
            id: d.director.id,
            name: d.director.name,
            movies_count: d.movies_count,
        }
    }
}

// ── GET /directors ───────────────────────────────────────────────────────────

pub async fn list_directors(
    State(state): State<AppState>,
) -> Result<Json<Vec<DirectorResponse>>, CatalogError> {
    let usecase = ListDirectorsUseCase {
        repo: state.director_repo(),
    };
    let directors = usecase.execute().await?;
    Ok(Json(directors.into_iter().map(Into::into).collect()))
}

// ── POST /directors ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateDirectorRequest {
    pub name: String,
}

pub async fn create_director(
    State(state): State<AppState>,
    Json(body): Json<CreateDirectorRequest>,
) -> Result<(StatusCode, Json<DirectorResponse>), CatalogError> {
    let usecase = CreateDirectorUseCase {
        repo: state.director_repo(),
    };
    let director = usecase
        .execute(CreateDirectorInput { name: body.name })
        .await?;
    Ok((StatusCode::CREATED, Json(director.into())))
}

// ── GET /directors/{id} ──────────────────────────────────────────────────────

pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DirectorResponse>, CatalogError> {
    let usecase = GetDirectorUseCase {
        repo: state.director_repo(),
    };
    let director = usecase.execute(id).await?;
    Ok(Json(director.into()))
}

// ── PATCH /directors/{id} ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateDirectorRequest {
    pub name: String,
}

pub async fn update_director(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateDirectorRequest>,
) -> Result<Json<DirectorResponse>, CatalogError> {
    let usecase = UpdateDirectorUseCase {
        repo: state.director_repo(),
    };
    let director = usecase
        .execute(id, UpdateDirectorInput { name: body.name })
        .await?;
    Ok(Json(director.into()))
}

// ── DELETE /directors/{id} ───────────────────────────────────────────────────

pub async fn delete_director(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, CatalogError> {
    let usecase = DeleteDirectorUseCase {
        repo: state.director_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
