use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::state::AppState;
use crate::usecase::movie::{
    CreateMovieInput, CreateMovieUseCase, DeleteMovieUseCase, GetMovieUseCase, ListMoviesUseCase,
    MovieWithRating, UpdateMovieInput, UpdateMovieUseCase,
};

#[derive(Serialize)]
pub struct MovieResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub director: i32,
    pub average_rating: Option<f64>,
}

impl From<MovieWithRating> for MovieResponse {
    fn from(m: MovieWithRating) -> Self {
        Self {
            id: m.movie.id,
            title: m.movie.title,
            description: m.movie.description,
            duration: m.movie.duration,
            director: m.movie.director_id,
            average_rating: m.average_rating,
        }
    }
}

// ── GET /movies ──────────────────────────────────────────────────────────────

pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieResponse>>, CatalogError> {
    let usecase = ListMoviesUseCase {
        movies: state.movie_repo(),
    };
    let movies = usecase.execute().await?;
    Ok(Json(movies.into_iter().map(Into::into).collect()))
}

// ── POST /movies ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub director: i32,
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(body): Json<CreateMovieRequest>,
) -> Result<(StatusCode, Json<MovieResponse>), CatalogError> {
    let usecase = CreateMovieUseCase {
        movies: state.movie_repo(),
        directors: state.director_repo(),
    };
    let movie = usecase
        .execute(CreateMovieInput {
            title: body.title,
            description: body.description,
            duration: body.duration,
            director_id: body.director,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(movie.into())))
}

// ── GET /movies/{id} ─────────────────────────────────────────────────────────

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieResponse>, CatalogError> {
    let usecase = GetMovieUseCase {
        movies: state.movie_repo(),
    };
    let movie = usecase.execute(id).await?;
    Ok(Json(movie.into()))
}

// ── PATCH /movies/{id} ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub director: Option<i32>,
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateMovieRequest>,
) -> Result<Json<MovieResponse>, CatalogError> {
    let usecase = UpdateMovieUseCase {
        movies: state.movie_repo(),
        directors: state.director_repo(),
    };
    let movie = usecase
        .execute(
            id,
            UpdateMovieInput {
                title: body.title,
                description: body.description,
                duration: body.duration,
                director_id: body.director,
            },
        )
        .await?;
    Ok(Json(movie.into()))
}

// ── DELETE /movies/{id} ──────────────────────────────────────────────────────

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, CatalogError> {
    let usecase = DeleteMovieUseCase {
        movies: state.movie_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
