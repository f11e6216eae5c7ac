use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Review;
use crate::error::CatalogError;
use crate::state::AppState;
use crate::usecase::review::{
    CreateReviewInput, CreateReviewUseCase, DeleteReviewUseCase, GetReviewUseCase,
    ListReviewsUseCase, UpdateReviewInput, UpdateReviewUseCase,
};

#[derive(Serialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub text: String,
    pub stars: i16,
    pub movie: i32,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            text: r.text,
            stars: r.stars,
            movie: r.movie_id,
        }
    }
}

// ── GET /reviews ─────────────────────────────────────────────────────────────

pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewResponse>>, CatalogError> {
    let usecase = ListReviewsUseCase {
        reviews: state.review_repo(),
    };
    let reviews = usecase.execute().await?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

// ── POST /reviews ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub text: String,
    pub stars: i16,
    pub movie: i32,
}

pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), CatalogError> {
    let usecase = CreateReviewUseCase {
        reviews: state.review_repo(),
        movies: state.movie_repo(),
    };
    let review = usecase
        .execute(CreateReviewInput {
            text: body.text,
            stars: body.stars,
            movie_id: body.movie,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(review.into())))
}

// ── GET /reviews/{id} ────────────────────────────────────────────────────────

pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ReviewResponse>, CatalogError> {
    let usecase = GetReviewUseCase {
        reviews: state.review_repo(),
    };
    let review = usecase.execute(id).await?;
    Ok(Json(review.into()))
}

// ── PATCH /reviews/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateReviewRequest {
    pub text: Option<String>,
    pub stars: Option<i16>,
    pub movie: Option<i32>,
}

pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateReviewRequest>,
) -> Result<Json<ReviewResponse>, CatalogError> {
    let usecase = UpdateReviewUseCase {
        reviews: state.review_repo(),
        movies: state.movie_repo(),
    };
    let review = usecase
        .execute(
            id,
            UpdateReviewInput {
                text: body.text,
                stars: body.stars,
                movie_id: body.movie,
            },
        )
        .await?;
    Ok(Json(review.into()))
}

// ── DELETE /reviews/{id} ─────────────────────────────────────────────────────

pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, CatalogError> {
    let usecase = DeleteReviewUseCase {
        reviews: state.review_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
