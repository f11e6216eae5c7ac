use crate::domain::repository::{MovieRepository, ReviewRepository};
use crate::domain::types::{NewReview, Review};
use crate::domain::validate::{ValidationErrors, validate_review_stars, validate_review_text};
use crate::error::CatalogError;

// ── ListReviews ──────────────────────────────────────────────────────────────

pub struct ListReviewsUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> ListReviewsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Review>, CatalogError> {
        self.reviews.list().await
    }
}

// ── GetReview ────────────────────────────────────────────────────────────────

pub struct GetReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> GetReviewUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Review, CatalogError> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::ReviewNotFound)
    }
}

// ── CreateReview ─────────────────────────────────────────────────────────────

pub struct CreateReviewInput {
    pub text: String,
    pub stars: i16,
    pub movie_id: i32,
}

pub struct CreateReviewUseCase<R: ReviewRepository, M: MovieRepository> {
    pub reviews: R,
    pub movies: M,
}

impl<R: ReviewRepository, M: MovieRepository> CreateReviewUseCase<R, M> {
    pub async fn execute(&self, input: CreateReviewInput) -> Result<Review, CatalogError> {
        let mut errors = ValidationErrors::new();
        validate_review_text(&input.text, &mut errors);
        validate_review_stars(input.stars, &mut errors);
        if self.movies.find_by_id(input.movie_id).await?.is_none() {
            errors.push("movie", "The movie does not exist.");
        }
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }

        self.reviews
            .create(&NewReview {
                text: input.text,
                stars: input.stars,
                movie_id: input.movie_id,
            })
            .await
    }
}

// ── UpdateReview ─────────────────────────────────────────────────────────────

/// Partial update — absent fields keep their stored value.
#[derive(Default)]
pub struct UpdateReviewInput {
    pub text: Option<String>,
    pub stars: Option<i16>,
    pub movie_id: Option<i32>,
}

pub struct UpdateReviewUseCase<R: ReviewRepository, M: MovieRepository> {
    pub reviews: R,
    pub movies: M,
}

impl<R: ReviewRepository, M: MovieRepository> UpdateReviewUseCase<R, M> {
    pub async fn execute(
        &self,
        id: i32,
        input: UpdateReviewInput,
    ) -> Result<Review, CatalogError> {
        let mut review = self
            .reviews
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::ReviewNotFound)?;

        let mut errors = ValidationErrors::new();
        if let Some(ref text) = input.text {
            validate_review_text(text, &mut errors);
        }
        if let Some(stars) = input.stars {
            validate_review_stars(stars, &mut errors);
        }
        if let Some(movie_id) = input.movie_id {
            if self.movies.find_by_id(movie_id).await?.is_none() {
                errors.push("movie", "The movie does not exist.");
            }
        }
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }

        if let Some(text) = input.text {
            review.text = text;
        }
        if let Some(stars) = input.stars {
            review.stars = stars;
        }
        if let Some(movie_id) = input.movie_id {
            review.movie_id = movie_id;
        }

        self.reviews.update(&review).await?;
        Ok(review)
    }
}

// ── DeleteReview ─────────────────────────────────────────────────────────────

pub struct DeleteReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> DeleteReviewUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), CatalogError> {
        if !self.reviews.delete(id).await? {
            return Err(CatalogError::ReviewNotFound);
        }
        Ok(())
    }
}
