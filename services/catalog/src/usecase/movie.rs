use crate::domain::repository::{DirectorRepository, MovieRepository};
use crate::domain::types::{Movie, NewMovie, average_rating};
use crate::domain::validate::{
    ValidationErrors, validate_movie_description, validate_movie_title,
};
use crate::error::CatalogError;

/// A movie together with its derived average rating.
#[derive(Debug, Clone)]
pub struct MovieWithRating {
    pub movie: Movie,
    pub average_rating: Option<f64>,
}

// ── ListMovies ───────────────────────────────────────────────────────────────

pub struct ListMoviesUseCase<M: MovieRepository> {
    pub movies: M,
}

impl<M: MovieRepository> ListMoviesUseCase<M> {
    pub async fn execute(&self) -> Result<Vec<MovieWithRating>, CatalogError> {
        let all = self.movies.list().await?;
        let mut out = Vec::with_capacity(all.len());
        for movie in all {
            let stars = self.movies.review_stars(movie.id).await?;
            out.push(MovieWithRating {
                movie,
                average_rating: average_rating(&stars),
            });
        }
        Ok(out)
    }
}

// ── GetMovie ─────────────────────────────────────────────────────────────────

pub struct GetMovieUseCase<M: MovieRepository> {
    pub movies: M,
}

impl<M: MovieRepository> GetMovieUseCase<M> {
    pub async fn execute(&self, id: i32) -> Result<MovieWithRating, CatalogError> {
        let movie = self
            .movies
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::MovieNotFound)?;
        let stars = self.movies.review_stars(movie.id).await?;
        Ok(MovieWithRating {
            movie,
            average_rating: average_rating(&stars),
        })
    }
}

// ── CreateMovie ──────────────────────────────────────────────────────────────

pub struct CreateMovieInput {
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub director_id: i32,
}

pub struct CreateMovieUseCase<M: MovieRepository, D: DirectorRepository> {
    pub movies: M,
    pub directors: D,
}

impl<M: MovieRepository, D: DirectorRepository> CreateMovieUseCase<M, D> {
    pub async fn execute(&self, input: CreateMovieInput) -> Result<MovieWithRating, CatalogError> {
        let mut errors = ValidationErrors::new();
        validate_movie_title(&input.title, &mut errors);
        validate_movie_description(&input.description, &mut errors);
        // Reference must resolve at write time; validation only reads
        if self.directors.find_by_id(input.director_id).await?.is_none() {
            errors.push("director", "The director does not exist.");
        }
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }

        let movie = self
            .movies
            .create(&NewMovie {
                title: input.title,
                description: input.description,
                duration: input.duration,
                director_id: input.director_id,
            })
            .await?;
        Ok(MovieWithRating {
            movie,
            average_rating: None,
        })
    }
}

// ── UpdateMovie ──────────────────────────────────────────────────────────────

/// Partial update — absent fields keep their stored value.
#[derive(Default)]
pub struct UpdateMovieInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub director_id: Option<i32>,
}

pub struct UpdateMovieUseCase<M: MovieRepository, D: DirectorRepository> {
    pub movies: M,
    pub directors: D,
}

impl<M: MovieRepository, D: DirectorRepository> UpdateMovieUseCase<M, D> {
    pub async fn execute(
        &self,
        id: i32,
        input: UpdateMovieInput,
    ) -> Result<MovieWithRating, CatalogError> {
        let mut movie = self
            .movies
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::MovieNotFound)?;

        let mut errors = ValidationErrors::new();
        if let Some(ref title) = input.title {
            validate_movie_title(title, &mut errors);
        }
        if let Some(ref description) = input.description {
            validate_movie_description(description, &mut errors);
        }
        if let Some(director_id) = input.director_id {
            if self.directors.find_by_id(director_id).await?.is_none() {
                errors.push("director", "The director does not exist.");
            }
        }
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }

        if let Some(title) = input.title {
            movie.title = title;
        }
        if let Some(description) = input.description {
            movie.description = description;
        }
        if let Some(duration) = input.duration {
            movie.duration = duration;
        }
        if let Some(director_id) = input.director_id {
            movie.director_id = director_id;
        }

        self.movies.update(&movie).await?;
        let stars = self.movies.review_stars(movie.id).await?;
        Ok(MovieWithRating {
            movie,
            average_rating: average_rating(&stars),
        })
    }
}

// ── DeleteMovie ──────────────────────────────────────────────────────────────

pub struct DeleteMovieUseCase<M: MovieRepository> {
    pub movies: M,
}

impl<M: MovieRepository> DeleteMovieUseCase<M> {
    pub async fn execute(&self, id: i32) -> Result<(), CatalogError> {
        if !self.movies.delete(id).await? {
            return Err(CatalogError::MovieNotFound);
        }
        Ok(())
    }
}
