#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Director, Movie, NewMovie, NewReview, Review, User};
use crate::error::CatalogError;

/// Repository for directors.
pub trait DirectorRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Director>, CatalogError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Director>, CatalogError>;
    async fn list(&self) -> Result<Vec<Director>, CatalogError>;
    /// Number of movies owned by a director — derived on read, never stored.
    async fn movies_count(&self, director_id: i32) -> Result<u64, CatalogError>;
    /// Insert a director; the store assigns the id.
    async fn create(&self, name: &str) -> Result<Director, CatalogError>;
    async fn update_name(&self, id: i32, name: &str) -> Result<(), CatalogError>;
    /// Cascade delete: removes the director's movies and their reviews, then
    /// the director, atomically. Returns `true` if a director was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CatalogError>;
}

/// Repository for movies.
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, CatalogError>;
    async fn list(&self) -> Result<Vec<Movie>, CatalogError>;
    async fn create(&self, movie: &NewMovie) -> Result<Movie, CatalogError>;
    /// Write back a full row; the caller merges partial updates beforehand.
    async fn update(&self, movie: &Movie) -> Result<(), CatalogError>;
    /// Cascade delete: removes the movie's reviews, then the movie, atomically.
    /// Returns `true` if a movie was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CatalogError>;
    /// Star values of every review for a movie, for on-demand rating aggregation.
    async fn review_stars(&self, movie_id: i32) -> Result<Vec<i16>, CatalogError>;
}

/// Repository for reviews.
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, CatalogError>;
    async fn list(&self) -> Result<Vec<Review>, CatalogError>;
    async fn create(&self, review: &NewReview) -> Result<Review, CatalogError>;
    /// Write back a full row; the caller merges partial updates beforehand.
    async fn update(&self, review: &Review) -> Result<(), CatalogError>;
    /// Returns `true` if a review was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CatalogError>;
}

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, CatalogError>;
    async fn create(&self, user: &User) -> Result<(), CatalogError>;
    /// Activate the account and clear its confirmation code. The code is
    /// single-use; activation happens exactly once.
    async fn mark_confirmed(&self, id: Uuid) -> Result<(), CatalogError>;
}

/// Port for delivering confirmation codes out-of-band (email or equivalent).
/// Fire-and-forget — callers must not fail registration on delivery errors.
pub trait ConfirmationNotifier: Send + Sync {
    async fn deliver(&self, email: &str, code: &str) -> Result<(), CatalogError>;
}

/// Port for the password-hashing collaborator: plaintext in, opaque
/// irreversible credential out.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, CatalogError>;
    fn verify(&self, password: &str, hash: &str) -> Result<bool, CatalogError>;
}
