use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Director of one or more movies. Deleting a director cascades to its movies.
#[derive(Debug, Clone)]
pub struct Director {
    pub id: i32,
    pub name: String,
}

/// Movie entry. `director_id` always resolves to an existing director —
/// dangling references are rejected at write time.
#[derive(Debug, Clone)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Runtime in minutes.
    pub duration: i32,
    pub director_id: i32,
}

/// Validated attributes for a movie create; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub director_id: i32,
}

/// Review of a movie.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: i32,
    pub text: String,
    pub stars: i16,
    pub movie_id: i32,
}

/// Validated attributes for a review create; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub text: String,
    pub stars: i16,
    pub movie_id: i32,
}

/// Registered account. Created inactive with a pending confirmation code;
/// the code is cleared once the account is confirmed.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub confirmation_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Arithmetic mean of review stars, recomputed on every read and never stored.
/// `None` when the movie has no reviews (serialized as JSON null).
pub fn average_rating(stars: &[i16]) -> Option<f64> {
    if stars.is_empty() {
        return None;
    }
    let sum: i64 = stars.iter().map(|&s| s as i64).sum();
    Some(sum as f64 / stars.len() as f64)
}
