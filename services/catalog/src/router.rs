use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use kinoteka_core::health::{healthz, readyz};
use kinoteka_core::middleware::request_id_layer;

use crate::handlers::{
    account::{confirm, login, register},
    director::{create_director, delete_director, get_director, list_directors, update_director},
    movie::{create_movie, delete_movie, get_movie, list_movies, update_movie},
    review::{create_review, delete_review, get_review, list_reviews, update_review},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Directors
        .route("/directors", get(list_directors))
        .route("/directors", post(create_director))
        .route("/directors/{id}", get(get_director))
        .route("/directors/{id}", patch(update_director))
        .route("/directors/{id}", delete(delete_director))
        // Movies
        .route("/movies", get(list_movies))
        .route("/movies", post(create_movie))
        .route("/movies/{id}", get(get_movie))
        .route("/movies/{id}", patch(update_movie))
        .route("/movies/{id}", delete(delete_movie))
        // Reviews
        .route("/reviews", get(list_reviews))
        .route("/reviews", post(create_review))
        .route("/reviews/{id}", get(get_review))
        .route("/reviews/{id}", patch(update_review))
        .route("/reviews/{id}", delete(delete_review))
        // Accounts
        .route("/accounts/register", post(register))
        .route("/accounts/confirm", post(confirm))
        .route("/accounts/login", post(login))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
