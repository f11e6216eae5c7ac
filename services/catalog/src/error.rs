use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::validate::ValidationErrors;

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("validation failed")]
    Validation(ValidationErrors),
    #[error("director not found")]
    DirectorNotFound,
    #[error("movie not found")]
    MovieNotFound,
    #[error("review not found")]
    ReviewNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("director with this name already exists")]
    DirectorNameTaken,
    #[error("username already taken")]
    UsernameTaken,
    #[error("invalid confirmation code")]
    InvalidConfirmationCode,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user not confirmed")]
    NotConfirmed,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::DirectorNotFound => "DIRECTOR_NOT_FOUND",
            Self::MovieNotFound => "MOVIE_NOT_FOUND",
            Self::ReviewNotFound => "REVIEW_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::DirectorNameTaken => "DIRECTOR_NAME_TAKEN",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::InvalidConfirmationCode => "INVALID_CONFIRMATION_CODE",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotConfirmed => "NOT_CONFIRMED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::InvalidConfirmationCode => StatusCode::BAD_REQUEST,
            Self::DirectorNotFound
            | Self::MovieNotFound
            | Self::ReviewNotFound
            | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::DirectorNameTaken | Self::UsernameTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotConfirmed => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Self::Validation(ref errors) = self {
            body["errors"] = serde_json::to_value(errors.as_map()).unwrap_or_default();
        }
        (status, axum::Json(body)).into_response()
    }
}
