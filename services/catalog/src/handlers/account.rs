use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::state::AppState;
use crate::usecase::account::{
    ConfirmInput, ConfirmUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── POST /accounts/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), CatalogError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        notifier: state.notifier(),
        hasher: state.password_hasher(),
    };
    usecase
        .execute(RegisterInput {
            username: body.username,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created. Please check your email for confirmation code.",
        }),
    ))
}

// ── POST /accounts/confirm ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ConfirmRequest {
    pub username: String,
    pub confirmation_code: String,
}

pub async fn confirm(
    State(state): State<AppState>,
    Json(body): Json<ConfirmRequest>,
) -> Result<Json<MessageResponse>, CatalogError> {
    let usecase = ConfirmUseCase {
        users: state.user_repo(),
    };
    usecase
        .execute(ConfirmInput {
            username: body.username,
            confirmation_code: body.confirmation_code,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "User confirmed successfully.",
    }))
}

// ── POST /accounts/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user_id: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, CatalogError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        hasher: state.password_hasher(),
    };
    let user = usecase
        .execute(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        message: "Login successful.",
        user_id: user.id.to_string(),
    }))
}
