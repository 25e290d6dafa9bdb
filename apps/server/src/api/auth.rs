use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{auth, error::ApiResult, main_lib::AppState};
use fiscus_core::errors::Error;
use fiscus_core::users::{NewUser, User, UserRole, UserUpdate};

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    #[serde(default)]
    role: Option<UserRole>,
}

#[derive(Deserialize)]
struct UpdateUserRequest {
    name: String,
    email: String,
    role: UserRole,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Serialize)]
struct UserResponse {
    user: User,
}

/// Verify credentials and return the sanitized user. Unknown email and wrong
/// password are indistinguishable on the wire.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<UserResponse>> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(Error::Validation(
            fiscus_core::errors::ValidationError::MissingField("email and password".to_string()),
        )
        .into());
    }
    let user = state
        .user_service
        .get_user_by_email(&request.email)?
        .ok_or(Error::Unauthorized)?;
    if !auth::verify_password(&request.password, &user.password_hash) {
        return Err(Error::Unauthorized.into());
    }
    Ok(Json(UserResponse { user }))
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    if request.password.is_empty() {
        return Err(Error::Validation(
            fiscus_core::errors::ValidationError::MissingField("password".to_string()),
        )
        .into());
    }
    let password_hash = auth::hash_password(&request.password)?;
    let user = state
        .user_service
        .create_user(NewUser {
            id: None,
            name: request.name,
            email: request.email,
            password_hash,
            role: request.role.unwrap_or_default(),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

async fn get_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<User>>> {
    let users = state.user_service.get_users()?;
    Ok(Json(users))
}

/// The password hash is only replaced when a non-blank password is supplied.
async fn update_user(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let password_hash = match request.password.as_deref() {
        Some(password) if !password.trim().is_empty() => Some(auth::hash_password(password)?),
        _ => None,
    };
    let user = state
        .user_service
        .update_user(
            user_id,
            UserUpdate {
                name: request.name,
                email: request.email,
                role: request.role,
                password_hash,
            },
        )
        .await?;
    Ok(Json(UserResponse { user }))
}

#[derive(Serialize)]
struct DeleteResponse {
    ok: bool,
}

async fn delete_user(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeleteResponse>> {
    let _ = state.user_service.delete_user(user_id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/users", get(get_users))
        .route("/auth/users/{id}", delete(delete_user).put(update_user))
}
