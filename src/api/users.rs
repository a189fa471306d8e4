//! User directory endpoints

use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, PatchField, Path};
use crate::domain::user::{NewUser, User, UserPatch};

/// Request to create a new user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    pub name: String,
    pub email: String,
}

/// Request to update a user; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserApiRequest {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub email: PatchField<String>,
}

impl TryFrom<CreateUserApiRequest> for NewUser {
    type Error = ApiError;

    fn try_from(request: CreateUserApiRequest) -> Result<Self, Self::Error> {
        Ok(NewUser::new(request.name, request.email)?)
    }
}

impl TryFrom<UpdateUserApiRequest> for UserPatch {
    type Error = ApiError;

    fn try_from(request: UpdateUserApiRequest) -> Result<Self, Self::Error> {
        let name = request.name.into_required("name")?;
        let email = request.email.into_required("email")?;

        Ok(UserPatch::new(name, email)?)
    }
}

/// User response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            name: user.name().to_string(),
            email: user.email().as_str().to_string(),
        }
    }
}

/// User directory routes
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let input = NewUser::try_from(request)?;

    let user = state.user_directory.create(input).await?;
    debug!(user_id = %user.id(), "Created user");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_directory.list().await?;
    debug!(count = users.len(), "Listing users");

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let user = state.user_directory.get(&user_id).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Updating user");

    let patch = UserPatch::try_from(request)?;
    let user = state.user_directory.update(&user_id, patch).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = %user_id, "Deleting user");

    state.user_directory.delete(&user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
