use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::{parse_payload, ApiError, AppState};
use crate::domain::User;
use crate::error::UserError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(get_active_users).post(create_user))
        .route(
            "/api/users/:id",
            get(get_user).put(update_user).delete(deactivate_user),
        )
}

/// Response shape: the stored fields plus the derived full name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserView {
    #[serde(flatten)]
    user: User,
    full_name: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        let full_name = user.full_name();
        Self { user, full_name }
    }
}

fn read_user(body: &Bytes) -> Result<User, ApiError> {
    parse_payload::<User>(body)?.ok_or_else(|| UserError::MissingPayload.into())
}

async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<UserView>, ApiError> {
    match state.users.get_by_id(&id).await? {
        Some(user) => Ok(Json(user.into())),
        None => Err(UserError::NotFound(id).into()),
    }
}

async fn get_active_users(State(state): State<AppState>) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = state.users.get_active_users().await?;
    Ok(Json(users.into_iter().map(UserView::from).collect()))
}

async fn create_user(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let user = read_user(&body)?;
    let created = state.users.create(user).await?;
    let location = format!("/api/users/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserView::from(created)),
    ))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<UserView>, ApiError> {
    let user = read_user(&body)?;
    if user.id != id {
        return Err(ApiError::Validation("User ID mismatch".to_string()));
    }
    Ok(Json(state.users.update(user).await?.into()))
}

async fn deactivate_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    if state.users.deactivate(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(UserError::NotFound(id).into())
    }
}
