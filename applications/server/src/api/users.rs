/// Users API routes
use crate::{
    api::{decode_name, query_param, read_body, require_name, QueryPairs},
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{User, UserId};

/// POST /users
pub async fn create_user(
    State(app_state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let body = read_body(body)?;
    let name = require_name(decode_name(&body)?)?;

    let user = app_state.users.create(name).await;
    tracing::info!("Registered user {}", user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users and GET /users?id=N
///
/// An absent or empty `id` lists every user; a repeated `id` uses the first.
pub async fn list_or_get_users(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Response> {
    match query_param(query, "id").filter(|id| !id.is_empty()) {
        Some(raw) => Ok(get_user(&app_state, &raw).await?.into_response()),
        None => Ok(Json(app_state.users.list().await).into_response()),
    }
}

async fn get_user(app_state: &AppState, raw_id: &str) -> Result<Json<User>> {
    let id: UserId = raw_id
        .parse()
        .map_err(|_| ServerError::invalid_input("Invalid id"))?;

    let user = app_state
        .users
        .get_by_id(id)
        .await
        .ok_or_else(|| ServerError::not_found("User Not Found"))?;
    Ok(Json(user))
}

/// Any method on /users other than GET or POST
pub async fn unsupported_method() -> ServerError {
    ServerError::method_not_allowed("Not A valid Request")
}
