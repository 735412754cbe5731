/// Greeting API routes
use crate::{
    api::{decode_name, query_param, read_body, require_name, QueryPairs},
    error::{Result, ServerError},
};
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query,
    },
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the API!\n".to_string(),
    })
}

/// GET /hello?name=X
pub async fn hello(
    query: std::result::Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>> {
    let name = require_name(query_param(query, "name"))?;

    Ok(Json(MessageResponse {
        message: format!("Hello, {}!\n", name),
    }))
}

/// POST /greet
pub async fn greet(
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<MessageResponse>> {
    let body = read_body(body)?;
    let name = require_name(decode_name(&body)?)?;

    Ok(Json(MessageResponse {
        message: format!("Hello {}", name),
    }))
}

/// Any method on /greet other than POST
pub async fn greet_wrong_method() -> ServerError {
    ServerError::method_not_allowed("Only POST method allowed")
}
