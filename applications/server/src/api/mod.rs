/// API route modules
pub mod greeting;
pub mod health;
pub mod users;

use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query,
    },
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Raw query pairs in request order, duplicates kept
pub type QueryPairs = Vec<(String, String)>;

/// Build the canonical route table
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting::root).fallback(method_not_allowed))
        .route("/hello", get(greeting::hello).fallback(method_not_allowed))
        .route(
            "/greet",
            post(greeting::greet).fallback(greeting::greet_wrong_method),
        )
        .route(
            "/users",
            get(users::list_or_get_users)
                .post(users::create_user)
                .fallback(users::unsupported_method),
        )
        .route("/health", get(health::health).fallback(method_not_allowed))
        .route("/status", get(health::status).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn method_not_allowed() -> ServerError {
    ServerError::method_not_allowed("Method not allowed")
}

async fn not_found() -> ServerError {
    ServerError::not_found("Not Found")
}

/// Turn a body extraction failure into a JSON error
///
/// Bodies over axum's default limit (2 MiB) become 413; anything else that
/// cannot be buffered is treated as an unreadable JSON body.
pub(crate) fn read_body(body: std::result::Result<Bytes, BytesRejection>) -> Result<Bytes> {
    body.map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection);
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::payload_too_large("Request body too large")
        } else {
            ServerError::invalid_input("Invalid JSON body")
        }
    })
}

/// Extract `name` from a JSON request body
///
/// Only the first JSON value is read; trailing data is ignored. A `null`
/// document or `null` field yields `None`. The key is matched exactly first,
/// then ASCII case-insensitively.
pub(crate) fn decode_name(body: &Bytes) -> Result<Option<String>> {
    let invalid = || ServerError::invalid_input("Invalid JSON body");

    let value = match serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
    {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            tracing::debug!("Rejected request body: {}", e);
            return Err(invalid());
        }
        None => return Err(invalid()),
    };

    match value {
        Value::Null => Ok(None),
        Value::Object(fields) => {
            let name = fields.get("name").or_else(|| {
                fields
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case("name"))
                    .map(|(_, value)| value)
            });
            match name {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(name)) => Ok(Some(name.clone())),
                Some(_) => Err(invalid()),
            }
        }
        _ => Err(invalid()),
    }
}

/// A missing, null, or empty name is rejected
pub(crate) fn require_name(name: Option<String>) -> Result<String> {
    name.filter(|n| !n.is_empty())
        .ok_or_else(|| ServerError::invalid_input("Name is required"))
}

/// First value for `key`; an unparsable query string counts as empty
pub(crate) fn query_param(
    query: std::result::Result<Query<QueryPairs>, QueryRejection>,
    key: &str,
) -> Option<String> {
    let Query(pairs) = query.ok()?;
    pairs
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value)
}
