//! axum adapter: router, shared state, and response marshaling.
//!
//! The pipeline itself is host-agnostic; this module is the one place that
//! knows about axum. It extracts the `url` query parameter, delegates to
//! [`pipeline::handle_request`], and converts the returned [`FeedResponse`]
//! into an axum response.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::filter::FilterRules;
use crate::pipeline::{self, FeedResponse};

/// Shared per-process state: one HTTP client and the immutable rule set.
///
/// Both members are cheap handles, so axum can clone the state per request
/// while concurrent requests stay fully independent.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub rules: Arc<FilterRules>,
}

impl AppState {
    pub fn new(client: reqwest::Client, rules: FilterRules) -> Self {
        Self {
            client,
            rules: Arc::new(rules),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeedQuery {
    url: Option<String>,
}

/// Builds the application router: a single GET route at `/`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_filtered_feed))
        .with_state(state)
}

async fn get_filtered_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Response {
    let response =
        pipeline::handle_request(&state.client, &state.rules, query.url.as_deref()).await;
    into_axum_response(response)
}

/// Converts the host-agnostic [`FeedResponse`] into an axum response.
fn into_axum_response(response: FeedResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut out = (status, response.body).into_response();
    for (name, value) in response.headers {
        match (HeaderName::try_from(name), HeaderValue::from_str(&value)) {
            (Ok(name), Ok(value)) => {
                out.headers_mut().insert(name, value);
            }
            _ => tracing::warn!(header = name, "Dropping malformed response header"),
        }
    }
    out
}
