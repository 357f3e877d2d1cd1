use anyhow::Context;
use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{dto::CredentialsPayload, session::session_cookie},
    error::AuthError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<Response, AuthError> {
    let session = state.auth.register(payload).await?;
    let cookie = session_cookie(&session.token, state.config.auth.cookie_secure)
        .context("build session cookie")?;
    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, cookie)],
        Json(session.user),
    )
        .into_response())
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<Response, AuthError> {
    let session = state.auth.login(payload).await?;
    let cookie = session_cookie(&session.token, state.config.auth.cookie_secure)
        .context("build session cookie")?;
    Ok((StatusCode::OK, [(SET_COOKIE, cookie)], Json(session.user)).into_response())
}
