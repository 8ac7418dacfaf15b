//! Session Middleware
//!
//! Gate for protected routes. A valid session resolves to an explicit
//! [`Identity`] stored in request extensions; downstream handlers read
//! the acting member from there instead of any ambient state.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::client::{extract_client_ip, extract_fingerprint};
use std::sync::Arc;

use kernel::identity::Identity;

use crate::application::CurrentSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct SessionMiddlewareState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid session
///
/// On success the request gains an [`Identity`] extension. On failure
/// the response is 401 with no hint about why the session was rejected.
pub async fn require_session<R>(
    state: SessionMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let headers = req.headers();

    let client_ip = req
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|info| info.0.ip());

    let client_ip = extract_client_ip(headers, client_ip);

    let fingerprint = match extract_fingerprint(headers, client_ip) {
        Ok(fp) => fp,
        Err(e) => return Err(AuthError::from(e).into_response()),
    };

    let token = platform::cookie::extract_cookie(headers, &state.config.session_cookie_name)
        .ok_or_else(|| AuthError::SessionInvalid.into_response())?;

    let use_case = CurrentSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = use_case
        .get_session(&token, &fingerprint.hash)
        .await
        .map_err(|e| e.into_response())?;

    let identity: Identity = session.identity();
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
