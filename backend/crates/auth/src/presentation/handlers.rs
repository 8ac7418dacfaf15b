//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::severity::Severity;
use platform::client::{extract_client_ip, extract_fingerprint};

use crate::application::config::AuthConfig;
use crate::application::{
    CurrentSessionUseCase, LogInInput, LogInUseCase, LogOutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{MemberRepository, SessionRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    LogInRequest, LogInResponse, RegisterRequest, RegisterResponse, SessionStatusResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: MemberRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: MemberRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        full_name: req.full_name,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            member_id: output.member_id,
            message: "Registration successful! You can now log in.".to_string(),
            severity: Severity::Success,
        }),
    ))
}

// ============================================================================
// Log In
// ============================================================================

/// POST /api/auth/login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<LogInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: MemberRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    let fingerprint = extract_fingerprint(&headers, client_ip)?;

    let use_case = LogInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LogInInput {
        email: req.email,
        password: req.password,
        remember_me: req.remember_me,
    };

    let output = use_case.execute(input, fingerprint).await?;

    // Max-Age must match the server-side TTL for the remember_me choice
    let max_age = state.config.session_ttl(output.remember_me).as_secs();
    let cookie = state
        .config
        .cookie()
        .build_set_cookie(&output.session_token, Some(max_age));

    let message = format!(
        "Welcome, {}! You are logged in as a {}.",
        output.full_name, output.role
    );

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogInResponse {
            member_id: output.member_id,
            full_name: output.full_name,
            role: output.role.code().to_string(),
            message,
            severity: Severity::Success,
        }),
    ))
}

// ============================================================================
// Log Out
// ============================================================================

/// POST /api/auth/logout
///
/// Idempotent: a missing or garbage cookie still gets 204 and a
/// Set-Cookie that clears the session cookie.
pub async fn log_out<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: MemberRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = LogOutUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(token.as_deref()).await?;

    let cookie = state.config.cookie().build_clear_cookie();

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
) -> AuthResult<Json<SessionStatusResponse>>
where
    R: MemberRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    let fingerprint = extract_fingerprint(&headers, client_ip)?;

    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = CurrentSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session_info = if let Some(token) = token {
        use_case.execute(&token, &fingerprint.hash).await.ok()
    } else {
        None
    };

    match session_info {
        Some(info) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            member_id: Some(info.member_id),
            full_name: Some(info.full_name),
            role: Some(info.role.code().to_string()),
            expires_at_ms: Some(info.expires_at_ms),
        })),
        None => Ok(Json(SessionStatusResponse::anonymous())),
    }
}
