//! Clubs Router

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::domain::repository::ClubRepository;
use crate::infra::postgres::PgClubRepository;
use crate::presentation::handlers::{self, ClubAppState};

/// Create the Clubs router with PostgreSQL repository
///
/// The caller is expected to wrap this router in the auth crate's
/// `require_session` middleware.
pub fn clubs_router(repo: PgClubRepository) -> Router {
    clubs_router_generic(repo)
}

/// Create a generic Clubs router for any repository implementation
pub fn clubs_router_generic<R>(repo: R) -> Router
where
    R: ClubRepository + Clone + Send + Sync + 'static,
{
    let state = ClubAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_clubs::<R>).post(handlers::create_club::<R>),
        )
        .route(
            "/{club_id}",
            put(handlers::update_club::<R>).delete(handlers::delete_club::<R>),
        )
        .with_state(state)
}
