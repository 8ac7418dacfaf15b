//! Clubs Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Club entity, value objects, repository trait, ownership policy
//! - `application/` - Use cases (list, create, update, delete)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Authorization Model
//! - Every operation requires an authenticated [`kernel::identity::Identity`],
//!   injected by the auth crate's session middleware
//! - Update and delete are officer-only: the acting member must be the
//!   club's creator. Role is carried as data but never consulted here
//! - Club name uniqueness is enforced solely by the store constraint,
//!   on create and on rename alike

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ClubError, ClubResult};
pub use infra::postgres::PgClubRepository;
pub use presentation::router::clubs_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgClubRepository as ClubStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
