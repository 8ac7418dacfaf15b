//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ClubAppState;
pub use router::{clubs_router, clubs_router_generic};
