//! Entities

pub mod auth_session;
pub mod member;

pub use auth_session::AuthSession;
pub use member::Member;
