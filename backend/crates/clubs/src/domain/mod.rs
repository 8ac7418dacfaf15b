//! Domain Layer
//!
//! Entities, value objects, repository trait, and the ownership policy.

pub mod entities;
pub mod policy;
pub mod repository;
pub mod value_objects;

pub use entities::{Club, ClubWithOfficer};
pub use repository::ClubRepository;
pub use value_objects::{ClubDescription, ClubName};
