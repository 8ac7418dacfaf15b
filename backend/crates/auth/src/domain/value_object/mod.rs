//! Value Objects

pub mod email;
pub mod full_name;

pub use email::Email;
pub use full_name::FullName;
