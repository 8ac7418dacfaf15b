//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_session;
pub mod log_in;
pub mod log_out;
pub mod register;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use current_session::CurrentSessionUseCase;
pub use log_in::{LogInInput, LogInOutput, LogInUseCase};
pub use log_out::LogOutUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
