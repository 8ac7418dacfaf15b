//! Application Layer
//!
//! Use cases orchestrating validation, the ownership gate, and the
//! repository. Every mutation takes the acting [`kernel::identity::Identity`]
//! explicitly; there is no ambient caller state.

pub mod create_club;
pub mod delete_club;
pub mod list_clubs;
pub mod update_club;

pub use create_club::{CreateClubInput, CreateClubOutput, CreateClubUseCase};
pub use delete_club::{DeleteClubOutput, DeleteClubUseCase};
pub use list_clubs::ListClubsUseCase;
pub use update_club::{UpdateClubInput, UpdateClubOutput, UpdateClubUseCase};
