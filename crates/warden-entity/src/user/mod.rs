//! Principal entity, role enumeration, and credential store port.

pub mod model;
pub mod role;
pub mod store;

pub use model::{CreateUser, User};
pub use role::UserRole;
pub use store::CredentialStore;
