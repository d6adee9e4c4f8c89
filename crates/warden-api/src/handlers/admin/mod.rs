//! Admin-gated handlers.

pub mod audit;
pub mod users;
