//! Service layer between the controllers and the repositories.
//!
//! Services turn repository rows into domain models and hold what business logic
//! the endpoints have.

pub mod forum;
pub mod stats;
pub mod webhook;
