//! SeaORM entities for the NamelessMC tables read by the forum endpoints.
//!
//! The schema is owned by the forum platform; these entities only describe the
//! columns this application reads. No migrations are shipped for them.

pub mod prelude;

pub mod forum;
pub mod post;
pub mod topic;
pub mod user;
