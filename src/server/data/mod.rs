//! Read-only repositories over the forum platform's tables.
//!
//! Repositories use SeaORM entity models internally and hand raw rows, grouped
//! for the caller, to the service layer. Nothing here writes to the database.

pub mod category;
pub mod stats;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;
