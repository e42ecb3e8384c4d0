//! Wire types shared by the API client and the server endpoints.
//!
//! Every payload exchanged with the forum platform has an explicit type here so
//! that remote JSON is validated at the boundary instead of trusted as-is.

pub mod api;
pub mod de;
pub mod forum;
pub mod server;
pub mod user;
pub mod webhook;
