//! Integration layer between a game-server community site and a NamelessMC forum.
//!
//! - [`client`] - typed forum API client and the session/auth manager built on it
//! - [`server`] - endpoints that expose forum data read straight from the forum database
//! - [`model`] - wire types shared by both sides
//!
//! The client and server halves are behind the `client` and `server` features.

pub mod config;
pub mod model;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "server")]
pub mod server;
