//! Client side of the forum integration: the typed API client, the session
//! manager and the forum overview loader.

pub mod api;
pub mod config;
pub mod forum;
pub mod model;
pub mod session;

#[cfg(test)]
mod test_support;

pub use api::{ForumClient, UserLookup};
pub use config::{ClientConfig, Routing};
pub use forum::{load_forum_overview, ForumOverview, Listing};
pub use session::{RegisterForm, SessionManager};
