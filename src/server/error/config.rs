pub use crate::config::ConfigError;
