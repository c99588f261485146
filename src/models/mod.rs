pub mod config;

pub use config::{AppConfig, ColorsConfig, EdgeConfig, MatchingConfig};
