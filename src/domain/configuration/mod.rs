pub mod loader;
pub mod run_config;

pub use loader::{load_config, parse_config_content};
pub use run_config::{RunConfig, SessionApiConfig};
