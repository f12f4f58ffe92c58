pub mod configuration;
pub mod error;
pub mod prompt;
pub mod request;
pub mod session;
pub mod stack;
pub mod target;

pub use configuration::{RunConfig, SessionApiConfig, load_config};
pub use error::AppError;
pub use prompt::{PromptContext, PromptRef, PromptTemplate, TemplateRenderer};
pub use request::{LaunchOptions, LaunchRequest};
pub use session::{SessionKind, TargetType};
pub use stack::{Stack, StackConfig};
pub use target::{Target, parse_targets};

/// Name of the optional run configuration file at the project root.
pub const CONFIG_FILE: &str = "launch-control.toml";

/// Environment variable holding the session API key.
pub const API_KEY_ENV: &str = "DEVIN_API_KEY";
