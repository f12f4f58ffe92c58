mod launch_pad;
mod project_store;
mod session_client;

pub use launch_pad::{LaunchPadStore, prompt_file_index, prompt_file_name};
pub use project_store::ProjectStore;
pub use session_client::{SessionClient, SessionResponse};
