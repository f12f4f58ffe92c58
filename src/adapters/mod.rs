pub mod launch_pad_filesystem;
pub mod project_filesystem;
pub mod session_client_http;
pub mod template;

pub use launch_pad_filesystem::FilesystemLaunchPad;
pub use project_filesystem::{FilesystemProjectStore, LAUNCH_PAD_DIR};
pub use session_client_http::HttpSessionClient;
pub use template::PlaceholderTemplateRenderer;
