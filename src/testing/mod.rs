mod fake_session_client;
mod memory_launch_pad;
mod memory_project_store;

pub use fake_session_client::FakeSessionClient;
pub use memory_launch_pad::MemoryLaunchPad;
pub use memory_project_store::MemoryProjectStore;
