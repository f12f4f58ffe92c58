//! launch-control: compile templated prompts from target lists and launch them as remote sessions.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{LiftoffOptions, liftoff};
pub use app::commands::launch::LaunchReport;
pub use app::commands::liftoff::LiftoffOutcome;
pub use domain::{AppError, LaunchOptions, LaunchRequest, PromptRef, Stack, StackConfig, Target};
