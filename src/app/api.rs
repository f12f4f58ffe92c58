//! Library entry points wiring the filesystem and HTTP adapters together.

use std::path::PathBuf;

use crate::adapters::{
    FilesystemLaunchPad, FilesystemProjectStore, HttpSessionClient, PlaceholderTemplateRenderer,
};
use crate::app::AppContext;
use crate::app::commands::liftoff::{self, LiftoffOutcome};
use crate::domain::{AppError, LaunchOptions, LaunchRequest, PromptRef, load_config};

/// Options for one liftoff.
#[derive(Debug, Clone, Default)]
pub struct LiftoffOptions {
    pub launch: LaunchOptions,
    /// Project root; defaults to the current directory.
    pub root: Option<PathBuf>,
    /// Compile and list prompts without launching them.
    pub prompt_preview: bool,
}

/// Validate options, compile prompts, and launch them.
///
/// The API key is checked before the launch pad is touched, unless only a
/// preview was requested.
pub fn liftoff(options: LiftoffOptions) -> Result<LiftoffOutcome, AppError> {
    let request = LaunchRequest::from_options(options.launch)?;
    tracing::debug!(?request, "validated launch request");

    let project = match options.root {
        Some(root) => FilesystemProjectStore::new(root),
        None => FilesystemProjectStore::current()?,
    };
    let config = load_config(&project)?;
    let launch_pad = FilesystemLaunchPad::new(project.launch_pad_path());
    let ctx = AppContext::new(project, launch_pad, PlaceholderTemplateRenderer::new());

    if options.prompt_preview {
        let prompts = liftoff::prepare(&ctx, &request)?;
        println!("Prompt preview ({} prompt(s), nothing launched):", prompts.len());
        for prompt in &prompts {
            match prompt {
                PromptRef::File(path) => println!("  {}", path.display()),
                PromptRef::Inline(text) => println!("{}", text),
            }
        }
        return Ok(LiftoffOutcome { prompts, report: None });
    }

    let client = HttpSessionClient::from_env_with_config(&config.api)?;
    tracing::debug!(api_url = %client.api_url(), "session client ready");

    liftoff::execute(&ctx, &client, &request)
}
