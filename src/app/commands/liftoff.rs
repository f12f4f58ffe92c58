//! The full sequence: load targets, compile prompts, launch them.

use crate::app::AppContext;
use crate::app::commands::{compile, launch, targets};
use crate::domain::{AppError, LaunchRequest, PromptRef, TemplateRenderer};
use crate::ports::{LaunchPadStore, ProjectStore, SessionClient};

pub use launch::LaunchReport;

/// Result of one liftoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftoffOutcome {
    pub prompts: Vec<PromptRef>,
    /// `None` when prompts were only previewed.
    pub report: Option<LaunchReport>,
}

/// Load targets and compile them onto the launch pad.
pub fn prepare<P, L, R>(
    ctx: &AppContext<P, L, R>,
    request: &LaunchRequest,
) -> Result<Vec<PromptRef>, AppError>
where
    P: ProjectStore,
    L: LaunchPadStore,
    R: TemplateRenderer,
{
    println!("Getting targets...");
    let targets = targets::load(ctx.project(), request)?;
    tracing::debug!(count = targets.len(), ?targets, "loaded targets");

    println!("Building prompts...");
    let prompts = compile::execute(ctx, request, &targets)?;
    tracing::debug!(count = prompts.len(), ?prompts, "compiled prompts");

    Ok(prompts)
}

/// Prepare prompts and launch each of them through `client`.
pub fn execute<P, L, R, C>(
    ctx: &AppContext<P, L, R>,
    client: &C,
    request: &LaunchRequest,
) -> Result<LiftoffOutcome, AppError>
where
    P: ProjectStore,
    L: LaunchPadStore,
    R: TemplateRenderer,
    C: SessionClient + ?Sized,
{
    let prompts = prepare(ctx, request)?;
    let report = launch::execute(ctx.project(), client, &prompts);

    println!(
        "Launched {} prompt(s): {} failed, {} skipped.",
        report.submitted, report.failed, report.skipped
    );
    println!("Houston, we have liftoff! 🚀🚀🚀");

    Ok(LiftoffOutcome { prompts, report: Some(report) })
}
