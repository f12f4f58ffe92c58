//! Compile targets into prompt references and materialize them on the launch pad.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::prompt::{PromptTemplate, render_adhoc, render_targets};
use crate::domain::{AppError, LaunchRequest, PromptRef, Target, TemplateRenderer};
use crate::ports::{LaunchPadStore, ProjectStore};

/// Compile `targets` for `request`.
///
/// The launch pad is cleared before anything is rendered. Unit and integration
/// prompts are written as numbered files and returned as file references; the
/// ad hoc prompt is returned inline and never written. A limit of zero yields
/// an empty result without loading any template.
pub fn execute<P, L, R>(
    ctx: &AppContext<P, L, R>,
    request: &LaunchRequest,
    targets: &[Target],
) -> Result<Vec<PromptRef>, AppError>
where
    P: ProjectStore,
    L: LaunchPadStore,
    R: TemplateRenderer,
{
    let session = LaunchPadSession::acquire(ctx.launch_pad())?;

    if request.limit == Some(0) {
        session.release_empty();
        return Ok(Vec::new());
    }

    if request.is_adhoc() {
        let template = ctx.project().read_template(PromptTemplate::Custom)?;
        let prompt = render_adhoc(ctx.renderer(), &template, request)?;
        session.release_empty();
        return Ok(vec![PromptRef::Inline(prompt)]);
    }

    let template = ctx.project().read_template(PromptTemplate::Playbook)?;
    let prompts = render_targets(ctx.renderer(), &template, request, targets)?;
    let paths = session.commit(&prompts)?;

    Ok(paths.into_iter().map(PromptRef::File).collect())
}

/// Exclusive use of the launch pad for one compilation.
///
/// Acquiring clears the previous run's prompt files. Unless the session is
/// committed or released, dropping it clears the pad again so a failed run
/// never leaves a mix of old and new prompts.
struct LaunchPadSession<'a, L: LaunchPadStore> {
    pad: &'a L,
    done: bool,
}

impl<'a, L: LaunchPadStore> LaunchPadSession<'a, L> {
    fn acquire(pad: &'a L) -> Result<Self, AppError> {
        pad.clear()?;
        Ok(Self { pad, done: false })
    }

    fn commit(mut self, prompts: &[String]) -> Result<Vec<PathBuf>, AppError> {
        let paths = self.pad.stage(prompts)?;
        self.done = true;
        Ok(paths)
    }

    /// Finish without staging anything; the pad is already empty.
    fn release_empty(mut self) {
        self.done = true;
    }
}

impl<L: LaunchPadStore> Drop for LaunchPadSession<'_, L> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        if let Err(err) = self.pad.clear() {
            tracing::warn!(error = %err, "failed to reset launch pad after aborted compile");
        }
    }
}
