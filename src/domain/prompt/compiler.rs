//! Rendering of targets into prompt text.

use crate::domain::prompt::{PromptContext, PromptTemplate, TemplateRenderer, build_injections};
use crate::domain::{AppError, LaunchRequest, Target, TargetType};

/// Render the single ad hoc prompt.
pub fn render_adhoc<R: TemplateRenderer + ?Sized>(
    renderer: &R,
    template: &str,
    request: &LaunchRequest,
) -> Result<String, AppError> {
    let objective = request.prompt.as_deref().ok_or(AppError::PromptRequired)?;
    let context = PromptContext::new()
        .with_var("REPO", request.repository.as_str())
        .with_var("OBJECTIVE", objective)
        .with_var("JIRA_TICKET", request.ticket.as_str());

    renderer.render(template, &context, PromptTemplate::Custom.file_name())
}

/// Render one prompt per target sub-item, in target order, capped at the request limit.
///
/// The cap applies to the total across all targets; rendering stops mid-target
/// once it is reached.
pub fn render_targets<R: TemplateRenderer + ?Sized>(
    renderer: &R,
    template: &str,
    request: &LaunchRequest,
    targets: &[Target],
) -> Result<Vec<String>, AppError> {
    let mut batch = Batch {
        renderer,
        template,
        base: PromptContext::new()
            .with_var("REPO", request.repository.as_str())
            .with_var("JIRA_TICKET", request.ticket.as_str()),
        limit: request.limit.unwrap_or(usize::MAX),
        prompts: Vec::new(),
    };

    for target in targets {
        if batch.is_full() {
            break;
        }

        if target.target_type() != request.target_type {
            return Err(AppError::TargetTypeMismatch {
                module: target.module().to_string(),
                expected: request.target_type.dir_name().to_string(),
                actual: target.target_type().dir_name().to_string(),
            });
        }

        let before = batch.prompts.len();
        match target {
            Target::Module { module } => {
                batch.push(
                    TargetType::Module,
                    format!("Add unit tests for the module {}", module),
                    build_injections(&["Module", module.as_str()]),
                )?;
            }
            Target::Class { module, classes } => {
                for class in classes {
                    if batch.is_full() {
                        break;
                    }
                    batch.push(
                        TargetType::Class,
                        format!("Add unit tests for the class {}", class),
                        build_injections(&["Module", module.as_str(), "", "Class", class.as_str()]),
                    )?;
                }
            }
            Target::Function { module, class, functions } => {
                for function in functions {
                    if batch.is_full() {
                        break;
                    }
                    batch.push(
                        TargetType::Function,
                        format!("Add unit tests for the function {}", function),
                        build_injections(&[
                            "Module",
                            module.as_str(),
                            "",
                            "Class",
                            class.as_str(),
                            "",
                            "Method",
                            function.as_str(),
                        ]),
                    )?;
                }
            }
            Target::Scenario { module, scenarios } => {
                for scenario in scenarios {
                    if batch.is_full() {
                        break;
                    }
                    batch.push(
                        TargetType::Scenario,
                        format!("Execute integration scenario {}", scenario),
                        build_injections(&[
                            "Module",
                            module.as_str(),
                            "",
                            "Scenario",
                            scenario.as_str(),
                        ]),
                    )?;
                }
            }
        }

        if batch.prompts.len() == before {
            tracing::warn!(module = target.module(), "target produced no prompts");
        }
    }

    if batch.prompts.is_empty() {
        return Err(AppError::NoPromptsGenerated);
    }

    Ok(batch.prompts)
}

struct Batch<'a, R: ?Sized> {
    renderer: &'a R,
    template: &'a str,
    base: PromptContext,
    limit: usize,
    prompts: Vec<String>,
}

impl<R: TemplateRenderer + ?Sized> Batch<'_, R> {
    fn is_full(&self) -> bool {
        self.prompts.len() >= self.limit
    }

    fn push(
        &mut self,
        target_type: TargetType,
        objective: String,
        injections: String,
    ) -> Result<(), AppError> {
        let context = self
            .base
            .clone()
            .with_var("PLAYBOOK", target_type.playbook())
            .with_var("OBJECTIVE", objective)
            .with_var("INJECTIONS", injections);

        let prompt =
            self.renderer.render(self.template, &context, PromptTemplate::Playbook.file_name())?;
        self.prompts.push(prompt);
        Ok(())
    }
}
