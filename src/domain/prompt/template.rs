use std::collections::BTreeMap;

use crate::domain::AppError;

/// The two project templates prompts are rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    /// Multi-purpose template for unit and integration prompts.
    Playbook,
    /// Single-prompt template for ad hoc sessions.
    Custom,
}

impl PromptTemplate {
    pub fn file_name(&self) -> &'static str {
        match self {
            PromptTemplate::Playbook => "playbook.txt",
            PromptTemplate::Custom => "custom.txt",
        }
    }
}

/// Variables substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContext {
    pub variables: BTreeMap<String, String>,
}

impl PromptContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// Trait for rendering templates.
///
/// Keeps the placeholder syntax out of the prompt compiler.
pub trait TemplateRenderer {
    /// Render `template` with `context`; `template_name` is used for error reporting.
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, AppError>;
}
