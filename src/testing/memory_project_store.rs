use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, PromptTemplate, Stack, TargetType};
use crate::ports::ProjectStore;

/// In-memory project tree for tests.
#[derive(Debug, Clone)]
pub struct MemoryProjectStore {
    root: PathBuf,
    templates: HashMap<&'static str, String>,
    targets: HashMap<(Stack, TargetType), String>,
    config: Option<String>,
    prompts: HashMap<PathBuf, String>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/project"),
            templates: HashMap::new(),
            targets: HashMap::new(),
            config: None,
            prompts: HashMap::new(),
        }
    }

    pub fn with_template(mut self, template: PromptTemplate, content: &str) -> Self {
        self.templates.insert(template.file_name(), content.to_string());
        self
    }

    pub fn with_targets(mut self, stack: Stack, target_type: TargetType, json: &str) -> Self {
        self.targets.insert((stack, target_type), json.to_string());
        self
    }

    pub fn with_config(mut self, content: &str) -> Self {
        self.config = Some(content.to_string());
        self
    }

    /// Add a prompt file; relative paths are stored under the root.
    pub fn with_prompt(mut self, path: &str, content: &str) -> Self {
        let resolved = self.resolve(Path::new(path));
        self.prompts.insert(resolved, content.to_string());
        self
    }
}

impl ProjectStore for MemoryProjectStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_template(&self, template: PromptTemplate) -> Result<String, AppError> {
        self.templates
            .get(template.file_name())
            .cloned()
            .ok_or_else(|| AppError::TemplateNotFound(self.root.join(template.file_name())))
    }

    fn read_targets(&self, stack: Stack, target_type: TargetType) -> Result<String, AppError> {
        self.targets.get(&(stack, target_type)).cloned().ok_or_else(|| {
            AppError::TargetsNotFound(
                self.root
                    .join("targets")
                    .join(target_type.dir_name())
                    .join(format!("{}.json", stack.key())),
            )
        })
    }

    fn read_config(&self) -> Result<Option<String>, AppError> {
        Ok(self.config.clone())
    }

    fn read_prompt(&self, path: &Path) -> Result<Option<String>, AppError> {
        Ok(self.prompts.get(&self.resolve(path)).cloned())
    }
}
