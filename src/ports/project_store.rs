use std::path::{Path, PathBuf};

use crate::domain::{AppError, PromptTemplate, Stack, TargetType};

/// Read access to the project tree: templates, target lists, and prompt files.
pub trait ProjectStore {
    /// Root that relative prompt paths resolve against.
    fn root(&self) -> &Path;

    /// Read a prompt template.
    fn read_template(&self, template: PromptTemplate) -> Result<String, AppError>;

    /// Read the raw JSON target list for a stack and target type.
    fn read_targets(&self, stack: Stack, target_type: TargetType) -> Result<String, AppError>;

    /// Read the run configuration file, if present.
    fn read_config(&self) -> Result<Option<String>, AppError>;

    /// Read a prompt file; `Ok(None)` when it does not exist.
    fn read_prompt(&self, path: &Path) -> Result<Option<String>, AppError>;

    /// Resolve a possibly relative prompt path against the project root.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root().join(path) }
    }
}
