use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, CONFIG_FILE, PromptTemplate, Stack, TargetType};
use crate::ports::ProjectStore;

/// Directory holding the prompt templates.
pub const PROMPTS_DIR: &str = "prompts";
/// Launch pad directory, relative to the project root.
pub const LAUNCH_PAD_DIR: &str = "prompts/launch_pad";
/// Directory holding `<target-type>/<stack>.json` target lists.
pub const TARGETS_DIR: &str = "targets";

/// Filesystem-based project store.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a project store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn template_path(&self, template: PromptTemplate) -> PathBuf {
        self.root.join(PROMPTS_DIR).join(template.file_name())
    }

    pub fn targets_path(&self, stack: Stack, target_type: TargetType) -> PathBuf {
        self.root
            .join(TARGETS_DIR)
            .join(target_type.dir_name())
            .join(format!("{}.json", stack.key()))
    }

    pub fn launch_pad_path(&self) -> PathBuf {
        self.root.join(LAUNCH_PAD_DIR)
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_template(&self, template: PromptTemplate) -> Result<String, AppError> {
        let path = self.template_path(template);
        read_optional(&path)?.ok_or(AppError::TemplateNotFound(path))
    }

    fn read_targets(&self, stack: Stack, target_type: TargetType) -> Result<String, AppError> {
        let path = self.targets_path(stack, target_type);
        read_optional(&path)?.ok_or(AppError::TargetsNotFound(path))
    }

    fn read_config(&self) -> Result<Option<String>, AppError> {
        read_optional(&self.root.join(CONFIG_FILE))
    }

    fn read_prompt(&self, path: &Path) -> Result<Option<String>, AppError> {
        read_optional(&self.resolve(path))
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FilesystemProjectStore) {
        let dir = TempDir::new().unwrap();
        let store = FilesystemProjectStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn reads_targets_by_type_and_stack() {
        let (dir, store) = store();
        let class_dir = dir.path().join("targets/class");
        fs::create_dir_all(&class_dir).unwrap();
        fs::write(class_dir.join("p2d.json"), "[]").unwrap();

        assert_eq!(store.read_targets(Stack::P2d, TargetType::Class).unwrap(), "[]");
    }

    #[test]
    fn missing_targets_name_the_path() {
        let (_dir, store) = store();
        let err = store.read_targets(Stack::Asg, TargetType::Module).unwrap_err();
        match err {
            AppError::TargetsNotFound(path) => assert!(path.ends_with("targets/module/asg.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_template_is_not_found() {
        let (_dir, store) = store();
        let err = store.read_template(PromptTemplate::Playbook).unwrap_err();
        assert!(matches!(err, AppError::TemplateNotFound(_)));
    }

    #[test]
    fn relative_prompt_paths_resolve_against_root() {
        let (dir, store) = store();
        fs::create_dir_all(dir.path().join("prompts/launch_pad")).unwrap();
        fs::write(dir.path().join("prompts/launch_pad/prompt_01.txt"), "hello").unwrap();

        let relative = Path::new("prompts/launch_pad/prompt_01.txt");
        assert_eq!(store.read_prompt(relative).unwrap().as_deref(), Some("hello"));
        let absolute = dir.path().join(relative);
        assert_eq!(store.read_prompt(&absolute).unwrap().as_deref(), Some("hello"));
        let missing = Path::new("prompts/launch_pad/prompt_02.txt");
        assert_eq!(store.read_prompt(missing).unwrap(), None);
    }

    #[test]
    fn config_is_optional() {
        let (dir, store) = store();
        assert_eq!(store.read_config().unwrap(), None);

        fs::write(dir.path().join(CONFIG_FILE), "[api]\n").unwrap();
        assert_eq!(store.read_config().unwrap().as_deref(), Some("[api]\n"));
    }
}
