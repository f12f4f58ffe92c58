use std::cell::RefCell;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::{LaunchPadStore, prompt_file_name};

/// In-memory launch pad; `fail_stage` simulates a write failure.
#[derive(Debug, Default)]
pub struct MemoryLaunchPad {
    pub files: RefCell<Vec<(PathBuf, String)>>,
    pub clears: RefCell<usize>,
    pub fail_stage: bool,
}

impl MemoryLaunchPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let pad = Self::new();
        pad.files
            .borrow_mut()
            .extend(files.iter().map(|(name, body)| (PathBuf::from(name), body.to_string())));
        pad
    }

    pub fn contents(&self) -> Vec<String> {
        self.files.borrow().iter().map(|(_, body)| body.clone()).collect()
    }
}

impl LaunchPadStore for MemoryLaunchPad {
    fn clear(&self) -> Result<(), AppError> {
        self.files.borrow_mut().clear();
        *self.clears.borrow_mut() += 1;
        Ok(())
    }

    fn stage(&self, prompts: &[String]) -> Result<Vec<PathBuf>, AppError> {
        if self.fail_stage {
            return Err(AppError::Io(std::io::Error::other("disk full")));
        }
        let mut files = self.files.borrow_mut();
        let mut paths = Vec::with_capacity(prompts.len());
        for (index, prompt) in prompts.iter().enumerate() {
            let path = PathBuf::from("prompts/launch_pad").join(prompt_file_name(index + 1));
            files.push((path.clone(), prompt.clone()));
            paths.push(path);
        }
        Ok(paths)
    }

    fn prompt_files(&self) -> Result<Vec<PathBuf>, AppError> {
        Ok(self.files.borrow().iter().map(|(path, _)| path.clone()).collect())
    }
}
