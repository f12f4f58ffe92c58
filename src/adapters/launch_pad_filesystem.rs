use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{LaunchPadStore, prompt_file_index, prompt_file_name};

/// Launch pad backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemLaunchPad {
    dir: PathBuf,
}

impl FilesystemLaunchPad {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn numbered_files(&self) -> Result<Vec<(usize, PathBuf)>, AppError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(index) = name.to_str().and_then(prompt_file_index) {
                files.push((index, entry.path()));
            }
        }
        files.sort();
        Ok(files)
    }
}

impl LaunchPadStore for FilesystemLaunchPad {
    fn clear(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        for (_, path) in self.numbered_files()? {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn stage(&self, prompts: &[String]) -> Result<Vec<PathBuf>, AppError> {
        fs::create_dir_all(&self.dir)?;

        let mut written = Vec::with_capacity(prompts.len());
        for (index, prompt) in prompts.iter().enumerate() {
            let destination = self.dir.join(prompt_file_name(index + 1));
            if let Err(err) = fs::write(&destination, prompt) {
                // Leave no partial batch behind.
                for path in &written {
                    let _ = fs::remove_file(path);
                }
                return Err(err.into());
            }
            written.push(destination);
        }

        Ok(written)
    }

    fn prompt_files(&self) -> Result<Vec<PathBuf>, AppError> {
        Ok(self.numbered_files()?.into_iter().map(|(_, path)| path).collect())
    }
}
