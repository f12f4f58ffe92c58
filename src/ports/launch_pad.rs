use std::path::PathBuf;

use crate::domain::AppError;

/// Scratch directory holding the numbered prompt files of one run.
pub trait LaunchPadStore {
    /// Create the directory if needed and remove previously materialized prompt files.
    ///
    /// Files that do not follow the `prompt_NN.txt` naming are left alone.
    fn clear(&self) -> Result<(), AppError>;

    /// Write prompts as `prompt_01.txt`, `prompt_02.txt`, ... and return their paths in order.
    fn stage(&self, prompts: &[String]) -> Result<Vec<PathBuf>, AppError>;

    /// Prompt files currently on the pad, in launch order.
    fn prompt_files(&self) -> Result<Vec<PathBuf>, AppError>;
}

/// File name for the prompt at 1-based `index`.
pub fn prompt_file_name(index: usize) -> String {
    format!("prompt_{:02}.txt", index)
}

/// Parse the 1-based index out of a `prompt_NN.txt` file name.
pub fn prompt_file_index(file_name: &str) -> Option<usize> {
    let digits = file_name.strip_prefix("prompt_")?.strip_suffix(".txt")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_zero_padded() {
        assert_eq!(prompt_file_name(1), "prompt_01.txt");
        assert_eq!(prompt_file_name(12), "prompt_12.txt");
        assert_eq!(prompt_file_name(123), "prompt_123.txt");
    }

    #[test]
    fn parses_only_numbered_prompt_files() {
        assert_eq!(prompt_file_index("prompt_01.txt"), Some(1));
        assert_eq!(prompt_file_index("prompt_42.txt"), Some(42));
        assert_eq!(prompt_file_index("prompt_.txt"), None);
        assert_eq!(prompt_file_index("prompt_ab.txt"), None);
        assert_eq!(prompt_file_index("notes.txt"), None);
        assert_eq!(prompt_file_index("prompt_01.md"), None);
    }
}
