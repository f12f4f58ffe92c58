use std::fmt;
use std::path::PathBuf;

/// One compiled prompt, handed from the compiler to the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRef {
    /// Prompt materialized on the launch pad.
    File(PathBuf),
    /// Ad hoc prompt text, never written to disk.
    Inline(String),
}

impl fmt::Display for PromptRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptRef::File(path) => write!(f, "{}", path.display()),
            PromptRef::Inline(_) => f.write_str("inline prompt"),
        }
    }
}

/// Append a token so repeated launches of the same text are not collapsed upstream.
pub fn with_uniqueness_token(prompt: &str, token: &str) -> String {
    format!("{}\n\n{}", prompt, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_appended_after_blank_line() {
        assert_eq!(with_uniqueness_token("Do the thing", "abc"), "Do the thing\n\nabc");
    }

    #[test]
    fn inline_refs_do_not_display_their_text() {
        let inline = PromptRef::Inline("secret objective".into());
        assert_eq!(inline.to_string(), "inline prompt");
        let file = PromptRef::File(PathBuf::from("prompts/launch_pad/prompt_01.txt"));
        assert_eq!(file.to_string(), "prompts/launch_pad/prompt_01.txt");
    }
}
