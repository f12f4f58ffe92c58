use std::fmt;

use crate::domain::AppError;

/// Repository and default ticket a stack launches sessions against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    pub repository: &'static str,
    pub default_ticket: &'static str,
}

/// The stacks sessions can be launched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stack {
    /// Assisted grading services.
    Asg,
    /// Paper-to-digital services.
    P2d,
    /// Checklist editor services.
    Cle,
}

impl Stack {
    /// All known stacks in CLI order.
    pub const ALL: [Stack; 3] = [Stack::Asg, Stack::P2d, Stack::Cle];

    /// Short key used on the command line and in target file names.
    pub fn key(&self) -> &'static str {
        match self {
            Stack::Asg => "asg",
            Stack::P2d => "p2d",
            Stack::Cle => "cle",
        }
    }

    /// Parse a stack from its short key.
    pub fn from_key(key: &str) -> Option<Stack> {
        match key.to_lowercase().as_str() {
            "asg" => Some(Stack::Asg),
            "p2d" => Some(Stack::P2d),
            "cle" => Some(Stack::Cle),
            _ => None,
        }
    }

    pub fn config(&self) -> StackConfig {
        match self {
            Stack::Asg => StackConfig {
                repository: "tii-assisted-grading-services",
                default_ticket: "P2D-18",
            },
            Stack::P2d => StackConfig {
                repository: "paper-to-digital-services",
                default_ticket: "P2D-1816",
            },
            Stack::Cle => StackConfig {
                repository: "tii-checklist-editor-services",
                default_ticket: "P2D-1793",
            },
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolve a stack key to its repository and default ticket.
pub fn resolve(stack_key: &str) -> Result<StackConfig, AppError> {
    Stack::from_key(stack_key)
        .map(|stack| stack.config())
        .ok_or_else(|| AppError::InvalidStack(stack_key.to_string()))
}
