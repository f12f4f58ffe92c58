use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for launch-control operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Run configuration file failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Stack key is not one of the known stacks.
    #[error("Invalid stack: {0}")]
    InvalidStack(String),

    /// Session kind is not one of the known kinds.
    #[error("Invalid session type '{0}'. Must be one of: unit, integration, prompt.")]
    InvalidSessionKind(String),

    /// Target type is not one of the known target types.
    #[error("Unsupported target type: {0}")]
    UnsupportedTargetType(String),

    /// Unit sessions only accept unit-level target types.
    #[error("Target type must be one of module, class, or function for unit sessions (got '{0}').")]
    InvalidUnitTargetType(String),

    /// Ad hoc sessions need prompt text.
    #[error("Prompt is required when type is prompt.")]
    PromptRequired,

    /// Target file for the stack and target type does not exist.
    #[error("Target configuration not found at {}", .0.display())]
    TargetsNotFound(PathBuf),

    /// Target file is not valid JSON or not a list of targets.
    #[error("Failed to parse targets for {target_type} targets: {details}")]
    MalformedTargets { target_type: String, details: String },

    /// A target entry lacks a required field.
    #[error("{target_type} targets require a '{field}' entry.")]
    MissingTargetField { target_type: String, field: &'static str },

    /// A target entry does not match the requested target type.
    #[error("Target for module '{module}' is a {actual} target, expected {expected}")]
    TargetTypeMismatch { module: String, expected: String, actual: String },

    /// Template file is missing from the project.
    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Template could not be rendered.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Compilation finished without producing a single prompt.
    #[error("No prompts were generated.")]
    NoPromptsGenerated,

    /// Response body was not valid JSON.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}
