//! Validated launch request.

use crate::domain::{AppError, SessionKind, Stack, TargetType};

/// Unvalidated launch options as received from the command line or library callers.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub stack: String,
    /// Ticket override; the stack default is used when absent.
    pub ticket: Option<String>,
    pub session_kind: String,
    pub target_type: String,
    pub prompt: Option<String>,
    /// Maximum number of prompts to render; unbounded when `None`.
    pub limit: Option<usize>,
    pub debug: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            stack: String::new(),
            ticket: None,
            session_kind: SessionKind::Unit.name().to_string(),
            target_type: TargetType::Class.dir_name().to_string(),
            prompt: None,
            limit: Some(5),
            debug: false,
        }
    }
}

/// Configuration for one invocation after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub stack: Stack,
    pub repository: String,
    pub ticket: String,
    pub kind: SessionKind,
    /// Forced to `Scenario` for integration sessions.
    pub target_type: TargetType,
    pub prompt: Option<String>,
    pub limit: Option<usize>,
    pub debug: bool,
}

impl LaunchRequest {
    /// Validate raw options into a request.
    pub fn from_options(options: LaunchOptions) -> Result<Self, AppError> {
        let kind = SessionKind::from_name(&options.session_kind)
            .ok_or_else(|| AppError::InvalidSessionKind(options.session_kind.clone()))?;

        let prompt = options.prompt.filter(|p| !p.trim().is_empty());
        if kind == SessionKind::Adhoc && prompt.is_none() {
            return Err(AppError::PromptRequired);
        }

        let requested = TargetType::from_name(&options.target_type)
            .ok_or_else(|| AppError::UnsupportedTargetType(options.target_type.clone()))?;
        let target_type = match kind {
            SessionKind::Integration => TargetType::Scenario,
            SessionKind::Unit if !requested.is_unit_level() => {
                return Err(AppError::InvalidUnitTargetType(requested.dir_name().to_string()));
            }
            SessionKind::Unit | SessionKind::Adhoc => requested,
        };

        let stack = Stack::from_key(&options.stack)
            .ok_or_else(|| AppError::InvalidStack(options.stack.clone()))?;
        let config = stack.config();
        let ticket = options
            .ticket
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| config.default_ticket.to_string());

        Ok(Self {
            stack,
            repository: config.repository.to_string(),
            ticket,
            kind,
            target_type,
            prompt,
            limit: options.limit,
            debug: options.debug,
        })
    }

    pub fn is_adhoc(&self) -> bool {
        self.kind == SessionKind::Adhoc
    }
}
