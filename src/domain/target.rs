//! Target entries loaded from `targets/<type>/<stack>.json`.
//!
//! The JSON carries no discriminator; the requested target type decides which
//! shape each entry must have, and mismatched shapes are rejected while parsing.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{AppError, TargetType};

/// One unit of work requiring generated prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Module { module: String },
    Class { module: String, classes: Vec<String> },
    Function { module: String, class: String, functions: Vec<String> },
    Scenario { module: String, scenarios: Vec<String> },
}

impl Target {
    pub fn module(&self) -> &str {
        match self {
            Target::Module { module }
            | Target::Class { module, .. }
            | Target::Function { module, .. }
            | Target::Scenario { module, .. } => module,
        }
    }

    pub fn target_type(&self) -> TargetType {
        match self {
            Target::Module { .. } => TargetType::Module,
            Target::Class { .. } => TargetType::Class,
            Target::Function { .. } => TargetType::Function,
            Target::Scenario { .. } => TargetType::Scenario,
        }
    }

    /// Parse one JSON entry as a target of the given type.
    pub fn from_value(value: Value, target_type: TargetType) -> Result<Self, AppError> {
        let raw: RawTarget = serde_json::from_value(value).map_err(|e| malformed(target_type, e))?;

        let module = raw
            .module
            .filter(|m| !m.is_empty())
            .ok_or_else(|| missing(target_type, "module"))?;

        Ok(match target_type {
            TargetType::Module => Target::Module { module },
            TargetType::Class => Target::Class { module, classes: raw.classes },
            TargetType::Function => {
                let class = raw
                    .class
                    .filter(|c| !c.is_empty())
                    .ok_or_else(|| missing(target_type, "class"))?;
                Target::Function { module, class, functions: raw.functions }
            }
            TargetType::Scenario => Target::Scenario {
                module,
                scenarios: raw.scenarios.into_iter().map(ScenarioId::into_string).collect(),
            },
        })
    }
}

/// Parse a JSON array of targets of the given type.
pub fn parse_targets(content: &str, target_type: TargetType) -> Result<Vec<Target>, AppError> {
    let entries: Vec<Value> =
        serde_json::from_str(content).map_err(|e| malformed(target_type, e))?;

    entries.into_iter().map(|entry| Target::from_value(entry, target_type)).collect()
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    #[serde(default)]
    module: Option<String>,
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    classes: Vec<String>,
    #[serde(default)]
    functions: Vec<String>,
    #[serde(default)]
    scenarios: Vec<ScenarioId>,
}

/// Scenario identifiers appear as either strings or bare numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScenarioId {
    Text(String),
    Number(serde_json::Number),
}

impl ScenarioId {
    fn into_string(self) -> String {
        match self {
            ScenarioId::Text(text) => text,
            ScenarioId::Number(number) => number.to_string(),
        }
    }
}

fn missing(target_type: TargetType, field: &'static str) -> AppError {
    AppError::MissingTargetField { target_type: target_type.display_name().to_string(), field }
}

fn malformed(target_type: TargetType, err: serde_json::Error) -> AppError {
    AppError::MalformedTargets {
        target_type: target_type.dir_name().to_string(),
        details: err.to_string(),
    }
}
