use std::fmt;

/// Kind of session being launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionKind {
    /// Unit test sessions driven by module, class, or function targets.
    #[default]
    Unit,
    /// Integration sessions driven by scenario targets.
    Integration,
    /// A single free-form prompt supplied on the command line.
    Adhoc,
}

impl SessionKind {
    pub const ALL: [SessionKind; 3] =
        [SessionKind::Unit, SessionKind::Integration, SessionKind::Adhoc];

    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            SessionKind::Unit => "unit",
            SessionKind::Integration => "integration",
            SessionKind::Adhoc => "prompt",
        }
    }

    pub fn from_name(name: &str) -> Option<SessionKind> {
        match name.to_lowercase().as_str() {
            "unit" => Some(SessionKind::Unit),
            "integration" => Some(SessionKind::Integration),
            "prompt" | "adhoc" => Some(SessionKind::Adhoc),
            _ => None,
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a single target entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetType {
    Module,
    #[default]
    Class,
    Function,
    Scenario,
}

impl TargetType {
    pub const ALL: [TargetType; 4] =
        [TargetType::Module, TargetType::Class, TargetType::Function, TargetType::Scenario];

    /// Directory name under `targets/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            TargetType::Module => "module",
            TargetType::Class => "class",
            TargetType::Function => "function",
            TargetType::Scenario => "scenario",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TargetType::Module => "Module",
            TargetType::Class => "Class",
            TargetType::Function => "Function",
            TargetType::Scenario => "Scenario",
        }
    }

    pub fn from_name(name: &str) -> Option<TargetType> {
        match name.to_lowercase().as_str() {
            "module" => Some(TargetType::Module),
            "class" => Some(TargetType::Class),
            "function" => Some(TargetType::Function),
            "scenario" => Some(TargetType::Scenario),
            _ => None,
        }
    }

    /// Playbook token selecting behaviour on the remote session.
    pub fn playbook(&self) -> &'static str {
        match self {
            TargetType::Module => "!moduleunittest",
            TargetType::Class => "!classunittest",
            TargetType::Function => "!methodunittest",
            TargetType::Scenario => "!java_module_int_test",
        }
    }

    /// Whether unit sessions may use this target type.
    pub fn is_unit_level(&self) -> bool {
        !matches!(self, TargetType::Scenario)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_type_names_roundtrip() {
        for target_type in TargetType::ALL {
            assert_eq!(TargetType::from_name(target_type.dir_name()), Some(target_type));
        }
    }

    #[test]
    fn session_kind_names_roundtrip() {
        for kind in SessionKind::ALL {
            assert_eq!(SessionKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(SessionKind::from_name("adhoc"), Some(SessionKind::Adhoc));
    }

    #[test]
    fn only_scenario_is_not_unit_level() {
        let unit: Vec<_> = TargetType::ALL.into_iter().filter(|t| t.is_unit_level()).collect();
        assert_eq!(unit, vec![TargetType::Module, TargetType::Class, TargetType::Function]);
    }
}
