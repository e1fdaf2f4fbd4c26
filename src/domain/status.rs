use std::fmt;

/// Workload status reported to the hosting agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitStatus {
    Maintenance(String),
    Active(String),
    Blocked(String),
}

impl UnitStatus {
    pub fn maintenance(message: impl Into<String>) -> Self {
        UnitStatus::Maintenance(message.into())
    }

    pub fn active(message: impl Into<String>) -> Self {
        UnitStatus::Active(message.into())
    }

    pub fn blocked(message: impl Into<String>) -> Self {
        UnitStatus::Blocked(message.into())
    }

    /// Status name as accepted by `status-set`.
    pub fn kind(&self) -> &'static str {
        match self {
            UnitStatus::Maintenance(_) => "maintenance",
            UnitStatus::Active(_) => "active",
            UnitStatus::Blocked(_) => "blocked",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            UnitStatus::Maintenance(message)
            | UnitStatus::Active(message)
            | UnitStatus::Blocked(message) => message,
        }
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}
