//! Priority levels shared by topics and tasks.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Urgency marker for a topic or a task.
///
/// Ordered from least to most urgent, so `Priority::High > Priority::Low`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// No priority assigned.
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl Priority {
    /// All levels in ascending urgency.
    pub const ALL: [Priority; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    /// Stable string id used in serialized payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Short badge marker rendered next to a topic or task.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Low => "!",
            Self::Medium => "!!",
            Self::High => "!!!",
        }
    }

    /// User-facing title.
    pub fn title(self) -> &'static str {
        match self {
            Self::None => "No Priority",
            Self::Low => "Low Priority",
            Self::Medium => "Medium Priority",
            Self::High => "High Priority",
        }
    }

    /// Parses one priority from its stable string id (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, PriorityParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(PriorityParseError(other.to_string())),
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown priority string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityParseError(pub String);

impl Display for PriorityParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported priority `{}`; expected none|low|medium|high",
            self.0
        )
    }
}

impl Error for PriorityParseError {}
