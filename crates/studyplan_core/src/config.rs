//! Planner configuration.
//!
//! # Responsibility
//! - Hold session-level settings: study goals, default topic priority, log level.
//! - Parse JSON configuration and reject invalid values before use.
//!
//! # Invariants
//! - A validated config has finite goals with `0 < daily <= 24` and
//!   `weekly >= daily`.
//! - `log_level`, when present, is one of `trace|debug|info|warn|error`.

use crate::logging::{normalize_level, LoggingError};
use crate::model::priority::Priority;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_DAILY_GOAL_HOURS: f64 = 5.0;
const DEFAULT_WEEKLY_GOAL_HOURS: f64 = 25.0;
const MAX_DAILY_GOAL_HOURS: f64 = 24.0;

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Goal value is not a positive finite number.
    InvalidGoal { field: &'static str, value: f64 },
    /// Daily goal exceeds the hours of one day.
    DailyGoalTooLarge(f64),
    /// Weekly goal is below the daily goal.
    WeeklyBelowDaily { daily: f64, weekly: f64 },
    /// Unsupported log level string.
    InvalidLogLevel(LoggingError),
    /// JSON input could not be decoded.
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGoal { field, value } => {
                write!(f, "`{field}` must be a positive number, got {value}")
            }
            Self::DailyGoalTooLarge(value) => {
                write!(f, "daily goal {value}h exceeds {MAX_DAILY_GOAL_HOURS}h")
            }
            Self::WeeklyBelowDaily { daily, weekly } => {
                write!(f, "weekly goal {weekly}h is below daily goal {daily}h")
            }
            Self::InvalidLogLevel(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLogLevel(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Study goals in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyGoals {
    pub daily_hours: f64,
    pub weekly_hours: f64,
}

impl StudyGoals {
    /// Validates and builds goals.
    pub fn new(daily_hours: f64, weekly_hours: f64) -> Result<Self, ConfigError> {
        let goals = Self {
            daily_hours,
            weekly_hours,
        };
        goals.validate()?;
        Ok(goals)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("daily_goal_hours", self.daily_hours)?;
        ensure_positive("weekly_goal_hours", self.weekly_hours)?;
        if self.daily_hours > MAX_DAILY_GOAL_HOURS {
            return Err(ConfigError::DailyGoalTooLarge(self.daily_hours));
        }
        if self.weekly_hours < self.daily_hours {
            return Err(ConfigError::WeeklyBelowDaily {
                daily: self.daily_hours,
                weekly: self.weekly_hours,
            });
        }
        Ok(())
    }
}

impl Default for StudyGoals {
    fn default() -> Self {
        Self {
            daily_hours: DEFAULT_DAILY_GOAL_HOURS,
            weekly_hours: DEFAULT_WEEKLY_GOAL_HOURS,
        }
    }
}

/// Session configuration for the planner service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub daily_goal_hours: f64,
    pub weekly_goal_hours: f64,
    /// Priority given to topics created without an explicit one.
    pub default_topic_priority: Priority,
    pub log_level: Option<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let goals = StudyGoals::default();
        Self {
            daily_goal_hours: goals.daily_hours,
            weekly_goal_hours: goals.weekly_hours,
            default_topic_priority: Priority::None,
            log_level: None,
        }
    }
}

impl PlannerConfig {
    /// Parses JSON and validates the result. Missing fields take defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.goals().validate()?;
        if let Some(level) = self.log_level.as_deref() {
            normalize_level(level).map_err(ConfigError::InvalidLogLevel)?;
        }
        Ok(())
    }

    pub fn goals(&self) -> StudyGoals {
        StudyGoals {
            daily_hours: self.daily_goal_hours,
            weekly_hours: self.weekly_goal_hours,
        }
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidGoal { field, value })
    }
}
