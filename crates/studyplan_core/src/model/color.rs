//! Color references for topics and tasks.
//!
//! # Responsibility
//! - Classify raw color strings as semantic palette tokens or literal CSS colors.
//! - Render a CSS value usable by the presentation layer.
//!
//! # Invariants
//! - A `ColorRef` is never blank.
//! - Literal values are kept verbatim (trimmed); tokens are kebab-case.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("valid hex color regex")
});
static FUNCTIONAL_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:rgb|rgba|hsl|hsla)\([^()]*\)$").expect("valid functional color regex")
});
static COLOR_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)*$").expect("valid token regex"));

/// Built-in palette tokens offered when creating topics.
pub const STUDY_PALETTE: &[&str] = &[
    "study-purple",
    "study-blue",
    "study-green",
    "study-orange",
    "study-pink",
    "study-red",
    "study-teal",
    "study-yellow",
    "study-indigo",
];

/// Color reference: either a semantic token or an explicit CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorRef {
    /// Theme token such as `study-purple`.
    Token(String),
    /// Explicit value such as `#ff8800` or `rgb(1, 2, 3)`.
    Literal(String),
}

impl ColorRef {
    /// Classifies one raw color string.
    ///
    /// # Errors
    /// - `ColorError::Blank` when the input is empty after trim.
    /// - `ColorError::Malformed` when the input is neither a hex/functional
    ///   literal nor a kebab-case token.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Blank);
        }
        if trimmed.starts_with('#') {
            if HEX_COLOR_RE.is_match(trimmed) {
                return Ok(Self::Literal(trimmed.to_string()));
            }
            return Err(ColorError::Malformed(trimmed.to_string()));
        }
        if FUNCTIONAL_COLOR_RE.is_match(trimmed) {
            return Ok(Self::Literal(trimmed.to_string()));
        }
        if COLOR_TOKEN_RE.is_match(trimmed) {
            return Ok(Self::Token(trimmed.to_string()));
        }
        Err(ColorError::Malformed(trimmed.to_string()))
    }

    /// Palette token constructor for built-in colors.
    pub fn token(name: &str) -> Result<Self, ColorError> {
        match Self::parse(name)? {
            token @ Self::Token(_) => Ok(token),
            Self::Literal(value) => Err(ColorError::Malformed(value)),
        }
    }

    /// Raw stored value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Token(value) | Self::Literal(value) => value.as_str(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// CSS value for rendering; tokens resolve through theme variables.
    pub fn css_value(&self) -> String {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Token(token) => format!("hsl(var(--{token}))"),
        }
    }
}

impl TryFrom<String> for ColorRef {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<ColorRef> for String {
    fn from(value: ColorRef) -> Self {
        match value {
            ColorRef::Token(value) | ColorRef::Literal(value) => value,
        }
    }
}

impl Display for ColorRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    Blank,
    Malformed(String),
}

impl Display for ColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "color must not be blank"),
            Self::Malformed(value) => write!(f, "malformed color reference: `{value}`"),
        }
    }
}

impl Error for ColorError {}
