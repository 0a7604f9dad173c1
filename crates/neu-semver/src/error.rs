use std::fmt;

use thiserror::Error;

/// The numeric field a derivation operation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "Major",
            Field::Minor => "Minor",
            Field::Patch => "Patch",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    // Parsing errors
    #[error("Version string cannot be null")]
    NullInput,

    #[error("Version string cannot be empty")]
    EmptyVersion,

    #[error("Invalid semantic version: {0}")]
    MalformedVersion(String),

    // Comparison errors
    #[error("Versions must not be null")]
    InvalidComparison,

    #[error("Invalid operator \"{0}\"")]
    InvalidOperator(String),

    // Derivation errors
    #[error("{field} version cannot be negative: {value}")]
    NegativeField { field: Field, value: i64 },

    #[error("{field} version cannot be incremented past {value}")]
    FieldOverflow { field: Field, value: u64 },

    // Collection errors
    #[error("Versions list cannot be null or empty")]
    EmptyInput,
}

impl SemverError {
    /// True for both rejection tiers of the parser: empty input and grammar mismatch.
    pub fn is_malformed(&self) -> bool {
        matches!(self, SemverError::EmptyVersion | SemverError::MalformedVersion(_))
    }
}

pub type Result<T> = std::result::Result<T, SemverError>;
