//! Error types for parsing notation and generating treasure.

/// Errors returned by the parser, the roller and the treasure generator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The text is not valid dice notation.
    #[error("invalid dice notation `{notation}`: {reason}")]
    InvalidNotation { notation: String, reason: String },

    /// The challenge rating could not be parsed or lies outside `0..=30`.
    #[error("invalid challenge rating `{0}`, expected a number between 0 and 30 (1/8, 1/4 and 1/2 are allowed)")]
    InvalidChallengeRating(String),

    /// A percentile roll fell outside every range of a table.
    /// This is a defect in the table data, never a user error.
    #[error("table `{table}` has no range containing the roll {roll}")]
    NoMatchingRange { table: &'static str, roll: u8 },
}

impl Error {
    pub(crate) fn invalid_notation(notation: &str, reason: impl ToString) -> Self {
        Error::InvalidNotation {
            notation: notation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True when the message is meant for whoever typed the command,
    /// false when it points at broken table data.
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::InvalidNotation { .. } | Error::InvalidChallengeRating(_) => true,
            Error::NoMatchingRange { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
