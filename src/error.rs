use std::fmt;

/// Errors that can occur when constructing metadata enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input was missing or had the wrong shape.
    InvalidArgument {
        /// Path of the offending input, e.g. `options.enum.values`.
        argument: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_argument(
        argument: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Re-roots an error raised for a nested input, replacing its leading
    /// path segment with `parent`.
    pub(crate) fn nested(self, parent: &str) -> Self {
        match self {
            Error::InvalidArgument { argument, reason } => {
                let rest = argument
                    .split_once('.')
                    .map_or("", |(_, rest)| rest);
                let argument = if rest.is_empty() {
                    parent.to_string()
                } else {
                    format!("{}.{}", parent, rest)
                };
                Error::InvalidArgument { argument, reason }
            }
        }
    }

    /// Returns the path of the input that caused the error.
    pub fn argument(&self) -> &str {
        match self {
            Error::InvalidArgument { argument, .. } => argument,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { argument, reason } => {
                write!(f, "invalid argument {}: {}", argument, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
