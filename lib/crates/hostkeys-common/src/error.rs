use thiserror::Error;

/// Errors returned while extracting host keys from console output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input holds no delimited host key block at all.
    #[error("No BEGIN SSH HOST KEY KEYS block found in CloudInit output")]
    NoHostKeyBlock,

    /// A line inside a block is not `<algorithm> <material> [comment]`.
    /// Carries the offending line with surrounding whitespace trimmed.
    #[error("invalid host key format: {0}")]
    InvalidFormat(String),
}

impl ParseError {
    /// Stable machine-readable code, used for JSON error objects.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoHostKeyBlock => "NO_HOST_KEY_BLOCK",
            Self::InvalidFormat(_) => "INVALID_HOST_KEY_FORMAT",
        }
    }
}
