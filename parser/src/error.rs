//! Error types for argument scanning.

use thiserror::Error;

/// Errors surfaced while scanning an argument list.
///
/// Scanning halts at the first error; there is no partial result and no
/// error accumulation. Parsing is a pure function of the definitions and
/// the tokens, so retrying reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token looks like a flag but resolves nowhere in the context chain.
    /// Carries the literal token as scanned (for a combined group, the
    /// single-character spelling that failed).
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    /// A value flag matched with no following token left to consume.
    /// Carries the spelling the caller used.
    #[error("flag {0} requires a value")]
    MissingValue(String),
}
