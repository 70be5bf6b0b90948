//! Context-scoped argument parsing over hierarchical flag definitions.
//!
//! This crate scans a flat token list against a [`warg_core::FlagSet`] and
//! produces a tree of flag occurrences. The distinguishing feature is the
//! context model: a flag definition may carry child definitions, and
//! matching such a flag opens a nested resolution scope for its children.
//!
//! - [`Context`] — one level of name resolution, linked to its parent;
//!   lookups search the current level first, then walk up the chain.
//! - [`Parser`] — drives a single left-to-right scan over the tokens,
//!   expanding combined short groups (`-abc`), consuming values, and
//!   pushing a context level whenever a flag with children matches.
//! - [`ParseResult`] / [`FlagValue`] — the resulting occurrence tree,
//!   mirroring the definition hierarchy, with [`find`](ParseResult::find)
//!   and [`walk`](ParseResult::walk) traversal.
//! - [`bind`] — typed slots that copy parsed strings into caller
//!   variables (bool, string, integer, float, string list, duration).
//!
//! Once a context opens it stays open to the end of the argument list;
//! there is no closing token. `-G -v -c` nests `-c` under `-G` even with
//! the unrelated root flag between them.
//!
//! # Example
//!
//! ```
//! use warg_core::{FlagDef, FlagSet};
//! use warg_parser::parse_args;
//!
//! let set = FlagSet::new(vec![
//!     FlagDef::switch(&["-v", "--verbose"]),
//!     FlagDef::switch(&["-G", "--git"])
//!         .with_child(FlagDef::switch(&["-c", "--commit"]))
//!         .with_child(FlagDef::value(&["-m", "--message"])),
//! ])?;
//!
//! let result = parse_args(&set, &["-G", "-c", "-m", "fix bug"])?;
//!
//! let git = result.find("--git").unwrap();
//! assert_eq!(git.children.len(), 2);
//! assert_eq!(result.find("-m").unwrap().value.as_deref(), Some("fix bug"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Parsing is synchronous and single-threaded; a `FlagSet` backs any
//! number of sequential parses.

pub mod bind;
mod context;
mod error;
mod result;
mod scan;

use warg_core::FlagSet;

pub use context::Context;
pub use error::ParseError;
pub use result::{FlagValue, ParseResult};
pub use scan::Parser;

/// Parses `args` against `set` in one call.
///
/// Convenience wrapper over [`Parser::new`] and [`Parser::parse`] for
/// callers that parse once.
///
/// # Errors
///
/// Returns [`ParseError`] on the first unknown flag or missing value.
///
/// # Examples
///
/// ```
/// use warg_core::{FlagDef, FlagSet};
/// use warg_parser::{ParseError, parse_args};
///
/// let set = FlagSet::new(vec![FlagDef::switch(&["-v", "--verbose"])])?;
///
/// assert!(parse_args(&set, &["-v"]).is_ok());
/// assert_eq!(
///     parse_args(&set, &["-x"]).unwrap_err(),
///     ParseError::UnknownFlag("-x".into()),
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_args<'d, S: AsRef<str>>(
    set: &'d FlagSet,
    args: &[S],
) -> Result<ParseResult<'d>, ParseError> {
    Parser::new(set).parse(args)
}
