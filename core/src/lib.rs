//! Flag definition model for the warg argument parser.
//!
//! This crate defines the foundational types for describing a hierarchical
//! flag vocabulary:
//!
//! - [`FlagDef`] — one flag with its spellings, switch/value mode, and
//!   nested child definitions.
//! - [`FlagSet`] — a validated, read-only collection of root-level
//!   definitions, built once and reused across parses.
//!
//! Validation ([`validate_defs`]) catches structural errors such as
//! definitions without names and duplicate names within one nesting level.
//! A child may reuse a name taken at an outer level; during a parse the
//! innermost open context wins.
//!
//! The scanning machinery lives in the companion `warg-parser` crate. This
//! split keeps the data model free of parse-time state, so tools that only
//! describe or serialize flag vocabularies depend on a small surface.
//!
//! # Example
//!
//! ```
//! use warg_core::*;
//!
//! // Describe a git-like vocabulary: --git opens a context with its own flags.
//! let set = FlagSet::new(vec![
//!     FlagDef::switch(&["-v", "--verbose"]).with_description("Enable verbose output"),
//!     FlagDef::switch(&["-G", "--git"])
//!         .with_child(FlagDef::switch(&["-c", "--commit"]))
//!         .with_child(FlagDef::value(&["-m", "--message"])),
//! ])?;
//!
//! assert!(set.find("--git").is_some());
//! assert!(set.find("--git").unwrap().is_switch());
//! assert!(set.find("--message").is_none()); // child, not root-level
//! # Ok::<(), warg_core::DefinitionError>(())
//! ```

mod set;
mod types;
mod validate;

pub use set::FlagSet;
pub use types::FlagDef;
pub use validate::{DefinitionError, validate_defs};
