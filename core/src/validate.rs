//! Definition validation.
//!
//! Validates structural invariants of a definition tree before any parsing
//! happens: every definition declares at least one name, and no two
//! definitions at the same nesting level share a name. Collisions are
//! rejected here rather than resolved by overwrite, so a shadowed definition
//! can never silently win a lookup.
//!
//! # Examples
//!
//! ```
//! use warg_core::{FlagDef, validate_defs};
//!
//! let defs = vec![
//!     FlagDef::switch(&["-v", "--verbose"]),
//!     FlagDef::value(&["-n", "--name"]),
//! ];
//! assert!(validate_defs(&defs).is_ok());
//!
//! // Same name declared by two definitions at one level
//! let clash = vec![
//!     FlagDef::switch(&["-v"]),
//!     FlagDef::value(&["-v", "--value"]),
//! ];
//! assert!(validate_defs(&clash).is_err());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::FlagDef;

/// Definition-tree validation errors.
///
/// These are caller bugs surfaced at construction time, never during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// A definition declares no names at all.
    #[error("flag definition declares no names")]
    NoNames,
    /// Two definitions at the same nesting level declare the same name.
    #[error("duplicate flag name within the same context: {0}")]
    DuplicateName(String),
}

/// Validates a definition tree, returning the first problem found.
///
/// Each nesting level is checked independently: a child may reuse a name
/// declared at the root (the child shadows it while its context is open),
/// but two siblings may not collide.
///
/// # Examples
///
/// ```
/// use warg_core::{DefinitionError, FlagDef, validate_defs};
///
/// // Shadowing a parent name from a child level is fine.
/// let defs = vec![
///     FlagDef::switch(&["-c"]),
///     FlagDef::switch(&["-G"]).with_child(FlagDef::switch(&["-c"])),
/// ];
/// assert!(validate_defs(&defs).is_ok());
///
/// let dup = vec![FlagDef::switch(&["-a", "-a"])];
/// assert_eq!(
///     validate_defs(&dup),
///     Err(DefinitionError::DuplicateName("-a".to_string())),
/// );
/// ```
pub fn validate_defs(defs: &[FlagDef]) -> Result<(), DefinitionError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for def in defs {
        if def.names.is_empty() {
            return Err(DefinitionError::NoNames);
        }
        for name in &def.names {
            if !seen.insert(name.as_str()) {
                return Err(DefinitionError::DuplicateName(name.clone()));
            }
        }
        validate_defs(&def.children)?;
    }

    Ok(())
}
