//! Name resolution contexts.
//!
//! A [`Context`] is one level of flag-name resolution: a table covering
//! exactly the definitions at one nesting level, linked to the enclosing
//! level. The root context covers a set's top-level definitions; matching a
//! flag that has children opens a child context over those children.
//!
//! Lookups search the own table first and then walk the parent chain, so an
//! inner context shadows outer definitions that reuse a name. The chain is
//! a plain upward walk with no caching; flag vocabularies are tens of names
//! and single-digit depths.

use std::collections::HashMap;
use std::rc::Rc;

use warg_core::{DefinitionError, FlagDef};

/// One level of flag-name resolution, linked to its parent.
///
/// Contexts are shared between the parser's scan stack and child contexts'
/// parent links via [`Rc`]; parsing is single-threaded, so no further
/// synchronization applies.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use warg_core::FlagDef;
/// use warg_parser::Context;
///
/// let root_defs = vec![FlagDef::switch(&["-v", "--verbose"])];
/// let child_defs = vec![FlagDef::switch(&["-c", "--commit"])];
///
/// let root = Rc::new(Context::new(&root_defs, None)?);
/// let child = Context::new(&child_defs, Some(Rc::clone(&root)))?;
///
/// // Own table first, then the parent chain.
/// assert!(child.lookup("-c").is_some());
/// assert!(child.lookup("--verbose").is_some());
/// assert!(child.lookup("-x").is_none());
/// # Ok::<(), warg_core::DefinitionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Context<'d> {
    flags: HashMap<&'d str, &'d FlagDef>,
    parent: Option<Rc<Context<'d>>>,
}

impl<'d> Context<'d> {
    /// Builds a resolution table over `defs`, one entry per declared name.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::DuplicateName`] when two definitions at
    /// this level declare the same name. Colliding names are rejected here
    /// rather than letting a later registration win silently.
    pub fn new(
        defs: &'d [FlagDef],
        parent: Option<Rc<Context<'d>>>,
    ) -> Result<Self, DefinitionError> {
        let mut flags = HashMap::new();
        for def in defs {
            for name in &def.names {
                if flags.insert(name.as_str(), def).is_some() {
                    return Err(DefinitionError::DuplicateName(name.clone()));
                }
            }
        }
        Ok(Self { flags, parent })
    }

    /// Builds a context over definitions already validated by a `FlagSet`.
    /// Skips the duplicate check that validation has performed.
    pub(crate) fn from_validated(defs: &'d [FlagDef], parent: Option<Rc<Context<'d>>>) -> Self {
        let mut flags = HashMap::new();
        for def in defs {
            for name in &def.names {
                flags.insert(name.as_str(), def);
            }
        }
        Self { flags, parent }
    }

    /// Resolves `name` against this level, then the parent chain.
    ///
    /// Returns `None` once the whole chain is exhausted.
    pub fn lookup(&self, name: &str) -> Option<&'d FlagDef> {
        if let Some(&def) = self.flags.get(name) {
            return Some(def);
        }
        self.parent.as_ref().and_then(|parent| parent.lookup(name))
    }

    /// Whether this level's own table declares `name`. Never consults the
    /// parent chain; used to locate the owning level of a resolved flag.
    pub fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// The enclosing context, `None` at the root.
    pub fn parent(&self) -> Option<&Rc<Context<'d>>> {
        self.parent.as_ref()
    }
}
