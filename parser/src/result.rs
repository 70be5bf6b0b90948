//! Parse-result tree.
//!
//! A scan produces a [`ParseResult`]: ordered top-level [`FlagValue`] nodes
//! mirroring the definition hierarchy. One node exists per flag occurrence,
//! attached under the node whose context owned the resolved name (or at the
//! top level for root flags). The tree serializes to JSON field-for-field
//! for downstream consumers; rendering beyond that is theirs.

use serde::Serialize;

use warg_core::FlagDef;

/// One parsed flag occurrence.
///
/// Nodes only exist for flags that occurred, so `present` is always `true`
/// on a constructed node; it is kept on the wire for consumers that read
/// the serialized tree. `value` carries the consumed token for value flags
/// and is `None` for switches.
#[derive(Debug, Clone, Serialize)]
pub struct FlagValue<'d> {
    /// The matched definition, borrowed from the caller's `FlagSet`.
    #[serde(rename = "definition")]
    pub def: &'d FlagDef,
    /// Always `true`; a node records an occurrence.
    pub present: bool,
    /// Consumed value for value flags, `None` for switches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Flags matched while this flag's context was open, in match order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FlagValue<'d>>,
}

impl<'d> FlagValue<'d> {
    /// Whether the matched definition is a switch.
    pub fn is_switch(&self) -> bool {
        self.def.is_switch()
    }

    /// Depth-first search for the first node whose definition declares
    /// `name` under any spelling. Checks this node, then its subtree.
    pub fn find(&self, name: &str) -> Option<&FlagValue<'d>> {
        if self.def.matches(name) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Pre-order traversal over this node and its whole subtree.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&FlagValue<'d>),
    {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// The ordered top-level nodes produced by one parse.
///
/// # Examples
///
/// ```
/// use warg_core::{FlagDef, FlagSet};
/// use warg_parser::parse_args;
///
/// let set = FlagSet::new(vec![
///     FlagDef::switch(&["-G", "--git"]).with_child(FlagDef::value(&["-m", "--message"])),
/// ])?;
///
/// let result = parse_args(&set, &["-G", "-m", "fix bug"])?;
/// assert_eq!(result.flags.len(), 1);
///
/// // Any declared spelling finds the node, at any depth.
/// let message = result.find("--message").unwrap();
/// assert_eq!(message.value.as_deref(), Some("fix bug"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult<'d> {
    /// Top-level nodes in match order.
    pub flags: Vec<FlagValue<'d>>,
}

impl<'d> ParseResult<'d> {
    /// Depth-first search across all top-level trees; first match wins.
    pub fn find(&self, name: &str) -> Option<&FlagValue<'d>> {
        self.flags.iter().find_map(|flag| flag.find(name))
    }

    /// Pre-order traversal over every node in every tree.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&FlagValue<'d>),
    {
        for flag in &self.flags {
            flag.walk(visit);
        }
    }
}
