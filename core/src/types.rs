//! Flag definition types for hierarchical argument parsing.
//!
//! This module defines the static data model the parser consumes. The types
//! are designed for serialization with [`serde`] and round-trip through JSON,
//! so definition trees can be built in code or loaded as data.

use serde::{Deserialize, Serialize};

/// Definition of a single flag, possibly with nested child flags.
///
/// A flag has one or more accepted spellings (e.g. `-v` and `--verbose`),
/// parses either as a switch (presence only) or as a value flag (the next
/// token is consumed as its value), and may declare children. A definition
/// with children acts as a *context*: once matched during a scan, its
/// children become resolvable, and it always parses as a switch regardless
/// of the declared `switch` field.
///
/// Use the constructor methods [`switch`](FlagDef::switch) and
/// [`value`](FlagDef::value) to create flags, then chain builder methods
/// like [`with_description`](FlagDef::with_description) and
/// [`with_child`](FlagDef::with_child).
///
/// # Examples
///
/// ```
/// use warg_core::FlagDef;
///
/// // Presence-only switch
/// let verbose = FlagDef::switch(&["-v", "--verbose"])
///     .with_description("Enable verbose output");
/// assert!(verbose.is_switch());
/// assert_eq!(verbose.canonical_name(), "-v");
///
/// // Flag that consumes the next token as its value
/// let message = FlagDef::value(&["-m", "--message"]);
/// assert!(!message.is_switch());
///
/// // Context flag with nested children
/// let git = FlagDef::switch(&["-G", "--git"])
///     .with_child(FlagDef::switch(&["-c", "--commit"]))
///     .with_child(message);
/// assert_eq!(git.children.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagDef {
    /// Accepted spellings, in declaration order (e.g. `["-v", "--verbose"]`).
    /// At least one is required.
    pub names: Vec<String>,
    /// `true` for presence-only switches, `false` for flags that consume the
    /// following token as their value.
    #[serde(default)]
    pub switch: bool,
    /// Documentation string; opaque to the parser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Nested definitions resolvable once this flag has been matched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FlagDef>,
}

impl FlagDef {
    /// Creates a switch flag (no value consumed, presence is the signal).
    ///
    /// # Examples
    ///
    /// ```
    /// use warg_core::FlagDef;
    ///
    /// let flag = FlagDef::switch(&["-v", "--verbose"]);
    /// assert!(flag.is_switch());
    /// assert!(flag.matches("-v"));
    /// assert!(flag.matches("--verbose"));
    /// ```
    pub fn switch(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            switch: true,
            description: None,
            children: Vec::new(),
        }
    }

    /// Creates a value flag (the token following it is consumed as its value).
    ///
    /// # Examples
    ///
    /// ```
    /// use warg_core::FlagDef;
    ///
    /// let flag = FlagDef::value(&["-m", "--message"]);
    /// assert!(!flag.is_switch());
    /// ```
    pub fn value(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            switch: false,
            description: None,
            children: Vec::new(),
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds a nested child definition.
    ///
    /// Context flags always parse as switches, so this also sets `switch`.
    ///
    /// # Examples
    ///
    /// ```
    /// use warg_core::FlagDef;
    ///
    /// let git = FlagDef::value(&["-G", "--git"])
    ///     .with_child(FlagDef::switch(&["-c", "--commit"]));
    /// assert!(git.is_switch());
    /// ```
    pub fn with_child(mut self, child: FlagDef) -> Self {
        self.children.push(child);
        self.switch = true;
        self
    }

    /// Whether this flag parses as a switch.
    ///
    /// Definitions with children always do, whatever their declared `switch`
    /// field says.
    pub fn is_switch(&self) -> bool {
        self.switch || !self.children.is_empty()
    }

    /// Checks if any of this flag's spellings equals `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use warg_core::FlagDef;
    ///
    /// let flag = FlagDef::switch(&["-v", "--verbose"]);
    /// assert!(flag.matches("--verbose"));
    /// assert!(!flag.matches("-x"));
    /// ```
    pub fn matches(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns the first declared spelling, the canonical name consumers key
    /// on when flattening results.
    pub fn canonical_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_constructor() {
        let flag = FlagDef::switch(&["-v", "--verbose"]).with_description("Verbose output");

        assert_eq!(flag.names, vec!["-v", "--verbose"]);
        assert!(flag.switch);
        assert!(flag.is_switch());
        assert_eq!(flag.description.as_deref(), Some("Verbose output"));
        assert!(flag.children.is_empty());
    }

    #[test]
    fn test_value_constructor() {
        let flag = FlagDef::value(&["-n", "--name"]);

        assert!(!flag.switch);
        assert!(!flag.is_switch());
        assert_eq!(flag.canonical_name(), "-n");
    }

    #[test]
    fn test_children_imply_switch() {
        let git = FlagDef::value(&["-G"]).with_child(FlagDef::switch(&["-c"]));

        assert!(git.switch);
        assert!(git.is_switch());

        // A hand-built definition is reported as a switch even when the
        // declared field disagrees.
        let raw = FlagDef {
            names: vec!["-G".to_string()],
            switch: false,
            description: None,
            children: vec![FlagDef::switch(&["-c"])],
        };
        assert!(raw.is_switch());
    }

    #[test]
    fn test_matches_any_spelling() {
        let flag = FlagDef::switch(&["-v", "--verbose"]);

        assert!(flag.matches("-v"));
        assert!(flag.matches("--verbose"));
        assert!(!flag.matches("-x"));
        assert!(!flag.matches("verbose"));
    }

    #[test]
    fn test_json_round_trip() {
        let def = FlagDef::value(&["-n", "--name"])
            .with_description("User name")
            .with_child(FlagDef::switch(&["-c", "--child"]).with_description("Child flag"));

        let json = serde_json::to_string(&def).expect("serialize");
        let back: FlagDef = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(def, back);
    }

    #[test]
    fn test_json_omits_empty_fields() {
        let flag = FlagDef::switch(&["-v"]);

        let json = serde_json::to_string(&flag).expect("serialize");
        assert!(!json.contains("description"));
        assert!(!json.contains("children"));
    }
}
