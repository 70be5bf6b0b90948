use serde::Serialize;

use crate::{DefinitionError, FlagDef, validate_defs};

/// An owned, validated set of root-level flag definitions.
///
/// `FlagSet` is the definition-build stage: construction normalizes the tree
/// (a definition with children always becomes a switch) and validates it
/// (names present, no duplicates within a level). After that the set is
/// read-only and can back any number of sequential parses. It is an explicit
/// value passed to the parser, never process-wide state, so independent sets
/// can coexist in one process and in tests.
///
/// # Examples
///
/// ```
/// use warg_core::{FlagDef, FlagSet};
///
/// let set = FlagSet::new(vec![
///     FlagDef::switch(&["-v", "--verbose"]),
///     FlagDef::switch(&["-G", "--git"])
///         .with_child(FlagDef::value(&["-m", "--message"])),
/// ])?;
///
/// assert_eq!(set.len(), 2);
/// assert!(set.find("--git").is_some());
/// # Ok::<(), warg_core::DefinitionError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct FlagSet {
    defs: Vec<FlagDef>,
}

impl FlagSet {
    /// Normalizes and validates `defs` into a usable set.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] when a definition declares no names or two
    /// definitions at the same level share a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use warg_core::{DefinitionError, FlagDef, FlagSet};
    ///
    /// let clash = FlagSet::new(vec![
    ///     FlagDef::switch(&["-v"]),
    ///     FlagDef::value(&["-v"]),
    /// ]);
    /// assert_eq!(clash.unwrap_err(), DefinitionError::DuplicateName("-v".into()));
    /// ```
    pub fn new(mut defs: Vec<FlagDef>) -> Result<Self, DefinitionError> {
        normalize(&mut defs);
        validate_defs(&defs)?;
        Ok(Self { defs })
    }

    /// The root-level definitions, in declaration order.
    pub fn defs(&self) -> &[FlagDef] {
        &self.defs
    }

    /// Number of root-level definitions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the set has no definitions at all.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Finds a root-level definition by any of its spellings.
    ///
    /// Only the root level is searched; nested children belong to the
    /// contexts that open during a scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use warg_core::{FlagDef, FlagSet};
    ///
    /// let set = FlagSet::new(vec![FlagDef::switch(&["-v", "--verbose"])])?;
    /// assert!(set.find("--verbose").is_some());
    /// assert!(set.find("-x").is_none());
    /// # Ok::<(), warg_core::DefinitionError>(())
    /// ```
    pub fn find(&self, name: &str) -> Option<&FlagDef> {
        self.defs.iter().find(|def| def.matches(name))
    }
}

/// Context flags (with children) are always switches.
fn normalize(defs: &mut [FlagDef]) {
    for def in defs {
        if !def.children.is_empty() {
            def.switch = true;
            normalize(&mut def.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_context_flags() {
        let raw = FlagDef {
            names: vec!["-G".to_string()],
            switch: false,
            description: None,
            children: vec![FlagDef {
                names: vec!["-s".to_string()],
                switch: false,
                description: None,
                children: vec![FlagDef::value(&["-m"])],
            }],
        };

        let set = FlagSet::new(vec![raw]).expect("valid set");
        let git = &set.defs()[0];
        assert!(git.switch);
        // Nested context levels are normalized too.
        assert!(git.children[0].switch);
        // Leaf value flags are left alone.
        assert!(!git.children[0].children[0].switch);
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let result = FlagSet::new(vec![
            FlagDef::switch(&["-v", "--verbose"]),
            FlagDef::switch(&["--verbose"]),
        ]);

        assert_eq!(
            result.unwrap_err(),
            DefinitionError::DuplicateName("--verbose".to_string()),
        );
    }

    #[test]
    fn test_find_searches_root_level_only() {
        let set = FlagSet::new(vec![
            FlagDef::switch(&["-v"]),
            FlagDef::switch(&["-G", "--git"]).with_child(FlagDef::switch(&["-c"])),
        ])
        .expect("valid set");

        assert!(set.find("-G").is_some());
        assert!(set.find("--git").is_some());
        assert!(set.find("-c").is_none());
    }

    #[test]
    fn test_empty_set_is_valid() {
        let set = FlagSet::new(Vec::new()).expect("empty set is fine");
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
