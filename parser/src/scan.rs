//! Single-pass argument scanning.
//!
//! The scanner walks tokens left to right against a stack of resolution
//! levels. Matching a flag with children pushes a new level over those
//! children; nothing ever pops the stack, so an opened context stays
//! resolvable for the remainder of the argument list. A `--` token stops
//! the scan, tokens without a leading dash are skipped, and a token like
//! `-abc` expands to `-a -b -c` with each letter resolved against the top
//! of the stack as it stands at that point.

use std::rc::Rc;

use tracing::debug;

use warg_core::{FlagDef, FlagSet};

use crate::context::Context;
use crate::error::ParseError;
use crate::result::{FlagValue, ParseResult};

/// Scans argument lists against a validated [`FlagSet`].
///
/// A parser borrows the set and runs any number of independent scans; each
/// [`parse`](Parser::parse) call starts from fresh state, so results never
/// leak between calls.
///
/// # Examples
///
/// ```
/// use warg_core::{FlagDef, FlagSet};
/// use warg_parser::Parser;
///
/// let set = FlagSet::new(vec![
///     FlagDef::switch(&["-v", "--verbose"]),
///     FlagDef::value(&["-n", "--name"]),
/// ])?;
///
/// let parser = Parser::new(&set);
/// let result = parser.parse(&["-v", "--name", "Alice"])?;
///
/// assert!(result.find("--verbose").is_some());
/// assert_eq!(result.find("-n").unwrap().value.as_deref(), Some("Alice"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Parser<'d> {
    root: Rc<Context<'d>>,
}

impl<'d> Parser<'d> {
    /// Creates a parser over `set`. Infallible: the set validated its
    /// definitions at construction.
    pub fn new(set: &'d FlagSet) -> Self {
        Self {
            root: Rc::new(Context::from_validated(set.defs(), None)),
        }
    }

    /// Scans `args` into a tree of flag occurrences.
    ///
    /// Value flags consume the next whitespace-separated token verbatim,
    /// even when it looks like a flag. In a combined group such as `-am`,
    /// only a trailing value flag can take a value; letters after a value
    /// flag in the same group are not processed.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownFlag`] when a token resolves nowhere in
    /// the open context chain, and [`ParseError::MissingValue`] when a value
    /// flag arrives with no token left to consume. The first error halts
    /// the scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use warg_core::{FlagDef, FlagSet};
    /// use warg_parser::Parser;
    ///
    /// let set = FlagSet::new(vec![
    ///     FlagDef::switch(&["-a"]),
    ///     FlagDef::switch(&["-b"]),
    ///     FlagDef::switch(&["-c"]),
    /// ])?;
    ///
    /// let result = Parser::new(&set).parse(&["-abc"])?;
    /// assert_eq!(result.flags.len(), 3);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ParseResult<'d>, ParseError> {
        let mut scan = Scan::new(Rc::clone(&self.root));

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_ref();

            if arg == "--" {
                debug!(remaining = args.len() - i - 1, "Separator reached, scan stopped");
                break;
            }

            if !arg.starts_with('-') {
                i += 1;
                continue;
            }

            // Combined short group: split per character, resolving each
            // against the top of the stack as earlier letters may have
            // moved it.
            if !arg.starts_with("--") && arg.len() > 2 {
                for ch in arg.chars().skip(1) {
                    let short = format!("-{ch}");
                    let consumed = scan.process_flag(&short, args, i + 1)?;
                    if consumed > 0 {
                        // A value flag ends the group; later letters are
                        // not processed.
                        i += consumed;
                        break;
                    }
                }
                i += 1;
                continue;
            }

            let consumed = scan.process_flag(arg, args, i + 1)?;
            i += 1 + consumed;
        }

        Ok(scan.into_result())
    }
}

/// Scan state: the level stack plus node storage.
///
/// The stack starts at the root level and nothing pops it. Nodes link by
/// index because parents keep acquiring children arbitrarily late; the
/// owned tree is assembled once the scan completes.
struct Scan<'d> {
    levels: Vec<Level<'d>>,
    nodes: Vec<Node<'d>>,
    roots: Vec<usize>,
}

/// One open resolution level and the node whose match opened it.
struct Level<'d> {
    context: Rc<Context<'d>>,
    opener: Option<usize>,
}

struct Node<'d> {
    def: &'d FlagDef,
    value: Option<String>,
    children: Vec<usize>,
}

impl<'d> Scan<'d> {
    fn new(root: Rc<Context<'d>>) -> Self {
        Self {
            levels: vec![Level {
                context: root,
                opener: None,
            }],
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Resolves one flag spelling, consumes its value when it takes one,
    /// and attaches the occurrence under its owning level. Returns how many
    /// following tokens were consumed (0 or 1).
    fn process_flag<S: AsRef<str>>(
        &mut self,
        name: &str,
        args: &[S],
        next: usize,
    ) -> Result<usize, ParseError> {
        let top = Rc::clone(&self.levels[self.levels.len() - 1].context);
        let def = top
            .lookup(name)
            .ok_or_else(|| ParseError::UnknownFlag(name.to_string()))?;

        // The owning level is the topmost one whose own table declares the
        // name; its opener is this occurrence's structural parent.
        let parent = self
            .levels
            .iter()
            .rev()
            .find(|level| level.context.contains(name))
            .and_then(|level| level.opener);

        let (value, consumed) = if def.is_switch() {
            (None, 0)
        } else {
            match args.get(next) {
                Some(token) => (Some(token.as_ref().to_string()), 1),
                None => return Err(ParseError::MissingValue(name.to_string())),
            }
        };

        let idx = self.nodes.len();
        self.nodes.push(Node {
            def,
            value,
            children: Vec::new(),
        });
        match parent {
            Some(owner) => self.nodes[owner].children.push(idx),
            None => self.roots.push(idx),
        }

        if !def.children.is_empty() {
            self.levels.push(Level {
                context: Rc::new(Context::from_validated(&def.children, Some(top))),
                opener: Some(idx),
            });
            debug!(flag = name, depth = self.levels.len(), "Context opened");
        }

        Ok(consumed)
    }

    fn into_result(mut self) -> ParseResult<'d> {
        let roots = std::mem::take(&mut self.roots);
        let flags = roots
            .into_iter()
            .map(|idx| materialize(&mut self.nodes, idx))
            .collect();
        ParseResult { flags }
    }
}

/// Moves one arena subtree out into an owned [`FlagValue`] tree.
fn materialize<'d>(nodes: &mut [Node<'d>], idx: usize) -> FlagValue<'d> {
    let child_indices = std::mem::take(&mut nodes[idx].children);
    let children = child_indices
        .into_iter()
        .map(|child| materialize(nodes, child))
        .collect();
    FlagValue {
        def: nodes[idx].def,
        present: true,
        value: nodes[idx].value.take(),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_set() -> FlagSet {
        FlagSet::new(vec![
            FlagDef::switch(&["-v", "--verbose"]),
            FlagDef::switch(&["-G", "--git"])
                .with_child(FlagDef::switch(&["-c", "--commit"]))
                .with_child(FlagDef::value(&["-m", "--message"])),
        ])
        .expect("valid definitions")
    }

    #[test]
    fn test_switch_flag_alone() {
        let set = FlagSet::new(vec![FlagDef::switch(&["-v", "--verbose"])]).unwrap();

        let result = Parser::new(&set).parse(&["-v"]).unwrap();

        assert_eq!(result.flags.len(), 1);
        let flag = &result.flags[0];
        assert!(flag.present);
        assert!(flag.value.is_none());
        assert_eq!(flag.def.canonical_name(), "-v");
    }

    #[test]
    fn test_value_flag_consumes_next_token() {
        let set = FlagSet::new(vec![FlagDef::value(&["-n", "--name"])]).unwrap();

        let result = Parser::new(&set).parse(&["-n", "Alice"]).unwrap();

        assert_eq!(result.flags.len(), 1);
        assert_eq!(result.flags[0].value.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_long_spelling_resolves() {
        let set = FlagSet::new(vec![FlagDef::value(&["-n", "--name"])]).unwrap();

        let result = Parser::new(&set).parse(&["--name", "Bob"]).unwrap();

        assert_eq!(result.flags[0].value.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_combined_short_flags_expand_in_order() {
        let set = FlagSet::new(vec![
            FlagDef::switch(&["-a"]),
            FlagDef::switch(&["-b"]),
            FlagDef::switch(&["-c"]),
        ])
        .unwrap();

        let result = Parser::new(&set).parse(&["-abc"]).unwrap();

        let names: Vec<&str> = result
            .flags
            .iter()
            .map(|flag| flag.def.canonical_name())
            .collect();
        assert_eq!(names, ["-a", "-b", "-c"]);
        assert!(result.flags.iter().all(|flag| flag.present));
    }

    #[test]
    fn test_context_flag_nests_children() {
        let set = git_set();

        let result = Parser::new(&set)
            .parse(&["-G", "-c", "-m", "fix bug"])
            .unwrap();

        assert_eq!(result.flags.len(), 1);
        let git = &result.flags[0];
        assert_eq!(git.def.canonical_name(), "-G");
        assert_eq!(git.children.len(), 2);
        assert_eq!(git.children[0].def.canonical_name(), "-c");
        assert!(git.children[0].present);
        assert_eq!(git.children[1].value.as_deref(), Some("fix bug"));
    }

    #[test]
    fn test_combined_group_opens_context() {
        let set = git_set();

        // -G opens the git context; -c resolves inside it.
        let result = Parser::new(&set).parse(&["-Gc"]).unwrap();

        assert_eq!(result.flags.len(), 1);
        let git = &result.flags[0];
        assert_eq!(git.children.len(), 1);
        assert_eq!(git.children[0].def.canonical_name(), "-c");
    }

    #[test]
    fn test_context_stays_open_across_root_flags() {
        let set = git_set();

        let result = Parser::new(&set).parse(&["-G", "-v", "-c"]).unwrap();

        assert_eq!(result.flags.len(), 2);
        let git = result.find("-G").unwrap();
        assert_eq!(git.children.len(), 1);
        assert_eq!(git.children[0].def.canonical_name(), "-c");
        let verbose = result.find("-v").unwrap();
        assert!(verbose.children.is_empty());
    }

    #[test]
    fn test_unknown_flag_errors() {
        let set = git_set();

        let err = Parser::new(&set).parse(&["-x"]).unwrap_err();

        assert_eq!(err, ParseError::UnknownFlag("-x".to_string()));
    }

    #[test]
    fn test_unknown_letter_in_group_names_the_letter() {
        let set = FlagSet::new(vec![FlagDef::switch(&["-a"])]).unwrap();

        let err = Parser::new(&set).parse(&["-ax"]).unwrap_err();

        assert_eq!(err, ParseError::UnknownFlag("-x".to_string()));
    }

    #[test]
    fn test_missing_value_errors() {
        let set = FlagSet::new(vec![FlagDef::value(&["-n", "--name"])]).unwrap();

        let err = Parser::new(&set).parse(&["-n"]).unwrap_err();

        assert_eq!(err, ParseError::MissingValue("-n".to_string()));
    }

    #[test]
    fn test_multiple_root_flags_keep_order() {
        let set = FlagSet::new(vec![
            FlagDef::switch(&["-v", "--verbose"]),
            FlagDef::value(&["-n", "--name"]),
            FlagDef::switch(&["-d", "--debug"]),
        ])
        .unwrap();

        let result = Parser::new(&set).parse(&["-v", "-n", "Alice", "-d"]).unwrap();

        assert_eq!(result.flags.len(), 3);
        assert_eq!(result.flags[0].def.canonical_name(), "-v");
        assert_eq!(result.flags[1].value.as_deref(), Some("Alice"));
        assert_eq!(result.flags[2].def.canonical_name(), "-d");
    }

    #[test]
    fn test_double_dash_stops_scan() {
        let set = git_set();

        // -n is undeclared but sits past the separator, so it never errors.
        let result = Parser::new(&set).parse(&["-v", "--", "-n"]).unwrap();

        assert_eq!(result.flags.len(), 1);
        assert_eq!(result.flags[0].def.canonical_name(), "-v");
    }

    #[test]
    fn test_non_flag_tokens_skipped() {
        let set = git_set();

        let result = Parser::new(&set).parse(&["build", "-v", "target"]).unwrap();

        assert_eq!(result.flags.len(), 1);
        assert_eq!(result.flags[0].def.canonical_name(), "-v");
    }

    #[test]
    fn test_value_consumed_verbatim() {
        let set = git_set();

        // The next token is consumed blindly, even when it spells a flag.
        let result = Parser::new(&set).parse(&["-G", "-m", "-v"]).unwrap();

        assert_eq!(result.flags.len(), 1);
        let message = result.find("-m").unwrap();
        assert_eq!(message.value.as_deref(), Some("-v"));
    }

    #[test]
    fn test_repeated_flag_yields_node_per_occurrence() {
        let set = FlagSet::new(vec![FlagDef::value(&["-t", "--tag"])]).unwrap();

        let result = Parser::new(&set).parse(&["-t", "one", "-t", "two"]).unwrap();

        assert_eq!(result.flags.len(), 2);
        assert_eq!(result.flags[0].value.as_deref(), Some("one"));
        assert_eq!(result.flags[1].value.as_deref(), Some("two"));
    }

    #[test]
    fn test_trailing_value_flag_in_group_consumes_next() {
        let set = FlagSet::new(vec![FlagDef::switch(&["-a"]), FlagDef::value(&["-m"])]).unwrap();

        let result = Parser::new(&set).parse(&["-am", "note"]).unwrap();

        assert_eq!(result.flags.len(), 2);
        assert!(result.flags[0].value.is_none());
        assert_eq!(result.flags[1].value.as_deref(), Some("note"));
    }

    #[test]
    fn test_mid_group_value_flag_drops_rest() {
        let set = FlagSet::new(vec![FlagDef::value(&["-m"]), FlagDef::switch(&["-a"])]).unwrap();

        let result = Parser::new(&set).parse(&["-ma", "note"]).unwrap();

        // -m takes "note"; the trailing -a letter is not processed.
        assert_eq!(result.flags.len(), 1);
        assert_eq!(result.flags[0].def.canonical_name(), "-m");
        assert_eq!(result.flags[0].value.as_deref(), Some("note"));
    }

    #[test]
    fn test_value_flag_in_group_without_token_errors() {
        let set = FlagSet::new(vec![FlagDef::switch(&["-a"]), FlagDef::value(&["-m"])]).unwrap();

        let err = Parser::new(&set).parse(&["-am"]).unwrap_err();

        assert_eq!(err, ParseError::MissingValue("-m".to_string()));
    }

    #[test]
    fn test_bare_dash_is_unknown() {
        let set = git_set();

        let err = Parser::new(&set).parse(&["-"]).unwrap_err();

        assert_eq!(err, ParseError::UnknownFlag("-".to_string()));
    }

    #[test]
    fn test_parses_are_independent() {
        let set = git_set();
        let parser = Parser::new(&set);

        let first = parser.parse(&["-G", "-c"]).unwrap();
        let second = parser.parse(&["-v"]).unwrap();

        assert_eq!(first.flags.len(), 1);
        assert_eq!(second.flags.len(), 1);
        assert_eq!(second.flags[0].def.canonical_name(), "-v");
        assert!(second.find("-c").is_none());
    }
}
