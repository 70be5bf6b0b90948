//! Typed binding over parse results.
//!
//! A [`Binder`] carries a closed set of typed slots over caller-owned
//! variables, chosen at registration time. Applying the binder walks the
//! whole result tree in match order and converts each occurrence into the
//! bound target: switches assign the literal `true`, value flags convert
//! their consumed string. Flags without a binding are skipped.
//!
//! Scalar slots overwrite, so the last occurrence wins; a
//! [`Slot::StringList`] appends one entry per occurrence.
//!
//! # Example
//!
//! ```
//! use warg_core::{FlagDef, FlagSet};
//! use warg_parser::bind::{Binder, Slot};
//! use warg_parser::parse_args;
//!
//! let set = FlagSet::new(vec![
//!     FlagDef::switch(&["-v", "--verbose"]),
//!     FlagDef::value(&["-c", "--count"]),
//! ])?;
//! let result = parse_args(&set, &["-v", "--count", "3"])?;
//!
//! let mut verbose = false;
//! let mut count = 0i64;
//! Binder::new()
//!     .bind(&["-v", "--verbose"], Slot::Bool(&mut verbose))
//!     .bind(&["--count"], Slot::Int(&mut count))
//!     .apply(&result)?;
//!
//! assert!(verbose);
//! assert_eq!(count, 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::result::ParseResult;

/// Conversion failures while applying bound values.
///
/// Application stops at the first failure; earlier assignments keep the
/// values they already received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The flag's value is not `true` or `false`.
    #[error("flag {flag}: invalid boolean {value:?}")]
    InvalidBool { flag: String, value: String },

    /// The flag's value does not parse as a signed integer.
    #[error("flag {flag}: invalid integer {value:?}")]
    InvalidInt { flag: String, value: String },

    /// The flag's value does not parse as a float.
    #[error("flag {flag}: invalid float {value:?}")]
    InvalidFloat { flag: String, value: String },

    /// The flag's value does not parse as a duration.
    #[error("flag {flag}: invalid duration {value:?}")]
    InvalidDuration { flag: String, value: String },
}

/// A typed target for one bound flag.
///
/// The variants are the closed conversion set; each borrows the caller's
/// variable for the binder's lifetime, so applying the binder releases the
/// borrows and the caller reads the results directly.
#[derive(Debug)]
pub enum Slot<'v> {
    /// Stores `true`/`false`. Switch occurrences always assign `true`.
    Bool(&'v mut bool),
    /// Stores the value string as-is.
    String(&'v mut String),
    /// Parses a signed integer.
    Int(&'v mut i64),
    /// Parses a float.
    Float(&'v mut f64),
    /// Appends one entry per occurrence, in match order.
    StringList(&'v mut Vec<String>),
    /// Parses a compound duration such as `300ms` or `2h45m`.
    Duration(&'v mut Duration),
}

impl Slot<'_> {
    /// Converts `raw` into the target. `flag` names the flag in errors.
    fn assign(&mut self, flag: &str, raw: &str) -> Result<(), BindError> {
        match self {
            Slot::Bool(target) => {
                **target = raw.parse().map_err(|_| BindError::InvalidBool {
                    flag: flag.to_string(),
                    value: raw.to_string(),
                })?;
            }
            Slot::String(target) => **target = raw.to_string(),
            Slot::Int(target) => {
                **target = raw.parse().map_err(|_| BindError::InvalidInt {
                    flag: flag.to_string(),
                    value: raw.to_string(),
                })?;
            }
            Slot::Float(target) => {
                **target = raw.parse().map_err(|_| BindError::InvalidFloat {
                    flag: flag.to_string(),
                    value: raw.to_string(),
                })?;
            }
            Slot::StringList(target) => target.push(raw.to_string()),
            Slot::Duration(target) => {
                **target = parse_duration(raw).ok_or_else(|| BindError::InvalidDuration {
                    flag: flag.to_string(),
                    value: raw.to_string(),
                })?;
            }
        }
        Ok(())
    }
}

struct Binding<'v> {
    names: Vec<String>,
    slot: Slot<'v>,
}

/// Registered slots, applied to a parse result in one pass.
///
/// A binding matches a flag occurrence when any of the definition's
/// declared spellings equals any bound name, so binding `--verbose`
/// also covers occurrences written `-v`.
#[derive(Default)]
pub struct Binder<'v> {
    bindings: Vec<Binding<'v>>,
}

impl<'v> Binder<'v> {
    /// Creates an empty binder.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Registers `slot` for any flag declaring one of `names`.
    pub fn bind(mut self, names: &[&str], slot: Slot<'v>) -> Self {
        self.bindings.push(Binding {
            names: names.iter().map(|name| name.to_string()).collect(),
            slot,
        });
        self
    }

    /// Walks `result` in match order and assigns every bound occurrence.
    ///
    /// # Errors
    ///
    /// Returns the first [`BindError`] a conversion produces; remaining
    /// occurrences are left unapplied.
    pub fn apply(mut self, result: &ParseResult<'_>) -> Result<(), BindError> {
        let mut outcome = Ok(());
        result.walk(&mut |node| {
            if outcome.is_err() {
                return;
            }
            let Some(binding) = self.bindings.iter_mut().find(|binding| {
                node.def
                    .names
                    .iter()
                    .any(|name| binding.names.iter().any(|bound| bound == name))
            }) else {
                return;
            };

            let raw = if node.is_switch() {
                "true"
            } else {
                node.value.as_deref().unwrap_or_default()
            };
            if let Err(err) = binding.slot.assign(node.def.canonical_name(), raw) {
                outcome = Err(err);
            }
        });
        outcome
    }
}

/// Parses a compound duration: an optional sign, then number/unit pairs
/// over `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h`, e.g. `300ms`, `1.5h`,
/// `2h45m`. The bare string `0` is accepted without a unit.
///
/// Returns `None` for malformed input and for negative durations, which
/// the unsigned [`Duration`] cannot carry.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use warg_parser::bind::parse_duration;
///
/// assert_eq!(parse_duration("2h45m"), Some(Duration::from_secs(9900)));
/// assert_eq!(parse_duration("1.5s"), Some(Duration::from_millis(1500)));
/// assert_eq!(parse_duration("10"), None);
/// ```
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let mut rest = raw;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total = Duration::ZERO;
    while !rest.is_empty() {
        let digits_end = rest
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(rest.len());
        let int_part = &rest[..digits_end];
        rest = &rest[digits_end..];

        let mut frac_part = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_end = after_dot
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(after_dot.len());
            frac_part = &after_dot[..frac_end];
            rest = &after_dot[frac_end..];
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }

        let unit_end = rest
            .find(|ch: char| ch.is_ascii_digit() || ch == '.')
            .unwrap_or(rest.len());
        let unit_nanos: u64 = match &rest[..unit_end] {
            "ns" => 1,
            "us" | "µs" | "μs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60_000_000_000,
            "h" => 3_600_000_000_000,
            _ => return None,
        };
        rest = &rest[unit_end..];

        let int_value: u64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };
        total = total.checked_add(Duration::from_nanos(int_value.checked_mul(unit_nanos)?))?;

        if !frac_part.is_empty() {
            let frac_value: u128 = frac_part.parse().ok()?;
            let scale = 10u128.checked_pow(frac_part.len() as u32)?;
            let scaled = (unit_nanos as u128).checked_mul(frac_value)?;
            let frac_nanos = u64::try_from(scaled / scale).ok()?;
            total = total.checked_add(Duration::from_nanos(frac_nanos))?;
        }
    }

    if negative && total != Duration::ZERO {
        return None;
    }
    Some(total)
}
