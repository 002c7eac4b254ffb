//! String-keyed parameter records and alias resolution
//!
//! Distribution parameters arrive as a flat, caller-ordered list of
//! `(key, value)` pairs. Each logical parameter of a family declares a
//! [`ParamSpec`]: its canonical spelling, the aliases it also answers to, and
//! an optional default. Keys are compared ASCII-case-insensitively with no
//! trimming; within the caller's list, the first entry matching any accepted
//! spelling wins. The alias tables are a public compatibility surface:
//! renaming a spelling is a breaking change.

use crate::error::{Error, Result};

/// One caller-supplied parameter: a key and a real value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param<'a> {
    pub key: &'a str,
    pub value: f64,
}

impl<'a> Param<'a> {
    pub fn new(key: &'a str, value: f64) -> Self {
        Self { key, value }
    }
}

impl<'a> From<(&'a str, f64)> for Param<'a> {
    fn from((key, value): (&'a str, f64)) -> Self {
        Self { key, value }
    }
}

/// Declarative alias table for one logical parameter of a family.
///
/// `default: None` marks the parameter required.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Canonical spelling, used in error messages
    pub canonical: &'static str,
    /// Additional accepted spellings
    pub aliases: &'static [&'static str],
    /// Substituted when no accepted spelling is present
    pub default: Option<f64>,
}

impl ParamSpec {
    /// A parameter that must be supplied by the caller
    pub const fn required(canonical: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            canonical,
            aliases,
            default: None,
        }
    }

    /// A parameter with a documented default
    pub const fn optional(
        canonical: &'static str,
        aliases: &'static [&'static str],
        default: f64,
    ) -> Self {
        Self {
            canonical,
            aliases,
            default: Some(default),
        }
    }

    /// Whether `key` is an accepted spelling of this parameter
    pub fn matches(&self, key: &str) -> bool {
        key.eq_ignore_ascii_case(self.canonical)
            || self.aliases.iter().any(|a| key.eq_ignore_ascii_case(a))
    }

    /// First matching value in caller-supplied order, if any
    pub fn lookup(&self, params: &[Param<'_>]) -> Option<f64> {
        params.iter().find(|p| self.matches(p.key)).map(|p| p.value)
    }

    /// Resolve against the caller's list: first match wins, then the default,
    /// otherwise a missing-parameter error naming the canonical spelling.
    pub fn resolve(&self, distribution: &'static str, params: &[Param<'_>]) -> Result<f64> {
        match self.lookup(params) {
            Some(v) => Ok(v),
            None => self.default.ok_or(Error::MissingParameter {
                distribution,
                parameter: self.canonical,
            }),
        }
    }
}
