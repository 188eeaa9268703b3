//! Rule declarations, the validator registry, and the built-in rules.
//!
//! A field declares its rules as a comma-separated string such as
//! `"required,minLength:8,match:password"`. [`parse_rules`] turns that into
//! an ordered [`RuleSpec`] sequence; the [`ValidatorRegistry`] maps each rule
//! name to a [`Predicate`] evaluated over a [`RuleContext`].

mod builtins;
mod parse;
mod registry;

pub use parse::{RuleSpec, parse_rules};
pub use registry::{CrossFieldLookup, Predicate, RuleContext, ValidatorRegistry};
