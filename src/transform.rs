//! Direct camelCase/PascalCase to snake_case string transforms.
//!
//! These two helpers work on plain strings without going through the
//! [Identifier](crate::identifier::Identifier) abstraction: they keep the
//! source's word boundaries by scanning for uppercase letters rather than
//! splitting on a delimiter. They do not round-trip with the
//! [casing](crate::casing) renderers, which discard internal casing.
//!
//! # Examples
//!
//! ```
//! use ident_inflexion::transform;
//!
//! assert_eq!(
//!     transform::camel_to_snake_lower("partyIdentifier").unwrap(),
//!     "party_identifier",
//! );
//! assert_eq!(transform::pascal_to_snake("PartyType").unwrap(), "Party_Type");
//! ```
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

static UPPERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("[A-Z]").expect("Could not parse uppercase regex"));

/// The error returned when a transform is given an empty string. Both
/// transforms recase the first character, so they have nothing sensible to
/// do without one.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot transform an empty string")]
pub struct Error;

/// Converts a camelCase (or PascalCase) string to lower snake_case: the
/// first character is lowercased and every later uppercase letter is
/// replaced with `_` plus its lowercase form.
pub fn camel_to_snake_lower(text: &str) -> Result<String, Error> {
    let mut chars = text.chars();
    let first = chars.next().ok_or(Error)?;
    Ok(format!(
        "{}{}",
        first.to_lowercase(),
        UPPERCASE_REGEX.replace_all(chars.as_str(), |caps: &Captures| {
            format!("_{}", caps[0].to_lowercase())
        }),
    ))
}

/// Converts a PascalCase string to upper-initial snake_case: the first
/// character is uppercased and every later uppercase letter gets a `_`
/// inserted before it, keeping its case.
pub fn pascal_to_snake(text: &str) -> Result<String, Error> {
    let mut chars = text.chars();
    let first = chars.next().ok_or(Error)?;
    Ok(format!(
        "{}{}",
        first.to_uppercase(),
        UPPERCASE_REGEX.replace_all(chars.as_str(), "_$0"),
    ))
}
