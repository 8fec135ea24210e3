// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Inflect identifier-style strings between casing conventions.
//!
//! Given a value in some source casing (snake_case, human-readable
//! space-separated text, or text with unknown or mixed delimiters), this
//! crate decomposes it into its word components and re-renders those
//! components in a target casing: camelCase, PascalCase, snake_case,
//! kebab-case, UPPER_SNAKE environment-variable form, or human-readable
//! form. It can also derive a plural identifier from a singular one through
//! a pluggable pluralizer.
//!
//! All rendering is done by re-splitting the original text on demand;
//! nothing is cached and no state exists beyond the value being
//! transformed.
//!
//! # Examples
//!
//! ```
//! use ident_inflexion::casing;
//! use ident_inflexion::identifier::Identifier;
//!
//! let id = Identifier::from_snake_case("party_identifier");
//! assert_eq!(casing::to_camel_case(&id), "partyIdentifier");
//! assert_eq!(casing::to_human_case(&id), "Party Identifier");
//! assert_eq!(casing::to_env_var_case(&id), "PARTY_IDENTIFIER");
//! ```
//!
//! # Scope
//!
//! Word splitting is ASCII-only: the "guess" strategy treats every run of
//! characters outside `[A-Za-z0-9]` as a delimiter, and no locale-aware
//! capitalization or Unicode word segmentation is attempted. The automatic
//! pluralizer appends a bare "s"; it knows nothing about irregular English
//! plurals. Callers who need a real plural supply one with
//! [plural::custom_plural](crate::plural::custom_plural).

mod util;

pub mod casing;
pub mod identifier;
pub mod inflect;
pub mod plural;
pub mod split;
pub mod transform;
