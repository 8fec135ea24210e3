//! Provides the [Inflect] trait, which defines methods shared by every
//! value the casing renderers can consume.

use crate::split::SplitStrategy;

/// This trait is implemented by everything that can be re-rendered in a
/// target casing: plain identifiers, pluralizable identifiers, and derived
/// plurals.
pub trait Inflect {
    /// Returns the canonical raw text, unchanged from construction. Every
    /// rendering is derived from this text on demand; no component list is
    /// stored anywhere.
    fn inflect(&self) -> &str;

    /// Returns the strategy used to decompose the raw text into words.
    fn splitter(&self) -> SplitStrategy;
}
