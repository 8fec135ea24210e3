//! The plain identifier value type.
//!
//! An [Identifier] pairs a borrowed raw string with the [SplitStrategy]
//! that decomposes it. It is cheap to copy and immutable once constructed.
//!
//! # Examples
//!
//! ```
//! use ident_inflexion::casing;
//! use ident_inflexion::identifier::Identifier;
//! use ident_inflexion::inflect::Inflect; // Provides inflect()
//!
//! let id = Identifier::from_human_case("Human Case Text");
//! assert_eq!(id.inflect(), "Human Case Text");
//! assert_eq!(casing::to_snake_case(&id, false), "human_case_text");
//! ```
use crate::{inflect::Inflect, split::SplitStrategy};

/// An `Identifier` is a raw string bound to the split strategy that will be
/// used to take it apart. Two identifiers are equal iff both their raw text
/// and their strategy are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identifier<'a> {
    raw: &'a str,
    strategy: SplitStrategy,
}

impl<'a> Identifier<'a> {
    /// Creates an identifier with an explicit split strategy.
    pub fn new(raw: &'a str, strategy: SplitStrategy) -> Self {
        Self { raw, strategy }
    }

    /// Creates an identifier whose words are separated by `_`.
    pub fn from_snake_case(raw: &'a str) -> Self {
        Self::new(raw, SplitStrategy::Snake)
    }

    /// Creates an identifier whose words are separated by single spaces.
    pub fn from_human_case(raw: &'a str) -> Self {
        Self::new(raw, SplitStrategy::Human)
    }

    /// Creates an identifier whose words are separated by runs of
    /// non-alphanumeric characters. Use this when the source casing is
    /// unknown or mixed.
    pub fn from_guessed_case(raw: &'a str) -> Self {
        Self::new(raw, SplitStrategy::Guess)
    }

    /// Returns the raw text with the lifetime of the borrowed source
    /// string rather than of `self`.
    pub fn raw(&self) -> &'a str {
        self.raw
    }
}

impl<'a> Inflect for Identifier<'a> {
    fn inflect(&self) -> &str {
        self.raw
    }

    fn splitter(&self) -> SplitStrategy {
        self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::Identifier;
    use crate::{inflect::Inflect, split::SplitStrategy};

    #[test]
    fn inflect_returns_raw_text_unchanged() {
        let tests = [
            (
                Identifier::from_snake_case("Snake_Case_Text"),
                "Snake_Case_Text",
                SplitStrategy::Snake,
            ),
            (
                Identifier::from_human_case("Human Case Text"),
                "Human Case Text",
                SplitStrategy::Human,
            ),
            (
                Identifier::from_guessed_case("Generic Text_With(Some-extras)!"),
                "Generic Text_With(Some-extras)!",
                SplitStrategy::Guess,
            ),
        ];
        for test in tests {
            assert_eq!(test.0.inflect(), test.1);
            assert_eq!(test.0.splitter(), test.2);
        }
    }

    #[test]
    fn equality_is_raw_text_plus_strategy() {
        assert_eq!(
            Identifier::from_snake_case("a_b"),
            Identifier::from_snake_case("a_b"),
        );
        assert_ne!(
            Identifier::from_snake_case("a_b"),
            Identifier::from_guessed_case("a_b"),
        );
        assert_ne!(
            Identifier::from_snake_case("a_b"),
            Identifier::from_snake_case("a_c"),
        );
    }
}
