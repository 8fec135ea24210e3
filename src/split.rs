//! Strategies for decomposing raw text into word components.
//!
//! A [SplitStrategy] walks a string and hands each word component to a
//! callback in source order. Which characters count as delimiters depends
//! on the strategy. Empty components are never emitted, so consecutive
//! delimiters collapse and an empty string produces no callbacks at all.
//!
//! # Examples
//!
//! ```
//! use ident_inflexion::split::SplitStrategy;
//!
//! let mut words = vec![];
//! SplitStrategy::Guess.for_each_word("Generic Text_With(Some-extras)!", |word, _| {
//!     words.push(word.to_string());
//! });
//! assert_eq!(words, ["Generic", "Text", "With", "Some", "extras"]);
//! ```
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("[A-Za-z0-9]+").expect("Could not parse word regex"));

/// The rule used to decompose an identifier's raw text into words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Split on every `_` character.
    Snake,
    /// Split on every single space character.
    Human,
    /// Split on every maximal run of characters outside `[A-Za-z0-9]`, so
    /// any punctuation, underscore, hyphen, parenthesis, or space acts as a
    /// delimiter.
    Guess,
}

impl SplitStrategy {
    /// Invokes `handler(word, index)` once per non-empty word component of
    /// `text`, left to right. The index counts emitted words from zero; it
    /// is not a character position.
    pub fn for_each_word<F>(&self, text: &str, handler: F)
    where
        F: FnMut(&str, usize),
    {
        match self {
            SplitStrategy::Snake => emit_words(text.split('_'), handler),
            SplitStrategy::Human => emit_words(text.split(' '), handler),
            SplitStrategy::Guess => {
                emit_words(WORD_REGEX.find_iter(text).map(|m| m.as_str()), handler)
            }
        }
    }
}

fn emit_words<'t, I, F>(words: I, mut handler: F)
where
    I: Iterator<Item = &'t str>,
    F: FnMut(&str, usize),
{
    for (idx, word) in words.filter(|w| !w.is_empty()).enumerate() {
        handler(word, idx);
    }
}
