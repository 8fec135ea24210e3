//! Renderers that re-express a value in a target casing.
//!
//! Each renderer asks the value for its split strategy, folds the word
//! components left to right, and joins them with the target's separator.
//! The source word's internal casing is always discarded first: every word
//! is lowercased before the renderer's first-letter rule is applied, so
//! "TEXT" and "text" render identically. A value with no word components
//! (an empty raw string) renders to the empty string everywhere.
//!
//! # Examples
//!
//! ```
//! use ident_inflexion::casing;
//! use ident_inflexion::identifier::Identifier;
//!
//! let id = Identifier::from_snake_case("Snake_Case_Text");
//! assert_eq!(casing::to_camel_case(&id), "snakeCaseText");
//! assert_eq!(casing::to_pascal_case(&id), "SnakeCaseText");
//! assert_eq!(casing::to_kebab_case(&id), "snake-case-text");
//! assert_eq!(casing::to_human_case(&id), "Snake Case Text");
//! ```
use crate::{inflect::Inflect, util};

/// Renders every word titlecased, joined with single spaces, as in
/// "Snake Case Text".
pub fn to_human_case(value: &impl Inflect) -> String {
    let mut result = String::new();
    value.splitter().for_each_word(value.inflect(), |word, idx| {
        if idx > 0 {
            result.push(' ');
        }
        result.push_str(&util::titlecase_word(word));
    });
    result
}

/// Renders words joined with `_`. With `upper_initial` set, each word keeps
/// an uppercase first letter ("Snake_Case_Text"); otherwise every word is
/// fully lowercased ("snake_case_text").
pub fn to_snake_case(value: &impl Inflect, upper_initial: bool) -> String {
    let mut result = String::new();
    value.splitter().for_each_word(value.inflect(), |word, idx| {
        if idx > 0 {
            result.push('_');
        }
        if upper_initial {
            result.push_str(&util::titlecase_word(word));
        } else {
            result.push_str(&word.to_lowercase());
        }
    });
    result
}

/// Renders the snake_case form uppercased, as in "SNAKE_CASE_TEXT".
pub fn to_env_var_case(value: &impl Inflect) -> String {
    to_snake_case(value, false).to_uppercase()
}

/// Renders the first word fully lowercased and every later word titlecased,
/// with no separator, as in "snakeCaseText".
pub fn to_camel_case(value: &impl Inflect) -> String {
    let mut result = String::new();
    value.splitter().for_each_word(value.inflect(), |word, idx| {
        if idx == 0 {
            result.push_str(&word.to_lowercase());
        } else {
            result.push_str(&util::titlecase_word(word));
        }
    });
    result
}

/// Renders every word titlecased with no separator, as in "SnakeCaseText".
pub fn to_pascal_case(value: &impl Inflect) -> String {
    let mut result = String::new();
    value.splitter().for_each_word(value.inflect(), |word, _| {
        result.push_str(&util::titlecase_word(word));
    });
    result
}

/// Renders every word fully lowercased, joined with `-`, as in
/// "snake-case-text".
pub fn to_kebab_case(value: &impl Inflect) -> String {
    let mut result = String::new();
    value.splitter().for_each_word(value.inflect(), |word, idx| {
        if idx > 0 {
            result.push('-');
        }
        result.push_str(&word.to_lowercase());
    });
    result
}
