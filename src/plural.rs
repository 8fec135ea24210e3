//! Pluralizable identifiers and pluralizer strategies.
//!
//! A [Pluralizable] is an identifier that knows how to derive its plural
//! form. The derivation is delegated to a [Pluralizer], so the naive
//! built-in rule (append "s") can be replaced with a fixed override when
//! the English plural is irregular. The derived [Plural] keeps a back
//! reference to the singular it came from and inherits its split strategy,
//! so it can be rendered with the whole [casing](crate::casing) family.
//!
//! # Examples
//!
//! ```
//! use ident_inflexion::casing;
//! use ident_inflexion::inflect::Inflect;
//! use ident_inflexion::plural::{auto_plural, custom_plural};
//!
//! let id = auto_plural("Party_Id");
//! assert_eq!(id.plural().inflect(), "Party_Ids");
//! assert_eq!(casing::to_camel_case(&id.plural()), "partyIds");
//!
//! let id = custom_plural("All_Party", "All_Parties");
//! assert_eq!(id.plural().inflect(), "All_Parties");
//! assert_eq!(casing::to_kebab_case(&id.plural()), "all-parties");
//! ```
use crate::{identifier::Identifier, inflect::Inflect, split::SplitStrategy};
use std::borrow::Cow;

/// The rule used to derive a plural identifier from a singular one.
///
/// The set of rules is small and fixed, so this is a closed enum rather
/// than a trait. Every variant is pure: deriving a plural never mutates the
/// singular and always produces a fresh [Plural].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pluralizer<'a> {
    /// The plural text is the singular text, unchanged. For identifiers
    /// that name uncountable or already-plural things.
    Identity,
    /// Appends a bare "s" to the singular text. This is deliberately
    /// naive: no "y" to "ies", no irregular English plurals. Use
    /// [Pluralizer::Static] when that matters.
    AutoSuffix,
    /// The plural text is the fixed string given at construction,
    /// regardless of the singular text.
    Static(&'a str),
}

impl<'a> Pluralizer<'a> {
    /// Derives the plural of `singular`. The result carries the singular's
    /// split strategy and a copy of the singular itself for provenance.
    pub fn plural_of(&self, singular: Identifier<'a>) -> Plural<'a> {
        let text = match self {
            Pluralizer::Identity => Cow::Borrowed(singular.raw()),
            Pluralizer::AutoSuffix => Cow::Owned(format!("{}s", singular.raw())),
            Pluralizer::Static(plural) => Cow::Borrowed(*plural),
        };
        Plural {
            text,
            strategy: singular.splitter(),
            singular,
        }
    }
}

/// A `Pluralizable` is an identifier bundled with the [Pluralizer] that
/// will derive its plural form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pluralizable<'a> {
    identifier: Identifier<'a>,
    pluralizer: Pluralizer<'a>,
}

impl<'a> Pluralizable<'a> {
    /// Bundles any identifier with any pluralizer.
    pub fn new(identifier: Identifier<'a>, pluralizer: Pluralizer<'a>) -> Self {
        Self {
            identifier,
            pluralizer,
        }
    }

    /// Returns the singular form, which is the value itself.
    pub fn singular(&self) -> &Identifier<'a> {
        &self.identifier
    }

    /// Derives the plural form. This calls the pluralizer afresh on every
    /// access; the result is never cached.
    pub fn plural(&self) -> Plural<'a> {
        self.pluralizer.plural_of(self.identifier)
    }

    /// Returns the pluralizer this value was constructed with.
    pub fn pluralizer(&self) -> Pluralizer<'a> {
        self.pluralizer
    }
}

impl<'a> Inflect for Pluralizable<'a> {
    fn inflect(&self) -> &str {
        self.identifier.inflect()
    }

    fn splitter(&self) -> SplitStrategy {
        self.identifier.splitter()
    }
}

/// A `Plural` is an identifier derived from a singular one by a
/// [Pluralizer]. It remembers which singular it was derived from.
#[derive(Clone, Debug)]
pub struct Plural<'a> {
    text: Cow<'a, str>,
    strategy: SplitStrategy,
    singular: Identifier<'a>,
}

impl<'a> Plural<'a> {
    /// Returns a copy of the singular identifier this plural was derived
    /// from. Provenance only; rendering never consults it.
    pub fn singular(&self) -> Identifier<'a> {
        self.singular
    }
}

impl<'a> Inflect for Plural<'a> {
    fn inflect(&self) -> &str {
        &self.text
    }

    fn splitter(&self) -> SplitStrategy {
        self.strategy
    }
}

/// Creates a snake-split [Pluralizable] that pluralizes by appending "s".
pub fn auto_plural(raw: &str) -> Pluralizable<'_> {
    Pluralizable::new(Identifier::from_snake_case(raw), Pluralizer::AutoSuffix)
}

/// Creates a snake-split [Pluralizable] whose plural is the fixed
/// `plural` string, for identifiers the automatic "s" suffix gets wrong.
pub fn custom_plural<'a>(raw: &'a str, plural: &'a str) -> Pluralizable<'a> {
    Pluralizable::new(Identifier::from_snake_case(raw), Pluralizer::Static(plural))
}

#[cfg(test)]
mod tests {
    use super::{auto_plural, custom_plural, Pluralizable, Pluralizer};
    use crate::{casing, identifier::Identifier, inflect::Inflect, split::SplitStrategy};

    #[test]
    fn auto_plural_appends_s() {
        let id = auto_plural("Party_Id");
        assert_eq!(id.pluralizer(), Pluralizer::AutoSuffix);

        let plural = id.plural();
        assert_eq!(plural.inflect(), "Party_Ids");
        assert_eq!(casing::to_camel_case(&plural), "partyIds");
        assert_eq!(casing::to_human_case(&plural), "Party Ids");
        assert_eq!(casing::to_pascal_case(&plural), "PartyIds");
        assert_eq!(casing::to_kebab_case(&plural), "party-ids");
    }

    #[test]
    fn custom_plural_uses_fixed_text() {
        let id = custom_plural("All_Party", "All_Parties");
        assert_eq!(id.pluralizer(), Pluralizer::Static("All_Parties"));

        let plural = id.plural();
        assert_eq!(plural.inflect(), "All_Parties");
        assert_eq!(casing::to_camel_case(&plural), "allParties");
        assert_eq!(casing::to_human_case(&plural), "All Parties");
        assert_eq!(casing::to_pascal_case(&plural), "AllParties");
        assert_eq!(casing::to_kebab_case(&plural), "all-parties");
    }

    #[test]
    fn identity_plural_matches_singular() {
        let id = Pluralizable::new(
            Identifier::from_snake_case("Party_Data"),
            Pluralizer::Identity,
        );
        assert_eq!(id.plural().inflect(), "Party_Data");
        assert_eq!(id.plural().inflect(), id.inflect());
    }

    #[test]
    fn singular_is_the_value_itself() {
        let id = auto_plural("Party_Id");
        assert_eq!(*id.singular(), Identifier::from_snake_case("Party_Id"));
        assert_eq!(id.singular().inflect(), id.inflect());
    }

    #[test]
    fn plural_is_recomputed_on_every_access() {
        let id = auto_plural("Party_Id");
        let first = id.plural();
        let second = id.plural();
        assert_eq!(first.inflect(), second.inflect());
        assert_eq!(first.singular(), second.singular());
    }

    #[test]
    fn plural_remembers_its_singular() {
        let id = custom_plural("All_Party", "All_Parties");
        let plural = id.plural();
        assert_eq!(plural.singular(), *id.singular());
        assert_eq!(plural.singular().inflect(), "All_Party");
    }

    #[test]
    fn plural_inherits_split_strategy() {
        let id = Pluralizable::new(
            Identifier::from_human_case("Tracked Event"),
            Pluralizer::AutoSuffix,
        );
        let plural = id.plural();
        assert_eq!(plural.splitter(), SplitStrategy::Human);
        assert_eq!(plural.inflect(), "Tracked Events");
        assert_eq!(casing::to_snake_case(&plural, false), "tracked_events");
    }

    #[test]
    fn static_pluralizer_ignores_singular_text() {
        let pluralizer = Pluralizer::Static("People");
        let plural = pluralizer.plural_of(Identifier::from_snake_case("Person"));
        assert_eq!(plural.inflect(), "People");

        let plural = pluralizer.plural_of(Identifier::from_snake_case("Human"));
        assert_eq!(plural.inflect(), "People");
    }
}
