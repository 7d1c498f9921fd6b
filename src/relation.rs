//! Relation kinds.
//!
//! Every kind is a single bit of a `u32`, so a caller can ask for a union of
//! kinds with `|` and test membership with one `&`:
//!
//! ```
//! use wnram::relation::Relation;
//!
//! let mask = Relation::HYPERNYM | Relation::INSTANCE_HYPERNYM;
//! assert!(mask.intersects(Relation::HYPERNYM));
//! assert!(!mask.intersects(Relation::HYPONYM));
//! ```

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// A set of relation kinds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Relation: u32 {
        const ALSO_SEE = 1 << 0;
        /// A word with an opposite meaning.
        const ANTONYM = 1 << 1;
        /// A noun for which adjectives express values (weight: light, heavy).
        const ATTRIBUTE = 1 << 2;
        const CAUSE = 1 << 3;
        /// Terms in different syntactic categories that share a root form and
        /// are semantically related.
        const DERIVATIONALLY_RELATED_FORM = 1 << 4;
        /// Adverb derived from an adjective. Shares its symbol and bit with
        /// [`Relation::PERTAINYM`].
        const DERIVED_FROM_ADJECTIVE = 1 << 5;
        const IN_DOMAIN_REGION = 1 << 6;
        const IN_DOMAIN_TOPIC = 1 << 7;
        const IN_DOMAIN_USAGE = 1 << 8;
        const CONTAINS_DOMAIN_REGION = 1 << 9;
        const CONTAINS_DOMAIN_TOPIC = 1 << 10;
        const CONTAINS_DOMAIN_USAGE = 1 << 11;
        const ENTAILMENT = 1 << 12;
        /// Y is a hypernym of X if X is a (kind of) Y.
        const HYPERNYM = 1 << 13;
        const INSTANCE_HYPERNYM = 1 << 14;
        const INSTANCE_HYPONYM = 1 << 15;
        /// X is a hyponym of Y if X is a (kind of) Y.
        const HYPONYM = 1 << 16;
        const MEMBER_MERONYM = 1 << 17;
        const PART_MERONYM = 1 << 18;
        const SUBSTANCE_MERONYM = 1 << 19;
        const MEMBER_HOLONYM = 1 << 20;
        const PART_HOLONYM = 1 << 21;
        const SUBSTANCE_HOLONYM = 1 << 22;
        const PARTICIPLE_OF_VERB = 1 << 23;
        const RELATED_FORM = 1 << 24;
        const SIMILAR_TO = 1 << 25;
        const VERB_GROUP = 1 << 26;
    }
}

impl Relation {
    pub const PERTAINYM: Relation = Relation::DERIVED_FROM_ADJECTIVE;

    pub const NONE: Relation = Relation::empty();
    pub const ANY: Relation = Relation::all();

    /// Every single-bit kind with its name, in bit order.
    const NAMES: [(Relation, &'static str); 27] = [
        (Relation::ALSO_SEE, "also_see"),
        (Relation::ANTONYM, "antonym"),
        (Relation::ATTRIBUTE, "attribute"),
        (Relation::CAUSE, "cause"),
        (Relation::DERIVATIONALLY_RELATED_FORM, "derivationally_related_form"),
        (Relation::DERIVED_FROM_ADJECTIVE, "pertainym"),
        (Relation::IN_DOMAIN_REGION, "in_domain_region"),
        (Relation::IN_DOMAIN_TOPIC, "in_domain_topic"),
        (Relation::IN_DOMAIN_USAGE, "in_domain_usage"),
        (Relation::CONTAINS_DOMAIN_REGION, "contains_domain_region"),
        (Relation::CONTAINS_DOMAIN_TOPIC, "contains_domain_topic"),
        (Relation::CONTAINS_DOMAIN_USAGE, "contains_domain_usage"),
        (Relation::ENTAILMENT, "entailment"),
        (Relation::HYPERNYM, "hypernym"),
        (Relation::INSTANCE_HYPERNYM, "instance_hypernym"),
        (Relation::INSTANCE_HYPONYM, "instance_hyponym"),
        (Relation::HYPONYM, "hyponym"),
        (Relation::MEMBER_MERONYM, "member_meronym"),
        (Relation::PART_MERONYM, "part_meronym"),
        (Relation::SUBSTANCE_MERONYM, "substance_meronym"),
        (Relation::MEMBER_HOLONYM, "member_holonym"),
        (Relation::PART_HOLONYM, "part_holonym"),
        (Relation::SUBSTANCE_HOLONYM, "substance_holonym"),
        (Relation::PARTICIPLE_OF_VERB, "participle_of_verb"),
        (Relation::RELATED_FORM, "related_form"),
        (Relation::SIMILAR_TO, "similar_to"),
        (Relation::VERB_GROUP, "verb_group"),
    ];

    /// Look up a pointer symbol from a data line.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let relation = match symbol {
            "!" => Relation::ANTONYM,
            "#m" => Relation::MEMBER_HOLONYM,
            "#p" => Relation::PART_HOLONYM,
            "#s" => Relation::SUBSTANCE_HOLONYM,
            "$" => Relation::VERB_GROUP,
            "%m" => Relation::MEMBER_MERONYM,
            "%p" => Relation::PART_MERONYM,
            "%s" => Relation::SUBSTANCE_MERONYM,
            "&" => Relation::SIMILAR_TO,
            "*" => Relation::ENTAILMENT,
            "+" => Relation::DERIVATIONALLY_RELATED_FORM,
            "-c" => Relation::IN_DOMAIN_TOPIC,
            "-r" => Relation::IN_DOMAIN_REGION,
            "-u" => Relation::IN_DOMAIN_USAGE,
            ";c" => Relation::CONTAINS_DOMAIN_TOPIC,
            ";r" => Relation::CONTAINS_DOMAIN_REGION,
            ";u" => Relation::CONTAINS_DOMAIN_USAGE,
            "<" => Relation::PARTICIPLE_OF_VERB,
            "=" => Relation::ATTRIBUTE,
            ">" => Relation::CAUSE,
            "@" => Relation::HYPERNYM,
            "@i" => Relation::INSTANCE_HYPERNYM,
            "\\" => Relation::PERTAINYM,
            "^" => Relation::ALSO_SEE,
            "~" => Relation::HYPONYM,
            "~i" => Relation::INSTANCE_HYPONYM,
            _ => return None,
        };
        Some(relation)
    }

    /// Look up a kind by its snake_case name (`"hypernym"`, `"antonym"`, ...).
    pub fn parse_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace('-', "_");
        match name.as_str() {
            "any" | "all" => Some(Relation::ANY),
            "derived_from_adjective" => Some(Relation::DERIVED_FROM_ADJECTIVE),
            _ => Self::NAMES
                .iter()
                .find(|(_, n)| *n == name)
                .map(|(relation, _)| *relation),
        }
    }

    /// Names of the single-bit kinds in this set.
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(relation, _)| self.contains(*relation))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        f.write_str(&self.names().join("|"))
    }
}

impl Serialize for Relation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}

impl<'de> Deserialize<'de> for Relation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut relation = Relation::NONE;
        for name in names {
            relation |= Relation::parse_name(&name)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown relation: {name}")))?;
        }
        Ok(relation)
    }
}
