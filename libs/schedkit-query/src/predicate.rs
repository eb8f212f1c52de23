//! Predicate AST and the AND-combinator.
//!
//! ## Combination semantics
//!
//! | left | right | `combine(left, right)` |
//! |------|-------|------------------------|
//! | absent | absent | absent ("no filter at all") |
//! | present | absent | left, unchanged |
//! | absent | present | right, unchanged |
//! | present | present | one flat conjunction of both |
//!
//! Conjunctions stay flat: merging two `And` lists concatenates them instead
//! of nesting, so a repeatedly folded filter set stays a single `And` usable
//! by a downstream translator. Fold order may change the list order but
//! never the selected entities.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::Filterable;

/// A comparable scalar value carried by a predicate leaf.
///
/// Property lookups produce the same type, so evaluation and translation
/// share one value model. Text ordering is case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uuid(Uuid),
    Text(String),
    DateTime(DateTime<Utc>),
    Decimal(Decimal),
}

impl Value {
    /// Compare two values of the same variant.
    ///
    /// Returns `None` for mismatched variants; a comparison predicate over
    /// mismatched types then fails closed.
    #[must_use]
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Uuid(a), Value::Uuid(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => {
                Some(a.to_lowercase().cmp(&b.to_lowercase()))
            }
            (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
            (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

/// A boolean predicate over one entity instance, referenced by property name.
///
/// `And`/`Or` hold flat lists; the leaf variants are what a translator maps
/// onto its own condition language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// `property == value` (exact equality).
    Equals { property: String, value: Value },
    /// Case-insensitive substring containment on a text property.
    Contains { property: String, needle: String },
    /// `property >= value`.
    GreaterOrEqual { property: String, value: Value },
    /// `property <= value`.
    LessOrEqual { property: String, value: Value },
    /// Flat conjunction; all parts must hold.
    And(Vec<Predicate>),
    /// Flat disjunction; at least one part must hold.
    Or(Vec<Predicate>),
}

impl Predicate {
    #[must_use]
    pub fn equals(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Predicate::Equals {
            property: property.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn contains(property: impl Into<String>, needle: impl Into<String>) -> Self {
        Predicate::Contains {
            property: property.into(),
            needle: needle.into(),
        }
    }

    #[must_use]
    pub fn greater_or_equal(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Predicate::GreaterOrEqual {
            property: property.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn less_or_equal(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Predicate::LessOrEqual {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Build an OR group from alternatives.
    ///
    /// A single alternative is returned unwrapped; an empty list yields
    /// `None` rather than a vacuously false group.
    #[must_use]
    pub fn any_of(mut alternatives: Vec<Predicate>) -> Option<Predicate> {
        match alternatives.len() {
            0 => None,
            1 => alternatives.pop(),
            _ => Some(Predicate::Or(alternatives)),
        }
    }

    /// Conjoin with another predicate, keeping the conjunction flat.
    #[must_use]
    pub fn and_also(self, other: Predicate) -> Predicate {
        let mut parts = match self {
            Predicate::And(parts) => parts,
            single => vec![single],
        };
        match other {
            Predicate::And(more) => parts.extend(more),
            single => parts.push(single),
        }
        Predicate::And(parts)
    }

    /// Evaluate against one entity.
    ///
    /// Unknown properties and type-mismatched comparisons are `false`
    /// (fail-closed): a predicate never silently widens a selection.
    #[must_use]
    pub fn matches<E: Filterable>(&self, entity: &E) -> bool {
        match self {
            Predicate::Equals { property, value } => entity
                .property(property)
                .is_some_and(|actual| actual == *value),
            Predicate::Contains { property, needle } => match entity.property(property) {
                Some(Value::Text(text)) => {
                    text.to_lowercase().contains(&needle.to_lowercase())
                }
                _ => false,
            },
            Predicate::GreaterOrEqual { property, value } => entity
                .property(property)
                .and_then(|actual| actual.compare(value))
                .is_some_and(Ordering::is_ge),
            Predicate::LessOrEqual { property, value } => entity
                .property(property)
                .and_then(|actual| actual.compare(value))
                .is_some_and(Ordering::is_le),
            Predicate::And(parts) => parts.iter().all(|p| p.matches(entity)),
            Predicate::Or(parts) => parts.iter().any(|p| p.matches(entity)),
        }
    }
}

/// AND-combine two optional predicates.
///
/// Absent operands act as the identity element; two present operands merge
/// into one flat conjunction. See the module table for the full matrix.
#[must_use]
pub fn combine(left: Option<Predicate>, right: Option<Predicate>) -> Option<Predicate> {
    match (left, right) {
        (None, None) => None,
        (Some(p), None) | (None, Some(p)) => Some(p),
        (Some(l), Some(r)) => Some(l.and_also(r)),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        age: i64,
        active: bool,
    }

    impl Filterable for Row {
        fn property(&self, name: &str) -> Option<Value> {
            match name {
                "name" => Some(Value::Text(self.name.to_owned())),
                "age" => Some(Value::Int(self.age)),
                "active" => Some(Value::Bool(self.active)),
                _ => None,
            }
        }
    }

    fn fixture() -> Vec<Row> {
        vec![
            Row { name: "Ada", age: 36, active: true },
            Row { name: "Grace", age: 45, active: false },
            Row { name: "Edsger", age: 72, active: true },
            Row { name: "Barbara", age: 58, active: true },
        ]
    }

    fn selected(pred: &Option<Predicate>, rows: &[Row]) -> Vec<&'static str> {
        rows.iter()
            .filter(|r| pred.as_ref().is_none_or(|p| p.matches(*r)))
            .map(|r| r.name)
            .collect()
    }

    fn a() -> Predicate {
        Predicate::equals("active", true)
    }

    fn b() -> Predicate {
        Predicate::greater_or_equal("age", 40i64)
    }

    fn c() -> Predicate {
        Predicate::less_or_equal("age", 60i64)
    }

    #[test]
    fn identity_element() {
        let rows = fixture();
        let plain = selected(&Some(a()), &rows);
        assert_eq!(selected(&combine(Some(a()), None), &rows), plain);
        assert_eq!(selected(&combine(None, Some(a())), &rows), plain);
    }

    #[test]
    fn neither_side_present_means_no_filter() {
        let rows = fixture();
        assert!(combine(None, None).is_none());
        assert_eq!(selected(&None, &rows).len(), rows.len());
    }

    #[test]
    fn associativity_and_commutativity() {
        let rows = fixture();
        let left = combine(combine(Some(a()), Some(b())), Some(c()));
        let right = combine(Some(a()), combine(Some(b()), Some(c())));
        let swapped = combine(Some(b()), combine(Some(a()), Some(c())));

        let expected = selected(&left, &rows);
        assert_eq!(expected, vec!["Barbara"]);
        assert_eq!(selected(&right, &rows), expected);
        assert_eq!(selected(&swapped, &rows), expected);
    }

    #[test]
    fn repeated_folding_stays_flat() {
        let folded = combine(combine(Some(a()), Some(b())), Some(c())).unwrap();
        match folded {
            Predicate::And(parts) => assert_eq!(parts.len(), 3),
            other => panic!("expected flat conjunction, got {other:?}"),
        }
    }

    #[test]
    fn or_group_is_conjoinable() {
        let rows = fixture();
        let group = Predicate::any_of(vec![
            Predicate::contains("name", "ada"),
            Predicate::contains("name", "grace"),
        ]);
        let pred = combine(group, Some(a()));
        // Grace is inactive, so only Ada survives the conjunction.
        assert_eq!(selected(&pred, &rows), vec!["Ada"]);
    }

    #[test]
    fn any_of_unwraps_single_and_drops_empty() {
        assert!(Predicate::any_of(Vec::new()).is_none());
        let single = Predicate::any_of(vec![a()]).unwrap();
        assert_eq!(single, a());
    }

    #[test]
    fn contains_is_case_insensitive() {
        let row = Row { name: "Ali Veli", age: 30, active: true };
        assert!(Predicate::contains("name", "ALI").matches(&row));
        assert!(Predicate::contains("name", "veli").matches(&row));
        assert!(!Predicate::contains("name", "ayse").matches(&row));
    }

    #[test]
    fn unknown_property_fails_closed() {
        let row = Row { name: "Ada", age: 36, active: true };
        assert!(!Predicate::equals("missing", true).matches(&row));
        assert!(!Predicate::contains("missing", "x").matches(&row));
        assert!(!Predicate::greater_or_equal("missing", 1i64).matches(&row));
    }

    #[test]
    fn type_mismatch_fails_closed() {
        let row = Row { name: "Ada", age: 36, active: true };
        assert!(!Predicate::greater_or_equal("name", 1i64).matches(&row));
        assert!(!Predicate::contains("age", "3").matches(&row));
    }

    #[test]
    fn predicate_serde_roundtrip() {
        let pred = combine(
            Some(Predicate::equals("tenant_id", Uuid::nil())),
            Predicate::any_of(vec![
                Predicate::contains("name", "ali"),
                Predicate::contains("email", "ali"),
            ]),
        )
        .unwrap();

        let json = serde_json::to_string(&pred).unwrap();
        let back: Predicate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pred);
    }
}
