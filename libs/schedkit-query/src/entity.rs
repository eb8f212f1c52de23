//! Property resolution contract for filterable entities.

use crate::predicate::Value;

/// Resolves predicate property names to an entity's current values.
///
/// Property names are a query-layer concept; each entity declares the fixed
/// set it understands (typically as constants next to the model). Returning
/// `None` for an unknown name makes every predicate over it evaluate to
/// `false` — misspelled or retired properties narrow a selection instead of
/// widening it.
///
/// # Example
///
/// ```
/// use schedkit_query::{Filterable, Predicate, Value};
///
/// struct City {
///     name: String,
/// }
///
/// impl Filterable for City {
///     fn property(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(Value::Text(self.name.clone())),
///             _ => None,
///         }
///     }
/// }
///
/// let izmir = City { name: "Izmir".to_owned() };
/// assert!(Predicate::contains("name", "izm").matches(&izmir));
/// ```
pub trait Filterable {
    /// The value of the named property, or `None` if the entity does not
    /// expose it.
    fn property(&self, name: &str) -> Option<Value>;
}
