//! In-memory specification translator.
//!
//! The reference consumer of a [`Specification`]'s public fields: filter,
//! then sort, then page, against a slice of entities. A persistence-backed
//! translator would walk the same fields into its own condition language;
//! this one exists so specification semantics can be exercised without a
//! storage engine.

use std::cmp::Ordering;

use crate::entity::Filterable;
use crate::specification::{SortDir, Specification};

/// One page of matches plus the total match count before paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// Apply a specification to `rows`.
///
/// Rows failing the criteria are dropped first and `total` fixed from what
/// remains, so paging never distorts the reported count. Sorting is stable;
/// rows missing the sort property order after those that have it, whatever
/// the direction. Include hints carry no meaning here.
#[must_use]
pub fn select<'a, E: Filterable>(spec: &Specification<E>, rows: &'a [E]) -> PageResult<&'a E> {
    let mut hits: Vec<&E> = rows
        .iter()
        .filter(|row| spec.criteria().is_none_or(|c| c.matches(*row)))
        .collect();

    let total = hits.len() as u64;

    if let Some(order) = spec.order() {
        hits.sort_by(|a, b| {
            match (a.property(&order.field), b.property(&order.field)) {
                (Some(x), Some(y)) => {
                    let cmp = x.compare(&y).unwrap_or(Ordering::Equal);
                    match order.dir {
                        SortDir::Asc => cmp,
                        SortDir::Desc => cmp.reverse(),
                    }
                }
                // Missing values sort last regardless of direction.
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }

    if let Some(page) = spec.page() {
        let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.take()).unwrap_or(usize::MAX);
        hits = hits.into_iter().skip(skip).take(take).collect();
    }

    PageResult { items: hits, total }
}
