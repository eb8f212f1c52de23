//! The `Specification` container and its sort/page building blocks.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::predicate::{Predicate, combine};

/// Sort direction for an [`OrderBy`] definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// The single active sort definition: field and direction always travel
/// together, so a half-updated sort state cannot be observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub dir: SortDir,
}

/// Paging bounds; only constructed when both bounds were supplied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBounds {
    skip: u64,
    take: u64,
}

impl PageBounds {
    /// Number of leading matches to skip.
    #[inline]
    #[must_use]
    pub fn skip(&self) -> u64 {
        self.skip
    }

    /// Maximum number of matches to return.
    #[inline]
    #[must_use]
    pub fn take(&self) -> u64 {
        self.take
    }
}

/// Error raised while assembling a specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Paging was requested with a page size of zero. A zero-sized page is a
    /// caller error, distinct from a query that happens to match nothing.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Caller-supplied paging and sorting parameters, as received from a list
/// endpoint.
///
/// The sort key is matched case-insensitively against the entity's sortable
/// fields; unknown keys fall back to the entity default. Paging is requested
/// only when both bounds are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub sort_by: Option<String>,
    pub ascending: bool,
    pub skip: Option<u64>,
    pub take: Option<u64>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            sort_by: None,
            ascending: true,
            skip: None,
            take: None,
        }
    }
}

impl PageRequest {
    /// The requested direction for a recognized sort key.
    #[must_use]
    pub fn direction(&self) -> SortDir {
        if self.ascending { SortDir::Asc } else { SortDir::Desc }
    }
}

/// A declarative query description for one entity type.
///
/// Holds a composed filter predicate (absent means "match everything"),
/// ordered related-data include hints, at most one sort definition and
/// optional paging bounds. Builders mutate a specification during
/// construction; afterwards consumers only read it through the accessors.
pub struct Specification<E: ?Sized> {
    criteria: Option<Predicate>,
    includes: Vec<String>,
    order: Option<OrderBy>,
    page: Option<PageBounds>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: ?Sized> Specification<E> {
    /// An unfiltered specification.
    #[must_use]
    pub fn new() -> Self {
        Self {
            criteria: None,
            includes: Vec::new(),
            order: None,
            page: None,
            _entity: PhantomData,
        }
    }

    /// A specification seeded with an initial predicate.
    #[must_use]
    pub fn with_criteria(criteria: Predicate) -> Self {
        let mut spec = Self::new();
        spec.criteria = Some(criteria);
        spec
    }

    /// AND-combine a predicate into the existing criteria.
    ///
    /// The first call on an unfiltered specification simply sets it.
    pub fn add_criteria(&mut self, predicate: Predicate) {
        self.criteria = combine(self.criteria.take(), Some(predicate));
    }

    /// Append a related-data include hint.
    ///
    /// Order is preserved; duplicates are harmless. A consumer may issue the
    /// hints in any order without changing results.
    pub fn add_include(&mut self, relation: impl Into<String>) {
        self.includes.push(relation.into());
    }

    /// Sort ascending by `field`, replacing any previous sort definition.
    pub fn apply_order_by(&mut self, field: impl Into<String>) {
        self.order = Some(OrderBy {
            field: field.into(),
            dir: SortDir::Asc,
        });
    }

    /// Sort descending by `field`, replacing any previous sort definition.
    pub fn apply_order_by_descending(&mut self, field: impl Into<String>) {
        self.order = Some(OrderBy {
            field: field.into(),
            dir: SortDir::Desc,
        });
    }

    /// Enable paging with the given bounds.
    ///
    /// # Errors
    ///
    /// [`QueryError::ZeroPageSize`] if `take` is zero. Negative bounds are
    /// unrepresentable.
    pub fn apply_paging(&mut self, skip: u64, take: u64) -> Result<(), QueryError> {
        if take == 0 {
            return Err(QueryError::ZeroPageSize);
        }
        self.page = Some(PageBounds { skip, take });
        Ok(())
    }

    /// The composed filter predicate, if any.
    #[inline]
    #[must_use]
    pub fn criteria(&self) -> Option<&Predicate> {
        self.criteria.as_ref()
    }

    /// Related-data include hints, in insertion order.
    #[inline]
    #[must_use]
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// The active sort definition, if any.
    #[inline]
    #[must_use]
    pub fn order(&self) -> Option<&OrderBy> {
        self.order.as_ref()
    }

    /// Paging bounds, if paging was enabled.
    #[inline]
    #[must_use]
    pub fn page(&self) -> Option<PageBounds> {
        self.page
    }

    /// Whether both paging bounds were supplied.
    #[inline]
    #[must_use]
    pub fn is_paged(&self) -> bool {
        self.page.is_some()
    }
}

impl<E: ?Sized> Default for Specification<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized> Clone for Specification<E> {
    fn clone(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
            includes: self.includes.clone(),
            order: self.order.clone(),
            page: self.page,
            _entity: PhantomData,
        }
    }
}

impl<E: ?Sized> fmt::Debug for Specification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("criteria", &self.criteria)
            .field("includes", &self.includes)
            .field("order", &self.order)
            .field("page", &self.page)
            .finish()
    }
}
