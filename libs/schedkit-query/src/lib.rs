#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Declarative query specifications for booking entities.
//!
//! A [`Specification`] bundles a composed filter predicate, ordered
//! related-data include hints, a single sort definition and optional paging
//! bounds. Builders assemble specifications from optional caller parameters;
//! a downstream translator walks the finished value to produce an actual
//! data fetch.
//!
//! Predicates are a small tagged-union AST ([`Predicate`]) over named entity
//! properties rather than executable closures, so a translator can inspect
//! them. Entities resolve property names through [`Filterable`]; unknown
//! properties evaluate to `false` (fail-closed).
//!
//! The [`memory`] module is the reference translator: it applies a
//! specification to an in-memory slice and returns a page plus the total
//! match count.

pub mod entity;
pub mod memory;
pub mod predicate;
pub mod specification;

pub use entity::Filterable;
pub use memory::{PageResult, select};
pub use predicate::{Predicate, Value, combine};
pub use specification::{
    OrderBy, PageBounds, PageRequest, QueryError, SortDir, Specification,
};
