//! Per-entity specification builders.
//!
//! All builders share one contract:
//!
//! 1. Every present filter parameter contributes exactly one atomic
//!    predicate; absent (or blank, for search) parameters contribute
//!    nothing.
//! 2. A present free-text search term expands into an OR group of
//!    case-insensitive containment checks over the entity's documented
//!    search fields, then the group is conjoined with everything else.
//! 3. A resolved tenant id always contributes the tenant-equality predicate
//!    as the leading conjunct, whatever other filters are present or absent.
//!    No parameter combination produces a specification without tenant
//!    scoping while a tenant id was supplied.
//! 4. The `*_page_spec` decorators map the caller's sort key
//!    (case-insensitively) onto the entity's sortable fields; absent or
//!    unrecognized keys fall back to the entity's default field, ascending.
//!    Paging applies only when both `skip` and `take` are supplied.
//! 5. Builders never fail; invalid paging input degrades to "no paging"
//!    (logged at debug).

pub mod appointments;
pub mod customers;
pub mod employees;
pub mod services;
pub mod tenants;

use schedkit_query::{PageRequest, Predicate, Specification};
use schedkit_tenant::TenantId;

/// Tenant-equality predicate, or `None` when no tenant id was supplied.
fn tenant_criteria(property: &'static str, tenant_id: TenantId) -> Option<Predicate> {
    tenant_id
        .is_resolved()
        .then(|| Predicate::equals(property, tenant_id.as_uuid()))
}

/// OR group of case-insensitive containment checks over `properties`.
fn search_group(properties: &[&str], term: &str) -> Option<Predicate> {
    Predicate::any_of(
        properties
            .iter()
            .map(|property| Predicate::contains(*property, term))
            .collect(),
    )
}

/// A search term counts only when it has visible content.
fn search_term(search: Option<&str>) -> Option<&str> {
    search.map(str::trim).filter(|term| !term.is_empty())
}

/// Wrap composed criteria into a specification.
fn finish<E>(criteria: Option<Predicate>) -> Specification<E> {
    match criteria {
        Some(criteria) => Specification::with_criteria(criteria),
        None => Specification::new(),
    }
}

/// Apply the caller's paging bounds when, and only when, both are present.
fn apply_page_bounds<E>(spec: &mut Specification<E>, page: &PageRequest) {
    match (page.skip, page.take) {
        (Some(skip), Some(take)) if take > 0 => {
            // `take` is non-zero here.
            spec.apply_paging(skip, take).ok();
        }
        (Some(_), Some(_)) => {
            tracing::debug!("zero page size requested; treating as unpaged");
        }
        _ => {}
    }
}
