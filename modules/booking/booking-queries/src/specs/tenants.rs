//! Tenant directory specifications (admin surface).

use schedkit_query::{PageRequest, Predicate, SortDir, Specification, combine};
use schedkit_tenant::TenantId;

use super::{apply_page_bounds, finish, search_group, search_term, tenant_criteria};
use crate::model::tenant::{TenantRecord, fields};

/// Fields searched by the tenant free-text filter.
const SEARCH_FIELDS: &[&str] = &[fields::NAME, fields::CONTACT_EMAIL];

/// Optional filters accepted by tenant listings.
#[derive(Debug, Clone, Default)]
pub struct TenantFilter {
    /// Free-text search over name and contact email.
    pub search: Option<String>,
    /// Restrict to active (or suspended) tenants.
    pub active: Option<bool>,
}

/// Sortable tenant fields. `Name` is the documented default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TenantSortField {
    #[default]
    Name,
    CreatedAt,
}

impl TenantSortField {
    /// Case-insensitive sort-key lookup; `None` for unrecognized keys.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "createdat" | "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::Name => fields::NAME,
            Self::CreatedAt => fields::CREATED_AT,
        }
    }
}

/// Filter-only tenant specification.
///
/// A tenant record has no foreign tenant column; a supplied tenant id scopes
/// the record's own id instead, so a tenant-pinned caller can only ever see
/// itself.
#[must_use]
pub fn tenant_spec(tenant_id: TenantId, filter: &TenantFilter) -> Specification<TenantRecord> {
    let mut criteria = tenant_criteria(fields::ID, tenant_id);
    if let Some(term) = search_term(filter.search.as_deref()) {
        criteria = combine(criteria, search_group(SEARCH_FIELDS, term));
    }
    if let Some(active) = filter.active {
        criteria = combine(criteria, Some(Predicate::equals(fields::ACTIVE, active)));
    }
    finish(criteria)
}

/// Sorted and optionally paged tenant specification.
#[must_use]
pub fn tenant_page_spec(
    tenant_id: TenantId,
    filter: &TenantFilter,
    page: &PageRequest,
) -> Specification<TenantRecord> {
    let mut spec = tenant_spec(tenant_id, filter);
    match page.sort_by.as_deref().and_then(TenantSortField::parse) {
        Some(field) => match page.direction() {
            SortDir::Asc => spec.apply_order_by(field.property()),
            SortDir::Desc => spec.apply_order_by_descending(field.property()),
        },
        None => spec.apply_order_by(TenantSortField::default().property()),
    }
    apply_page_bounds(&mut spec, page);
    spec
}
