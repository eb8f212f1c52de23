//! Service catalog specifications.

use schedkit_query::{PageRequest, Predicate, SortDir, Specification, combine};
use schedkit_tenant::TenantId;

use super::{apply_page_bounds, finish, search_group, search_term, tenant_criteria};
use crate::model::service::{ServiceOffering, fields};

/// Fields searched by the service free-text filter.
const SEARCH_FIELDS: &[&str] = &[fields::NAME, fields::DESCRIPTION];

/// Optional filters accepted by service-catalog listings.
#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    /// Free-text search over name and description.
    pub search: Option<String>,
    /// Restrict to active (or retired) services.
    pub active: Option<bool>,
}

/// Sortable service fields. `Name` is the documented default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServiceSortField {
    #[default]
    Name,
    Price,
    Duration,
    CreatedAt,
}

impl ServiceSortField {
    /// Case-insensitive sort-key lookup; `None` for unrecognized keys.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "duration" | "duration_minutes" => Some(Self::Duration),
            "createdat" | "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::Name => fields::NAME,
            Self::Price => fields::PRICE,
            Self::Duration => fields::DURATION_MINUTES,
            Self::CreatedAt => fields::CREATED_AT,
        }
    }
}

/// Filter-only service specification.
#[must_use]
pub fn service_spec(
    tenant_id: TenantId,
    filter: &ServiceFilter,
) -> Specification<ServiceOffering> {
    let mut criteria = tenant_criteria(fields::TENANT_ID, tenant_id);
    if let Some(term) = search_term(filter.search.as_deref()) {
        criteria = combine(criteria, search_group(SEARCH_FIELDS, term));
    }
    if let Some(active) = filter.active {
        criteria = combine(criteria, Some(Predicate::equals(fields::ACTIVE, active)));
    }
    finish(criteria)
}

/// Sorted and optionally paged service specification.
#[must_use]
pub fn service_page_spec(
    tenant_id: TenantId,
    filter: &ServiceFilter,
    page: &PageRequest,
) -> Specification<ServiceOffering> {
    let mut spec = service_spec(tenant_id, filter);
    match page.sort_by.as_deref().and_then(ServiceSortField::parse) {
        Some(field) => match page.direction() {
            SortDir::Asc => spec.apply_order_by(field.property()),
            SortDir::Desc => spec.apply_order_by_descending(field.property()),
        },
        None => spec.apply_order_by(ServiceSortField::default().property()),
    }
    apply_page_bounds(&mut spec, page);
    spec
}
