//! Employee list specifications.

use schedkit_query::{PageRequest, Predicate, SortDir, Specification, combine};
use schedkit_tenant::TenantId;

use super::{apply_page_bounds, finish, search_group, search_term, tenant_criteria};
use crate::model::employee::{Employee, fields};

/// Fields searched by the employee free-text filter.
const SEARCH_FIELDS: &[&str] = &[
    fields::FIRST_NAME,
    fields::LAST_NAME,
    fields::EMAIL,
    fields::PHONE,
];

/// Optional filters accepted by employee listings.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Free-text search over name, email and phone.
    pub search: Option<String>,
    /// Restrict to active (or inactive) employees.
    pub active: Option<bool>,
}

/// Sortable employee fields. `FirstName` is the documented default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmployeeSortField {
    #[default]
    FirstName,
    LastName,
    Title,
    Email,
    CreatedAt,
}

impl EmployeeSortField {
    /// Case-insensitive sort-key lookup; `None` for unrecognized keys.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "firstname" | "first_name" => Some(Self::FirstName),
            "lastname" | "last_name" => Some(Self::LastName),
            "title" => Some(Self::Title),
            "email" => Some(Self::Email),
            "createdat" | "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::FirstName => fields::FIRST_NAME,
            Self::LastName => fields::LAST_NAME,
            Self::Title => fields::TITLE,
            Self::Email => fields::EMAIL,
            Self::CreatedAt => fields::CREATED_AT,
        }
    }
}

/// Filter-only employee specification.
#[must_use]
pub fn employee_spec(tenant_id: TenantId, filter: &EmployeeFilter) -> Specification<Employee> {
    let mut criteria = tenant_criteria(fields::TENANT_ID, tenant_id);
    if let Some(term) = search_term(filter.search.as_deref()) {
        criteria = combine(criteria, search_group(SEARCH_FIELDS, term));
    }
    if let Some(active) = filter.active {
        criteria = combine(criteria, Some(Predicate::equals(fields::ACTIVE, active)));
    }
    finish(criteria)
}

/// Sorted and optionally paged employee specification.
#[must_use]
pub fn employee_page_spec(
    tenant_id: TenantId,
    filter: &EmployeeFilter,
    page: &PageRequest,
) -> Specification<Employee> {
    let mut spec = employee_spec(tenant_id, filter);
    match page.sort_by.as_deref().and_then(EmployeeSortField::parse) {
        Some(field) => match page.direction() {
            SortDir::Asc => spec.apply_order_by(field.property()),
            SortDir::Desc => spec.apply_order_by_descending(field.property()),
        },
        None => spec.apply_order_by(EmployeeSortField::default().property()),
    }
    apply_page_bounds(&mut spec, page);
    spec
}
