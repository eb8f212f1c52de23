//! Customer list specifications.

use schedkit_query::{PageRequest, Predicate, SortDir, Specification, combine};
use schedkit_tenant::TenantId;

use super::{apply_page_bounds, finish, search_group, search_term, tenant_criteria};
use crate::model::customer::{Customer, fields};

/// Fields searched by the customer free-text filter.
const SEARCH_FIELDS: &[&str] = &[
    fields::FIRST_NAME,
    fields::LAST_NAME,
    fields::EMAIL,
    fields::PHONE,
];

/// Optional filters accepted by customer listings.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    /// Free-text search over name, email and phone.
    pub search: Option<String>,
    /// Restrict to active (or inactive) customers.
    pub active: Option<bool>,
}

/// Sortable customer fields. `FirstName` is the documented default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomerSortField {
    #[default]
    FirstName,
    LastName,
    Email,
    CreatedAt,
}

impl CustomerSortField {
    /// Case-insensitive sort-key lookup; `None` for unrecognized keys.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "firstname" | "first_name" => Some(Self::FirstName),
            "lastname" | "last_name" => Some(Self::LastName),
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
            Self::Email => fields::EMAIL,
            Self::CreatedAt => fields::CREATED_AT,
        }
    }
}

/// Filter-only customer specification.
#[must_use]
pub fn customer_spec(tenant_id: TenantId, filter: &CustomerFilter) -> Specification<Customer> {
    let mut criteria = tenant_criteria(fields::TENANT_ID, tenant_id);
    if let Some(term) = search_term(filter.search.as_deref()) {
        criteria = combine(criteria, search_group(SEARCH_FIELDS, term));
    }
    if let Some(active) = filter.active {
        criteria = combine(criteria, Some(Predicate::equals(fields::ACTIVE, active)));
    }
    finish(criteria)
}

/// Sorted and optionally paged customer specification.
#[must_use]
pub fn customer_page_spec(
    tenant_id: TenantId,
    filter: &CustomerFilter,
    page: &PageRequest,
) -> Specification<Customer> {
    let mut spec = customer_spec(tenant_id, filter);
    match page.sort_by.as_deref().and_then(CustomerSortField::parse) {
        Some(field) => match page.direction() {
            SortDir::Asc => spec.apply_order_by(field.property()),
            SortDir::Desc => spec.apply_order_by_descending(field.property()),
        },
        None => spec.apply_order_by(CustomerSortField::default().property()),
    }
    apply_page_bounds(&mut spec, page);
    spec
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn tenant() -> TenantId {
        TenantId::new(Uuid::new_v4())
    }

    fn conjuncts(spec: &Specification<Customer>) -> Vec<&Predicate> {
        match spec.criteria() {
            Some(Predicate::And(parts)) => parts.iter().collect(),
            Some(other) => vec![other],
            None => Vec::new(),
        }
    }

    #[test]
    fn no_parameters_yields_no_criteria() {
        let spec = customer_spec(TenantId::UNRESOLVED, &CustomerFilter::default());
        assert!(spec.criteria().is_none());
    }

    #[test]
    fn tenant_predicate_leads_every_combination() {
        let tid = tenant();
        let filters = [
            CustomerFilter::default(),
            CustomerFilter {
                search: Some("ali".to_owned()),
                ..CustomerFilter::default()
            },
            CustomerFilter {
                active: Some(true),
                ..CustomerFilter::default()
            },
            CustomerFilter {
                search: Some("ali".to_owned()),
                active: Some(false),
            },
        ];

        for filter in &filters {
            let spec = customer_spec(tid, filter);
            let first = conjuncts(&spec)[0];
            assert_eq!(
                first,
                &Predicate::equals(fields::TENANT_ID, tid.as_uuid()),
                "tenant predicate missing for {filter:?}"
            );
        }
    }

    #[test]
    fn blank_search_contributes_nothing() {
        let tid = tenant();
        let filter = CustomerFilter {
            search: Some("   ".to_owned()),
            ..CustomerFilter::default()
        };
        let spec = customer_spec(tid, &filter);
        assert_eq!(conjuncts(&spec).len(), 1);
    }

    #[test]
    fn search_expands_into_an_or_group() {
        let spec = customer_spec(
            TenantId::UNRESOLVED,
            &CustomerFilter {
                search: Some("ali".to_owned()),
                ..CustomerFilter::default()
            },
        );
        match spec.criteria().unwrap() {
            Predicate::Or(parts) => assert_eq!(parts.len(), SEARCH_FIELDS.len()),
            other => panic!("expected OR group, got {other:?}"),
        }
    }

    #[test]
    fn unknown_sort_key_falls_back_to_first_name_ascending() {
        let page = PageRequest {
            sort_by: Some("shoe_size".to_owned()),
            ascending: false,
            ..PageRequest::default()
        };
        let spec = customer_page_spec(tenant(), &CustomerFilter::default(), &page);
        let order = spec.order().unwrap();
        assert_eq!(order.field, fields::FIRST_NAME);
        assert_eq!(order.dir, SortDir::Asc);
    }

    #[test]
    fn recognized_sort_key_keeps_requested_direction() {
        let page = PageRequest {
            sort_by: Some("LastName".to_owned()),
            ascending: false,
            ..PageRequest::default()
        };
        let spec = customer_page_spec(tenant(), &CustomerFilter::default(), &page);
        let order = spec.order().unwrap();
        assert_eq!(order.field, fields::LAST_NAME);
        assert_eq!(order.dir, SortDir::Desc);
    }

    #[test]
    fn lone_paging_bound_requests_no_paging() {
        let only_skip = PageRequest {
            skip: Some(10),
            ..PageRequest::default()
        };
        let spec = customer_page_spec(tenant(), &CustomerFilter::default(), &only_skip);
        assert!(!spec.is_paged());

        let only_take = PageRequest {
            take: Some(10),
            ..PageRequest::default()
        };
        let spec = customer_page_spec(tenant(), &CustomerFilter::default(), &only_take);
        assert!(!spec.is_paged());

        let both = PageRequest {
            skip: Some(10),
            take: Some(5),
            ..PageRequest::default()
        };
        let spec = customer_page_spec(tenant(), &CustomerFilter::default(), &both);
        assert!(spec.is_paged());
    }
}
