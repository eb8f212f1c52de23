//! Appointment list specifications.

use chrono::{DateTime, Utc};
use schedkit_query::{PageRequest, Predicate, SortDir, Specification, combine};
use schedkit_tenant::TenantId;
use uuid::Uuid;

use super::{apply_page_bounds, finish, tenant_criteria};
use crate::model::appointment::{Appointment, AppointmentStatus, fields, relations};

/// Optional filters accepted by appointment listings. Appointments carry no
/// free-text search; everything narrows by id, status or time.
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub customer_id: Option<Uuid>,
    pub employee_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    pub status: Option<AppointmentStatus>,
    /// Keep appointments starting at or after this instant.
    pub starts_after: Option<DateTime<Utc>>,
    /// Keep appointments starting at or before this instant.
    pub starts_before: Option<DateTime<Utc>>,
}

/// Sortable appointment fields. `StartTime` is the documented default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppointmentSortField {
    #[default]
    StartTime,
    EndTime,
    CreatedAt,
}

impl AppointmentSortField {
    /// Case-insensitive sort-key lookup; `None` for unrecognized keys.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "starttime" | "start_time" => Some(Self::StartTime),
            "endtime" | "end_time" => Some(Self::EndTime),
            "createdat" | "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::StartTime => fields::START_TIME,
            Self::EndTime => fields::END_TIME,
            Self::CreatedAt => fields::CREATED_AT,
        }
    }
}

/// Filter-only appointment specification.
///
/// Consumers render appointments together with the people and service they
/// reference, so the builder records the corresponding include hints.
#[must_use]
pub fn appointment_spec(
    tenant_id: TenantId,
    filter: &AppointmentFilter,
) -> Specification<Appointment> {
    let mut criteria = tenant_criteria(fields::TENANT_ID, tenant_id);
    if let Some(id) = filter.customer_id {
        criteria = combine(criteria, Some(Predicate::equals(fields::CUSTOMER_ID, id)));
    }
    if let Some(id) = filter.employee_id {
        criteria = combine(criteria, Some(Predicate::equals(fields::EMPLOYEE_ID, id)));
    }
    if let Some(id) = filter.service_id {
        criteria = combine(criteria, Some(Predicate::equals(fields::SERVICE_ID, id)));
    }
    if let Some(status) = filter.status {
        criteria = combine(
            criteria,
            Some(Predicate::equals(fields::STATUS, status.as_str())),
        );
    }
    if let Some(from) = filter.starts_after {
        criteria = combine(
            criteria,
            Some(Predicate::greater_or_equal(fields::START_TIME, from)),
        );
    }
    if let Some(to) = filter.starts_before {
        criteria = combine(
            criteria,
            Some(Predicate::less_or_equal(fields::START_TIME, to)),
        );
    }

    let mut spec = finish(criteria);
    for relation in [relations::CUSTOMER, relations::EMPLOYEE, relations::SERVICE] {
        spec.add_include(relation);
    }
    spec
}

/// Sorted and optionally paged appointment specification.
#[must_use]
pub fn appointment_page_spec(
    tenant_id: TenantId,
    filter: &AppointmentFilter,
    page: &PageRequest,
) -> Specification<Appointment> {
    let mut spec = appointment_spec(tenant_id, filter);
    match page.sort_by.as_deref().and_then(AppointmentSortField::parse) {
        Some(field) => match page.direction() {
            SortDir::Asc => spec.apply_order_by(field.property()),
            SortDir::Desc => spec.apply_order_by_descending(field.property()),
        },
        None => spec.apply_order_by(AppointmentSortField::default().property()),
    }
    apply_page_bounds(&mut spec, page);
    spec
}
