#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Query specification builders for the booking domain.
//!
//! One builder family per business entity (customers, employees, services,
//! tenants, appointments). Each family turns a set of optional caller
//! parameters into a [`schedkit_query::Specification`]: atomic predicates
//! for the present parameters, an OR group for free-text search, and —
//! whenever a resolved tenant id is supplied — an unconditional
//! tenant-equality predicate. A paging/sorting decorator per entity maps
//! caller sort keys onto a fixed set of sortable fields.
//!
//! The tenant id normally comes from
//! [`schedkit_tenant::TenantContextResolver`]; handing the builders the
//! unresolved sentinel skips tenant scoping, which is reserved for
//! platform-admin flows.

pub mod model;
pub mod specs;

pub use model::{Appointment, AppointmentStatus, Customer, Employee, ServiceOffering, TenantRecord};
pub use specs::appointments::{
    AppointmentFilter, AppointmentSortField, appointment_page_spec, appointment_spec,
};
pub use specs::customers::{CustomerFilter, CustomerSortField, customer_page_spec, customer_spec};
pub use specs::employees::{EmployeeFilter, EmployeeSortField, employee_page_spec, employee_spec};
pub use specs::services::{ServiceFilter, ServiceSortField, service_page_spec, service_spec};
pub use specs::tenants::{TenantFilter, TenantSortField, tenant_page_spec, tenant_spec};
