//! Booking domain models exposed to the query layer.
//!
//! Each model implements [`schedkit_query::Filterable`] over a fixed set of
//! property names declared in its `fields` module; specification builders
//! and translators share those constants, so a property name has a single
//! source of truth per entity.

pub mod appointment;
pub mod customer;
pub mod employee;
pub mod service;
pub mod tenant;

pub use appointment::{Appointment, AppointmentStatus};
pub use customer::Customer;
pub use employee::Employee;
pub use service::ServiceOffering;
pub use tenant::TenantRecord;
