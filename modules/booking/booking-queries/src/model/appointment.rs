use chrono::{DateTime, Utc};
use schedkit_query::{Filterable, Value};
use schedkit_tenant::TenantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query-layer property names for [`Appointment`].
pub mod fields {
    pub const TENANT_ID: &str = "tenant_id";
    pub const CUSTOMER_ID: &str = "customer_id";
    pub const EMPLOYEE_ID: &str = "employee_id";
    pub const SERVICE_ID: &str = "service_id";
    pub const STATUS: &str = "status";
    pub const START_TIME: &str = "start_time";
    pub const END_TIME: &str = "end_time";
    pub const CREATED_AT: &str = "created_at";
}

/// Related-data include hints understood by appointment consumers.
pub mod relations {
    pub const CUSTOMER: &str = "customer";
    pub const EMPLOYEE: &str = "employee";
    pub const SERVICE: &str = "service";
}

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    /// Stable string form used by the status filter predicate.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booked time slot tying a customer, an employee and a service together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub customer_id: Uuid,
    pub employee_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Filterable for Appointment {
    fn property(&self, name: &str) -> Option<Value> {
        match name {
            fields::TENANT_ID => Some(self.tenant_id.as_uuid().into()),
            fields::CUSTOMER_ID => Some(self.customer_id.into()),
            fields::EMPLOYEE_ID => Some(self.employee_id.into()),
            fields::SERVICE_ID => Some(self.service_id.into()),
            fields::STATUS => Some(self.status.as_str().into()),
            fields::START_TIME => Some(self.start_time.into()),
            fields::END_TIME => Some(self.end_time.into()),
            fields::CREATED_AT => Some(self.created_at.into()),
            _ => None,
        }
    }
}
