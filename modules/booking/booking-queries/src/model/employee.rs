use chrono::{DateTime, Utc};
use schedkit_query::{Filterable, Value};
use schedkit_tenant::TenantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query-layer property names for [`Employee`].
pub mod fields {
    pub const TENANT_ID: &str = "tenant_id";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const TITLE: &str = "title";
    pub const ACTIVE: &str = "active";
    pub const CREATED_AT: &str = "created_at";
}

/// A staff member who delivers services for a tenant's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Job title shown on the booking page (e.g. "Senior Stylist").
    pub title: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Filterable for Employee {
    fn property(&self, name: &str) -> Option<Value> {
        match name {
            fields::TENANT_ID => Some(self.tenant_id.as_uuid().into()),
            fields::FIRST_NAME => Some(self.first_name.as_str().into()),
            fields::LAST_NAME => Some(self.last_name.as_str().into()),
            fields::EMAIL => Some(self.email.as_str().into()),
            fields::PHONE => Some(self.phone.as_str().into()),
            fields::TITLE => Some(self.title.as_str().into()),
            fields::ACTIVE => Some(self.active.into()),
            fields::CREATED_AT => Some(self.created_at.into()),
            _ => None,
        }
    }
}
