use chrono::{DateTime, Utc};
use schedkit_query::{Filterable, Value};
use schedkit_tenant::TenantId;
use serde::{Deserialize, Serialize};

/// Query-layer property names for [`TenantRecord`].
pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const CONTACT_EMAIL: &str = "contact_email";
    pub const ACTIVE: &str = "active";
    pub const CREATED_AT: &str = "created_at";
}

/// A tenant (business) registered on the platform, as listed by the admin
/// surface. Unlike the other entities a tenant record is not scoped by a
/// foreign tenant column; scoping applies to its own id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantRecord {
    pub id: TenantId,
    pub name: String,
    pub contact_email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Filterable for TenantRecord {
    fn property(&self, name: &str) -> Option<Value> {
        match name {
            fields::ID => Some(self.id.as_uuid().into()),
            fields::NAME => Some(self.name.as_str().into()),
            fields::CONTACT_EMAIL => Some(self.contact_email.as_str().into()),
            fields::ACTIVE => Some(self.active.into()),
            fields::CREATED_AT => Some(self.created_at.into()),
            _ => None,
        }
    }
}
