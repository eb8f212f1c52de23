use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schedkit_query::{Filterable, Value};
use schedkit_tenant::TenantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query-layer property names for [`ServiceOffering`].
pub mod fields {
    pub const TENANT_ID: &str = "tenant_id";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const DURATION_MINUTES: &str = "duration_minutes";
    pub const PRICE: &str = "price";
    pub const ACTIVE: &str = "active";
    pub const CREATED_AT: &str = "created_at";
}

/// A bookable service in a tenant's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub name: String,
    pub description: String,
    pub duration_minutes: i64,
    pub price: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Filterable for ServiceOffering {
    fn property(&self, name: &str) -> Option<Value> {
        match name {
            fields::TENANT_ID => Some(self.tenant_id.as_uuid().into()),
            fields::NAME => Some(self.name.as_str().into()),
            fields::DESCRIPTION => Some(self.description.as_str().into()),
            fields::DURATION_MINUTES => Some(self.duration_minutes.into()),
            fields::PRICE => Some(self.price.into()),
            fields::ACTIVE => Some(self.active.into()),
            fields::CREATED_AT => Some(self.created_at.into()),
            _ => None,
        }
    }
}
