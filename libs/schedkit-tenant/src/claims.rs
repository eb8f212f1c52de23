//! Collaborator seams the resolver reads tenant hints from.
//!
//! Token verification happens upstream (out of scope here); by the time a
//! claims value reaches this crate it is already trusted. The header seam is
//! the untrusted fallback for flows that cannot carry a verified claim.

use http::HeaderMap;
use uuid::Uuid;

use crate::context::TenantId;

/// Request header consulted by the lowest-precedence resolution tier.
pub const TENANT_ID_HEADER: &str = "x-tenant-id";

/// Read-only view of the caller's verified authentication claims.
pub trait TenantClaims {
    /// The tenant claim, if the token carried one.
    fn tenant_claim(&self) -> Option<TenantId>;
}

/// Minimal verified-claims carrier for callers that do not bring their own
/// claims type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedClaims {
    pub subject_id: Uuid,
    pub tenant_id: Option<TenantId>,
}

impl VerifiedClaims {
    #[must_use]
    pub fn new(subject_id: Uuid, tenant_id: Option<TenantId>) -> Self {
        Self {
            subject_id,
            tenant_id,
        }
    }
}

impl TenantClaims for VerifiedClaims {
    fn tenant_claim(&self) -> Option<TenantId> {
        self.tenant_id
    }
}

/// Read-only view of an inbound request's tenant header.
pub trait TenantHeaderSource {
    /// Raw value of the tenant header, if present.
    fn tenant_header(&self) -> Option<String>;
}

impl TenantHeaderSource for HeaderMap {
    fn tenant_header(&self) -> Option<String> {
        self.get(TENANT_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn header_map_exposes_tenant_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            TENANT_ID_HEADER,
            HeaderValue::from_static("0c3c5c80-58e7-4f95-9b51-4a37b0b1c2d3"),
        );
        assert_eq!(
            headers.tenant_header().as_deref(),
            Some("0c3c5c80-58e7-4f95-9b51-4a37b0b1c2d3")
        );
    }

    #[test]
    fn missing_header_is_none() {
        assert!(HeaderMap::new().tenant_header().is_none());
    }

    #[test]
    fn claims_without_tenant_yield_none() {
        let claims = VerifiedClaims::new(Uuid::new_v4(), None);
        assert!(claims.tenant_claim().is_none());
    }
}
