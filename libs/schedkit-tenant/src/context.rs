//! Tenant identity and the resolved tenant context.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error returned when a tenant id string is not a valid UUID.
#[derive(Debug, thiserror::Error)]
#[error("invalid tenant id: {0}")]
pub struct TenantIdError(#[from] uuid::Error);

/// Opaque tenant identifier.
///
/// The nil UUID is the explicit "unresolved" sentinel ([`TenantId::UNRESOLVED`]),
/// distinguishable from every real tenant and never conflated with an
/// `Option`-style absence: an unresolved id travels through the system as a
/// first-class value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TenantId(Uuid);

impl TenantId {
    /// The explicit "no tenant resolved" sentinel.
    pub const UNRESOLVED: TenantId = TenantId(Uuid::nil());

    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// `true` iff this id identifies an actual tenant (not the sentinel).
    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.0.is_nil()
    }

    #[inline]
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for TenantId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for TenantId {
    type Err = TenantIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which precedence tier produced a resolved tenant id.
///
/// Diagnostics only — control flow never branches on the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantSource {
    /// Explicitly pinned for the current unit of work.
    Override,
    /// Cached from an earlier resolution in the same unit of work.
    Cache,
    /// Verified authentication claim.
    Claim,
    /// Inbound request header.
    Header,
    /// No source yielded a value.
    Unresolved,
}

/// The outcome of one tenant resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantContext {
    tenant_id: TenantId,
    source: TenantSource,
}

impl TenantContext {
    /// A context carrying a resolved id from the given tier.
    #[must_use]
    pub const fn resolved(tenant_id: TenantId, source: TenantSource) -> Self {
        Self { tenant_id, source }
    }

    /// The sentinel context: nothing resolved.
    #[must_use]
    pub const fn unresolved() -> Self {
        Self {
            tenant_id: TenantId::UNRESOLVED,
            source: TenantSource::Unresolved,
        }
    }

    #[inline]
    #[must_use]
    pub const fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> TenantSource {
        self.source
    }

    /// `true` iff the resolved tenant id is not the sentinel.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.tenant_id.is_resolved()
    }
}

impl Default for TenantContext {
    fn default() -> Self {
        Self::unresolved()
    }
}
