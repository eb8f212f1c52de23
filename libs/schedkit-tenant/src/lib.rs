#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Tenant identity and ambient tenant-context resolution.
//!
//! Every piece of data in the booking platform is scoped to a tenant. This
//! crate answers the question "which tenant is the current operation acting
//! as": [`TenantContextResolver`] walks a fixed precedence chain (override →
//! cache → verified claim → request header) and returns a [`TenantContext`]
//! carrying either a real [`TenantId`] or the explicit unresolved sentinel —
//! never an error, never a bare null.
//!
//! Resolution state is isolated per logical unit of work via [`TenantScope`],
//! so concurrent requests can never observe each other's override or cached
//! tenant.

pub mod claims;
pub mod context;
pub mod resolver;

pub use claims::{TENANT_ID_HEADER, TenantClaims, TenantHeaderSource, VerifiedClaims};
pub use context::{TenantContext, TenantId, TenantIdError, TenantSource};
pub use resolver::{TenantContextResolver, TenantScope};
