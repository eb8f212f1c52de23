//! Tenant context resolution with per-unit-of-work state.
//!
//! ## Precedence chain
//!
//! | Tier | Source | Notes |
//! |------|--------|-------|
//! | 1 | Override | pinned via [`TenantContextResolver::set_override`] |
//! | 2 | Cache | written through by tiers 3–4 within the same scope |
//! | 3 | Claim | verified authentication claim ([`TenantClaims`]) |
//! | 4 | Header | `x-tenant-id` request header ([`TenantHeaderSource`]) |
//! | — | Unresolved | explicit sentinel; never an error |
//!
//! Resolution stops at the first tier yielding a resolved (non-sentinel)
//! value. Claim and header hits are written through to the scope cache so
//! repeated calls within one operation are cheap and consistent. The
//! override and the cache live in separate slots and the override tier is
//! consulted first, so a later write-through can never mask an override.
//!
//! ## Scoping
//!
//! Override and cache state live in a `tokio::task_local!` cell installed by
//! [`TenantScope::run`] (or [`TenantScope::run_sync`]) — one cell per logical
//! unit of work, dropped when the scope ends. Concurrent tasks each get
//! their own cell and can never observe each other's override or cached
//! resolution; a process-wide mutable slot would leak tenants across
//! requests. Outside any scope, tiers 1–2 are simply empty and write-through
//! is skipped.

use std::cell::RefCell;
use std::sync::Arc;

use crate::claims::{TenantClaims, TenantHeaderSource};
use crate::context::{TenantContext, TenantId, TenantSource};

tokio::task_local! {
    static TENANT_SCOPE: RefCell<ScopeState>;
}

#[derive(Debug, Default)]
struct ScopeState {
    pinned: Option<TenantId>,
    cached: Option<TenantId>,
}

/// Unit-of-work boundary for tenant resolution state.
///
/// Wrap each inbound request or background task in a scope; everything the
/// resolver pins or caches lives exactly as long as the scope.
pub struct TenantScope;

impl TenantScope {
    /// Run `work` inside a fresh tenant scope.
    pub async fn run<F: Future>(work: F) -> F::Output {
        TENANT_SCOPE.scope(RefCell::new(ScopeState::default()), work).await
    }

    /// Synchronous variant of [`TenantScope::run`] for non-async units of
    /// work.
    pub fn run_sync<T>(work: impl FnOnce() -> T) -> T {
        TENANT_SCOPE.sync_scope(RefCell::new(ScopeState::default()), work)
    }

    /// Whether the current task is inside a tenant scope.
    #[must_use]
    pub fn is_active() -> bool {
        TENANT_SCOPE.try_with(|_| ()).is_ok()
    }
}

fn scope_pinned() -> Option<TenantId> {
    TENANT_SCOPE.try_with(|s| s.borrow().pinned).ok().flatten()
}

fn scope_cached() -> Option<TenantId> {
    TENANT_SCOPE.try_with(|s| s.borrow().cached).ok().flatten()
}

fn write_through(tenant_id: TenantId) {
    TENANT_SCOPE
        .try_with(|s| {
            s.borrow_mut().cached = Some(tenant_id);
        })
        .ok();
}

/// Resolves the active tenant id from the precedence chain above.
///
/// Cheap to construct; build one per unit of work from whatever claim and
/// request views the calling layer has. All real state lives in the
/// surrounding [`TenantScope`].
#[derive(Clone, Default)]
pub struct TenantContextResolver {
    claims: Option<Arc<dyn TenantClaims + Send + Sync>>,
    request: Option<Arc<dyn TenantHeaderSource + Send + Sync>>,
}

impl TenantContextResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the verified-claims view (tier 3).
    #[must_use]
    pub fn with_claims(mut self, claims: Arc<dyn TenantClaims + Send + Sync>) -> Self {
        self.claims = Some(claims);
        self
    }

    /// Attach the inbound-request view (tier 4).
    #[must_use]
    pub fn with_request(mut self, request: Arc<dyn TenantHeaderSource + Send + Sync>) -> Self {
        self.request = Some(request);
        self
    }

    /// Walk the precedence chain and return the resulting context.
    ///
    /// Never fails: when no tier yields a value the sentinel context is
    /// returned and the calling layer decides whether to reject or proceed
    /// on a public path.
    #[must_use]
    pub fn resolve(&self) -> TenantContext {
        if let Some(id) = scope_pinned() {
            return TenantContext::resolved(id, TenantSource::Override);
        }
        if let Some(id) = scope_cached() {
            return TenantContext::resolved(id, TenantSource::Cache);
        }
        if let Some(id) = self.claim_tenant() {
            tracing::debug!(tenant_id = %id, "tenant resolved from verified claim");
            write_through(id);
            return TenantContext::resolved(id, TenantSource::Claim);
        }
        if let Some(id) = self.header_tenant() {
            tracing::debug!(tenant_id = %id, "tenant resolved from request header");
            write_through(id);
            return TenantContext::resolved(id, TenantSource::Header);
        }
        TenantContext::unresolved()
    }

    /// Pin the tenant for the remainder of the current unit of work.
    ///
    /// Other concurrent units of work are unaffected. Pinning the sentinel
    /// is ignored — an override must carry a value. Outside an active scope
    /// there is nothing to pin to and the call is dropped with a warning.
    pub fn set_override(&self, tenant_id: TenantId) {
        if !tenant_id.is_resolved() {
            tracing::debug!("ignoring tenant override carrying the unresolved sentinel");
            return;
        }
        let applied = TENANT_SCOPE
            .try_with(|s| {
                s.borrow_mut().pinned = Some(tenant_id);
            })
            .is_ok();
        if !applied {
            tracing::warn!(
                tenant_id = %tenant_id,
                "tenant override set outside an active scope; dropped"
            );
        }
    }

    /// `true` iff resolution currently yields a non-sentinel tenant id.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.resolve().is_valid()
    }

    fn claim_tenant(&self) -> Option<TenantId> {
        self.claims
            .as_deref()
            .and_then(TenantClaims::tenant_claim)
            .filter(TenantId::is_resolved)
    }

    fn header_tenant(&self) -> Option<TenantId> {
        let raw = self.request.as_deref()?.tenant_header()?;
        match raw.trim().parse::<TenantId>() {
            Ok(id) if id.is_resolved() => Some(id),
            Ok(_) => {
                tracing::debug!("tenant header carried the nil id; ignoring");
                None
            }
            Err(err) => {
                tracing::debug!(%err, "malformed tenant header; ignoring");
                None
            }
        }
    }
}

impl std::fmt::Debug for TenantContextResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantContextResolver")
            .field("has_claims", &self.claims.is_some())
            .field("has_request", &self.request.is_some())
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::claims::VerifiedClaims;
    use uuid::Uuid;

    const T1: &str = "11111111-1111-1111-1111-111111111111";
    const T2: &str = "22222222-2222-2222-2222-222222222222";
    const T3: &str = "33333333-3333-3333-3333-333333333333";
    const T4: &str = "44444444-4444-4444-4444-444444444444";

    fn tenant(s: &str) -> TenantId {
        s.parse().unwrap()
    }

    fn claims_resolver(tenant_id: TenantId) -> TenantContextResolver {
        TenantContextResolver::new().with_claims(Arc::new(VerifiedClaims::new(
            Uuid::new_v4(),
            Some(tenant_id),
        )))
    }

    struct FixedHeader(&'static str);

    impl TenantHeaderSource for FixedHeader {
        fn tenant_header(&self) -> Option<String> {
            Some(self.0.to_owned())
        }
    }

    #[test]
    fn override_beats_cache_beats_claim_beats_header() {
        TenantScope::run_sync(|| {
            // Prime the cache with T2 via a claim-backed resolution.
            let ctx = claims_resolver(tenant(T2)).resolve();
            assert_eq!(ctx.source(), TenantSource::Claim);

            // A different resolver with claim T3 and header T4 now sees the
            // cached T2.
            let resolver = claims_resolver(tenant(T3))
                .with_request(Arc::new(FixedHeader(T4)));
            let ctx = resolver.resolve();
            assert_eq!(ctx.tenant_id(), tenant(T2));
            assert_eq!(ctx.source(), TenantSource::Cache);

            // An override trumps everything for the rest of the scope.
            resolver.set_override(tenant(T1));
            let ctx = resolver.resolve();
            assert_eq!(ctx.tenant_id(), tenant(T1));
            assert_eq!(ctx.source(), TenantSource::Override);
        });
    }

    #[test]
    fn claim_tier_wins_over_header_in_fresh_scope() {
        TenantScope::run_sync(|| {
            let resolver = claims_resolver(tenant(T3))
                .with_request(Arc::new(FixedHeader(T4)));
            let ctx = resolver.resolve();
            assert_eq!(ctx.tenant_id(), tenant(T3));
            assert_eq!(ctx.source(), TenantSource::Claim);
        });
    }

    #[test]
    fn header_is_the_last_resort() {
        TenantScope::run_sync(|| {
            let resolver =
                TenantContextResolver::new().with_request(Arc::new(FixedHeader(T4)));
            let ctx = resolver.resolve();
            assert_eq!(ctx.tenant_id(), tenant(T4));
            assert_eq!(ctx.source(), TenantSource::Header);
            assert!(resolver.is_valid());
        });
    }

    #[test]
    fn nothing_present_yields_the_sentinel() {
        TenantScope::run_sync(|| {
            let resolver = TenantContextResolver::new();
            let ctx = resolver.resolve();
            assert!(!ctx.is_valid());
            assert_eq!(ctx.tenant_id(), TenantId::UNRESOLVED);
            assert_eq!(ctx.source(), TenantSource::Unresolved);
            assert!(!resolver.is_valid());
        });
    }

    #[test]
    fn write_through_caches_lower_tier_hits() {
        TenantScope::run_sync(|| {
            let ctx = claims_resolver(tenant(T3)).resolve();
            assert_eq!(ctx.source(), TenantSource::Claim);

            // Same scope, claims gone: the cache answers.
            let ctx = TenantContextResolver::new().resolve();
            assert_eq!(ctx.tenant_id(), tenant(T3));
            assert_eq!(ctx.source(), TenantSource::Cache);
        });
    }

    #[test]
    fn write_through_never_masks_an_override() {
        TenantScope::run_sync(|| {
            let resolver = claims_resolver(tenant(T2));
            assert_eq!(resolver.resolve().source(), TenantSource::Claim);
            resolver.set_override(tenant(T1));

            // Resolving via a claim-bearing resolver again cannot displace
            // the pin; the cache slot still holds the earlier claim hit.
            assert_eq!(resolver.resolve().tenant_id(), tenant(T1));
            let cached = TENANT_SCOPE.try_with(|s| s.borrow().cached).unwrap();
            assert_eq!(cached, Some(tenant(T2)));
            assert_eq!(resolver.resolve().source(), TenantSource::Override);
        });
    }

    #[test]
    fn sentinel_override_is_ignored() {
        TenantScope::run_sync(|| {
            let resolver = claims_resolver(tenant(T3));
            resolver.set_override(TenantId::UNRESOLVED);
            assert_eq!(resolver.resolve().source(), TenantSource::Claim);
        });
    }

    #[test]
    fn malformed_or_nil_headers_are_ignored() {
        TenantScope::run_sync(|| {
            let resolver = TenantContextResolver::new()
                .with_request(Arc::new(FixedHeader("not-a-uuid")));
            assert!(!resolver.resolve().is_valid());

            let resolver = TenantContextResolver::new().with_request(Arc::new(
                FixedHeader("00000000-0000-0000-0000-000000000000"),
            ));
            assert!(!resolver.resolve().is_valid());
        });
    }

    #[test]
    fn outside_a_scope_nothing_pins_or_caches() {
        assert!(!TenantScope::is_active());

        let resolver = claims_resolver(tenant(T3));
        resolver.set_override(tenant(T1)); // dropped with a warning

        // Tier 3 still answers, but nothing was cached or pinned.
        let ctx = resolver.resolve();
        assert_eq!(ctx.source(), TenantSource::Claim);
        let ctx = resolver.resolve();
        assert_eq!(ctx.source(), TenantSource::Claim);
    }

    #[test]
    fn sequential_scopes_start_fresh() {
        TenantScope::run_sync(|| {
            claims_resolver(tenant(T2)).set_override(tenant(T1));
        });
        TenantScope::run_sync(|| {
            let ctx = TenantContextResolver::new().resolve();
            assert!(!ctx.is_valid());
        });
    }
}
