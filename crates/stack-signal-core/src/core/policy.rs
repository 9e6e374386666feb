// crates/stack-signal-core/src/core/policy.rs
// ============================================================================
// Module: Health Check Policy
// Description: Immutable configuration for the health gate.
// Purpose: Carry the gate URL, time budgets, and TLS verification toggle.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The health-check policy is constructed once at the configuration boundary
//! and passed by parameter into the gate; no component reads ambient process
//! state. The per-attempt timeout and retry interval are fixed constants at
//! the CLI boundary but travel as policy fields so the gate's timing logic is
//! testable with short budgets.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default ceiling on total time spent waiting for the health endpoint.
pub const DEFAULT_OVERALL_TIMEOUT: Duration = Duration::from_secs(300);

/// Fixed budget applied to each individual health probe request.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed sleep between health probe attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(5);

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Immutable configuration for the health gate.
///
/// # Invariants
/// - An absent `url` skips the gate entirely.
/// - `attempt_timeout` is a sub-budget of `overall_timeout`; each probe is
///   additionally clamped to the remaining overall budget.
/// - `tls_verify` is resolved once at client construction, never per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckPolicy {
    /// Health endpoint URL; `None` disables the gate.
    pub url: Option<String>,
    /// Ceiling on total time spent polling, including sleeps.
    pub overall_timeout: Duration,
    /// Budget applied to each individual probe request.
    pub attempt_timeout: Duration,
    /// Sleep between probe attempts.
    pub retry_interval: Duration,
    /// Whether to verify the endpoint's TLS certificate.
    pub tls_verify: bool,
}

impl HealthCheckPolicy {
    /// Returns true when a health endpoint is configured.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.url.is_some()
    }
}

impl Default for HealthCheckPolicy {
    fn default() -> Self {
        Self {
            url: None,
            overall_timeout: DEFAULT_OVERALL_TIMEOUT,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            retry_interval: DEFAULT_RETRY_INTERVAL,
            tls_verify: true,
        }
    }
}
