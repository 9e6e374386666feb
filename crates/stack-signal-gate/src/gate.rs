// crates/stack-signal-gate/src/gate.rs
// ============================================================================
// Module: Health Gate
// Description: Bounded HTTP polling under dual time budgets.
// Purpose: Block the pipeline until the application reports itself healthy.
// Dependencies: stack-signal-core, reqwest, tracing
// ============================================================================

//! ## Overview
//! Two nested budgets govern the gate. The overall deadline is a ceiling on
//! total gate time, including sleeps; lapsing it is fatal. The per-attempt
//! budget bounds each individual GET and is itself clamped to the remaining
//! overall budget; its expiry is logged and retried like any other transient
//! probe failure. TLS certificate verification is resolved once at client
//! construction, never re-evaluated per attempt.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::thread;
use std::time::Duration;
use std::time::Instant;

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use stack_signal_core::GateError;
use stack_signal_core::HealthCheckPolicy;
use stack_signal_core::ReadinessGate;
use thiserror::Error;
use tracing::info;
use tracing::warn;

// ============================================================================
// SECTION: Probe Failures
// ============================================================================

/// Transient failure of one probe attempt. Never escapes the gate; it is
/// logged at warning level and retried.
#[derive(Debug, Error)]
enum ProbeFailure {
    /// The endpoint answered with a non-200 status.
    #[error("endpoint returned status {0}")]
    Status(u16),
    /// The request failed in transit or exceeded its per-attempt budget.
    #[error("request failed: {0}")]
    Request(String),
}

// ============================================================================
// SECTION: Health Gate
// ============================================================================

/// HTTP health gate polling a single endpoint under a fixed policy.
///
/// # Invariants
/// - The endpoint URL and TLS posture are resolved once at construction.
/// - `wait` issues probes strictly sequentially with a fixed sleep between
///   attempts; retries are bounded only by the overall deadline, never by an
///   attempt count.
#[derive(Debug)]
pub struct HealthGate {
    /// Immutable gate policy.
    policy: HealthCheckPolicy,
    /// Parsed health endpoint URL.
    url: Url,
    /// Blocking HTTP client with the TLS posture baked in.
    client: Client,
}

impl HealthGate {
    /// Creates a gate from the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Misconfigured`] when the policy has no URL, the
    /// URL does not parse, or the HTTP client cannot be built.
    pub fn new(policy: HealthCheckPolicy) -> Result<Self, GateError> {
        let raw = policy
            .url
            .clone()
            .ok_or_else(|| GateError::Misconfigured("no health-check URL configured".to_string()))?;
        let url = Url::parse(&raw)
            .map_err(|err| GateError::Misconfigured(format!("invalid health-check URL `{raw}`: {err}")))?;
        let client = Client::builder()
            .danger_accept_invalid_certs(!policy.tls_verify)
            .build()
            .map_err(|err| GateError::Misconfigured(format!("http client build failed: {err}")))?;
        Ok(Self {
            policy,
            url,
            client,
        })
    }

    /// Issues one GET bounded by the given per-attempt budget.
    fn probe(&self, budget: Duration) -> Result<(), ProbeFailure> {
        let response = self
            .client
            .get(self.url.clone())
            .timeout(budget)
            .send()
            .map_err(|err| ProbeFailure::Request(err.to_string()))?;
        let status = response.status();
        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(ProbeFailure::Status(status.as_u16()))
        }
    }
}

impl ReadinessGate for HealthGate {
    fn wait(&self) -> Result<(), GateError> {
        let deadline = Instant::now() + self.policy.overall_timeout;
        let mut attempt: u32 = 0;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(GateError::DeadlineExceeded(self.policy.overall_timeout));
            }
            attempt += 1;
            // Each probe gets the fixed sub-budget, clamped to what is left
            // of the overall deadline.
            let budget = self.policy.attempt_timeout.min(remaining);
            match self.probe(budget) {
                Ok(()) => {
                    info!(url = %self.url, attempt, "health endpoint reported healthy");
                    return Ok(());
                }
                Err(failure) => {
                    warn!(url = %self.url, attempt, %failure, "health probe failed; retrying");
                }
            }
            let rest = deadline.saturating_duration_since(Instant::now());
            if rest.is_zero() {
                return Err(GateError::DeadlineExceeded(self.policy.overall_timeout));
            }
            thread::sleep(self.policy.retry_interval.min(rest));
        }
    }
}
