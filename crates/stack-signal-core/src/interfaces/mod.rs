// crates/stack-signal-core/src/interfaces/mod.rs
// ============================================================================
// Module: Stack Signal Interfaces
// Description: Backend-agnostic interfaces for identity, tags, gating, signals.
// Purpose: Define the contract surfaces consumed by the pipeline runner.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how the pipeline integrates with the instance-metadata
//! service, the tag query API, the health endpoint, and the orchestration
//! signal API without embedding backend-specific details. Every error carries
//! enough context for the top-level handler to report which stage failed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::identity::InstanceIdentity;
use crate::core::signal::SignalRequest;
use crate::core::tags::TagPage;

// ============================================================================
// SECTION: Identity Source
// ============================================================================

/// Identity resolution errors.
///
/// Both variants are environment-class failures: they are never retried,
/// because they mean the process is not running where it expects to be.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The instance-metadata service could not be reached at all.
    #[error("instance metadata service is unreachable (not running on EC2?): {0}")]
    Unreachable(String),
    /// The metadata service answered but the identity lookup failed.
    #[error("instance identity lookup failed: {0}")]
    Lookup(String),
    /// The metadata service returned an empty value for a required field.
    #[error("instance metadata returned an empty `{0}`")]
    EmptyField(&'static str),
}

/// Source of the running instance's identity.
pub trait IdentitySource {
    /// Resolves the instance id and region of the running instance.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] when the metadata service is unreachable or
    /// returns incomplete identity data.
    fn resolve(&self) -> Result<InstanceIdentity, IdentityError>;
}

// ============================================================================
// SECTION: Tag Source
// ============================================================================

/// Tag query errors.
#[derive(Debug, Error)]
pub enum TagError {
    /// A tag query page failed; discovery errors are fatal and not retried.
    #[error("tag query failed: {0}")]
    Query(String),
}

/// Paginated source of the instance's tags.
pub trait TagSource {
    /// Fetches one page of tags scoped to the given instance.
    ///
    /// A `token` of `None` requests the first page; callers thread the
    /// returned continuation token into follow-up calls until a page omits
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`TagError`] when the query fails.
    fn page(&self, instance_id: &str, token: Option<&str>) -> Result<TagPage, TagError>;
}

// ============================================================================
// SECTION: Readiness Gate
// ============================================================================

/// Health gate errors.
///
/// The two variants are deliberately distinct so operators can tell "the app
/// never became healthy" apart from "the gate itself was misconfigured".
#[derive(Debug, Error)]
pub enum GateError {
    /// The gate could not be set up (bad URL, client construction failure).
    #[error("health gate misconfigured: {0}")]
    Misconfigured(String),
    /// The endpoint never reported healthy within the overall deadline.
    #[error("health endpoint did not become healthy within the {}s overall deadline", .0.as_secs())]
    DeadlineExceeded(std::time::Duration),
}

/// Gate that blocks until a local application reports itself healthy.
pub trait ReadinessGate {
    /// Polls the health endpoint until it reports healthy or the overall
    /// deadline lapses.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] when the gate is misconfigured or the overall
    /// deadline is exceeded. Individual probe failures are retried locally
    /// and never surface here.
    fn wait(&self) -> Result<(), GateError>;
}

// ============================================================================
// SECTION: Signal Channel
// ============================================================================

/// Signal delivery errors, pre-classified by the channel.
///
/// The dispatcher decides what each class means for the pipeline; the channel
/// only reports what the service said.
#[derive(Debug, Error)]
pub enum SignalSendError {
    /// The service rejected the signal with a validation-class error.
    #[error("signal rejected: {message}")]
    Validation {
        /// Message returned by the service.
        message: String,
    },
    /// Any other delivery failure (transport, throttling, authorization).
    #[error("signal delivery failed: {message}")]
    Other {
        /// Message describing the failure.
        message: String,
    },
}

/// Channel delivering the final signal to the orchestration API.
pub trait SignalChannel {
    /// Sends the signal once; the pipeline never retries delivery.
    ///
    /// # Errors
    ///
    /// Returns [`SignalSendError`] when the service rejects the signal or the
    /// request fails in transit.
    fn send(&self, request: &SignalRequest) -> Result<(), SignalSendError>;
}
