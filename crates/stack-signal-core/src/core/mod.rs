// crates/stack-signal-core/src/core/mod.rs
// ============================================================================
// Module: Stack Signal Core Types
// Description: Canonical pipeline data structures.
// Purpose: Provide stable types for identity, tags, policy, and signals.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types for the signal-delivery pipeline. Every entity here is created,
//! owned, and consumed within a single linear pipeline run; nothing outlives
//! the process invocation and nothing is shared across threads.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod identity;
pub mod policy;
pub mod signal;
pub mod tags;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identity::InstanceIdentity;
pub use policy::DEFAULT_ATTEMPT_TIMEOUT;
pub use policy::DEFAULT_OVERALL_TIMEOUT;
pub use policy::DEFAULT_RETRY_INTERVAL;
pub use policy::HealthCheckPolicy;
pub use signal::SignalOutcome;
pub use signal::SignalRequest;
pub use signal::SignalStatus;
pub use tags::LOGICAL_ID_TAG_KEY;
pub use tags::OrchestrationContext;
pub use tags::STACK_NAME_TAG_KEY;
pub use tags::Tag;
pub use tags::TagPage;
