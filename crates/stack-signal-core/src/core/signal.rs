// crates/stack-signal-core/src/core/signal.rs
// ============================================================================
// Module: Signal Types
// Description: Resource signal request and terminal outcome types.
// Purpose: Model the signal sent to the orchestrator and its classification.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A signal request is constructed exactly once, immediately before dispatch,
//! from the orchestration context and the instance identity. The outcome is
//! terminal and determines process exit behavior: delivered and benignly
//! ignored signals both exit zero, fatal outcomes exit non-zero.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identity::InstanceIdentity;
use crate::core::tags::OrchestrationContext;

// ============================================================================
// SECTION: Signal Status
// ============================================================================

/// Status reported to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalStatus {
    /// The instance finished initializing successfully.
    Success,
    /// Initialization failed and the rollout should abort.
    Failure,
}

impl SignalStatus {
    /// Returns the wire form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Signal Request
// ============================================================================

/// The resource signal delivered to the orchestration API.
///
/// # Invariants
/// - `status` is `Success` unless failure mode was explicitly requested.
/// - `unique_id` is the instance id, so duplicate signals from the same
///   instance collapse on the orchestrator side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRequest {
    /// Name of the stack owning the signaled resource.
    pub stack_name: String,
    /// Logical id of the signaled resource within the stack.
    pub logical_resource_id: String,
    /// Status reported for this instance.
    pub status: SignalStatus,
    /// Unique id distinguishing signals from different instances.
    pub unique_id: String,
}

impl SignalRequest {
    /// Builds a signal request from the resolved context and identity.
    #[must_use]
    pub fn new(
        context: &OrchestrationContext,
        identity: &InstanceIdentity,
        status: SignalStatus,
    ) -> Self {
        Self {
            stack_name: context.stack_name.clone(),
            logical_resource_id: context.logical_resource_id.clone(),
            status,
            unique_id: identity.instance_id.clone(),
        }
    }
}

// ============================================================================
// SECTION: Signal Outcome
// ============================================================================

/// Terminal classification of a dispatched signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalOutcome {
    /// The orchestrator acknowledged the signal.
    Delivered,
    /// The target resource already reached its terminal state through another
    /// path; the signal was redundant, not erroneous.
    BenignlyIgnored,
    /// The signal was rejected for a reason that must fail the rollout.
    Fatal(String),
}
