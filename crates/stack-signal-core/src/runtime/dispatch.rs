// crates/stack-signal-core/src/runtime/dispatch.rs
// ============================================================================
// Module: Signal Dispatch Classification
// Description: Sends the final signal and classifies the service's response.
// Purpose: Distinguish the benign late-signal race from real failures.
// Dependencies: crate::{core, interfaces}, tracing
// ============================================================================

//! ## Overview
//! A resource can legitimately reach its terminal state through another path
//! (a quorum of peers already satisfied the wait condition) before this
//! instance's signal arrives. The orchestrator reports that case as a
//! validation error with a recognizable message; treating it as fatal would
//! needlessly fail dependent bootstrap automation for a race that caused no
//! actual problem. Every other error is fatal and carries the underlying
//! message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::info;
use tracing::warn;

use crate::core::signal::SignalOutcome;
use crate::core::signal::SignalRequest;
use crate::interfaces::SignalChannel;
use crate::interfaces::SignalSendError;

// ============================================================================
// SECTION: Benign Race Detection
// ============================================================================

/// Message suffix the orchestrator uses when a resource already reached its
/// terminal creation state and can no longer accept a signal.
pub const CREATE_COMPLETE_SUFFIX: &str = "is in CREATE_COMPLETE state and cannot be signaled";

/// Returns true when a validation message describes the benign race.
fn is_benign_race(message: &str) -> bool {
    message.trim_end().ends_with(CREATE_COMPLETE_SUFFIX)
}

// ============================================================================
// SECTION: Dispatch
// ============================================================================

/// Sends the signal once and classifies the response.
///
/// Delivery is never retried: the signal API is idempotent-adjacent, and a
/// duplicate or late signal yields the benign validation error rather than a
/// generic failure.
#[must_use]
pub fn dispatch(channel: &dyn SignalChannel, request: &SignalRequest) -> SignalOutcome {
    match channel.send(request) {
        Ok(()) => {
            info!(
                stack = %request.stack_name,
                logical_id = %request.logical_resource_id,
                status = %request.status,
                "signal delivered"
            );
            SignalOutcome::Delivered
        }
        Err(SignalSendError::Validation {
            message,
        }) if is_benign_race(&message) => {
            warn!(
                stack = %request.stack_name,
                logical_id = %request.logical_resource_id,
                "resource already completed before our signal arrived; ignoring"
            );
            SignalOutcome::BenignlyIgnored
        }
        Err(err) => SignalOutcome::Fatal(err.to_string()),
    }
}
