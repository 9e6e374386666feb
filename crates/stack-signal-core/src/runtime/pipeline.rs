// crates/stack-signal-core/src/runtime/pipeline.rs
// ============================================================================
// Module: Signal Pipeline Runner
// Description: The strictly sequential identity → context → gate → dispatch run.
// Purpose: Drive one pipeline invocation and funnel every failure upward.
// Dependencies: crate::{core, interfaces, runtime}, tracing
// ============================================================================

//! ## Overview
//! Each stage runs to completion before the next begins; there is no fan-out
//! and no shared mutable state. Internal stages never terminate the process:
//! every failure is returned as a [`PipelineError`] to a single top-level
//! handler that maps it to the documented exit behavior.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use tracing::info;

use crate::core::signal::SignalOutcome;
use crate::core::signal::SignalRequest;
use crate::core::signal::SignalStatus;
use crate::interfaces::GateError;
use crate::interfaces::IdentityError;
use crate::interfaces::IdentitySource;
use crate::interfaces::ReadinessGate;
use crate::interfaces::SignalChannel;
use crate::interfaces::TagSource;
use crate::runtime::context::ContextError;
use crate::runtime::context::resolve_context;
use crate::runtime::dispatch::dispatch;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Immutable per-run options constructed once at the configuration boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Send a FAILURE signal instead of SUCCESS and bypass health gating.
    pub failure_mode: bool,
}

impl RunOptions {
    /// Returns the signal status implied by these options.
    #[must_use]
    pub const fn status(self) -> SignalStatus {
        if self.failure_mode {
            SignalStatus::Failure
        } else {
            SignalStatus::Success
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Terminal pipeline failures, tagged by the stage that produced them.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Instance self-identification failed.
    #[error("identity resolution failed: {0}")]
    Identity(#[from] IdentityError),
    /// Orchestration-context discovery failed.
    #[error("orchestration context discovery failed: {0}")]
    Context(#[from] ContextError),
    /// The health gate failed fatally.
    #[error("health gate failed: {0}")]
    Gate(#[from] GateError),
    /// Signal dispatch was classified as fatal.
    #[error("signal dispatch failed: {0}")]
    Dispatch(String),
}

// ============================================================================
// SECTION: Pipeline
// ============================================================================

/// Runs the signal-delivery pipeline once.
///
/// The gate is entered only when one is supplied and the requested status is
/// SUCCESS; a FAILURE signal has nothing to wait for. A fatal dispatch
/// outcome is surfaced as [`PipelineError::Dispatch`], so callers observe a
/// single error funnel; `Ok` always carries `Delivered` or `BenignlyIgnored`.
///
/// # Errors
///
/// Returns [`PipelineError`] when any stage fails fatally.
pub fn run(
    identity: &dyn IdentitySource,
    tags: &dyn TagSource,
    gate: Option<&dyn ReadinessGate>,
    channel: &dyn SignalChannel,
    options: RunOptions,
) -> Result<SignalOutcome, PipelineError> {
    let identity = identity.resolve()?;
    info!(instance_id = %identity.instance_id, region = %identity.region, "resolved instance identity");

    let context = resolve_context(tags, &identity.instance_id)?;
    info!(
        stack = %context.stack_name,
        logical_id = %context.logical_resource_id,
        "discovered orchestration context"
    );

    let status = options.status();
    if status == SignalStatus::Success
        && let Some(gate) = gate
    {
        gate.wait()?;
        info!("health gate passed");
    }

    let request = SignalRequest::new(&context, &identity, status);
    match dispatch(channel, &request) {
        SignalOutcome::Fatal(reason) => Err(PipelineError::Dispatch(reason)),
        outcome => Ok(outcome),
    }
}
