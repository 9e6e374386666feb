// crates/stack-signal-gate/src/lib.rs
// ============================================================================
// Module: Stack Signal Gate Library
// Description: HTTP health gate with nested time budgets.
// Purpose: Defer signaling until an application health check passes.
// Dependencies: crate::gate
// ============================================================================

//! ## Overview
//! The gate polls an operator-supplied HTTP health endpoint until it reports
//! healthy or an overall deadline elapses. Each probe runs under its own
//! per-attempt budget; expiry of that budget alone is a transient failure of
//! one attempt, never of the gate.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod gate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use gate::HealthGate;
