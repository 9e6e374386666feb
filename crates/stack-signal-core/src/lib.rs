// crates/stack-signal-core/src/lib.rs
// ============================================================================
// Module: Stack Signal Core Library
// Description: Public API surface for the Stack Signal core.
// Purpose: Expose pipeline types, port interfaces, and the pipeline runner.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Stack Signal core models the signal-delivery pipeline for a freshly
//! provisioned instance: self-identification, tag-based orchestration-context
//! discovery, an optional health gate, and CloudFormation signal dispatch with
//! benign-race classification. The core is backend-agnostic and integrates
//! with AWS and HTTP through explicit interfaces.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use interfaces::GateError;
pub use interfaces::IdentityError;
pub use interfaces::IdentitySource;
pub use interfaces::ReadinessGate;
pub use interfaces::SignalChannel;
pub use interfaces::SignalSendError;
pub use interfaces::TagError;
pub use interfaces::TagSource;
pub use runtime::ContextError;
pub use runtime::PipelineError;
pub use runtime::RunOptions;
pub use runtime::dispatch;
pub use runtime::resolve_context;
pub use runtime::run;
