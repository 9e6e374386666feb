// crates/stack-signal-core/src/runtime/mod.rs
// ============================================================================
// Module: Stack Signal Runtime
// Description: Pipeline runner, context resolution, and dispatch classification.
// Purpose: Drive the linear signal-delivery pipeline over the port interfaces.
// Dependencies: crate::{core, interfaces}, tracing
// ============================================================================

//! ## Overview
//! The runtime owns the only nontrivial control flow in the repository: the
//! exhaustive tag pagination loop, the conditional health gate entry, and the
//! dispatch-outcome classification that distinguishes the benign late-signal
//! race from real failures.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod context;
pub mod dispatch;
pub mod pipeline;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use context::ContextError;
pub use context::resolve_context;
pub use dispatch::CREATE_COMPLETE_SUFFIX;
pub use dispatch::dispatch;
pub use pipeline::PipelineError;
pub use pipeline::RunOptions;
pub use pipeline::run;
