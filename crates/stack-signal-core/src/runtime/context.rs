// crates/stack-signal-core/src/runtime/context.rs
// ============================================================================
// Module: Orchestration Context Resolution
// Description: Exhaustive tag aggregation and well-known key extraction.
// Purpose: Derive the stack name and logical resource id from instance tags.
// Dependencies: crate::{core, interfaces}, tracing
// ============================================================================

//! ## Overview
//! Resolution pages through the tag query until a response omits a
//! continuation token, accumulating everything into one sequence before
//! extraction. Stopping at the first page would be incorrect whenever the
//! instance carries enough tags to cross a page boundary. Order is irrelevant
//! for correctness; exhaustiveness is not.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use tracing::debug;

use crate::core::tags::LOGICAL_ID_TAG_KEY;
use crate::core::tags::OrchestrationContext;
use crate::core::tags::STACK_NAME_TAG_KEY;
use crate::core::tags::Tag;
use crate::interfaces::TagError;
use crate::interfaces::TagSource;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Context discovery errors. All variants are fatal and never retried.
#[derive(Debug, Error)]
pub enum ContextError {
    /// A tag query page failed.
    #[error(transparent)]
    Source(#[from] TagError),
    /// A required well-known tag was absent or carried an empty value.
    #[error("required tag `{0}` is missing or empty on this instance")]
    MissingTag(&'static str),
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves the orchestration context from the instance's tags.
///
/// # Errors
///
/// Returns [`ContextError`] when any tag query page fails or when either
/// well-known key is missing or empty in the aggregated tag sequence. An
/// instance without both keys is not part of a recognizable orchestration
/// operation, and signaling would be meaningless.
pub fn resolve_context(
    source: &dyn TagSource,
    instance_id: &str,
) -> Result<OrchestrationContext, ContextError> {
    let tags = collect_tags(source, instance_id)?;
    debug!(count = tags.len(), "aggregated instance tags");

    let stack_name = extract(&tags, STACK_NAME_TAG_KEY)
        .ok_or(ContextError::MissingTag(STACK_NAME_TAG_KEY))?;
    let logical_resource_id =
        extract(&tags, LOGICAL_ID_TAG_KEY).ok_or(ContextError::MissingTag(LOGICAL_ID_TAG_KEY))?;

    Ok(OrchestrationContext {
        stack_name,
        logical_resource_id,
    })
}

/// Accumulates every tag page into one sequence.
fn collect_tags(source: &dyn TagSource, instance_id: &str) -> Result<Vec<Tag>, TagError> {
    let mut tags = Vec::new();
    let mut token: Option<String> = None;
    loop {
        let page = source.page(instance_id, token.as_deref())?;
        tags.extend(page.tags);
        // Some backends hand back an empty token on the final page.
        match page.next_token.filter(|next| !next.is_empty()) {
            Some(next) => token = Some(next),
            None => break,
        }
    }
    Ok(tags)
}

/// Returns the non-empty value for a key, if present.
fn extract(tags: &[Tag], key: &str) -> Option<String> {
    tags.iter()
        .find(|tag| tag.key == key)
        .map(|tag| tag.value.clone())
        .filter(|value| !value.is_empty())
}
