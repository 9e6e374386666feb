// crates/stack-signal-core/src/core/tags.rs
// ============================================================================
// Module: Tag Context Model
// Description: Instance tags and the orchestration context derived from them.
// Purpose: Model paginated tag batches and the stack/logical-id extraction.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The orchestration context is discovered from instance tags written by
//! CloudFormation at provisioning time. Tags arrive in paginated batches; a
//! resolver must accumulate every page before extracting the two well-known
//! keys, because either key may land on any page.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Well-Known Tag Keys
// ============================================================================

/// Tag key carrying the owning stack name.
pub const STACK_NAME_TAG_KEY: &str = "aws:cloudformation:stack-name";

/// Tag key carrying the stack-scoped logical resource id.
pub const LOGICAL_ID_TAG_KEY: &str = "aws:cloudformation:logical-id";

// ============================================================================
// SECTION: Tag Types
// ============================================================================

/// A single key/value instance tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

impl Tag {
    /// Creates a new tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One page of a paginated tag query.
///
/// # Invariants
/// - A present `next_token` means more pages follow; its absence marks the
///   final page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPage {
    /// Tags returned on this page, in service order.
    pub tags: Vec<Tag>,
    /// Continuation token for the follow-up query, when more pages remain.
    pub next_token: Option<String>,
}

// ============================================================================
// SECTION: Orchestration Context
// ============================================================================

/// Stack name and logical resource id this instance signals against.
///
/// # Invariants
/// - Both fields are non-empty; the context resolver treats a missing or
///   empty value for either well-known key as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestrationContext {
    /// Name of the owning CloudFormation stack.
    pub stack_name: String,
    /// Logical resource id of this instance (or its group) within the stack.
    pub logical_resource_id: String,
}
