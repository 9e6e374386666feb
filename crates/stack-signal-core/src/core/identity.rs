// crates/stack-signal-core/src/core/identity.rs
// ============================================================================
// Module: Instance Identity
// Description: Identity of the instance the pipeline runs on.
// Purpose: Carry the instance id and region resolved from instance metadata.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The instance identity is resolved exactly once at startup from the local
//! instance-metadata service and is immutable afterwards. The pipeline only
//! ever signals on behalf of the instance it runs on.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identity
// ============================================================================

/// Identity of the running instance as reported by instance metadata.
///
/// # Invariants
/// - `instance_id` and `region` are non-empty once resolved; the identity
///   source rejects empty metadata responses before constructing this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceIdentity {
    /// EC2 instance id, e.g. `i-0123456789abcdef0`.
    pub instance_id: String,
    /// Region the instance runs in, e.g. `us-east-1`.
    pub region: String,
}

impl InstanceIdentity {
    /// Creates a new instance identity.
    #[must_use]
    pub fn new(instance_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            region: region.into(),
        }
    }
}
