// crates/stack-signal-aws/src/imds.rs
// ============================================================================
// Module: IMDS Identity Source
// Description: Instance identity from the EC2 instance-metadata service.
// Purpose: Resolve the instance id and region of the running instance.
// Dependencies: aws-config, stack-signal-core, tokio
// ============================================================================

//! ## Overview
//! Identity comes from the local instance-metadata service. A failure on the
//! very first metadata read means the program is not running on EC2 at all
//! and is reported as the distinct environment-class error; it is never
//! retried.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use aws_config::imds;
use stack_signal_core::IdentityError;
use stack_signal_core::IdentitySource;
use stack_signal_core::InstanceIdentity;
use tokio::runtime::Runtime;
use tracing::debug;

// ============================================================================
// SECTION: Metadata Paths
// ============================================================================

/// Metadata path for the instance id.
const INSTANCE_ID_PATH: &str = "/latest/meta-data/instance-id";

/// Metadata path for the region the instance runs in.
const REGION_PATH: &str = "/latest/meta-data/placement/region";

// ============================================================================
// SECTION: Identity Source
// ============================================================================

/// Identity source backed by the instance-metadata service.
pub struct ImdsIdentitySource {
    /// Runtime bridging async SDK calls.
    runtime: Arc<Runtime>,
    /// Instance-metadata client.
    client: imds::Client,
}

impl ImdsIdentitySource {
    /// Creates a new IMDS identity source.
    #[must_use]
    pub const fn new(runtime: Arc<Runtime>, client: imds::Client) -> Self {
        Self {
            runtime,
            client,
        }
    }
}

impl IdentitySource for ImdsIdentitySource {
    fn resolve(&self) -> Result<InstanceIdentity, IdentityError> {
        let (instance_id, region): (String, String) = self.runtime.block_on(async {
            // The first read doubles as the availability probe: if it fails,
            // the metadata service is unreachable and we are not on EC2.
            let instance_id = self
                .client
                .get(INSTANCE_ID_PATH)
                .await
                .map_err(|err| IdentityError::Unreachable(err.to_string()))?;
            let region = self
                .client
                .get(REGION_PATH)
                .await
                .map_err(|err| IdentityError::Lookup(err.to_string()))?;
            Ok::<_, IdentityError>((instance_id.into(), region.into()))
        })?;

        if instance_id.is_empty() {
            return Err(IdentityError::EmptyField("instance-id"));
        }
        if region.is_empty() {
            return Err(IdentityError::EmptyField("region"));
        }
        debug!(%instance_id, %region, "instance metadata resolved");
        Ok(InstanceIdentity::new(instance_id, region))
    }
}
