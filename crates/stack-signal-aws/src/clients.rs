// crates/stack-signal-aws/src/clients.rs
// ============================================================================
// Module: AWS Client Bundle
// Description: Shared runtime and service clients for the AWS adapters.
// Purpose: Load the SDK configuration once and hand out pipeline adapters.
// Dependencies: aws-config, aws-sdk-ec2, aws-sdk-cloudformation, tokio
// ============================================================================

//! ## Overview
//! The SDK is async; the pipeline is synchronous. A dedicated multi-thread
//! Tokio runtime is created once, used to load the shared SDK configuration
//! (credential chain and region resolution, with IMDS as the regional
//! fallback on EC2), and then shared by every adapter for `block_on` bridging.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_config::imds;
use thiserror::Error;
use tokio::runtime::Runtime;

use crate::imds::ImdsIdentitySource;
use crate::signal::CloudFormationChannel;
use crate::tags::Ec2TagSource;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while constructing the AWS client bundle.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The bridge runtime could not be started.
    #[error("failed to start the AWS bridge runtime: {0}")]
    Runtime(String),
}

// ============================================================================
// SECTION: Client Bundle
// ============================================================================

/// Shared runtime and service clients backing the pipeline adapters.
///
/// # Invariants
/// - The SDK configuration is loaded exactly once, before any adapter runs.
/// - All adapters share one runtime; no adapter spawns its own.
pub struct AwsClients {
    /// Runtime bridging async SDK calls into the synchronous pipeline.
    runtime: Arc<Runtime>,
    /// Instance-metadata client.
    imds: imds::Client,
    /// EC2 client for tag queries.
    ec2: aws_sdk_ec2::Client,
    /// CloudFormation client for signal delivery.
    cloudformation: aws_sdk_cloudformation::Client,
}

impl AwsClients {
    /// Starts the bridge runtime and loads the shared SDK configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError`] when the Tokio runtime cannot be built.
    /// Credential and region problems surface later, on the first service
    /// call that needs them.
    pub fn connect() -> Result<Self, ConnectError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|err| ConnectError::Runtime(err.to_string()))?;
        let shared_config =
            runtime.block_on(aws_config::defaults(BehaviorVersion::latest()).load());
        let imds = imds::Client::builder().build();
        let ec2 = aws_sdk_ec2::Client::new(&shared_config);
        let cloudformation = aws_sdk_cloudformation::Client::new(&shared_config);
        Ok(Self {
            runtime: Arc::new(runtime),
            imds,
            ec2,
            cloudformation,
        })
    }

    /// Returns the IMDS-backed identity source.
    #[must_use]
    pub fn identity_source(&self) -> ImdsIdentitySource {
        ImdsIdentitySource::new(Arc::clone(&self.runtime), self.imds.clone())
    }

    /// Returns the EC2-backed tag source.
    #[must_use]
    pub fn tag_source(&self) -> Ec2TagSource {
        Ec2TagSource::new(Arc::clone(&self.runtime), self.ec2.clone())
    }

    /// Returns the CloudFormation-backed signal channel.
    #[must_use]
    pub fn signal_channel(&self) -> CloudFormationChannel {
        CloudFormationChannel::new(Arc::clone(&self.runtime), self.cloudformation.clone())
    }
}
