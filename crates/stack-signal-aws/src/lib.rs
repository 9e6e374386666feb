// crates/stack-signal-aws/src/lib.rs
// ============================================================================
// Module: Stack Signal AWS Library
// Description: AWS adapters for the core port interfaces.
// Purpose: Bridge IMDS, EC2 tags, and CloudFormation signaling into the pipeline.
// Dependencies: crate::{clients, imds, signal, tags}
// ============================================================================

//! ## Overview
//! AWS-backed implementations of the core ports: instance identity from the
//! instance-metadata service, paginated tag pages from EC2 `DescribeTags`,
//! and signal delivery through CloudFormation `SignalResource`. The async SDK
//! is bridged into the synchronous pipeline through a dedicated Tokio runtime
//! owned by [`AwsClients`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod clients;
pub mod imds;
pub mod signal;
pub mod tags;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use clients::AwsClients;
pub use clients::ConnectError;
pub use imds::ImdsIdentitySource;
pub use signal::CloudFormationChannel;
pub use signal::classify_service_error;
pub use tags::Ec2TagSource;
