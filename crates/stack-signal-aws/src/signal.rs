// crates/stack-signal-aws/src/signal.rs
// ============================================================================
// Module: CloudFormation Signal Channel
// Description: Signal delivery through the SignalResource API.
// Purpose: Send the final signal once and pre-classify the service response.
// Dependencies: aws-sdk-cloudformation, stack-signal-core, tokio
// ============================================================================

//! ## Overview
//! Delivery is a single `SignalResource` call; the pipeline never retries it.
//! Service errors are pre-classified here by their error code so the core
//! dispatcher can recognize the benign late-signal race without knowing
//! anything about the SDK.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use aws_sdk_cloudformation::error::ProvideErrorMetadata;
use aws_sdk_cloudformation::types::ResourceSignalStatus;
use stack_signal_core::SignalChannel;
use stack_signal_core::SignalRequest;
use stack_signal_core::SignalSendError;
use stack_signal_core::SignalStatus;
use tokio::runtime::Runtime;
use tracing::debug;

// ============================================================================
// SECTION: Error Classification
// ============================================================================

/// Error code CloudFormation uses for request validation failures, including
/// the benign already-in-terminal-state race.
const VALIDATION_ERROR_CODE: &str = "ValidationError";

/// Pre-classifies a service error from its error metadata.
///
/// `fallback` is used when the service supplied no message (transport
/// failures, connector errors).
#[must_use]
pub fn classify_service_error(
    code: Option<&str>,
    message: Option<&str>,
    fallback: String,
) -> SignalSendError {
    let message = message.map_or(fallback, str::to_string);
    if code == Some(VALIDATION_ERROR_CODE) {
        SignalSendError::Validation {
            message,
        }
    } else {
        SignalSendError::Other {
            message,
        }
    }
}

/// Maps the pipeline status onto the SDK's wire enum.
const fn to_sdk_status(status: SignalStatus) -> ResourceSignalStatus {
    match status {
        SignalStatus::Success => ResourceSignalStatus::Success,
        SignalStatus::Failure => ResourceSignalStatus::Failure,
    }
}

// ============================================================================
// SECTION: Signal Channel
// ============================================================================

/// Signal channel backed by CloudFormation `SignalResource`.
pub struct CloudFormationChannel {
    /// Runtime bridging async SDK calls.
    runtime: Arc<Runtime>,
    /// CloudFormation service client.
    client: aws_sdk_cloudformation::Client,
}

impl CloudFormationChannel {
    /// Creates a new CloudFormation signal channel.
    #[must_use]
    pub const fn new(runtime: Arc<Runtime>, client: aws_sdk_cloudformation::Client) -> Self {
        Self {
            runtime,
            client,
        }
    }
}

impl SignalChannel for CloudFormationChannel {
    fn send(&self, request: &SignalRequest) -> Result<(), SignalSendError> {
        debug!(
            stack = %request.stack_name,
            logical_id = %request.logical_resource_id,
            status = %request.status,
            unique_id = %request.unique_id,
            "sending resource signal"
        );
        self.runtime.block_on(async {
            self.client
                .signal_resource()
                .stack_name(&request.stack_name)
                .logical_resource_id(&request.logical_resource_id)
                .unique_id(&request.unique_id)
                .status(to_sdk_status(request.status))
                .send()
                .await
                .map_err(|err| {
                    classify_service_error(err.code(), err.message(), err.to_string())
                })?;
            Ok(())
        })
    }
}
