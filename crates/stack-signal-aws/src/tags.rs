// crates/stack-signal-aws/src/tags.rs
// ============================================================================
// Module: EC2 Tag Source
// Description: Paginated tag pages from the EC2 DescribeTags API.
// Purpose: Serve one filtered tag page per call for the context resolver.
// Dependencies: aws-sdk-ec2, stack-signal-core, tokio
// ============================================================================

//! ## Overview
//! Each call issues one `DescribeTags` request filtered to the instance by
//! `resource-id`, forwarding the caller's continuation token. The core
//! resolver owns the pagination loop; this adapter stays a thin page fetch.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use aws_sdk_ec2::error::ProvideErrorMetadata;
use aws_sdk_ec2::types::Filter;
use stack_signal_core::Tag;
use stack_signal_core::TagError;
use stack_signal_core::TagPage;
use stack_signal_core::TagSource;
use tokio::runtime::Runtime;

// ============================================================================
// SECTION: Tag Source
// ============================================================================

/// EC2 filter name selecting tags by the tagged resource's id.
const RESOURCE_ID_FILTER: &str = "resource-id";

/// Tag source backed by EC2 `DescribeTags`.
pub struct Ec2TagSource {
    /// Runtime bridging async SDK calls.
    runtime: Arc<Runtime>,
    /// EC2 service client.
    client: aws_sdk_ec2::Client,
}

impl Ec2TagSource {
    /// Creates a new EC2 tag source.
    #[must_use]
    pub const fn new(runtime: Arc<Runtime>, client: aws_sdk_ec2::Client) -> Self {
        Self {
            runtime,
            client,
        }
    }
}

impl TagSource for Ec2TagSource {
    fn page(&self, instance_id: &str, token: Option<&str>) -> Result<TagPage, TagError> {
        self.runtime.block_on(async {
            let output = self
                .client
                .describe_tags()
                .filters(
                    Filter::builder().name(RESOURCE_ID_FILTER).values(instance_id).build(),
                )
                .set_next_token(token.map(str::to_string))
                .send()
                .await
                .map_err(|err| {
                    TagError::Query(
                        err.message().map_or_else(|| err.to_string(), str::to_string),
                    )
                })?;

            let tags = output
                .tags()
                .iter()
                .filter_map(|description| {
                    let key = description.key()?;
                    let value = description.value()?;
                    Some(Tag::new(key, value))
                })
                .collect();
            Ok(TagPage {
                tags,
                next_token: output.next_token().map(str::to_string),
            })
        })
    }
}
