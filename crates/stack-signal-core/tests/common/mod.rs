// crates/stack-signal-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: In-memory fakes for the pipeline's port interfaces.
// Purpose: Deterministic pipeline testing without network collaborators.
// Dependencies: stack-signal-core
// ============================================================================

//! ## Overview
//! Fakes for every port the pipeline consumes: a fixed identity source, a
//! paginated tag source driven by an index-valued continuation token, a
//! call-counting readiness gate, and a recording signal channel with a
//! scripted response.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cell::Cell;
use std::cell::RefCell;

use stack_signal_core::GateError;
use stack_signal_core::IdentityError;
use stack_signal_core::IdentitySource;
use stack_signal_core::InstanceIdentity;
use stack_signal_core::ReadinessGate;
use stack_signal_core::SignalChannel;
use stack_signal_core::SignalRequest;
use stack_signal_core::SignalSendError;
use stack_signal_core::Tag;
use stack_signal_core::TagError;
use stack_signal_core::TagPage;
use stack_signal_core::TagSource;

// ============================================================================
// SECTION: Identity Fakes
// ============================================================================

/// Identity source returning a fixed identity.
pub struct FixedIdentity;

impl IdentitySource for FixedIdentity {
    fn resolve(&self) -> Result<InstanceIdentity, IdentityError> {
        Ok(InstanceIdentity::new("i-0123456789abcdef0", "us-east-1"))
    }
}

/// Identity source simulating an unreachable metadata service.
pub struct UnreachableIdentity;

impl IdentitySource for UnreachableIdentity {
    fn resolve(&self) -> Result<InstanceIdentity, IdentityError> {
        Err(IdentityError::Unreachable("connection refused".to_string()))
    }
}

// ============================================================================
// SECTION: Tag Fakes
// ============================================================================

/// Tag source serving a fixed sequence of pages.
///
/// Continuation tokens are page indexes rendered as strings; the final page
/// omits the token.
pub struct PagedTagSource {
    /// Pre-split pages served in order.
    pages: Vec<Vec<Tag>>,
    /// Number of page requests observed.
    pub requests: Cell<usize>,
}

impl PagedTagSource {
    /// Creates a source from pre-split pages. An empty split still serves one
    /// empty page.
    pub fn new(pages: Vec<Vec<Tag>>) -> Self {
        let pages = if pages.is_empty() { vec![Vec::new()] } else { pages };
        Self {
            pages,
            requests: Cell::new(0),
        }
    }

    /// Creates a single-page source.
    pub fn single(tags: Vec<Tag>) -> Self {
        Self::new(vec![tags])
    }
}

impl TagSource for PagedTagSource {
    fn page(&self, _instance_id: &str, token: Option<&str>) -> Result<TagPage, TagError> {
        self.requests.set(self.requests.get() + 1);
        let index = match token {
            None => 0,
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| TagError::Query(format!("unknown token `{token}`")))?,
        };
        let tags = self
            .pages
            .get(index)
            .cloned()
            .ok_or_else(|| TagError::Query(format!("page {index} out of range")))?;
        let next_token =
            (index + 1 < self.pages.len()).then(|| (index + 1).to_string());
        Ok(TagPage {
            tags,
            next_token,
        })
    }
}

/// Tag source that fails on the page with the given index.
pub struct FailingTagSource {
    /// Pages served before the failure.
    inner: PagedTagSource,
    /// Index of the page that fails.
    fail_at: usize,
}

impl FailingTagSource {
    /// Creates a source failing at the given page index.
    pub fn new(pages: Vec<Vec<Tag>>, fail_at: usize) -> Self {
        Self {
            inner: PagedTagSource::new(pages),
            fail_at,
        }
    }
}

impl TagSource for FailingTagSource {
    fn page(&self, instance_id: &str, token: Option<&str>) -> Result<TagPage, TagError> {
        let index = token.map_or(0, |token| token.parse::<usize>().unwrap_or(usize::MAX));
        if index == self.fail_at {
            return Err(TagError::Query("request throttled".to_string()));
        }
        self.inner.page(instance_id, token)
    }
}

/// Returns the two well-known tags with sample values.
pub fn required_tags() -> Vec<Tag> {
    vec![
        Tag::new("aws:cloudformation:stack-name", "bootstrap-stack"),
        Tag::new("aws:cloudformation:logical-id", "AppServerGroup"),
    ]
}

// ============================================================================
// SECTION: Gate Fakes
// ============================================================================

/// Readiness gate that counts invocations and returns a scripted result.
pub struct CountingGate {
    /// Number of `wait` calls observed.
    pub calls: Cell<usize>,
    /// Whether `wait` reports the overall deadline as exceeded.
    pub exceed_deadline: bool,
}

impl CountingGate {
    /// Creates a gate that always passes.
    pub const fn passing() -> Self {
        Self {
            calls: Cell::new(0),
            exceed_deadline: false,
        }
    }

    /// Creates a gate that always fails with a deadline error.
    pub const fn timing_out() -> Self {
        Self {
            calls: Cell::new(0),
            exceed_deadline: true,
        }
    }
}

impl ReadinessGate for CountingGate {
    fn wait(&self) -> Result<(), GateError> {
        self.calls.set(self.calls.get() + 1);
        if self.exceed_deadline {
            return Err(GateError::DeadlineExceeded(std::time::Duration::from_secs(300)));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Channel Fakes
// ============================================================================

/// Scripted response for the recording channel.
pub enum ChannelScript {
    /// Acknowledge the signal.
    Accept,
    /// Reject with a validation-class error carrying the given message.
    Validation(&'static str),
    /// Reject with an other-class error carrying the given message.
    Other(&'static str),
}

/// Signal channel recording every request and answering from a script.
pub struct RecordingChannel {
    /// Requests observed, in order.
    pub sent: RefCell<Vec<SignalRequest>>,
    /// Scripted response returned on every send.
    script: ChannelScript,
}

impl RecordingChannel {
    /// Creates a channel with the given scripted response.
    pub const fn new(script: ChannelScript) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            script,
        }
    }

    /// Creates an accepting channel.
    pub const fn accepting() -> Self {
        Self::new(ChannelScript::Accept)
    }
}

impl SignalChannel for RecordingChannel {
    fn send(&self, request: &SignalRequest) -> Result<(), SignalSendError> {
        self.sent.borrow_mut().push(request.clone());
        match &self.script {
            ChannelScript::Accept => Ok(()),
            ChannelScript::Validation(message) => Err(SignalSendError::Validation {
                message: (*message).to_string(),
            }),
            ChannelScript::Other(message) => Err(SignalSendError::Other {
                message: (*message).to_string(),
            }),
        }
    }
}
