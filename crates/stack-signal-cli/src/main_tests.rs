// crates/stack-signal-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for flag parsing and policy construction.
// Purpose: Ensure the immutable run configuration mirrors the flags.
// Dependencies: stack-signal-cli main helpers
// ============================================================================

//! ## Overview
//! Validates flag parsing, health-policy construction, and the outcome
//! messages printed by the entry point.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use clap::Parser;
use stack_signal_core::DEFAULT_ATTEMPT_TIMEOUT;
use stack_signal_core::DEFAULT_RETRY_INTERVAL;
use stack_signal_core::SignalOutcome;

use super::Cli;
use super::health_policy;
use super::outcome_message;
use super::version_lines;

// ============================================================================
// SECTION: Flag Parsing
// ============================================================================

/// Tests the zero-configuration default invocation.
#[test]
fn defaults_require_no_flags() {
    let cli = Cli::parse_from(["stack-signal"]);
    assert!(!cli.failure);
    assert!(!cli.show_version);
    assert!(cli.healthcheck_url.is_none());
    assert_eq!(cli.healthcheck_timeout, 300);
    assert!(!cli.insecure_skip_tls_verify);
}

/// Tests that all flags parse together.
#[test]
fn all_flags_parse() {
    let cli = Cli::parse_from([
        "stack-signal",
        "--failure",
        "--healthcheck-url",
        "http://127.0.0.1:8080/healthz",
        "--healthcheck-timeout",
        "90",
        "--insecure-skip-tls-verify",
    ]);
    assert!(cli.failure);
    assert_eq!(cli.healthcheck_url.as_deref(), Some("http://127.0.0.1:8080/healthz"));
    assert_eq!(cli.healthcheck_timeout, 90);
    assert!(cli.insecure_skip_tls_verify);
}

// ============================================================================
// SECTION: Policy Construction
// ============================================================================

/// Tests that the policy mirrors the flags and keeps the built-in budgets.
#[test]
fn policy_mirrors_flags() {
    let cli = Cli::parse_from([
        "stack-signal",
        "--healthcheck-url",
        "https://localhost:8443/healthz",
        "--healthcheck-timeout",
        "120",
        "--insecure-skip-tls-verify",
    ]);
    let policy = health_policy(&cli);
    assert_eq!(policy.url.as_deref(), Some("https://localhost:8443/healthz"));
    assert_eq!(policy.overall_timeout, Duration::from_secs(120));
    assert_eq!(policy.attempt_timeout, DEFAULT_ATTEMPT_TIMEOUT);
    assert_eq!(policy.retry_interval, DEFAULT_RETRY_INTERVAL);
    assert!(!policy.tls_verify);
    assert!(policy.is_enabled());
}

/// Tests that omitting the URL disables the gate.
#[test]
fn policy_without_url_disables_gate() {
    let cli = Cli::parse_from(["stack-signal"]);
    let policy = health_policy(&cli);
    assert!(!policy.is_enabled());
    assert!(policy.tls_verify);
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Tests the version output shape and its development fallbacks.
#[test]
fn version_lines_have_expected_shape() {
    let lines = version_lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("version: "));
    assert!(lines[1].starts_with("date: "));
    assert!(lines[2].starts_with("commit: "));
}

/// Tests that both zero-exit outcomes have distinct messages.
#[test]
fn outcome_messages_are_distinct() {
    let delivered = outcome_message(&SignalOutcome::Delivered);
    let ignored = outcome_message(&SignalOutcome::BenignlyIgnored);
    assert_ne!(delivered, ignored);
    assert!(ignored.contains("not an error"));
}
