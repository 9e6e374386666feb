// crates/stack-signal-cli/src/main.rs
// ============================================================================
// Module: Stack Signal CLI Entry Point
// Description: Flag parsing, pipeline wiring, and exit-code mapping.
// Purpose: Run the signal-delivery pipeline once and report its outcome.
// Dependencies: clap, stack-signal-aws, stack-signal-core, stack-signal-gate
// ============================================================================

//! ## Overview
//! The binary expects zero required configuration: identity and orchestration
//! context are self-discovered. Flags only adjust failure mode and the
//! optional health gate. Exit convention: zero when the signal was delivered
//! or benignly ignored, non-zero on any fatal condition, with the reason on
//! stderr.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::ArgAction;
use clap::Parser;
use stack_signal_aws::AwsClients;
use stack_signal_core::HealthCheckPolicy;
use stack_signal_core::ReadinessGate;
use stack_signal_core::RunOptions;
use stack_signal_core::SignalOutcome;
use stack_signal_core::run;
use stack_signal_gate::HealthGate;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Signals CloudFormation from inside the instance being provisioned.
#[derive(Parser, Debug)]
#[command(name = "stack-signal", disable_version_flag = true)]
struct Cli {
    /// Display version and build metadata.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Send a FAILURE signal instead of SUCCESS and skip health gating.
    #[arg(long, action = ArgAction::SetTrue)]
    failure: bool,
    /// Health endpoint polled until healthy before a SUCCESS signal is sent.
    #[arg(long, value_name = "URL")]
    healthcheck_url: Option<String>,
    /// Overall health-gate deadline, in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = 300)]
    healthcheck_timeout: u64,
    /// Skip TLS certificate verification against the health endpoint.
    #[arg(long, action = ArgAction::SetTrue)]
    insecure_skip_tls_verify: bool,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying the user-facing failure message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    init_tracing();
    match execute() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Parses flags, wires adapters, and runs the pipeline once.
fn execute() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        for line in version_lines() {
            write_stdout_line(&line)
                .map_err(|err| CliError::new(format!("stdout write failed: {err}")))?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let policy = health_policy(&cli);
    let options = RunOptions {
        failure_mode: cli.failure,
    };

    // Gate misconfiguration (bad URL) should fail before any network call.
    let gate = if policy.is_enabled() && !options.failure_mode {
        Some(
            HealthGate::new(policy)
                .map_err(|err| CliError::new(format!("health gate setup failed: {err}")))?,
        )
    } else {
        None
    };

    let clients =
        AwsClients::connect().map_err(|err| CliError::new(format!("aws setup failed: {err}")))?;
    let identity = clients.identity_source();
    let tags = clients.tag_source();
    let channel = clients.signal_channel();

    let outcome = run(
        &identity,
        &tags,
        gate.as_ref().map(|gate| gate as &dyn ReadinessGate),
        &channel,
        options,
    )
    .map_err(|err| CliError::new(err.to_string()))?;

    write_stdout_line(outcome_message(&outcome))
        .map_err(|err| CliError::new(format!("stdout write failed: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Builds the immutable health-check policy from parsed flags.
///
/// The per-attempt timeout and retry interval are deliberately not flags;
/// they stay at their built-in defaults until there is a product decision to
/// expose them.
fn health_policy(cli: &Cli) -> HealthCheckPolicy {
    HealthCheckPolicy {
        url: cli.healthcheck_url.clone(),
        overall_timeout: Duration::from_secs(cli.healthcheck_timeout),
        tls_verify: !cli.insecure_skip_tls_verify,
        ..HealthCheckPolicy::default()
    }
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Fallback used when build metadata was not injected at compile time.
const DEVELOPMENT: &str = "development";

/// Returns the lines printed for `--version`.
fn version_lines() -> Vec<String> {
    vec![
        format!("version: {}", env!("CARGO_PKG_VERSION")),
        format!("date: {}", option_env!("STACK_SIGNAL_BUILD_DATE").unwrap_or(DEVELOPMENT)),
        format!("commit: {}", option_env!("STACK_SIGNAL_COMMIT").unwrap_or(DEVELOPMENT)),
    ]
}

/// Returns the user-facing message for a terminal outcome.
const fn outcome_message(outcome: &SignalOutcome) -> &'static str {
    match outcome {
        SignalOutcome::Delivered => "signal delivered",
        SignalOutcome::BenignlyIgnored => {
            "resource already completed; signal ignored (not an error)"
        }
        SignalOutcome::Fatal(_) => "signal failed",
    }
}

/// Initializes the stderr tracing subscriber, honoring `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits a fatal error message and returns the failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
