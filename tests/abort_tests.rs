//! Abort policy tests.
//!
//! `FaultPolicy::Abort` ends the process, so the batch runs in a child
//! copy of this test binary and the parent inspects how it died.

use std::env;
use std::io::Write;
use std::process::Command;

use rust_spellcast::{
    ContractViolation, DispatchConfig, Dispatcher, DynamicRecord, Effect, FaultPolicy, Outcome,
    OutcomeSink, Target,
};

const CHILD_ENV: &str = "SPELLCAST_ABORT_CHILD";

/// Prints each outcome to stdout as soon as it happens.
struct StdoutSink;

impl OutcomeSink for StdoutSink {
    fn outcome(&mut self, _effect: &Effect, outcome: &Outcome) {
        let mut out = std::io::stdout();
        writeln!(out, "outcome: {outcome}").unwrap();
        out.flush().unwrap();
    }

    fn violation(&mut self, _effect: &Effect, violation: &ContractViolation) {
        let mut out = std::io::stdout();
        writeln!(out, "violation: {violation}").unwrap();
        out.flush().unwrap();
    }
}

fn run_aborting_batch() {
    let mut first = DynamicRecord::new("First").with("health", 100i64);
    let mut broken = DynamicRecord::new("Broken").with("health", true);
    let mut last = DynamicRecord::new("Final").with("health", 100i64);

    let config = DispatchConfig::new().with_fault_policy(FaultPolicy::Abort);
    let mut dispatcher = Dispatcher::new(config, StdoutSink);
    let mut targets = [
        Target::record(&mut first),
        Target::record(&mut broken),
        Target::record(&mut last),
    ];
    dispatcher.apply_all(&Effect::new("fire", "health", -50), &mut targets);
}

/// Test that a violation under the abort policy kills the whole process
/// before later targets are reached.
#[test]
fn test_abort_policy_ends_process() {
    if env::var_os(CHILD_ENV).is_some() {
        run_aborting_batch();
        return;
    }

    let output = Command::new(env::current_exe().unwrap())
        .args(["test_abort_policy_ends_process", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success(), "child exited cleanly: {stdout}");
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.signal(), Some(6), "expected SIGABRT: {:?}", output.status);
    }

    assert!(stdout.contains("outcome: First.health: 100 -> 50"), "{stdout}");
    assert!(stdout.contains("violation: effect `fire` cannot modify `Broken.health`: field is bool"), "{stdout}");
    assert!(!stdout.contains("Final"), "{stdout}");
}
