//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::app::RunOutput;

/// Assert the binary succeeded and printed exactly `expected` plus a newline.
pub fn assert_printed(output: &RunOutput, expected: &str) {
    assert!(
        output.success,
        "Expected success, got {:?}. Stderr: {}",
        output.code, output.stderr
    );
    assert_eq!(output.stdout, format!("{expected}\n"));
}

/// Assert the binary failed without writing anything to stdout.
pub fn assert_failed_silently(output: &RunOutput) {
    assert!(
        !output.success,
        "Expected failure, got success. Stdout: {}",
        output.stdout
    );
    assert_ne!(output.code, Some(0));
    assert!(
        output.stdout.is_empty(),
        "Expected no stdout on failure, got {:?}",
        output.stdout
    );
    assert!(!output.stderr.is_empty(), "Expected an error on stderr");
}
