//! Sequence checks against fixed tables of keyboard-trivial runs.

use crate::types::{PatternFinding, PatternKind};

/// Ascending and descending four-digit runs.
const NUMERIC_RUNS: [&str; 14] = [
    "0123", "1234", "2345", "3456", "4567", "5678", "6789", "9876", "8765", "7654", "6543",
    "5432", "4321", "3210",
];

/// Alphabetic runs, matched case-insensitively.
const ALPHA_RUNS: [&str; 9] = [
    "abcd", "bcde", "cdef", "defg", "gfed", "fedc", "edcb", "zyx", "cba",
];

/// Flags the first known four-digit run found in the password.
pub(super) fn numeric_sequence_check(password: &str) -> Option<PatternFinding> {
    for run in NUMERIC_RUNS {
        if password.contains(run) {
            return Some(PatternFinding {
                kind: PatternKind::NumericSequence,
                message: "Password contains a simple numeric sequence".to_string(),
                penalty_bits: 12.0,
                matched: Some(run.to_string()),
            });
        }
    }
    None
}

/// Flags the first known alphabetic run found in the password.
pub(super) fn alpha_sequence_check(password: &str) -> Option<PatternFinding> {
    let lowered = password.to_lowercase();
    for run in ALPHA_RUNS {
        if lowered.contains(run) {
            return Some(PatternFinding {
                kind: PatternKind::AlphaSequence,
                message: "Password contains an alphabetic sequence".to_string(),
                penalty_bits: 10.0,
                matched: Some(run.to_string()),
            });
        }
    }
    None
}
