//! Repetition checks: long runs of one character and repeated blocks.

use crate::types::{PatternFinding, PatternKind};

/// Flags a run of four or more identical consecutive characters.
///
/// `matched` carries the whole run, wherever it sits in the password.
pub(super) fn repetition_check(password: &str) -> Option<PatternFinding> {
    let chars: Vec<char> = password.chars().collect();

    let mut start = 0;
    while start < chars.len() {
        let mut end = start + 1;
        while end < chars.len() && chars[end] == chars[start] {
            end += 1;
        }
        if end - start >= 4 {
            return Some(PatternFinding {
                kind: PatternKind::Repetition,
                message: "Password contains a long run of repeated characters".to_string(),
                penalty_bits: 10.0,
                matched: Some(chars[start..end].iter().collect()),
            });
        }
        start = end;
    }

    None
}

/// Flags a block of two or more characters repeated three times in a row,
/// e.g. "abcabcabc". Shorter blocks are tried first at each position, so
/// `matched` holds the smallest repeating unit tripled.
pub(super) fn repeated_block_check(password: &str) -> Option<PatternFinding> {
    let chars: Vec<char> = password.chars().collect();
    let n = chars.len();

    for start in 0..n {
        let max_block = (n - start) / 3;
        for block in 2..=max_block {
            let first = &chars[start..start + block];
            let second = &chars[start + block..start + 2 * block];
            let third = &chars[start + 2 * block..start + 3 * block];
            if first == second && second == third {
                return Some(PatternFinding {
                    kind: PatternKind::RepeatedBlock,
                    message: "Password contains a repeated block".to_string(),
                    penalty_bits: 8.0,
                    matched: Some(chars[start..start + 3 * block].iter().collect()),
                });
            }
        }
    }

    None
}
