//! Entropy model: raw Shannon estimate plus structural penalties.

use crate::types::{PatternFinding, PatternKind};

/// Bits a common-word hit leaves untouched before its surcharge kicks in.
/// Everything above this is forfeited, which floors dictionary passwords
/// near the minimum regardless of length.
const COMMON_WORD_FREE_BITS: f64 = 15.0;

/// Extra bits charged when repetition compounds with any other penalty
/// source.
const REPEAT_COMPOUND_PENALTY: f64 = 5.0;

/// Raw entropy in bits: `length * log2(character_set_size)`.
///
/// A set size of zero (empty password) is treated as one, giving zero bits
/// rather than a NaN.
pub fn raw_entropy_bits(length: usize, character_set_size: usize) -> f64 {
    length as f64 * (character_set_size.max(1) as f64).log2()
}

/// Applies the pattern penalties to the raw estimate.
///
/// # Returns
///
/// `(penalties_bits, effective_entropy_bits)`. The effective value never
/// drops below 1.0, so downstream ratios stay well defined.
pub fn apply_penalties(
    raw_entropy_bits: f64,
    base_penalty_bits: f64,
    findings: &[PatternFinding],
) -> (f64, f64) {
    let mut penalties_bits = base_penalty_bits;

    if findings.iter().any(|f| f.kind == PatternKind::CommonWord) {
        penalties_bits += (raw_entropy_bits - COMMON_WORD_FREE_BITS).max(0.0);
    }

    if findings
        .iter()
        .any(|f| matches!(f.kind, PatternKind::Repetition | PatternKind::RepeatedBlock))
    {
        penalties_bits += REPEAT_COMPOUND_PENALTY;
    }

    let effective = (raw_entropy_bits - penalties_bits).max(1.0);
    (penalties_bits, effective)
}
