//! Score and label mapping from effective entropy.

use crate::types::StrengthLabel;

/// Maps effective entropy to a 0..=100 score and a strength label.
///
/// The score scales linearly, saturating at 100 for roughly 83 bits and
/// above. Label thresholds follow the usual offline-attack brackets: below
/// 28 bits is trivially crackable, above 80 is out of reach.
pub fn score_from_entropy(effective_entropy_bits: f64) -> (u8, StrengthLabel) {
    let label = if effective_entropy_bits < 28.0 {
        StrengthLabel::VeryWeak
    } else if effective_entropy_bits < 36.0 {
        StrengthLabel::Weak
    } else if effective_entropy_bits < 60.0 {
        StrengthLabel::Medium
    } else if effective_entropy_bits < 80.0 {
        StrengthLabel::Strong
    } else {
        StrengthLabel::VeryStrong
    };

    let score = (effective_entropy_bits / 100.0 * 120.0).round().clamp(0.0, 100.0) as u8;

    (score, label)
}
