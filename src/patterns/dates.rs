//! Year detection: four-digit windows that parse into a plausible year.

use crate::types::{PatternFinding, PatternKind};

/// Flags the first four-digit window reading as a year between 1900 and
/// 2029. Windows overlap, so "19997" is caught through "1999".
pub(super) fn date_check(password: &str) -> Option<PatternFinding> {
    let chars: Vec<char> = password.chars().collect();

    for window in chars.windows(4) {
        if !window.iter().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let candidate: String = window.iter().collect();
        if let Ok(year) = candidate.parse::<u32>() {
            if (1900..=2029).contains(&year) {
                return Some(PatternFinding {
                    kind: PatternKind::DateLike,
                    message: "Password contains a probable date".to_string(),
                    penalty_bits: 8.0,
                    matched: Some(candidate),
                });
            }
        }
    }

    None
}
