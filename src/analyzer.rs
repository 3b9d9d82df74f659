//! Password strength analysis - main orchestration logic.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use crate::crack::estimate_crack_times;
use crate::entropy::{apply_penalties, raw_entropy_bits};
use crate::patterns::detect_patterns;
use crate::score::score_from_entropy;
use crate::suggest::build_suggestions;
use crate::types::{AnalysisResult, CategoryUsage};

/// Analyzes a password and returns the full strength report.
///
/// Total over any input, including the empty string, which reports the
/// floor entropy of one bit. The secret is exposed once here; everything
/// downstream works on borrowed plain text.
///
/// # Arguments
/// * `password` - The password to analyze
///
/// # Returns
/// An [`AnalysisResult`] with entropy figures, detected weaknesses, crack
/// times and ranked suggestions.
///
/// # Example
///
/// ```rust
/// use secrecy::SecretString;
///
/// let pwd = SecretString::new("Tr0ub4dor&3".to_string().into());
/// let report = pwd_meter::analyze(&pwd);
/// assert!(report.score <= 100);
/// ```
pub fn analyze(password: &SecretString) -> AnalysisResult {
    let pwd = password.expose_secret();
    let password_length = pwd.chars().count();

    let categories = CategoryUsage::detect(pwd);
    let character_set_size = categories.character_set_size();

    let unique_chars: HashSet<char> = pwd.chars().collect();
    let unique_char_count = unique_chars.len();
    let diversity_ratio = unique_char_count as f64 / password_length.max(1) as f64;

    let (detected_patterns, base_penalty_bits) = detect_patterns(pwd);

    let raw = raw_entropy_bits(password_length, character_set_size);
    let (penalties_bits, effective_entropy_bits) =
        apply_penalties(raw, base_penalty_bits, &detected_patterns);

    let (score, strength_label) = score_from_entropy(effective_entropy_bits);
    let crack_times = estimate_crack_times(effective_entropy_bits);
    let suggestions = build_suggestions(
        password_length,
        &categories,
        unique_char_count,
        &detected_patterns,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "analysis complete: score {} ({}), {} patterns",
        score,
        strength_label,
        detected_patterns.len()
    );

    AnalysisResult {
        password_length,
        categories,
        character_set_size,
        unique_char_count,
        diversity_ratio,
        raw_entropy_bits: raw,
        penalties_bits,
        effective_entropy_bits,
        score,
        strength_label,
        detected_patterns,
        crack_times,
        suggestions,
        notes: vec![
            crate::DISCLAIMER.to_string(),
            "Crack times are mean values under idealized attacker models".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PatternKind, StrengthLabel};
    use serial_test::serial;

    fn reset_words() {
        crate::wordlist::reset_wordlist_for_testing();
    }

    #[test]
    #[serial]
    fn test_numeric_sequence_password_is_very_weak() {
        reset_words();
        let pwd = SecretString::new("123456".to_string().into());
        let report = analyze(&pwd);

        assert_eq!(report.password_length, 6);
        assert_eq!(report.character_set_size, 10);
        assert_eq!(report.strength_label, StrengthLabel::VeryWeak);
        assert!(report.score < 20, "score {}", report.score);
        assert!(
            report
                .detected_patterns
                .iter()
                .any(|f| f.kind == PatternKind::NumericSequence)
        );
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    #[serial]
    fn test_leet_variant_of_common_word_floors_entropy() {
        reset_words();
        let pwd = SecretString::new("P@ssw0rd".to_string().into());
        let report = analyze(&pwd);

        assert!(
            report
                .detected_patterns
                .iter()
                .any(|f| f.kind == PatternKind::CommonWord)
        );
        assert_eq!(report.effective_entropy_bits, 1.0);
        assert_eq!(report.strength_label, StrengthLabel::VeryWeak);
        assert!(report.penalties_bits > report.raw_entropy_bits);
    }

    #[test]
    #[serial]
    fn test_long_varied_passphrase_scores_high() {
        reset_words();
        let pwd = SecretString::new("ChansonBleue-Soleil+Prairie2024!".to_string().into());
        let report = analyze(&pwd);

        assert_eq!(report.password_length, 32);
        assert_eq!(report.strength_label, StrengthLabel::VeryStrong);
        assert!(report.score >= 90, "score {}", report.score);
        // The embedded year still gets called out
        assert!(
            report
                .detected_patterns
                .iter()
                .any(|f| f.kind == PatternKind::DateLike)
        );
    }

    #[test]
    #[serial]
    fn test_empty_password_yields_floor_report() {
        reset_words();
        let pwd = SecretString::new("".to_string().into());
        let report = analyze(&pwd);

        assert_eq!(report.password_length, 0);
        assert_eq!(report.character_set_size, 0);
        assert_eq!(report.raw_entropy_bits, 0.0);
        assert_eq!(report.effective_entropy_bits, 1.0);
        assert_eq!(report.score, 1);
        assert_eq!(report.diversity_ratio, 0.0);
        assert!(report.detected_patterns.is_empty());
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    #[serial]
    fn test_effective_entropy_stays_bounded() {
        reset_words();
        let samples = [
            "a",
            "123456",
            "P@ssw0rd",
            "correct horse battery staple",
            "Kf8!mQz2&wRp",
        ];
        for sample in samples {
            let pwd = SecretString::new(sample.to_string().into());
            let report = analyze(&pwd);
            assert!(
                report.effective_entropy_bits >= 1.0,
                "floor violated for {sample}"
            );
            assert!(
                report.effective_entropy_bits <= report.raw_entropy_bits.max(1.0),
                "effective above raw for {sample}"
            );
            assert!(report.score <= 100);
        }
    }

    #[test]
    #[serial]
    fn test_crack_times_and_notes_populated() {
        reset_words();
        let pwd = SecretString::new("MyPass123!".to_string().into());
        let report = analyze(&pwd);

        assert!(!report.crack_times.offline_fast.formatted_time.is_empty());
        assert!(!report.crack_times.offline_medium.formatted_time.is_empty());
        assert!(!report.crack_times.online_limited.formatted_time.is_empty());
        assert!(
            report.crack_times.offline_fast.time_seconds
                <= report.crack_times.online_limited.time_seconds
        );
        assert_eq!(report.notes.len(), 2);
        assert_eq!(report.notes[0], crate::DISCLAIMER);
    }

    #[test]
    #[serial]
    fn test_report_serializes_with_wire_names() {
        reset_words();
        let pwd = SecretString::new("123456".to_string().into());
        let value = serde_json::to_value(analyze(&pwd)).expect("serializable report");

        assert_eq!(value["passwordLength"], 6);
        assert_eq!(value["strengthLabel"], "Very weak");
        assert_eq!(value["detectedPatterns"][0]["kind"], "numeric-sequence");
        assert_eq!(value["detectedPatterns"][0]["match"], "1234");
        assert!(value["crackTimes"]["offlineFast"]["formattedTime"].is_string());
        assert!(value["effectiveEntropyBits"].is_number());
        assert!(value["categories"]["hasDigits"].as_bool().unwrap());
    }
}
