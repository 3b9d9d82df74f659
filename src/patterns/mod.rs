//! Weak-pattern detectors.
//!
//! Each check scans for one weakness family and reports at most one finding
//! with a fixed penalty. Penalties are additive across families.

mod dates;
mod dictionary;
mod repeats;
mod sequences;

use crate::types::PatternFinding;

/// A single pattern check: `Some(finding)` when the weakness is present.
type PatternCheck = fn(&str) -> Option<PatternFinding>;

/// Runs every pattern check against the password.
///
/// # Returns
///
/// The findings in fixed check order plus the sum of their penalties in
/// bits. An empty password yields no findings.
pub fn detect_patterns(password: &str) -> (Vec<PatternFinding>, f64) {
    if password.is_empty() {
        return (Vec::new(), 0.0);
    }

    let checks: [PatternCheck; 6] = [
        repeats::repetition_check,
        repeats::repeated_block_check,
        sequences::numeric_sequence_check,
        sequences::alpha_sequence_check,
        dictionary::common_word_check,
        dates::date_check,
    ];

    let mut findings = Vec::new();
    let mut total_penalty_bits = 0.0;
    for check in checks {
        if let Some(finding) = check(password) {
            total_penalty_bits += finding.penalty_bits;
            findings.push(finding);
        }
    }

    (findings, total_penalty_bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PatternKind;

    #[test]
    fn test_empty_password_has_no_findings() {
        let (findings, penalty) = detect_patterns("");
        assert!(findings.is_empty());
        assert_eq!(penalty, 0.0);
    }

    #[test]
    fn test_clean_password_has_no_findings() {
        let (findings, penalty) = detect_patterns("Kf8!mQz2&wRp");
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
        assert_eq!(penalty, 0.0);
    }

    #[test]
    fn test_penalties_accumulate_across_families() {
        // "aaaa" fires repetition, "1234" fires the numeric sequence
        let (findings, penalty) = detect_patterns("aaaa1234");
        assert_eq!(findings.len(), 2);
        assert_eq!(penalty, 10.0 + 12.0);
    }

    #[test]
    fn test_findings_follow_check_order() {
        let (findings, _) = detect_patterns("password1234");
        let kinds: Vec<PatternKind> = findings.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![PatternKind::NumericSequence, PatternKind::CommonWord]
        );
    }

    #[test]
    fn test_each_family_reports_once() {
        // Two separate runs of repeated characters still yield one finding
        let (findings, penalty) = detect_patterns("aaaaxbbbb");
        assert_eq!(findings.len(), 1);
        assert_eq!(penalty, 10.0);
    }
}
