//! Dictionary check over leet-normalized input.

use crate::types::{PatternFinding, PatternKind};
use crate::wordlist;

/// Lowercases the password and folds common leet substitutions back to
/// letters, so "P@ssw0rd" becomes "password".
pub(crate) fn normalize_leet(password: &str) -> String {
    password
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '0' => 'o',
            '1' => 'i',
            '3' => 'e',
            '4' | '@' => 'a',
            '5' | '$' => 's',
            '7' => 't',
            other => other,
        })
        .collect()
}

/// Flags the first common word the normalized password contains.
///
/// `matched` carries the dictionary word, not the literal substring from
/// the password.
pub(super) fn common_word_check(password: &str) -> Option<PatternFinding> {
    let normalized = normalize_leet(password);
    wordlist::find_common_word(&normalized).map(|word| PatternFinding {
        kind: PatternKind::CommonWord,
        message: "Password contains a common word or a leet-speak variant".to_string(),
        penalty_bits: 25.0,
        matched: Some(word),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_leet_folds_substitutions() {
        assert_eq!(normalize_leet("P@ssw0rd"), "password");
        assert_eq!(normalize_leet("l37m31n"), "letmein");
        assert_eq!(normalize_leet("AdM1N"), "admin");
        assert_eq!(normalize_leet("ca$h"), "cash");
    }

    #[test]
    fn test_normalize_leet_keeps_other_chars() {
        assert_eq!(normalize_leet("a-b_c!"), "a-b_c!");
        assert_eq!(normalize_leet("2689"), "2689");
    }

    #[test]
    fn test_plain_common_word() {
        let finding = common_word_check("mypasswordrocks").expect("builtin word");
        assert_eq!(finding.kind, PatternKind::CommonWord);
        assert_eq!(finding.penalty_bits, 25.0);
        assert_eq!(finding.matched.as_deref(), Some("password"));
    }

    #[test]
    fn test_leet_variant_matches() {
        let finding = common_word_check("P@ssw0rd").expect("leet variant");
        assert_eq!(finding.matched.as_deref(), Some("password"));
    }

    #[test]
    fn test_unrelated_password_passes() {
        assert!(common_word_check("Kf8!mQz2&wRp").is_none());
    }
}
