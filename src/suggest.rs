//! Improvement suggestions ranked by estimated impact.

use std::cmp::Ordering;

use crate::types::{CategoryUsage, PatternFinding, PatternKind, Suggestion};

/// At most this many suggestions survive ranking.
const MAX_SUGGESTIONS: usize = 8;

fn has_kind(findings: &[PatternFinding], kind: PatternKind) -> bool {
    findings.iter().any(|f| f.kind == kind)
}

/// Builds the ranked suggestion list for one analysis.
///
/// Candidates are collected in a fixed order, sorted by descending
/// `impact_bits` with ties keeping that order, then capped at eight. The
/// closing passphrase hint is always a candidate.
pub fn build_suggestions(
    password_length: usize,
    categories: &CategoryUsage,
    unique_char_count: usize,
    findings: &[PatternFinding],
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let mut push = |message: &str, impact_bits: f64| {
        suggestions.push(Suggestion {
            message: message.to_string(),
            impact_bits,
        });
    };

    if password_length < 12 {
        push("Increase the length toward 12-16+ characters", 10.0);
    }
    if !categories.has_lowercase {
        push("Add some lowercase letters", 5.0);
    }
    if !categories.has_uppercase {
        push("Add one or two uppercase letters in the middle", 5.0);
    }
    if !categories.has_symbols {
        push("Add one or two symbols away from the end", 8.0);
    }
    if !categories.has_digits {
        push("Work in an unpredictable digit", 6.0);
    }
    if (unique_char_count as f64) < password_length as f64 * 0.7 {
        push("Increase the diversity of unique characters", 6.0);
    }
    if has_kind(findings, PatternKind::CommonWord) {
        push("Avoid common words and their variants", 15.0);
    }
    if has_kind(findings, PatternKind::NumericSequence) {
        push("Replace simple sequences with unpredictable combinations", 12.0);
    }
    if has_kind(findings, PatternKind::DateLike) {
        push("Avoid dates and personal information", 8.0);
    }
    push("Consider a passphrase of several unique words", 12.0);

    suggestions.sort_by(|a, b| {
        b.impact_bits
            .partial_cmp(&a.impact_bits)
            .unwrap_or(Ordering::Equal)
    });
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
