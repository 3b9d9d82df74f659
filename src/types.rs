//! Core data types for analysis results and generator options.
//!
//! Result types serialize with the camelCase field names hosting layers
//! expose over the wire; `GeneratorOptions` also deserializes so it can be
//! taken straight from a request body.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::charset;

/// Which of the four character classes a password uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUsage {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digits: bool,
    pub has_symbols: bool,
}

impl CategoryUsage {
    /// Detects class usage via ASCII membership. Anything outside ASCII
    /// alphanumerics counts as a symbol.
    pub fn detect(password: &str) -> Self {
        Self {
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_digits: password.chars().any(|c| c.is_ascii_digit()),
            has_symbols: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Sum of the class cardinalities for the classes *present*: the
    /// observed alphabet, not the configured one.
    pub fn character_set_size(&self) -> usize {
        let mut size = 0;
        if self.has_lowercase {
            size += charset::LOWERCASE.len();
        }
        if self.has_uppercase {
            size += charset::UPPERCASE.len();
        }
        if self.has_digits {
            size += charset::DIGITS.len();
        }
        if self.has_symbols {
            size += charset::SYMBOLS.len();
        }
        size
    }
}

/// The weakness families the pattern detector reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Repetition,
    RepeatedBlock,
    NumericSequence,
    AlphaSequence,
    CommonWord,
    DateLike,
}

/// One detected weakness: what fired, why, and what it costs in bits.
///
/// `matched` carries the first offending substring (or dictionary word) and
/// is informational only; note it echoes a fragment of the input, so hosts
/// should treat findings with the same care as the password itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFinding {
    pub kind: PatternKind,
    pub message: String,
    pub penalty_bits: f64,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
}

/// Five-tier strength verdict mapped from effective entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    #[serde(rename = "Very weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very strong")]
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::VeryWeak => "Very weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very strong",
        };
        f.write_str(label)
    }
}

/// The three fixed attacker-rate tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioId {
    OfflineFast,
    OfflineMedium,
    OnlineLimited,
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScenarioId::OfflineFast => "fast offline",
            ScenarioId::OfflineMedium => "medium offline",
            ScenarioId::OnlineLimited => "rate-limited online",
        };
        f.write_str(label)
    }
}

/// Crack-time estimate for one attacker-rate tier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrackScenario {
    pub id: ScenarioId,
    pub guesses_per_second: f64,
    pub time_seconds: f64,
    pub formatted_time: String,
}

/// Crack-time estimates for all three tiers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrackTimes {
    pub offline_fast: CrackScenario,
    pub offline_medium: CrackScenario,
    pub online_limited: CrackScenario,
}

/// An improvement hint. `impact_bits` is a fixed estimate used purely for
/// ranking and display, never fed back into any calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub message: String,
    pub impact_bits: f64,
}

/// Full strength report for one password. Built once per [`analyze`] call
/// and never mutated.
///
/// [`analyze`]: crate::analyze
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub password_length: usize,
    pub categories: CategoryUsage,
    pub character_set_size: usize,
    pub unique_char_count: usize,
    pub diversity_ratio: f64,
    pub raw_entropy_bits: f64,
    pub penalties_bits: f64,
    pub effective_entropy_bits: f64,
    pub score: u8,
    pub strength_label: StrengthLabel,
    pub detected_patterns: Vec<PatternFinding>,
    pub crack_times: CrackTimes,
    pub suggestions: Vec<Suggestion>,
    pub notes: Vec<String>,
}

/// Options accepted by the generator. Validated before any sampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Target length, 8 to 64 characters.
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    /// Drop `O 0 l 1 I` from every pool.
    #[serde(default)]
    pub exclude_ambiguous: bool,
    /// Reject a draw equal to the previously buffered character. The final
    /// shuffle may still place identical characters next to each other.
    #[serde(default)]
    pub no_repeats: bool,
    /// Guarantee at least one character from every selected class.
    #[serde(default)]
    pub require_each_selected_type: bool,
}

impl GeneratorOptions {
    /// Number of selected character classes.
    pub fn selected_categories(&self) -> usize {
        [
            self.include_lowercase,
            self.include_uppercase,
            self.include_digits,
            self.include_symbols,
        ]
        .iter()
        .filter(|&&selected| selected)
        .count()
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
            exclude_ambiguous: false,
            no_repeats: false,
            require_each_selected_type: false,
        }
    }
}
