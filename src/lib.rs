//! Password strength analysis and secure password generation library
//!
//! This library estimates how resistant a password is to guessing attacks
//! and generates new passwords from OS randomness under configurable
//! constraints. All results are heuristic estimates for educational use,
//! not a security guarantee.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to the extra common-word file
//!   (default: `./assets/wordlist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{analyze, generate, GeneratorOptions};
//! use secrecy::SecretString;
//!
//! // Score an existing password
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let report = analyze(&password);
//! println!("Score: {} ({})", report.score, report.strength_label);
//!
//! // Generate a fresh one and score it
//! let generated = generate(&GeneratorOptions::default()).expect("system rng available");
//! let report = analyze(&generated);
//! assert!(report.score > 0);
//! ```

// Internal modules
mod analyzer;
mod charset;
mod crack;
mod entropy;
mod generator;
mod patterns;
mod score;
mod suggest;
mod types;
mod wordlist;

// Public API
pub use analyzer::analyze;
pub use crack::{estimate_crack_times, format_duration};
pub use entropy::{apply_penalties, raw_entropy_bits};
pub use generator::{
    generate, generate_with_analysis, generate_with_rng, GenerateError, GeneratedPassword,
    ValidationError, MAX_GENERATED_LENGTH, MIN_GENERATED_LENGTH,
};
pub use patterns::detect_patterns;
pub use score::score_from_entropy;
pub use types::{
    AnalysisResult, CategoryUsage, CrackScenario, CrackTimes, GeneratorOptions, PatternFinding,
    PatternKind, ScenarioId, StrengthLabel, Suggestion,
};
pub use wordlist::{init_wordlist, init_wordlist_from_path, WordlistError};

/// Longest input hosting layers should accept. [`analyze`] itself stays
/// total; hosts enforce this limit at their input edge.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Disclaimer attached to every report as its first note.
pub const DISCLAIMER: &str =
    "Educational estimate only; not a guarantee of resistance to real attacks.";
