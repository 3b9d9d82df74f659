//! Secure password generation from OS randomness.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use secrecy::SecretString;
use thiserror::Error;

use crate::analyzer::analyze;
use crate::charset;
use crate::types::{AnalysisResult, GeneratorOptions};

/// Shortest accepted target length.
pub const MIN_GENERATED_LENGTH: usize = 8;
/// Longest accepted target length.
pub const MAX_GENERATED_LENGTH: usize = 64;

/// Rejections raised before any randomness is drawn.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Requested length {requested} outside allowed range {}..={}",
        MIN_GENERATED_LENGTH,
        MAX_GENERATED_LENGTH
    )]
    LengthOutOfRange { requested: usize },
    #[error("At least one character category must be selected")]
    NoCategorySelected,
    #[error("Length {length} cannot fit one character from each of {selected} categories")]
    LengthBelowCategoryCount { length: usize, selected: usize },
    #[error("Effective alphabet of {size} characters is too small")]
    AlphabetTooSmall { size: usize },
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("System randomness unavailable: {0}")]
    RandomnessUnavailable(#[from] rand::Error),
}

/// Generates a password from the operating system CSPRNG.
///
/// Options are validated first; nothing is drawn from the generator until
/// they pass. The result is wrapped in [`SecretString`] immediately and the
/// plain text is never logged.
///
/// # Errors
///
/// Returns [`GenerateError::Validation`] for contradictory options and
/// [`GenerateError::RandomnessUnavailable`] when the OS entropy source
/// cannot be read.
///
/// # Example
///
/// ```rust
/// use pwd_meter::{generate, GeneratorOptions};
/// use secrecy::ExposeSecret;
///
/// let password = generate(&GeneratorOptions::default()).expect("system rng available");
/// assert_eq!(password.expose_secret().chars().count(), 16);
/// ```
pub fn generate(options: &GeneratorOptions) -> Result<SecretString, GenerateError> {
    let pool = validated_pool(options)?;

    // Probe the entropy source once so an outage surfaces as an error
    // instead of a panic inside the sampling loop.
    let mut probe = [0u8; 4];
    if let Err(e) = OsRng.try_fill_bytes(&mut probe) {
        #[cfg(feature = "tracing")]
        tracing::error!("Password generation FAILED: system randomness unavailable: {}", e);
        return Err(GenerateError::RandomnessUnavailable(e));
    }

    Ok(fill_password(&mut OsRng, options, &pool))
}

/// A freshly generated password together with its strength report.
///
/// Not serializable as a whole: hosts that want to ship the plain text must
/// expose the secret explicitly.
#[derive(Debug)]
pub struct GeneratedPassword {
    pub password: SecretString,
    pub analysis: AnalysisResult,
}

/// Generates a password and immediately analyzes it.
///
/// # Errors
///
/// Same failure modes as [`generate`].
pub fn generate_with_analysis(
    options: &GeneratorOptions,
) -> Result<GeneratedPassword, GenerateError> {
    let password = generate(options)?;
    let analysis = analyze(&password);
    Ok(GeneratedPassword { password, analysis })
}

/// Generates a password from a caller-supplied generator.
///
/// The `CryptoRng` bound keeps non-cryptographic generators out at compile
/// time. Intended for deterministic tests and for hosts that manage their
/// own entropy; production callers normally want [`generate`].
///
/// # Errors
///
/// Returns [`GenerateError::Validation`] for contradictory options.
pub fn generate_with_rng<R: Rng + CryptoRng>(
    rng: &mut R,
    options: &GeneratorOptions,
) -> Result<SecretString, GenerateError> {
    let pool = validated_pool(options)?;
    Ok(fill_password(rng, options, &pool))
}

/// Validates the options and builds the merged sampling pool.
fn validated_pool(options: &GeneratorOptions) -> Result<Vec<u8>, ValidationError> {
    if options.length < MIN_GENERATED_LENGTH || options.length > MAX_GENERATED_LENGTH {
        return Err(ValidationError::LengthOutOfRange {
            requested: options.length,
        });
    }

    let selected = options.selected_categories();
    if selected == 0 {
        return Err(ValidationError::NoCategorySelected);
    }
    if options.require_each_selected_type && options.length < selected {
        return Err(ValidationError::LengthBelowCategoryCount {
            length: options.length,
            selected,
        });
    }

    let mut pool = Vec::new();
    for class_pool in enabled_class_pools(options) {
        pool.extend_from_slice(class_pool);
    }
    if options.exclude_ambiguous {
        pool.retain(|b| !charset::AMBIGUOUS.contains(b));
    }
    no_repeat_guard(&pool, options.no_repeats)?;

    Ok(pool)
}

/// A one-character pool cannot satisfy `no_repeats`; the sampling loop
/// would spin forever re-drawing the same character.
fn no_repeat_guard(pool: &[u8], no_repeats: bool) -> Result<(), ValidationError> {
    if pool.is_empty() || (no_repeats && pool.len() < 2) {
        return Err(ValidationError::AlphabetTooSmall { size: pool.len() });
    }
    Ok(())
}

/// Class pools for the selected categories, in fixed order.
fn enabled_class_pools(options: &GeneratorOptions) -> Vec<&'static [u8]> {
    let mut pools = Vec::new();
    if options.include_lowercase {
        pools.push(charset::LOWERCASE);
    }
    if options.include_uppercase {
        pools.push(charset::UPPERCASE);
    }
    if options.include_digits {
        pools.push(charset::DIGITS);
    }
    if options.include_symbols {
        pools.push(charset::SYMBOLS_POOL);
    }
    pools
}

/// Samples the password. Options and pool are already validated.
fn fill_password<R: Rng + CryptoRng>(
    rng: &mut R,
    options: &GeneratorOptions,
    pool: &[u8],
) -> SecretString {
    let mut buffer: Vec<u8> = Vec::with_capacity(options.length);

    // One guaranteed character per selected class, shuffled so the class
    // order never leaks into the prefix.
    if options.require_each_selected_type {
        let mut seeds = Vec::new();
        for class_pool in enabled_class_pools(options) {
            let class_pool = if options.exclude_ambiguous {
                charset::without_ambiguous(class_pool)
            } else {
                class_pool.to_vec()
            };
            seeds.push(class_pool[rng.gen_range(0..class_pool.len())]);
        }
        seeds.shuffle(rng);
        buffer.extend(seeds);
    }

    while buffer.len() < options.length {
        let next = pool[rng.gen_range(0..pool.len())];
        if options.no_repeats && buffer.last() == Some(&next) {
            continue;
        }
        buffer.push(next);
    }

    buffer.shuffle(rng);

    SecretString::new(buffer.into_iter().map(char::from).collect::<String>().into())
}
