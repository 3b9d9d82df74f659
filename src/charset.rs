//! Character class alphabets shared by the analyzer and the generator.

/// Lowercase class alphabet (26 characters).
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Uppercase class alphabet (26 characters).
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digit class alphabet (10 characters).
pub const DIGITS: &[u8] = b"0123456789";

/// Reference symbol alphabet used to size the symbol class when estimating
/// entropy (32 characters). Class *membership* is broader: any character
/// outside ASCII alphanumerics counts as a symbol; this alphabet only fixes
/// the cardinality the entropy model assumes for that class.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:'\"\\|,.<>/?`~";

/// Symbol pool the generator draws from (30 characters). Same as [`SYMBOLS`]
/// minus the two quote characters, which are never emitted.
pub const SYMBOLS_POOL: &[u8] = b"!@#$%^&*()-_=+[]{};:,.?/\\|`~<>";

/// Characters dropped from every pool when `exclude_ambiguous` is set:
/// `O`, `0`, `l`, `1`, `I`.
pub const AMBIGUOUS: &[u8] = b"O0l1I";

/// Returns `pool` with all [`AMBIGUOUS`] characters removed.
pub fn without_ambiguous(pool: &[u8]) -> Vec<u8> {
    pool.iter()
        .copied()
        .filter(|c| !AMBIGUOUS.contains(c))
        .collect()
}
