//! Slug generation, normalization, and validation.
//!
//! Slugs are the short identifiers that map to target URLs: lowercase,
//! `[a-z0-9-]`, between [`MIN_SLUG_LEN`] and [`MAX_SLUG_LEN`] characters.

use regex::Regex;
use std::sync::LazyLock;

/// 36-symbol alphabet for generated slugs: lowercase letters + digits.
const SLUG_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Minimum accepted slug length.
///
/// The shortest useful slug; anything shorter is rejected everywhere
/// (generation only emits 6-8 characters anyway).
pub const MIN_SLUG_LEN: usize = 2;

/// Maximum accepted slug length. Normalization truncates to this.
pub const MAX_SLUG_LEN: usize = 64;

/// Compiled validation regex; the whole string must match.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]{2,64}$").expect("slug regex is valid"));

/// Generates a random slug of the given length.
///
/// Each symbol is drawn independently from the 36-symbol alphabet using
/// the system CSPRNG.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_slug(length: usize) -> String {
    let mut buffer = vec![0u8; length];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .iter()
        .map(|b| SLUG_ALPHABET[*b as usize % SLUG_ALPHABET.len()] as char)
        .collect()
}

/// Generates a random slug with a length picked uniformly from 6 to 8.
///
/// The varying length trades link brevity against collision probability.
pub fn random_slug() -> String {
    let mut byte = [0u8; 1];
    getrandom::fill(&mut byte).expect("Failed to generate random bytes");

    generate_slug(6 + byte[0] as usize % 3)
}

/// Normalizes a user-supplied slug to canonical form.
///
/// # Rules
///
/// 1. Trim leading/trailing whitespace
/// 2. Lowercase
/// 3. Collapse internal whitespace runs to a single hyphen
/// 4. Strip every character outside `[a-z0-9-]`
/// 5. Truncate to [`MAX_SLUG_LEN`]
///
/// Idempotent: `normalize_slug(normalize_slug(s)) == normalize_slug(s)`.
/// The result may still be too short (or empty); callers must run
/// [`is_valid_slug`] on it before use.
pub fn normalize_slug(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_hyphen = false;

    for c in raw.trim().chars() {
        if c.is_whitespace() {
            pending_hyphen = true;
            continue;
        }
        if pending_hyphen {
            out.push('-');
            pending_hyphen = false;
        }
        for lc in c.to_lowercase() {
            if lc.is_ascii_lowercase() || lc.is_ascii_digit() || lc == '-' {
                out.push(lc);
            }
        }
    }

    // Output is pure ASCII, so byte truncation is char truncation.
    out.truncate(MAX_SLUG_LEN);
    out
}

/// Returns `true` iff the whole string matches `^[a-z0-9-]{2,64}$`.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}
