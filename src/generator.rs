//! Secure password generation.
//!
//! Builds per-class character pools, guarantees one character from every
//! enabled class, fills the rest uniformly from the combined pool and
//! shuffles so the guaranteed characters do not cluster at the front.
//! Every draw comes from the thread-local CSPRNG.

use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

use crate::analysis::entropy_bits;
use crate::types::{CharacterClasses, GenerateOptions};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Glyphs that read ambiguously in most fonts.
const SIMILAR: &str = "0O1lI|";

const MIN_LENGTH: usize = 4;
const STRONG_CANDIDATES: usize = 5;

const MEMORABLE_SYMBOLS: &str = "!@#$%^&*";

/// Word list for memorable passwords. Short, concrete, easy to type.
const WORDS: [&str; 48] = [
    "amber", "anchor", "aspen", "autumn", "badge", "basil", "beacon",
    "breeze", "bridge", "candle", "canyon", "cedar", "cobalt", "comet",
    "copper", "coral", "cosmos", "crane", "delta", "drift", "ember",
    "fable", "garnet", "glacier", "harbor", "hazel", "indigo", "island",
    "jasper", "juniper", "lagoon", "lantern", "maple", "meadow", "nectar",
    "nimbus", "onyx", "orchid", "pebble", "quartz", "raven", "saffron",
    "summit", "thistle", "timber", "velvet", "willow", "zephyr",
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Password length must be at least {MIN_LENGTH} characters")]
    InvalidLength,
    #[error("At least one character class must be enabled")]
    NoCharacterClassSelected,
}

fn filter_similar(pool: &mut Vec<char>) {
    pool.retain(|c| !SIMILAR.contains(*c));
}

/// One candidate pool per enabled class, similar glyphs already removed
/// when requested.
fn build_pools(options: &GenerateOptions) -> Vec<Vec<char>> {
    let mut pools = Vec::new();
    if options.lowercase {
        pools.push(LOWERCASE.chars().collect());
    }
    if options.uppercase {
        pools.push(UPPERCASE.chars().collect());
    }
    if options.numbers {
        pools.push(DIGITS.chars().collect());
    }
    if options.symbols {
        pools.push(SYMBOLS.chars().collect());
    }
    if options.exclude_similar {
        for pool in &mut pools {
            filter_similar(pool);
        }
    }
    pools
}

fn classes_of(options: &GenerateOptions) -> CharacterClasses {
    CharacterClasses {
        has_lower: options.lowercase,
        has_upper: options.uppercase,
        has_digit: options.numbers,
        has_symbol: options.symbols,
    }
}

fn validate(options: &GenerateOptions) -> Result<(), GenerateError> {
    if options.length < MIN_LENGTH {
        return Err(GenerateError::InvalidLength);
    }
    if !(options.lowercase || options.uppercase || options.numbers || options.symbols) {
        return Err(GenerateError::NoCharacterClassSelected);
    }
    Ok(())
}

/// Generates a random password honoring the given options.
///
/// Every enabled class is represented at least once, whatever the length.
/// Output length always equals `options.length`.
///
/// # Errors
/// `InvalidLength` when `length < 4`, `NoCharacterClassSelected` when all
/// class flags are off.
pub fn generate_password(options: &GenerateOptions) -> Result<String, GenerateError> {
    validate(options)?;

    let mut rng = rand::thread_rng();
    let pools = build_pools(options);

    // One guaranteed character per enabled class.
    let mut password: Vec<char> = pools
        .iter()
        .map(|pool| pool[rng.gen_range(0..pool.len())])
        .collect();

    let mut combined: Vec<char> = pools.concat();
    if options.exclude_similar {
        // Already filtered per pool; harmless on the combined pool too.
        filter_similar(&mut combined);
    }

    for _ in password.len()..options.length {
        password.push(combined[rng.gen_range(0..combined.len())]);
    }

    // Fisher-Yates, so the guaranteed characters land anywhere.
    password.shuffle(&mut rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(length = options.length, "password generated");

    Ok(password.into_iter().collect())
}

/// Generates five candidates and keeps the first one with the strictly
/// highest entropy.
pub fn generate_strong_password(options: &GenerateOptions) -> Result<String, GenerateError> {
    let classes = classes_of(options);

    let mut best = generate_password(options)?;
    let mut best_bits = entropy_bits(best.chars().count(), &classes);

    for _ in 1..STRONG_CANDIDATES {
        let candidate = generate_password(options)?;
        let bits = entropy_bits(candidate.chars().count(), &classes);
        if bits > best_bits {
            best = candidate;
            best_bits = bits;
        }
    }

    Ok(best)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Generates a word-based memorable password, e.g. `Cedar-Lagoon-Quartz-7!`.
///
/// Draws `word_count` words with replacement (callers typically pass 4),
/// capitalizes each and joins with `-`. `add_numbers` appends `-` and an
/// integer in 0..100; `add_symbols` appends one symbol with no separator.
pub fn generate_memorable_password(
    word_count: usize,
    add_numbers: bool,
    add_symbols: bool,
) -> String {
    let mut rng = rand::thread_rng();

    let words: Vec<String> = (0..word_count)
        .map(|_| capitalize(WORDS[rng.gen_range(0..WORDS.len())]))
        .collect();

    let mut password = words.join("-");

    if add_numbers {
        password.push('-');
        password.push_str(&rng.gen_range(0..100u32).to_string());
    }

    if add_symbols {
        let symbols: Vec<char> = MEMORABLE_SYMBOLS.chars().collect();
        password.push(symbols[rng.gen_range(0..symbols.len())]);
    }

    password
}
