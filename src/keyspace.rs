//! Attacker-adjusted keyspace model.
//!
//! Starts from the brute-force keyspace `charset_size ^ length` and shrinks
//! it with multiplicative penalties for every guessable structure found.
//! The smart-attack variant narrows further under dictionary, mask and
//! hybrid strategies and feeds only the crack-time projection.

use crate::patterns::{
    contains_date_pattern, contains_keyboard_pattern, contains_leet, contains_phone_pattern,
    contains_repeating_pattern, contains_sequential_pattern, extended_lexicon_size,
    extract_dictionary_substrings, first_name_hit, is_common_after_leet, is_common_password,
    topic_word_hit,
};
use crate::types::CharacterClasses;

/// Composite penalties never shrink below this before the pattern
/// multipliers apply.
const PENALTY_FLOOR: f64 = 1e-6;

/// Statistical sub-penalty floor.
const STATISTICAL_FLOOR: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Lower,
    Upper,
    Digit,
    Symbol,
}

fn kind_of(c: char) -> CharKind {
    if c.is_ascii_lowercase() {
        CharKind::Lower
    } else if c.is_ascii_uppercase() {
        CharKind::Upper
    } else if c.is_ascii_digit() {
        CharKind::Digit
    } else {
        CharKind::Symbol
    }
}

/// Alternation (aBaBaB-style class flip-flop) and adjacent repeated blocks.
fn statistical_penalty(password: &str) -> f64 {
    let chars: Vec<char> = password.chars().collect();
    let len = chars.len();
    let mut penalty: f64 = 1.0;

    if len >= 3 {
        let alternating = (1..len - 1)
            .filter(|&i| {
                kind_of(chars[i - 1]) == kind_of(chars[i + 1])
                    && kind_of(chars[i]) != kind_of(chars[i + 1])
            })
            .count();
        if alternating as f64 > 0.4 * len as f64 {
            penalty *= 0.3;
        }
    }

    'blocks: for block in 2..=len / 2 {
        for i in 0..=len - 2 * block {
            if chars[i..i + block] == chars[i + block..i + 2 * block] {
                penalty *= 0.2;
                break 'blocks;
            }
        }
    }

    penalty.max(STATISTICAL_FLOOR)
}

/// Attacker-adjusted keyspace, floored at 1.
pub fn effective_keyspace(password: &str, classes: &CharacterClasses) -> f64 {
    // Exact lexicon hits leave nothing to search.
    if is_common_password(password) {
        return 1.0;
    }

    let length = password.chars().count();

    // A leet-disguised lexicon entry costs the attacker one substitution
    // table, not a brute-force sweep.
    if is_common_after_leet(password) {
        return 1000.0_f64.min(length as f64 * 10.0);
    }

    let base = (classes.charset_size() as f64).powi(length as i32);

    let dictionary_hits = extract_dictionary_substrings(password);

    let mut penalty: f64 = 1.0;
    if contains_leet(password) {
        penalty *= 0.3;
    }
    if !dictionary_hits.is_empty() {
        penalty *= 0.001;
    }
    if contains_keyboard_pattern(password) {
        penalty *= 0.1;
    }
    if contains_date_pattern(password) {
        penalty *= 0.2;
    }
    if contains_phone_pattern(password) {
        penalty *= 0.1;
    }
    if topic_word_hit(password).is_some() {
        penalty *= 0.5;
    }
    if first_name_hit(password).is_some() {
        penalty *= 0.3;
    }
    penalty = penalty.max(PENALTY_FLOOR);

    if contains_repeating_pattern(password) {
        penalty *= 0.05;
    }
    if contains_sequential_pattern(password) {
        penalty *= 0.05;
    }

    // Hybrid attack: dictionary word plus a short brute-forced tail.
    if let Some(max_word) = dictionary_hits.iter().map(|w| w.len()).max() {
        let extra = length.saturating_sub(max_word);
        penalty *= 0.5_f64.powi(extra as i32).min(0.1);
    }

    penalty *= statistical_penalty(password);

    (base * penalty).max(1.0)
}

/// Keyspace under dictionary/mask/hybrid strategies. Never larger than the
/// effective keyspace; used only for crack-time projection.
pub fn smart_attack_keyspace(password: &str, classes: &CharacterClasses) -> f64 {
    let keyspace = effective_keyspace(password, classes);
    let length = password.chars().count();

    let dictionary_hits = extract_dictionary_substrings(password);
    if let Some(max_word) = dictionary_hits.iter().map(|w| w.len()).max() {
        let extra = length.saturating_sub(max_word);
        let hybrid = extended_lexicon_size() as f64 * 100.0_f64.powi(extra as i32);
        return keyspace.min(hybrid);
    }

    if contains_date_pattern(password) || contains_phone_pattern(password) {
        return keyspace.min(10.0_f64.powi(length as i32) * 1000.0);
    }

    if contains_keyboard_pattern(password) {
        return keyspace.min(1000.0_f64.powf(length as f64 / 3.0));
    }

    keyspace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scan_classes;

    fn keyspace_of(pwd: &str) -> f64 {
        effective_keyspace(pwd, &scan_classes(pwd))
    }

    #[test]
    fn test_common_password_is_single_guess() {
        assert_eq!(keyspace_of("password"), 1.0);
        assert_eq!(keyspace_of("QWERTY"), 1.0);
    }

    #[test]
    fn test_leet_disguise_caps_keyspace() {
        // "p@ssw0rd" normalizes to "password": 8 chars * 10
        assert_eq!(keyspace_of("p@ssw0rd"), 80.0);
        assert_eq!(keyspace_of("Dr4g0n"), 60.0);
    }

    #[test]
    fn test_clean_password_keeps_base_keyspace() {
        // letters only, no walks, no sequences, no dictionary words,
        // no class alternation
        let pwd = "KQMxvtwr";
        let expected = 52.0_f64.powi(8);
        assert_eq!(keyspace_of(pwd), expected);
    }

    #[test]
    fn test_dictionary_substring_penalty() {
        let clean = keyspace_of("KQMxvtwrjpn");
        let wordy = keyspace_of("KxPassWordQ"); // contains "password", same length
        assert!(wordy < clean);
    }

    #[test]
    fn test_keyspace_floor_is_one() {
        assert!(keyspace_of("") >= 1.0);
        assert!(keyspace_of("a") >= 1.0);
        assert!(keyspace_of("aaa") >= 1.0);
    }

    #[test]
    fn test_repeating_pattern_multiplier() {
        let repeated = keyspace_of("WkMqWkMqWkMq"); // "WkMq" x3
        let base = 52.0_f64.powi(12);
        assert!(repeated < base * 0.06);
    }

    #[test]
    fn test_statistical_block_penalty() {
        // adjacent repeated block ("VwXy" twice) without tripling
        let doubled = keyspace_of("VwXyVwXyKmQp");
        let base = 52.0_f64.powi(12);
        assert!(doubled <= base * 0.2 + 1.0);
    }

    #[test]
    fn test_smart_keyspace_never_exceeds_effective() {
        for pwd in [
            "password123",
            "qwerty789",
            "12/25/1990",
            "555-123-4567",
            "KxmQvTwR",
            "Tiger2024!",
        ] {
            let classes = scan_classes(pwd);
            assert!(
                smart_attack_keyspace(pwd, &classes) <= effective_keyspace(pwd, &classes),
                "smart > effective for {pwd}"
            );
        }
    }

    #[test]
    fn test_smart_keyspace_date_mask() {
        // digits-only date: mask attack bounds the search at 10^len * 1000
        let pwd = "19841984";
        let classes = scan_classes(pwd);
        let smart = smart_attack_keyspace(pwd, &classes);
        assert!(smart <= 10.0_f64.powi(8) * 1000.0);
    }

    #[test]
    fn test_smart_keyspace_dictionary_bound() {
        let pwd = "passwordXY"; // "password" + 2 extra
        let classes = scan_classes(pwd);
        let bound = extended_lexicon_size() as f64 * 100.0_f64.powi(2);
        assert!(smart_attack_keyspace(pwd, &classes) <= bound);
    }

    #[test]
    fn test_keyboard_walk_smart_bound() {
        let pwd = "XqJmTkVzPw"; // contains no walk; control
        let classes = scan_classes(pwd);
        assert_eq!(
            smart_attack_keyspace(pwd, &classes),
            effective_keyspace(pwd, &classes)
        );

        let walk = "Vmqwerglhx"; // contains "qwer"
        let classes = scan_classes(walk);
        let bound = 1000.0_f64.powf(10.0 / 3.0);
        assert!(smart_attack_keyspace(walk, &classes) <= bound);
    }
}
