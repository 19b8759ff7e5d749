//! Keyboard-walk and sequential-run detection.
//!
//! Both detectors are plain substring scans against fixed reference
//! strings, checked in both directions. No regex engine involved.

/// QWERTY rows, column walks and interleaved diagonals.
const WALKS: &[&str] = &[
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
    "1234567890",
    "1qaz2wsx3edc4rfv5tgb6yhn7ujm8ik9ol",
    "qazwsxedcrfvtgbyhnujmikolp",
    "1q2w3e4r5t6y7u8i9o0p",
];

/// Ordered reference sequences for the 3-gram sequential check: digits,
/// alphabet and the two long keyboard rows, each in both directions.
const SEQUENCES: &[&str] = &[
    "0123456789",
    "9876543210",
    "abcdefghijklmnopqrstuvwxyz",
    "zyxwvutsrqponmlkjihgfedcba",
    "qwertyuiop",
    "poiuytrewq",
    "asdfghjkl",
    "lkjhgfdsa",
];

const WALK_WINDOW: usize = 4;

fn windows_of(s: &str, size: usize) -> impl Iterator<Item = &str> {
    (0..s.len().saturating_sub(size - 1)).map(move |i| &s[i..i + size])
}

/// True when any 4-glyph stretch of a keyboard walk (either direction)
/// appears in the case-folded password.
pub fn contains_keyboard_pattern(password: &str) -> bool {
    let folded = password.to_lowercase();
    if folded.len() < WALK_WINDOW {
        return false;
    }
    for walk in WALKS {
        let reversed: String = walk.chars().rev().collect();
        if windows_of(walk, WALK_WINDOW).any(|w| folded.contains(w))
            || windows_of(&reversed, WALK_WINDOW).any(|w| folded.contains(w))
        {
            return true;
        }
    }
    false
}

/// True when any case-folded 3-gram of the password lies inside one of the
/// ordered reference sequences.
pub fn contains_sequential_pattern(password: &str) -> bool {
    let folded = password.to_lowercase();
    let chars: Vec<char> = folded.chars().collect();
    if chars.len() < 3 {
        return false;
    }
    for gram in chars.windows(3) {
        let gram: String = gram.iter().collect();
        if SEQUENCES.iter().any(|seq| seq.contains(&gram)) {
            return true;
        }
    }
    false
}
