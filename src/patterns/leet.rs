//! Leet-speak normalization.

/// Substitution table: glyph -> the letter it stands in for.
const LEET_MAP: &[(char, char)] = &[
    ('@', 'a'),
    ('4', 'a'),
    ('8', 'b'),
    ('3', 'e'),
    ('6', 'g'),
    ('9', 'g'),
    ('1', 'i'),
    ('!', 'i'),
    ('0', 'o'),
    ('$', 's'),
    ('5', 's'),
    ('7', 't'),
    ('+', 't'),
    ('2', 'z'),
];

fn substitute(c: char) -> Option<char> {
    LEET_MAP.iter().find(|(glyph, _)| *glyph == c).map(|(_, letter)| *letter)
}

/// Case-folds the password and maps every leet glyph back to its letter.
pub fn normalize_leet(password: &str) -> String {
    password
        .to_lowercase()
        .chars()
        .map(|c| substitute(c).unwrap_or(c))
        .collect()
}

/// True when the password mixes at least one leet glyph with letters.
///
/// Pure digit strings are left to the date and phone detectors.
pub fn contains_leet(password: &str) -> bool {
    let has_glyph = password.chars().any(|c| substitute(c).is_some());
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    has_glyph && has_letter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_leet_classic() {
        assert_eq!(normalize_leet("P@ssw0rd"), "password");
        assert_eq!(normalize_leet("l33t"), "leet");
        assert_eq!(normalize_leet("Dr4g0n"), "dragon");
    }

    #[test]
    fn test_normalize_leet_passthrough() {
        assert_eq!(normalize_leet("plain"), "plain");
        assert_eq!(normalize_leet(""), "");
    }

    #[test]
    fn test_contains_leet_requires_letters() {
        assert!(contains_leet("P@ssword"));
        assert!(contains_leet("pa55word"));
        // digits alone are not leet
        assert!(!contains_leet("19845012"));
        assert!(!contains_leet("plainword"));
    }
}
