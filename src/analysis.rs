//! Single-pass character-class analysis and the simple entropy proxy.

use crate::patterns::is_common_password;
use crate::types::{CharacterClasses, PasswordAnalysis};

/// Scans the password once and records which classes appear.
///
/// Anything non-alphanumeric counts as a symbol.
pub fn scan_classes(password: &str) -> CharacterClasses {
    let mut classes = CharacterClasses::default();
    for c in password.chars() {
        if c.is_ascii_lowercase() {
            classes.has_lower = true;
        } else if c.is_ascii_uppercase() {
            classes.has_upper = true;
        } else if c.is_ascii_digit() {
            classes.has_digit = true;
        } else {
            classes.has_symbol = true;
        }
    }
    classes
}

/// `length * log2(charset_size)`, the randomness proxy used by the score
/// and suggestion paths. Zero when no class is present (empty password).
pub fn entropy_bits(length: usize, classes: &CharacterClasses) -> f64 {
    let charset = classes.charset_size();
    if charset == 0 {
        return 0.0;
    }
    length as f64 * (charset as f64).log2()
}

/// Builds the per-call analysis snapshot.
pub fn analyze(password: &str) -> PasswordAnalysis {
    let length = password.chars().count();
    let classes = scan_classes(password);
    PasswordAnalysis {
        length,
        classes,
        entropy_bits: entropy_bits(length, &classes),
        is_common: is_common_password(password),
        variety_score: classes.variety_score(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_classes_all_four() {
        let classes = scan_classes("aB3$");
        assert!(classes.has_lower);
        assert!(classes.has_upper);
        assert!(classes.has_digit);
        assert!(classes.has_symbol);
    }

    #[test]
    fn test_scan_classes_partial() {
        let classes = scan_classes("abc123");
        assert!(classes.has_lower);
        assert!(!classes.has_upper);
        assert!(classes.has_digit);
        assert!(!classes.has_symbol);
    }

    #[test]
    fn test_scan_classes_empty() {
        assert_eq!(scan_classes(""), CharacterClasses::default());
    }

    #[test]
    fn test_entropy_bits_lowercase_only() {
        let classes = scan_classes("abcdefgh");
        let bits = entropy_bits(8, &classes);
        // 8 * log2(26) = 37.6
        assert!((bits - 37.6).abs() < 0.1);
    }

    #[test]
    fn test_entropy_bits_empty_is_zero() {
        let classes = CharacterClasses::default();
        assert_eq!(entropy_bits(0, &classes), 0.0);
    }

    #[test]
    fn test_analyze_variety_invariant() {
        for pwd in ["", "abc", "aB3$x", "ABC123", "P@ssw0rd!"] {
            let analysis = analyze(pwd);
            assert_eq!(analysis.variety_score, analysis.classes.variety_score());
        }
    }

    #[test]
    fn test_analyze_common_flag() {
        assert!(analyze("password").is_common);
        assert!(analyze("QWERTY").is_common);
        assert!(!analyze("kX9$mQ2pLr").is_common);
    }
}
