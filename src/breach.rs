//! Breach-database collaborator boundary.
//!
//! The actual k-anonymity lookup lives outside this crate. Only the
//! contract is defined here so callers can plug a checker next to the
//! local strength estimate.

use secrecy::SecretString;

/// Outcome of a breach-database lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreachStatus {
    /// Whether the password appeared in a known breach.
    pub is_pwned: bool,
    /// How many times it appeared, when the backend reports a count.
    pub breach_count: Option<u64>,
    /// Set when the lookup failed and the result degraded to "not pwned".
    pub error_message: Option<String>,
}

/// A breach-database checker.
///
/// Implementations must never panic and must degrade on transport
/// failure: return `is_pwned: false` with `error_message` set rather than
/// propagating an error, so callers can always show a result.
pub trait BreachCheck {
    fn check(&self, password: &SecretString) -> BreachStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysClean;

    impl BreachCheck for AlwaysClean {
        fn check(&self, _password: &SecretString) -> BreachStatus {
            BreachStatus::default()
        }
    }

    struct Unreachable;

    impl BreachCheck for Unreachable {
        fn check(&self, _password: &SecretString) -> BreachStatus {
            BreachStatus {
                is_pwned: false,
                breach_count: None,
                error_message: Some("network unreachable".to_string()),
            }
        }
    }

    #[test]
    fn test_default_status_is_clean() {
        let status = BreachStatus::default();
        assert!(!status.is_pwned);
        assert!(status.breach_count.is_none());
        assert!(status.error_message.is_none());
    }

    #[test]
    fn test_degraded_lookup_reports_error_not_pwned() {
        let checker = Unreachable;
        let status = checker.check(&SecretString::new("anything".to_string().into()));
        assert!(!status.is_pwned);
        assert!(status.error_message.is_some());
    }

    #[test]
    fn test_trait_object_usable() {
        let checkers: Vec<Box<dyn BreachCheck>> = vec![Box::new(AlwaysClean), Box::new(Unreachable)];
        let pwd = SecretString::new("test".to_string().into());
        for checker in &checkers {
            let _ = checker.check(&pwd);
        }
    }
}
