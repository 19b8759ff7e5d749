//! Password strength estimation and secure password generation.
//!
//! Two tightly coupled engines: a strength estimator (character-class
//! analysis, pattern detection, keyspace penalties, crack-time projection)
//! and a generator (constrained charsets, guaranteed class coverage,
//! best-of-N and memorable variants).
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FORGE_BLACKLIST_PATH`: Custom path to an extra blacklist file
//!   (default: `./assets/blacklist.txt`). Optional: the built-in lexicon
//!   works without it.
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{check_password, generate_password, GenerateOptions};
//! use secrecy::SecretString;
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = check_password(&password);
//! println!("Score: {} ({})", result.score, result.verdict.as_str());
//! println!("Offline crack time: {}", result.crack_times.offline.human_readable);
//!
//! // Generate a replacement
//! let generated = generate_password(&GenerateOptions::default()).unwrap();
//! assert_eq!(generated.chars().count(), 12);
//! ```

// Internal modules
mod analysis;
mod blacklist;
mod crack_time;
mod evaluator;
mod generator;
mod keyspace;
mod patterns;
mod types;

pub mod breach;

// Public API
pub use blacklist::{
    BlacklistError, get_blacklist, init_blacklist, init_blacklist_from_path, is_blacklisted,
};
pub use crack_time::format_duration;
pub use evaluator::check_password;
pub use generator::{
    GenerateError, generate_memorable_password, generate_password, generate_strong_password,
};
pub use keyspace::{effective_keyspace, smart_attack_keyspace};
pub use patterns::{is_common_password, normalize_leet};
pub use types::{
    AttackScenario, CharacterClasses, CrackTimeEstimate, CrackTimes, GenerateOptions,
    PasswordAnalysis, PasswordStrengthResult, Verdict,
};

pub use analysis::analyze;

#[cfg(feature = "async")]
pub use evaluator::check_password_tx;
