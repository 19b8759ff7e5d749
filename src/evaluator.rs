//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::analysis::analyze;
use crate::crack_time;
use crate::keyspace::smart_attack_keyspace;
use crate::patterns::{contains_repeating_pattern, contains_sequential_pattern};
use crate::types::{PasswordAnalysis, PasswordStrengthResult, Verdict};

/// 0-5 score in half-point steps. A lexicon hit zeroes everything else.
fn compute_score(analysis: &PasswordAnalysis, password: &str) -> f64 {
    if analysis.is_common {
        return 0.0;
    }

    let mut score: f64 = 0.0;

    if analysis.length >= 8 {
        score += 1.0;
    }
    if analysis.length >= 12 {
        score += 1.0;
    }
    if analysis.length >= 16 {
        score += 0.5;
    }

    if analysis.variety_score >= 2 {
        score += 0.5;
    }
    if analysis.variety_score >= 3 {
        score += 0.5;
    }
    if analysis.variety_score >= 4 {
        score += 1.0;
    }

    if analysis.entropy_bits >= 40.0 {
        score += 0.5;
    }
    if analysis.entropy_bits >= 60.0 {
        score += 0.5;
    }
    if analysis.entropy_bits >= 80.0 {
        score += 0.5;
    }

    if contains_repeating_pattern(password) {
        score -= 0.5;
    }
    if contains_sequential_pattern(password) {
        score -= 0.5;
    }

    // Clamp to [0, 5], snap to the half-point grid.
    (score.clamp(0.0, 5.0) * 2.0).round() / 2.0
}

/// Result type for suggestion check functions.
/// - `Some(suggestion)` - check fired, emit the suggestion
/// - `None` - nothing to suggest
type SuggestionCheck = fn(&PasswordAnalysis) -> Option<String>;

fn common_password_check(analysis: &PasswordAnalysis) -> Option<String> {
    analysis
        .is_common
        .then(|| "Avoid common passwords - use a unique combination".to_string())
}

fn length_check(analysis: &PasswordAnalysis) -> Option<String> {
    if analysis.length < 8 {
        Some("Use at least 8 characters".to_string())
    } else if analysis.length < 12 {
        Some("Consider using 12 or more characters for a stronger password".to_string())
    } else {
        None
    }
}

fn uppercase_check(analysis: &PasswordAnalysis) -> Option<String> {
    (!analysis.classes.has_upper).then(|| "Add uppercase letters".to_string())
}

fn lowercase_check(analysis: &PasswordAnalysis) -> Option<String> {
    (!analysis.classes.has_lower).then(|| "Add lowercase letters".to_string())
}

fn digit_check(analysis: &PasswordAnalysis) -> Option<String> {
    (!analysis.classes.has_digit).then(|| "Add numbers".to_string())
}

fn symbol_check(analysis: &PasswordAnalysis) -> Option<String> {
    (!analysis.classes.has_symbol).then(|| "Add symbols (!@#$%...)".to_string())
}

fn variety_check(analysis: &PasswordAnalysis) -> Option<String> {
    (analysis.variety_score < 3).then(|| "Mix different character types".to_string())
}

fn randomness_check(analysis: &PasswordAnalysis) -> Option<String> {
    (analysis.entropy_bits < 40.0)
        .then(|| "Increase length or randomness to resist guessing".to_string())
}

/// Suggestions in fixed priority order.
fn build_suggestions(analysis: &PasswordAnalysis) -> Vec<String> {
    let checks: [(&str, SuggestionCheck); 8] = [
        ("common", common_password_check),
        ("length", length_check),
        ("uppercase", uppercase_check),
        ("lowercase", lowercase_check),
        ("digit", digit_check),
        ("symbol", symbol_check),
        ("variety", variety_check),
        ("randomness", randomness_check),
    ];

    let mut suggestions = Vec::new();
    for (_name, check) in checks {
        if let Some(suggestion) = check(analysis) {
            suggestions.push(suggestion);
        }
    }

    if suggestions.is_empty() && analysis.entropy_bits >= 60.0 {
        suggestions.push("Strong password - keep it unique and never reuse it".to_string());
    }

    suggestions
}

/// Evaluates password strength and returns the full result.
///
/// Total over all inputs, including the empty string, and deterministic:
/// identical input always yields an identical result.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordStrengthResult` with score, verdict, suggestions and
/// crack-time projections.
pub fn check_password(password: &SecretString) -> PasswordStrengthResult {
    let pwd = password.expose_secret();

    let analysis = analyze(pwd);
    let score = compute_score(&analysis, pwd);
    let verdict = Verdict::from_score(score);
    let suggestions = build_suggestions(&analysis);

    let smart_keyspace = smart_attack_keyspace(pwd, &analysis.classes);
    let crack_times = crack_time::estimate(smart_keyspace);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score,
        verdict = verdict.as_str(),
        length = analysis.length,
        "password evaluated"
    );

    PasswordStrengthResult {
        score,
        verdict,
        suggestions,
        crack_times,
    }
}

/// Async version that sends the evaluation result via channel.
///
/// Debounces briefly so rapid keystrokes can cancel superseded
/// evaluations; a cancelled token drops the evaluation without sending.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordStrengthResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let result = check_password(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_check_password_tx_delivers_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        check_password_tx(&secret("TestPass123!"), token, tx).await;

        let result = rx.recv().await.expect("Should receive evaluation");
        assert!(result.score > 0.0);
    }

    #[tokio::test]
    async fn test_check_password_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        check_password_tx(&secret("TestPass123!"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
