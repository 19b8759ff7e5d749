//! Result and option types shared across the evaluation and generation paths.

/// Which of the four character classes appear in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl CharacterClasses {
    /// Number of distinct character classes present (0-4).
    pub fn variety_score(&self) -> u8 {
        [self.has_lower, self.has_upper, self.has_digit, self.has_symbol]
            .iter()
            .filter(|&&b| b)
            .count() as u8
    }

    /// Size of the alphabet an attacker must cover for these classes.
    ///
    /// 26 lowercase + 26 uppercase + 10 digits + 32 printable symbols.
    pub fn charset_size(&self) -> u32 {
        let mut size = 0;
        if self.has_lower {
            size += 26;
        }
        if self.has_upper {
            size += 26;
        }
        if self.has_digit {
            size += 10;
        }
        if self.has_symbol {
            size += 32;
        }
        size
    }
}

/// Per-password analysis snapshot, created once per `check_password` call.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordAnalysis {
    pub length: usize,
    pub classes: CharacterClasses,
    pub entropy_bits: f64,
    pub is_common: bool,
    pub variety_score: u8,
}

/// Verdict label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Verdict {
    /// Maps a 0-5 score onto its verdict. Fixed thresholds, no other state.
    pub fn from_score(score: f64) -> Self {
        if score <= 1.0 {
            Verdict::Weak
        } else if score <= 2.5 {
            Verdict::Medium
        } else if score <= 4.0 {
            Verdict::Strong
        } else {
            Verdict::VeryStrong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Weak => "weak",
            Verdict::Medium => "medium",
            Verdict::Strong => "strong",
            Verdict::VeryStrong => "very_strong",
        }
    }
}

/// Attacker profile used for crack-time projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackScenario {
    /// Rate-limited online guessing against a live service.
    Online,
    /// Offline attack against a slow hash.
    Offline,
    /// Offline attack against a fast hash on dedicated hardware.
    OfflineFast,
}

impl AttackScenario {
    pub fn guesses_per_second(&self) -> f64 {
        match self {
            AttackScenario::Online => 1e3,
            AttackScenario::Offline => 1e11,
            AttackScenario::OfflineFast => 1e13,
        }
    }
}

/// Projected time to crack under one attack scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackTimeEstimate {
    pub seconds: f64,
    pub human_readable: String,
    pub scenario: AttackScenario,
}

/// Crack-time projections for all three attacker profiles.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackTimes {
    pub online: CrackTimeEstimate,
    pub offline: CrackTimeEstimate,
    pub offline_fast: CrackTimeEstimate,
}

/// Full strength-check result returned by `check_password`.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordStrengthResult {
    /// 0.0-5.0 in half-point steps.
    pub score: f64,
    pub verdict: Verdict,
    /// Improvement suggestions in fixed priority order.
    pub suggestions: Vec<String>,
    pub crack_times: CrackTimes,
}

/// Options for random password generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub length: usize,
    pub numbers: bool,
    pub symbols: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    /// Drop visually ambiguous glyphs (`0 O 1 l I |`) from every pool.
    pub exclude_similar: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            length: 12,
            numbers: true,
            symbols: true,
            uppercase: true,
            lowercase: true,
            exclude_similar: false,
        }
    }
}
