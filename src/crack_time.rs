//! Crack-time projection and human-readable duration formatting.

use crate::types::{AttackScenario, CrackTimeEstimate, CrackTimes};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: f64 = 86400.0;
const SECONDS_PER_MONTH: f64 = 30.0 * SECONDS_PER_DAY;

fn unit(n: f64, name: &str) -> String {
    if n == 1.0 {
        format!("1 {name}")
    } else {
        format!("{n:.0} {name}s")
    }
}

/// Renders a duration the way a strength meter reports it: nearest whole
/// unit, pluralized on anything but exactly one.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        return "instantly".to_string();
    }
    if seconds < SECONDS_PER_MINUTE {
        return unit(seconds.round(), "second");
    }
    if seconds < SECONDS_PER_HOUR {
        return unit((seconds / SECONDS_PER_MINUTE).round(), "minute");
    }
    if seconds < SECONDS_PER_DAY {
        return unit((seconds / SECONDS_PER_HOUR).round(), "hour");
    }
    if seconds < SECONDS_PER_MONTH {
        return unit((seconds / SECONDS_PER_DAY).round(), "day");
    }

    let months = seconds / SECONDS_PER_MONTH;
    if months < 12.0 {
        return unit(months.round(), "month");
    }

    let years = months / 12.0;
    if years < 1000.0 {
        return unit(years.round(), "year");
    }
    if years < 1e6 {
        return format!("{:.0} thousand years", (years / 1000.0).round());
    }
    if years < 1e9 {
        return format!("{:.0} million years", (years / 1e6).round());
    }
    format!("{:.0} billion years", (years / 1e9).round())
}

fn estimate_for(smart_keyspace: f64, scenario: AttackScenario) -> CrackTimeEstimate {
    // On average an attacker searches half the space.
    let average_guesses = (smart_keyspace / 2.0).max(1.0);
    let seconds = average_guesses / scenario.guesses_per_second();
    CrackTimeEstimate {
        seconds,
        human_readable: format_duration(seconds),
        scenario,
    }
}

/// Projects crack time across the three attacker profiles.
pub fn estimate(smart_keyspace: f64) -> CrackTimes {
    CrackTimes {
        online: estimate_for(smart_keyspace, AttackScenario::Online),
        offline: estimate_for(smart_keyspace, AttackScenario::Offline),
        offline_fast: estimate_for(smart_keyspace, AttackScenario::OfflineFast),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_instantly() {
        assert_eq!(format_duration(0.0), "instantly");
        assert_eq!(format_duration(0.99), "instantly");
    }

    #[test]
    fn test_format_seconds_pluralization() {
        assert_eq!(format_duration(1.0), "1 second");
        assert_eq!(format_duration(30.0), "30 seconds");
        assert_eq!(format_duration(59.4), "59 seconds");
    }

    #[test]
    fn test_format_minutes_rounds_to_nearest() {
        assert_eq!(format_duration(60.0), "1 minute");
        assert_eq!(format_duration(90.0), "2 minutes");
        assert_eq!(format_duration(150.0), "3 minutes");
    }

    #[test]
    fn test_format_hours_days_months() {
        assert_eq!(format_duration(5.0 * 3600.0), "5 hours");
        assert_eq!(format_duration(3.0 * 86400.0), "3 days");
        assert_eq!(format_duration(60.0 * 86400.0), "2 months");
    }

    #[test]
    fn test_format_years_ladder() {
        let year = 360.0 * 86400.0;
        assert_eq!(format_duration(year), "1 year");
        assert_eq!(format_duration(5.0 * year), "5 years");
        assert_eq!(format_duration(2_000.0 * year), "2 thousand years");
        assert_eq!(format_duration(3e6 * year), "3 million years");
        assert_eq!(format_duration(7e9 * year), "7 billion years");
    }

    #[test]
    fn test_estimate_rates() {
        let times = estimate(2e6);
        // 1e6 average guesses
        assert_eq!(times.online.seconds, 1e3);
        assert_eq!(times.offline.seconds, 1e-5);
        assert_eq!(times.offline_fast.seconds, 1e-7);
        assert_eq!(times.offline.human_readable, "instantly");
    }

    #[test]
    fn test_estimate_floors_average_at_one_guess() {
        let times = estimate(1.0);
        assert_eq!(times.online.seconds, 1.0 / 1e3);
        assert_eq!(times.online.human_readable, "instantly");
    }

    #[test]
    fn test_estimate_scenarios_are_labeled() {
        let times = estimate(1e20);
        assert_eq!(times.online.scenario, AttackScenario::Online);
        assert_eq!(times.offline.scenario, AttackScenario::Offline);
        assert_eq!(times.offline_fast.scenario, AttackScenario::OfflineFast);
        assert!(times.online.seconds > times.offline.seconds);
    }
}
