//! Crack-time estimation over three fixed attacker-rate tiers.

use crate::types::{CrackScenario, CrackTimes, ScenarioId};

/// Offline attack against a fast hash on GPU hardware.
const OFFLINE_FAST_GPS: f64 = 1e10;
/// Offline attack against a slow, memory-hard hash.
const OFFLINE_MEDIUM_GPS: f64 = 1e8;
/// Online attack throttled by the target service.
const ONLINE_LIMITED_GPS: f64 = 10.0;

/// Display units, ascending. A month is the average Gregorian month and a
/// year is 365.25 days.
const UNITS: [(&str, f64); 6] = [
    ("second", 1.0),
    ("minute", 60.0),
    ("hour", 3600.0),
    ("day", 86_400.0),
    ("month", 2_629_800.0),
    ("year", 31_557_600.0),
];

/// Year counts above this collapse into the qualitative cap.
const YEAR_COLLAPSE_LIMIT: f64 = 5000.0;

const THOUSANDS_OF_YEARS: &str = "thousands of years (estimate)";

/// Estimates mean time to guess a password of the given effective entropy
/// under each attacker tier.
///
/// The attacker is assumed to find the password halfway through the search
/// space, so the mean guess count is `2^(bits - 1)`.
pub fn estimate_crack_times(effective_entropy_bits: f64) -> CrackTimes {
    let mean_guesses = 2f64.powf((effective_entropy_bits - 1.0).max(0.0));

    CrackTimes {
        offline_fast: scenario(ScenarioId::OfflineFast, OFFLINE_FAST_GPS, mean_guesses),
        offline_medium: scenario(ScenarioId::OfflineMedium, OFFLINE_MEDIUM_GPS, mean_guesses),
        online_limited: scenario(ScenarioId::OnlineLimited, ONLINE_LIMITED_GPS, mean_guesses),
    }
}

fn scenario(id: ScenarioId, guesses_per_second: f64, mean_guesses: f64) -> CrackScenario {
    let time_seconds = mean_guesses / guesses_per_second;
    CrackScenario {
        id,
        guesses_per_second,
        time_seconds,
        formatted_time: format_duration(time_seconds),
    }
}

/// Renders a duration in seconds as a rounded single-unit phrase, e.g.
/// "3 days (estimate)".
///
/// Sub-second durations render as "< 1 second (estimate)"; anything past
/// five thousand years, including infinite or NaN input from an overflowed
/// power, collapses to "thousands of years (estimate)".
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return THOUSANDS_OF_YEARS.to_string();
    }
    if seconds < 1.0 {
        return "< 1 second (estimate)".to_string();
    }

    let (name, unit_seconds) = UNITS
        .iter()
        .rev()
        .find(|(_, unit_seconds)| seconds >= *unit_seconds)
        .unwrap_or(&UNITS[0]);

    let amount = (seconds / unit_seconds).round();
    if *name == "year" && amount > YEAR_COLLAPSE_LIMIT {
        return THOUSANDS_OF_YEARS.to_string();
    }

    let plural = if amount > 1.0 { "s" } else { "" };
    format!("{amount} {name}{plural} (estimate)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_each_unit() {
        assert_eq!(format_duration(0.2), "< 1 second (estimate)");
        assert_eq!(format_duration(1.0), "1 second (estimate)");
        assert_eq!(format_duration(55.0), "55 seconds (estimate)");
        assert_eq!(format_duration(90.0), "2 minutes (estimate)");
        assert_eq!(format_duration(5.0 * 3600.0), "5 hours (estimate)");
        assert_eq!(format_duration(3.0 * 86_400.0), "3 days (estimate)");
        assert_eq!(format_duration(2.0 * 2_629_800.0), "2 months (estimate)");
        assert_eq!(format_duration(4.0 * 31_557_600.0), "4 years (estimate)");
    }

    #[test]
    fn test_huge_durations_collapse() {
        assert_eq!(format_duration(6000.0 * 31_557_600.0), THOUSANDS_OF_YEARS);
        assert_eq!(format_duration(1e30), THOUSANDS_OF_YEARS);
        assert_eq!(format_duration(f64::INFINITY), THOUSANDS_OF_YEARS);
        assert_eq!(format_duration(f64::NAN), THOUSANDS_OF_YEARS);
    }

    #[test]
    fn test_five_thousand_years_is_still_numeric() {
        assert_eq!(
            format_duration(5000.0 * 31_557_600.0),
            "5000 years (estimate)"
        );
    }

    #[test]
    fn test_mean_guess_count_is_half_the_space() {
        // 10 bits: 1024 candidates, 512 expected guesses, 51.2 s online
        let times = estimate_crack_times(10.0);
        assert!((times.online_limited.time_seconds - 51.2).abs() < 1e-9);
        assert_eq!(times.online_limited.formatted_time, "51 seconds (estimate)");
    }

    #[test]
    fn test_tiers_are_ordered_by_rate() {
        let times = estimate_crack_times(40.0);
        assert!(times.offline_fast.time_seconds < times.offline_medium.time_seconds);
        assert!(times.offline_medium.time_seconds < times.online_limited.time_seconds);
        assert_eq!(times.offline_fast.guesses_per_second, 1e10);
        assert_eq!(times.offline_medium.guesses_per_second, 1e8);
        assert_eq!(times.online_limited.guesses_per_second, 10.0);
    }

    #[test]
    fn test_forty_bits_walkthrough() {
        let times = estimate_crack_times(40.0);
        assert_eq!(times.offline_fast.formatted_time, "55 seconds (estimate)");
        assert_eq!(times.offline_medium.formatted_time, "2 hours (estimate)");
        assert_eq!(times.online_limited.formatted_time, "1742 years (estimate)");
    }

    #[test]
    fn test_very_high_entropy_stays_defined() {
        let times = estimate_crack_times(4096.0);
        assert_eq!(times.offline_fast.formatted_time, THOUSANDS_OF_YEARS);
        assert!(times.offline_fast.time_seconds.is_infinite());
    }
}
