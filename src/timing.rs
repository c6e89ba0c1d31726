//! Round countdown from the network's monotonic unit counter.

use crate::error::{Result, WatchError};
use crate::types::RoundTiming;

/// Documented average duration of one network time unit, in seconds.
///
/// A display estimate only. It is configuration, never decoded data, and
/// callers tracking a measured average can pass their own value.
pub const DEFAULT_UNIT_DURATION_SECS: f64 = 0.4;

/// Compute the countdown for a round window observed at `current_unit`.
///
/// Fails with [`WatchError::InvalidSlotRange`] when the board reports
/// `end_unit < start_unit`; malformed state is reported, not clamped.
pub fn compute_timing(
    start_unit: u64,
    end_unit: u64,
    current_unit: u64,
    unit_duration_secs: f64,
) -> Result<RoundTiming> {
    if end_unit < start_unit {
        return Err(WatchError::InvalidSlotRange {
            start_unit,
            end_unit,
        });
    }

    let units_remaining = end_unit.saturating_sub(current_unit);
    let seconds_remaining = (units_remaining as f64 * unit_duration_secs).round() as u64;

    Ok(RoundTiming {
        current_unit,
        units_remaining,
        seconds_remaining,
        is_intermission: current_unit >= end_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_round_countdown() {
        let timing = compute_timing(1000, 1150, 1100, 0.4).unwrap();
        assert_eq!(timing.current_unit, 1100);
        assert_eq!(timing.units_remaining, 50);
        assert_eq!(timing.seconds_remaining, 20);
        assert!(!timing.is_intermission);
    }

    #[test]
    fn test_remaining_units_never_increase() {
        let mut previous = u64::MAX;
        for current in 1000..1200 {
            let timing = compute_timing(1000, 1150, current, 0.4).unwrap();
            assert!(timing.units_remaining <= previous);
            previous = timing.units_remaining;

            if current >= 1150 {
                assert_eq!(timing.units_remaining, 0);
                assert_eq!(timing.seconds_remaining, 0);
                assert!(timing.is_intermission);
            } else {
                assert!(!timing.is_intermission);
            }
        }
    }

    #[test]
    fn test_intermission_starts_exactly_at_end_unit() {
        assert!(!compute_timing(1000, 1150, 1149, 0.4).unwrap().is_intermission);
        assert!(compute_timing(1000, 1150, 1150, 0.4).unwrap().is_intermission);
    }

    #[test]
    fn test_seconds_are_rounded() {
        // 3 units at half a second round up to 2.
        let timing = compute_timing(0, 3, 0, 0.5).unwrap();
        assert_eq!(timing.seconds_remaining, 2);

        // 3 units at 370 ms round down to 1.
        let timing = compute_timing(0, 3, 0, 0.37).unwrap();
        assert_eq!(timing.seconds_remaining, 1);
    }

    #[test]
    fn test_observation_before_round_start() {
        let timing = compute_timing(1000, 1150, 900, 0.4).unwrap();
        assert_eq!(timing.units_remaining, 250);
        assert!(!timing.is_intermission);
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let err = compute_timing(1150, 1000, 1100, 0.4).unwrap_err();
        assert!(matches!(
            err,
            WatchError::InvalidSlotRange {
                start_unit: 1150,
                end_unit: 1000,
            }
        ));
    }

    #[test]
    fn test_zero_length_window_is_allowed() {
        let timing = compute_timing(1000, 1000, 1000, 0.4).unwrap();
        assert_eq!(timing.units_remaining, 0);
        assert!(timing.is_intermission);
    }
}
