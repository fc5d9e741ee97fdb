//! Property tests for the automated-hours clamp.

use govroi::automated_hours;
use proptest::prelude::*;

proptest! {
    #[test]
    fn bounded_between_floor_and_cap(manual in 0.0f64..100_000.0) {
        let hours = automated_hours(manual);
        prop_assert!((3.0..=8.0).contains(&hours));
    }

    #[test]
    fn monotone_non_decreasing(manual in 0.0f64..100_000.0, delta in 0.0f64..10_000.0) {
        prop_assert!(automated_hours(manual + delta) >= automated_hours(manual));
    }

    #[test]
    fn proportional_inside_the_band(manual in 15.0f64..40.0) {
        let hours = automated_hours(manual);
        prop_assert!((hours - manual * 0.2).abs() < 1e-9);
    }
}

#[test]
fn floor_dominates_at_or_below_fifteen_manual_hours() {
    assert_eq!(automated_hours(0.0), 3.0);
    assert_eq!(automated_hours(10.0), 3.0);
    assert_eq!(automated_hours(15.0), 3.0);
}

#[test]
fn cap_dominates_at_or_above_forty_manual_hours() {
    assert_eq!(automated_hours(40.0), 8.0);
    assert_eq!(automated_hours(60.0), 8.0);
    assert_eq!(automated_hours(1e9), 8.0);
}
