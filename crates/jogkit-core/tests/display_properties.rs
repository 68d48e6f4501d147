//! Display and parameter properties checked over wide input ranges

use jogkit_core::{
    format_position, split_display, BoundedParameter, MeasurementSystem, FEED_RATE,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_metric_has_three_fraction_digits(value in -100_000.0f64..100_000.0) {
        let shown = format_position(value, MeasurementSystem::Metric);
        let (_, fraction) = split_display(&shown);
        prop_assert_eq!(fraction.len(), 3);
        prop_assert!(!shown.contains('e'));
    }

    #[test]
    fn prop_imperial_is_value_over_25_4(value in -100_000.0f64..100_000.0) {
        let shown = format_position(value, MeasurementSystem::Imperial);
        let (_, fraction) = split_display(&shown);
        prop_assert_eq!(fraction.len(), 4);

        let parsed: f64 = shown.parse().unwrap();
        prop_assert!((parsed - value / 25.4).abs() < 0.000051);
    }

    #[test]
    fn prop_reset_is_idempotent(value in -5000.0f64..5000.0) {
        let mut feed = BoundedParameter::new("feed_rate", FEED_RATE).unwrap();
        feed.set(value);
        let first = feed.reset();
        prop_assert_eq!(first, FEED_RATE.default);
        prop_assert_eq!(feed.reset(), first);
    }
}

#[test]
fn test_non_finite_renders_as_zero() {
    assert_eq!(format_position(f64::NAN, MeasurementSystem::Metric), "0.000");
    assert_eq!(
        format_position(f64::INFINITY, MeasurementSystem::Imperial),
        "0.0000"
    );
}
