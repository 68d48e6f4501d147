//! Bounded numeric parameters
//!
//! Operator-editable settings such as the jog feed rate and jog distance.
//! Every write is clamped into the declared range, so out-of-range input is
//! never an error.

use crate::error::ParameterError;
use crate::types::DataCallback;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Jog feed rate in mm/min
pub const FEED_RATE: ParameterSpec = ParameterSpec {
    min: 0.0,
    max: 1000.0,
    step: 10.0,
    default: 250.0,
    precision: None,
};

/// Jog distance in mm, stepped values rounded to hundredths
pub const JOG_DISTANCE: ParameterSpec = ParameterSpec {
    min: 0.0,
    max: 1000.0,
    step: 0.1,
    default: 1.0,
    precision: Some(2),
};

/// Largest step rounding precision, in decimal places
pub const MAX_PRECISION: u32 = 15;

/// Declared range, step and default of a bounded parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
    /// Amount moved by one increase/decrease
    pub step: f64,
    /// Value restored by reset
    pub default: f64,
    /// Decimal places kept after a step, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
}

impl ParameterSpec {
    /// Check the spec can back a parameter
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (field, value) in [
            ("min", self.min),
            ("max", self.max),
            ("step", self.step),
            ("default", self.default),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { field, value });
            }
        }
        if self.min > self.max {
            return Err(ParameterError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.default < self.min || self.default > self.max {
            return Err(ParameterError::DefaultOutOfRange {
                default: self.default,
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(ParameterError::InvalidStep { step: self.step });
        }
        if let Some(precision) = self.precision.filter(|p| *p > MAX_PRECISION) {
            return Err(ParameterError::PrecisionTooLarge {
                precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }

    /// Clamp a value into `[min, max]`
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    fn round(&self, value: f64) -> f64 {
        match self.precision {
            Some(places) => {
                let scale = 10f64.powi(places as i32);
                (value * scale).round() / scale
            }
            None => value,
        }
    }
}

/// A clamped numeric setting
///
/// Each operation returns the stored value and notifies the registered
/// observer, if any.
pub struct BoundedParameter {
    name: &'static str,
    spec: ParameterSpec,
    value: f64,
    observer: Option<DataCallback<f64>>,
}

impl BoundedParameter {
    /// Create a parameter holding its default value
    pub fn new(name: &'static str, spec: ParameterSpec) -> Result<Self, ParameterError> {
        spec.validate()?;
        Ok(Self {
            name,
            spec,
            value: spec.default,
            observer: None,
        })
    }

    /// Register the observer notified after every operation
    ///
    /// Replaces any previously registered observer.
    pub fn on_change<F>(&mut self, observer: F)
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Current value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Parameter name used in logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared spec
    pub fn spec(&self) -> &ParameterSpec {
        &self.spec
    }

    /// Store a value, clamped to the declared range
    ///
    /// NaN has no clamped meaning and leaves the value untouched.
    pub fn set(&mut self, value: f64) -> f64 {
        if value.is_nan() {
            tracing::warn!("Ignoring NaN for {}; keeping {}", self.name, self.value);
            return self.value;
        }
        self.store(self.spec.clamp(value))
    }

    /// Move up by one step
    pub fn increase(&mut self) -> f64 {
        let next = self.spec.round(self.value + self.spec.step);
        self.store(self.spec.clamp(next))
    }

    /// Move down by one step
    pub fn decrease(&mut self) -> f64 {
        let next = self.spec.round(self.value - self.spec.step);
        self.store(self.spec.clamp(next))
    }

    /// Restore the default
    pub fn reset(&mut self) -> f64 {
        self.store(self.spec.default)
    }

    fn store(&mut self, value: f64) -> f64 {
        self.value = value;
        tracing::debug!("{} -> {}", self.name, value);
        if let Some(observer) = &self.observer {
            observer(value);
        }
        value
    }
}

impl fmt::Debug for BoundedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedParameter")
            .field("name", &self.name)
            .field("spec", &self.spec)
            .field("value", &self.value)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{thread_safe_vec, ThreadSafeVec};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn feed() -> BoundedParameter {
        BoundedParameter::new("feed_rate", FEED_RATE).expect("valid spec")
    }

    fn distance() -> BoundedParameter {
        BoundedParameter::new("distance", JOG_DISTANCE).expect("valid spec")
    }

    #[test]
    fn test_starts_at_default() {
        assert_eq!(feed().value(), 250.0);
        assert_eq!(distance().value(), 1.0);
    }

    #[test]
    fn test_increase_clamps_at_max() {
        let mut p = feed();
        assert_eq!(p.set(995.0), 995.0);
        assert_eq!(p.increase(), 1000.0);
        assert_eq!(p.increase(), 1000.0);
    }

    #[test]
    fn test_decrease_clamps_at_min() {
        let mut p = feed();
        p.set(5.0);
        assert_eq!(p.decrease(), 0.0);
        assert_eq!(p.decrease(), 0.0);
    }

    #[test]
    fn test_set_clamps_both_ways() {
        let mut p = feed();
        assert_eq!(p.set(5000.0), 1000.0);
        assert_eq!(p.set(-3.0), 0.0);
        assert_eq!(p.set(f64::INFINITY), 1000.0);
        assert_eq!(p.set(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_nan_is_ignored() {
        let mut p = feed();
        p.set(300.0);
        assert_eq!(p.set(f64::NAN), 300.0);
        assert_eq!(p.value(), 300.0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut p = distance();
        p.set(42.0);
        let once = p.reset();
        let twice = p.reset();
        assert_eq!(once, 1.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_distance_steps_are_rounded() {
        let mut p = distance();
        p.increase();
        assert_eq!(p.increase(), 1.2);
        for _ in 0..10 {
            p.decrease();
        }
        assert_eq!(p.value(), 0.2);
    }

    #[test]
    fn test_set_keeps_typed_precision() {
        let mut p = distance();
        assert_eq!(p.set(0.123), 0.123);
    }

    #[test]
    fn test_observer_sees_every_operation() {
        let seen: ThreadSafeVec<f64> = thread_safe_vec();
        let mut p = feed();
        {
            let seen = Arc::clone(&seen);
            p.on_change(move |v| seen.lock().push(v));
        }

        p.increase();
        p.decrease();
        p.set(2000.0);
        p.reset();

        assert_eq!(*seen.lock(), vec![260.0, 250.0, 1000.0, 250.0]);
    }

    #[test]
    fn test_invalid_specs_rejected() {
        let bad_default = ParameterSpec {
            default: 2000.0,
            ..FEED_RATE
        };
        assert!(matches!(
            BoundedParameter::new("feed", bad_default),
            Err(ParameterError::DefaultOutOfRange { .. })
        ));

        let bad_step = ParameterSpec {
            step: 0.0,
            ..FEED_RATE
        };
        assert!(matches!(
            bad_step.validate(),
            Err(ParameterError::InvalidStep { .. })
        ));

        let inverted = ParameterSpec {
            min: 10.0,
            max: 1.0,
            default: 5.0,
            ..FEED_RATE
        };
        assert!(matches!(
            inverted.validate(),
            Err(ParameterError::EmptyRange { .. })
        ));

        let too_precise = ParameterSpec {
            precision: Some(400),
            ..JOG_DISTANCE
        };
        assert_eq!(
            too_precise.validate(),
            Err(ParameterError::PrecisionTooLarge {
                precision: 400,
                max: MAX_PRECISION
            })
        );
        assert!(BoundedParameter::new("distance", too_precise).is_err());

        let huge = ParameterSpec {
            precision: Some(u32::MAX),
            ..JOG_DISTANCE
        };
        assert!(huge.validate().is_err());

        let finest = ParameterSpec {
            precision: Some(MAX_PRECISION),
            ..JOG_DISTANCE
        };
        let mut p = BoundedParameter::new("distance", finest).expect("valid spec");
        let stepped = p.increase();
        assert!(stepped.is_finite() && stepped > 1.0 && stepped <= 1000.0);

        let nan_max = ParameterSpec {
            max: f64::NAN,
            ..FEED_RATE
        };
        assert!(matches!(
            nan_max.validate(),
            Err(ParameterError::NotFinite { field: "max", .. })
        ));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Set(f64),
        Increase,
        Decrease,
        Reset,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-5000.0f64..5000.0).prop_map(Op::Set),
            Just(Op::Increase),
            Just(Op::Decrease),
            Just(Op::Reset),
        ]
    }

    proptest! {
        #[test]
        fn prop_value_stays_in_range(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            for spec in [FEED_RATE, JOG_DISTANCE] {
                let mut p = BoundedParameter::new("p", spec).expect("valid spec");
                for op in &ops {
                    let v = match op {
                        Op::Set(v) => p.set(*v),
                        Op::Increase => p.increase(),
                        Op::Decrease => p.decrease(),
                        Op::Reset => p.reset(),
                    };
                    prop_assert!(v >= spec.min && v <= spec.max);
                    prop_assert_eq!(v, p.value());
                }
                prop_assert_eq!(p.reset(), spec.default);
            }
        }
    }
}
