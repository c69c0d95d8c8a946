//! Number and integer generation.

use serde_json::Value;

use super::{number_value, Parser};
use crate::schema::{ExclusiveBound, Schema};

const STRICT_BOUNDS: (f64, f64) = (0.0, 100.0);
const LENIENT_BOUNDS: (f64, f64) = (-100.0, 1000.0);
/// Offset applied to a numeric exclusive bound when no `multipleOf` is set.
const EXCLUSIVE_EPSILON: f64 = 0.01;

impl Parser<'_> {
    pub(super) fn generate_number(
        &mut self,
        schema: &Schema,
        property_name: Option<&str>,
        integer: bool,
    ) -> Value {
        if let Some(value) = property_name.and_then(|name| self.number_for_name(name)) {
            return value;
        }

        let (mut min, mut max) = if self.strict { STRICT_BOUNDS } else { LENIENT_BOUNDS };
        if let Some(minimum) = schema.minimum {
            min = minimum;
        }
        if let Some(maximum) = schema.maximum {
            max = maximum;
        }

        let step = schema.multiple_of;
        if let (true, Some(m)) = (self.strict, step) {
            if min % m != 0.0 {
                min = (min / m).ceil() * m;
            }
        }

        match schema.exclusive_minimum {
            Some(ExclusiveBound::Flag(true)) => min += step.unwrap_or(1.0),
            Some(ExclusiveBound::Value(bound)) => min = bound + step.unwrap_or(EXCLUSIVE_EPSILON),
            _ => {}
        }
        match schema.exclusive_maximum {
            Some(ExclusiveBound::Flag(true)) => max -= step.unwrap_or(1.0),
            Some(ExclusiveBound::Value(bound)) => max = bound - step.unwrap_or(EXCLUSIVE_EPSILON),
            _ => {}
        }

        if max < min {
            max = min + step.unwrap_or(1.0);
        }

        if let Some(m) = step {
            let steps = ((max - min) / m).floor().max(0.0) as i64;
            let k = self.rng.int_inclusive(0, steps);
            return number_value(grid_point(min, k, m).max(min).min(max));
        }

        if integer {
            let low = min.ceil();
            let high = max.floor().max(low);
            return number_value(self.rng.int_inclusive(low as i64, high as i64) as f64);
        }

        number_value(self.rng.float_range(min, max))
    }

    /// Name heuristics, matched against the end of the normalized name.
    fn number_for_name(&mut self, name: &str) -> Option<Value> {
        let name: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let value = if name.ends_with("age") {
            self.rng.int_range(18, 78) as f64
        } else if name.ends_with("price") || name.ends_with("amount") {
            round_to(self.rng.float_range(0.0, 100.0), 2)
        } else if name.ends_with("year") {
            self.rng.int_range(1970, 2030) as f64
        } else if name.ends_with("rating") {
            round_to(self.rng.float_range(0.0, 5.0), 1)
        } else {
            return None;
        };
        Some(number_value(value))
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `min + k * m`, with binary noise such as `0.30000000000000004` dropped
/// only when the rounding stays within a billionth of a step.
fn grid_point(min: f64, k: i64, m: f64) -> f64 {
    let raw = min + k as f64 * m;
    let decimals = (6.0 - m.log10().floor()).clamp(0.0, 15.0) as i32;
    let rounded = round_to(raw, decimals);
    if rounded.is_finite() && (rounded - raw).abs() <= m * 1e-9 {
        rounded
    } else {
        raw
    }
}
