//! Synthetic 12-month load projection.

use rand::Rng;

/// Length of the projected series.
pub const FORECAST_MONTHS: usize = 12;

const BASE_LOAD: f64 = 20.0;
const MONTHLY_RAMP: f64 = 7.0;
const BURN_LOAD_DIVISOR: f64 = 500.0;
const BASELINE_CAP: f64 = 100.0;
const VOLATILITY_SPAN: f64 = 5.0;

/// Projected monthly load percentages: a rising baseline plus uniform jitter.
///
/// The baseline is capped at 100 before the jitter is added, so individual
/// values can land up to ~5 points above 100. That ordering is part of the
/// observed contract and is kept as-is.
pub fn project_load_series<R: Rng>(monthly_burn: f64, rng: &mut R) -> Vec<u32> {
    (0..FORECAST_MONTHS)
        .map(|month| {
            let base_line = (BASE_LOAD
                + MONTHLY_RAMP * month as f64
                + monthly_burn / BURN_LOAD_DIVISOR)
                .min(BASELINE_CAP);
            let volatility = rng.gen::<f64>() * VOLATILITY_SPAN;
            (base_line + volatility).round() as u32
        })
        .collect()
}
