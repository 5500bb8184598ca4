//! Core scoring pass: request in, report out.

use common::{AuditRequest, RiskLevel, ViabilityReport};
use rand::Rng;
use tracing::debug;

use crate::forecast::project_load_series;
use crate::recommend::{select_recommendation, RuleContext};

/// Documented bounds of the fragility score.
pub const SCORE_FLOOR: f64 = 1.1;
pub const SCORE_CEILING: f64 = 9.9;

/// Assumptions at or below this many characters are blank noise and earn no
/// credit.
const MIN_SUBSTANTIVE_CHARS: usize = 2;

/// Benchmark constants the score is normalized against. `Default` carries the
/// production values; a config file may override individual fields.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// Monthly burn worth one full point of fragility.
    pub burn_benchmark: f64,
    /// Target CAC worth one full point of fragility.
    pub cac_benchmark: f64,
    /// Cap on each normalized factor so no single input dominates.
    pub factor_cap: f64,
    /// Flat baseline keeping zero-input scores off the floor.
    pub score_baseline: f64,
    /// Credit per substantive stated assumption.
    pub assumption_credit: f64,
    /// Assumed annual revenue per customer, the LTV side of the ratio.
    pub annual_revenue_per_customer: f64,
    /// Fixed capital base backing the runway estimate.
    pub capital_base: f64,
    /// Runway reported when burn is zero.
    pub zero_burn_runway_months: u32,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            burn_benchmark: 15_000.0,
            cac_benchmark: 300.0,
            factor_cap: 5.0,
            score_baseline: 2.5,
            assumption_credit: 0.3,
            annual_revenue_per_customer: 60.0 * 12.0,
            capital_base: 150_000.0,
            zero_burn_runway_months: 36,
        }
    }
}

/// The scoring engine. Holds only its benchmark parameters; every evaluation
/// is an independent pass with no retained state.
#[derive(Debug, Clone, Default)]
pub struct AuditEngine {
    params: EngineParams,
}

impl AuditEngine {
    pub fn new(params: EngineParams) -> Self {
        Self { params }
    }

    /// Evaluate one audit request. Total: never fails, performs no I/O.
    ///
    /// The random source feeds only the forecast jitter; every other field is
    /// a pure function of the request. Pass a seeded `StdRng` for exactly
    /// reproducible `chart_data`.
    pub fn evaluate<R: Rng>(&self, request: &AuditRequest, rng: &mut R) -> ViabilityReport {
        let burn = sanitize(request.monthly_burn);
        let cac = sanitize(request.target_cac);

        let fragility_score = self.fragility_score(burn, cac, &request.assumptions);
        let risk_level = classify_risk(fragility_score);
        let ltv_cac_ratio = self.ltv_cac_ratio(cac);
        let runway_months = self.runway_months(burn);
        let chart_data = project_load_series(burn, rng);
        let recommendation = select_recommendation(&RuleContext {
            risk_level,
            fragility_score,
            target_cac: cac,
        })
        .to_string();

        debug!(
            fragility_score,
            risk_level = %risk_level,
            ltv_cac_ratio,
            runway_months,
            "audit evaluated"
        );

        ViabilityReport {
            fragility_score,
            risk_level,
            ltv_cac_ratio,
            runway_months,
            chart_data,
            recommendation,
        }
    }

    /// Normalized burn and CAC, a flat baseline, minus credit for each
    /// substantive stated assumption, clamped to the documented range.
    fn fragility_score(&self, burn: f64, cac: f64, assumptions: &[String]) -> f64 {
        let normalized_burn = (burn / self.params.burn_benchmark).min(self.params.factor_cap);
        let normalized_cac = (cac / self.params.cac_benchmark).min(self.params.factor_cap);

        let substantive = assumptions
            .iter()
            .filter(|a| a.chars().count() > MIN_SUBSTANTIVE_CHARS)
            .count();
        let assumption_credit = substantive as f64 * self.params.assumption_credit;

        let raw = normalized_burn + normalized_cac + self.params.score_baseline - assumption_credit;
        round1(raw.clamp(SCORE_FLOOR, SCORE_CEILING))
    }

    /// CAC is floored to 1, so a zero CAC reads as maximum efficiency rather
    /// than a division failure.
    fn ltv_cac_ratio(&self, cac: f64) -> f64 {
        round1(self.params.annual_revenue_per_customer / cac.max(1.0))
    }

    fn runway_months(&self, burn: f64) -> u32 {
        if burn > 0.0 {
            (self.params.capital_base / burn).floor() as u32
        } else {
            self.params.zero_burn_runway_months
        }
    }
}

/// Risk classification on the clamped score. Thresholds are strict, so the
/// boundary values 8, 6.5 and 4 land in the lower band.
pub fn classify_risk(fragility_score: f64) -> RiskLevel {
    if fragility_score > 8.0 {
        RiskLevel::Critical
    } else if fragility_score > 6.5 {
        RiskLevel::High
    } else if fragility_score > 4.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Evaluate with production parameters and an ambient random source.
pub fn evaluate(request: &AuditRequest) -> ViabilityReport {
    AuditEngine::default().evaluate(request, &mut rand::thread_rng())
}

/// Negative or non-finite inputs are coerced to 0 before scoring.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request(burn: f64, cac: f64, assumptions: &[&str]) -> AuditRequest {
        AuditRequest {
            monthly_burn: burn,
            target_cac: cac,
            assumptions: assumptions.iter().map(|a| a.to_string()).collect(),
            ..AuditRequest::default()
        }
    }

    fn run(burn: f64, cac: f64, assumptions: &[&str]) -> ViabilityReport {
        let mut rng = StdRng::seed_from_u64(7);
        AuditEngine::default().evaluate(&request(burn, cac, assumptions), &mut rng)
    }

    #[test]
    fn test_zero_input_baseline() {
        let report = run(0.0, 0.0, &[]);

        assert_eq!(report.fragility_score, 2.5);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.ltv_cac_ratio, 720.0);
        assert_eq!(report.runway_months, 36);
        assert_eq!(report.chart_data.len(), 12);
        assert_eq!(
            report.recommendation,
            "Structural logic appears sound. Proceed to MVP."
        );
    }

    #[test]
    fn test_worked_example_medium_risk() {
        // burn/15000 = cac/300 = 1.33..; raw = 1.33 + 1.33 + 2.5 ≈ 5.17
        let report = run(20_000.0, 400.0, &["", "", ""]);

        assert_eq!(report.fragility_score, 5.2);
        assert_eq!(report.risk_level, RiskLevel::Medium);
        assert_eq!(report.ltv_cac_ratio, 1.8);
        assert_eq!(report.runway_months, 7);
        // CAC > 200 outranks the fallback.
        assert_eq!(
            report.recommendation,
            "High acquisition friction detected. Audit your organic growth channels."
        );
    }

    #[test]
    fn test_score_clamped_to_documented_range() {
        // Both factors saturate at the cap: raw = 5 + 5 + 2.5.
        let high = run(1e9, 1e9, &[]);
        assert_eq!(high.fragility_score, 9.9);
        assert_eq!(high.risk_level, RiskLevel::Critical);

        // Thirty substantive assumptions drive the raw score far negative.
        let assumptions = vec!["a well documented assumption"; 30];
        let low = run(0.0, 0.0, &assumptions);
        assert_eq!(low.fragility_score, 1.1);
        assert_eq!(low.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_short_assumptions_earn_no_credit() {
        // "ok" and "" are noise; only the third string counts.
        let report = run(0.0, 0.0, &["ok", "", "we ship weekly"]);
        assert_eq!(report.fragility_score, 2.2);

        let blank_only = run(0.0, 0.0, &["", "a", "zz"]);
        assert_eq!(blank_only.fragility_score, 2.5);
    }

    #[test]
    fn test_risk_thresholds_are_strict() {
        assert_eq!(classify_risk(8.1), RiskLevel::Critical);
        assert_eq!(classify_risk(8.0), RiskLevel::High);
        assert_eq!(classify_risk(6.6), RiskLevel::High);
        assert_eq!(classify_risk(6.5), RiskLevel::Medium);
        assert_eq!(classify_risk(4.1), RiskLevel::Medium);
        assert_eq!(classify_risk(4.0), RiskLevel::Low);
        assert_eq!(classify_risk(1.1), RiskLevel::Low);
    }

    #[test]
    fn test_malformed_inputs_coerce_to_zero() {
        let baseline = run(0.0, 0.0, &[]);
        let negative = run(-5_000.0, -300.0, &[]);
        let non_finite = run(f64::NAN, f64::INFINITY, &[]);

        for report in [&negative, &non_finite] {
            assert_eq!(report.fragility_score, baseline.fragility_score);
            assert_eq!(report.ltv_cac_ratio, baseline.ltv_cac_ratio);
            assert_eq!(report.runway_months, baseline.runway_months);
        }
    }

    #[test]
    fn test_ltv_cac_ratio_floors_cac_at_one() {
        let engine = AuditEngine::default();
        assert_eq!(engine.ltv_cac_ratio(0.0), 720.0);
        assert_eq!(engine.ltv_cac_ratio(0.5), 720.0);
        assert_eq!(engine.ltv_cac_ratio(720.0), 1.0);

        // Strictly decreasing past the floor.
        let mut previous = engine.ltv_cac_ratio(1.0);
        for cac in [2.0, 10.0, 100.0, 300.0, 600.0] {
            let ratio = engine.ltv_cac_ratio(cac);
            assert!(ratio < previous, "ratio must fall as CAC rises");
            previous = ratio;
        }
    }

    #[test]
    fn test_runway_months() {
        let engine = AuditEngine::default();
        assert_eq!(engine.runway_months(0.0), 36);
        assert_eq!(engine.runway_months(150_000.0), 1);
        assert_eq!(engine.runway_months(40_000.0), 3);
        assert_eq!(engine.runway_months(300_000.0), 0);

        // Non-increasing in burn.
        let mut previous = engine.runway_months(1_000.0);
        for burn in [5_000.0, 20_000.0, 75_000.0, 150_000.0, 500_000.0] {
            let months = engine.runway_months(burn);
            assert!(months <= previous);
            previous = months;
        }
    }

    #[test]
    fn test_deterministic_fields_stable_across_calls() {
        let input = request(42_000.0, 180.0, &["strong retention", "low churn"]);
        let engine = AuditEngine::default();

        let first = engine.evaluate(&input, &mut StdRng::seed_from_u64(1));
        let second = engine.evaluate(&input, &mut StdRng::seed_from_u64(999));

        assert_eq!(first.fragility_score, second.fragility_score);
        assert_eq!(first.risk_level, second.risk_level);
        assert_eq!(first.ltv_cac_ratio, second.ltv_cac_ratio);
        assert_eq!(first.runway_months, second.runway_months);
        assert_eq!(first.recommendation, second.recommendation);
    }

    #[test]
    fn test_seeded_runs_reproduce_chart_data() {
        let input = request(30_000.0, 120.0, &[]);
        let engine = AuditEngine::default();

        let first = engine.evaluate(&input, &mut StdRng::seed_from_u64(42));
        let second = engine.evaluate(&input, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }
}
