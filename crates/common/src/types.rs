//! Audit intake and report types.
//!
//! Wire shape (camelCase) matches the intake documents produced by the form
//! front-end, so a captured submission can be replayed through `--input`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One business-plan intake document.
///
/// `project_name` and `elevator_pitch` are pass-through display fields; the
/// scoring engine reads only `assumptions`, `monthly_burn` and `target_cac`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditRequest {
    /// Display name, echoed in the report header untouched.
    pub project_name: String,

    /// Free-text pitch; not consumed by scoring.
    pub elevator_pitch: String,

    /// Stated assumptions. Order is irrelevant; only content length matters.
    pub assumptions: Vec<String>,

    /// Projected monthly cash outflow.
    pub monthly_burn: f64,

    /// Target cost to acquire one customer.
    pub target_cac: f64,
}

/// Discrete risk classification, ordered by ascending fragility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// Full output of one engine evaluation.
///
/// Every field except `chart_data` is a pure function of the request;
/// `chart_data` additionally depends on the injected random source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViabilityReport {
    /// Fragility in [1.1, 9.9], one decimal place. Higher = more fragile.
    pub fragility_score: f64,

    /// Classification derived from `fragility_score` via fixed thresholds.
    pub risk_level: RiskLevel,

    /// Assumed lifetime value (720) over acquisition cost, one decimal place.
    pub ltv_cac_ratio: f64,

    /// Months of operation implied by a fixed capital base.
    pub runway_months: u32,

    /// Exactly 12 projected monthly load percentages. The rising baseline is
    /// capped at 100 but the jitter lands on top, so values may exceed 100.
    pub chart_data: Vec<u32>,

    /// One entry from the fixed recommendation list, verbatim.
    pub recommendation: String,
}
