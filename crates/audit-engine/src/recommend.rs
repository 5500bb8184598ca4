//! Recommendation selection.
//!
//! The conditions overlap (a Critical score frequently comes with a high
//! CAC), so the rules live in one ordered table and the first match wins.

use common::RiskLevel;

/// The fields the recommendation rules inspect.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    pub risk_level: RiskLevel,
    pub fragility_score: f64,
    pub target_cac: f64,
}

const MSG_PIVOT: &str =
    "Immediate logic pivot required. Burn-to-Scale ratio is unsustainable.";
const MSG_CHANNEL_AUDIT: &str =
    "High acquisition friction detected. Audit your organic growth channels.";
const MSG_INSTITUTIONAL: &str =
    "Exceptional resilience. Model is ready for institutional capital.";
const MSG_PROCEED: &str = "Structural logic appears sound. Proceed to MVP.";

/// Priority-ordered rules; `select_recommendation` walks these top to bottom.
const RULES: &[(fn(&RuleContext) -> bool, &str)] = &[
    (|ctx| ctx.risk_level == RiskLevel::Critical, MSG_PIVOT),
    (|ctx| ctx.target_cac > 200.0, MSG_CHANNEL_AUDIT),
    (|ctx| ctx.fragility_score < 3.0, MSG_INSTITUTIONAL),
];

/// First matching rule wins; the fallback applies when none match.
pub fn select_recommendation(ctx: &RuleContext) -> &'static str {
    RULES
        .iter()
        .find(|(applies, _)| applies(ctx))
        .map(|(_, message)| *message)
        .unwrap_or(MSG_PROCEED)
}
