//! Text rendering of a viability report.

use std::fmt::Write;

use chrono::{SecondsFormat, Utc};
use common::{AuditRequest, ViabilityReport};

use crate::config::OutputConfig;

/// LTV/CAC above this reads as economically resilient on the dashboard.
const RESILIENT_RATIO: f64 = 3.0;

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn resilience_tag(ltv_cac_ratio: f64) -> &'static str {
    if ltv_cac_ratio > RESILIENT_RATIO {
        "resilient"
    } else {
        "strained"
    }
}

/// Dashboard-style text report: score, risk badge, unit economics, the
/// 12-month forecast as horizontal bars, and the recommendation verbatim.
pub fn render_text(
    request: &AuditRequest,
    report: &ViabilityReport,
    output: &OutputConfig,
) -> String {
    let mut out = String::new();

    let project = if request.project_name.is_empty() {
        "unnamed project"
    } else {
        &request.project_name
    };
    let _ = writeln!(out, "Viability audit — {} ({})", project, now_iso());
    if !request.elevator_pitch.is_empty() {
        let _ = writeln!(out, "  \"{}\"", request.elevator_pitch);
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "  Fragility score   {:>5.1}  [{}]",
        report.fragility_score, report.risk_level
    );
    let _ = writeln!(
        out,
        "  LTV/CAC ratio     {:>5.1}  ({})",
        report.ltv_cac_ratio,
        resilience_tag(report.ltv_cac_ratio)
    );
    let _ = writeln!(out, "  Runway            {:>5} months", report.runway_months);
    let _ = writeln!(out);

    let _ = writeln!(out, "  Projected load, next 12 months:");
    let peak = report.chart_data.iter().copied().max().unwrap_or(1).max(1);
    for (month, value) in report.chart_data.iter().enumerate() {
        let width = (*value as usize * output.chart_width) / peak as usize;
        let _ = writeln!(
            out,
            "  M{:02} {:<bar_width$} {:>3}%",
            month + 1,
            "█".repeat(width),
            value,
            bar_width = output.chart_width
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "  Recommendation: {}", report.recommendation);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::RiskLevel;

    fn sample_report() -> ViabilityReport {
        ViabilityReport {
            fragility_score: 5.2,
            risk_level: RiskLevel::Medium,
            ltv_cac_ratio: 1.8,
            runway_months: 7,
            chart_data: vec![22, 29, 36, 43, 50, 57, 64, 71, 78, 85, 92, 99],
            recommendation:
                "High acquisition friction detected. Audit your organic growth channels."
                    .to_string(),
        }
    }

    #[test]
    fn test_report_shows_all_sections() {
        let request = AuditRequest {
            project_name: "Acme".into(),
            ..AuditRequest::default()
        };
        let text = render_text(&request, &sample_report(), &OutputConfig::default());

        assert!(text.contains("Acme"));
        assert!(text.contains("5.2"));
        assert!(text.contains("[Medium]"));
        assert!(text.contains("strained"));
        assert!(text.contains("7 months"));
        assert!(text.contains(&sample_report().recommendation));
        // One bar per forecast month.
        assert_eq!(text.matches('%').count(), 12);
    }

    #[test]
    fn test_resilience_tag_cutoff() {
        assert_eq!(resilience_tag(720.0), "resilient");
        assert_eq!(resilience_tag(3.0), "strained");
        assert_eq!(resilience_tag(1.8), "strained");
    }

    #[test]
    fn test_unnamed_project_fallback() {
        let text = render_text(
            &AuditRequest::default(),
            &sample_report(),
            &OutputConfig::default(),
        );
        assert!(text.contains("unnamed project"));
    }
}
