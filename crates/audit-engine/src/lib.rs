//! Viability scoring engine.
//!
//! Turns one [`common::AuditRequest`] into a [`common::ViabilityReport`] in a
//! single stateless pass: fragility scoring, risk classification, LTV/CAC,
//! runway, a 12-month load forecast, and a recommendation.

pub mod engine;
pub mod forecast;
pub mod recommend;

pub use engine::{classify_risk, evaluate, AuditEngine, EngineParams};
pub use forecast::project_load_series;
pub use recommend::{select_recommendation, RuleContext};
