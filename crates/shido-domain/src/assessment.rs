//! Assessment result module

use crate::{RiskFactors, Route, SupportTier};

/// Outcome of a single stratification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentResult {
    /// Obesity criterion that opened risk scoring
    pub route: Route,

    /// Triggered factors in evaluation order
    pub risk_factors: RiskFactors,

    /// Metabolic risks plus the gated smoking point
    pub total_risk_count: u8,

    /// Assigned support tier
    pub tier: SupportTier,
}

impl AssessmentResult {
    /// Result for a person meeting neither obesity criterion
    pub fn no_obesity() -> Self {
        Self {
            route: Route::None,
            risk_factors: RiskFactors::new(),
            total_risk_count: 0,
            tier: SupportTier::InformationProvision,
        }
    }

    /// Number of metabolic risk factors (smoking excluded)
    pub fn metabolic_risk_count(&self) -> usize {
        self.risk_factors.metabolic_count()
    }
}
