//! Stratification rule engine
//!
//! Implements the four-step Specific Health Guidance rubric:
//! 1. Obesity routing (waist, then BMI; neither ends the assessment)
//! 2. Metabolic risk scoring (glucose, lipids, blood pressure)
//! 3. Smoking, counted only alongside at least one metabolic risk
//! 4. Route-dependent tier assignment

use crate::{
    AssessmentInput, AssessmentResult, Criteria, RiskFactor, RiskFactors, Route, SupportTier,
};

/// Stratify one person
///
/// Total over validated input (finite, non-negative). Deterministic and
/// free of side effects.
pub fn stratify(input: &AssessmentInput, criteria: &Criteria) -> AssessmentResult {
    // Step 1: Obesity routing
    let route = obesity_route(input, criteria);
    if !route.is_scored() {
        return AssessmentResult::no_obesity();
    }

    // Step 2: Metabolic risk scoring
    let mut risk_factors = metabolic_risks(input, criteria);
    let metabolic = risk_factors.len();

    // Step 3: Gated smoking
    if metabolic >= 1 && input.smoker {
        risk_factors.insert(RiskFactor::Smoking);
    }
    let total_risk_count = risk_factors.len() as u8;

    // Step 4: Tier assignment
    let tier = assign_tier(route, total_risk_count, criteria);

    AssessmentResult {
        route,
        risk_factors,
        total_risk_count,
        tier,
    }
}

/// Step 1: Pick the obesity route
fn obesity_route(input: &AssessmentInput, criteria: &Criteria) -> Route {
    if input.waist_cm >= criteria.waist_threshold(input.gender) {
        Route::Waist
    } else if input.bmi >= criteria.bmi {
        Route::Bmi
    } else {
        Route::None
    }
}

/// Step 2: Score the three metabolic factors independently
fn metabolic_risks(input: &AssessmentInput, criteria: &Criteria) -> RiskFactors {
    let mut factors = RiskFactors::new();

    if at_or_above(input.fasting_glucose, criteria.fasting_glucose)
        || at_or_above(input.hba1c, criteria.hba1c)
    {
        factors.insert(RiskFactor::Glucose);
    }

    // Absent HDL never counts as low
    let low_hdl = input.hdl.is_some_and(|hdl| hdl > 0.0 && hdl < criteria.hdl);
    if at_or_above(input.triglycerides, criteria.triglycerides) || low_hdl {
        factors.insert(RiskFactor::Lipids);
    }

    if at_or_above(input.systolic_bp, criteria.systolic_bp)
        || at_or_above(input.diastolic_bp, criteria.diastolic_bp)
    {
        factors.insert(RiskFactor::BloodPressure);
    }

    factors
}

/// Step 4: Map the total risk count onto a tier for the given route
fn assign_tier(route: Route, total: u8, criteria: &Criteria) -> SupportTier {
    let active_at = match route {
        Route::Waist => criteria.waist_active_risks,
        Route::Bmi => criteria.bmi_active_risks,
        Route::None => return SupportTier::InformationProvision,
    };

    if total >= active_at {
        SupportTier::ActiveSupport
    } else if total >= 1 {
        SupportTier::MotivationalSupport
    } else {
        SupportTier::InformationProvision
    }
}

fn at_or_above(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v >= limit)
}
