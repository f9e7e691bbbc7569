//! Stratification criteria
//!
//! Threshold values published by the Ministry of Health, Labour and Welfare
//! for Specific Health Guidance. "At or above" comparisons use `>=`; the one
//! "below" comparison (HDL) uses `<`.

use crate::Gender;

/// Waist circumference limit for men (cm)
pub const MALE_WAIST_CM: f64 = 85.0;

/// Waist circumference limit for women (cm)
pub const FEMALE_WAIST_CM: f64 = 90.0;

/// BMI limit for the BMI route
pub const BMI: f64 = 25.0;

/// Fasting plasma glucose limit (mg/dL)
pub const FASTING_GLUCOSE: f64 = 100.0;

/// HbA1c limit (%)
pub const HBA1C: f64 = 5.6;

/// Triglycerides limit (mg/dL)
pub const TRIGLYCERIDES: f64 = 150.0;

/// HDL cholesterol floor (mg/dL); a recorded value below this is a risk
pub const HDL: f64 = 40.0;

/// Systolic blood pressure limit (mmHg)
pub const SYSTOLIC_BP: f64 = 130.0;

/// Diastolic blood pressure limit (mmHg)
pub const DIASTOLIC_BP: f64 = 85.0;

/// Total risk count for Active Support on the waist route
pub const WAIST_ACTIVE_RISKS: u8 = 2;

/// Total risk count for Active Support on the BMI route
pub const BMI_ACTIVE_RISKS: u8 = 3;

/// Full set of thresholds used by [`crate::stratify`]
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    /// Waist limit for men (cm)
    pub male_waist_cm: f64,
    /// Waist limit for women (cm)
    pub female_waist_cm: f64,
    /// BMI limit
    pub bmi: f64,
    /// Fasting glucose limit (mg/dL)
    pub fasting_glucose: f64,
    /// HbA1c limit (%)
    pub hba1c: f64,
    /// Triglycerides limit (mg/dL)
    pub triglycerides: f64,
    /// HDL floor (mg/dL)
    pub hdl: f64,
    /// Systolic limit (mmHg)
    pub systolic_bp: f64,
    /// Diastolic limit (mmHg)
    pub diastolic_bp: f64,
    /// Risks needed for Active Support on the waist route
    pub waist_active_risks: u8,
    /// Risks needed for Active Support on the BMI route
    pub bmi_active_risks: u8,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            male_waist_cm: MALE_WAIST_CM,
            female_waist_cm: FEMALE_WAIST_CM,
            bmi: BMI,
            fasting_glucose: FASTING_GLUCOSE,
            hba1c: HBA1C,
            triglycerides: TRIGLYCERIDES,
            hdl: HDL,
            systolic_bp: SYSTOLIC_BP,
            diastolic_bp: DIASTOLIC_BP,
            waist_active_risks: WAIST_ACTIVE_RISKS,
            bmi_active_risks: BMI_ACTIVE_RISKS,
        }
    }
}

impl Criteria {
    /// Waist limit for the given gender
    pub fn waist_threshold(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male_waist_cm,
            Gender::Female => self.female_waist_cm,
        }
    }
}
