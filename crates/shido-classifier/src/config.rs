//! Classifier configuration
//!
//! Every threshold defaults to the published program value, so a TOML table
//! may override any subset of them or be omitted entirely.

use crate::{ClassifierError, Result};
use serde::{Deserialize, Serialize};
use shido_domain::{criteria, Criteria};

/// Thresholds used for stratification
///
/// # Examples
///
/// ```
/// use shido_classifier::ClassifierConfig;
///
/// let config: ClassifierConfig = toml::from_str("hba1c = 6.0").unwrap();
/// assert_eq!(config.hba1c, 6.0);
/// assert_eq!(config.bmi, 25.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Waist limit for men (cm). Default: 85.0
    pub male_waist_cm: f64,

    /// Waist limit for women (cm). Default: 90.0
    pub female_waist_cm: f64,

    /// BMI limit. Default: 25.0
    pub bmi: f64,

    /// Fasting plasma glucose limit (mg/dL). Default: 100
    pub fasting_glucose: f64,

    /// HbA1c limit (%). Default: 5.6
    pub hba1c: f64,

    /// Triglycerides limit (mg/dL). Default: 150
    pub triglycerides: f64,

    /// HDL floor (mg/dL). Default: 40
    pub hdl: f64,

    /// Systolic limit (mmHg). Default: 130
    pub systolic_bp: f64,

    /// Diastolic limit (mmHg). Default: 85
    pub diastolic_bp: f64,

    /// Total risks for Active Support on the waist route. Default: 2
    pub waist_active_risks: u8,

    /// Total risks for Active Support on the BMI route. Default: 3
    pub bmi_active_risks: u8,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            male_waist_cm: criteria::MALE_WAIST_CM,
            female_waist_cm: criteria::FEMALE_WAIST_CM,
            bmi: criteria::BMI,
            fasting_glucose: criteria::FASTING_GLUCOSE,
            hba1c: criteria::HBA1C,
            triglycerides: criteria::TRIGLYCERIDES,
            hdl: criteria::HDL,
            systolic_bp: criteria::SYSTOLIC_BP,
            diastolic_bp: criteria::DIASTOLIC_BP,
            waist_active_risks: criteria::WAIST_ACTIVE_RISKS,
            bmi_active_risks: criteria::BMI_ACTIVE_RISKS,
        }
    }
}

impl ClassifierConfig {
    /// Check that every threshold is usable
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.thresholds() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ClassifierError::Config(format!(
                    "{} must be a positive number (got {})",
                    name, value
                )));
            }
        }

        for (name, count) in [
            ("waist_active_risks", self.waist_active_risks),
            ("bmi_active_risks", self.bmi_active_risks),
        ] {
            if !(2..=4).contains(&count) {
                return Err(ClassifierError::Config(format!(
                    "{} must be between 2 and 4 (got {})",
                    name, count
                )));
            }
        }

        Ok(())
    }

    /// Named threshold values, in form order
    pub fn thresholds(&self) -> [(&'static str, f64); 9] {
        [
            ("male_waist_cm", self.male_waist_cm),
            ("female_waist_cm", self.female_waist_cm),
            ("bmi", self.bmi),
            ("fasting_glucose", self.fasting_glucose),
            ("hba1c", self.hba1c),
            ("triglycerides", self.triglycerides),
            ("hdl", self.hdl),
            ("systolic_bp", self.systolic_bp),
            ("diastolic_bp", self.diastolic_bp),
        ]
    }

    /// Whether every value equals the published program criteria
    pub fn is_standard(&self) -> bool {
        *self == Self::default()
    }

    /// Domain criteria for the rule engine
    pub fn to_criteria(&self) -> Criteria {
        Criteria {
            male_waist_cm: self.male_waist_cm,
            female_waist_cm: self.female_waist_cm,
            bmi: self.bmi,
            fasting_glucose: self.fasting_glucose,
            hba1c: self.hba1c,
            triglycerides: self.triglycerides,
            hdl: self.hdl,
            systolic_bp: self.systolic_bp,
            diastolic_bp: self.diastolic_bp,
            waist_active_risks: self.waist_active_risks,
            bmi_active_risks: self.bmi_active_risks,
        }
    }
}
