//! Assessment input module

use crate::Gender;

/// Interpret a raw clinical reading
///
/// The health check form records `0` for a test that was not taken or came
/// back within the standard range. That convention is made explicit here:
/// a literal zero becomes `None`, which never registers a risk. Any other
/// value, including a negative one, is passed through for validation.
pub fn reading(value: f64) -> Option<f64> {
    if value == 0.0 {
        None
    } else {
        Some(value)
    }
}

/// One person's measurements for a single stratification
///
/// Clinical readings are `Option<f64>`; see [`reading`] for how raw form
/// values map onto them.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentInput {
    /// Selects the waist threshold
    pub gender: Gender,

    /// Informational only; no rule reads it
    pub age: u32,

    /// Waist circumference (cm)
    pub waist_cm: f64,

    /// Body mass index (kg/m²)
    pub bmi: f64,

    /// Fasting plasma glucose (mg/dL)
    pub fasting_glucose: Option<f64>,

    /// HbA1c (%)
    pub hba1c: Option<f64>,

    /// Triglycerides (mg/dL)
    pub triglycerides: Option<f64>,

    /// HDL cholesterol (mg/dL)
    pub hdl: Option<f64>,

    /// Systolic blood pressure (mmHg)
    pub systolic_bp: Option<f64>,

    /// Diastolic blood pressure (mmHg)
    pub diastolic_bp: Option<f64>,

    /// Current smoker
    pub smoker: bool,
}

impl AssessmentInput {
    /// Create an input with anthropometrics only and no clinical readings
    pub fn new(gender: Gender, age: u32, waist_cm: f64, bmi: f64) -> Self {
        Self {
            gender,
            age,
            waist_cm,
            bmi,
            fasting_glucose: None,
            hba1c: None,
            triglycerides: None,
            hdl: None,
            systolic_bp: None,
            diastolic_bp: None,
            smoker: false,
        }
    }

    /// Set fasting plasma glucose from a raw form value
    pub fn with_fasting_glucose(mut self, value: f64) -> Self {
        self.fasting_glucose = reading(value);
        self
    }

    /// Set HbA1c from a raw form value
    pub fn with_hba1c(mut self, value: f64) -> Self {
        self.hba1c = reading(value);
        self
    }

    /// Set triglycerides from a raw form value
    pub fn with_triglycerides(mut self, value: f64) -> Self {
        self.triglycerides = reading(value);
        self
    }

    /// Set HDL cholesterol from a raw form value
    pub fn with_hdl(mut self, value: f64) -> Self {
        self.hdl = reading(value);
        self
    }

    /// Set systolic and diastolic pressure from raw form values
    pub fn with_blood_pressure(mut self, systolic: f64, diastolic: f64) -> Self {
        self.systolic_bp = reading(systolic);
        self.diastolic_bp = reading(diastolic);
        self
    }

    /// Set the smoking flag
    pub fn with_smoker(mut self, smoker: bool) -> Self {
        self.smoker = smoker;
        self
    }

    /// All numeric fields with their names, in form order
    ///
    /// Absent clinical readings are reported as `None`.
    pub fn numeric_fields(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("waist_cm", Some(self.waist_cm)),
            ("bmi", Some(self.bmi)),
            ("fasting_glucose", self.fasting_glucose),
            ("hba1c", self.hba1c),
            ("triglycerides", self.triglycerides),
            ("hdl", self.hdl),
            ("systolic_bp", self.systolic_bp),
            ("diastolic_bp", self.diastolic_bp),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_reading_is_absent() {
        assert_eq!(reading(0.0), None);
        assert_eq!(reading(-0.0), None);
        assert_eq!(reading(110.0), Some(110.0));
        assert_eq!(reading(-1.0), Some(-1.0));
    }

    #[test]
    fn test_builder_maps_zero_to_none() {
        let input = AssessmentInput::new(Gender::Male, 40, 90.0, 22.0)
            .with_hdl(0.0)
            .with_triglycerides(160.0)
            .with_blood_pressure(135.0, 0.0);

        assert_eq!(input.hdl, None);
        assert_eq!(input.triglycerides, Some(160.0));
        assert_eq!(input.systolic_bp, Some(135.0));
        assert_eq!(input.diastolic_bp, None);
        assert!(!input.smoker);
    }

    #[test]
    fn test_numeric_fields_order() {
        let input = AssessmentInput::new(Gender::Female, 52, 70.0, 26.0).with_hba1c(5.8);
        let fields = input.numeric_fields();

        assert_eq!(fields[0], ("waist_cm", Some(70.0)));
        assert_eq!(fields[1], ("bmi", Some(26.0)));
        assert_eq!(fields[3], ("hba1c", Some(5.8)));
        assert_eq!(fields[7], ("diastolic_bp", None));
    }
}
