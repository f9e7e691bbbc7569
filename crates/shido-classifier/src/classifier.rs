//! Risk classification

use crate::{validate_input, ClassifierConfig, Result};
use shido_domain::{stratify, AssessmentInput, AssessmentResult, Criteria};
use tracing::debug;

/// Classifies assessment inputs into support tiers
///
/// Holds only immutable criteria, so a single instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct RiskClassifier {
    criteria: Criteria,
}

impl RiskClassifier {
    /// Create a classifier from a validated configuration
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            criteria: config.to_criteria(),
        })
    }

    /// Create a classifier with the published program criteria
    pub fn standard() -> Self {
        Self {
            criteria: Criteria::default(),
        }
    }

    /// Criteria in effect
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Classify one input
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClassifierError::InvalidInput`] if any numeric field
    /// is negative or not finite. Nothing is clamped.
    pub fn classify(&self, input: &AssessmentInput) -> Result<AssessmentResult> {
        validate_input(input)?;

        let result = stratify(input, &self.criteria);

        debug!(
            gender = %input.gender,
            route = result.route.as_str(),
            metabolic_risks = result.metabolic_risk_count(),
            total_risks = result.total_risk_count,
            tier = result.tier.as_str(),
            "Classified assessment"
        );

        Ok(result)
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClassifierError;
    use shido_domain::{Gender, Route, SupportTier};

    #[test]
    fn test_standard_classifier() {
        let classifier = RiskClassifier::standard();
        let input = AssessmentInput::new(Gender::Male, 40, 90.0, 22.0);
        let result = classifier.classify(&input).unwrap();

        assert_eq!(result.route, Route::Waist);
        assert_eq!(result.tier, SupportTier::InformationProvision);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ClassifierConfig {
            bmi: f64::NAN,
            ..ClassifierConfig::default()
        };
        assert!(matches!(RiskClassifier::new(config), Err(ClassifierError::Config(_))));
    }

    #[test]
    fn test_negative_input_not_classified() {
        let classifier = RiskClassifier::standard();
        let input = AssessmentInput::new(Gender::Female, 40, 95.0, 22.0).with_triglycerides(-160.0);

        assert!(matches!(
            classifier.classify(&input),
            Err(ClassifierError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_classifier_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RiskClassifier>();
    }
}
