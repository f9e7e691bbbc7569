//! Risk factor module

use std::collections::BTreeSet;

/// A risk counted toward stratification
///
/// Declaration order is evaluation order, and the derived `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskFactor {
    /// Fasting glucose or HbA1c at or above the limit
    Glucose,

    /// High triglycerides or low (recorded) HDL
    Lipids,

    /// Systolic or diastolic pressure at or above the limit
    BloodPressure,

    /// Smoking; only counted alongside a metabolic risk
    Smoking,
}

impl RiskFactor {
    /// Get the factor name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFactor::Glucose => "glucose",
            RiskFactor::Lipids => "lipids",
            RiskFactor::BloodPressure => "blood_pressure",
            RiskFactor::Smoking => "smoking",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::Glucose => "Glucose",
            RiskFactor::Lipids => "Lipids",
            RiskFactor::BloodPressure => "Blood Pressure",
            RiskFactor::Smoking => "Smoking (Added)",
        }
    }

    /// Glucose, lipids and blood pressure are metabolic; smoking is not
    pub fn is_metabolic(&self) -> bool {
        !matches!(self, RiskFactor::Smoking)
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of triggered risk factors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskFactors(BTreeSet<RiskFactor>);

impl RiskFactors {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factor; returns false if it was already present
    pub fn insert(&mut self, factor: RiskFactor) -> bool {
        self.0.insert(factor)
    }

    /// Whether the factor was triggered
    pub fn contains(&self, factor: RiskFactor) -> bool {
        self.0.contains(&factor)
    }

    /// Iterate in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = RiskFactor> + '_ {
        self.0.iter().copied()
    }

    /// Number of triggered factors, smoking included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No factor triggered
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of triggered metabolic factors (0-3)
    pub fn metabolic_count(&self) -> usize {
        self.iter().filter(RiskFactor::is_metabolic).count()
    }

    /// Comma-separated labels, e.g. `Glucose, Smoking (Added)`
    pub fn labels(&self) -> String {
        self.iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<RiskFactor> for RiskFactors {
    fn from_iter<I: IntoIterator<Item = RiskFactor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_evaluation_order() {
        let factors: RiskFactors = [
            RiskFactor::Smoking,
            RiskFactor::BloodPressure,
            RiskFactor::Glucose,
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = factors.iter().collect();
        assert_eq!(
            order,
            vec![RiskFactor::Glucose, RiskFactor::BloodPressure, RiskFactor::Smoking]
        );
    }

    #[test]
    fn test_metabolic_count_excludes_smoking() {
        let mut factors = RiskFactors::new();
        factors.insert(RiskFactor::Lipids);
        factors.insert(RiskFactor::Smoking);

        assert_eq!(factors.len(), 2);
        assert_eq!(factors.metabolic_count(), 1);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut factors = RiskFactors::new();
        assert!(factors.insert(RiskFactor::Glucose));
        assert!(!factors.insert(RiskFactor::Glucose));
        assert_eq!(factors.len(), 1);
    }

    #[test]
    fn test_labels() {
        let factors: RiskFactors = [RiskFactor::Glucose, RiskFactor::Smoking].into_iter().collect();
        assert_eq!(factors.labels(), "Glucose, Smoking (Added)");
        assert_eq!(RiskFactors::new().labels(), "");
    }
}
