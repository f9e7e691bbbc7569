//! Tier module - support levels assigned by stratification

/// Support tier determining guidance intensity
///
/// Ordered by intensity:
/// - InformationProvision: Low risk, leaflet-level information only
/// - MotivationalSupport: Moderate risk, a single lifestyle-advice session
/// - ActiveSupport: High risk, continuous intervention over several months
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SupportTier {
    /// Low risk
    InformationProvision,

    /// Moderate risk
    MotivationalSupport,

    /// High risk
    ActiveSupport,
}

/// How prominently a tier should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Green
    Success,

    /// Yellow
    Warning,

    /// Red
    Error,
}

impl SupportTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportTier::InformationProvision => "information_provision",
            SupportTier::MotivationalSupport => "motivational_support",
            SupportTier::ActiveSupport => "active_support",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SupportTier::InformationProvision => "Information Provision",
            SupportTier::MotivationalSupport => "Motivational Support",
            SupportTier::ActiveSupport => "Active Support",
        }
    }

    /// Presentation severity
    pub fn severity(&self) -> Severity {
        match self {
            SupportTier::InformationProvision => Severity::Success,
            SupportTier::MotivationalSupport => Severity::Warning,
            SupportTier::ActiveSupport => Severity::Error,
        }
    }

    /// One-line guidance for the person assessed
    pub fn guidance(&self) -> &'static str {
        match self {
            SupportTier::InformationProvision => "Maintain current healthy habits.",
            SupportTier::MotivationalSupport => "Requires lifestyle modification advice.",
            SupportTier::ActiveSupport => "Requires intensive intervention due to multiple risks.",
        }
    }
}

impl Severity {
    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for SupportTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
