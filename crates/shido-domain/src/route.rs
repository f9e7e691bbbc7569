//! Route module - which obesity criterion opened risk scoring

/// Obesity route taken during stratification
///
/// Waist circumference is checked before BMI; the two are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Neither criterion met; risk scoring is skipped entirely
    None,

    /// Visceral fat obesity by waist circumference
    Waist,

    /// Waist within range but BMI at or above the limit
    Bmi,
}

impl Route {
    /// Get the route name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::None => "none",
            Route::Waist => "waist",
            Route::Bmi => "bmi",
        }
    }

    /// Headline shown to the person being assessed
    pub fn label(&self) -> &'static str {
        match self {
            Route::None => "No Obesity Risk Detected",
            Route::Waist => "Visceral Fat Obesity Route",
            Route::Bmi => "BMI Route",
        }
    }

    /// Whether metabolic risk factors were scored on this route
    pub fn is_scored(&self) -> bool {
        !matches!(self, Route::None)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Route::None.label(), "No Obesity Risk Detected");
        assert_eq!(Route::Waist.label(), "Visceral Fat Obesity Route");
        assert_eq!(Route::Bmi.label(), "BMI Route");
    }

    #[test]
    fn test_is_scored() {
        assert!(!Route::None.is_scored());
        assert!(Route::Waist.is_scored());
        assert!(Route::Bmi.is_scored());
    }
}
