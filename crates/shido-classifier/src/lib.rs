//! Shido Classifier
//!
//! Stratifies metabolic-syndrome risk for Specific Health Guidance.
//!
//! The classifier provides:
//! - Input validation (no negative or non-finite readings)
//! - Configurable criteria, defaulting to the published program values
//! - Pure, thread-safe classification into a support tier
//!
//! # Examples
//!
//! ```
//! use shido_classifier::{RiskClassifier, ClassifierConfig};
//! use shido_domain::{AssessmentInput, Gender, SupportTier};
//!
//! let classifier = RiskClassifier::new(ClassifierConfig::default()).unwrap();
//!
//! let input = AssessmentInput::new(Gender::Male, 45, 90.0, 22.0)
//!     .with_fasting_glucose(110.0)
//!     .with_blood_pressure(135.0, 0.0)
//!     .with_smoker(true);
//!
//! let result = classifier.classify(&input).unwrap();
//! assert_eq!(result.tier, SupportTier::ActiveSupport);
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod validation;

pub use classifier::RiskClassifier;
pub use config::ClassifierConfig;
pub use error::{ClassifierError, Result};
pub use validation::{parse_age, parse_gender, validate_input};
