//! Shido Domain Layer
//!
//! This crate contains the domain model and the stratification rules for
//! Specific Health Guidance (Tokutei Hoken Shido), Japan's national
//! metabolic-syndrome screening program. It has ZERO external dependencies
//! and defines the value objects that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Assessment input**: anthropometrics, clinical readings and a smoking flag
//! - **Route**: which obesity criterion (waist or BMI) opened risk scoring
//! - **Risk factors**: glucose, lipids, blood pressure, and gated smoking
//! - **Support tier**: Information Provision → Motivational → Active Support
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure business logic only; [`stratify`] is total over validated input
//! - Input validation and configuration live in `shido-classifier`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assessment;
pub mod criteria;
pub mod gender;
pub mod input;
pub mod risk;
pub mod route;
pub mod stratification;
pub mod tier;

// Re-exports for convenience
pub use assessment::AssessmentResult;
pub use criteria::Criteria;
pub use gender::Gender;
pub use input::{reading, AssessmentInput};
pub use risk::{RiskFactor, RiskFactors};
pub use route::Route;
pub use stratification::stratify;
pub use tier::{Severity, SupportTier};
