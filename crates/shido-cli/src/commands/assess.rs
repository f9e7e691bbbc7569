//! Assess command implementation.

use crate::cli::AssessArgs;
use crate::error::Result;
use crate::output::Formatter;
use shido_classifier::RiskClassifier;

/// Execute the assess command.
pub fn execute_assess(
    args: AssessArgs,
    classifier: &RiskClassifier,
    formatter: &Formatter,
) -> Result<()> {
    let input = args.to_input();
    let result = classifier.classify(&input)?;

    println!(
        "{}",
        formatter.format_result(&input, &result, classifier.criteria())?
    );

    Ok(())
}
