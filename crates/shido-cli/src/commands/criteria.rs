//! Criteria command implementation.

use crate::error::Result;
use crate::output::Formatter;
use shido_classifier::ClassifierConfig;

/// Execute the criteria command.
pub fn execute_criteria(config: &ClassifierConfig, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_criteria(config)?);
    Ok(())
}
