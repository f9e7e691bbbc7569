//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::output::{BatchOutcome, Formatter};
use serde::Deserialize;
use shido_classifier::{parse_age, parse_gender, ClassifierError, RiskClassifier};
use shido_domain::AssessmentInput;
use std::fs;
use std::io::{self, Read};
use tracing::{info, warn};

/// Execute the batch command.
pub fn execute_batch(
    args: BatchArgs,
    classifier: &RiskClassifier,
    formatter: &Formatter,
) -> Result<()> {
    // Read records from file or stdin
    let json_data = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let records: Vec<serde_json::Value> = serde_json::from_str(&json_data)?;
    if records.is_empty() {
        return Err(CliError::InvalidInput("No records provided".to_string()));
    }

    let outcomes = classify_records(records, classifier);
    let total = outcomes.len();
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();

    println!("{}", formatter.format_batch(&outcomes)?);
    info!(total, failed, "Batch complete");

    if failed > 0 {
        return Err(CliError::BatchFailed { failed, total });
    }

    Ok(())
}

/// Classify every record; a rejected or malformed record does not stop the batch.
fn classify_records(
    records: Vec<serde_json::Value>,
    classifier: &RiskClassifier,
) -> Vec<BatchOutcome> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let id = record_id(&value).unwrap_or_else(|| (index + 1).to_string());
            let result = AssessmentRecord::from_value(value)
                .and_then(|record| record.to_input())
                .and_then(|input| classifier.classify(&input));

            if let Err(e) = &result {
                warn!(record = %id, "Rejected record: {}", e);
            }

            BatchOutcome { id, result }
        })
        .collect()
}

/// The record's `id`, if it carries one. Non-string ids are used verbatim.
fn record_id(value: &serde_json::Value) -> Option<String> {
    match value.get("id")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(id) => Some(id.clone()),
        other => Some(other.to_string()),
    }
}

/// One record of batch input.
///
/// Field names follow the form; clinical values default to 0 ("not measured").
#[derive(Debug, Deserialize)]
struct AssessmentRecord {
    #[serde(default)]
    gender: Option<GenderValue>,
    #[serde(default = "default_age")]
    age: i64,
    #[serde(default, alias = "waist")]
    waist_cm: f64,
    #[serde(default)]
    bmi: f64,
    #[serde(default, alias = "glucose")]
    fasting_glucose: f64,
    #[serde(default)]
    hba1c: f64,
    #[serde(default)]
    triglycerides: f64,
    #[serde(default)]
    hdl: f64,
    #[serde(default, alias = "systolic")]
    systolic_bp: f64,
    #[serde(default, alias = "diastolic")]
    diastolic_bp: f64,
    #[serde(default)]
    smoker: bool,
}

/// Gender as a name (`"female"`) or a program code (`2`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenderValue {
    Code(i64),
    Text(String),
}

impl AssessmentRecord {
    fn from_value(value: serde_json::Value) -> std::result::Result<Self, ClassifierError> {
        if !value.is_object() {
            return Err(ClassifierError::invalid_input("record", "must be a JSON object"));
        }
        serde_json::from_value(value)
            .map_err(|e| ClassifierError::invalid_input("record", e.to_string()))
    }

    fn to_input(&self) -> std::result::Result<AssessmentInput, ClassifierError> {
        let gender = match &self.gender {
            Some(GenderValue::Code(code)) => parse_gender(&code.to_string())?,
            Some(GenderValue::Text(text)) => parse_gender(text)?,
            None => return Err(ClassifierError::invalid_input("gender", "is required")),
        };
        let age = parse_age(self.age)?;

        Ok(AssessmentInput::new(gender, age, self.waist_cm, self.bmi)
            .with_fasting_glucose(self.fasting_glucose)
            .with_hba1c(self.hba1c)
            .with_triglycerides(self.triglycerides)
            .with_hdl(self.hdl)
            .with_blood_pressure(self.systolic_bp, self.diastolic_bp)
            .with_smoker(self.smoker))
    }
}

fn default_age() -> i64 {
    40
}
