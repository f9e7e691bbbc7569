//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use shido_classifier::{ClassifierConfig, ClassifierError};
use shido_domain::{AssessmentInput, AssessmentResult, Criteria, Route, Severity};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Outcome of one batch record.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Record identifier
    pub id: String,
    /// Classification or the reason it was rejected
    pub result: std::result::Result<AssessmentResult, ClassifierError>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single assessment.
    pub fn format_result(
        &self,
        input: &AssessmentInput,
        result: &AssessmentResult,
        criteria: &Criteria,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&result_json(result))?),
            OutputFormat::Table => Ok(self.format_result_table(input, result, criteria)),
            OutputFormat::Quiet => Ok(result.tier.as_str().to_string()),
        }
    }

    /// Format batch outcomes.
    pub fn format_batch(&self, outcomes: &[BatchOutcome]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_batch_json(outcomes),
            OutputFormat::Table => Ok(self.format_batch_table(outcomes)),
            OutputFormat::Quiet => Ok(self.format_batch_quiet(outcomes)),
        }
    }

    /// Format the criteria in effect.
    pub fn format_criteria(&self, config: &ClassifierConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Table => Ok(self.format_criteria_table(config)),
            OutputFormat::Quiet => Ok(format_criteria_quiet(config)),
        }
    }

    /// Format a single assessment as a table with a tier banner.
    fn format_result_table(
        &self,
        input: &AssessmentInput,
        result: &AssessmentResult,
        criteria: &Criteria,
    ) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Item", "Value"]);
        builder.push_record(["Route", &route_detail(input, result.route, criteria)]);

        if result.route.is_scored() {
            let risks = if result.risk_factors.is_empty() {
                "None".to_string()
            } else {
                result.risk_factors.labels()
            };
            builder.push_record(["Detected Risks", &risks]);
            builder.push_record(["Metabolic Risks", &result.metabolic_risk_count().to_string()]);
            builder.push_record(["Total Risks", &result.total_risk_count.to_string()]);
        }
        builder.push_record(["Support Level", result.tier.label()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let banner = format!("Result: {}", result.tier);
        format!(
            "{}\n{}\n{}",
            table,
            self.severity_colorize(&banner, result.tier.severity()),
            result.tier.guidance()
        )
    }

    /// Format batch outcomes as JSON.
    fn format_batch_json(&self, outcomes: &[BatchOutcome]) -> Result<String> {
        let json: Vec<serde_json::Value> = outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(result) => {
                    let mut value = result_json(result);
                    value["id"] = serde_json::Value::String(outcome.id.clone());
                    value
                }
                Err(e) => serde_json::json!({
                    "id": outcome.id,
                    "error": e.to_string(),
                }),
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json)?)
    }

    /// Format batch outcomes as a table.
    fn format_batch_table(&self, outcomes: &[BatchOutcome]) -> String {
        if outcomes.is_empty() {
            return self.colorize("No records found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Route", "Risks", "Total", "Support Level"]);

        for outcome in outcomes {
            match &outcome.result {
                Ok(result) => builder.push_record([
                    outcome.id.as_str(),
                    result.route.as_str(),
                    &result.risk_factors.labels(),
                    &result.total_risk_count.to_string(),
                    result.tier.label(),
                ]),
                Err(e) => builder.push_record([
                    outcome.id.as_str(),
                    "-",
                    "-",
                    "-",
                    &e.to_string(),
                ]),
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format batch outcomes in quiet mode (id and tier per line).
    fn format_batch_quiet(&self, outcomes: &[BatchOutcome]) -> String {
        outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(result) => format!("{}\t{}", outcome.id, result.tier.as_str()),
                Err(_) => format!("{}\terror", outcome.id),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format criteria as a table.
    fn format_criteria_table(&self, config: &ClassifierConfig) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Criterion", "Value"]);
        for (name, value) in config.thresholds() {
            builder.push_record([name, &value.to_string()]);
        }
        builder.push_record(["waist_active_risks", &config.waist_active_risks.to_string()]);
        builder.push_record(["bmi_active_risks", &config.bmi_active_risks.to_string()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let note = if config.is_standard() {
            self.info("Standard program criteria")
        } else {
            self.warning("Customized criteria (differs from the program standard)")
        };
        format!("{}\n{}", table, note)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text by tier severity.
    fn severity_colorize(&self, text: &str, severity: Severity) -> String {
        let color = match severity {
            Severity::Success => "green",
            Severity::Warning => "yellow",
            Severity::Error => "red",
        };
        self.colorize(text, color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().bold().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Criteria as `name\tvalue` lines.
fn format_criteria_quiet(config: &ClassifierConfig) -> String {
    let mut lines: Vec<String> = config
        .thresholds()
        .into_iter()
        .map(|(name, value)| format!("{}\t{}", name, value))
        .collect();
    lines.push(format!("waist_active_risks\t{}", config.waist_active_risks));
    lines.push(format!("bmi_active_risks\t{}", config.bmi_active_risks));
    lines.join("\n")
}

/// JSON representation of a result.
fn result_json(result: &AssessmentResult) -> serde_json::Value {
    let factors: Vec<&str> = result.risk_factors.iter().map(|f| f.as_str()).collect();
    serde_json::json!({
        "route": result.route.as_str(),
        "route_label": result.route.label(),
        "risk_factors": factors,
        "metabolic_risk_count": result.metabolic_risk_count(),
        "total_risk_count": result.total_risk_count,
        "tier": result.tier.as_str(),
        "label": result.tier.label(),
        "severity": result.tier.severity().as_str(),
        "guidance": result.tier.guidance(),
    })
}

/// Describe why a route was taken.
fn route_detail(input: &AssessmentInput, route: Route, criteria: &Criteria) -> String {
    match route {
        Route::Waist => format!(
            "{} (waist {} cm, limit {} cm)",
            route.label(),
            input.waist_cm,
            criteria.waist_threshold(input.gender)
        ),
        Route::Bmi => format!(
            "{} (waist within range, BMI {} at or above {})",
            route.label(),
            input.bmi,
            criteria.bmi
        ),
        Route::None => route.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shido_domain::{stratify, Gender};

    fn scenario_b() -> (AssessmentInput, AssessmentResult) {
        let input = AssessmentInput::new(Gender::Male, 40, 90.0, 22.0)
            .with_fasting_glucose(110.0)
            .with_blood_pressure(135.0, 0.0)
            .with_smoker(true);
        let result = stratify(&input, &Criteria::default());
        (input, result)
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let (input, result) = scenario_b();
        let output = formatter
            .format_result(&input, &result, &Criteria::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["route"], "waist");
        assert_eq!(value["tier"], "active_support");
        assert_eq!(value["total_risk_count"], 3);
        assert_eq!(value["metabolic_risk_count"], 2);
        assert_eq!(
            value["risk_factors"],
            serde_json::json!(["glucose", "blood_pressure", "smoking"])
        );
        assert_eq!(value["severity"], "error");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let (input, result) = scenario_b();
        let output = formatter
            .format_result(&input, &result, &Criteria::default())
            .unwrap();

        assert!(output.contains("Visceral Fat Obesity Route"));
        assert!(output.contains("limit 85 cm"));
        assert!(output.contains("Glucose, Blood Pressure, Smoking (Added)"));
        assert!(output.contains("Result: Active Support"));
        assert!(output.contains("Requires intensive intervention"));
    }

    #[test]
    fn test_table_format_no_obesity() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let input = AssessmentInput::new(Gender::Female, 40, 70.0, 21.0);
        let result = AssessmentResult::no_obesity();
        let output = formatter
            .format_result(&input, &result, &Criteria::default())
            .unwrap();

        assert!(output.contains("No Obesity Risk Detected"));
        assert!(output.contains("Information Provision"));
        assert!(!output.contains("Detected Risks"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let (input, result) = scenario_b();
        let output = formatter
            .format_result(&input, &result, &Criteria::default())
            .unwrap();
        assert_eq!(output, "active_support");
    }

    #[test]
    fn test_batch_json_includes_errors() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let (_, result) = scenario_b();
        let outcomes = vec![
            BatchOutcome {
                id: "a".to_string(),
                result: Ok(result),
            },
            BatchOutcome {
                id: "b".to_string(),
                result: Err(ClassifierError::invalid_input(
                    "bmi",
                    "must not be negative (got -1)",
                )),
            },
        ];

        let output = formatter.format_batch(&outcomes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["id"], "a");
        assert_eq!(value[0]["tier"], "active_support");
        assert_eq!(value[1]["id"], "b");
        assert!(value[1]["error"].as_str().unwrap().contains("bmi"));
    }

    #[test]
    fn test_batch_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let outcomes = vec![BatchOutcome {
            id: "7".to_string(),
            result: Ok(AssessmentResult::no_obesity()),
        }];
        assert_eq!(
            formatter.format_batch(&outcomes).unwrap(),
            "7\tinformation_provision"
        );
    }

    #[test]
    fn test_empty_batch() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_batch(&[]).unwrap();
        assert!(output.contains("No records found"));
    }

    #[test]
    fn test_criteria_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_criteria(&ClassifierConfig::default()).unwrap();
        assert!(output.contains("male_waist_cm"));
        assert!(output.contains("Standard program criteria"));
    }

    #[test]
    fn test_criteria_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_criteria(&ClassifierConfig::default()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "male_waist_cm\t85");
        assert!(lines.contains(&"hba1c\t5.6"));
        assert_eq!(lines[10], "bmi_active_risks\t3");
        assert!(!output.contains("Criterion"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
