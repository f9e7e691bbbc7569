//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use shido_domain::{AssessmentInput, Gender};

/// Shido - Specific Health Guidance stratification.
#[derive(Debug, Parser)]
#[command(name = "shido")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SHIDO_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (tier only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assess one person from command-line values
    Assess(AssessArgs),

    /// Assess a JSON array of records
    Batch(BatchArgs),

    /// Show the stratification criteria in effect
    Criteria,

    /// Fill in the assessment form interactively
    Interactive,

    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the assess command.
///
/// Clinical values left at 0 mean "not measured or within the standard range".
#[derive(Debug, Parser)]
pub struct AssessArgs {
    /// Gender
    #[arg(short, long, value_enum)]
    pub gender: GenderArg,

    /// Age in years (informational)
    #[arg(short, long, default_value_t = 40)]
    pub age: u32,

    /// Waist circumference (cm)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub waist: f64,

    /// Body mass index
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub bmi: f64,

    /// Fasting plasma glucose (mg/dl)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub glucose: f64,

    /// HbA1c (%)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hba1c: f64,

    /// Triglycerides (mg/dl)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub triglycerides: f64,

    /// HDL cholesterol (mg/dl)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hdl: f64,

    /// Systolic blood pressure (mmHg)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub systolic: f64,

    /// Diastolic blood pressure (mmHg)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub diastolic: f64,

    /// Current smoker
    #[arg(short, long)]
    pub smoker: bool,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// JSON file containing assessment records
    #[arg(long, conflicts_with = "stdin")]
    pub file: Option<String>,

    /// Read the JSON array from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the init command.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Gender argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GenderArg {
    /// Male (code 1)
    #[value(alias = "m", alias = "1")]
    Male,
    /// Female (code 2)
    #[value(alias = "f", alias = "2")]
    Female,
}

impl AssessArgs {
    /// Build the domain input from raw flag values.
    pub fn to_input(&self) -> AssessmentInput {
        AssessmentInput::new(self.gender.into(), self.age, self.waist, self.bmi)
            .with_fasting_glucose(self.glucose)
            .with_hba1c(self.hba1c)
            .with_triglycerides(self.triglycerides)
            .with_hdl(self.hdl)
            .with_blood_pressure(self.systolic, self.diastolic)
            .with_smoker(self.smoker)
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<GenderArg> for Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["shido"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_assess_command() {
        let cli = Cli::parse_from([
            "shido", "assess", "--gender", "male", "--waist", "90", "--glucose", "110",
            "--systolic", "135", "--smoker",
        ]);
        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.gender, GenderArg::Male);
                assert_eq!(args.age, 40);
                assert_eq!(args.waist, 90.0);
                assert!(args.smoker);

                let input = args.to_input();
                assert_eq!(input.fasting_glucose, Some(110.0));
                assert_eq!(input.hba1c, None);
                assert_eq!(input.systolic_bp, Some(135.0));
            }
            _ => panic!("Expected Assess command"),
        }
    }

    #[test]
    fn test_gender_code_alias() {
        let cli = Cli::parse_from(["shido", "assess", "-g", "2", "--bmi", "26"]);
        match cli.command {
            Some(Command::Assess(args)) => assert_eq!(Gender::from(args.gender), Gender::Female),
            _ => panic!("Expected Assess command"),
        }
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::parse_from(["shido", "assess", "-g", "m", "--hdl", "-5"]);
        match cli.command {
            Some(Command::Assess(args)) => assert_eq!(args.to_input().hdl, Some(-5.0)),
            _ => panic!("Expected Assess command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["shido", "-vv", "criteria", "--format", "json", "--no-color"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.command, Some(Command::Criteria)));
    }

    #[test]
    fn test_batch_file() {
        let cli = Cli::parse_from(["shido", "batch", "--file", "records.json"]);
        match cli.command {
            Some(Command::Batch(args)) => {
                assert_eq!(args.file.as_deref(), Some("records.json"));
                assert!(!args.stdin);
            }
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_batch_stdin_with_format() {
        let cli = Cli::parse_from(["shido", "batch", "--stdin", "-f", "json"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Some(Command::Batch(args)) => {
                assert!(args.stdin);
                assert!(args.file.is_none());
            }
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_batch_file_and_stdin_conflict() {
        let result = Cli::try_parse_from(["shido", "batch", "--file", "a.json", "--stdin"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::parse_from(["shido", "init", "--force"]);
        match cli.command {
            Some(Command::Init(args)) => assert!(args.force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_interactive_command() {
        let cli = Cli::parse_from(["shido", "interactive", "--no-color"]);
        assert!(matches!(cli.command, Some(Command::Interactive)));
        assert!(cli.no_color);
    }
}
