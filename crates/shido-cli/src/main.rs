//! Shido CLI - Specific Health Guidance stratification from the command line.

use clap::Parser;
use shido_classifier::RiskClassifier;
use shido_cli::cli::CliFormat;
use shido_cli::commands;
use shido_cli::config::OutputFormat;
use shido_cli::interactive;
use shido_cli::{Cli, Command, Config, Formatter};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> shido_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    shido_cli::logging::init(cli.verbose);

    let explicit_config = cli.config.is_some();
    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };

    // Handle commands
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Init(args) => {
            let formatter = Formatter::new(OutputFormat::Table, !cli.no_color);
            commands::execute_init(args, &config_path, &formatter)?;
        }
        Command::Interactive => {
            let session = Session::load(&config_path, explicit_config, cli.format, cli.no_color)?;
            interactive::run_interactive(&session.classifier, &session.formatter)?;
        }
        Command::Assess(args) => {
            let session = Session::load(&config_path, explicit_config, cli.format, cli.no_color)?;
            commands::execute_assess(args, &session.classifier, &session.formatter)?;
        }
        Command::Batch(args) => {
            let session = Session::load(&config_path, explicit_config, cli.format, cli.no_color)?;
            commands::execute_batch(args, &session.classifier, &session.formatter)?;
        }
        Command::Criteria => {
            let session = Session::load(&config_path, explicit_config, cli.format, cli.no_color)?;
            commands::execute_criteria(&session.config.criteria, &session.formatter)?;
        }
    }

    Ok(())
}

/// Configuration, classifier and formatter for commands that assess.
struct Session {
    config: Config,
    classifier: RiskClassifier,
    formatter: Formatter,
}

impl Session {
    fn load(
        config_path: &Path,
        explicit: bool,
        format: Option<CliFormat>,
        no_color: bool,
    ) -> shido_cli::Result<Self> {
        // An explicit path must exist; the default path may be absent
        let config = if explicit {
            Config::load_from(config_path)?
        } else {
            Config::load()?
        };
        debug!(path = %config_path.display(), "Loaded configuration");

        // Determine output format
        let format = format.map(Into::into).unwrap_or(config.settings.format);

        // Determine color setting
        let color_enabled = !no_color && config.settings.color;

        if !config.criteria.is_standard() {
            warn!("Using customized criteria; results may differ from the program standard");
        }
        let classifier = RiskClassifier::new(config.criteria.clone())?;

        Ok(Self {
            config,
            classifier,
            formatter: Formatter::new(format, color_enabled),
        })
    }
}
