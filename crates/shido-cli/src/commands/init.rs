//! Init command implementation.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the init command.
///
/// Writes a configuration file holding the default settings and the
/// standard program criteria, ready to be edited.
pub fn execute_init(args: InitArgs, path: &Path, formatter: &Formatter) -> Result<()> {
    write_default_config(path, args.force)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote configuration to {}", path.display()))
    );
    Ok(())
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists. Use --force to overwrite",
            path.display()
        )));
    }
    Config::default().save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        write_default_config(&path, false).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(config.criteria.is_standard());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\ncolor = false\n").unwrap();

        assert!(matches!(write_default_config(&path, false), Err(CliError::Config(_))));
        write_default_config(&path, true).unwrap();
        assert!(Config::load_from(&path).unwrap().settings.color);
    }
}
