//! `projector config`: inspect configuration values.
//!
//! Values are data, so they go to stdout; headers go through the
//! [`OutputManager`] on stderr.

use std::io::{self, Write};

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut stdout = io::stdout().lock();

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            writeln!(stdout, "{value}").with_cli_context(|| "Failed to write to stdout")?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            write!(stdout, "{serialised}").with_cli_context(|| "Failed to write to stdout")?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::config_path();
            writeln!(stdout, "{}", path.display())
                .with_cli_context(|| "Failed to write to stdout")?;
            if !path.exists() {
                output.info("No file exists there yet; run 'projector init' to create one")?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::UnknownConfigKey {
        key: key.to_string(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_configured_log_level() {
        let mut cfg = AppConfig::default();
        cfg.log.level = Some("debug".into());
        assert_eq!(get_config_value(&cfg, "log.level").unwrap(), "debug");
    }
}
