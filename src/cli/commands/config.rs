use colored::Colorize;

use super::common::{prompt_line, prompt_password};
use crate::cli::args::{ConfigArgs, ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::{AktaraError, Result};

/// Handle the config command
pub fn config(
    config: &mut Config,
    paths: &Paths,
    args: &ConfigArgs,
    format: OutputFormat,
) -> Result<String> {
    match &args.command {
        ConfigCommands::Show => config_show(config, format),
        ConfigCommands::Set { key, value } => config_set(config, paths, key, value, format),
        ConfigCommands::Path => config_path(paths, format),
        ConfigCommands::Init => config_init(config, paths, format),
    }
}

/// Mask all but the ends of a token
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}

/// Show current configuration
fn config_show(config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => {
            let mut output = String::new();
            output.push_str(&format!("{}\n", "Configuration".bold()));
            output.push_str(&"─".repeat(40));
            output.push('\n');

            output.push_str(&format!("\n{}\n", "[api]".cyan()));
            output.push_str(&format!("  base_url = {}\n", config.api.base_url));
            let token_display = config
                .api
                .token
                .as_deref()
                .map(mask_token)
                .unwrap_or_else(|| "(not set)".dimmed().to_string());
            output.push_str(&format!("  token = {token_display}\n"));

            output.push_str(&format!("\n{}\n", "[search]".cyan()));
            output.push_str(&format!("  debounce_ms = {}\n", config.search.debounce_ms));
            output.push_str(&format!(
                "  loading_delay_ms = {}\n",
                config.search.loading_delay_ms
            ));
            output.push_str(&format!(
                "  cache_flush_secs = {}\n",
                config.search.cache_flush_secs
            ));
            output.push_str(&format!("  timeout_secs = {}\n", config.search.timeout_secs));

            output.push_str(&format!("\n{}\n", "[output]".cyan()));
            output.push_str(&format!("  format = {}\n", config.output.format));

            Ok(output)
        }
        OutputFormat::Json => {
            // Don't expose the full token in JSON output either
            let mut safe_config = config.clone();
            safe_config.api.token = safe_config.api.token.as_deref().map(mask_token);
            Ok(serde_json::to_string_pretty(&safe_config)?)
        }
    }
}

/// Set a configuration value
fn config_set(
    config: &mut Config,
    paths: &Paths,
    key: &str,
    value: &str,
    format: OutputFormat,
) -> Result<String> {
    config.set_value(key, value)?;
    config.save_to(paths)?;

    let shown = if key == "api.token" {
        mask_token(value)
    } else {
        value.to_string()
    };

    match format {
        OutputFormat::Pretty => Ok(format!("{} Set {} = {}", "✓".green(), key, shown)),
        OutputFormat::Json => {
            let result = serde_json::json!({
                "success": true,
                "key": key,
                "value": shown
            });
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}

/// Show configuration file path
fn config_path(paths: &Paths, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => {
            let mut output = String::new();
            output.push_str(&format!("Config file: {}\n", paths.config_file.display()));
            output.push_str(&format!(
                "Exists: {}\n",
                if paths.config_exists() {
                    "yes".green()
                } else {
                    "no".yellow()
                }
            ));
            output.push_str(&format!("Storage: {}\n", paths.storage_file.display()));
            output.push_str(&format!("Logs: {}", paths.logs_dir.display()));
            Ok(output)
        }
        OutputFormat::Json => {
            let result = serde_json::json!({
                "path": paths.config_file.display().to_string(),
                "exists": paths.config_exists(),
                "storage": paths.storage_file.display().to_string(),
                "logs": paths.logs_dir.display().to_string()
            });
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}

/// Initialize configuration interactively
fn config_init(config: &mut Config, paths: &Paths, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Err(AktaraError::InvalidArgument(
            "config init requires interactive mode (--output pretty)".to_string(),
        ));
    }

    println!("{}", "Aktara Configuration".bold());
    println!("{}", "─".repeat(40));
    println!();

    let base_url = prompt_line(&format!("Storefront URL [{}]", config.api.base_url))?;
    if !base_url.is_empty() {
        config.set_value("api.base_url", &base_url)?;
    }

    println!("API token (leave empty for none):");
    let token = prompt_password("Token", false)?;
    let token = token.trim();
    if !token.is_empty() {
        config.set_token(token.to_string());
    }

    config.save_to(paths)?;

    Ok(format!(
        "\n{} Configuration saved to: {}\n\nRun '{}' to start searching.",
        "✓".green(),
        paths.config_file.display(),
        "aktara shop".cyan()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("abcd1234efgh"), "abcd...efgh");
        assert_eq!(mask_token("short"), "****");
    }

    #[test]
    fn test_config_show_json_masks_token() {
        let mut config = Config::default();
        config.set_token("abcd1234efgh".to_string());
        let output = config_show(&config, OutputFormat::Json).unwrap();
        assert!(output.contains("abcd...efgh"));
        assert!(!output.contains("abcd1234efgh"));
    }

    #[test]
    fn test_config_set_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let mut config = Config::default();

        config_set(&mut config, &paths, "search.debounce_ms", "150", OutputFormat::Json).unwrap();

        let loaded = Config::load_from(&paths).unwrap();
        assert_eq!(loaded.search.debounce_ms, 150);
    }

    #[test]
    fn test_config_set_unknown_key_does_not_save() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let mut config = Config::default();

        assert!(config_set(&mut config, &paths, "nope", "1", OutputFormat::Pretty).is_err());
        assert!(!paths.config_exists());
    }
}
