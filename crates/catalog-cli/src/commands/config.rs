use super::prompts::{prompt_string, prompt_yes_no};
use super::ui::is_interactive;
use super::Settings;
use crate::output::Output;
use crate::ConfigCommands;
use catalog_config::{Config, API_KEY_ENV};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_config(settings: &Settings, cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => show_config(settings, full, output),
        ConfigCommands::Init { api_key, force } => init_config(settings, api_key, force, output),
        ConfigCommands::Path => {
            let path = settings.paths.config_file();
            if output.is_human() {
                output.block(path.display().to_string());
            } else {
                output.json(&json!({ "config_file": path }));
            }
            Ok(())
        }
    }
}

fn section(title: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![Cell::new(title).fg(Color::Cyan).add_attribute(Attribute::Bold)]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn flag(enabled: bool) -> String {
    if enabled {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

/// Where the effective API key comes from.
fn key_source(config: &Config) -> &'static str {
    let from_env = std::env::var(API_KEY_ENV).map(|v| !v.trim().is_empty()).unwrap_or(false);
    if from_env {
        "environment"
    } else if config.tmdb.resolve_api_key().is_some() {
        "config file"
    } else {
        "missing"
    }
}

fn show_config(settings: &Settings, full: bool, output: &Output) -> Result<()> {
    let config_file = settings.paths.config_file();
    let config = &settings.config;

    let api_key_display = if full {
        config.tmdb.api_key.clone().unwrap_or_else(|| "(not set)".to_string())
    } else {
        config.tmdb.masked_api_key()
    };

    if !output.is_human() {
        output.json(&json!({
            "config_file": config_file,
            "exists": config_file.exists(),
            "tmdb": {
                "api_key": api_key_display,
                "api_key_source": key_source(config),
                "base_url": config.tmdb.base_url,
                "image_base_url": config.tmdb.image_base_url,
                "language": config.tmdb.language,
                "timeout_secs": config.tmdb.timeout_secs,
            },
            "browse": config.browse,
            "logging": config.logging,
        }));
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!("Configuration file not found at: {}", config_file.display()));
        output.info("Showing defaults. Run 'reel-catalog config init' to create one.");
    }

    let mut file_table = Table::new();
    file_table.set_header(vec![
        Cell::new("Config File").add_attribute(Attribute::Bold),
        Cell::new(config_file.display().to_string()),
    ]);
    file_table.load_preset(comfy_table::presets::UTF8_FULL);
    file_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    output.block(file_table.to_string());

    let mut tmdb_table = section("TMDB");
    tmdb_table.add_row(vec![Cell::new("API Key"), Cell::new(api_key_display)]);
    tmdb_table.add_row(vec![Cell::new("Key Source"), Cell::new(key_source(config))]);
    tmdb_table.add_row(vec![Cell::new("Base URL"), Cell::new(&config.tmdb.base_url)]);
    tmdb_table.add_row(vec![Cell::new("Image Base URL"), Cell::new(&config.tmdb.image_base_url)]);
    tmdb_table.add_row(vec![
        Cell::new("Language"),
        Cell::new(config.tmdb.language.as_deref().unwrap_or("(service default)")),
    ]);
    tmdb_table.add_row(vec![Cell::new("Timeout"), Cell::new(format!("{} seconds", config.tmdb.timeout_secs))]);
    output.block(tmdb_table.to_string());

    let mut browse_table = section("Browsing");
    browse_table.add_row(vec![Cell::new("Default Sort"), Cell::new(config.browse.default_sort.label())]);
    browse_table.add_row(vec![Cell::new("Trending Window"), Cell::new(config.browse.time_window)]);
    browse_table.add_row(vec![
        Cell::new("Clear Genre On Type Change"),
        Cell::new(flag(config.browse.clear_genre_on_media_change)),
    ]);
    output.block(browse_table.to_string());

    let mut logging_table = section("Logging");
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stderr".to_string());
    logging_table.add_row(vec![Cell::new("Destination"), Cell::new(log_file)]);
    logging_table.add_row(vec![
        Cell::new("Suggested File"),
        Cell::new(settings.paths.default_log_file().display().to_string()),
    ]);
    output.block(logging_table.to_string());

    Ok(())
}

fn init_config(settings: &Settings, api_key: Option<String>, force: bool, output: &Output) -> Result<()> {
    let config_file = settings.paths.config_file();

    if config_file.exists() && !force {
        let overwrite = is_interactive()
            && prompt_yes_no(
                &format!("{} already exists. Overwrite?", config_file.display()),
                Some(false),
            )?;
        if !overwrite {
            output.warn("Configuration left unchanged (use --force to overwrite).");
            return Ok(());
        }
    }

    let api_key = match api_key {
        Some(key) => key,
        None if is_interactive() => prompt_string("TMDB API key (leave empty to use TMDB_API_KEY)", None)?,
        None => String::new(),
    };

    let mut config = settings.config.clone();
    config.tmdb.api_key = Some(api_key.trim().to_string()).filter(|k| !k.is_empty());
    config
        .validate()
        .map_err(|e| eyre!("Invalid configuration: {}", e))?;

    settings
        .paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create {}: {}", settings.paths.config_dir().display(), e))?;
    config
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to save config to {}: {}", config_file.display(), e))?;

    tracing::info!(path = %config_file.display(), "Configuration written");
    output.success(format!("Configuration saved to {}", config_file.display()));
    if config.tmdb.api_key.is_none() {
        output.info(format!("No API key stored; set {} before browsing.", API_KEY_ENV));
    }
    Ok(())
}
