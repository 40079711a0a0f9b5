use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        upgrade,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "configuration file not found: {} (run `rollcall init`)",
                    path.display()
                )));
            }
            let missing = Config::missing_keys(path)?;
            if missing.is_empty() {
                success("Configuration file is complete");
            } else {
                warning(format!(
                    "Missing fields (defaults in use): {}",
                    missing.join(", ")
                ));
            }
        }

        // ---- UPGRADE CONFIG ----
        // Rewrites what the file holds; command-line overrides stay out.
        if *upgrade {
            Config::load(Some(path))?.save(path)?;
            success(format!("Configuration written to {}", path.display()));
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.as_deref());
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<&str>) {
    // Default editor depends on the platform
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or(&default_editor);

    match Command::new(editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Ok(_) | Err(_) => {
                    error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    ));
                }
            }
        }
    }
}
