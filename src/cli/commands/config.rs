use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{fill_missing_keys, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} not found, run `hourbank init` first",
                    path.display()
                )));
            }

            let missing = missing_keys(&path)?;
            if missing.is_empty() {
                success("All configuration keys are present.");
            } else {
                warning(format!("Missing keys: {}", missing.join(", ")));
                fill_missing_keys(&path)?;
            }
            // the values are validated by building the calendar
            cfg.calendar()?;
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            if run_editor(&editor_to_use, &path) {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
            } else if editor_to_use != default_editor {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                if run_editor(&default_editor, &path) {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                } else {
                    return Err(AppError::Config(format!(
                        "failed to edit configuration file using '{}'",
                        default_editor
                    )));
                }
            } else {
                return Err(AppError::Config(format!(
                    "failed to edit configuration file using '{}'",
                    editor_to_use
                )));
            }
        }

        if !*print_config && !*check && !*edit_config {
            info("Nothing to do: use --print, --check or --edit.");
        }
    }

    Ok(())
}

fn run_editor(editor: &str, path: &std::path::Path) -> bool {
    tracing::debug!(editor, path = %path.display(), "launching editor");
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
