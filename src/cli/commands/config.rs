use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: Option<&PathBuf>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        path: show_path,
    } = cmd
    {
        let file = path.cloned().unwrap_or_else(Config::config_file);

        if *show_path {
            println!("{}", file.display());
        }

        if *init {
            if file.exists() {
                info(format!("Configuration already present: {}", file.display()));
            } else {
                Config::default().save(&file)?;
                success(format!("Config file: {}", file.display()));
            }
        }

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
