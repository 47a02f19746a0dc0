use std::path::PathBuf;

use clap::Args;

use crate::config::{MarkupConfig, CONFIG_FILE};
use crate::error::{RedlineError, Result};
use crate::output::{display_path, Printer};

/// Initialize a redline project (generates redline.yaml)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the config in
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let path = args.dir.join(CONFIG_FILE);
    if path.exists() && !args.force {
        return Err(RedlineError::Config {
            message: format!("{} already exists", display_path(&path)),
            help: Some("Pass --force to overwrite it".to_string()),
        });
    }

    let yaml = serde_yaml::to_string(&MarkupConfig::default()).map_err(|e| {
        RedlineError::Config {
            message: e.to_string(),
            help: None,
        }
    })?;
    std::fs::write(&path, yaml).map_err(|e| RedlineError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;

    printer.status("Created", &display_path(&path));
    Ok(())
}
