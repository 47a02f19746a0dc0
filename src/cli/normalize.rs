use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{MarkupConfig, CONFIG_FILE};
use crate::error::{RedlineError, Result};
use crate::export::{build_document, RawDocument, SpecDocument};
use crate::output::{display_path, plural, Printer};
use crate::types::ColorFormat;

/// Normalize a raw design dump into a spec document
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Raw dump JSON file, as exported by the host plugin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./redline.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the configured scale divisor
    #[arg(long)]
    pub scale: Option<f64>,

    /// Override the configured units (e.g. "px" or "pt/sp")
    #[arg(long)]
    pub units: Option<String>,

    /// Override the configured color format
    #[arg(long)]
    pub format: Option<ColorFormat>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: NormalizeArgs, printer: &Printer) -> Result<()> {
    let config = resolve_config(&args)?;

    printer.status("Normalizing", &display_path(&args.input));
    let raw = read_raw_document(&args.input)?;
    let document = build_document(&raw, &config)?;

    let json = render_json(&document, args.pretty)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| RedlineError::Io {
                path: path.clone(),
                message: e.to_string(),
            })?;
            printer.status(
                "Finished",
                &format!(
                    "{} -> {}",
                    plural(document.artboards.len(), "artboard", "artboards"),
                    display_path(path)
                ),
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn resolve_config(args: &NormalizeArgs) -> Result<MarkupConfig> {
    let mut config = match &args.config {
        Some(path) => MarkupConfig::load(path)?,
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                MarkupConfig::load(default_path)?
            } else {
                MarkupConfig::default()
            }
        }
    };

    if let Some(scale) = args.scale {
        config.scale = scale;
    }
    if let Some(units) = &args.units {
        config.units = units.clone();
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    Ok(config)
}

fn read_raw_document(path: &Path) -> Result<RawDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| RedlineError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| RedlineError::Document {
        message: format!("{}: {}", path.display(), e),
        help: Some("Expected a raw dump with an \"artboards\" array".to_string()),
    })
}

fn render_json(document: &SpecDocument, pretty: bool) -> Result<String> {
    let result = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    result.map_err(|e| RedlineError::Document {
        message: e.to_string(),
        help: None,
    })
}
