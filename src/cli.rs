use crate::blueprint::Blueprint;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use strata_common::{Extent, Result};
use strata_logger::{log, LogSeverity};
use strata_structure::{encode_with, Document, StructureConfig};

/// Build a structure file from a JSON blueprint
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "strata", version)]
#[command(about = "Build a palette-based structure file from a JSON blueprint")]
pub struct CliArgs {
    /// Blueprint JSON (blocks, fills, layers, legend)
    pub blueprint: PathBuf,

    /// Output structure file
    #[arg(short, long, default_value = "output.nbt")]
    pub output: PathBuf,

    /// Write the raw stream without gzip
    #[arg(long)]
    pub no_gzip: bool,

    /// DataVersion written into the structure
    #[arg(long)]
    pub data_version: Option<i32>,

    /// JSON file with root_name, data_version and compress
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// The `--config` file (or defaults), with command-line flags on top.
    pub fn resolve_config(&self) -> Result<StructureConfig> {
        let mut config = match &self.config {
            Some(path) => StructureConfig::load(path)?,
            None => StructureConfig::default(),
        };
        if let Some(version) = self.data_version {
            config.data_version = version;
        }
        if self.no_gzip {
            config.compress = false;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub placements: usize,
    pub palette: usize,
    pub size: Extent,
    pub bytes: usize,
}

/// Builds the structure described by `blueprint` and encodes it.
pub fn build(blueprint: &Blueprint, config: &StructureConfig) -> Result<(Document, Vec<u8>)> {
    let mut builder = config.builder();
    blueprint.apply(&mut builder)?;
    let document = builder.into_document();
    let bytes = encode_with(config, &document)?;
    Ok((document, bytes))
}

pub fn run(args: &CliArgs) -> Result<Summary> {
    let config = args.resolve_config()?;
    let blueprint = Blueprint::load(&args.blueprint)?;
    log(
        format!("Building structure from {}", args.blueprint.display()),
        LogSeverity::Info,
    );

    let (document, bytes) = build(&blueprint, &config)?;
    if document.is_empty() {
        log(
            format!("{} places no blocks", args.blueprint.display()),
            LogSeverity::Warning,
        );
    }

    fs::write(&args.output, &bytes)?;
    log(
        format!(
            "Wrote structure: {} (gzip={})",
            args.output.display(),
            config.compress
        ),
        LogSeverity::Info,
    );

    Ok(Summary {
        placements: document.placements.len(),
        palette: document.palette.len(),
        size: document.size,
        bytes: bytes.len(),
    })
}
