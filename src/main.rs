//! mod-export - scene export tool
//!
//! Converts glTF/GLB scenes to the `.mod` / `.bones` / `.pose` text
//! interchange format.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mod_export::{emit, import, manifest};

#[derive(Parser)]
#[command(name = "mod-export")]
#[command(about = "Scene export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a single scene file
    Export {
        /// Input glTF/GLB file
        input: PathBuf,

        /// Output stem (default: input path without extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export all scenes from a manifest file
    Build {
        /// Path to export.toml manifest
        #[arg(default_value = "export.toml")]
        manifest: PathBuf,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate manifest without building
    Check {
        /// Path to export.toml manifest
        #[arg(default_value = "export.toml")]
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export { input, output } => {
            let stem = output.unwrap_or_else(|| input.with_extension(""));
            let paths = emit::ExportPaths::from_stem(&stem);
            tracing::info!("Converting {:?} -> {:?}", input, paths.mesh);

            let scene = import::load_scene(&input)?;
            emit::export_scene(&scene, &paths)?;
            tracing::info!("Done!");
        }

        Commands::Build { manifest, output } => {
            tracing::info!("Building scenes from {:?}", manifest);
            let config = manifest::load_manifest(&manifest)?;
            manifest::build_all(&config, output.as_deref())?;
            tracing::info!("Build complete!");
        }

        Commands::Check { manifest } => {
            tracing::info!("Checking manifest {:?}", manifest);
            let config = manifest::load_manifest(&manifest)?;
            manifest::validate(&config)?;
            tracing::info!("Manifest is valid!");
        }
    }

    Ok(())
}
