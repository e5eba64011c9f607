//! TOML manifest describing a batch export
//!
//! ```toml
//! output = "exported"
//!
//! [[scene]]
//! input = "assets/player.glb"
//! name = "player"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::emit::{export_scene, ExportPaths};
use crate::import;

/// Top-level manifest file
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Directory all output paths resolve against
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default, rename = "scene")]
    pub scenes: Vec<SceneEntry>,
}

/// One scene to export
#[derive(Debug, Deserialize)]
pub struct SceneEntry {
    /// Input glTF/GLB file
    pub input: PathBuf,
    /// Output stem; defaults to the input file name
    #[serde(default)]
    pub name: Option<String>,
}

/// Read and parse a manifest file
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {:?}", path))?;
    let manifest: Manifest =
        toml::from_str(&text).with_context(|| format!("Failed to parse manifest: {:?}", path))?;
    Ok(manifest)
}

/// Check a manifest without building anything
pub fn validate(manifest: &Manifest) -> Result<()> {
    if manifest.scenes.is_empty() {
        bail!("Manifest lists no scenes");
    }
    for entry in &manifest.scenes {
        if !entry.input.exists() {
            bail!("Scene input does not exist: {:?}", entry.input);
        }
    }
    Ok(())
}

/// Export every scene the manifest lists
pub fn build_all(manifest: &Manifest, output_override: Option<&Path>) -> Result<()> {
    let output_dir = output_override
        .map(Path::to_path_buf)
        .or_else(|| manifest.output.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output dir: {:?}", output_dir))?;

    for entry in &manifest.scenes {
        let stem = entry.name.clone().unwrap_or_else(|| {
            entry
                .input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("scene")
                .to_string()
        });
        let paths = ExportPaths::from_stem(&output_dir.join(stem));

        let scene = import::load_scene(&entry.input)?;
        export_scene(&scene, &paths)
            .with_context(|| format!("Failed to export {:?}", entry.input))?;
        tracing::info!("Exported {:?} -> {:?}", entry.input, paths.mesh);
    }

    Ok(())
}
