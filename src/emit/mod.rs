//! Text emitters for the `.mod` / `.bones` / `.pose` streams
//!
//! Each export opens all three streams once, writes them in a single
//! pass and flushes on completion; the first error aborts the whole
//! export. Emitters take their sink by reference, so tests and embedders
//! can export into any `io::Write`.

mod armature;
mod mesh;

pub use armature::{write_bones, write_pose};
pub use mesh::write_mesh_object;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::scene::{ObjectData, Scene};

/// Identifier written into the header comment of every stream
const EXPORTER_ID: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Output paths of the three export streams
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub mesh: PathBuf,
    pub bones: PathBuf,
    pub pose: PathBuf,
}

impl ExportPaths {
    /// Derive all three paths from one stem:
    /// `model` -> `model.mod`, `model.bones`, `model.pose`
    pub fn from_stem(stem: &Path) -> Self {
        Self {
            mesh: stem.with_extension("mod"),
            bones: stem.with_extension("bones"),
            pose: stem.with_extension("pose"),
        }
    }
}

/// Export a scene to the three stream files
pub fn export_scene(scene: &Scene, paths: &ExportPaths) -> Result<(), ExportError> {
    let mut mesh_w = BufWriter::new(File::create(&paths.mesh)?);
    let mut bones_w = BufWriter::new(File::create(&paths.bones)?);
    let mut pose_w = BufWriter::new(File::create(&paths.pose)?);

    export_scene_to_writers(scene, &mut mesh_w, &mut bones_w, &mut pose_w)?;

    mesh_w.flush()?;
    bones_w.flush()?;
    pose_w.flush()?;
    Ok(())
}

/// Export a scene to caller-supplied sinks.
///
/// Mesh objects go to `mesh_w`, armature objects to `bones_w` and
/// `pose_w`; other object types are skipped. The mesh stream ends with a
/// trailing `# EOF #` marker.
pub fn export_scene_to_writers<M, B, P>(
    scene: &Scene,
    mesh_w: &mut M,
    bones_w: &mut B,
    pose_w: &mut P,
) -> Result<(), ExportError>
where
    M: Write,
    B: Write,
    P: Write,
{
    writeln!(mesh_w, "# exported by {}", EXPORTER_ID)?;
    writeln!(bones_w, "# exported by {}", EXPORTER_ID)?;
    writeln!(pose_w, "# exported by {}", EXPORTER_ID)?;

    for object in &scene.objects {
        match &object.data {
            ObjectData::Mesh(mesh) => mesh::write_mesh_object(mesh_w, object, mesh)?,
            ObjectData::Armature(armature) => {
                armature::write_bones(bones_w, armature)?;
                armature::write_pose(pose_w, armature)?;
            }
            ObjectData::Other => {
                tracing::debug!("skipping object '{}' (unsupported type)", object.name);
            }
        }
    }

    writeln!(mesh_w, "\n# EOF #")?;
    Ok(())
}
