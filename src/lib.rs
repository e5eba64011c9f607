//! mod-export library
//!
//! Converts an in-memory scene (mesh and armature objects) into the
//! line-oriented `.mod` / `.bones` / `.pose` text interchange format,
//! and loads scenes from glTF/GLB files.

pub mod emit;
pub mod error;
pub mod import;
pub mod manifest;
pub mod mesh;
pub mod scene;
pub mod space;

// Re-export the conversion entry points
pub use emit::{export_scene, export_scene_to_writers, ExportPaths};
pub use error::ExportError;
pub use mesh::{convert_mesh, pack_influences, IndexedMesh, PackedInfluence};
pub use scene::{ArmatureData, MeshData, Object, ObjectData, Rotation, Scene};
