//! Mesh normalization pipeline
//!
//! Face collection (triangulation, winding flip, coordinate conversion)
//! feeds vertex indexing (host-index dedup), whose unique vertices get
//! their bone influences packed to the fixed 4-wide output layout at
//! emission time.

mod collect;
mod index;
mod packing;

pub use collect::{bone_index_map, collect_faces, BoneIndexMap, RawCorner, Triangle};
pub use index::{index_vertices, IndexedMesh, IndexedTriangle, UniqueVertex};
pub use packing::{pack_influences, PackedInfluence, MAX_INFLUENCES};

use crate::error::ExportError;
use crate::scene::MeshData;

/// Run the full pipeline for one mesh object: collect faces, then
/// deduplicate into an indexed vertex table.
pub fn convert_mesh(object: &str, mesh: &MeshData) -> Result<IndexedMesh, ExportError> {
    let triangles = collect_faces(object, mesh)?;
    Ok(index_vertices(&triangles))
}
