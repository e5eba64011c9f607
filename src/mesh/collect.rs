//! Face collection and triangulation

use glam::{Vec2, Vec3};
use hashbrown::HashMap;

use crate::error::ExportError;
use crate::scene::{MeshData, MeshVertex};
use crate::space;

/// Bone name -> dense index, built from the armature modifier's bone list
pub type BoneIndexMap = HashMap<String, u32>;

/// One face corner before deduplication, already in export space
#[derive(Debug, Clone)]
pub struct RawCorner {
    /// Host vertex index; the identity key for deduplication
    pub vertex_index: u32,
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Option<Vec2>,
    /// Raw (bone index, weight) influences, in host order
    pub influences: Vec<(u32, f32)>,
}

/// A triangle of raw corners, already in output winding order
#[derive(Debug, Clone)]
pub struct Triangle {
    pub corners: [RawCorner; 3],
}

/// Build the bone-index map from the mesh's armature modifier.
///
/// Empty when the mesh has no armature modifier.
pub fn bone_index_map(mesh: &MeshData) -> BoneIndexMap {
    mesh.armature_bones
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), i as u32))
        .collect()
}

/// Walk the mesh's polygons and emit triangles of raw corners.
///
/// Quads split into (0,1,2) and (0,2,3); every triangle is then emitted
/// with its first two corners swapped, flipping the winding for the
/// target renderer. Positions and normals are converted to export space
/// here.
pub fn collect_faces(object: &str, mesh: &MeshData) -> Result<Vec<Triangle>, ExportError> {
    let bones = bone_index_map(mesh);
    let skinned = mesh.armature_bones.is_some();
    if !skinned && mesh.vertices.iter().any(|v| !v.groups.is_empty()) {
        tracing::warn!(
            "mesh '{}' has vertex weights but no armature modifier, exporting unskinned",
            object
        );
    }

    let mut triangles = Vec::new();

    for (poly_index, poly) in mesh.polygons.iter().enumerate() {
        let corner_count = poly.vertices.len();
        if corner_count != 3 && corner_count != 4 {
            return Err(ExportError::InvalidGeometry {
                object: object.to_string(),
                reason: format!(
                    "polygon {} has {} corners (expected 3 or 4)",
                    poly_index, corner_count
                ),
            });
        }
        if let Some(uvs) = &poly.uvs {
            if uvs.len() != corner_count {
                return Err(ExportError::InvalidGeometry {
                    object: object.to_string(),
                    reason: format!(
                        "polygon {} has {} corners but {} UVs",
                        poly_index,
                        corner_count,
                        uvs.len()
                    ),
                });
            }
        }

        let mut corners = Vec::with_capacity(corner_count);
        for (corner, &vi) in poly.vertices.iter().enumerate() {
            let vertex = mesh.vertices.get(vi as usize).ok_or_else(|| {
                ExportError::InvalidGeometry {
                    object: object.to_string(),
                    reason: format!(
                        "polygon {} references vertex {} out of range",
                        poly_index, vi
                    ),
                }
            })?;

            let influences = if skinned {
                resolve_influences(object, mesh, &bones, vertex)?
            } else {
                Vec::new()
            };

            corners.push(RawCorner {
                vertex_index: vi,
                position: space::vec3(vertex.position),
                normal: space::vec3(vertex.normal),
                uv: poly.uvs.as_ref().map(|uvs| uvs[corner]),
                influences,
            });
        }

        triangles.push(Triangle {
            corners: [corners[1].clone(), corners[0].clone(), corners[2].clone()],
        });
        if corner_count == 4 {
            triangles.push(Triangle {
                corners: [corners[2].clone(), corners[0].clone(), corners[3].clone()],
            });
        }
    }

    Ok(triangles)
}

/// Translate a vertex's group weights through the bone-index map
fn resolve_influences(
    object: &str,
    mesh: &MeshData,
    bones: &BoneIndexMap,
    vertex: &MeshVertex,
) -> Result<Vec<(u32, f32)>, ExportError> {
    let mut influences = Vec::with_capacity(vertex.groups.len());
    for gw in &vertex.groups {
        let name = mesh.vertex_groups.get(gw.group as usize).ok_or_else(|| {
            ExportError::InvalidGeometry {
                object: object.to_string(),
                reason: format!("vertex group index {} out of range", gw.group),
            }
        })?;
        let bone = bones
            .get(name)
            .ok_or_else(|| ExportError::MissingBoneIndex {
                object: object.to_string(),
                group: name.clone(),
            })?;
        influences.push((*bone, gw.weight));
    }
    Ok(influences)
}
