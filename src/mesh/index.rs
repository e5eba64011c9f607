//! Vertex deduplication and triangle indexing

use glam::{Vec2, Vec3};
use hashbrown::HashMap;

use super::collect::Triangle;

/// One deduplicated vertex
#[derive(Debug, Clone)]
pub struct UniqueVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Option<Vec2>,
    /// Raw influences, unpacked; packing happens at emission
    pub influences: Vec<(u32, f32)>,
}

/// Triangle as indices into the unique-vertex table
#[derive(Debug, Clone, Copy)]
pub struct IndexedTriangle {
    pub indices: [u32; 3],
}

/// Unique-vertex table in first-encounter order plus remapped triangles
#[derive(Debug, Clone, Default)]
pub struct IndexedMesh {
    pub vertices: Vec<UniqueVertex>,
    pub triangles: Vec<IndexedTriangle>,
}

/// Deduplicate corners into a unique-vertex table.
///
/// Identity is the host vertex index alone, so two corners sharing a host
/// vertex always merge even when their attributes differ across faces;
/// the first corner seen for an index supplies normal, UV and influences
/// for every later reference. Table order is first-encounter order across
/// the triangle stream, not sorted by index value.
pub fn index_vertices(triangles: &[Triangle]) -> IndexedMesh {
    let mut slots: HashMap<u32, u32> = HashMap::new();
    let mut mesh = IndexedMesh::default();

    for triangle in triangles {
        let mut indices = [0u32; 3];
        for (i, corner) in triangle.corners.iter().enumerate() {
            let next = mesh.vertices.len() as u32;
            let slot = *slots.entry(corner.vertex_index).or_insert_with(|| {
                mesh.vertices.push(UniqueVertex {
                    position: corner.position,
                    normal: corner.normal,
                    uv: corner.uv,
                    influences: corner.influences.clone(),
                });
                next
            });
            indices[i] = slot;
        }
        mesh.triangles.push(IndexedTriangle { indices });
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::collect::RawCorner;

    fn corner(vertex_index: u32, normal: Vec3) -> RawCorner {
        RawCorner {
            vertex_index,
            position: Vec3::ZERO,
            normal,
            uv: None,
            influences: Vec::new(),
        }
    }

    #[test]
    fn test_dedup_is_host_identity_based() {
        // Two triangles share host vertex 5 with different normals; the
        // table keeps one entry carrying the first-seen normal.
        let first = Triangle {
            corners: [
                corner(5, Vec3::X),
                corner(1, Vec3::Z),
                corner(2, Vec3::Z),
            ],
        };
        let second = Triangle {
            corners: [
                corner(5, Vec3::Y),
                corner(2, Vec3::Z),
                corner(3, Vec3::Z),
            ],
        };
        let mesh = index_vertices(&[first, second]);

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.vertices[0].normal, Vec3::X);
        assert_eq!(mesh.triangles[0].indices, [0, 1, 2]);
        assert_eq!(mesh.triangles[1].indices, [0, 2, 3]);
    }

    #[test]
    fn test_table_is_in_first_encounter_order() {
        // Host indices arrive out of numeric order; slots follow the
        // stream, not the index values.
        let triangle = Triangle {
            corners: [
                corner(9, Vec3::Z),
                corner(0, Vec3::Z),
                corner(4, Vec3::Z),
            ],
        };
        let mesh = index_vertices(&[triangle]);
        assert_eq!(mesh.triangles[0].indices, [0, 1, 2]);
        assert_eq!(mesh.vertices.len(), 3);
    }
}
