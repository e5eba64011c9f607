//! Host scene data model
//!
//! The in-memory interface between the host scene graph and the export
//! pipeline. A front-end (`crate::import`, or a caller assembling the
//! structs directly) fills these in host space; the pipeline converts to
//! export space on ingest.

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

/// A complete scene to export
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<Object>,
}

/// One scene object with its transform and payload
#[derive(Debug, Clone)]
pub struct Object {
    pub name: String,
    pub location: Vec3,
    pub rotation: Rotation,
    pub scale: Vec3,
    pub data: ObjectData,
}

/// Host rotation representation
#[derive(Debug, Clone)]
pub enum Rotation {
    /// Euler angles in radians, XYZ order
    EulerXyz(Vec3),
    Quaternion(Quat),
    /// Any other host mode; fatal at export time
    Other(String),
}

/// Object payload
#[derive(Debug, Clone)]
pub enum ObjectData {
    Mesh(MeshData),
    Armature(ArmatureData),
    /// Lamps, cameras, empties - skipped by the exporter
    Other,
}

/// Mesh geometry plus optional skinning inputs
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub polygons: Vec<Polygon>,
    /// Vertex-group names, indexed by [`GroupWeight::group`]
    pub vertex_groups: Vec<String>,
    /// Bone names of the single armature modifier, in armature order.
    /// `None` when the mesh is unskinned.
    pub armature_bones: Option<Vec<String>>,
}

/// Per-vertex host data
#[derive(Debug, Clone)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
    /// Vertex-group memberships, in host order
    pub groups: Vec<GroupWeight>,
}

/// One vertex-group membership
#[derive(Debug, Clone, Copy)]
pub struct GroupWeight {
    /// Index into [`MeshData::vertex_groups`]
    pub group: u32,
    pub weight: f32,
}

/// A 3- or 4-corner face referencing vertices by index
#[derive(Debug, Clone)]
pub struct Polygon {
    pub vertices: Vec<u32>,
    /// Per-corner UVs, parallel to `vertices`; present only when the mesh
    /// has an active UV layer
    pub uvs: Option<Vec<Vec2>>,
}

impl Polygon {
    pub fn tri(a: u32, b: u32, c: u32) -> Self {
        Self {
            vertices: vec![a, b, c],
            uvs: None,
        }
    }

    pub fn quad(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self {
            vertices: vec![a, b, c, d],
            uvs: None,
        }
    }
}

/// Skeleton bind pose plus current pose
#[derive(Debug, Clone, Default)]
pub struct ArmatureData {
    /// Bind-pose bones, in the host's native bone order
    pub bones: Vec<Bone>,
    /// Current-pose bones, in the host's native bone order
    pub pose_bones: Vec<PoseBone>,
}

/// One bind-pose bone
#[derive(Debug, Clone)]
pub struct Bone {
    pub name: String,
    pub parent: Option<String>,
    /// Head/tail relative to the parent bone
    pub head: Vec3,
    pub tail: Vec3,
    /// Head/tail in armature space
    pub head_local: Vec3,
    pub tail_local: Vec3,
    /// Bone-space orientation
    pub matrix: Mat3,
    /// Armature-space bind matrix
    pub matrix_local: Mat4,
}

/// One current-pose bone
#[derive(Debug, Clone)]
pub struct PoseBone {
    pub name: String,
    /// Armature-space pose matrix
    pub matrix: Mat4,
    /// Pose basis relative to the bind pose
    pub matrix_basis: Mat4,
}
