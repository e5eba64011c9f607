//! glTF/GLB front-end
//!
//! Populates the host [`Scene`] model from a glTF file. Mesh primitives
//! are de-indexed into 3-corner polygons so the normalization pipeline
//! sees the same per-face corner soup a live host would hand it; skin
//! joints become the armature modifier's bone list plus per-vertex group
//! weights, and each skin additionally yields an armature object whose
//! bind data derives from the inverse bind matrices.
//!
//! Coordinates are passed through untouched: the pipeline treats them as
//! host-space (Z-up) values.

use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::{Mat3, Mat4, Quat, Vec2, Vec3};
use hashbrown::HashMap;

use crate::scene::{
    ArmatureData, Bone, GroupWeight, MeshData, MeshVertex, Object, ObjectData, Polygon, PoseBone,
    Rotation, Scene,
};

/// Load a glTF/GLB file into a scene
pub fn load_scene(path: &Path) -> Result<Scene> {
    let (document, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF: {:?}", path))?;

    let mut scene = Scene::default();

    for node in document.nodes() {
        let Some(mesh) = node.mesh() else { continue };
        let name = node
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("mesh_{}", node.index()));
        let (translation, rotation, scale) = node.transform().decomposed();

        let data = mesh_data(&mesh, node.skin().as_ref(), &buffers)
            .with_context(|| format!("Failed to read mesh '{}'", name))?;

        scene.objects.push(Object {
            name,
            location: Vec3::from(translation),
            rotation: Rotation::Quaternion(Quat::from_array(rotation)),
            scale: Vec3::from(scale),
            data: ObjectData::Mesh(data),
        });
    }

    for skin in document.skins() {
        let name = skin
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("armature_{}", skin.index()));
        let data = armature_data(&skin, &document, &buffers)
            .with_context(|| format!("Failed to read skin '{}'", name))?;

        scene.objects.push(Object {
            name,
            location: Vec3::ZERO,
            rotation: Rotation::Quaternion(Quat::IDENTITY),
            scale: Vec3::ONE,
            data: ObjectData::Armature(data),
        });
    }

    if scene.objects.is_empty() {
        bail!("No meshes or skins found in {:?}", path);
    }

    Ok(scene)
}

fn mesh_data(
    mesh: &gltf::Mesh,
    skin: Option<&gltf::Skin>,
    buffers: &[gltf::buffer::Data],
) -> Result<MeshData> {
    let mut data = MeshData::default();

    if let Some(skin) = skin {
        let names: Vec<String> = skin
            .joints()
            .enumerate()
            .map(|(slot, joint)| joint_name(&joint, slot))
            .collect();
        data.vertex_groups = names.clone();
        data.armature_bones = Some(names);
    }

    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions: Vec<[f32; 3]> = reader
            .read_positions()
            .context("Primitive has no positions")?
            .collect();
        let normals: Vec<[f32; 3]> = reader
            .read_normals()
            .map(|iter| iter.collect())
            .unwrap_or_else(|| vec![[0.0, 0.0, 1.0]; positions.len()]);
        let uvs: Option<Vec<[f32; 2]>> = reader
            .read_tex_coords(0)
            .map(|iter| iter.into_f32().collect());
        let joints: Option<Vec<[u16; 4]>> = reader
            .read_joints(0)
            .map(|iter| iter.into_u16().collect());
        let weights: Option<Vec<[f32; 4]>> = reader
            .read_weights(0)
            .map(|iter| iter.into_f32().collect());

        let skinning = match (&joints, &weights) {
            (Some(j), Some(w)) if j.len() == positions.len() && w.len() == positions.len() => {
                Some((j, w))
            }
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!("Primitive has partial skinning data, ignoring skinning");
                None
            }
            _ => None,
        };

        let base = data.vertices.len() as u32;
        for i in 0..positions.len() {
            let groups: Vec<GroupWeight> = match skinning {
                Some((joints, weights)) => joints[i]
                    .iter()
                    .zip(weights[i].iter())
                    .filter(|(_, &w)| w > 0.0)
                    .map(|(&joint, &weight)| GroupWeight {
                        group: joint as u32,
                        weight,
                    })
                    .collect(),
                None => Vec::new(),
            };
            data.vertices.push(MeshVertex {
                position: Vec3::from(positions[i]),
                normal: Vec3::from(normals[i]),
                groups,
            });
        }

        let indices: Vec<u32> = reader
            .read_indices()
            .map(|iter| iter.into_u32().collect())
            .unwrap_or_else(|| (0..positions.len() as u32).collect());

        data.polygons
            .extend(triangle_polygons(base, &indices, uvs.as_deref()));
    }

    Ok(data)
}

/// Chunk a primitive's index buffer into 3-corner polygons.
///
/// A buffer length that is not a multiple of 3 drops the trailing
/// indices, with a warning.
fn triangle_polygons(base: u32, indices: &[u32], uvs: Option<&[[f32; 2]]>) -> Vec<Polygon> {
    let remainder = indices.len() % 3;
    if remainder != 0 {
        tracing::warn!(
            "Index buffer length {} is not a multiple of 3, dropping {} trailing indices",
            indices.len(),
            remainder
        );
    }

    indices
        .chunks_exact(3)
        .map(|tri| Polygon {
            vertices: vec![base + tri[0], base + tri[1], base + tri[2]],
            uvs: uvs.map(|uvs| tri.iter().map(|&i| Vec2::from(uvs[i as usize])).collect()),
        })
        .collect()
}

fn armature_data(
    skin: &gltf::Skin,
    document: &gltf::Document,
    buffers: &[gltf::buffer::Data],
) -> Result<ArmatureData> {
    let joints: Vec<gltf::Node> = skin.joints().collect();

    // Parent lookup across the whole node graph; only parents that are
    // themselves joints of this skin count as bone parents.
    let mut parents: HashMap<usize, usize> = HashMap::new();
    for node in document.nodes() {
        for child in node.children() {
            parents.insert(child.index(), node.index());
        }
    }
    let joint_slots: HashMap<usize, usize> = joints
        .iter()
        .enumerate()
        .map(|(slot, joint)| (joint.index(), slot))
        .collect();

    let reader = skin.reader(|buffer| Some(&buffers[buffer.index()]));
    let inverse_binds: Vec<Mat4> = match reader.read_inverse_bind_matrices() {
        Some(iter) => iter.map(|m| Mat4::from_cols_array_2d(&m)).collect(),
        None => vec![Mat4::IDENTITY; joints.len()],
    };
    if inverse_binds.len() != joints.len() {
        bail!(
            "Skin has {} inverse bind matrices for {} joints",
            inverse_binds.len(),
            joints.len()
        );
    }

    // Global node transforms supply the pose matrices.
    let mut globals: HashMap<usize, Mat4> = HashMap::new();
    for gltf_scene in document.scenes() {
        for root in gltf_scene.nodes() {
            walk_globals(&root, Mat4::IDENTITY, &mut globals);
        }
    }

    let mut armature = ArmatureData::default();
    for (slot, joint) in joints.iter().enumerate() {
        let name = joint_name(joint, slot);
        let parent_slot = parents
            .get(&joint.index())
            .and_then(|p| joint_slots.get(p))
            .copied();
        let parent = parent_slot.map(|p| joint_name(&joints[p], p));

        // Armature-space bind transform is the inverse of the inverse
        // bind matrix; bone-local bind is relative to the parent's bind.
        let matrix_local = inverse_binds[slot].inverse();
        let local_bind = parent_slot
            .map(|p| inverse_binds[p] * matrix_local)
            .unwrap_or(matrix_local);

        // glTF has no head/tail; head is the bind translation, tail one
        // unit along the bone's Y axis.
        let head_local = matrix_local.w_axis.truncate();
        let tail_local = head_local + matrix_local.transform_vector3(Vec3::Y);
        let head = local_bind.w_axis.truncate();
        let tail = head + local_bind.transform_vector3(Vec3::Y);

        armature.bones.push(Bone {
            name: name.clone(),
            parent,
            head,
            tail,
            head_local,
            tail_local,
            matrix: Mat3::from_mat4(local_bind),
            matrix_local,
        });

        let matrix = globals
            .get(&joint.index())
            .copied()
            .unwrap_or(Mat4::IDENTITY);
        armature.pose_bones.push(PoseBone {
            name,
            matrix,
            matrix_basis: Mat4::from_cols_array_2d(&joint.transform().matrix()),
        });
    }

    Ok(armature)
}

fn walk_globals(node: &gltf::Node, parent: Mat4, globals: &mut HashMap<usize, Mat4>) {
    let global = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    globals.insert(node.index(), global);
    for child in node.children() {
        walk_globals(&child, global, globals);
    }
}

fn joint_name(node: &gltf::Node, slot: usize) -> String {
    node.name()
        .map(str::to_string)
        .unwrap_or_else(|| format!("bone_{}", slot))
}
