//! Mesh object emitter

use std::io::Write;

use glam::Quat;

use crate::error::ExportError;
use crate::mesh::{convert_mesh, pack_influences};
use crate::scene::{MeshData, Object, Rotation};
use crate::space;

/// Write one mesh object block: transform, vertex table, face list.
///
/// Per unique vertex the order is `vn`, optional `vt`, optional
/// `bi`+`bw`, then `v`; face lines carry 0-based indices into that table.
pub fn write_mesh_object<W: Write>(
    w: &mut W,
    object: &Object,
    mesh: &MeshData,
) -> Result<(), ExportError> {
    // Resolve everything fallible before the first line goes out.
    let rotation = space::quat(host_rotation(object)?);
    let indexed = convert_mesh(&object.name, mesh)?;

    writeln!(w, "o {}", object.name)?;
    let loc = space::vec3(object.location);
    writeln!(w, "loc {:.6} {:.6} {:.6}", loc.x, loc.y, loc.z)?;
    writeln!(
        w,
        "rot {:.6} {:.6} {:.6} {:.6}",
        rotation.w, rotation.x, rotation.y, rotation.z
    )?;
    let scale = space::vec3(object.scale);
    writeln!(w, "scale {:.6} {:.6} {:.6}", scale.x, scale.y, scale.z)?;

    for vertex in &indexed.vertices {
        let n = vertex.normal;
        writeln!(w, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
        if let Some(uv) = vertex.uv {
            writeln!(w, "vt {:.6} {:.6}", uv.x, uv.y)?;
        }
        if let Some(packed) = pack_influences(&vertex.influences) {
            let [i0, i1, i2, i3] = packed.indices;
            let [w0, w1, w2, w3] = packed.weights;
            writeln!(w, "bi {} {} {} {}", i0, i1, i2, i3)?;
            writeln!(w, "bw {:.6} {:.6} {:.6} {:.6}", w0, w1, w2, w3)?;
        }
        let p = vertex.position;
        writeln!(w, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }

    for triangle in &indexed.triangles {
        let [i0, i1, i2] = triangle.indices;
        writeln!(w, "f {} {} {}", i0, i1, i2)?;
    }

    tracing::info!(
        "exported mesh '{}': {} vertices, {} faces",
        object.name,
        indexed.vertices.len(),
        indexed.triangles.len()
    );
    Ok(())
}

/// Resolve the host rotation to a quaternion, still in host space
fn host_rotation(object: &Object) -> Result<Quat, ExportError> {
    match &object.rotation {
        // Host Euler-XYZ applies X first in the fixed frame (qz*qy*qx);
        // intrinsic ZYX composes the same rotation.
        Rotation::EulerXyz(e) => Ok(Quat::from_euler(glam::EulerRot::ZYX, e.z, e.y, e.x)),
        Rotation::Quaternion(q) => Ok(*q),
        Rotation::Other(mode) => Err(ExportError::UnsupportedRotationMode {
            object: object.name.clone(),
            mode: mode.clone(),
        }),
    }
}
