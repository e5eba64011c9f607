//! Armature bind-pose and current-pose emitters

use std::io::Write;

use glam::{Mat3, Mat4, Vec3, Vec4};

use crate::error::ExportError;
use crate::scene::ArmatureData;
use crate::space;

/// Write the bind-pose bone hierarchy block for one armature.
///
/// Bones come out in the host's native order, one block per bone with a
/// trailing blank line.
pub fn write_bones<W: Write>(w: &mut W, armature: &ArmatureData) -> Result<(), ExportError> {
    for bone in &armature.bones {
        writeln!(w, "bone {}", bone.name)?;
        if let Some(parent) = &bone.parent {
            writeln!(w, "  parent       {}", parent)?;
        }
        writeln!(w, "  head         {}", vec3_str(space::vec3(bone.head)))?;
        writeln!(w, "  tail         {}", vec3_str(space::vec3(bone.tail)))?;
        writeln!(w, "  head_local   {}", vec3_str(space::vec3(bone.head_local)))?;
        writeln!(w, "  tail_local   {}", vec3_str(space::vec3(bone.tail_local)))?;
        writeln!(w, "  matrix       {}", mat3_str(space::mat3(bone.matrix)))?;
        writeln!(w, "  matrix_local {}", mat4_str(space::mat4(bone.matrix_local)))?;
        writeln!(w)?;
    }
    Ok(())
}

/// Write the current-pose block for one armature
pub fn write_pose<W: Write>(w: &mut W, armature: &ArmatureData) -> Result<(), ExportError> {
    for bone in &armature.pose_bones {
        writeln!(w, "bone {}", bone.name)?;
        writeln!(w, "  matrix       {}", mat4_str(space::mat4(bone.matrix)))?;
        writeln!(w, "  matrix_basis {}", mat4_str(space::mat4(bone.matrix_basis)))?;
        writeln!(w)?;
    }
    Ok(())
}

fn vec3_str(v: Vec3) -> String {
    format!("{:6.2} {:6.2} {:6.2}", v.x, v.y, v.z)
}

fn vec4_str(v: Vec4) -> String {
    format!("{:6.2} {:6.2} {:6.2} {:6.2}", v.x, v.y, v.z, v.w)
}

fn mat3_str(m: Mat3) -> String {
    format!(
        "{} {} {}",
        vec3_str(m.x_axis),
        vec3_str(m.y_axis),
        vec3_str(m.z_axis)
    )
}

fn mat4_str(m: Mat4) -> String {
    format!(
        "{} {} {} {}",
        vec4_str(m.x_axis),
        vec4_str(m.y_axis),
        vec4_str(m.z_axis),
        vec4_str(m.w_axis)
    )
}
