//! Host-space to export-space conversion
//!
//! The host scene graph is Z-up right-handed; the export format is Y-up
//! right-handed. The conversion is the fixed permutation
//! `(x, y, z) -> (x, z, -y)`, applied identically to positions, normals,
//! scale and the vector part of quaternions. Matrices are converted
//! column-wise; the w row passes through unchanged.

use glam::{Mat3, Mat4, Quat, Vec3, Vec4};

/// Map a host-space vector into export space
#[inline]
pub fn vec3(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, -v.y)
}

/// Inverse of [`vec3`]
#[inline]
pub fn vec3_inverse(v: Vec3) -> Vec3 {
    Vec3::new(v.x, -v.z, v.y)
}

/// Map a host-space quaternion into export space
#[inline]
pub fn quat(q: Quat) -> Quat {
    Quat::from_xyzw(q.x, q.z, -q.y, q.w)
}

/// Column-wise conversion of a 3x3 matrix
#[inline]
pub fn mat3(m: Mat3) -> Mat3 {
    Mat3::from_cols(vec3(m.x_axis), vec3(m.y_axis), vec3(m.z_axis))
}

/// Column-wise conversion of a 4x4 matrix
#[inline]
pub fn mat4(m: Mat4) -> Mat4 {
    Mat4::from_cols(
        vec4(m.x_axis),
        vec4(m.y_axis),
        vec4(m.z_axis),
        vec4(m.w_axis),
    )
}

#[inline]
fn vec4(v: Vec4) -> Vec4 {
    Vec4::new(v.x, v.z, -v.y, v.w)
}
