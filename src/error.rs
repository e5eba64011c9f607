//! Error taxonomy for scene export

use thiserror::Error;

/// Errors raised while exporting a scene
///
/// All variants are fatal: the first one aborts the whole export with no
/// per-object isolation.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Object rotation is neither Euler-XYZ nor a quaternion
    #[error("object '{object}' has unsupported rotation mode '{mode}'")]
    UnsupportedRotationMode { object: String, mode: String },

    /// A vertex group references a bone missing from the armature modifier
    #[error("object '{object}' references bone '{group}' not present in its armature")]
    MissingBoneIndex { object: String, group: String },

    /// Malformed host geometry
    #[error("object '{object}': {reason}")]
    InvalidGeometry { object: String, reason: String },

    /// Output stream failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
