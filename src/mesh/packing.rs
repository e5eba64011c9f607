//! Bone-influence packing

use std::cmp::Ordering;

/// Fixed influence width of the output format
pub const MAX_INFLUENCES: usize = 4;

/// Exactly four (bone index, weight) influences
///
/// Weights sum to 1 unless the vertex carried no weight at all, in which
/// case they stay zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackedInfluence {
    pub indices: [u32; MAX_INFLUENCES],
    pub weights: [f32; MAX_INFLUENCES],
}

/// Select the four strongest influences and renormalize.
///
/// The sort is stable and descending by weight, so equal weights keep
/// their host order - that is the tie-break. Fewer than four influences
/// pad with `(0, 0.0)`; more than four drop the lowest-weight tail. A
/// zero weight sum skips renormalization rather than dividing by zero.
///
/// Returns `None` for a vertex with no raw influences; the emitter writes
/// no `bi`/`bw` lines for those.
pub fn pack_influences(raw: &[(u32, f32)]) -> Option<PackedInfluence> {
    if raw.is_empty() {
        return None;
    }

    let mut sorted = raw.to_vec();
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    sorted.truncate(MAX_INFLUENCES);

    let mut indices = [0u32; MAX_INFLUENCES];
    let mut weights = [0.0f32; MAX_INFLUENCES];
    for (slot, &(bone, weight)) in sorted.iter().enumerate() {
        indices[slot] = bone;
        weights[slot] = weight;
    }

    let sum: f32 = weights.iter().sum();
    if sum > 0.0 {
        for w in &mut weights {
            *w /= sum;
        }
    }

    Some(PackedInfluence { indices, weights })
}
