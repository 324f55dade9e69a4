//! Nearest-face detection: which face of the cube a world position sits over.

use glam::Vec3;

use crate::CubeFace;

/// Squared length below which a direction from the cube center is treated as
/// degenerate (the player is at the center and no face is well defined).
const MIN_DIRECTION_LENGTH_SQ: f32 = 1e-12;

/// Return the face whose outward normal best aligns with `position - center`.
///
/// Equivalent to picking the dominant signed component of the direction.
/// When two normals align equally (a position exactly on a cube edge or
/// diagonal) the face that comes first in [`CubeFace::ALL`] wins. That is an
/// artifact of iteration order and callers must not rely on it.
///
/// Always returns a face, including for a zero or non-finite direction.
#[must_use]
pub fn detect_face(position: Vec3, center: Vec3) -> CubeFace {
    let direction = position - center;

    let mut best = CubeFace::ALL[0];
    let mut best_dot = f32::NEG_INFINITY;
    for face in CubeFace::ALL {
        let alignment = face.normal().dot(direction);
        if alignment > best_dot {
            best = face;
            best_dot = alignment;
        }
    }
    best
}

/// Like [`detect_face`], but returns `None` when the direction from the
/// center is zero-length or non-finite.
#[must_use]
pub fn try_detect_face(position: Vec3, center: Vec3) -> Option<CubeFace> {
    let direction = position - center;
    if !direction.is_finite() || direction.length_squared() < MIN_DIRECTION_LENGTH_SQ {
        return None;
    }
    Some(detect_face(position, center))
}

/// Face detector bound to a fixed cube center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadrantDetector {
    /// Center of the cube world.
    pub center: Vec3,
}

impl QuadrantDetector {
    /// Create a detector for a cube centered at `center`.
    pub fn new(center: Vec3) -> Self {
        Self { center }
    }

    /// See [`detect_face`].
    #[must_use]
    pub fn detect(&self, position: Vec3) -> CubeFace {
        detect_face(position, self.center)
    }

    /// See [`try_detect_face`].
    #[must_use]
    pub fn try_detect(&self, position: Vec3) -> Option<CubeFace> {
        try_detect_face(position, self.center)
    }
}

impl Default for QuadrantDetector {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
