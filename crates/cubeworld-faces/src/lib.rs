//! Cube world face geometry: the six faces, their orientation frames, and
//! nearest-face detection from a world position.

mod cube_face;
mod detector;
mod orientation;

pub use cube_face::CubeFace;
pub use detector::{QuadrantDetector, detect_face, try_detect_face};
pub use orientation::{FaceOrientation, GRAVITY_MAGNITUDE};
