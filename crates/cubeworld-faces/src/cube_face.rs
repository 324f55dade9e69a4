//! The six faces of the cube world.

use std::fmt;

use glam::Vec3;

/// One face of the cube world.
///
/// Each variant corresponds to a face whose outward normal points along
/// a signed world axis. The player stands on exactly one face at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +Y face
    Top = 0,
    /// −Y face
    Bottom = 1,
    /// −X face
    Left = 2,
    /// +X face
    Right = 3,
    /// +Z face
    Front = 4,
    /// −Z face
    Back = 5,
}

impl CubeFace {
    /// All six faces in table order.
    ///
    /// Face detection iterates in this order, so it decides ties.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Top,
        CubeFace::Bottom,
        CubeFace::Left,
        CubeFace::Right,
        CubeFace::Front,
        CubeFace::Back,
    ];

    /// The opposite face (e.g., `Top` → `Bottom`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::Top => CubeFace::Bottom,
            CubeFace::Bottom => CubeFace::Top,
            CubeFace::Left => CubeFace::Right,
            CubeFace::Right => CubeFace::Left,
            CubeFace::Front => CubeFace::Back,
            CubeFace::Back => CubeFace::Front,
        }
    }

    /// Outward-pointing unit normal for this face. Also the face's "up".
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            CubeFace::Top => Vec3::Y,
            CubeFace::Bottom => Vec3::NEG_Y,
            CubeFace::Left => Vec3::NEG_X,
            CubeFace::Right => Vec3::X,
            CubeFace::Front => Vec3::Z,
            CubeFace::Back => Vec3::NEG_Z,
        }
    }

    /// Lowercase display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
            CubeFace::Left => "left",
            CubeFace::Right => "right",
            CubeFace::Front => "front",
            CubeFace::Back => "back",
        }
    }

    /// Returns `true` if `other` shares an edge with this face.
    #[must_use]
    pub fn is_adjacent(self, other: CubeFace) -> bool {
        self != other && self.opposite() != other
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
