//! Cube kinds of the octree world format
//!
//! Every sub-cube of an octant is either empty, solid or normal. Only normal
//! cubes carry geometry data; empty and solid cubes are a bare type tag.

/// Kind of a single sub-cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CubeKind {
    /// No geometry
    Empty = 0,
    /// Fully filled
    Solid = 1,
    /// Partially filled, needs face/edge data
    Normal = 2,
}

impl CubeKind {
    /// All kinds in alphabet order
    pub const ALL: [CubeKind; 3] = [CubeKind::Empty, CubeKind::Solid, CubeKind::Normal];

    /// Map an enumeration alphabet index to its kind.
    ///
    /// Panics on an index outside `0..3`.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => CubeKind::Empty,
            1 => CubeKind::Solid,
            2 => CubeKind::Normal,
            _ => panic!("invalid cube kind index {}", index),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CubeKind::Empty => "Empty",
            CubeKind::Solid => "Solid",
            CubeKind::Normal => "Normal",
        }
    }
}

impl std::fmt::Display for CubeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
