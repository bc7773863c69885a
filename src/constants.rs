// Cube Format Radar Constants - SINGLE SOURCE OF TRUTH
//
// Every bit cost and enumeration size used by the format models lives here.
// Do NOT hard-code these numbers in the format implementations!

/// Octree layout constants
pub mod octree {
    /// Sub-cubes per octant
    pub const SUB_CUBES_PER_OCTANT: usize = 8;

    /// Edges of a single cube
    pub const EDGES_PER_CUBE: usize = 12;

    /// Corners of a single cube
    pub const CORNERS_PER_CUBE: usize = 8;

    /// Number of cube kinds (empty, solid, normal)
    pub const CUBE_KIND_COUNT: usize = 3;
}

/// Bit costs shared by every format
pub mod bits {
    /// Cube type tag (empty / solid / normal / octant)
    pub const CUBE_TAG: u32 = 2;
}

/// Sauerbraten legacy format
pub mod legacy {
    /// One byte per edge
    pub const BITS_PER_EDGE: u32 = 8;
}

/// Inexor I format
pub mod v1 {
    /// Fixed bits stored for each corner
    pub const BITS_PER_CORNER: u32 = 3;

    /// Bits per indentation step
    pub const BITS_PER_STEP: u32 = 3;

    /// Indentation steps range over 1..=MAX_STEPS
    pub const MAX_STEPS: u32 = 24;
}

/// Inexor II format
pub mod v2 {
    /// Fixed bits stored for each edge
    pub const BITS_PER_EDGE: u32 = 2;

    /// Extra bits of a one-sided styled face
    pub const BITS_ONE_SIDED: u32 = 3;

    /// Extra bits of a double-sided styled face
    pub const BITS_DOUBLE_SIDED: u32 = 5;

    /// Face styles: unstyled, one-sided, double-sided
    pub const FACE_STYLES: usize = 3;
}

/// Chart output
pub mod chart {
    /// Upper bound of the normalized radial axis
    pub const RADIAL_MAX: f64 = 100.0;

    pub const DEFAULT_TITLE: &str = "Relative structure size comparison in bits";

    pub const DEFAULT_OUTPUT: &str = "radar.html";

    /// Optional configuration file looked up in the working directory
    pub const CONFIG_FILE: &str = "radar.toml";
}
