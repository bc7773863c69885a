//! Inexor I cube format
//!
//! Every corner stores a fixed 3 bit header, followed by a variable number
//! of 3 bit indentation steps (1 to 24).

use super::{tag_cost, FormatModel};
use crate::combinatorics::median;
use crate::constants::{bits, octree, v1};
use crate::cube::CubeKind;

#[derive(Debug, Clone, PartialEq)]
pub struct FormatV1 {
    normal_avg: f64,
}

impl FormatV1 {
    pub fn new() -> Self {
        let normal_avg = median((1..=v1::MAX_STEPS).map(Self::calc)).unwrap_or_default();
        log::debug!("Inexor I normal cube median: {} bits", normal_avg);
        Self { normal_avg }
    }

    /// Bits of a normal cube with `steps` indentation steps
    pub fn calc(steps: u32) -> f64 {
        let fixed = octree::CORNERS_PER_CUBE as u32 * v1::BITS_PER_CORNER;
        (bits::CUBE_TAG + fixed + steps * v1::BITS_PER_STEP) as f64
    }
}

impl Default for FormatV1 {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatModel for FormatV1 {
    fn name(&self) -> &str {
        "Inexor I"
    }

    fn min(&self, kind: CubeKind) -> f64 {
        match kind {
            CubeKind::Empty | CubeKind::Solid => tag_cost(),
            CubeKind::Normal => Self::calc(1),
        }
    }

    fn avg(&self, kind: CubeKind) -> f64 {
        match kind {
            CubeKind::Empty | CubeKind::Solid => tag_cost(),
            CubeKind::Normal => self.normal_avg,
        }
    }

    fn max(&self, kind: CubeKind) -> f64 {
        match kind {
            CubeKind::Empty | CubeKind::Solid => tag_cost(),
            CubeKind::Normal => Self::calc(v1::MAX_STEPS),
        }
    }
}
