//! Inexor II cube format
//!
//! Every edge stores a fixed 2 bit header. Each of the 12 faces is then
//! either unstyled, one-sided (3 extra bits) or double-sided (5 extra bits).

use super::{tag_cost, FormatModel};
use crate::combinatorics::{count_symbol, median, CombinationsWithReplacement};
use crate::constants::{bits, octree, v2};
use crate::cube::CubeKind;

/// Face style alphabet indices
const ONE_SIDED: usize = 1;
const DOUBLE_SIDED: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct FormatV2 {
    normal_avg: f64,
}

impl FormatV2 {
    pub fn new() -> Self {
        let normal_avg = median(Self::styled_configurations().map(|(one, double)| Self::calc(one, double)))
            .unwrap_or_default();
        log::debug!("Inexor II normal cube median: {} bits", normal_avg);
        Self { normal_avg }
    }

    /// Bits of a normal cube with the given styled face counts
    pub fn calc(one_sided: u32, double_sided: u32) -> f64 {
        let fixed = octree::EDGES_PER_CUBE as u32 * v2::BITS_PER_EDGE;
        (bits::CUBE_TAG
            + fixed
            + one_sided * v2::BITS_ONE_SIDED
            + double_sided * v2::BITS_DOUBLE_SIDED) as f64
    }

    /// `(one_sided, double_sided)` counts of every face style multiset,
    /// without the all-unstyled one.
    pub fn styled_configurations() -> impl Iterator<Item = (u32, u32)> {
        CombinationsWithReplacement::new(v2::FACE_STYLES, octree::EDGES_PER_CUBE)
            // all unstyled comes first
            .skip(1)
            .map(|styles| {
                (
                    count_symbol(&styles, ONE_SIDED) as u32,
                    count_symbol(&styles, DOUBLE_SIDED) as u32,
                )
            })
    }
}

impl Default for FormatV2 {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatModel for FormatV2 {
    fn name(&self) -> &str {
        "Inexor II"
    }

    fn min(&self, kind: CubeKind) -> f64 {
        match kind {
            CubeKind::Empty | CubeKind::Solid => tag_cost(),
            CubeKind::Normal => Self::calc(1, 0),
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
            CubeKind::Normal => Self::calc(0, octree::EDGES_PER_CUBE as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_count() {
        // 91 multisets minus all unstyled
        assert_eq!(FormatV2::styled_configurations().count(), 90);
        assert!(FormatV2::styled_configurations().all(|(one, double)| one + double >= 1));
        assert!(FormatV2::styled_configurations().all(|(one, double)| one + double <= 12));
    }

    #[test]
    fn test_normal_costs() {
        let format = FormatV2::new();
        assert_eq!(format.min(CubeKind::Normal), 29.0);
        assert_eq!(format.max(CubeKind::Normal), 86.0);
        assert_eq!(format.avg(CubeKind::Normal), 59.0);
    }
}
