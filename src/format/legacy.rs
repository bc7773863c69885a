//! Sauerbraten cube format
//!
//! A normal cube always stores all 12 edges at one byte each, so there is no
//! spread between best and worst case.

use super::{tag_cost, FormatModel};
use crate::constants::{legacy, octree};
use crate::cube::CubeKind;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LegacyFormat;

impl LegacyFormat {
    fn normal_cost() -> f64 {
        tag_cost() + (octree::EDGES_PER_CUBE as u32 * legacy::BITS_PER_EDGE) as f64
    }

    fn cost(kind: CubeKind) -> f64 {
        match kind {
            CubeKind::Empty | CubeKind::Solid => tag_cost(),
            CubeKind::Normal => Self::normal_cost(),
        }
    }
}

impl FormatModel for LegacyFormat {
    fn name(&self) -> &str {
        "Sauerbraten"
    }

    fn min(&self, kind: CubeKind) -> f64 {
        Self::cost(kind)
    }

    fn avg(&self, kind: CubeKind) -> f64 {
        Self::cost(kind)
    }

    fn max(&self, kind: CubeKind) -> f64 {
        Self::cost(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_is_constant() {
        assert_eq!(LegacyFormat.costs(CubeKind::Normal), [98.0, 98.0, 98.0]);
    }
}
