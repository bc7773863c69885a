//! Octant aggregate statistics
//!
//! An octant is a cube split into 8 sub-cubes. Its cost statistics are built
//! from a format's per-kind costs. All three values are octant totals in bits.

use crate::combinatorics::{median, CombinationsWithReplacement};
use crate::constants::octree::{CUBE_KIND_COUNT, SUB_CUBES_PER_OCTANT};
use crate::cube::CubeKind;
use crate::format::FormatModel;

/// Every distinct octant composition that needs octant encoding.
///
/// All-empty and all-solid octants are dropped: an all-empty cell is not an
/// octant at all, an all-solid one is stored as a single solid cube.
pub fn octant_compositions() -> impl Iterator<Item = Vec<CubeKind>> {
    CombinationsWithReplacement::new(CUBE_KIND_COUNT, SUB_CUBES_PER_OCTANT)
        .map(|tuple| tuple.into_iter().map(CubeKind::from_index).collect::<Vec<_>>())
        .filter(|kinds| !is_homogeneous(kinds, CubeKind::Empty) && !is_homogeneous(kinds, CubeKind::Solid))
}

fn is_homogeneous(kinds: &[CubeKind], kind: CubeKind) -> bool {
    kinds.iter().all(|&k| k == kind)
}

/// Best case: every sub-cube is the cheapest kind
pub fn oc_min<F: FormatModel + ?Sized>(format: &F) -> f64 {
    let cheapest = CubeKind::ALL
        .iter()
        .map(|&kind| format.min(kind))
        .fold(f64::INFINITY, f64::min);
    SUB_CUBES_PER_OCTANT as f64 * cheapest
}

/// Worst case: every sub-cube is the costliest kind
pub fn oc_max<F: FormatModel + ?Sized>(format: &F) -> f64 {
    let costliest = CubeKind::ALL
        .iter()
        .map(|&kind| format.max(kind))
        .fold(f64::NEG_INFINITY, f64::max);
    SUB_CUBES_PER_OCTANT as f64 * costliest
}

/// Median over all compositions of the per-sub-cube average cost
pub fn per_cube_median<F: FormatModel + ?Sized>(format: &F) -> f64 {
    let averages = octant_compositions().map(|kinds| {
        let sum: f64 = kinds.iter().map(|&kind| format.avg(kind)).sum();
        sum / SUB_CUBES_PER_OCTANT as f64
    });
    median(averages).unwrap_or_default()
}

/// Typical octant total, the per-cube median scaled to 8 sub-cubes
pub fn oc_avg<F: FormatModel + ?Sized>(format: &F) -> f64 {
    SUB_CUBES_PER_OCTANT as f64 * per_cube_median(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{FormatV1, FormatV2, LegacyFormat, StorageFormat};

    /// Every kind costs the same two bits
    struct ConstantFormat;

    impl FormatModel for ConstantFormat {
        fn name(&self) -> &str {
            "Constant"
        }
        fn min(&self, _kind: CubeKind) -> f64 {
            2.0
        }
        fn avg(&self, _kind: CubeKind) -> f64 {
            2.0
        }
        fn max(&self, _kind: CubeKind) -> f64 {
            2.0
        }
    }

    #[test]
    fn test_composition_count() {
        let compositions: Vec<Vec<CubeKind>> = octant_compositions().collect();
        assert_eq!(compositions.len(), 43);
        assert!(compositions.iter().all(|kinds| kinds.len() == 8));
        assert!(!compositions.contains(&vec![CubeKind::Empty; 8]));
        assert!(!compositions.contains(&vec![CubeKind::Solid; 8]));
        assert!(compositions.contains(&vec![CubeKind::Normal; 8]));
    }

    #[test]
    fn test_constant_format() {
        assert_eq!(oc_min(&ConstantFormat), 16.0);
        assert_eq!(oc_avg(&ConstantFormat), 16.0);
        assert_eq!(oc_max(&ConstantFormat), 16.0);
    }

    #[test]
    fn test_min_max_formulas() {
        for format in StorageFormat::all() {
            let cheapest = CubeKind::ALL.iter().map(|&k| format.min(k)).fold(f64::MAX, f64::min);
            let costliest = CubeKind::ALL.iter().map(|&k| format.max(k)).fold(0.0, f64::max);
            assert_eq!(oc_min(&format), 8.0 * cheapest);
            assert_eq!(oc_max(&format), 8.0 * costliest);
        }
    }

    #[test]
    fn test_avg_within_bounds() {
        for format in StorageFormat::all() {
            let avg = oc_avg(&format);
            assert!(oc_min(&format) <= avg && avg <= oc_max(&format),
                "{}: octant avg {} out of bounds", format.name(), avg);
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(per_cube_median(&LegacyFormat), 26.0);
        assert_eq!(oc_avg(&LegacyFormat), 208.0);
        assert_eq!(oc_max(&LegacyFormat), 784.0);

        assert_eq!(per_cube_median(&FormatV1::new()), 17.375);
        assert_eq!(oc_avg(&FormatV1::new()), 139.0);

        assert_eq!(per_cube_median(&FormatV2::new()), 16.25);
        assert_eq!(oc_avg(&FormatV2::new()), 130.0);
        assert_eq!(oc_max(&FormatV2::new()), 688.0);
    }
}
