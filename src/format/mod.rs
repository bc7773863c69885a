//! Storage format models
//!
//! Each model answers one question: how many bits does a cube of a given
//! kind cost in this format, in the best, typical and worst case.

pub mod legacy;
pub mod inexor_v1;
pub mod inexor_v2;

pub use legacy::LegacyFormat;
pub use inexor_v1::FormatV1;
pub use inexor_v2::FormatV2;

use crate::constants::bits;
use crate::cube::CubeKind;

/// Per-kind bit costs of a storage format
pub trait FormatModel {
    /// Display name used in the chart legend
    fn name(&self) -> &str;

    /// Best-case bits for a cube of this kind
    fn min(&self, kind: CubeKind) -> f64;

    /// Typical bits, the median over every configuration
    fn avg(&self, kind: CubeKind) -> f64;

    /// Worst-case bits
    fn max(&self, kind: CubeKind) -> f64;

    /// `[min, avg, max]` for one kind
    fn costs(&self, kind: CubeKind) -> [f64; 3] {
        [self.min(kind), self.avg(kind), self.max(kind)]
    }
}

/// Empty and solid cubes are a bare type tag in every format
pub(crate) fn tag_cost() -> f64 {
    bits::CUBE_TAG as f64
}

/// The closed set of formats being compared
#[derive(Debug, Clone, PartialEq)]
pub enum StorageFormat {
    Legacy(LegacyFormat),
    V1(FormatV1),
    V2(FormatV2),
}

impl StorageFormat {
    /// Every format, in chart order
    pub fn all() -> Vec<StorageFormat> {
        vec![
            StorageFormat::Legacy(LegacyFormat),
            StorageFormat::V1(FormatV1::new()),
            StorageFormat::V2(FormatV2::new()),
        ]
    }

    fn model(&self) -> &dyn FormatModel {
        match self {
            StorageFormat::Legacy(format) => format,
            StorageFormat::V1(format) => format,
            StorageFormat::V2(format) => format,
        }
    }
}

impl FormatModel for StorageFormat {
    fn name(&self) -> &str {
        self.model().name()
    }

    fn min(&self, kind: CubeKind) -> f64 {
        self.model().min(kind)
    }

    fn avg(&self, kind: CubeKind) -> f64 {
        self.model().avg(kind)
    }

    fn max(&self, kind: CubeKind) -> f64 {
        self.model().max(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_avg_max_ordering() {
        for format in StorageFormat::all() {
            for kind in CubeKind::ALL {
                let [min, avg, max] = format.costs(kind);
                assert!(min >= 0.0, "{} {} negative", format.name(), kind);
                assert!(min <= avg && avg <= max,
                    "{} {}: {} <= {} <= {} violated", format.name(), kind, min, avg, max);
            }
        }
    }

    #[test]
    fn test_tag_only_kinds() {
        for format in StorageFormat::all() {
            for kind in [CubeKind::Empty, CubeKind::Solid] {
                assert_eq!(format.costs(kind), [2.0, 2.0, 2.0]);
            }
        }
    }

    #[test]
    fn test_chart_order_and_names() {
        let names: Vec<String> = StorageFormat::all()
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        assert_eq!(names, vec!["Sauerbraten", "Inexor I", "Inexor II"]);
    }
}
