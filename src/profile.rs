//! Cost profiles and their normalization
//!
//! A profile is the 12 statistics of one format: min/avg/max for each cube
//! kind, then min/avg/max for a whole octant.

use crate::constants::chart::RADIAL_MAX;
use crate::cube::CubeKind;
use crate::format::FormatModel;
use crate::octant::{oc_avg, oc_max, oc_min};

/// Number of statistics in a profile
pub const CATEGORY_COUNT: usize = 12;

/// Chart category labels, in profile order
pub const CATEGORIES: [&str; CATEGORY_COUNT] = [
    "Empty (min)", "Empty (avg)", "Empty (max)",
    "Solid (min)", "Solid (avg)", "Solid (max)",
    "Normal (min)", "Normal (avg)", "Normal (max)",
    "Octant (min)", "Octant (avg)", "Octant (max)",
];

/// Raw bit costs of one format
#[derive(Debug, Clone, PartialEq)]
pub struct CostProfile {
    pub name: String,
    pub values: [f64; CATEGORY_COUNT],
}

impl CostProfile {
    pub fn compute<F: FormatModel + ?Sized>(format: &F) -> Self {
        let mut values = [0.0; CATEGORY_COUNT];
        for (group, kind) in CubeKind::ALL.iter().enumerate() {
            values[group * 3..group * 3 + 3].copy_from_slice(&format.costs(*kind));
        }
        values[9] = oc_min(format);
        values[10] = oc_avg(format);
        values[11] = oc_max(format);

        Self {
            name: format.name().to_string(),
            values,
        }
    }

    pub fn log_summary(&self) {
        log::info!("{} cost profile:", self.name);
        for (label, value) in CATEGORIES.iter().zip(self.values.iter()) {
            log::info!("  {:<14} {:>8.3} bits", label, value);
        }
    }
}

/// Per-category maximum across all profiles
pub fn column_maxima(profiles: &[CostProfile]) -> [f64; CATEGORY_COUNT] {
    let mut maxima = [0.0; CATEGORY_COUNT];
    for profile in profiles {
        for (max, value) in maxima.iter_mut().zip(profile.values.iter()) {
            if *value > *max {
                *max = *value;
            }
        }
    }
    maxima
}

/// Scale `value` to `0..=100` against `max`. A zero column stays at 0.
pub fn normalize_value(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        RADIAL_MAX * value / max
    } else {
        0.0
    }
}

/// Profile rescaled for plotting
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProfile {
    pub name: String,
    pub radii: [f64; CATEGORY_COUNT],
    pub raw: [f64; CATEGORY_COUNT],
}

impl NormalizedProfile {
    pub fn from_profile(profile: &CostProfile, maxima: &[f64; CATEGORY_COUNT]) -> Self {
        let mut radii = [0.0; CATEGORY_COUNT];
        for (i, radius) in radii.iter_mut().enumerate() {
            *radius = normalize_value(profile.values[i], maxima[i]);
        }

        Self {
            name: profile.name.clone(),
            radii,
            raw: profile.values,
        }
    }
}

/// Normalize every profile against the column maxima of the whole set
pub fn normalize_all(profiles: &[CostProfile]) -> Vec<NormalizedProfile> {
    let maxima = column_maxima(profiles);
    log::debug!("Column maxima: {:?}", maxima);
    profiles
        .iter()
        .map(|profile| NormalizedProfile::from_profile(profile, &maxima))
        .collect()
}
