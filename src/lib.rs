//! Bit cost comparison of octree cube storage formats
//!
//! Computes min/avg/max storage cost of empty, solid and normal cubes and of
//! whole octants for the Sauerbraten, Inexor I and Inexor II formats, and
//! renders the comparison as a radar chart.

pub mod chart;
pub mod combinatorics;
pub mod config;
pub mod constants;
pub mod cube;
pub mod error;
pub mod format;
pub mod octant;
pub mod profile;
pub mod render;

pub use chart::{write_chart, ChartBuilder, ChartRenderer, Fill, RadarChart, RadarTrace};
pub use combinatorics::{median, CombinationsWithReplacement};
pub use config::RadarConfig;
pub use cube::CubeKind;
pub use error::{RadarError, RadarResult};
pub use format::{FormatModel, FormatV1, FormatV2, LegacyFormat, StorageFormat};
pub use octant::{oc_avg, oc_max, oc_min};
pub use profile::{CostProfile, NormalizedProfile, CATEGORIES};
pub use render::HtmlRadarRenderer;

/// Build the three-format comparison chart and write it to `config.output`
pub fn run(config: &RadarConfig) -> RadarResult<RadarChart> {
    let formats = StorageFormat::all();
    log::info!("Comparing {} storage formats", formats.len());

    let chart = ChartBuilder::new(&formats).build(config);
    write_chart(&chart, &config.output, &HtmlRadarRenderer::default())?;
    Ok(chart)
}
