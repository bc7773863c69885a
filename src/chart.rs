//! Radar chart assembly
//!
//! `ChartBuilder` turns a set of formats into a `RadarChart`: one filled
//! polar trace per format. Drawing and file output belong to a
//! `ChartRenderer`.

use std::path::Path;

use serde::Serialize;

use crate::config::RadarConfig;
use crate::constants::chart::RADIAL_MAX;
use crate::error::{io_error, RadarError, RadarResult};
use crate::format::FormatModel;
use crate::profile::{normalize_all, CostProfile, CATEGORIES};

/// Trace fill mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    None,
    /// Close the trace and fill its area
    ToSelf,
}

/// One polar series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarTrace {
    pub name: String,
    /// Normalized radii, `0..=100`
    pub r: Vec<f64>,
    /// Raw bit costs, shown on hover
    pub text: Vec<f64>,
    /// Category labels
    pub theta: Vec<String>,
    pub fill: Fill,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub title: String,
    pub radial_visible: bool,
    pub radial_range: (f64, f64),
    pub show_legend: bool,
    pub traces: Vec<RadarTrace>,
}

impl RadarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            radial_visible: true,
            radial_range: (0.0, RADIAL_MAX),
            show_legend: true,
            traces: Vec::new(),
        }
    }

    pub fn add_trace(&mut self, trace: RadarTrace) -> &mut Self {
        self.traces.push(trace);
        self
    }

    /// Category labels of the first trace
    pub fn categories(&self) -> &[String] {
        self.traces.first().map(|t| t.theta.as_slice()).unwrap_or(&[])
    }
}

/// Charting collaborator: turns a chart into a document
pub trait ChartRenderer {
    fn render(&self, chart: &RadarChart) -> RadarResult<String>;
}

/// Render `chart` and write it to `path`
pub fn write_chart<R: ChartRenderer + ?Sized>(
    chart: &RadarChart,
    path: impl AsRef<Path>,
    renderer: &R,
) -> RadarResult<()> {
    if chart.traces.is_empty() {
        return Err(RadarError::EmptyChart);
    }

    let path = path.as_ref();
    let document = renderer.render(chart)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    std::fs::write(path, document).map_err(|e| io_error(path, e))?;

    log::info!("Wrote {} ({} traces)", path.display(), chart.traces.len());
    Ok(())
}

/// Builds the comparison chart for a list of formats
pub struct ChartBuilder<'a, F: FormatModel> {
    formats: &'a [F],
}

impl<'a, F: FormatModel> ChartBuilder<'a, F> {
    pub fn new(formats: &'a [F]) -> Self {
        Self { formats }
    }

    /// Raw profiles, in format order
    pub fn profiles(&self) -> Vec<CostProfile> {
        self.formats.iter().map(CostProfile::compute).collect()
    }

    pub fn build(&self, config: &RadarConfig) -> RadarChart {
        let profiles = self.profiles();
        for profile in &profiles {
            profile.log_summary();
        }

        let theta: Vec<String> = CATEGORIES.iter().map(|c| c.to_string()).collect();
        let mut chart = RadarChart::new(config.title.clone());
        for normalized in normalize_all(&profiles) {
            chart.add_trace(RadarTrace {
                name: normalized.name,
                r: normalized.radii.to_vec(),
                text: normalized.raw.to_vec(),
                theta: theta.clone(),
                fill: Fill::ToSelf,
            });
        }
        chart
    }
}
