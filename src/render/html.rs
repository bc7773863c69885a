//! Self-contained HTML radar chart
//!
//! Draws the chart as inline SVG: grid rings, one spoke per category, one
//! filled polygon per trace with hover tooltips, and a legend. The chart
//! data is embedded as JSON next to the drawing.

use std::f64::consts::PI;

use crate::chart::{ChartRenderer, Fill, RadarChart, RadarTrace};
use crate::error::RadarResult;

/// Trace colors, cycled
const PALETTE: [&str; 6] = ["#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3"];

/// Grid rings, in axis units
const GRID_STEPS: usize = 4;

#[derive(Debug, Clone)]
pub struct HtmlRadarRenderer {
    pub width: u32,
    pub height: u32,
    /// Pixel radius of the outer ring
    pub radius: f64,
}

impl Default for HtmlRadarRenderer {
    fn default() -> Self {
        Self {
            width: 900,
            height: 640,
            radius: 220.0,
        }
    }
}

impl HtmlRadarRenderer {
    fn center(&self) -> (f64, f64) {
        // Leave room on the right for the legend
        ((self.width as f64 - 200.0) / 2.0 + 40.0, self.height as f64 / 2.0 + 20.0)
    }

    /// Angle of category `index`, clockwise from the top
    fn angle(index: usize, count: usize) -> f64 {
        -PI / 2.0 + 2.0 * PI * index as f64 / count.max(1) as f64
    }

    /// Pixel position of a radial value on category `index`
    fn point(&self, chart: &RadarChart, value: f64, index: usize, count: usize) -> (f64, f64) {
        let (lo, hi) = chart.radial_range;
        let span = if hi > lo { hi - lo } else { 1.0 };
        let scaled = ((value - lo) / span).clamp(0.0, 1.0) * self.radius;
        let angle = Self::angle(index, count);
        let (cx, cy) = self.center();
        (cx + scaled * angle.cos(), cy + scaled * angle.sin())
    }

    fn grid(&self, chart: &RadarChart) -> String {
        let categories = chart.categories();
        let count = categories.len();
        let (cx, cy) = self.center();
        let mut svg = String::new();

        if chart.radial_visible {
            let (lo, hi) = chart.radial_range;
            for step in 1..=GRID_STEPS {
                let value = lo + (hi - lo) * step as f64 / GRID_STEPS as f64;
                let ring: Vec<String> = (0..count)
                    .map(|i| {
                        let (x, y) = self.point(chart, value, i, count);
                        format!("{:.1},{:.1}", x, y)
                    })
                    .collect();
                svg.push_str(&format!(
                    r##"<polygon points="{}" fill="none" stroke="#d0d4dc" stroke-width="1"/>"##,
                    ring.join(" ")
                ));
                svg.push_str(&format!(
                    r##"<text x="{:.1}" y="{:.1}" font-size="10" fill="#8a8f99">{}</text>"##,
                    cx + 3.0,
                    cy - self.radius * step as f64 / GRID_STEPS as f64 - 2.0,
                    value
                ));
            }
        }

        for (i, label) in categories.iter().enumerate() {
            let (x, y) = self.point(chart, chart.radial_range.1, i, count);
            svg.push_str(&format!(
                r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#d0d4dc" stroke-width="1"/>"##,
                cx, cy, x, y
            ));

            let angle = Self::angle(i, count);
            let (lx, ly) = (x + 14.0 * angle.cos(), y + 14.0 * angle.sin());
            let anchor = if angle.cos().abs() < 0.1 {
                "middle"
            } else if angle.cos() > 0.0 {
                "start"
            } else {
                "end"
            };
            svg.push_str(&format!(
                r##"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="{}" dominant-baseline="middle" fill="#2a3f5f">{}</text>"##,
                lx, ly, anchor, escape(label)
            ));
        }

        svg
    }

    fn trace(&self, chart: &RadarChart, trace: &RadarTrace, color: &str) -> String {
        let count = trace.r.len();
        let points: Vec<(f64, f64)> = trace
            .r
            .iter()
            .enumerate()
            .map(|(i, &r)| self.point(chart, r, i, count))
            .collect();
        let outline: Vec<String> = points.iter().map(|(x, y)| format!("{:.1},{:.1}", x, y)).collect();

        let fill_opacity = match trace.fill {
            Fill::ToSelf => 0.35,
            Fill::None => 0.0,
        };

        let mut svg = format!(r##"<g class="trace" data-name="{}">"##, escape(&trace.name));
        svg.push_str(&format!(
            r##"<polygon points="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="2"/>"##,
            outline.join(" "), color, fill_opacity, color
        ));

        for (i, (x, y)) in points.iter().enumerate() {
            let label = trace.theta.get(i).map(String::as_str).unwrap_or("");
            let raw = trace.text.get(i).copied().unwrap_or_default();
            svg.push_str(&format!(
                r##"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{}"><title>{}: {} bits ({:.1}%) - {}</title></circle>"##,
                x, y, color, escape(label), raw, trace.r[i], escape(&trace.name)
            ));
        }
        svg.push_str("</g>");
        svg
    }

    fn legend(&self, chart: &RadarChart) -> String {
        let x = self.width as f64 - 190.0;
        let mut svg = String::new();
        for (i, trace) in chart.traces.iter().enumerate() {
            let y = 80.0 + 24.0 * i as f64;
            svg.push_str(&format!(
                r##"<rect x="{:.1}" y="{:.1}" width="14" height="14" fill="{}" fill-opacity="0.6"/>"##,
                x, y, PALETTE[i % PALETTE.len()]
            ));
            svg.push_str(&format!(
                r##"<text x="{:.1}" y="{:.1}" font-size="13" fill="#2a3f5f">{}</text>"##,
                x + 22.0, y + 12.0, escape(&trace.name)
            ));
        }
        svg
    }
}

impl ChartRenderer for HtmlRadarRenderer {
    fn render(&self, chart: &RadarChart) -> RadarResult<String> {
        let data = serde_json::to_string(chart)?.replace("</", "<\\/");

        let mut body = self.grid(chart);
        for (i, trace) in chart.traces.iter().enumerate() {
            body.push_str(&self.trace(chart, trace, PALETTE[i % PALETTE.len()]));
        }
        if chart.show_legend {
            body.push_str(&self.legend(chart));
        }

        Ok(format!(
            r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: "Open Sans", verdana, arial, sans-serif; background: #ffffff; }}
.trace:hover polygon {{ fill-opacity: 0.6; }}
</style>
</head>
<body>
<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">
<text x="20" y="34" font-size="18" fill="#2a3f5f">{title}</text>
{body}
</svg>
<script type="application/json" id="radar-data">{data}</script>
</body>
</html>
"##,
            title = escape(&chart.title),
            width = self.width,
            height = self.height,
            body = body,
            data = data,
        ))
    }
}

/// Escape text for HTML/SVG content and attributes
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartBuilder;
    use crate::config::RadarConfig;
    use crate::format::StorageFormat;

    fn render_default() -> String {
        let formats = StorageFormat::all();
        let chart = ChartBuilder::new(&formats).build(&RadarConfig::default());
        HtmlRadarRenderer::default().render(&chart).unwrap()
    }

    #[test]
    fn test_document_structure() {
        let html = render_default();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Relative structure size comparison in bits</title>"));
        assert_eq!(html.matches(r#"<g class="trace""#).count(), 3);
        assert!(html.contains("Octant (avg)"));
        assert!(html.contains("Inexor II"));
    }

    #[test]
    fn test_tooltips_carry_raw_values() {
        let html = render_default();
        assert!(html.contains("Normal (avg): 63.5 bits"));
        assert!(html.contains("Octant (avg): 208 bits"));
    }

    #[test]
    fn test_embedded_data() {
        let html = render_default();
        let start = html.find(r#"id="radar-data">"#).unwrap() + r#"id="radar-data">"#.len();
        let end = html[start..].find("</script>").unwrap() + start;
        let data: serde_json::Value = serde_json::from_str(&html[start..end]).unwrap();

        assert_eq!(data["traces"].as_array().unwrap().len(), 3);
        assert_eq!(data["traces"][0]["fill"], "toself");
        assert_eq!(data["radial_range"][1], 100.0);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
