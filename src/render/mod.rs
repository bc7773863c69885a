//! Chart renderers

pub mod html;

pub use html::HtmlRadarRenderer;
