//! Chart style configuration.
//!
//! The rendering layer is an external collaborator; everything it needs
//! beyond the data itself travels in an explicit [`ChartStyle`] value
//! attached to the payload. There is no process-wide style state to set
//! at load time and no implicit default lurking in a renderer.

use serde::Serialize;

/// Line style for reference lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// Appearance settings handed to the charting layer.
///
/// The defaults mirror the styling this analysis has always been
/// presented with: a 14x10 figure, talk-sized fonts, and a four-color
/// cycle starting at deep sky blue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartStyle {
    /// Figure width in inches.
    pub figure_width: f64,
    /// Figure height in inches.
    pub figure_height: f64,
    /// Base font size in points.
    pub font_size: f64,
    /// Title font size in points.
    pub title_size: f64,
    /// Axis label font size in points.
    pub label_size: f64,
    /// Line width in points.
    pub line_width: f64,
    /// Style used for reference lines (e.g. the overall-mean line).
    pub line_style: LineStyle,
    /// Named colors assigned to series in order.
    pub color_cycle: Vec<String>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            figure_width: 14.0,
            figure_height: 10.0,
            font_size: 14.0,
            title_size: 18.0,
            label_size: 14.0,
            line_width: 2.0,
            line_style: LineStyle::Dashed,
            color_cycle: ["deepskyblue", "firebrick", "darkseagreen", "violet"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// A chart payload: pre-aggregated data plus the style to draw it with.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec<T> {
    /// Appearance settings for the renderer.
    pub style: ChartStyle,
    /// The pre-aggregated summary to visualize.
    pub data: T,
}

impl<T> ChartSpec<T> {
    /// Wraps a summary with the default style.
    #[must_use]
    pub fn new(data: T) -> Self {
        Self {
            style: ChartStyle::default(),
            data,
        }
    }

    /// Wraps a summary with an explicit style.
    #[must_use]
    pub fn with_style(style: ChartStyle, data: T) -> Self {
        Self { style, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_values() {
        let style = ChartStyle::default();
        assert_eq!(style.figure_width, 14.0);
        assert_eq!(style.figure_height, 10.0);
        assert_eq!(style.line_style, LineStyle::Dashed);
        assert_eq!(style.color_cycle.len(), 4);
        assert_eq!(style.color_cycle[0], "deepskyblue");
    }

    #[test]
    fn test_chart_spec_serializes_style_and_data() {
        let spec = ChartSpec::new(vec![1.0, 2.0]);
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"style\""));
        assert!(json.contains("\"data\""));
        assert!(json.contains("\"dashed\""));
    }
}
