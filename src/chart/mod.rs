//! SVG chart generation.
//!
//! All charts are built as SVG strings by hand, the same way the
//! profiler this grew out of renders its graphs: no plotting library,
//! just string assembly with a small config struct per chart.

pub mod line;
pub mod pie;
pub mod summary;
pub mod table;

pub use line::generate_line_chart;
pub use pie::generate_pie_charts;
pub use summary::generate_text_summary;
pub use table::generate_table_image;

use crate::utils::config::DEFAULT_CHART_WIDTH;

/// Chart configuration shared by the line chart and table image
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: DEFAULT_CHART_WIDTH,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}
