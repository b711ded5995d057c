use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::SliderConfig;
use crate::data::aggregate::{pie_slices, PieSlice};
use crate::data::filter::scatter_indices;
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Control values plus the chart data derived from them, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub dataset: Arc<LaunchDataset>,

    /// "All Sites" followed by every distinct site.
    pub site_options: Vec<String>,

    /// Current site selector value.
    pub site: SiteSelection,

    /// Current payload range selector value.
    pub payload_range: PayloadRange,

    /// Bounds and step of the range control.
    pub slider: SliderConfig,

    /// Pie chart slices for `site` (cached).
    pub pie: Vec<PieSlice>,

    /// Indices of launches passing the scatter filter (cached).
    pub scatter: Vec<usize>,

    /// Booster version category colours for the scatter chart.
    pub color_map: ColorMap,
}

impl AppState {
    pub fn new(dataset: Arc<LaunchDataset>, slider: SliderConfig) -> Self {
        let payload_range = initial_range(&dataset, &slider);
        let mut state = Self {
            site_options: dataset.site_options(),
            color_map: ColorMap::new(&dataset.booster_categories),
            dataset,
            site: SiteSelection::All,
            payload_range,
            slider,
            pie: Vec::new(),
            scatter: Vec::new(),
        };
        state.recompute_pie();
        state.recompute_scatter();
        state
    }

    /// Site selector changed: both charts depend on it.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        log::debug!("Site selection → {site}");
        self.site = site;
        self.recompute_pie();
        self.recompute_scatter();
    }

    /// Range selector changed: only the scatter chart depends on it.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.payload_range {
            return;
        }
        log::debug!("Payload range → [{}, {}]", range.low, range.high);
        self.payload_range = range;
        self.recompute_scatter();
    }

    /// Restore the range to the dataset's min/max payload.
    pub fn reset_payload_range(&mut self) {
        let range = initial_range(&self.dataset, &self.slider);
        self.set_payload_range(range);
    }

    fn recompute_pie(&mut self) {
        self.pie = pie_slices(&self.dataset, &self.site);
    }

    fn recompute_scatter(&mut self) {
        self.scatter = scatter_indices(&self.dataset, &self.site, self.payload_range);
    }
}

/// Dataset min/max payload, or the full slider span for an empty dataset.
fn initial_range(dataset: &LaunchDataset, slider: &SliderConfig) -> PayloadRange {
    dataset
        .payload_bounds
        .unwrap_or_else(|| PayloadRange::new(slider.min, slider.max))
}
