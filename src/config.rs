use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::loader::DatasetSource;

/// Public launch table the dashboard reads by default.
pub const DEFAULT_DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "spacex_dash.toml";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// URL or local path of the launch CSV.
    pub dataset: String,
    pub request_timeout_ms: u64,
    pub window: WindowConfig,
    pub slider: SliderConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Bounds and granularity of the payload range control, in kg.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub mark_every: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET_URL.to_string(),
            request_timeout_ms: 30_000,
            window: WindowConfig::default(),
            slider: SliderConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 900.0,
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
            mark_every: 2_000.0,
        }
    }
}

impl DashboardConfig {
    /// Defaults overlaid with `./spacex_dash.toml` when that file exists.
    /// A broken file is reported and ignored.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        let default = Self::default();
        if !path.exists() {
            log::info!("No {} found; using defaults", path.display());
            return default;
        }
        match Self::read_overlay(path) {
            Ok(overlay) => overlay.apply(default),
            Err(e) => {
                log::warn!("Ignoring config file: {e:#}");
                default
            }
        }
    }

    fn read_overlay(path: &Path) -> Result<DashboardToml> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn source(&self) -> DatasetSource {
        DatasetSource::parse(&self.dataset)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

// ---------------------------------------------------------------------------
// TOML overlay
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct DashboardToml {
    dataset: Option<String>,
    request_timeout_ms: Option<u64>,
    window: Option<WindowToml>,
    slider: Option<SliderToml>,
}

#[derive(Debug, Default, Deserialize)]
struct WindowToml {
    width: Option<f32>,
    height: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
struct SliderToml {
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
    mark_every: Option<f64>,
}

impl DashboardToml {
    fn apply(self, mut base: DashboardConfig) -> DashboardConfig {
        if let Some(d) = self.dataset.filter(|d| !d.trim().is_empty()) {
            base.dataset = d;
        }
        if let Some(t) = self.request_timeout_ms {
            base.request_timeout_ms = t;
        }
        if let Some(w) = self.window {
            if let Some(v) = w.width {
                base.window.width = v;
            }
            if let Some(v) = w.height {
                base.window.height = v;
            }
        }
        if let Some(s) = self.slider {
            if let Some(v) = s.min {
                base.slider.min = v;
            }
            if let Some(v) = s.max {
                base.slider.max = v;
            }
            if let Some(v) = s.step.filter(|v| *v > 0.0) {
                base.slider.step = v;
            }
            if let Some(v) = s.mark_every.filter(|v| *v > 0.0) {
                base.slider.mark_every = v;
            }
        }
        base
    }
}
