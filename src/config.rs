//! Render settings. Everything has a default, so a RON file only needs the
//! fields it wants to change:
//!
//! ```rust
//! use aoer_fractal_rs::config::RenderConfig;
//! use aoer_fractal_rs::render::DegeneratePolicy;
//!
//! let config = RenderConfig::from_ron_str("(width: 1024.0, degenerate: Reject)").unwrap();
//! assert_eq!(config.width, 1024.0);
//! assert_eq!(config.height, 600.0);
//! assert_eq!(config.degenerate, DegeneratePolicy::Reject);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::render::{check_margin, DegeneratePolicy, FitOptions, Viewport, DEFAULT_MARGIN};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub degenerate: DegeneratePolicy,
    /// Degrees added or removed per frame while an angle key is held.
    pub angle_nudge: f64,
    /// Redraw every this many frames.
    pub redraw_interval: u64,
    pub background: String,
    pub stroke: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 800.0,
            height: 600.0,
            margin: DEFAULT_MARGIN,
            // Straight-line stages (Cantor dust, most stage 0s) are normal here.
            degenerate: DegeneratePolicy::FitLongestAxis,
            angle_nudge: 0.3,
            redraw_interval: 3,
            background: "black".to_string(),
            stroke: "white".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_ron_str(source: &str) -> Result<RenderConfig> {
        let config: RenderConfig = ron::from_str(source).context("Invalid render config")?;
        check_margin(config.margin).context("Invalid render config")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<RenderConfig> {
        let mut source = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut source))
            .with_context(|| format!("Couldn't read render config {}", path.display()))?;
        Self::from_ron_str(&source)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn fit_options(&self, orientation: f64) -> FitOptions {
        FitOptions {
            orientation,
            margin: self.margin,
            degenerate: self.degenerate,
        }
    }
}
