//! Host-side state for an interactive viewer: which fractal is showing, at
//! what stage, and with what (possibly nudged) angle. The host owns the event
//! loop and hands input in through [`AppState::tick`].

use geo_types::Line;
use tracing::debug;

use crate::config::RenderConfig;
use crate::errors::LSystemError;
use crate::gallery::{FractalDefinition, GALLERY};
use crate::render::render;

pub const HELP_TEXT: [&str; 5] = [
    "Left click for next fractal",
    "Right click for previous fractal",
    "Move slider to change stage",
    "Hold ',' to decrease angle",
    "Hold '.' to increase angle",
];

/// Keys held during a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Input {
    pub decrease_angle: bool,
    pub increase_angle: bool,
}

/// Everything the host needs to paint one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub segments: Vec<Line<f64>>,
    pub stroke_weight: f64,
    pub overlay: Vec<String>,
}

pub struct AppState {
    config: RenderConfig,
    current: Option<usize>,
    angles: Vec<f64>,
    stage: u32,
}

impl AppState {
    pub fn new(config: RenderConfig) -> AppState {
        AppState {
            config,
            current: None,
            angles: GALLERY.iter().map(|def| def.default_angle).collect(),
            stage: 0,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&'static FractalDefinition> {
        self.current.map(|i| &GALLERY[i])
    }

    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn angle(&self) -> Option<f64> {
        self.current.map(|i| self.angles[i])
    }

    /// Highest stage the current fractal accepts, 0 before anything is picked.
    pub fn max_stage(&self) -> u32 {
        self.current().map(|def| def.max_stage).unwrap_or(0)
    }

    fn select(&mut self, index: usize) {
        self.current = Some(index);
        self.stage = 0;
        self.angles[index] = GALLERY[index].default_angle;
        debug!(index, name = GALLERY[index].name, "Selected fractal");
    }

    pub fn next(&mut self) {
        let index = match self.current {
            Some(i) => (i + 1) % GALLERY.len(),
            None => 0,
        };
        self.select(index);
    }

    /// Does nothing until a fractal has been picked with [`AppState::next`].
    pub fn previous(&mut self) {
        if let Some(i) = self.current {
            self.select((i + GALLERY.len() - 1) % GALLERY.len());
        }
    }

    pub fn set_stage(&mut self, stage: u32) -> Result<(), LSystemError> {
        let max = self.max_stage();
        if stage > max {
            return Err(LSystemError::InvalidStage { stage, max });
        }
        self.stage = stage;
        Ok(())
    }

    pub fn nudge_angle(&mut self, increase: bool) {
        if let Some(i) = self.current {
            let delta = self.config.angle_nudge;
            self.angles[i] += if increase { delta } else { -delta };
        }
    }

    /// Overlay text: the help screen before anything is selected, then the
    /// stage, the angle, and the 1-based fractal number.
    pub fn overlay(&self) -> Vec<String> {
        match (self.current, self.angle()) {
            (Some(i), Some(angle)) => vec![
                format!("Stage: {}", self.stage),
                format!("Angle: {:.1}", angle),
                format!("{}", i + 1),
            ],
            _ => HELP_TEXT.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Rebuilds and fits the current fractal from scratch.
    pub fn render(&self) -> Result<Option<Frame>, LSystemError> {
        let (def, angle) = match (self.current(), self.angle()) {
            (Some(def), Some(angle)) => (def, angle),
            _ => return Ok(None),
        };
        let system = def.build(self.stage, angle)?;
        debug!("{}", system);
        let rendering = render(
            &system,
            &self.config.viewport(),
            &self.config.fit_options(def.orientation(self.stage)),
        )?;
        Ok(Some(Frame {
            segments: rendering.segments,
            stroke_weight: def.stroke_weight,
            overlay: self.overlay(),
        }))
    }

    /// One host frame. Held keys nudge the angle every frame (decrease wins
    /// if both are held); a frame is produced every `redraw_interval` frames.
    pub fn tick(&mut self, frame: u64, input: Input) -> Result<Option<Frame>, LSystemError> {
        if input.decrease_angle {
            self.nudge_angle(false);
        } else if input.increase_angle {
            self.nudge_angle(true);
        }
        let interval = self.config.redraw_interval.max(1);
        if frame % interval == 0 {
            self.render()
        } else {
            Ok(None)
        }
    }
}
