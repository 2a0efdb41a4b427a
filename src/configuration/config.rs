//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and scales
//! - [`RunConfig`]        – frame clock and trace settings for the driver
//! - [`AnchorConfig`]     – the fixed central mass
//! - [`OrbiterConfig`]    – initial state for each orbiting body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every `parameters` and `run` key is optional:
//!
//! ```yaml
//! parameters:
//!   G: 6.67e-11             # gravitational constant
//!   au: 100.0               # simulation units per AU
//!   time_scale: 100000.0    # simulated seconds per real second
//!   history_cap: 200        # trail samples per orbiter
//!   dist_floor: 1.0         # minimum distance in the force law
//!
//! run:
//!   frames: 600
//!   dt: 0.016666666666666666
//!   trace_every: 60         # 0 disables trace output
//!
//! anchor:
//!   position: [540.0, 540.0]
//!   mass: 1.0e6
//!   radius: 20.0
//!   color: yellow
//!
//! orbiters:
//!   - name: Earth
//!     distance_au: 1.0      # circular orbit, placed on +x of the anchor
//!     mass: 1.0
//!     radius: 5.0
//!     color: blue
//!   - name: comet
//!     position: [700.0, 540.0]
//!     velocity: [0.0, 0.0005]
//!     mass: 0.001
//!     radius: 2.0
//!     color: [255, 255, 255, 255]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::params::{ParameterError, Parameters};
use crate::simulation::registry::RegistryError;
use crate::simulation::states::Color;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    #[error("unknown color name `{0}`")]
    UnknownColor(String),

    #[error("orbiter `{0}` needs either `distance_au` or `position`")]
    MissingPlacement(String),

    #[error("invalid body `{name}`: {source}")]
    InvalidBody {
        name: String,
        #[source]
        source: RegistryError,
    },
}

/// Physical constants and scales, all defaulting to the classic setup
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,             // gravitational constant
    pub au: f64,            // simulation units per AU
    pub time_scale: f64,    // simulated seconds per real second
    pub history_cap: usize, // trail samples per orbiter
    pub dist_floor: f64,    // minimum distance used in the force law
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            g: p.g,
            au: p.au,
            time_scale: p.time_scale,
            history_cap: p.history_cap,
            dist_floor: p.dist_floor,
        }
    }
}

impl From<&ParametersConfig> for Parameters {
    fn from(cfg: &ParametersConfig) -> Self {
        Parameters {
            g: cfg.g,
            au: cfg.au,
            time_scale: cfg.time_scale,
            history_cap: cfg.history_cap,
            dist_floor: cfg.dist_floor,
        }
    }
}

/// Frame clock for the headless driver
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub frames: u64,      // number of frames to step
    pub dt: f64,          // real seconds per frame
    pub trace_every: u64, // draw to the trace every n frames, 0 = never
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            dt: 1.0 / 60.0,
            trace_every: 60,
        }
    }
}

/// Either a palette name (`yellow`) or explicit `[r, g, b, a]`
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorConfig {
    Named(String),
    Rgba([u8; 4]),
}

impl ColorConfig {
    pub fn resolve(&self) -> Result<Color, ConfigError> {
        match self {
            ColorConfig::Named(name) => Color::from_name(name).ok_or_else(|| ConfigError::UnknownColor(name.clone())),
            ColorConfig::Rgba([r, g, b, a]) => Ok(Color::new(*r, *g, *b, *a)),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig::Named("white".to_string())
    }
}

/// The fixed central mass. It has no velocity field: it never moves.
#[derive(Deserialize, Debug, Clone)]
pub struct AnchorConfig {
    pub position: [f64; 2], // position in simulation units
    pub mass: f64,          // source mass of the gravity field
    pub radius: f64,        // drawing radius
    #[serde(default)]
    pub color: ColorConfig,
}

/// Configuration for a single orbiter’s initial state
#[derive(Deserialize, Debug, Clone)]
pub struct OrbiterConfig {
    #[serde(default)]
    pub name: Option<String>,    // for log messages only
    #[serde(default)]
    pub distance_au: Option<f64>, // circular orbit at this distance from the anchor
    #[serde(default)]
    pub position: Option<[f64; 2]>, // explicit initial position, used when `distance_au` is absent
    #[serde(default)]
    pub velocity: Option<[f64; 2]>, // explicit initial velocity, zero if absent
    pub mass: f64,               // only affects drawing, never the trajectory
    pub radius: f64,             // drawing radius
    #[serde(default)]
    pub color: ColorConfig,
}

impl OrbiterConfig {
    pub fn label(&self, index: usize) -> String {
        self.name.clone().unwrap_or_else(|| format!("orbiter #{}", index + 1))
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // physical constants
    #[serde(default)]
    pub run: RunConfig,               // driver frame clock
    pub anchor: AnchorConfig,         // gravity source
    #[serde(default)]
    pub orbiters: Vec<OrbiterConfig>, // bodies that move
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
