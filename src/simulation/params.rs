//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the setup-time constants:
//! - gravitational constant `g` and distance scale `au`,
//! - the simulated-seconds-per-real-second multiplier `time_scale`,
//! - orbit-history capacity and the distance floor used to clamp the singularity
//!
//! `validate` is checked wherever parameters enter the engine.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("gravitational constant must be finite and non-negative, got {0}")]
    InvalidG(f64),

    #[error("AU scale must be positive and finite, got {0}")]
    InvalidAu(f64),

    #[error("time scale must be positive and finite, got {0}")]
    InvalidTimeScale(f64),

    #[error("distance floor must be positive and finite, got {0}")]
    InvalidDistFloor(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64,             // gravitational constant
    pub au: f64,            // simulation units per AU
    pub time_scale: f64,    // simulated seconds per real second
    pub history_cap: usize, // samples kept per orbit trail
    pub dist_floor: f64,    // minimum distance used in the force law
}

impl Parameters {
    pub const DEFAULT_G: f64 = 6.67e-11;
    pub const DEFAULT_AU: f64 = 100.0;
    pub const DEFAULT_TIME_SCALE: f64 = 100_000.0;
    pub const DEFAULT_HISTORY_CAP: usize = 200;
    pub const DEFAULT_DIST_FLOOR: f64 = 1.0;

    /// Reject values that would let the force law produce inf/NaN.
    /// `g = 0` is allowed and switches gravity off.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.g.is_finite() && self.g >= 0.0) {
            return Err(ParameterError::InvalidG(self.g));
        }
        if !(self.au.is_finite() && self.au > 0.0) {
            return Err(ParameterError::InvalidAu(self.au));
        }
        if !(self.time_scale.is_finite() && self.time_scale > 0.0) {
            return Err(ParameterError::InvalidTimeScale(self.time_scale));
        }
        if !(self.dist_floor.is_finite() && self.dist_floor > 0.0) {
            return Err(ParameterError::InvalidDistFloor(self.dist_floor));
        }
        Ok(())
    }

    /// Speed of a circular orbit at `distance` around a source of mass `source_mass`
    pub fn circular_speed(&self, source_mass: f64, distance: f64) -> f64 {
        (self.g * source_mass / distance).sqrt()
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: Self::DEFAULT_G,
            au: Self::DEFAULT_AU,
            time_scale: Self::DEFAULT_TIME_SCALE,
            history_cap: Self::DEFAULT_HISTORY_CAP,
            dist_floor: Self::DEFAULT_DIST_FLOOR,
        }
    }
}
