//! Runtime simulation bundle
//!
//! `Simulation` owns the registry, the parameters and the active force set,
//! and keeps track of how much simulated time has passed. The force set is
//! always derived from the current parameters.

use std::io;

use log::{debug, trace};

use super::forces::{AccelSet, CentralGravity};
use super::integrator::euler_step;
use super::params::{ParameterError, Parameters};
use super::registry::{Registry, RegistryError};
use super::states::{Body, BodyId, Color, NVec2};
use crate::visualization::render::{draw, Renderer};

pub struct Simulation {
    parameters: Parameters,
    registry: Registry,
    forces: AccelSet,
    t: f64,     // simulated seconds elapsed
    frame: u64, // frames stepped so far
}

/// Create an empty simulation driven by anchor gravity.
pub fn create_simulation(parameters: Parameters) -> Result<Simulation, ParameterError> {
    Simulation::new(parameters)
}

fn gravity_from(parameters: &Parameters) -> AccelSet {
    AccelSet::new().with(CentralGravity {
        g: parameters.g,
        dist_floor: parameters.dist_floor,
    })
}

impl Simulation {
    pub fn new(parameters: Parameters) -> Result<Self, ParameterError> {
        parameters.validate()?;
        let registry = Registry::new(parameters.history_cap);
        let forces = gravity_from(&parameters);
        Ok(Self {
            parameters,
            registry,
            forces,
            t: 0.0,
            frame: 0,
        })
    }

    /// Swap in new parameters; the next step uses them.
    ///
    /// `history_cap` is fixed when the simulation is created and is not changed here.
    pub fn set_parameters(&mut self, parameters: Parameters) -> Result<(), ParameterError> {
        parameters.validate()?;
        self.forces = gravity_from(&parameters);
        self.parameters = Parameters {
            history_cap: self.registry.history_cap(),
            ..parameters
        };
        Ok(())
    }

    pub fn add_body(&mut self, position: NVec2, velocity: NVec2, mass: f64, radius: f64, color: Color) -> Result<BodyId, RegistryError> {
        self.registry.add_body(position, velocity, mass, radius, color)
    }

    /// Step one frame of `dt` real seconds at the configured time scale.
    pub fn step(&mut self, dt: f64) {
        self.step_scaled(dt, self.parameters.time_scale);
    }

    /// Step one frame of `dt` real seconds at an explicit time scale.
    pub fn step_scaled(&mut self, dt: f64, time_scale: f64) {
        let h = dt * time_scale;
        euler_step(&mut self.registry, &self.forces, h);
        self.t += h;
        self.frame += 1;
    }

    /// Fixed-`dt` frame loop. Every `draw_every` frames (0 = never) the
    /// registry is handed to `renderer`.
    pub fn run<R: Renderer + ?Sized>(&mut self, frames: u64, dt: f64, draw_every: u64, renderer: &mut R) -> io::Result<()> {
        debug!("running {} frames at dt = {} s", frames, dt);
        for _ in 0..frames {
            self.step(dt);
            if draw_every > 0 && self.frame % draw_every == 0 {
                trace!("drawing frame {}", self.frame);
                draw(&self.registry, self.frame, &mut *renderer)?;
            }
        }
        Ok(())
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn forces(&self) -> &AccelSet {
        &self.forces
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.registry.bodies()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Simulated seconds elapsed
    pub fn elapsed(&self) -> f64 {
        self.t
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
