//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - the `Simulation` (parameters, registry with anchor + orbiters, forces)
//! - the driver's frame clock (`RunConfig`)
//!
//! `Scenario::solar_system` builds the classic eight-planet setup without a file.

use log::{info, warn};

use crate::configuration::config::{ConfigError, RunConfig, ScenarioConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Color, NVec2};

/// Side length of the square field the classic setup is laid out on
pub const FIELD_SIZE: f64 = 1080.0;

pub const SUN_MASS: f64 = 1.0e6;
pub const SUN_RADIUS: f64 = 20.0;

/// One preset planet: distance in AU, mass relative to Earth, drawing radius
pub struct PlanetPreset {
    pub name: &'static str,
    pub distance_au: f64,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
}

pub const PLANETS: [PlanetPreset; 8] = [
    PlanetPreset { name: "Mercury", distance_au: 0.39, mass: 0.055, radius: 3.0,  color: Color::GRAY },
    PlanetPreset { name: "Venus",   distance_au: 0.72, mass: 0.815, radius: 4.0,  color: Color::ORANGE },
    PlanetPreset { name: "Earth",   distance_au: 1.00, mass: 1.0,   radius: 5.0,  color: Color::BLUE },
    PlanetPreset { name: "Mars",    distance_au: 1.52, mass: 0.107, radius: 4.0,  color: Color::RED },
    PlanetPreset { name: "Jupiter", distance_au: 3.20, mass: 317.8, radius: 10.0, color: Color::BROWN },
    PlanetPreset { name: "Saturn",  distance_au: 4.58, mass: 95.2,  radius: 8.0,  color: Color::GOLD },
    PlanetPreset { name: "Uranus",  distance_au: 5.18, mass: 14.5,  radius: 7.0,  color: Color::SKYBLUE },
    PlanetPreset { name: "Neptune", distance_au: 7.07, mass: 17.1,  radius: 7.0,  color: Color::DARKBLUE },
];

/// Initial position and velocity of a circular orbit `distance` units to the
/// +x side of the anchor, moving along +y
pub fn circular_orbit(params: &Parameters, anchor: NVec2, anchor_mass: f64, distance: f64) -> (NVec2, NVec2) {
    let position = anchor + NVec2::new(distance, 0.0);
    let velocity = NVec2::new(0.0, params.circular_speed(anchor_mass, distance));
    (position, velocity)
}

pub struct Scenario {
    pub simulation: Simulation,
    pub run: RunConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let parameters = Parameters::from(&cfg.parameters);
        let mut simulation = Simulation::new(parameters.clone())?;

        // Anchor first: it is the gravity source
        let a_cfg = &cfg.anchor;
        let anchor_pos = NVec2::new(a_cfg.position[0], a_cfg.position[1]);
        simulation
            .add_body(anchor_pos, NVec2::zeros(), a_cfg.mass, a_cfg.radius, a_cfg.color.resolve()?)
            .map_err(|source| ConfigError::InvalidBody { name: "anchor".to_string(), source })?;

        // Orbiters: preset distance wins over explicit position
        for (i, o_cfg) in cfg.orbiters.iter().enumerate() {
            let name = o_cfg.label(i);

            let (position, velocity) = match (o_cfg.distance_au, o_cfg.position) {
                (Some(d_au), _) => {
                    if o_cfg.position.is_some() || o_cfg.velocity.is_some() {
                        warn!("{}: `distance_au` given, explicit position/velocity ignored", name);
                    }
                    circular_orbit(&parameters, anchor_pos, a_cfg.mass, d_au * parameters.au)
                }
                (None, Some([x, y])) => {
                    let v = o_cfg.velocity.unwrap_or([0.0, 0.0]);
                    (NVec2::new(x, y), NVec2::new(v[0], v[1]))
                }
                (None, None) => return Err(ConfigError::MissingPlacement(name)),
            };

            simulation
                .add_body(position, velocity, o_cfg.mass, o_cfg.radius, o_cfg.color.resolve()?)
                .map_err(|source| ConfigError::InvalidBody { name: name.clone(), source })?;
            info!("{} placed at ({:.2}, {:.2})", name, position.x, position.y);
        }

        info!("scenario built with {} bodies", simulation.registry().len());

        Ok(Self {
            simulation,
            run: cfg.run,
        })
    }

    /// Sun in the middle of the field and Mercury through Neptune on circular
    /// orbits along the +x axis.
    pub fn solar_system(parameters: Parameters) -> Result<Self, ConfigError> {
        let mut simulation = Simulation::new(parameters.clone())?;

        let center = NVec2::new(FIELD_SIZE / 2.0, FIELD_SIZE / 2.0);
        simulation
            .add_body(center, NVec2::zeros(), SUN_MASS, SUN_RADIUS, Color::YELLOW)
            .map_err(|source| ConfigError::InvalidBody { name: "Sun".to_string(), source })?;

        for planet in &PLANETS {
            let (position, velocity) = circular_orbit(&parameters, center, SUN_MASS, planet.distance_au * parameters.au);
            simulation
                .add_body(position, velocity, planet.mass, planet.radius, planet.color)
                .map_err(|source| ConfigError::InvalidBody { name: planet.name.to_string(), source })?;
        }

        info!("solar system preset built with {} bodies", simulation.registry().len());

        Ok(Self {
            simulation,
            run: RunConfig::default(),
        })
    }
}
