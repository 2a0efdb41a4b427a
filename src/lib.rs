pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, Color, NVec2};
pub use simulation::history::OrbitHistory;
pub use simulation::registry::{Registry, RegistryError};
pub use simulation::params::{Parameters, ParameterError};
pub use simulation::forces::{Acceleration, AccelSet, CentralGravity};
pub use simulation::integrator::{step, euler_step};
pub use simulation::engine::{create_simulation, Simulation};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, RunConfig, AnchorConfig, OrbiterConfig, ColorConfig, ConfigError};

pub use visualization::render::{draw, Renderer, TraceRenderer};

pub use benchmark::benchmark::bench_step;
