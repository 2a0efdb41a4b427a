pub mod states;
pub mod history;
pub mod params;
pub mod registry;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod scenario;
