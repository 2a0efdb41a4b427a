//! Acceleration contributors for the orbiters
//!
//! Defines the acceleration trait, a set that sums several terms, and the
//! single-source gravity field generated by the anchor

use super::states::{Body, NVec2};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per orbiter
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations for every orbiter
    /// - `out[i]` will be set to the sum of contributions from all terms on `orbiters[i]`
    pub fn accumulate_accels(&self, anchor: &Body, orbiters: &[Body], out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        self.acceleration(anchor, orbiters, out);
    }
}

impl Acceleration for AccelSet {
    fn acceleration(&self, anchor: &Body, orbiters: &[Body], out: &mut [NVec2]) {
        for term in &self.terms {
            term.acceleration(anchor, orbiters, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration sources acting on the orbiters.
/// Implementations add their contribution into `out[i]` for each orbiter
pub trait Acceleration {
    fn acceleration(&self, anchor: &Body, orbiters: &[Body], out: &mut [NVec2]);
}

/// Newtonian gravity of the anchor alone, with a distance floor
///
/// Orbiters do not attract each other and do not pull on the anchor.
pub struct CentralGravity {
    pub g: f64,          // gravitational constant
    pub dist_floor: f64, // smallest distance used in the force law
}

impl CentralGravity {
    /// Acceleration felt by a body at `position` from a source of `source_mass`
    /// at `source`.
    ///
    /// The orbiter's own mass cancels out of `F / m`, so it never appears here.
    /// Below `dist_floor` the magnitude is clamped to `g * M / floor^2`.
    /// Coincident positions have no direction and give zero.
    pub fn field_at(&self, source: NVec2, source_mass: f64, position: NVec2) -> NVec2 {
        // vector from the orbiter to the source
        let delta = source - position;

        let dist = delta.norm().max(self.dist_floor);

        // |a| = G * M / d^2
        let magnitude = self.g * source_mass / (dist * dist);

        match delta.try_normalize(0.0) {
            Some(dir) => magnitude * dir,
            None => NVec2::zeros(),
        }
    }
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, anchor: &Body, orbiters: &[Body], out: &mut [NVec2]) {
        let source = anchor.position();
        let source_mass = anchor.mass();

        for (a, body) in out.iter_mut().zip(orbiters) {
            *a += self.field_at(source, source_mass, body.position());
        }
    }
}
