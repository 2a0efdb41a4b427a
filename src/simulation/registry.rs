//! Body registry
//!
//! Holds one designated anchor (the immovable gravity source) and an ordered
//! list of orbiters. The first body added becomes the anchor; every later one
//! is an orbiter. Bodies are never removed.

use log::{debug, warn};
use thiserror::Error;

use super::history::OrbitHistory;
use super::states::{Body, BodyId, Color, NVec2};

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("body mass must be positive and finite, got {0}")]
    NonPositiveMass(f64),

    #[error("body radius must be positive and finite, got {0}")]
    NonPositiveRadius(f64),
}

#[derive(Debug, Clone)]
pub struct Registry {
    anchor: Option<Body>,
    orbiters: Vec<Body>,
    history_cap: usize, // capacity given to every new orbit trail
}

impl Registry {
    pub fn new(history_cap: usize) -> Self {
        Self {
            anchor: None,
            orbiters: Vec::new(),
            history_cap,
        }
    }

    /// Register a body. The first call creates the anchor, later calls append
    /// orbiters in order.
    ///
    /// The anchor never moves, so a non-zero anchor velocity is stored but
    /// has no effect.
    pub fn add_body(&mut self, position: NVec2, velocity: NVec2, mass: f64, radius: f64, color: Color) -> Result<BodyId, RegistryError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(RegistryError::NonPositiveMass(mass));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RegistryError::NonPositiveRadius(radius));
        }

        let body = Body::new(position, velocity, mass, radius, color, self.history_cap);

        if self.anchor.is_none() {
            if velocity != NVec2::zeros() {
                warn!("anchor velocity {:?} is ignored; the anchor is fixed", velocity);
            }
            debug!("anchor registered at {:?} with mass {}", position, mass);
            self.anchor = Some(body);
            return Ok(BodyId::ANCHOR);
        }

        self.orbiters.push(body);
        let id = BodyId(self.orbiters.len());
        debug!("orbiter {:?} registered at {:?}", id, position);
        Ok(id)
    }

    pub fn anchor(&self) -> Option<&Body> {
        self.anchor.as_ref()
    }

    pub fn orbiters(&self) -> &[Body] {
        &self.orbiters
    }

    pub(crate) fn split_mut(&mut self) -> Option<(&Body, &mut [Body])> {
        let anchor = self.anchor.as_ref()?;
        Some((anchor, self.orbiters.as_mut_slice()))
    }

    /// All bodies, anchor first, then orbiters in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.anchor.iter().chain(self.orbiters.iter())
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        if id.is_anchor() {
            self.anchor.as_ref()
        } else {
            self.orbiters.get(id.0 - 1)
        }
    }

    pub fn history(&self, id: BodyId) -> Option<&OrbitHistory> {
        self.get(id).map(Body::orbit_history)
    }

    pub fn history_cap(&self) -> usize {
        self.history_cap
    }

    pub fn len(&self) -> usize {
        usize::from(self.anchor.is_some()) + self.orbiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchor.is_none()
    }
}
