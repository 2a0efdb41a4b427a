//! Fixed-step time integration for the orbiters
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked first and the
//! *new* velocity drifts the position. The anchor is never touched.

use log::{trace, warn};

use super::forces::{Acceleration, CentralGravity};
use super::params::Parameters;
use super::registry::Registry;
use super::states::NVec2;

/// Advance the registry by one frame.
///
/// `dt` is the elapsed real time in seconds; the simulated time advanced is
/// `dt * time_scale`. Gravity comes from the anchor only, using `g` and
/// `dist_floor` from `params`. Parameters that fail
/// [`Parameters::validate`] leave the registry untouched.
pub fn step(reg: &mut Registry, params: &Parameters, dt: f64, time_scale: f64) {
    if let Err(e) = params.validate() {
        warn!("step skipped: {}", e);
        return;
    }
    let gravity = CentralGravity {
        g: params.g,
        dist_floor: params.dist_floor,
    };
    euler_step(reg, &gravity, dt * time_scale);
}

/// Advance every orbiter by `h` simulated seconds using the accelerations from
/// `forces`, then record each new position in its orbit history.
///
/// A registry without an anchor is left untouched. Non-positive `h` is
/// accepted and simply freezes or reverses the motion.
pub fn euler_step<A: Acceleration + ?Sized>(reg: &mut Registry, forces: &A, h: f64) {
    let Some((anchor, orbiters)) = reg.split_mut() else {
        return;
    };
    if orbiters.is_empty() {
        return;
    }

    // accelerations from the state at the start of the frame
    let mut accel = vec![NVec2::zeros(); orbiters.len()];
    forces.acceleration(anchor, orbiters, &mut accel);

    for (b, a) in orbiters.iter_mut().zip(accel.iter()) {
        // Kick: v_n+1 = v_n + h * a_n
        b.velocity += h * *a;

        // Drift with the updated velocity: x_n+1 = x_n + h * v_n+1
        b.position += h * b.velocity;

        b.orbit_history.push(b.position);
    }

    trace!("stepped {} orbiters by h = {}", orbiters.len(), h);
}
