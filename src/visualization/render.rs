//! Renderer seam
//!
//! The simulation never draws anything itself. Anything that can put a line
//! and a circle on some surface implements [`Renderer`], and [`draw`] feeds it
//! one frame of the registry. [`TraceRenderer`] is a headless implementation
//! that writes one text line per primitive.

use std::io::{self, Write};

use crate::simulation::registry::Registry;
use crate::simulation::states::{Color, NVec2};

/// Alpha used for orbit trails
pub const TRAIL_ALPHA: f32 = 0.5;

pub trait Renderer {
    fn begin_frame(&mut self, frame: u64) -> io::Result<()>;
    fn draw_line(&mut self, from: NVec2, to: NVec2, color: Color) -> io::Result<()>;
    fn draw_circle(&mut self, center: NVec2, radius: f64, color: Color) -> io::Result<()>;
    fn end_frame(&mut self) -> io::Result<()>;
}

/// Draw one frame: orbit trails first, then every body on top of them.
pub fn draw<R: Renderer + ?Sized>(reg: &Registry, frame: u64, renderer: &mut R) -> io::Result<()> {
    renderer.begin_frame(frame)?;

    // trails, only once there is at least one segment
    for body in reg.orbiters() {
        let trail = body.orbit_history();
        if trail.len() > 1 {
            let color = body.color().fade(TRAIL_ALPHA);
            for (from, to) in trail.segments() {
                renderer.draw_line(*from, *to, color)?;
            }
        }
    }

    // bodies, anchor included
    for body in reg.bodies() {
        renderer.draw_circle(body.position(), body.radius(), body.color())?;
    }

    renderer.end_frame()
}

/// Text renderer, e.g. for stdout or a log file
///
/// With `trails` disabled only the circles are written.
pub struct TraceRenderer<W: Write> {
    out: W,
    trails: bool,
}

impl<W: Write> TraceRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, trails: false }
    }

    pub fn with_trails(mut self, trails: bool) -> Self {
        self.trails = trails;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TraceRenderer<W> {
    fn begin_frame(&mut self, frame: u64) -> io::Result<()> {
        writeln!(self.out, "frame {}", frame)
    }

    fn draw_line(&mut self, from: NVec2, to: NVec2, color: Color) -> io::Result<()> {
        if !self.trails {
            return Ok(());
        }
        writeln!(
            self.out,
            "  line ({:.3}, {:.3}) -> ({:.3}, {:.3}) rgba({}, {}, {}, {})",
            from.x, from.y, to.x, to.y, color.r, color.g, color.b, color.a
        )
    }

    fn draw_circle(&mut self, center: NVec2, radius: f64, color: Color) -> io::Result<()> {
        writeln!(
            self.out,
            "  circle ({:.3}, {:.3}) r={} rgba({}, {}, {}, {})",
            center.x, center.y, radius, color.r, color.g, color.b, color.a
        )
    }

    fn end_frame(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
