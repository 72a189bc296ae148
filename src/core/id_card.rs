//! # ID Card
//!
//! Pointer-driven tilt for the virtual badge. The pointer offset from the
//! card's top centre maps onto two rotations:
//!
//! ```text
//! rotateX = map(y, [-150, 150] → [ 30, -30])   (degrees, clamped)
//! rotateZ = map(x, [-200, 200] → [-30,  30])
//! ```
//!
//! Releasing the pointer springs both offsets back to zero with a damped
//! spring (stiffness 200, damping 12, unit mass), so the card wobbles a
//! little before settling.
//!
//! Offsets are in pixels; the TUI converts terminal cells with
//! `CELL_WIDTH_PX` × `CELL_HEIGHT_PX`.

use std::time::Duration;

pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

const STIFFNESS: f64 = 200.0;
const DAMPING: f64 = 12.0;
/// Integration step cap so large frame gaps stay stable.
const MAX_STEP: f64 = 1.0 / 240.0;
const REST_DISTANCE: f64 = 0.5;
const REST_SPEED: f64 = 10.0;
/// Velocity kick applied by "Poke My ID Card", px/s.
const POKE_IMPULSE: (f64, f64) = (900.0, 450.0);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Axis {
    pos: f64,
    vel: f64,
}

impl Axis {
    fn step(&mut self, dt: f64) {
        let accel = -STIFFNESS * self.pos - DAMPING * self.vel;
        self.vel += accel * dt;
        self.pos += self.vel * dt;
    }

    fn at_rest(&self) -> bool {
        self.pos.abs() < REST_DISTANCE && self.vel.abs() < REST_SPEED
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardTilt {
    x: Axis,
    y: Axis,
    springing: bool,
    flipped: bool,
}

impl CardTilt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved over the card. Offsets are relative to the top centre.
    pub fn pointer_move(&mut self, x_px: f64, y_px: f64) {
        self.x = Axis { pos: x_px, vel: 0.0 };
        self.y = Axis { pos: y_px, vel: 0.0 };
        self.springing = false;
    }

    /// Pointer released or left the card.
    pub fn release(&mut self) {
        self.springing = true;
    }

    pub fn poke(&mut self) {
        self.x.vel += POKE_IMPULSE.0;
        self.y.vel += POKE_IMPULSE.1;
        self.springing = true;
    }

    /// Toggle to the other face. Only meaningful when the card has a back.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_animating(&self) -> bool {
        self.springing
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.x.pos, self.y.pos)
    }

    pub fn rotate_x(&self) -> f64 {
        map_clamped(self.y.pos, (-150.0, 150.0), (30.0, -30.0))
    }

    pub fn rotate_z(&self) -> f64 {
        map_clamped(self.x.pos, (-200.0, 200.0), (-30.0, 30.0))
    }

    /// Advance the spring by `dt`.
    pub fn update(&mut self, dt: Duration) {
        if !self.springing {
            return;
        }
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP);
            self.x.step(step);
            self.y.step(step);
            remaining -= step;
        }
        if self.x.at_rest() && self.y.at_rest() {
            self.x = Axis::default();
            self.y = Axis::default();
            self.springing = false;
        }
    }

    /// Where each card row lands once tilted about the top centre.
    ///
    /// Returns `(source_row, column_shift)` in on-screen order. Rows that
    /// collapse onto the same screen row (foreshortening) are dropped.
    pub fn projected_rows(&self, height: usize) -> Vec<(usize, i32)> {
        let rz = self.rotate_z().to_radians();
        let rx = self.rotate_x().to_radians();
        let vertical = rz.cos() * rx.cos().abs();
        // rows are twice as tall as columns are wide
        let aspect = CELL_HEIGHT_PX / CELL_WIDTH_PX;

        let mut rows = Vec::with_capacity(height);
        let mut last_target = None;
        for row in 0..height {
            let r = row as f64;
            let target = (r * vertical).round() as i64;
            if last_target == Some(target) {
                continue;
            }
            last_target = Some(target);
            let shift = (-r * rz.sin() * aspect).round() as i32;
            rows.push((row, shift));
        }
        rows
    }
}

fn map_clamped(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let t = ((value - from.0) / (from.1 - from.0)).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}
