//! Circle and arc drawing.
//!
//! Arcs are approximated by a regular polygon inscribed in the implied
//! circle: turn half a step, alternate chord moves and full-step turns, then
//! turn back half a step so the arc stays tangent-symmetric about its chord.

use super::{ensure_finite, Navigator};
use crate::error::{KurmaError, Result};

impl Navigator {
    /// Number of polygon steps used for an arc when none is given.
    ///
    /// Grows with the radius and the swept extent, capped at 60 per full
    /// circle: `1 + floor(min(11 + |radius|/6, 59) · |extent|/fullcircle)`.
    pub fn steps_for(&self, radius: f64, extent: f64) -> usize {
        let frac = (extent / self.fullcircle).abs();
        1 + (f64::min(11.0 + radius.abs() / 6.0, 59.0) * frac) as usize
    }

    /// Draw an arc of the circle whose center sits `radius` units to the
    /// turtle's left.
    ///
    /// `extent` (default: a full circle) is the swept angle; one endpoint of
    /// a partial arc is the current position. A positive radius sweeps
    /// counterclockwise, a negative one clockwise. `steps` overrides the
    /// automatic polygon subdivision; small values draw regular polygons.
    /// The heading ends up changed by `extent`.
    pub fn circle(&mut self, radius: f64, extent: Option<f64>, steps: Option<usize>) -> Result<()> {
        ensure_finite(radius, "radius")?;
        if let Some(e) = extent {
            ensure_finite(e, "extent")?;
        }
        let extent = extent.unwrap_or(self.fullcircle);
        let steps = match steps {
            Some(0) => {
                return Err(KurmaError::InvalidArgument(
                    "steps must be at least 1".to_string(),
                ))
            }
            Some(n) => n,
            None => self.steps_for(radius, extent),
        };

        let step_turn = extent / steps as f64;
        let half_turn = 0.5 * step_turn;
        let chord = 2.0 * radius * (half_turn * self.degrees_per_unit).to_radians().sin();
        let (chord, step_turn, half_turn) = if radius < 0.0 {
            (-chord, -step_turn, -half_turn)
        } else {
            (chord, step_turn, half_turn)
        };

        self.rotate_by(half_turn);
        for _ in 0..steps {
            self.advance(chord);
            self.rotate_by(step_turn);
        }
        self.rotate_by(-half_turn);
        Ok(())
    }
}
