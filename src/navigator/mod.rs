//! Turtle navigation: heading/angle bookkeeping and the movement protocol.
//!
//! A [`Navigator`] owns a pose (integer-valued position + unit heading
//! vector), a pen, and the [`PixelCanvas`] it draws on. Movement commands
//! update the pose; when the pen is down, the traversed segment is clamped to
//! the canvas, rasterized with Bresenham, and committed as pixel writes.
//! Position tracking itself is unbounded; only drawing clips.

mod arc;

use serde::{Deserialize, Serialize};

use crate::canvas::{BresenhamLine, PixelCanvas};
use crate::config::NavigatorConfig;
use crate::core::math::{round_places, wrap_full, wrap_signed};
use crate::core::{GridCoord, Vec2D};
use crate::error::{KurmaError, Result};

/// Angle convention: where zero points and which way angles grow.
///
/// | mode     | zero angle | positive turn | initial heading |
/// |----------|-----------|----------------|-----------------|
/// | Standard | east      | counterclockwise | (1, 0)        |
/// | World    | east      | counterclockwise | (1, 0)        |
/// | Logo     | north     | clockwise        | (0, 1)        |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    Standard,
    World,
    Logo,
}

impl AngleMode {
    /// Heading vector a freshly reset navigator faces in this mode.
    #[inline]
    pub fn start_orientation(self) -> Vec2D {
        match self {
            AngleMode::Standard | AngleMode::World => Vec2D::new(1.0, 0.0),
            AngleMode::Logo => Vec2D::new(0.0, 1.0),
        }
    }
}

/// Pen state: `Down` rasterizes while moving, `Up` moves silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenState {
    Up,
    Down,
}

/// The turtle: position, heading, pen, and the canvas it draws on.
///
/// Movement commands taking numeric input reject NaN/infinite arguments with
/// [`KurmaError::InvalidArgument`] before touching any state; queries are
/// total. Angles are measured in the configured unit (degrees by default, see
/// [`Navigator::set_angle_unit`]).
///
/// # Example
/// ```
/// use kurma_nav::{Navigator, NavigatorConfig};
///
/// let mut turtle = Navigator::new(NavigatorConfig::default())?;
/// turtle.forward(20.0)?;
/// turtle.left(120.0)?;
/// turtle.forward(20.0)?;
/// assert_eq!(turtle.position().x, turtle.position().x.round());
/// # Ok::<(), kurma_nav::KurmaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Navigator {
    position: Vec2D,
    heading: Vec2D,
    mode: AngleMode,
    fullcircle: f64,
    degrees_per_unit: f64,
    angle_offset: f64,
    angle_orient: f64,
    pen: PenState,
    pen_color: bool,
    start: Vec2D,
    canvas: PixelCanvas,
    line_lengths: Vec<f64>,
    turn_angles: Vec<f64>,
}

impl Navigator {
    /// Create a navigator from a validated configuration.
    ///
    /// Fails with [`KurmaError::Config`] on a degenerate canvas or a
    /// non-finite start point.
    pub fn new(config: NavigatorConfig) -> Result<Self> {
        config.validate()?;
        let start = Vec2D::new(config.start_x.round(), config.start_y.round());
        let mut nav = Self {
            position: start,
            heading: config.mode.start_orientation(),
            mode: config.mode,
            fullcircle: 360.0,
            degrees_per_unit: 1.0,
            angle_offset: 0.0,
            angle_orient: 1.0,
            pen: config.pen_mode,
            pen_color: config.pen_color,
            start,
            canvas: PixelCanvas::new(config.canvas_width, config.canvas_height),
            line_lengths: Vec::new(),
            turn_angles: Vec::new(),
        };
        nav.set_mode(config.mode);
        Ok(nav)
    }

    // === Mode and angle unit ===

    /// Switch the angle convention.
    ///
    /// Recomputes the reporting offset and orientation; the heading vector
    /// itself is untouched (only [`Navigator::reset`] re-orients).
    pub fn set_mode(&mut self, mode: AngleMode) {
        self.mode = mode;
        match mode {
            AngleMode::Standard | AngleMode::World => {
                self.angle_offset = 0.0;
                self.angle_orient = 1.0;
            }
            AngleMode::Logo => {
                self.angle_offset = self.fullcircle / 4.0;
                self.angle_orient = -1.0;
            }
        }
    }

    /// Set the angle measurement unit by its full-circle value.
    ///
    /// `360` measures in degrees, `2π` in radians, `400` in gradians, and so
    /// on. The reporting offset is re-derived: zero in Standard mode, a
    /// quarter circle otherwise. Rejects zero and non-finite values.
    pub fn set_angle_unit(&mut self, fullcircle: f64) -> Result<()> {
        ensure_finite(fullcircle, "fullcircle")?;
        if fullcircle == 0.0 {
            return Err(KurmaError::InvalidArgument(
                "fullcircle must be non-zero".to_string(),
            ));
        }
        self.apply_angle_unit(fullcircle);
        Ok(())
    }

    /// Measure angles in degrees (full circle = 360).
    pub fn degrees(&mut self) {
        self.apply_angle_unit(360.0);
    }

    /// Measure angles in radians (full circle = 2π).
    pub fn radians(&mut self) {
        self.apply_angle_unit(std::f64::consts::TAU);
    }

    fn apply_angle_unit(&mut self, fullcircle: f64) {
        self.fullcircle = fullcircle;
        self.degrees_per_unit = 360.0 / fullcircle;
        self.angle_offset = match self.mode {
            AngleMode::Standard => 0.0,
            _ => fullcircle / 4.0,
        };
    }

    // === Turning ===

    /// Turn counterclockwise by `angle` (in the configured unit).
    pub fn left(&mut self, angle: f64) -> Result<()> {
        ensure_finite(angle, "angle")?;
        self.rotate_by(angle);
        Ok(())
    }

    /// Turn clockwise by `angle` (in the configured unit).
    pub fn right(&mut self, angle: f64) -> Result<()> {
        ensure_finite(angle, "angle")?;
        self.rotate_by(-angle);
        Ok(())
    }

    /// Turn to an absolute heading via the shortest path.
    pub fn set_heading(&mut self, target: f64) -> Result<()> {
        ensure_finite(target, "heading")?;
        let delta = (target - self.heading()) * self.angle_orient;
        self.rotate_by(wrap_signed(delta, self.fullcircle));
        Ok(())
    }

    /// Rotate the heading vector; `angle` is pre-validated by callers.
    fn rotate_by(&mut self, angle: f64) {
        self.heading = self.heading.rotated(angle * self.degrees_per_unit);
    }

    // === Moving ===

    /// Move forward by `distance` along the current heading.
    ///
    /// The endpoint snaps to integer coordinates. Negative distances move
    /// backward without changing heading.
    pub fn forward(&mut self, distance: f64) -> Result<()> {
        self.forward_turning(distance, 0.0)
    }

    /// Move forward by `distance`, then turn by `extra_rotation`.
    ///
    /// Both arguments are appended to the move history.
    pub fn forward_turning(&mut self, distance: f64, extra_rotation: f64) -> Result<()> {
        ensure_finite(distance, "distance")?;
        ensure_finite(extra_rotation, "angle")?;
        self.line_lengths.push(distance);
        self.turn_angles.push(extra_rotation);
        self.advance(distance);
        self.rotate_by(extra_rotation);
        Ok(())
    }

    /// Move backward by `distance`; the heading does not change.
    pub fn backward(&mut self, distance: f64) -> Result<()> {
        ensure_finite(distance, "distance")?;
        self.advance(-distance);
        Ok(())
    }

    /// Move to an absolute position, drawing if the pen is down.
    ///
    /// The target snaps to integer coordinates; the heading does not change.
    pub fn goto(&mut self, x: f64, y: f64) -> Result<()> {
        ensure_finite(x, "x")?;
        ensure_finite(y, "y")?;
        self.move_to(Vec2D::new(x.round(), y.round()));
        Ok(())
    }

    /// Move to an absolute position without drawing.
    ///
    /// The pen is lifted for the move and put back down afterwards,
    /// regardless of the state the caller had set.
    pub fn move_goto(&mut self, x: f64, y: f64) -> Result<()> {
        ensure_finite(x, "x")?;
        ensure_finite(y, "y")?;
        self.pen = PenState::Up;
        self.move_to(Vec2D::new(x.round(), y.round()));
        self.pen = PenState::Down;
        Ok(())
    }

    /// Move to the canvas center without drawing; heading is kept.
    ///
    /// Like [`Navigator::move_goto`], leaves the pen down afterwards.
    pub fn home(&mut self) -> Result<()> {
        let cx = (self.canvas.width() / 2) as f64;
        let cy = (self.canvas.height() / 2) as f64;
        self.move_goto(cx, cy)
    }

    /// Set the x coordinate, keeping y; non-drawing, leaves the pen down.
    pub fn set_x(&mut self, x: f64) -> Result<()> {
        ensure_finite(x, "x")?;
        self.pen = PenState::Up;
        self.move_to(Vec2D::new(x.round(), self.position.y));
        self.pen = PenState::Down;
        Ok(())
    }

    /// Set the y coordinate, keeping x; non-drawing, leaves the pen down.
    pub fn set_y(&mut self, y: f64) -> Result<()> {
        ensure_finite(y, "y")?;
        self.pen = PenState::Up;
        self.move_to(Vec2D::new(self.position.x, y.round()));
        self.pen = PenState::Down;
        Ok(())
    }

    /// Lift the pen: subsequent moves do not draw.
    pub fn pen_up(&mut self) {
        self.pen = PenState::Up;
    }

    /// Lower the pen: subsequent moves draw.
    pub fn pen_down(&mut self) {
        self.pen = PenState::Down;
    }

    /// Restore the start position, the mode's start orientation, and pen
    /// down. The canvas and the move history are left as they are.
    pub fn reset(&mut self) {
        self.position = self.start;
        self.heading = self.mode.start_orientation();
        self.pen = PenState::Down;
    }

    fn advance(&mut self, distance: f64) {
        let target = (self.position + self.heading * distance).round();
        self.move_to(target);
    }

    /// Commit a move to `target` (integer-valued).
    ///
    /// With the pen down, both endpoints are clamped into the canvas and the
    /// clamped segment is rasterized; the cell the pen rests on keeps its
    /// current value, only the rest of the segment is painted. The position
    /// is then set to the unclamped target.
    fn move_to(&mut self, target: Vec2D) {
        if self.pen == PenState::Down {
            let from = self.clamp_to_canvas(self.position);
            let to = self.clamp_to_canvas(target);
            let resting = self.canvas.get(from);
            for cell in BresenhamLine::new(from, to) {
                self.canvas.set(cell, self.pen_color);
            }
            if let Some(value) = resting {
                self.canvas.set(from, value);
            }
            log::debug!("draw ({},{}) -> ({},{})", from.x, from.y, to.x, to.y);
        }
        self.position = target;
    }

    fn clamp_to_canvas(&self, p: Vec2D) -> GridCoord {
        let max_x = (self.canvas.width() - 1) as f64;
        let max_y = (self.canvas.height() - 1) as f64;
        GridCoord::new(p.x.clamp(0.0, max_x) as i32, p.y.clamp(0.0, max_y) as i32)
    }

    // === Queries ===

    /// Current position. Components are always integer-valued.
    #[inline]
    pub fn position(&self) -> Vec2D {
        self.position
    }

    /// Current x coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Current y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Current heading as an angle in `[0, fullcircle)`, in the configured
    /// unit and mode convention.
    pub fn heading(&self) -> f64 {
        self.report_angle(self.heading)
    }

    /// Angle from the current position toward `target`, in the same
    /// convention as [`Navigator::heading`].
    ///
    /// To aim at another navigator, pass `other.position()`.
    pub fn towards(&self, target: Vec2D) -> f64 {
        self.report_angle(target - self.position)
    }

    /// Euclidean distance from the current position to `target`.
    pub fn distance_to(&self, target: Vec2D) -> f64 {
        (target - self.position).magnitude()
    }

    /// Convert a direction vector to a reported angle.
    fn report_angle(&self, v: Vec2D) -> f64 {
        // Trim atan2 dust so cardinal directions report exact values.
        let deg = wrap_full(round_places(v.y.atan2(v.x).to_degrees(), 10), 360.0);
        let units = deg / self.degrees_per_unit;
        wrap_full(self.angle_offset + self.angle_orient * units, self.fullcircle)
    }

    /// The point one canvas-diagonal reach ahead along the heading.
    pub fn edge_point(&self) -> Vec2D {
        let reach = self.canvas.width().max(self.canvas.height()) as f64;
        (self.position + self.heading * reach).round()
    }

    /// Cells from the current position toward [`Navigator::edge_point`],
    /// filtered to the canvas. Pure query; nothing is drawn.
    pub fn ray_to_edge(&self) -> Vec<GridCoord> {
        let start = self.position.to_grid();
        let end = self.edge_point().to_grid();
        BresenhamLine::new(start, end)
            .filter(|c| self.canvas.in_bounds(*c))
            .collect()
    }

    /// Active angle mode.
    #[inline]
    pub fn mode(&self) -> AngleMode {
        self.mode
    }

    /// Full-circle value of the active angle unit.
    #[inline]
    pub fn angle_unit(&self) -> f64 {
        self.fullcircle
    }

    /// Current pen state.
    #[inline]
    pub fn pen(&self) -> PenState {
        self.pen
    }

    /// Value the pen writes into the canvas.
    #[inline]
    pub fn pen_color(&self) -> bool {
        self.pen_color
    }

    /// The canvas drawn so far.
    #[inline]
    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Canvas dimensions as `(width, height)`.
    #[inline]
    pub fn canvas_size(&self) -> (usize, usize) {
        (self.canvas.width(), self.canvas.height())
    }

    /// Distances passed to [`Navigator::forward`] /
    /// [`Navigator::forward_turning`], in call order.
    pub fn line_lengths(&self) -> &[f64] {
        &self.line_lengths
    }

    /// Extra rotations passed to [`Navigator::forward_turning`], in call
    /// order (zero for plain `forward`).
    pub fn turn_angles(&self) -> &[f64] {
        &self.turn_angles
    }
}

pub(crate) fn ensure_finite(value: f64, what: &str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(KurmaError::InvalidArgument(format!(
            "{} must be finite, got {}",
            what, value
        )))
    }
}
