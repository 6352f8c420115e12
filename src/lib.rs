//! # Kurma-Nav: turtle navigation over a bitmap canvas
//!
//! A navigation engine in the classic turtle-graphics model: an agent with a
//! position, a heading, and a pen moves across a fixed-size boolean bitmap,
//! rasterizing straight-line segments as it goes. Movement is continuous,
//! drawing is discrete: every move snaps its endpoint to the integer grid
//! and commits the traversed segment through Bresenham rasterization.
//!
//! ## Quick Start
//!
//! ```
//! use kurma_nav::{Navigator, NavigatorConfig};
//!
//! let mut turtle = Navigator::new(NavigatorConfig::default())?;
//!
//! // Equilateral triangle
//! for _ in 0..3 {
//!     turtle.forward(20.0)?;
//!     turtle.left(120.0)?;
//! }
//!
//! assert!(turtle.canvas().count_of(false) > 0);
//! # Ok::<(), kurma_nav::KurmaError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 navigator/                  │  ← movement protocol
//! │   (pose, angle modes, pen, circle/arc)      │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │                  canvas/                    │  ← drawing surface
//! │   (PixelCanvas storage, Bresenham raster)   │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │                   core/                     │  ← foundation
//! │        (Vec2D, GridCoord, angle math)       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! `config` supplies construction parameters (TOML-loadable), `io` exports
//! the finished canvas as a PGM image, `error` carries the crate error type.
//!
//! ## Coordinate conventions
//!
//! - Positions are unbounded; only drawing is clipped to the canvas.
//! - Headings are unit vectors; reported angles depend on the
//!   [`AngleMode`] (Standard/World: zero = east, counterclockwise positive;
//!   Logo: zero = north, clockwise positive) and the configured angle unit
//!   (degrees by default).
//! - The canvas background is `true`; the pen writes its pen color
//!   (`false` by default).

pub mod canvas;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod navigator;

pub use canvas::{cells_along_segment, BresenhamLine, PixelCanvas};
pub use config::NavigatorConfig;
pub use crate::core::{GridCoord, Vec2D};
pub use error::{KurmaError, Result};
pub use navigator::{AngleMode, Navigator, PenState};
