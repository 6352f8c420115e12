//! Bitmap canvas and line rasterization.
//!
//! [`PixelCanvas`] is the drawing surface: a fixed-size boolean grid with
//! bounds-checked writes. [`BresenhamLine`] turns two integer cell
//! coordinates into the ordered run of cells between them.

mod raster;
mod storage;

pub use raster::{cells_along_segment, BresenhamLine};
pub use storage::PixelCanvas;
