//! Canvas image export.
//!
//! The canvas is the sole persisted artifact. It is serialized as binary PGM
//! (P5) grayscale with `true → 255` (blank) and `false → 0` (drawn), which
//! any image viewer or downstream tool can read directly.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::canvas::PixelCanvas;
use crate::error::Result;
use crate::navigator::Navigator;

/// Write the canvas to `path` as a binary PGM (P5) image.
pub fn write_pgm(canvas: &PixelCanvas, path: &Path) -> Result<()> {
    let (width, height, pixels) = canvas.to_grayscale();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "P5")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;
    writer.write_all(&pixels)?;
    writer.flush()?;

    log::info!("Saved canvas: {} ({}x{})", path.display(), width, height);
    Ok(())
}

impl Navigator {
    /// Snapshot the canvas to a PGM image file.
    pub fn save_image(&self, path: &Path) -> Result<()> {
        write_pgm(self.canvas(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;
    use std::env::temp_dir;
    use std::fs;

    #[test]
    fn test_write_pgm() {
        let mut canvas = PixelCanvas::new(4, 3);
        canvas.set(GridCoord::new(1, 0), false);
        canvas.set(GridCoord::new(3, 2), false);

        let path = temp_dir().join("kurma_test_write.pgm");
        write_pgm(&canvas, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        let header = b"P5\n4 3\n255\n";
        assert_eq!(&bytes[..header.len()], header);

        let payload = &bytes[header.len()..];
        assert_eq!(payload.len(), 12);
        assert_eq!(payload[1], 0); // (1, 0)
        assert_eq!(payload[11], 0); // (3, 2)
        assert_eq!(payload[0], 255);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_navigator_save_image() {
        use crate::config::NavigatorConfig;

        let mut turtle = Navigator::new(NavigatorConfig::default()).unwrap();
        turtle.forward(20.0).unwrap();

        let path = temp_dir().join("kurma_test_save.pgm");
        turtle.save_image(&path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], b"P5\n");
        // Some pixels were drawn dark
        assert!(bytes.iter().any(|&b| b == 0));

        let _ = fs::remove_file(&path);
    }
}
