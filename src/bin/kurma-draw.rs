//! Demo driver: draw a shape with the turtle and save it as a PGM image.
//!
//! Usage:
//!   cargo run --bin kurma-draw -- --shape triangle --size 40
//!   cargo run --bin kurma-draw -- --shape spiral -o spiral.pgm

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use kurma_nav::{Navigator, NavigatorConfig, Result};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Shape {
    Triangle,
    Square,
    Star,
    Circle,
    Spiral,
}

/// Turtle drawing demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Shape to draw
    #[arg(long, value_enum, default_value_t = Shape::Triangle)]
    shape: Shape,

    /// Shape size (side length or radius)
    #[arg(long, default_value_t = 40.0)]
    size: f64,

    /// Canvas width and height in pixels
    #[arg(long, default_value_t = 128)]
    canvas: usize,

    /// Output image path
    #[arg(short, long, default_value = "turtle.pgm")]
    output: PathBuf,
}

fn draw(turtle: &mut Navigator, shape: Shape, size: f64) -> Result<()> {
    match shape {
        Shape::Triangle => {
            for _ in 0..3 {
                turtle.forward(size)?;
                turtle.left(120.0)?;
            }
        }
        Shape::Square => {
            for _ in 0..4 {
                turtle.forward(size)?;
                turtle.left(90.0)?;
            }
        }
        Shape::Star => {
            for _ in 0..5 {
                turtle.forward(size)?;
                turtle.right(144.0)?;
            }
        }
        Shape::Circle => {
            turtle.circle(size, None, None)?;
        }
        Shape::Spiral => {
            let mut step = size / 20.0;
            for _ in 0..40 {
                turtle.forward(step)?;
                turtle.left(30.0)?;
                step += size / 40.0;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = NavigatorConfig {
        canvas_width: args.canvas,
        canvas_height: args.canvas,
        start_x: (args.canvas / 2) as f64,
        start_y: (args.canvas / 2) as f64,
        ..NavigatorConfig::default()
    };
    let mut turtle = Navigator::new(config)?;

    draw(&mut turtle, args.shape, args.size)?;

    log::info!(
        "Drew {:?}: {} pixels set, final position ({}, {}), heading {:.1}",
        args.shape,
        turtle.canvas().count_of(turtle.pen_color()),
        turtle.x(),
        turtle.y(),
        turtle.heading()
    );

    turtle.save_image(&args.output)?;
    Ok(())
}
