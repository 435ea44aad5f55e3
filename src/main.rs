//! Rotating textured cube drawn with ASCII glyphs. Ctrl+C to quit.
//!
//! Takes no arguments; everything is fixed in `SceneConfig`.

mod colors;
mod config;
mod cube;
mod geometry;
mod raster;
mod scene;
mod surface;
mod terminal;

use anyhow::{Context, Result};
use config::SceneConfig;
use cube::CubeRenderer;
use terminal::Terminal;

fn main() -> Result<()> {
    env_logger::init();

    if !colors::supports_color() {
        println!("Your terminal does not support colors!");
        std::process::exit(1);
    }

    let config = SceneConfig::default();
    log::info!(
        "starting: focal length {}, {} samples per edge, cube size {}",
        config.focal_length,
        config.sample_resolution,
        config.cube_size
    );

    let mut term = Terminal::new().context("failed to set up terminal")?;
    let mut renderer = CubeRenderer::new(config);
    let result = renderer.run(&mut term).context("render loop failed");

    // Restore the terminal before any error reaches stderr
    drop(term);
    log::info!("stopped after {} frames", renderer.elapsed());
    result
}
