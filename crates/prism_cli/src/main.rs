// Render the four-sphere demo scene to an image file.
// Run with: cargo run --release -- [settings.json]

use anyhow::{Context, Result};
use prism_core::RenderSettings;
use prism_renderer::{demo, render, Camera, RenderConfig};
use std::env;
use std::time::Instant;

fn load_settings() -> Result<RenderSettings> {
    match env::args().nth(1) {
        Some(path) => RenderSettings::load(&path)
            .with_context(|| format!("Failed to load settings from {}", path)),
        None => {
            log::info!("No settings file given, using defaults");
            Ok(RenderSettings::default())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting prism");

    let settings = load_settings()?;
    let camera = Camera::from_settings(&settings);
    let config = RenderConfig::from(&settings);

    let start = Instant::now();
    let scene = demo::four_spheres();
    log::info!("Scene built in {:?}", start.elapsed());

    let image = render(&camera, &scene, &config);

    image
        .save(&settings.output)
        .with_context(|| format!("Failed to save image to {}", settings.output.display()))?;
    log::info!("Saved to {}", settings.output.display());

    Ok(())
}
