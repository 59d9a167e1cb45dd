// External crates
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

// Internal modules
mod window;

// Internal imports
use pointraster::config::Args;
use pointraster::scene::Scene;
use pointraster::screen::ScreenSpace;

fn main() -> Result<()> {
    // Optional .env for RUST_LOG and friends; a missing file is fine
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("pointraster v{}", env!("CARGO_PKG_VERSION"));

    let config = Args::parse().into_config().context("invalid configuration")?;

    if let Some(path) = &config.snapshot {
        // Headless: draw the initial scene once
        let mut scene = Scene::new(&config);
        scene.refresh();
        let mut screen = ScreenSpace::new(config.width, config.height);
        scene.render(&mut screen);
        screen.save_png(path)?;
        info!(
            "Saved {:?} ({} points, {} vertex bytes) to {}",
            config.mode,
            scene.vertex_count(),
            scene.vertex_bytes().len(),
            path.display()
        );
        return Ok(());
    }

    window::run(&config)
}
