//! Renders every gallery fractal to an SVG file.
//!
//! cargo run --example gallery_svg -- [stage] [config.ron] [output dir]
//!
//! The stage is clamped to each fractal's maximum. Set RUST_LOG=debug to see
//! each system's details as it's built.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use aoer_fractal_rs::config::RenderConfig;
use aoer_fractal_rs::gallery::GALLERY;
use aoer_fractal_rs::geo_types::svg::{to_document, SvgStyle};
use aoer_fractal_rs::render::render;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let stage: u32 = match args.next() {
        Some(s) => s.parse().context("Stage must be a whole number")?,
        None => 4,
    };
    let config = match args.next() {
        Some(path) => RenderConfig::load(Path::new(&path))?,
        None => RenderConfig::default(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "images".to_string()));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Couldn't create {}", out_dir.display()))?;

    for (i, def) in GALLERY.iter().enumerate() {
        let stage = stage.min(def.max_stage);
        let system = def.build(stage, def.default_angle)?;
        let rendering = match render(
            &system,
            &config.viewport(),
            &config.fit_options(def.orientation(stage)),
        ) {
            Ok(rendering) => rendering,
            Err(e) => {
                tracing::warn!(name = def.name, stage, error = %e, "Skipping fractal");
                continue;
            }
        };

        let style = SvgStyle {
            background: config.background.clone(),
            stroke: config.stroke.clone(),
            stroke_width: def.stroke_weight,
        };
        let doc = to_document(&rendering.to_multiline(), &config.viewport(), &style);
        let path = out_dir.join(format!("{}-{}.svg", i + 1, def.name.replace(' ', "-")));
        svg::save(&path, &doc).with_context(|| format!("Couldn't write {}", path.display()))?;
        tracing::info!(
            name = def.name,
            stage,
            segments = rendering.segments.len(),
            path = %path.display(),
            "Saved"
        );
    }
    Ok(())
}
