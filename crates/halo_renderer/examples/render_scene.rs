//! Renders the reference scene and saves it as a PNG.
//!
//! Usage: `render_scene [width] [height] [samples] [seed] [output]`
//! (defaults: 800 400 10 0 render.png)

use anyhow::{anyhow, Context, Result};
use halo_renderer::{render, reference_scene, Camera, CancelToken, RenderConfig, RenderRequest};
use std::str::FromStr;

fn arg_or<T: FromStr>(args: &[String], index: usize, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid argument {}: {:?}", index, raw)),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let width: u32 = arg_or(&args, 0, 800)?;
    let height: u32 = arg_or(&args, 1, 400)?;
    let samples: u32 = arg_or(&args, 2, 10)?;
    let seed: u64 = arg_or(&args, 3, 0)?;
    let output = args.get(4).cloned().unwrap_or_else(|| "render.png".to_string());

    let world = reference_scene();
    let camera = Camera::default();
    let config = RenderConfig::default().with_samples(samples).with_seed(seed);

    let image = render(
        RenderRequest::new(width, height),
        &world,
        &camera,
        &config,
        &CancelToken::new(),
    )?;

    let buffer = image::RgbaImage::from_raw(image.width(), image.height(), image.as_bytes().to_vec())
        .ok_or_else(|| anyhow!("Pixel buffer does not match {}x{}", width, height))?;
    buffer
        .save(&output)
        .with_context(|| format!("Failed to save {}", output))?;

    log::info!("Saved to {}", output);
    Ok(())
}
