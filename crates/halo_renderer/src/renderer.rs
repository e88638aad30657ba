//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive diffuse bounces with a hard depth cap
//! - Sky gradient background
//! - Anti-aliasing via jittered multi-sampling
//! - Bucketed, parallel image assembly with cooperative cancellation

use crate::bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::image::{Image, Pixel};
use crate::{Camera, Hittable, Ray};
use halo_math::{gen_f32, random_in_unit_ball, unit_vector, Interval, MathError, Vec3};
use rand::RngCore;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// Fraction of incoming light a diffuse bounce passes on.
pub const DIFFUSE_ALBEDO: f32 = 0.5;

/// Background color at the zenith; the horizon is white.
pub const SKY_COLOR: Color = Color::new(0.5, 0.7, 1.0);

/// Errors that can stop a render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Render cancelled")]
    Cancelled,

    #[error("Diffuse bounce at {point} produced a zero-length direction")]
    DegenerateBounce { point: Vec3 },

    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth; paths reaching it contribute black
    pub max_depth: u32,
    /// Lower bound of the hit interval, suppresses self-intersection
    pub shadow_bias: f32,
    /// Base seed for the per-bucket random streams
    pub seed: u64,
    /// Edge length of a render bucket in pixels
    pub bucket_size: u32,
    /// Apply gamma 2 before quantizing
    pub gamma_correct: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 10,
            max_depth: 50,
            shadow_bias: 0.01,
            seed: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
            gamma_correct: false,
        }
    }
}

impl RenderConfig {
    /// Set samples per pixel (at least one).
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples_per_pixel = samples.max(1);
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size.max(1);
        self
    }

    pub fn with_gamma(mut self, gamma_correct: bool) -> Self {
        self.gamma_correct = gamma_correct;
        self
    }
}

/// Requested output resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
}

impl RenderRequest {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject empty images and pixel counts that overflow `usize`.
    pub fn validate(&self) -> Result<usize, RenderError> {
        let invalid = RenderError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        if self.width == 0 || self.height == 0 {
            return Err(invalid);
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(invalid)
    }
}

/// Shared flag for stopping an in-flight render.
///
/// Clones share the same flag, so one can be handed to the render and
/// another kept by whoever decides to stop it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. A hit spawns a diffuse bounce
/// that carries half the energy; a miss returns the sky. Once `depth`
/// reaches zero the path contributes black.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Result<Color, RenderError> {
    if depth == 0 {
        return Ok(Color::ZERO);
    }

    match world.hit(ray, Interval::new(config.shadow_bias, f32::INFINITY)) {
        Some(rec) => {
            let target = rec.p + rec.normal + random_in_unit_ball(rng);
            let direction = target - rec.p;
            if direction == Vec3::ZERO {
                return Err(RenderError::DegenerateBounce { point: rec.p });
            }

            let bounced = Ray::new(rec.p, direction);
            Ok(DIFFUSE_ALBEDO * ray_color(&bounced, world, depth - 1, config, rng)?)
        }
        None => Ok(sky_gradient(unit_vector(ray.direction())?)),
    }
}

/// Blend white toward [`SKY_COLOR`] as the direction tilts up.
pub fn sky_gradient(unit_direction: Vec3) -> Color {
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::ONE + a * SKY_COLOR
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Quantize a linear color to an opaque 8-bit pixel.
///
/// Channels are clamped to [0, 1] before scaling so out-of-range values
/// saturate instead of wrapping.
pub fn color_to_pixel(color: Color, gamma_correct: bool) -> Pixel {
    let quantize = |c: f32| {
        let c = if gamma_correct { linear_to_gamma(c) } else { c };
        (255.0 * Interval::UNIT.clamp(c)) as u8
    };
    Pixel::opaque(quantize(color.x), quantize(color.y), quantize(color.z))
}

/// Render a single pixel with multi-sampling.
///
/// Each sample jitters the pixel coordinate by a uniform offset in [0, 1)
/// before mapping it onto the camera's viewport.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    request: RenderRequest,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Result<Color, RenderError> {
    let samples = config.samples_per_pixel.max(1);
    let width = request.width as f32;
    let height = request.height as f32;
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let u = (x as f32 + gen_f32(rng)) / width;
        let v = (y as f32 + gen_f32(rng)) / height;
        let ray = camera.get_ray(u, v);
        pixel_color += ray_color(&ray, world, config.max_depth, config, rng)?;
    }

    // Average the samples
    Ok(pixel_color / samples as f32)
}

/// Render the entire scene, spreading buckets across the rayon pool.
pub fn render(
    request: RenderRequest,
    world: &dyn Hittable,
    camera: &Camera,
    config: &RenderConfig,
    cancel: &CancelToken,
) -> Result<Image, RenderError> {
    render_buckets(request, world, camera, config, cancel, true)
}

/// Render the entire scene on the calling thread.
///
/// Produces exactly the same image as [`render`] for the same inputs.
pub fn render_serial(
    request: RenderRequest,
    world: &dyn Hittable,
    camera: &Camera,
    config: &RenderConfig,
    cancel: &CancelToken,
) -> Result<Image, RenderError> {
    render_buckets(request, world, camera, config, cancel, false)
}

fn render_buckets(
    request: RenderRequest,
    world: &dyn Hittable,
    camera: &Camera,
    config: &RenderConfig,
    cancel: &CancelToken,
    parallel: bool,
) -> Result<Image, RenderError> {
    let pixel_count = request.validate()?;
    let buckets = generate_buckets(request.width, request.height, config.bucket_size);

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} buckets{}",
        request.width,
        request.height,
        config.samples_per_pixel,
        config.max_depth,
        buckets.len(),
        if parallel { "" } else { " (serial)" }
    );
    let start = Instant::now();

    let render_one = |bucket: &Bucket| render_bucket(bucket, request, camera, world, config, cancel);
    let results: Result<Vec<BucketResult>, RenderError> = if parallel {
        buckets.par_iter().map(render_one).collect()
    } else {
        buckets.iter().map(render_one).collect()
    };

    let results = match results {
        Ok(results) => results,
        Err(RenderError::Cancelled) => {
            log::warn!("Render cancelled after {:?}", start.elapsed());
            return Err(RenderError::Cancelled);
        }
        Err(e) => return Err(e),
    };

    let mut pixels = vec![Pixel::default(); pixel_count];
    for result in &results {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            let index = (bucket.y + local_y) as usize * request.width as usize
                + (bucket.x + local_x) as usize;
            pixels[index] = color_to_pixel(*color, config.gamma_correct);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());

    Ok(Image::from_pixels(request.width, request.height, pixels))
}
