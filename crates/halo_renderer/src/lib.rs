//! Halo Renderer - CPU Path Tracing
//!
//! A small Monte Carlo path tracer: spheres, a single fixed diffuse
//! response, a sky gradient background, and jittered multi-sampling.
//! Rendering produces an RGBA8 [`Image`]; displaying or saving it is left
//! to the caller.
//!
//! # Example
//!
//! ```no_run
//! use halo_renderer::{render, reference_scene, Camera, CancelToken, RenderConfig, RenderRequest};
//!
//! let world = reference_scene();
//! let image = render(
//!     RenderRequest::new(800, 400),
//!     &world,
//!     &Camera::default(),
//!     &RenderConfig::default(),
//!     &CancelToken::new(),
//! )?;
//! assert_eq!(image.pixel_count(), 320_000);
//! # Ok::<(), halo_renderer::RenderError>(())
//! ```

mod bucket;
mod camera;
mod hittable;
mod image;
mod renderer;
mod scene;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hittable::{HitRecord, HitSelection, Hittable, HittableList};
pub use crate::image::{Image, Pixel};
pub use renderer::{
    color_to_pixel, linear_to_gamma, ray_color, render, render_pixel, render_serial, sky_gradient,
    CancelToken, Color, RenderConfig, RenderError, RenderRequest, DIFFUSE_ALBEDO, SKY_COLOR,
};
pub use scene::{reference_scene, reference_scene_with};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from halo_math
pub use halo_math::{Interval, MathError, Ray, Vec3};
