//! Penumbra is a real-time window-shadow compositing engine.
//!
//! Penumbra turns a 2D occluder description (a photo of a window, or a
//! procedural set of blind slats) into a per-texel depth map, then renders
//! soft, depth-varying contact shadows that a host page composites over its
//! own content with a multiplicative blend.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `SourceDescriptor + RenderSettings -> DepthRaster` (per-texel
//!    occupancy and depth, rebuilt whole each frame)
//! 2. **Shade**: `DepthRaster -> shadow factor` per pixel via golden-angle
//!    (Vogel) disk sampling, parallelized over rows
//! 3. **Composite**: `mix(white, tint, factor)` written into a reduced-scale
//!    [`RenderSurface`] the host multiplies over arbitrary page pixels
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: building and shading are pure for a given
//!   input; the per-pixel sample rotation comes from a position hash, not an
//!   RNG, and wall-clock time enters only through an injected [`TimeSource`].
//! - **No IO in the pipeline**: image decode is front-loaded in
//!   [`decode_image`]; a frame never suspends or blocks.
//! - **Synchronous frames**: the host drives [`CompositeRenderer::render_frame`]
//!   from its own tick; `&mut self` serializes frames by construction.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod depth;
mod foundation;
mod model;
mod render;
mod sampler;

pub use assets::decode::decode_image;
pub use depth::builder::DepthMapBuilder;
pub use depth::raster::{DepthRaster, DepthTexel};
pub use foundation::error::{PenumbraError, PenumbraResult};
pub use model::clock::{FixedClock, SystemClock, TimeSource, diurnal_angle_degrees};
pub use model::settings::{RenderRequest, RenderSettings, ShadowTint};
pub use model::source::{
    AngleMode, FrameParams, ImageSource, ProceduralParams, SourceDescriptor,
};
pub use render::composite::multiply_into;
pub use render::compositor::CompositeRenderer;
pub use render::surface::RenderSurface;
pub use sampler::disk::{DiskKernel, DiskSample, GOLDEN_ANGLE};
pub use sampler::shade::shade;
