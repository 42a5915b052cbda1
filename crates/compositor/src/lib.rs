//! Nightlight Compositor
//!
//! Pastes a fixture image onto a background at a list of center points and
//! derives a soft-edged mask of where the fixtures landed, ready for an
//! external inpainting step.
//!
//! # Pipeline
//!
//! ```text
//! overlay.png ──── resize ───┐
//!                            ├── clamp ──┬── paste "over" ──────── composite.png (RGB)
//! background.png ── tone? ───┘           │
//!                                        └── padded rects ── blur ── mask.png (L)
//! ```
//!
//! Each step takes its inputs and returns a new value. The resized overlay
//! is computed once and its geometry drives both outputs.

pub mod blend;
pub mod composite;
pub mod config;
pub mod geometry;
pub mod mask;
pub mod overlay;
pub mod pipeline;
pub mod tone;

pub use config::CompositorConfig;
pub use geometry::{Dimensions, MaskPadding, Placement, PlacementBounds, TopLeft};
pub use overlay::ResizedOverlay;
pub use pipeline::{load_rgba, Composition, CompositionJob, Compositor, RunReport};
pub use tone::ToneFilter;
