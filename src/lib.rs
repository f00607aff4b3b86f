//! # prime-spirals: Prime Number Spiral Geometry
//!
//! This crate implements the computational core of an interactive prime
//! number visualizer: it maps the integers 1..=N onto several parametric
//! 3D spiral families, flags which integers are prime, and projects the
//! resulting point cloud onto a 2D viewport with rotation, zoom, and
//! optional perspective.
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - `core`: Fundamental data structures (spiral points, prime sieve,
//!   geometry generators, camera + projection math)
//! - `render`: Scene building (filtering, projection, depth sorting,
//!   axis overlay)
//! - `viewer`: Interaction (drag/pinch/wheel gesture state machine,
//!   auto-rotation clock) and the owned application state a UI drives
//!
//! The actual painting of dots and lines is owned by an external UI
//! layer: this crate stops at an ordered list of renderable primitives
//! suitable for naive back-to-front drawing.
//!
//! ## Coordinate conventions
//!
//! World space is right-handed with the spiral axis along +Z. The
//! projector applies a fixed-order rotation (X axis first, then Y) and
//! an optional fictitious perspective division; `depth` is the
//! post-rotation z used only for painter's-algorithm ordering.

// Core data structures and math
pub mod core;

// Scene building (projection + depth sort)
pub mod render;

// Interaction and owned viewer state
pub mod viewer;

// Re-export commonly used types at crate root for convenience
pub use crate::core::{CameraState, PrimeSet, SpiralMode, SpiralParams, SpiralPoint, Viewport};
pub use crate::render::{build_scene, RenderablePoint, Scene, SceneOptions};
pub use crate::viewer::{AnimationClock, InteractionController, ViewerState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
