//! Core data structures and mathematical operations.
//!
//! This module contains the fundamental types used throughout the system:
//! - `SpiralPoint`: an integer mapped onto a 3D position
//! - `PrimeSet`: Sieve of Eratosthenes output with membership queries
//! - `SpiralParams`: the four spiral-family generators
//! - `CameraState`: rotation/zoom state and the 3D→2D projection
//!
//! All types here are "pure data" - no I/O, no rendering logic.

mod camera;
mod point;
mod sieve;
mod spiral;

// Re-export public types
pub use camera::{CameraState, Projected, Viewport, ZOOM_MAX, ZOOM_MIN};
pub use point::SpiralPoint;
pub use sieve::PrimeSet;
pub use spiral::{
    cone_points, helix_points, layer_points, sphere_points, ConeParams, HelixParams, LayerParams,
    SphereParams, SpiralMode, SpiralParams,
};
