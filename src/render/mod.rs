//! Scene building (CPU).
//!
//! This module turns a spiral point cloud plus a prime set into an
//! ordered list of renderable primitives:
//! - Filter to primes (or keep everything)
//! - Project each point through the camera
//! - Sort ascending by depth for painter's-algorithm drawing
//!
//! No pixels are touched here - an external UI layer paints the result.

pub mod scene;

// Re-export
pub use scene::{build_scene, Axis, AxisLine, RenderablePoint, Scene, SceneOptions};
