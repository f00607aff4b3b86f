//! Depth-sorted scene construction.
//!
//! The scene builder is pure and total: it reads the camera once,
//! projects every retained point, and returns everything already in
//! back-to-front order so a naive painter gets correct overlap without
//! a depth buffer.

use log::warn;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::core::{CameraState, PrimeSet, Projected, SpiralPoint, Viewport};

/// Half-length of the axis overlay segments, in world units.
const AXIS_EXTENT: f32 = 8.0;

/// One projected dot, ready to paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderablePoint {
    /// Screen position in pixels
    pub screen_x: f32,
    pub screen_y: f32,

    /// Post-rotation z; the output list is sorted ascending on this
    pub depth: f32,

    /// Distance shrink factor (1.0 with perspective disabled)
    pub perspective_scale: f32,

    /// Dot radius in pixels, `max(1, dot_size * perspective_scale)`
    pub radius: f32,

    /// The integer this dot represents
    pub index: u32,

    /// Whether that integer is prime
    pub is_prime: bool,
}

/// World axis identity, so the painter can color the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One projected axis overlay segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLine {
    pub axis: Axis,
    pub start: Projected,
    pub end: Projected,
}

/// Scene-level toggles and sizing, externally supplied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneOptions {
    /// Keep composite numbers too (default: primes only)
    pub show_all_numbers: bool,

    /// Emit the three world-axis overlay segments
    pub show_axes: bool,

    /// Apply the fictitious perspective division
    pub perspective_enabled: bool,

    /// Base dot radius in pixels before perspective scaling
    pub dot_size: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_all_numbers: false,
            show_axes: false,
            perspective_enabled: true,
            dot_size: 3.0,
        }
    }
}

/// A fully built frame: depth-sorted dots, optional axis overlay, and
/// the prime statistics the UI displays.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Dots in ascending depth order (farthest first)
    pub points: Vec<RenderablePoint>,

    /// Axis overlay segments; empty unless `show_axes` is set
    pub axes: Vec<AxisLine>,

    /// Number of primes in `[2, N]`
    pub prime_count: usize,

    /// `prime_count / N`; 0 when N is 0
    pub prime_density: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            axes: Vec::new(),
            prime_count: 0,
            prime_density: 0.0,
        }
    }
}

/// Build a depth-sorted scene from a point cloud and its prime set.
///
/// Empty input yields an empty scene; there are no error conditions.
pub fn build_scene(
    points: &[SpiralPoint],
    primes: &PrimeSet,
    camera: &CameraState,
    viewport: Viewport,
    options: &SceneOptions,
) -> Scene {
    let mut renderable: Vec<RenderablePoint> = points
        .iter()
        .filter_map(|p| {
            let is_prime = primes.contains(p.index);
            if !is_prime && !options.show_all_numbers {
                return None;
            }

            let proj = camera.project(&p.position, viewport, options.perspective_enabled);
            Some(RenderablePoint {
                screen_x: proj.screen_x,
                screen_y: proj.screen_y,
                depth: proj.depth,
                perspective_scale: proj.perspective_scale,
                radius: (options.dot_size * proj.perspective_scale).max(1.0),
                index: p.index,
                is_prime,
            })
        })
        .collect();

    // Drop non-finite depths so the sort is well defined
    let before = renderable.len();
    renderable.retain(|p| p.depth.is_finite());
    let dropped = before - renderable.len();
    if dropped > 0 {
        warn!("filtered {} points with non-finite depth", dropped);
    }

    // Back-to-front for the painter's algorithm
    renderable.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    let axes = if options.show_axes {
        build_axes(camera, viewport, options.perspective_enabled)
    } else {
        Vec::new()
    };

    let n = points.len() as u32;
    Scene {
        points: renderable,
        axes,
        prime_count: primes.len(),
        prime_density: primes.density(n),
    }
}

/// Project the three world-axis reference segments, `-L..+L` each.
fn build_axes(camera: &CameraState, viewport: Viewport, perspective: bool) -> Vec<AxisLine> {
    let ends = [
        (Axis::X, Vector3::new(AXIS_EXTENT, 0.0, 0.0)),
        (Axis::Y, Vector3::new(0.0, AXIS_EXTENT, 0.0)),
        (Axis::Z, Vector3::new(0.0, 0.0, AXIS_EXTENT)),
    ];
    ends.iter()
        .map(|(axis, end)| AxisLine {
            axis: *axis,
            start: camera.project(&(-*end), viewport, perspective),
            end: camera.project(end, viewport, perspective),
        })
        .collect()
}
