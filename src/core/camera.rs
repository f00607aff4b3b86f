//! Camera state and 3D→2D projection.
//!
//! The camera is not a physical pinhole model: it is the fictitious
//! projection the original visualizer uses, reproduced exactly for
//! visual parity. Rotation is applied in a fixed order (X axis first,
//! then Y), and "perspective" is a point-size/position multiplier
//! `1/(1 + z·0.1)`, not a frustum.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Lower zoom clamp; prevents degenerate (zero) projections.
pub const ZOOM_MIN: f32 = 0.1;

/// Upper zoom clamp; prevents unbounded projections.
pub const ZOOM_MAX: f32 = 5.0;

/// Fraction of the viewport's short side that one world unit covers at
/// zoom 1. Empirically chosen in the original; kept verbatim.
const VIEW_SCALE: f32 = 0.12;

/// Perspective falloff per unit of rotated depth.
const PERSPECTIVE_FALLOFF: f32 = 0.1;

/// Rotation and zoom state, owned by the interaction controller and
/// read by the scene builder.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Rotation about the world X axis (radians)
    pub rotation_x: f32,

    /// Rotation about the world Y axis (radians)
    pub rotation_y: f32,

    /// Zoom factor, always within [`ZOOM_MIN`, `ZOOM_MAX`]
    pub zoom: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            zoom: 1.0,
        }
    }
}

/// Viewport dimensions in pixels. Callers supply positive values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Result of projecting one world-space point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// Screen x in pixels, viewport-centered
    pub screen_x: f32,

    /// Screen y in pixels, viewport-centered
    pub screen_y: f32,

    /// Post-rotation z, used for back-to-front ordering only
    pub depth: f32,

    /// Distance-based shrink factor; 1.0 when perspective is disabled
    pub perspective_scale: f32,
}

impl CameraState {
    /// Reset to the identity view: no rotation, zoom 1.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Project a world-space point onto the viewport.
    ///
    /// The rotation order (X, then Y) and the scale constants must not
    /// be rearranged: downstream golden-value tests and the original
    /// visualizer both depend on this exact sequence.
    pub fn project(
        &self,
        position: &Vector3<f32>,
        viewport: Viewport,
        perspective_enabled: bool,
    ) -> Projected {
        let scale = viewport.width.min(viewport.height) * VIEW_SCALE * self.zoom;

        // Rotate about X
        let (sin_x, cos_x) = self.rotation_x.sin_cos();
        let y1 = position.y * cos_x - position.z * sin_x;
        let z1 = position.y * sin_x + position.z * cos_x;

        // Rotate about Y
        let (sin_y, cos_y) = self.rotation_y.sin_cos();
        let x2 = position.x * cos_y + z1 * sin_y;
        let z2 = -position.x * sin_y + z1 * cos_y;

        let perspective_scale = if perspective_enabled {
            1.0 / (1.0 + z2 * PERSPECTIVE_FALLOFF)
        } else {
            1.0
        };

        Projected {
            screen_x: viewport.width / 2.0 + x2 * scale * perspective_scale,
            screen_y: viewport.height / 2.0 + y1 * scale * perspective_scale,
            depth: z2,
            perspective_scale,
        }
    }
}
