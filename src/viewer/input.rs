//! Pointer and wheel gesture handling.
//!
//! The controller is an explicit state machine over the camera:
//!
//! ```text
//! Idle --1st contact--> Dragging --2nd contact--> Pinching
//!  ^                       |  ^                      |
//!  +-----last contact up---+  +----one contact up----+
//! ```
//!
//! Dragging rotates, pinching zooms (rotation frozen), and the wheel
//! zooms independently of either. Gesture bookkeeping is an explicit
//! map from pointer id to last-known position, cleared deterministically
//! on contact-count transitions so no stale baseline survives into the
//! next gesture session.

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::core::{CameraState, ZOOM_MAX, ZOOM_MIN};

/// Radians of rotation per pixel of drag.
const DRAG_SENSITIVITY: f32 = 0.01;

/// Wheel zoom per unit of delta, without and with a modifier held.
const WHEEL_SENSITIVITY: f32 = 0.001;
const WHEEL_SENSITIVITY_FAST: f32 = 0.0025;

/// Keyboard modifier flags accompanying a wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Whether the accelerated wheel-zoom rate applies.
    fn accelerated(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Current gesture, tracked alongside the pointer map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GesturePhase {
    Idle,
    /// One contact; `last` is the position of the previous move event.
    Dragging { last: Vector2<f32> },
    /// Two contacts; zoom is recomputed continuously against the
    /// baseline captured when the second contact landed.
    Pinching {
        start_distance: f32,
        start_zoom: f32,
    },
}

/// Translates pointer/wheel gestures into camera mutations.
///
/// All handlers take `&mut CameraState` and run synchronously on the
/// UI's event loop; the controller itself owns only gesture state.
#[derive(Clone, Debug)]
pub struct InteractionController {
    /// Last-known position per active pointer id
    pointers: HashMap<u64, Vector2<f32>>,
    phase: GesturePhase,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            pointers: HashMap::new(),
            phase: GesturePhase::Idle,
        }
    }

    /// Current gesture phase (mainly for tests and debugging overlays).
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Number of active contacts.
    pub fn contact_count(&self) -> usize {
        self.pointers.len()
    }

    /// A pointer contact started.
    pub fn pointer_down(&mut self, id: u64, position: Vector2<f32>, camera: &CameraState) {
        self.pointers.insert(id, position);
        match self.pointers.len() {
            1 => {
                self.phase = GesturePhase::Dragging { last: position };
            }
            2 => {
                // Second contact: freeze rotation, baseline the pinch
                self.phase = GesturePhase::Pinching {
                    start_distance: self.pinch_distance().max(f32::EPSILON),
                    start_zoom: camera.zoom,
                };
            }
            _ => {
                // Extra contacts are tracked but do not change the gesture
            }
        }
    }

    /// A pointer moved.
    pub fn pointer_move(&mut self, id: u64, position: Vector2<f32>, camera: &mut CameraState) {
        if !self.pointers.contains_key(&id) {
            return;
        }
        self.pointers.insert(id, position);

        match self.phase {
            GesturePhase::Dragging { last } if self.pointers.len() == 1 => {
                let delta = position - last;
                camera.rotation_x += delta.y * DRAG_SENSITIVITY;
                camera.rotation_y += delta.x * DRAG_SENSITIVITY;
                self.phase = GesturePhase::Dragging { last: position };
            }
            GesturePhase::Pinching {
                start_distance,
                start_zoom,
            } if self.pointers.len() == 2 => {
                let distance = self.pinch_distance();
                camera.zoom = (start_zoom * distance / start_distance).clamp(ZOOM_MIN, ZOOM_MAX);
            }
            _ => {}
        }
    }

    /// A pointer contact ended (or was cancelled).
    pub fn pointer_up(&mut self, id: u64) {
        if self.pointers.remove(&id).is_none() {
            return;
        }
        match self.pointers.len() {
            0 => {
                self.phase = GesturePhase::Idle;
            }
            1 => {
                // Pinch (or multi-contact drag) collapsed to one contact:
                // re-seed the drag baseline from the survivor so the next
                // move event produces no jump.
                let last = self
                    .pointers
                    .values()
                    .next()
                    .copied()
                    .unwrap_or_else(Vector2::zeros);
                self.phase = GesturePhase::Dragging { last };
            }
            _ => {}
        }
    }

    /// Wheel zoom, independent of drag/pinch state.
    ///
    /// Scrolling up (negative delta) zooms in; a held ctrl/meta modifier
    /// uses the faster rate.
    pub fn wheel(&mut self, delta_y: f32, modifiers: Modifiers, camera: &mut CameraState) {
        let k = if modifiers.accelerated() {
            WHEEL_SENSITIVITY_FAST
        } else {
            WHEEL_SENSITIVITY
        };
        camera.zoom = (camera.zoom - delta_y * k).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// External reset signal: identity view, all gesture state cleared.
    pub fn reset(&mut self, camera: &mut CameraState) {
        camera.reset();
        self.pointers.clear();
        self.phase = GesturePhase::Idle;
    }

    /// Distance between the two active contacts; 0 if fewer than two.
    fn pinch_distance(&self) -> f32 {
        let mut it = self.pointers.values();
        match (it.next(), it.next()) {
            (Some(a), Some(b)) => (a - b).norm(),
            _ => 0.0,
        }
    }
}
