//! Owned viewer state.
//!
//! `ViewerState` replaces the original UI-framework's reactive cells
//! with explicit owned state: parameter setters trigger wholesale
//! recomputation of the point cloud and prime set, event handlers
//! mutate the camera, and `scene()` rebuilds the renderable list on
//! demand. Nothing here is incremental and nothing blocks.
//!
//! This facade is also where malformed parameters are rejected: the
//! math underneath assumes validity, so NaN angles, non-finite radii,
//! and empty viewports are caught here with a [`ParamsError`].

use log::debug;
use nalgebra::Vector2;
use thiserror::Error;

use crate::core::{CameraState, PrimeSet, SpiralMode, SpiralParams, SpiralPoint, Viewport};
use crate::render::{build_scene, Scene, SceneOptions};
use crate::viewer::clock::AnimationClock;
use crate::viewer::input::{InteractionController, Modifiers};

/// Parameter validation errors, raised before any geometry runs.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("spiral parameter `{0}` is not finite")]
    NonFiniteParam(&'static str),

    #[error("dot size must be finite and positive, got {0}")]
    InvalidDotSize(f32),

    #[error("viewport dimensions must be positive, got {0}x{1}")]
    InvalidViewport(f32, f32),
}

/// All state an interactive spiral view owns.
///
/// Dropping the state tears the view down: the animation clock goes
/// with it, so no recurring tick survives.
#[derive(Debug)]
pub struct ViewerState {
    limit: u32,
    params: SpiralParams,
    options: SceneOptions,

    // Caches, recomputed wholesale on any limit/params change
    points: Vec<SpiralPoint>,
    primes: PrimeSet,

    camera: CameraState,
    controller: InteractionController,
    clock: AnimationClock,
}

impl ViewerState {
    /// Create a view over the integers 1..=limit.
    pub fn new(limit: u32, params: SpiralParams) -> Result<Self, ParamsError> {
        validate_params(&params)?;
        let mut state = Self {
            limit,
            params,
            options: SceneOptions::default(),
            points: Vec::new(),
            primes: PrimeSet::sieve(0),
            camera: CameraState::default(),
            controller: InteractionController::new(),
            clock: AnimationClock::default(),
        };
        state.recompute();
        Ok(state)
    }

    /// Convenience constructor with a mode's default parameters.
    pub fn with_mode(limit: u32, mode: SpiralMode) -> Self {
        // Default parameters are always finite
        Self::new(limit, SpiralParams::for_mode(mode))
            .unwrap_or_else(|_| unreachable!("default parameters are valid"))
    }

    // ── Parameters ────────────────────────────────────────────────────

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn params(&self) -> &SpiralParams {
        &self.params
    }

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    /// Change the integer bound; points and primes are rebuilt from
    /// scratch.
    pub fn set_limit(&mut self, limit: u32) {
        if limit != self.limit {
            self.limit = limit;
            self.recompute();
        }
    }

    /// Replace the spiral parameters (same or different mode).
    pub fn set_params(&mut self, params: SpiralParams) -> Result<(), ParamsError> {
        validate_params(&params)?;
        self.params = params;
        self.recompute();
        Ok(())
    }

    /// Switch mode, adopting that mode's default parameters.
    pub fn set_mode(&mut self, mode: SpiralMode) {
        if mode != self.params.mode() {
            self.params = SpiralParams::for_mode(mode);
            self.recompute();
        }
    }

    /// Replace scene options (filters, axes, perspective, dot size).
    pub fn set_options(&mut self, options: SceneOptions) -> Result<(), ParamsError> {
        if !options.dot_size.is_finite() || options.dot_size <= 0.0 {
            return Err(ParamsError::InvalidDotSize(options.dot_size));
        }
        self.options = options;
        Ok(())
    }

    // ── Camera and interaction ────────────────────────────────────────

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    pub fn pointer_down(&mut self, id: u64, position: Vector2<f32>) {
        self.controller.pointer_down(id, position, &self.camera);
    }

    pub fn pointer_move(&mut self, id: u64, position: Vector2<f32>) {
        self.controller.pointer_move(id, position, &mut self.camera);
    }

    pub fn pointer_up(&mut self, id: u64) {
        self.controller.pointer_up(id);
    }

    pub fn wheel(&mut self, delta_y: f32, modifiers: Modifiers) {
        self.controller.wheel(delta_y, modifiers, &mut self.camera);
    }

    /// Frame tick from the host's animation callback.
    pub fn tick(&mut self, dt_ms: f32) {
        self.clock.tick(dt_ms, &mut self.camera);
    }

    /// External reset signal: identity view, gesture state cleared.
    pub fn reset_view(&mut self) {
        self.controller.reset(&mut self.camera);
    }

    // ── Output ────────────────────────────────────────────────────────

    /// Number of primes in `[2, limit]`.
    pub fn prime_count(&self) -> usize {
        self.primes.len()
    }

    /// `prime_count / limit`, 0 when the limit is 0.
    pub fn prime_density(&self) -> f32 {
        self.primes.density(self.limit)
    }

    /// Rebuild the renderable list for the current camera and filters.
    pub fn scene(&self, viewport: Viewport) -> Result<Scene, ParamsError> {
        if !(viewport.width > 0.0 && viewport.height > 0.0)
            || !viewport.width.is_finite()
            || !viewport.height.is_finite()
        {
            return Err(ParamsError::InvalidViewport(viewport.width, viewport.height));
        }
        Ok(build_scene(
            &self.points,
            &self.primes,
            &self.camera,
            viewport,
            &self.options,
        ))
    }

    /// Wholesale recomputation of points and primes.
    fn recompute(&mut self) {
        self.points = self.params.generate(self.limit);
        self.primes = PrimeSet::sieve(self.limit);
        debug!(
            "recomputed {:?} cloud: {} points, {} primes",
            self.params.mode(),
            self.points.len(),
            self.primes.len()
        );
    }
}

fn validate_params(params: &SpiralParams) -> Result<(), ParamsError> {
    fn finite(name: &'static str, value: f32) -> Result<(), ParamsError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(ParamsError::NonFiniteParam(name))
        }
    }

    match params {
        SpiralParams::Helix(p) => {
            finite("step_angle", p.step_angle)?;
            finite("radius", p.radius)?;
            finite("pitch", p.pitch)
        }
        SpiralParams::Sphere(p) => finite("step_angle", p.step_angle),
        SpiralParams::Cone(p) => {
            finite("step_angle", p.step_angle)?;
            finite("base_radius", p.base_radius)?;
            finite("growth", p.growth)?;
            finite("climb", p.climb)
        }
        SpiralParams::Layers(p) => {
            finite("step_angle", p.step_angle)?;
            finite("layer_radius", p.layer_radius)
        }
    }
}
