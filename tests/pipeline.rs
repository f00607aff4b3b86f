//! End-to-end tests for the generate → sieve → project → sort pipeline.
//!
//! Each test checks a property the external painter relies on, with
//! simple numbers you can verify by hand.

use approx::assert_relative_eq;
use nalgebra::Vector2;
use prime_spirals::core::{
    CameraState, HelixParams, PrimeSet, SpiralMode, SpiralParams, Viewport,
};
use prime_spirals::render::{build_scene, SceneOptions};
use prime_spirals::viewer::{Modifiers, ViewerState};

#[test]
fn test_full_pipeline_counts_and_order() {
    for mode in [
        SpiralMode::Helix,
        SpiralMode::Sphere,
        SpiralMode::Cone,
        SpiralMode::Layers,
    ] {
        let params = SpiralParams::for_mode(mode);
        let n = 500;
        let points = params.generate(n);
        let primes = PrimeSet::sieve(n);
        assert_eq!(points.len(), n as usize);

        let camera = CameraState {
            rotation_x: 0.4,
            rotation_y: 1.1,
            zoom: 1.5,
        };
        let options = SceneOptions {
            show_all_numbers: true,
            show_axes: true,
            ..SceneOptions::default()
        };
        let scene = build_scene(&points, &primes, &camera, Viewport::new(1024.0, 768.0), &options);

        // Every generated point survives (all depths finite), in
        // non-decreasing depth order, plus the three axis segments.
        assert_eq!(scene.points.len(), n as usize, "mode {:?}", mode);
        assert!(scene.points.windows(2).all(|w| w[0].depth <= w[1].depth));
        assert_eq!(scene.axes.len(), 3);

        // 95 primes below 500
        assert_eq!(scene.prime_count, 95);
        assert_relative_eq!(scene.prime_density, 95.0 / 500.0, epsilon = 1e-6);
    }
}

#[test]
fn test_prime_filter_matches_sieve_exactly() {
    let params = SpiralParams::for_mode(SpiralMode::Layers);
    let n = 1000;
    let points = params.generate(n);
    let primes = PrimeSet::sieve(n);

    let scene = build_scene(
        &points,
        &primes,
        &CameraState::default(),
        Viewport::new(800.0, 800.0),
        &SceneOptions::default(),
    );

    let mut shown: Vec<u32> = scene.points.iter().map(|p| p.index).collect();
    shown.sort_unstable();
    assert_eq!(shown, primes.iter().collect::<Vec<_>>());
}

#[test]
fn test_identity_view_projects_helix_first_point() {
    // Helix n=1 with defaults sits at (cos 0.35, sin 0.35, 0.028);
    // with the identity camera and perspective off the screen position
    // is the viewport center plus position * 0.12 * min(w, h).
    let params = HelixParams::default();
    let points = prime_spirals::core::helix_points(1, &params);
    let camera = CameraState::default();
    let viewport = Viewport::new(640.0, 480.0);
    let scale = 480.0 * 0.12;

    let proj = camera.project(&points[0].position, viewport, false);
    assert_relative_eq!(proj.screen_x, 320.0 + 0.9394 * scale, epsilon = 1e-2);
    assert_relative_eq!(proj.screen_y, 240.0 + 0.3429 * scale, epsilon = 1e-2);
    assert_relative_eq!(proj.depth, 0.028, epsilon = 1e-6);
}

#[test]
fn test_viewer_state_gesture_session() {
    let mut state = ViewerState::with_mode(200, SpiralMode::Sphere);

    // Drag, then wheel, then pinch; zoom must stay in range throughout
    state.pointer_down(1, Vector2::new(0.0, 0.0));
    state.pointer_move(1, Vector2::new(30.0, 10.0));
    state.wheel(-4000.0, Modifiers::default());
    state.pointer_down(2, Vector2::new(300.0, 0.0));
    state.pointer_move(2, Vector2::new(3.0, 0.0));
    state.pointer_up(2);
    state.pointer_up(1);

    let zoom = state.camera().zoom;
    assert!((0.1..=5.0).contains(&zoom), "zoom {} out of range", zoom);

    // The scene reflects the mutated camera without error
    let scene = state.scene(Viewport::new(500.0, 500.0)).unwrap();
    assert_eq!(scene.points.len(), 46); // primes below 200

    // Reset restores the identity view
    state.reset_view();
    assert_eq!(state.camera().zoom, 1.0);
    assert_eq!(state.camera().rotation_x, 0.0);
    assert_eq!(state.camera().rotation_y, 0.0);
}

#[test]
fn test_recompute_on_parameter_change_is_total() {
    let mut state = ViewerState::with_mode(100, SpiralMode::Helix);
    let before = state.scene(Viewport::new(400.0, 400.0)).unwrap();
    assert_eq!(before.prime_count, 25);

    state
        .set_params(SpiralParams::Helix(HelixParams {
            step_angle: 0.5,
            radius: 2.0,
            pitch: 0.1,
        }))
        .unwrap();
    state.set_limit(30);

    let after = state.scene(Viewport::new(400.0, 400.0)).unwrap();
    assert_eq!(after.prime_count, 10);
    assert_eq!(after.points.len(), 10);
}
