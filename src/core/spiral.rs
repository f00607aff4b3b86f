//! Spiral geometry generators.
//!
//! Four parametric families map the integer sequence 1..=N onto 3D
//! point clouds:
//!
//! - **Helix**: the number line wrapped around a cylinder of fixed
//!   radius with linearly increasing height
//! - **Sphere**: a spherical spiral with near-uniform coverage of the
//!   unit sphere regardless of N
//! - **Cone**: a planar Archimedean spiral extruded upward with linear
//!   radius and height growth
//! - **Layers**: consecutive integers grouped into fixed-size rings
//!   stacked along z, one ring per block
//!
//! Every generator is a pure function of `(N, params)`: identical inputs
//! produce identical output, exactly N points, dense indices 1..=N.

use serde::{Deserialize, Serialize};

use crate::core::point::SpiralPoint;

/// The spiral family used to place integers in space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiralMode {
    Helix,
    Sphere,
    Cone,
    Layers,
}

/// Helix: `t = n·step`, `(R·cos t, R·sin t, pitch·t)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HelixParams {
    /// Angle advanced per integer (radians)
    pub step_angle: f32,
    /// Cylinder radius
    pub radius: f32,
    /// Height gained per radian of sweep
    pub pitch: f32,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            step_angle: 0.35,
            radius: 1.0,
            pitch: 0.08,
        }
    }
}

/// Spherical spiral: z uniform in [-1, 1], azimuth `n·step`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    /// Azimuth advanced per integer (radians)
    pub step_angle: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self { step_angle: 0.35 }
    }
}

/// Conical Archimedean spiral: `r = a + b·t`, `z = c·t` with `t = n·step`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConeParams {
    /// Angle advanced per integer (radians)
    pub step_angle: f32,
    /// Base radius `a`
    pub base_radius: f32,
    /// Radial growth `b` per radian
    pub growth: f32,
    /// Height growth `c` per radian
    pub climb: f32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            step_angle: 0.35,
            base_radius: 0.2,
            growth: 0.06,
            climb: 0.05,
        }
    }
}

/// Layered rings: blocks of `block_size` consecutive integers form one
/// ring; ring number is the integer z height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerParams {
    /// Angle between neighbors within a ring (radians)
    pub step_angle: f32,
    /// Ring radius
    pub layer_radius: f32,
    /// Integers per ring; values below 1 are floored to 1
    pub block_size: u32,
}

impl Default for LayerParams {
    fn default() -> Self {
        Self {
            step_angle: 0.35,
            layer_radius: 3.0,
            block_size: 200,
        }
    }
}

/// Mode-tagged generator parameters, immutable during a generation call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SpiralParams {
    Helix(HelixParams),
    Sphere(SphereParams),
    Cone(ConeParams),
    Layers(LayerParams),
}

impl SpiralParams {
    /// Default parameters for a given mode.
    pub fn for_mode(mode: SpiralMode) -> Self {
        match mode {
            SpiralMode::Helix => Self::Helix(HelixParams::default()),
            SpiralMode::Sphere => Self::Sphere(SphereParams::default()),
            SpiralMode::Cone => Self::Cone(ConeParams::default()),
            SpiralMode::Layers => Self::Layers(LayerParams::default()),
        }
    }

    pub fn mode(&self) -> SpiralMode {
        match self {
            Self::Helix(_) => SpiralMode::Helix,
            Self::Sphere(_) => SpiralMode::Sphere,
            Self::Cone(_) => SpiralMode::Cone,
            Self::Layers(_) => SpiralMode::Layers,
        }
    }

    /// Place the integers 1..=n in 3D space. `n = 0` yields an empty
    /// sequence.
    pub fn generate(&self, n: u32) -> Vec<SpiralPoint> {
        match self {
            Self::Helix(p) => helix_points(n, p),
            Self::Sphere(p) => sphere_points(n, p),
            Self::Cone(p) => cone_points(n, p),
            Self::Layers(p) => layer_points(n, p),
        }
    }
}

/// Wrap the number line around a cylinder of fixed radius.
pub fn helix_points(n: u32, params: &HelixParams) -> Vec<SpiralPoint> {
    if n == 0 {
        return Vec::new();
    }
    let mut points = Vec::with_capacity(n as usize);
    for i in 1..=n {
        let t = i as f32 * params.step_angle;
        points.push(SpiralPoint::new(
            i,
            params.radius * t.cos(),
            params.radius * t.sin(),
            params.pitch * t,
        ));
    }
    points
}

/// Spherical spiral with near-uniform sphere coverage.
///
/// The z coordinate sweeps [-1, 1] uniformly over the sequence; with a
/// single point the denominator floors to 1 and the point sits at the
/// south pole (z = -1, r = 0).
pub fn sphere_points(n: u32, params: &SphereParams) -> Vec<SpiralPoint> {
    if n == 0 {
        return Vec::new();
    }
    let denom = (n - 1).max(1) as f32;
    let mut points = Vec::with_capacity(n as usize);
    for i in 1..=n {
        let z = 2.0 * (i - 1) as f32 / denom - 1.0;
        let r = (1.0 - z * z).max(0.0).sqrt();
        let theta = i as f32 * params.step_angle;
        points.push(SpiralPoint::new(i, r * theta.cos(), r * theta.sin(), z));
    }
    points
}

/// Archimedean spiral extruded into a cone.
pub fn cone_points(n: u32, params: &ConeParams) -> Vec<SpiralPoint> {
    if n == 0 {
        return Vec::new();
    }
    let mut points = Vec::with_capacity(n as usize);
    for i in 1..=n {
        let t = i as f32 * params.step_angle;
        let r = params.base_radius + params.growth * t;
        points.push(SpiralPoint::new(
            i,
            r * t.cos(),
            r * t.sin(),
            params.climb * t,
        ));
    }
    points
}

/// Fixed-size rings of consecutive integers stacked along z.
pub fn layer_points(n: u32, params: &LayerParams) -> Vec<SpiralPoint> {
    if n == 0 {
        return Vec::new();
    }
    let block = params.block_size.max(1);
    let mut points = Vec::with_capacity(n as usize);
    for i in 1..=n {
        let layer = (i - 1) / block;
        let idx_in_layer = (i - 1) % block;
        let theta = idx_in_layer as f32 * params.step_angle;
        points.push(SpiralPoint::new(
            i,
            params.layer_radius * theta.cos(),
            params.layer_radius * theta.sin(),
            layer as f32,
        ));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_modes_length_matches_n() {
        for mode in [
            SpiralMode::Helix,
            SpiralMode::Sphere,
            SpiralMode::Cone,
            SpiralMode::Layers,
        ] {
            let params = SpiralParams::for_mode(mode);
            for n in [0u32, 1, 2, 17, 500] {
                let points = params.generate(n);
                assert_eq!(points.len(), n as usize, "mode {:?}, n={}", mode, n);
                // Dense 1..=N indices, no gaps or duplicates
                for (k, p) in points.iter().enumerate() {
                    assert_eq!(p.index, k as u32 + 1);
                }
            }
        }
    }

    #[test]
    fn test_empty_iff_n_zero() {
        for mode in [
            SpiralMode::Helix,
            SpiralMode::Sphere,
            SpiralMode::Cone,
            SpiralMode::Layers,
        ] {
            let params = SpiralParams::for_mode(mode);
            assert!(params.generate(0).is_empty());
            assert!(!params.generate(1).is_empty());
        }
    }

    #[test]
    fn test_helix_first_point_golden() {
        // t = 0.35, x = cos(0.35), y = sin(0.35), z = 0.08 * 0.35
        let params = HelixParams {
            step_angle: 0.35,
            radius: 1.0,
            pitch: 0.08,
        };
        let points = helix_points(1, &params);
        assert_relative_eq!(points[0].position.x, 0.9394, epsilon = 1e-4);
        assert_relative_eq!(points[0].position.y, 0.3429, epsilon = 1e-4);
        assert_relative_eq!(points[0].position.z, 0.028, epsilon = 1e-6);
    }

    #[test]
    fn test_helix_radius_is_constant() {
        let params = HelixParams::default();
        for p in helix_points(100, &params) {
            let r = (p.position.x * p.position.x + p.position.y * p.position.y).sqrt();
            assert_relative_eq!(r, params.radius, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_sphere_single_point_at_south_pole() {
        let points = sphere_points(1, &SphereParams::default());
        assert_relative_eq!(points[0].position.z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(points[0].position.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(points[0].position.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_points_lie_on_unit_sphere() {
        for p in sphere_points(250, &SphereParams::default()) {
            assert_relative_eq!(p.position.norm(), 1.0, epsilon = 1e-5);
        }
        // z sweeps the poles
        let points = sphere_points(11, &SphereParams::default());
        assert_relative_eq!(points[0].position.z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(points[10].position.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cone_radius_and_height_grow_linearly() {
        let params = ConeParams {
            step_angle: 0.5,
            base_radius: 0.2,
            growth: 0.06,
            climb: 0.05,
        };
        let points = cone_points(3, &params);
        // n=2: t=1.0, r=0.26, z=0.05
        let p = &points[1];
        let r = (p.position.x * p.position.x + p.position.y * p.position.y).sqrt();
        assert_relative_eq!(r, 0.26, epsilon = 1e-5);
        assert_relative_eq!(p.position.z, 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_layer_block_boundaries() {
        let params = LayerParams {
            step_angle: 0.35,
            layer_radius: 3.0,
            block_size: 200,
        };
        let points = layer_points(201, &params);
        // n=1 and n=200 share layer 0; n=201 opens layer 1 at angle 0
        assert_eq!(points[0].position.z, 0.0);
        assert_eq!(points[199].position.z, 0.0);
        assert_eq!(points[200].position.z, 1.0);
        assert_relative_eq!(points[200].position.x, 3.0, epsilon = 1e-5);
        assert_relative_eq!(points[200].position.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_layer_block_size_floored_to_one() {
        let params = LayerParams {
            step_angle: 0.35,
            layer_radius: 3.0,
            block_size: 0,
        };
        let points = layer_points(3, &params);
        // With block size 1, every integer is its own ring
        assert_eq!(points[0].position.z, 0.0);
        assert_eq!(points[1].position.z, 1.0);
        assert_eq!(points[2].position.z, 2.0);
    }

    #[test]
    fn test_generators_are_deterministic() {
        let params = SpiralParams::for_mode(SpiralMode::Cone);
        assert_eq!(params.generate(64), params.generate(64));
    }
}
