//! Spiral point: one integer placed in 3D space.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One integer from the sequence 1..=N, mapped to a 3D position by a
/// spiral generator.
///
/// Points are immutable once produced; the whole cloud is regenerated
/// when the bound or the spiral parameters change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpiralPoint {
    /// The integer this point represents (1-based, dense, no gaps)
    pub index: u32,

    /// World-space position
    pub position: Vector3<f32>,
}

impl SpiralPoint {
    pub fn new(index: u32, x: f32, y: f32, z: f32) -> Self {
        Self {
            index,
            position: Vector3::new(x, y, z),
        }
    }
}
