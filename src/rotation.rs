use std::f32::consts::TAU;

use nalgebra::{Rotation2, Rotation3};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Euler angle triplet for an inclusion orientation, in radians.
///
/// Angles compose as `R = Rz(alpha) * Ry(beta) * Rx(gamma)`, i.e. the z
/// rotation is applied last in the fixed domain frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Euler {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Euler {
    pub fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self { alpha, beta, gamma }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Draws all three angles uniformly from `[0, 2*pi)`.
    pub fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        Self::new(
            rng.random_range(0.0..TAU),
            rng.random_range(0.0..TAU),
            rng.random_range(0.0..TAU),
        )
    }

    /// The composed rotation operator. nalgebra's roll-pitch-yaw constructor
    /// builds `Rz(yaw) * Ry(pitch) * Rx(roll)`, so gamma feeds the roll slot.
    pub fn rotation(&self) -> Rotation3<f32> {
        Rotation3::from_euler_angles(self.gamma, self.beta, self.alpha)
    }
}

/// Draws an in-plane angle uniformly from `[0, 2*pi)` for the 2d case.
pub fn sample_angle<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(0.0..TAU)
}

/// Standard 2x2 rotation matrix for an in-plane angle.
pub fn in_plane(theta: f32) -> Rotation2<f32> {
    Rotation2::new(theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_rotation_close(a: &Rotation3<f32>, b: &Rotation3<f32>) {
        for (x, y) in a.matrix().iter().zip(b.matrix().iter()) {
            assert!((x - y).abs() < 1e-5, "{x} vs {y}");
        }
    }

    #[test]
    fn identity_angles_give_identity_rotation() {
        assert_rotation_close(&Euler::identity().rotation(), &Rotation3::identity());
    }

    #[test]
    fn composition_is_z_then_y_then_x() {
        let euler = Euler::new(0.7, -1.2, 2.9);
        let expected = Rotation3::from_axis_angle(&Vector3::z_axis(), euler.alpha)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), euler.beta)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), euler.gamma);
        assert_rotation_close(&euler.rotation(), &expected);
    }

    #[test]
    fn sampled_angles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let euler = Euler::sample_uniform(&mut rng);
            for angle in [euler.alpha, euler.beta, euler.gamma] {
                assert!((0.0..TAU).contains(&angle));
            }
            let theta = sample_angle(&mut rng);
            assert!((0.0..TAU).contains(&theta));
        }
    }
}
