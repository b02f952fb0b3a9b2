use nalgebra::{Vector2, Vector3};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;

/// Random stream for a single generation call.
///
/// The stream is an explicit instance threaded through the pipeline, never a
/// process-wide singleton, so seeded runs reproduce bit-identical draws even
/// under concurrent or repeated invocations. Without a seed the stream pulls
/// from OS entropy and runs are not reproducible.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Inclusion centers for a 2d model: the explicit position array if given,
/// otherwise uniform draws over the domain extents. Centers may lie on or
/// outside the domain; only the position array shape is constrained.
pub fn centers_2d(
    count: usize,
    positions: Option<&Array2<f32>>,
    extents: (f32, f32),
    rng: &mut StdRng,
) -> Result<Vec<Vector2<f32>>, ConfigError> {
    match positions {
        Some(positions) => {
            check_shape(positions, count, 2)?;
            Ok(positions
                .rows()
                .into_iter()
                .map(|row| Vector2::new(row[0], row[1]))
                .collect())
        }
        None => {
            let (lx, ly) = extents;
            Ok((0..count)
                .map(|_| Vector2::new(rng.random_range(0.0..lx), rng.random_range(0.0..ly)))
                .collect())
        }
    }
}

/// Inclusion centers for a 3d model. See [`centers_2d`].
pub fn centers_3d(
    count: usize,
    positions: Option<&Array2<f32>>,
    extents: (f32, f32, f32),
    rng: &mut StdRng,
) -> Result<Vec<Vector3<f32>>, ConfigError> {
    match positions {
        Some(positions) => {
            check_shape(positions, count, 3)?;
            Ok(positions
                .rows()
                .into_iter()
                .map(|row| Vector3::new(row[0], row[1], row[2]))
                .collect())
        }
        None => {
            let (lx, ly, lz) = extents;
            Ok((0..count)
                .map(|_| {
                    Vector3::new(
                        rng.random_range(0.0..lx),
                        rng.random_range(0.0..ly),
                        rng.random_range(0.0..lz),
                    )
                })
                .collect())
        }
    }
}

fn check_shape(positions: &Array2<f32>, count: usize, dim: usize) -> Result<(), ConfigError> {
    if positions.nrows() != count || positions.ncols() != dim {
        return Err(ConfigError::PositionShape {
            expected_rows: count,
            expected_cols: dim,
            rows: positions.nrows(),
            cols: positions.ncols(),
        });
    }
    Ok(())
}
