//! Voxel-accurate rasterization of single inclusion instances.
//!
//! Each voxel center is translated relative to the inclusion center, mapped
//! into the inclusion's local frame with the inverse rotation, and classified
//! with the quadratic membership test `sum((x_i / a_i)^2) <= 1`. Voxels are
//! strictly inside or outside; there is no interpolation or anti-aliasing.
//! Rasterization is a pure function of the grid shape and one instance, so
//! instances can be evaluated in parallel and unioned in any order.

use nalgebra::{Vector2, Vector3};
use ndarray::{Array2, Array3};

use crate::inclusion::{Inclusion2d, Inclusion3d};

/// Boolean mask of the voxels inside one (possibly rotated) ellipse.
pub fn ellipse_mask(nx: usize, ny: usize, inclusion: &Inclusion2d) -> Array2<bool> {
    let inverse = inclusion.rotation.inverse();
    Array2::from_shape_fn((nx, ny), |(i, j)| {
        let offset = Vector2::new(i as f32, j as f32) - inclusion.center;
        let local = inverse * offset;
        (local.x / inclusion.semi_axes.x).powi(2) + (local.y / inclusion.semi_axes.y).powi(2)
            <= 1.0
    })
}

/// Boolean mask of the voxels inside one (possibly rotated) ellipsoid.
pub fn ellipsoid_mask(shape: (usize, usize, usize), inclusion: &Inclusion3d) -> Array3<bool> {
    let inverse = inclusion.rotation.inverse();
    Array3::from_shape_fn(shape, |(i, j, k)| {
        let offset = Vector3::new(i as f32, j as f32, k as f32) - inclusion.center;
        let local = inverse * offset;
        (local.x / inclusion.semi_axes.x).powi(2)
            + (local.y / inclusion.semi_axes.y).powi(2)
            + (local.z / inclusion.semi_axes.z).powi(2)
            <= 1.0
    })
}
