//! Generation pipeline for binary inclusion models.
//!
//! A generation call is a single synchronous pass with no I/O: validate,
//! resolve every random draw from one explicit stream, expand periodic
//! images, rasterize each instance independently in parallel, union the
//! masks, and write the two labels. All draws (centers first, then
//! per-inclusion rotations) complete before the parallel stage starts, so a
//! seeded run is bit-identical regardless of worker count; the union is
//! commutative and idempotent, so reduction order is irrelevant.

use nalgebra::{Rotation2, Rotation3};
use ndarray::{s, Array2, Array3, Zip};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::DomainGrid;
use crate::inclusion::{semi_axes_2d, semi_axes_3d, Inclusion2d, Inclusion3d, OrientationPlane};
use crate::rotation::{in_plane, sample_angle, Euler};
use crate::{periodic, placement, raster};

/// Controls for one generation call.
///
/// `orientation` selects the scaled axis for 3d models and is ignored by the
/// 2d generator, where the aspect ratio always scales the Y semi-axis.
/// `positions` overrides random center sampling when present; its shape must
/// be `(num_inclusions, 2)` or `(num_inclusions, 3)` to match the generator
/// dimensionality. Defaults follow the digital-rock convention: one circular
/// inclusion of radius 10, axis-aligned, non-periodic, unseeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InclusionSettings {
    pub num_inclusions: usize,
    pub radius: f32,
    pub aspect_ratio: f32,
    pub orientation: OrientationPlane,
    pub random_orientation: bool,
    pub positions: Option<Array2<f32>>,
    pub periodic: bool,
    pub seed: Option<u64>,
}

impl Default for InclusionSettings {
    fn default() -> Self {
        Self {
            num_inclusions: 1,
            radius: 10.0,
            aspect_ratio: 1.0,
            orientation: OrientationPlane::Xy,
            random_orientation: false,
            positions: None,
            periodic: false,
            seed: None,
        }
    }
}

impl InclusionSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !(self.aspect_ratio > 0.0) {
            return Err(ConfigError::InvalidAspectRatio(self.aspect_ratio));
        }
        Ok(())
    }
}

/// Generates a 2d binary model with elliptical inclusions.
///
/// The grid must be planar (`nz = 1`, see [`DomainGrid::new_2d`]); the output
/// keeps the trailing unit axis so 2d and 3d volumes share one layout.
/// Overlapping inclusions and periodic copies resolve by union: a voxel
/// covered by any instance carries the inclusion label.
pub fn generate_2d<T: Clone + PartialEq>(
    grid: &DomainGrid<T>,
    settings: &InclusionSettings,
) -> Result<Array3<T>, ConfigError> {
    settings.validate()?;
    if grid.nz() != 1 {
        return Err(ConfigError::NotPlanar(grid.nz()));
    }

    let extents = (grid.nx() as f32, grid.ny() as f32);
    let mut rng = placement::rng_for(settings.seed);
    let centers = placement::centers_2d(
        settings.num_inclusions,
        settings.positions.as_ref(),
        extents,
        &mut rng,
    )?;
    let rotations: Vec<Rotation2<f32>> = centers
        .iter()
        .map(|_| {
            if settings.random_orientation {
                in_plane(sample_angle(&mut rng))
            } else {
                Rotation2::identity()
            }
        })
        .collect();

    let semi_axes = semi_axes_2d(settings.radius, settings.aspect_ratio);
    let instances: Vec<Inclusion2d> = centers
        .into_iter()
        .zip(rotations)
        .flat_map(|(center, rotation)| {
            let inclusion = Inclusion2d {
                center,
                semi_axes,
                rotation,
            };
            let copies = if settings.periodic {
                periodic::images_2d(inclusion.center, inclusion.max_extent(), extents)
            } else {
                vec![inclusion.center]
            };
            copies
                .into_iter()
                .map(move |center| inclusion.translated(center))
        })
        .collect();

    let (nx, ny) = (grid.nx(), grid.ny());
    let mask = instances
        .par_iter()
        .map(|instance| raster::ellipse_mask(nx, ny, instance))
        .reduce(
            || Array2::from_elem((nx, ny), false),
            |union, mask| union | mask,
        );

    let mut volume = Array3::from_elem(grid.shape(), grid.background_value().clone());
    let mut plane = volume.slice_mut(s![.., .., 0]);
    Zip::from(&mut plane).and(&mask).for_each(|voxel, &inside| {
        if inside {
            *voxel = grid.inclusion_value().clone();
        }
    });
    Ok(volume)
}

/// Generates a 3d binary model with ellipsoidal inclusions.
///
/// The aspect ratio scales the semi-axis selected by `settings.orientation`
/// on the unrotated ellipsoid; a random rotation, when requested, is applied
/// afterward and does not change which axis was scaled.
pub fn generate_3d<T: Clone + PartialEq>(
    grid: &DomainGrid<T>,
    settings: &InclusionSettings,
) -> Result<Array3<T>, ConfigError> {
    settings.validate()?;

    let extents = (grid.nx() as f32, grid.ny() as f32, grid.nz() as f32);
    let mut rng = placement::rng_for(settings.seed);
    let centers = placement::centers_3d(
        settings.num_inclusions,
        settings.positions.as_ref(),
        extents,
        &mut rng,
    )?;
    let rotations: Vec<Rotation3<f32>> = centers
        .iter()
        .map(|_| {
            if settings.random_orientation {
                Euler::sample_uniform(&mut rng).rotation()
            } else {
                Rotation3::identity()
            }
        })
        .collect();

    let semi_axes = semi_axes_3d(settings.radius, settings.aspect_ratio, settings.orientation);
    let instances: Vec<Inclusion3d> = centers
        .into_iter()
        .zip(rotations)
        .flat_map(|(center, rotation)| {
            let inclusion = Inclusion3d {
                center,
                semi_axes,
                rotation,
            };
            let copies = if settings.periodic {
                periodic::images_3d(inclusion.center, inclusion.max_extent(), extents)
            } else {
                vec![inclusion.center]
            };
            copies
                .into_iter()
                .map(move |center| inclusion.translated(center))
        })
        .collect();

    let shape = grid.shape();
    let mask = instances
        .par_iter()
        .map(|instance| raster::ellipsoid_mask(shape, instance))
        .reduce(
            || Array3::from_elem(shape, false),
            |union, mask| union | mask,
        );

    let mut volume = Array3::from_elem(shape, grid.background_value().clone());
    Zip::from(&mut volume)
        .and(&mask)
        .for_each(|voxel, &inside| {
            if inside {
                *voxel = grid.inclusion_value().clone();
            }
        });
    Ok(volume)
}
