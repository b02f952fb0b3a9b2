//! Layered (VTI) model generation.
//!
//! Builds horizontal layers perpendicular to Z, the standard construction for
//! Backus-averaging and anisotropy studies: either many thin repeating layers
//! or a single scaled stack. Fractional thicknesses accumulate in floating
//! point and are rounded only at voxel-index conversion to keep drift out of
//! the layer boundaries.

use ndarray::{s, Array3};
use serde::Serialize;

use crate::error::ConfigError;

/// One slab of a layered stack: a thickness in pattern units and the phase
/// label it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer<T> {
    pub thickness: f32,
    pub phase: T,
}

/// How the layer pattern fills the vertical extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayerFill {
    /// Cycle the pattern until `nz` is filled (fine layering, Backus regime).
    Repeat,
    /// Scale the pattern so exactly this many complete cycles fill `nz`.
    Cycles(usize),
    /// Scale the pattern so it occurs once and fills `nz` exactly
    /// (macroscopic two-/multi-layer model).
    ScaleToFit,
}

/// How the stack was actually laid out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerReport {
    /// Complete pattern cycles placed.
    pub cycles_completed: usize,
    /// Fraction of the final incomplete cycle, in `[0, 1]`.
    pub partial_cycle: f32,
    /// Individual layer slabs placed.
    pub total_layers: usize,
    /// Per-layer thickness in voxels after mode scaling.
    pub thicknesses_voxels: Vec<f32>,
    /// Fill mode the stack was generated with.
    pub fill: LayerFill,
}

/// A layered volume together with its layout report.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredModel<T> {
    pub volume: Array3<T>,
    pub report: LayerReport,
}

/// Generates a vertically layered model of shape `(nx, ny, nz)`.
///
/// Rounding can leave a sub-voxel gap at the top of the stack; it is filled
/// with the last phase so the volume is always fully covered. Every layer
/// occupies at least one voxel slab even when its scaled thickness rounds to
/// zero.
pub fn generate_layered<T: Clone>(
    nx: usize,
    ny: usize,
    nz: usize,
    layers: &[Layer<T>],
    fill: LayerFill,
) -> Result<LayeredModel<T>, ConfigError> {
    if nx == 0 || ny == 0 || nz == 0 {
        return Err(ConfigError::InvalidDimensions { nx, ny, nz });
    }
    if layers.is_empty() {
        return Err(ConfigError::EmptyLayers);
    }
    for layer in layers {
        if !(layer.thickness > 0.0) {
            return Err(ConfigError::InvalidThickness(layer.thickness));
        }
    }

    let pattern_sum: f32 = layers.iter().map(|layer| layer.thickness).sum();
    let (scale, repeat, cycle_cap) = match fill {
        LayerFill::Repeat => (1.0, true, None),
        LayerFill::Cycles(cycles) => {
            if cycles == 0 {
                return Err(ConfigError::InvalidCycles);
            }
            (nz as f32 / (cycles as f32 * pattern_sum), true, Some(cycles))
        }
        LayerFill::ScaleToFit => (nz as f32 / pattern_sum, false, None),
    };
    let thicknesses: Vec<f32> = layers.iter().map(|layer| layer.thickness * scale).collect();

    let mut volume = Array3::from_elem((nx, ny, nz), layers[0].phase.clone());
    let mut current_z = 0.0f32;
    let mut layer_idx = 0;
    let mut last_end = 0;
    let mut total_layers = 0;
    let mut cycles_completed = 0;

    while current_z < nz as f32 {
        let z_start = current_z.round() as usize;
        if z_start >= nz {
            break;
        }
        let thickness = thicknesses[layer_idx];
        let z_end = (((current_z + thickness).round() as usize).max(z_start + 1)).min(nz);
        volume
            .slice_mut(s![.., .., z_start..z_end])
            .fill(layers[layer_idx].phase.clone());
        last_end = z_end;
        total_layers += 1;
        current_z += thickness;

        if repeat {
            layer_idx = (layer_idx + 1) % layers.len();
            if layer_idx == 0 {
                cycles_completed += 1;
            }
        } else if layer_idx + 1 < layers.len() {
            layer_idx += 1;
        }
        // a non-repeating stack keeps extending its last layer

        if let Some(cap) = cycle_cap {
            if cycles_completed >= cap {
                break;
            }
        }
    }

    // rounding gap at the top: extend the last phase
    if last_end < nz {
        volume
            .slice_mut(s![.., .., last_end..nz])
            .fill(layers[layers.len() - 1].phase.clone());
    }

    let scaled_sum = pattern_sum * scale;
    let covered_by_complete = cycles_completed as f32 * scaled_sum;
    let partial_cycle = if repeat && current_z > covered_by_complete {
        ((current_z - covered_by_complete) / scaled_sum).clamp(0.0, 1.0)
    } else {
        0.0
    };

    Ok(LayeredModel {
        volume,
        report: LayerReport {
            cycles_completed,
            partial_cycle,
            total_layers,
            thicknesses_voxels: thicknesses,
            fill,
        },
    })
}
