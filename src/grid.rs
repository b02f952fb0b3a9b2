use crate::error::ConfigError;

/// The voxel lattice a model is generated on.
///
/// Holds the grid dimensions and the two label values written into the output
/// array. `T` is the output element type; any `Clone + PartialEq` type works,
/// with `u8` and the digital-rock convention of solid `1` / pore `0` being the
/// usual choice. Immutable once constructed, which keeps the invariant that
/// the two labels differ.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainGrid<T> {
    nx: usize,
    ny: usize,
    nz: usize,
    background_value: T,
    inclusion_value: T,
}

impl<T: Clone + PartialEq> DomainGrid<T> {
    /// Planar grid for 2d models. The trailing axis is fixed at size 1 so 2d
    /// and 3d outputs share the same `(nx, ny, nz)` layout.
    pub fn new_2d(
        nx: usize,
        ny: usize,
        background_value: T,
        inclusion_value: T,
    ) -> Result<Self, ConfigError> {
        Self::new_3d(nx, ny, 1, background_value, inclusion_value)
    }

    pub fn new_3d(
        nx: usize,
        ny: usize,
        nz: usize,
        background_value: T,
        inclusion_value: T,
    ) -> Result<Self, ConfigError> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(ConfigError::InvalidDimensions { nx, ny, nz });
        }
        if background_value == inclusion_value {
            return Err(ConfigError::IndistinctLabels);
        }
        Ok(Self {
            nx,
            ny,
            nz,
            background_value,
            inclusion_value,
        })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn nz(&self) -> usize {
        self.nz
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    pub fn background_value(&self) -> &T {
        &self.background_value
    }

    pub fn inclusion_value(&self) -> &T {
        &self.inclusion_value
    }
}
