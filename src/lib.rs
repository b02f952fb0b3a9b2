//! Synthetic voxel models for digital rock physics.
//!
//! `rvegen` builds labeled 2D/3D binary voxel volumes containing elliptical
//! or ellipsoidal inclusions in a homogeneous background, optionally under
//! periodic boundary conditions and arbitrary 3D rotation. The generated
//! arrays serve as representative volume elements (RVEs) for downstream
//! property estimation; this crate only produces the labeled array and has
//! no I/O of its own.
//!
//! Generation is deterministic when seeded: every random draw comes from one
//! explicit stream resolved before the parallel rasterization stage, so the
//! same parameters always give a bit-identical volume.
//!
//! ```
//! use rvegen::{generate_3d, DomainGrid, InclusionSettings};
//!
//! let grid = DomainGrid::new_3d(50, 50, 50, 1u8, 0u8).unwrap();
//! let settings = InclusionSettings {
//!     num_inclusions: 5,
//!     radius: 6.0,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let volume = generate_3d(&grid, &settings).unwrap();
//! assert_eq!(volume.shape(), &[50, 50, 50]);
//! ```

pub mod error;
pub mod generator;
pub mod grid;
pub mod inclusion;
pub mod layered;
pub mod periodic;
pub mod placement;
pub mod raster;
pub mod rotation;

pub use error::ConfigError;
pub use generator::{generate_2d, generate_3d, InclusionSettings};
pub use grid::DomainGrid;
pub use inclusion::OrientationPlane;
pub use layered::{generate_layered, Layer, LayerFill, LayeredModel};
