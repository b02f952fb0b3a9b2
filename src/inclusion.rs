use std::str::FromStr;

use nalgebra::{Rotation2, Rotation3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Plane in which an unrotated 3d inclusion lies.
///
/// The variant selects which single semi-axis of the unrotated ellipsoid is
/// scaled by the aspect ratio; the other two keep the plain radius. With an
/// aspect ratio below 1 the ellipsoid is flattened out of the named plane:
/// `Xy` scales the Z axis, `Zx` scales Y, `Zy` scales X. This mapping is
/// applied before any random rotation, and rotation never changes which axis
/// was scaled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationPlane {
    #[default]
    Xy,
    Zx,
    Zy,
}

impl OrientationPlane {
    /// Index of the semi-axis scaled by the aspect ratio.
    pub fn scaled_axis(self) -> usize {
        match self {
            OrientationPlane::Xy => 2,
            OrientationPlane::Zx => 1,
            OrientationPlane::Zy => 0,
        }
    }
}

impl FromStr for OrientationPlane {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xy" => Ok(OrientationPlane::Xy),
            "zx" => Ok(OrientationPlane::Zx),
            "zy" => Ok(OrientationPlane::Zy),
            other => Err(ConfigError::UnknownOrientation(other.to_string())),
        }
    }
}

/// Semi-axis lengths of an unrotated ellipsoid.
pub fn semi_axes_3d(radius: f32, aspect_ratio: f32, plane: OrientationPlane) -> Vector3<f32> {
    let mut axes = Vector3::repeat(radius);
    axes[plane.scaled_axis()] *= aspect_ratio;
    axes
}

/// Semi-axis lengths of an unrotated ellipse. The aspect ratio scales the Y
/// semi-axis.
pub fn semi_axes_2d(radius: f32, aspect_ratio: f32) -> Vector2<f32> {
    Vector2::new(radius, radius * aspect_ratio)
}

/// One placed ellipse instance, fully resolved: center, semi-axes and
/// rotation. Periodic images are the same record with a translated center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inclusion2d {
    pub center: Vector2<f32>,
    pub semi_axes: Vector2<f32>,
    pub rotation: Rotation2<f32>,
}

impl Inclusion2d {
    /// Largest semi-axis, the bounding extent used for periodic-image
    /// decisions. Rotation cannot enlarge it.
    pub fn max_extent(&self) -> f32 {
        self.semi_axes.max()
    }

    pub fn translated(&self, center: Vector2<f32>) -> Self {
        Self { center, ..*self }
    }
}

/// One placed ellipsoid instance. See [`Inclusion2d`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inclusion3d {
    pub center: Vector3<f32>,
    pub semi_axes: Vector3<f32>,
    pub rotation: Rotation3<f32>,
}

impl Inclusion3d {
    pub fn max_extent(&self) -> f32 {
        self.semi_axes.max()
    }

    pub fn translated(&self, center: Vector3<f32>) -> Self {
        Self { center, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_to_scaled_axis_mapping() {
        assert_eq!(OrientationPlane::Xy.scaled_axis(), 2);
        assert_eq!(OrientationPlane::Zx.scaled_axis(), 1);
        assert_eq!(OrientationPlane::Zy.scaled_axis(), 0);
    }

    #[test]
    fn oblate_xy_scales_only_z() {
        let axes = semi_axes_3d(6.0, 0.5, OrientationPlane::Xy);
        assert_eq!(axes, Vector3::new(6.0, 6.0, 3.0));
    }

    #[test]
    fn zy_scales_only_x() {
        let axes = semi_axes_3d(4.0, 2.0, OrientationPlane::Zy);
        assert_eq!(axes, Vector3::new(8.0, 4.0, 4.0));
    }

    #[test]
    fn parses_known_tokens() {
        assert_eq!("xy".parse::<OrientationPlane>(), Ok(OrientationPlane::Xy));
        assert_eq!("zx".parse::<OrientationPlane>(), Ok(OrientationPlane::Zx));
        assert_eq!("zy".parse::<OrientationPlane>(), Ok(OrientationPlane::Zy));
    }

    #[test]
    fn rejects_unknown_token() {
        let err = "yz".parse::<OrientationPlane>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownOrientation("yz".to_string()));
    }

    #[test]
    fn max_extent_is_largest_semi_axis() {
        let inclusion = Inclusion3d {
            center: Vector3::zeros(),
            semi_axes: semi_axes_3d(5.0, 2.0, OrientationPlane::Zx),
            rotation: Rotation3::identity(),
        };
        assert_eq!(inclusion.max_extent(), 10.0);
    }
}
