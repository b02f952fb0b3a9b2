//! Periodic-image enumeration for seamless boundary wraparound.
//!
//! An inclusion whose bounding extent crosses a domain face must reappear at
//! the opposite face for the volume to tile without seams. Each axis
//! contributes the identity offset plus `+L` when the low boundary is crossed
//! and `-L` when the high boundary is crossed; the cartesian product over
//! axes enumerates every face, edge and corner image in one pass, so one
//! inclusion expands to at most 9 copies in 2d and 27 in 3d. Copies whose
//! translated bounding box misses the domain entirely are dropped before any
//! rasterization work. Expansion is independent per inclusion; copies from
//! different inclusions only ever meet in the final union.

use itertools::Itertools;
use nalgebra::{Vector2, Vector3};

/// Translated centers for one 2d inclusion under periodic boundary
/// conditions, the untranslated original included.
pub fn images_2d(center: Vector2<f32>, extent: f32, lengths: (f32, f32)) -> Vec<Vector2<f32>> {
    images(&[center.x, center.y], extent, &[lengths.0, lengths.1])
        .into_iter()
        .map(|c| Vector2::new(c[0], c[1]))
        .collect()
}

/// Translated centers for one 3d inclusion under periodic boundary
/// conditions, the untranslated original included.
pub fn images_3d(
    center: Vector3<f32>,
    extent: f32,
    lengths: (f32, f32, f32),
) -> Vec<Vector3<f32>> {
    images(
        &[center.x, center.y, center.z],
        extent,
        &[lengths.0, lengths.1, lengths.2],
    )
    .into_iter()
    .map(|c| Vector3::new(c[0], c[1], c[2]))
    .collect()
}

fn images(center: &[f32], extent: f32, lengths: &[f32]) -> Vec<Vec<f32>> {
    center
        .iter()
        .zip(lengths)
        .map(|(&c, &l)| axis_shifts(c, extent, l))
        .multi_cartesian_product()
        .map(|shift| {
            center
                .iter()
                .zip(&shift)
                .map(|(&c, &s)| c + s)
                .collect::<Vec<_>>()
        })
        .filter(|translated| {
            translated
                .iter()
                .zip(lengths)
                .all(|(&c, &l)| overlaps(c, extent, l))
        })
        .collect()
}

/// Offsets along one axis: the identity, plus the opposite-boundary image for
/// each domain face the bounding extent crosses. A sufficiently large
/// inclusion crosses both faces and yields all three offsets.
fn axis_shifts(center: f32, extent: f32, length: f32) -> Vec<f32> {
    let mut shifts = vec![0.0];
    if center - extent < 0.0 {
        shifts.push(length);
    }
    if center + extent >= length {
        shifts.push(-length);
    }
    shifts
}

fn overlaps(center: f32, extent: f32, length: f32) -> bool {
    center - extent <= length && center + extent >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_inclusion_keeps_only_the_original() {
        let copies = images_2d(Vector2::new(5.0, 5.0), 2.0, (10.0, 10.0));
        assert_eq!(copies, vec![Vector2::new(5.0, 5.0)]);
    }

    #[test]
    fn corner_inclusion_wraps_to_four_copies() {
        let mut copies = images_2d(Vector2::new(0.0, 0.0), 3.0, (10.0, 10.0));
        copies.sort_by(|a, b| (a.x, a.y).partial_cmp(&(b.x, b.y)).unwrap());
        assert_eq!(
            copies,
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(0.0, 10.0),
                Vector2::new(10.0, 0.0),
                Vector2::new(10.0, 10.0),
            ]
        );
    }

    #[test]
    fn corner_inclusion_wraps_to_eight_copies_in_3d() {
        let copies = images_3d(Vector3::new(0.5, 0.5, 0.5), 2.0, (10.0, 10.0, 10.0));
        assert_eq!(copies.len(), 8);
    }

    #[test]
    fn face_crossing_yields_a_single_extra_copy() {
        let copies = images_3d(Vector3::new(1.0, 5.0, 5.0), 2.0, (10.0, 10.0, 10.0));
        assert_eq!(copies.len(), 2);
        assert!(copies.contains(&Vector3::new(11.0, 5.0, 5.0)));
    }

    #[test]
    fn oversized_inclusion_stays_within_the_cardinality_bound() {
        let copies = images_3d(Vector3::new(5.0, 5.0, 5.0), 40.0, (10.0, 10.0, 10.0));
        assert!(copies.len() <= 27);
        // crosses every face, so all 27 images intersect the domain
        assert_eq!(copies.len(), 27);
    }

    #[test]
    fn copies_missing_the_domain_are_culled() {
        // center far outside on the low-x side: the original cannot touch the
        // grid, only its wrapped image can
        let copies = images_2d(Vector2::new(-5.0, 5.0), 2.0, (10.0, 10.0));
        assert_eq!(copies, vec![Vector2::new(5.0, 5.0)]);
    }
}
