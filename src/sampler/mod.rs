//! Coordinate sampler.
//!
//! Draws star positions uniformly over the field and serializes them as a
//! `box-shadow` value list.


use rand::Rng;

use crate::types::{Colour, ShadowPoint, FIELD_EXTENT};

/// Separator between `box-shadow` entries.
pub const SHADOW_SEPARATOR: &str = ", ";

/// Sample `count` points of one colour.
///
/// Each point draws `x` then `y`, independently and uniformly from
/// `0..=FIELD_EXTENT`.
pub fn sample_points<R: Rng + ?Sized>(rng: &mut R, count: usize, colour: Colour) -> Vec<ShadowPoint> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0..=FIELD_EXTENT);
            let y = rng.gen_range(0..=FIELD_EXTENT);
            ShadowPoint::new(x, y, colour)
        })
        .collect()
}

/// Sample `count` points and join them into a `box-shadow` value.
///
/// A count of zero yields an empty string.
pub fn sample_shadows<R: Rng + ?Sized>(rng: &mut R, count: usize, colour: Colour) -> String {
    join_shadows(&sample_points(rng, count, colour))
}

/// Join points into a `box-shadow` value in their given order.
pub fn join_shadows(points: &[ShadowPoint]) -> String {
    points
        .iter()
        .map(ShadowPoint::to_string)
        .collect::<Vec<_>>()
        .join(SHADOW_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let shadows = sample_shadows(&mut rng, 700, Colour::GOLD);

        assert_eq!(shadows.split(SHADOW_SEPARATOR).count(), 700);
        assert!(!shadows.ends_with(','));
        assert!(!shadows.ends_with(' '));
    }

    #[test]
    fn test_sample_zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample_shadows(&mut rng, 0, Colour::AMBER), "");
    }

    #[test]
    fn test_single_entry_has_no_separator() {
        let mut rng = StdRng::seed_from_u64(3);
        let shadows = sample_shadows(&mut rng, 1, Colour::AMBER);

        assert!(!shadows.contains(','));
        assert!(shadows.ends_with("px #ffb700"));
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = sample_shadows(&mut StdRng::seed_from_u64(42), 50, Colour::GOLD);
        let b = sample_shadows(&mut StdRng::seed_from_u64(42), 50, Colour::GOLD);
        let c = sample_shadows(&mut StdRng::seed_from_u64(43), 50, Colour::GOLD);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_join_preserves_order() {
        let points = [
            ShadowPoint::new(1, 2, Colour::GOLD),
            ShadowPoint::new(2000, 0, Colour::GOLD),
        ];
        assert_eq!(join_shadows(&points), "1px 2px #ffd700, 2000px 0px #ffd700");
    }

    #[test]
    fn test_points_reach_both_halves_of_field() {
        let mut rng = StdRng::seed_from_u64(11);
        let points = sample_points(&mut rng, 1000, Colour::GOLD);

        assert!(points.iter().any(|p| p.x < FIELD_EXTENT / 2));
        assert!(points.iter().any(|p| p.x > FIELD_EXTENT / 2));
        assert!(points.iter().any(|p| p.y < FIELD_EXTENT / 2));
        assert!(points.iter().any(|p| p.y > FIELD_EXTENT / 2));
    }
}
