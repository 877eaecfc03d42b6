//! Swept-sphere collision test
//!
//! A single-frame discrete sweep: given two spheres and the relative
//! displacement covered this frame, decide whether they touch at any point
//! along that displacement. This is not an exact continuous-time impact
//! test, which is acceptable for small frame intervals.

use crate::math::Vec4;

/// Returns whether the spheres collide within this frame's relative motion.
///
/// `displacement` is the relative displacement of sphere A with respect to
/// sphere B over the frame (already scaled by dt). Only the xyz components
/// of the vectors are read.
///
/// A zero displacement never reports a collision, even for spheres that
/// already overlap: no relative motion means no new contact this frame.
pub fn collides(
    pos_a: Vec4,
    pos_b: Vec4,
    radius_a: f32,
    radius_b: f32,
    displacement: Vec4,
) -> bool {
    // Vector from the moving sphere's center to the other center
    let c = pos_b - pos_a;
    let radii_sum = radius_a + radius_b;

    // Early escape: can't close the gap this frame
    let mag = displacement.length3();
    if mag < c.length3() - radii_sum {
        return false;
    }

    // No relative motion, nothing new can touch
    if displacement.is_zero3() {
        return false;
    }

    let n = displacement.normalize();
    let d = n.dot3(c);
    // Make sure the spheres are moving towards each other
    if d < 0.0 {
        return false;
    }

    let f = c.dot3(c) - d * d;
    let radii_sum_sq = radii_sum * radii_sum;
    if f >= radii_sum_sq {
        return false;
    }

    // Guard against a negative radicand from floating-point error
    let t = radii_sum_sq - f;
    if t < 0.0 {
        return false;
    }

    // Distance along n at which the spheres first touch
    let distance = d - t.sqrt();
    mag >= distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stationary_far_apart() {
        let a = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vec4::new(10.0, 0.0, 0.0, 1.0);
        assert!(!collides(a, b, 1.0, 1.0, Vec4::ZERO));
    }

    #[test]
    fn test_approach_hits() {
        // Gap of 8 between surfaces, displacement of 9 along the line of centers
        let a = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vec4::new(10.0, 0.0, 0.0, 1.0);
        let movement = Vec4::new(9.0, 0.0, 0.0, 0.0);
        assert!(collides(a, b, 1.0, 1.0, movement));
    }

    #[test]
    fn test_approach_falls_short() {
        let a = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vec4::new(10.0, 0.0, 0.0, 1.0);
        let movement = Vec4::new(5.0, 0.0, 0.0, 0.0);
        assert!(!collides(a, b, 1.0, 1.0, movement));
    }

    #[test]
    fn test_separating_never_hits() {
        let a = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vec4::new(3.0, 0.0, 0.0, 1.0);
        let movement = Vec4::new(-100.0, 0.0, 0.0, 0.0);
        assert!(!collides(a, b, 1.0, 1.0, movement));
    }

    #[test]
    fn test_passing_to_the_side() {
        // Closest approach is further than the combined radius
        let a = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vec4::new(10.0, 5.0, 0.0, 1.0);
        let movement = Vec4::new(100.0, 0.0, 0.0, 0.0);
        assert!(!collides(a, b, 1.0, 1.0, movement));
    }

    #[test]
    fn test_overlapping_with_motion_hits() {
        let a = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let movement = Vec4::new(0.5, 0.0, 0.0, 0.0);
        assert!(collides(a, b, 1.0, 1.0, movement));
    }

    #[test]
    fn test_overlapping_but_stationary_does_not_hit() {
        // Spheres of radius 0.2 and 0.5 with centers 0.05 apart overlap
        // heavily, but with no relative motion nothing is reported.
        let a = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vec4::new(0.05, 0.0, 0.0, 1.0);
        assert!(!collides(a, b, 0.2, 0.5, Vec4::ZERO));
    }

    #[test]
    fn test_symmetric_under_swap() {
        let a = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vec4::new(10.0, 1.0, -2.0, 1.0);
        let movement = Vec4::new(9.5, 0.5, -1.0, 0.0);

        let forward = collides(a, b, 1.0, 2.0, movement);
        let swapped = collides(b, a, 2.0, 1.0, -movement);
        assert_eq!(forward, swapped);

        let short = Vec4::new(2.0, 0.0, 0.0, 0.0);
        assert_eq!(
            collides(a, b, 1.0, 2.0, short),
            collides(b, a, 2.0, 1.0, -short)
        );
    }

    #[test]
    fn test_glancing_contact() {
        // Displacement exactly reaches the first touch distance
        let a = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vec4::new(4.0, 0.0, 0.0, 1.0);
        // First contact at distance 4 - (1 + 1) = 2 along +x
        let movement = Vec4::new(2.0, 0.0, 0.0, 0.0);
        assert!(collides(a, b, 1.0, 1.0, movement));
    }
}
