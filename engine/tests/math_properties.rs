//! Math Property Tests
//!
//! Property checks for angle normalization, 2D rotation, rect overlap,
//! layer masks and distance checks.

use engine_ext::layers::LayerMask;
use engine_ext::math::{Rect, normalize_angle, rotate, within_annulus, within_range};
use glam::{Vec2, Vec3};
use proptest::prelude::*;

/// Circular distance between two angles in degrees.
fn angle_gap(a: f32, b: f32) -> f32 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-100.0f32..100.0, -100.0f32..100.0, 0.1f32..50.0, 0.1f32..50.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

// ============================================================================
// Angles
// ============================================================================

proptest! {
    #[test]
    fn normalized_angle_in_range(theta in -1.0e6f32..1.0e6) {
        let a = normalize_angle(theta);
        prop_assert!((0.0..360.0).contains(&a), "normalize_angle({}) = {}", theta, a);
    }

    #[test]
    fn normalized_angle_ignores_full_turns(theta in -720.0f32..720.0, k in -5i32..5) {
        let a = normalize_angle(theta);
        let b = normalize_angle(theta + 360.0 * k as f32);
        prop_assert!(angle_gap(a, b) < 1e-2, "{} vs {}", a, b);
    }

    #[test]
    fn rotate_composes(
        x in -10.0f32..10.0,
        y in -10.0f32..10.0,
        a in -360.0f32..360.0,
        b in -360.0f32..360.0,
    ) {
        let v = Vec2::new(x, y);
        let lhs = rotate(rotate(v, a), b);
        let rhs = rotate(v, a + b);
        prop_assert!((lhs - rhs).length() < 1e-3, "{:?} vs {:?}", lhs, rhs);
    }

    #[test]
    fn rotate_full_turn_is_identity(x in -10.0f32..10.0, y in -10.0f32..10.0) {
        let v = Vec2::new(x, y);
        prop_assert_eq!(rotate(v, 0.0), v);
        prop_assert!((rotate(v, 360.0) - v).length() < 1e-3);
    }
}

// ============================================================================
// Rects
// ============================================================================

proptest! {
    #[test]
    fn rect_overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn rect_overlap_is_reflexive(r in rect_strategy()) {
        prop_assert!(r.overlaps(&r));
    }

    #[test]
    fn rect_separated_on_x_never_overlaps(
        a in rect_strategy(),
        gap in 0.01f32..10.0,
        dy in -20.0f32..20.0,
    ) {
        let b = Rect::new(a.x_max() + gap, a.y + dy, 5.0, 5.0);
        prop_assert!(!a.overlaps(&b));
    }

    #[test]
    fn rect_separated_on_y_never_overlaps(
        a in rect_strategy(),
        gap in 0.01f32..10.0,
        dx in -20.0f32..20.0,
    ) {
        let b = Rect::new(a.x + dx, a.y - 5.0 - gap, 5.0, 5.0);
        prop_assert!(!a.overlaps(&b));
    }
}

// ============================================================================
// Layers and distances
// ============================================================================

proptest! {
    #[test]
    fn layer_mask_matches_bit(mask in any::<u32>(), layer in 0i32..32) {
        let expected = (mask >> layer) & 1 == 1;
        prop_assert_eq!(LayerMask(mask).contains(layer), expected);
    }

    #[test]
    fn annulus_implies_range(
        px in -10.0f32..10.0,
        pz in -10.0f32..10.0,
        min in 0.0f32..5.0,
        extra in 0.1f32..5.0,
    ) {
        let pos = Vec3::new(px, 0.0, pz);
        let max = min + extra;
        if within_annulus(Vec3::ZERO, pos, min, max) {
            prop_assert!(within_range(Vec3::ZERO, pos, max));
            prop_assert!(!within_range(Vec3::ZERO, pos, min));
        }
    }
}

#[test]
fn test_documented_examples() {
    let mask = LayerMask(0b0110);
    assert!(mask.contains(1));
    assert!(!mask.contains(3));

    let pos = Vec3::new(3.0, 0.0, 0.0);
    assert!(within_range(Vec3::ZERO, pos, 5.0));
    assert!(!within_range(Vec3::ZERO, pos, 2.0));
    assert!(!within_range(Vec3::ZERO, pos, 3.0));

    let at = |d: f32| Vec3::new(d, 0.0, 0.0);
    assert!(within_annulus(Vec3::ZERO, at(3.0), 2.0, 5.0));
    assert!(!within_annulus(Vec3::ZERO, at(2.0), 2.0, 5.0));
    assert!(!within_annulus(Vec3::ZERO, at(5.0), 2.0, 5.0));
    assert!(!within_annulus(Vec3::ZERO, at(6.0), 2.0, 5.0));
}
