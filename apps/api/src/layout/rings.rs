//! Fallback ring layout. Five concentric rings around the canvas centre.
//!
//! Items fill ring 0 first, then ring 1, and so on. Each ring is rotated a
//! little further than the last so spokes do not line up radially.

use std::f64::consts::PI;

use crate::layout::geometry::Position;
use crate::layout::seeded::{jitter, seeded_random};

const RING_COUNT: usize = 5;
const INNER_RADIUS: f64 = 22.0;
const RING_SPACING: f64 = 6.0;
const RING_BAND: f64 = 4.0;
const RING_ROTATION: f64 = 0.4;
const POINT_JITTER: f64 = 1.0;

/// Lays out `count` points on the rings. Pure in `count`.
pub fn fallback_positions(count: usize) -> Vec<Position> {
    if count == 0 {
        return Vec::new();
    }
    let per_ring = count.div_ceil(RING_COUNT);
    let angle_step = 2.0 * PI / per_ring as f64;

    (0..count)
        .map(|i| {
            let ring = i / per_ring;
            let idx_in_ring = i % per_ring;
            let angle = idx_in_ring as f64 * angle_step + ring as f64 * RING_ROTATION;
            let r_min = INNER_RADIUS + ring as f64 * RING_SPACING;
            let radius = r_min + seeded_random(i * 11) * RING_BAND;
            Position::polar(
                angle,
                radius,
                jitter(i * 7, POINT_JITTER),
                jitter(i * 13 + 1, POINT_JITTER),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Position, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < 1e-6 && (actual.y - y).abs() < 1e-6,
            "expected ({x}, {y}), got {actual:?}"
        );
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(fallback_positions(0).is_empty());
    }

    #[test]
    fn test_exact_count() {
        for n in [1, 2, 5, 6, 12, 73, 200] {
            assert_eq!(fallback_positions(n).len(), n);
        }
    }

    #[test]
    fn test_reference_coordinates() {
        let three = fallback_positions(3);
        assert_close(three[0], 71.5, 50.209_848_078_964_57);
        assert_close(three[1], 76.516_509_585_723_78, 60.629_820_484_968_4);
        assert_close(three[2], 74.618_510_828_847_6, 76.046_534_219_574_41);

        let twelve = fallback_positions(12);
        assert_close(twelve[10], 8.606_718_535_557_27, 44.028_792_380_272_05);
        assert_close(twelve[11], 75.122_433_131_975_94, 18.615_930_279_759_766);
    }

    #[test]
    fn test_within_ring_envelope() {
        // innermost 22 - jitter, outermost 22 + 4*6 + 4 + jitter
        for n in [1, 5, 7, 73, 200] {
            for p in fallback_positions(n) {
                let d = p.distance_from_center();
                assert!((21.0..=51.0).contains(&d), "n={n} d={d}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(fallback_positions(73), fallback_positions(73));
    }
}
