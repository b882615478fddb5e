//! Domain-wedge layout.
//!
//! The circle is cut into one equal wedge per entry of `DOMAIN_ORDER`. Careers
//! land in the wedge of their domain tag; inside a wedge they fan out across
//! at most 75% of its width and are split into `ceil(sqrt(n))` radial bands so
//! a crowded domain does not become one long spoke.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::catalog::careers::CareerNode;
use crate::catalog::taxonomy::{domain_of, wedge_index, DOMAIN_ORDER, OTHER_DOMAIN};
use crate::layout::geometry::Position;
use crate::layout::seeded::{jitter, seeded_random};

const MAX_WEDGE_FILL: f64 = 0.75;
const FAN_BUDGET: f64 = PI * 1.2;
const INNER_RADIUS: f64 = 28.0;
const BAND_SPACING: f64 = 12.0;
const BAND_DEPTH: f64 = 10.0;
const POINT_JITTER: f64 = 2.0;

/// Wedge for a career. Unmapped careers share the `other` group but sit in wedge 0.
fn career_wedge(career_id: &str) -> (&'static str, usize) {
    match domain_of(career_id) {
        Some(domain) => (domain, wedge_index(domain)),
        None => (OTHER_DOMAIN, 0),
    }
}

/// One position per career, index-aligned with `careers`.
pub fn positions_by_domain(careers: &[&CareerNode]) -> Vec<Position> {
    let wedge_angle = 2.0 * PI / DOMAIN_ORDER.len() as f64;

    let mut population: HashMap<&str, usize> = HashMap::new();
    for career in careers {
        let (domain, _) = career_wedge(career.id);
        *population.entry(domain).or_default() += 1;
    }

    let mut placed: HashMap<&str, usize> = HashMap::new();
    careers
        .iter()
        .map(|career| {
            let (domain, wedge) = career_wedge(career.id);
            let n = population[domain];
            let slot = placed.entry(domain).or_default();
            let idx = *slot;
            *slot += 1;

            let base_angle = wedge as f64 * wedge_angle + wedge_angle / 2.0;
            let spread = (wedge_angle * MAX_WEDGE_FILL).min(FAN_BUDGET / n.max(1) as f64);
            let angle_step = if n > 1 { spread / (n - 1) as f64 } else { 0.0 };
            let angle = base_angle + angle_step * idx as f64 - spread / 2.0;

            let bands = (n as f64).sqrt().ceil() as usize;
            let band = idx / n.div_ceil(bands);
            let r_min = INNER_RADIUS + band as f64 * BAND_SPACING;
            let radius = r_min + seeded_random(career.id.len() * 7 + idx) * BAND_DEPTH;

            Position::polar(
                angle,
                radius,
                jitter(idx * 11, POINT_JITTER),
                jitter(idx * 13 + 1, POINT_JITTER),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::careers::{career_by_id, CAREER_PATHS};

    fn careers(ids: &[&str]) -> Vec<&'static CareerNode> {
        ids.iter().map(|id| career_by_id(id).expect(id)).collect()
    }

    fn angle_of(p: Position) -> f64 {
        (p.y - 50.0).atan2(p.x - 50.0).rem_euclid(2.0 * PI)
    }

    #[test]
    fn test_empty_input() {
        assert!(positions_by_domain(&[]).is_empty());
    }

    #[test]
    fn test_reference_coordinates() {
        let input = careers(&["software-developer", "data-analyst", "growth-hacker", "paralegal"]);
        let expected = [
            (85.968_254_198_654_32, 53.329_160_861_689_6),
            (77.159_359_291_286_11, 74.470_061_043_642_81),
            (86.194_516_395_787_36, 71.819_914_190_279_75),
            (41.163_232_066_470_16, 17.777_208_486_145_305),
        ];
        let positions = positions_by_domain(&input);
        for (p, (x, y)) in positions.iter().zip(expected) {
            assert!((p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6, "{p:?} vs ({x}, {y})");
        }
    }

    #[test]
    fn test_length_and_order_follow_input() {
        let all: Vec<&CareerNode> = CAREER_PATHS.iter().collect();
        let forward = positions_by_domain(&all);
        assert_eq!(forward.len(), all.len());

        let single = positions_by_domain(&careers(&["paralegal"]));
        let pair = positions_by_domain(&careers(&["software-developer", "paralegal"]));
        assert_eq!(single[0], pair[1]);
    }

    /// A lone career starts the fan: half the fan width before its wedge's middle.
    fn lone_career_angle(wedge: usize) -> f64 {
        let wedge_angle = 2.0 * PI / DOMAIN_ORDER.len() as f64;
        wedge_angle * (wedge as f64 + 0.5) - wedge_angle * MAX_WEDGE_FILL / 2.0
    }

    #[test]
    fn test_lone_career_sits_at_fan_start() {
        let p = positions_by_domain(&careers(&["data-analyst"]))[0];
        // data is wedge 1; jitter moves the point by at most ~1.4 units
        let angle = angle_of(p);
        assert!((angle - lone_career_angle(1)).abs() < 0.06, "angle {angle}");
    }

    #[test]
    fn test_unmapped_careers_use_wedge_zero() {
        let wedge_angle = 2.0 * PI / DOMAIN_ORDER.len() as f64;
        let p = positions_by_domain(&careers(&["corporate-trainer"]))[0];
        let angle = angle_of(p);
        assert!((angle - lone_career_angle(0)).abs() < 0.06, "angle {angle}");
        assert!((0.0..wedge_angle).contains(&angle), "angle {angle}");
    }

    #[test]
    fn test_full_catalog_stays_on_canvas() {
        let all: Vec<&CareerNode> = CAREER_PATHS.iter().collect();
        for p in positions_by_domain(&all) {
            let d = p.distance_from_center();
            assert!((26.0..=100.0).contains(&d), "{p:?}");
        }
    }

    #[test]
    fn test_deterministic() {
        let all: Vec<&CareerNode> = CAREER_PATHS.iter().collect();
        assert_eq!(positions_by_domain(&all), positions_by_domain(&all));
    }
}
