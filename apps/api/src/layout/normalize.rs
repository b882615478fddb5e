//! Projection of externally computed 2-D coordinates onto the display canvas.

use crate::layout::geometry::Position;

const CANVAS_MARGIN: f64 = 8.0;
const CANVAS_SPAN: f64 = 84.0;

/// Min/max-normalises each axis into `[8, 92]`. A flat axis maps to 8.
pub fn normalize_positions(raw: &[[f64; 2]]) -> Vec<Position> {
    if raw.is_empty() {
        return Vec::new();
    }
    let (min_x, max_x) = bounds(raw.iter().map(|p| p[0]));
    let (min_y, max_y) = bounds(raw.iter().map(|p| p[1]));
    let range_x = nonzero(max_x - min_x);
    let range_y = nonzero(max_y - min_y);

    raw.iter()
        .map(|[x, y]| Position {
            x: CANVAS_MARGIN + (x - min_x) / range_x * CANVAS_SPAN,
            y: CANVAS_MARGIN + (y - min_y) / range_y * CANVAS_SPAN,
        })
        .collect()
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn nonzero(range: f64) -> f64 {
    if range == 0.0 {
        1.0
    } else {
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(normalize_positions(&[]).is_empty());
    }

    #[test]
    fn test_extremes_hit_canvas_edges() {
        let out = normalize_positions(&[[-3.0, 10.0], [1.0, 20.0], [5.0, 15.0]]);
        assert_eq!(out[0], Position { x: 8.0, y: 8.0 });
        assert_eq!(out[1], Position { x: 50.0, y: 92.0 });
        assert_eq!(out[2], Position { x: 92.0, y: 50.0 });
    }

    #[test]
    fn test_flat_axis_maps_to_margin() {
        let out = normalize_positions(&[[2.0, 7.0], [4.0, 7.0]]);
        assert_eq!(out[0].y, 8.0);
        assert_eq!(out[1].y, 8.0);
        assert_eq!(out[1].x, 92.0);
    }
}
