//! Polygon area via the shoelace formula
//!
//! Works for any simple polygon, convex or concave, with vertices given
//! in either winding order. O(n).

use crate::convex_hull::Point;

/// Area of a simple polygon, always non-negative
///
/// Fewer than three vertices is a degenerate polygon with area zero.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    polygon_signed_area(vertices).abs()
}

/// Signed area: positive for counter-clockwise vertices, negative for
/// clockwise
pub fn polygon_signed_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let n = vertices.len();
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += vertices[i].x * vertices[j].y;
        area -= vertices[j].x * vertices[i].y;
    }
    area / 2.0
}

/// Whether the vertices wind clockwise
pub fn is_clockwise(vertices: &[Point]) -> bool {
    polygon_signed_area(vertices) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_square_and_triangle() {
        let square = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert_eq!(polygon_area(&square), 4.0);

        let triangle = poly(&[(0.0, 0.0), (3.0, 0.0), (1.5, 4.0)]);
        assert_eq!(polygon_area(&triangle), 6.0);
    }

    #[test]
    fn test_winding_order_does_not_affect_area() {
        let ccw = poly(&[(0.0, 0.0), (5.0, 0.0), (5.0, 3.0), (0.0, 3.0)]);
        let cw = poly(&[(0.0, 0.0), (0.0, 3.0), (5.0, 3.0), (5.0, 0.0)]);
        assert_eq!(polygon_area(&ccw), 15.0);
        assert_eq!(polygon_area(&cw), 15.0);
    }

    #[test]
    fn test_signed_area_and_orientation() {
        let ccw = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(polygon_signed_area(&ccw), 1.0);
        assert!(!is_clockwise(&ccw));

        let cw = poly(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        assert_eq!(polygon_signed_area(&cw), -1.0);
        assert!(is_clockwise(&cw));
    }

    #[test]
    fn test_concave_polygon() {
        let l_shape = poly(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        assert_eq!(polygon_area(&l_shape), 3.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&poly(&[(1.0, 1.0)])), 0.0);
        assert_eq!(polygon_area(&poly(&[(0.0, 0.0), (1.0, 1.0)])), 0.0);
    }

    #[test]
    fn test_regular_octagon() {
        let n = 8;
        let radius = 5.0;
        let vertices: Vec<Point> = (0..n)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * f64::from(i) / f64::from(n);
                Point::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();

        let expected =
            f64::from(n) * radius * radius * (2.0 * std::f64::consts::PI / f64::from(n)).sin()
                / 2.0;
        assert!((polygon_area(&vertices) - expected).abs() < 0.01);
    }

    #[test]
    fn test_negative_coordinates() {
        let p = poly(&[(-2.0, -1.0), (1.0, -1.0), (1.0, 2.0), (-2.0, 2.0)]);
        assert_eq!(polygon_area(&p), 9.0);
    }

    #[test]
    fn test_diamond() {
        let diamond = poly(&[(0.0, 2.0), (3.0, 0.0), (0.0, -2.0), (-3.0, 0.0)]);
        assert_eq!(polygon_area(&diamond), 12.0);
    }

    #[test]
    fn test_floating_point_rectangle() {
        let p = poly(&[(0.5, 0.5), (3.7, 0.5), (3.7, 2.8), (0.5, 2.8)]);
        let expected = (3.7 - 0.5) * (2.8 - 0.5);
        assert!((polygon_area(&p) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_hull_of_square_has_unit_area() {
        use crate::convex_hull::convex_hull;

        let points = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]);
        let hull = convex_hull(&points);
        assert_eq!(polygon_area(&hull), 1.0);
        assert!(!is_clockwise(&hull));
    }
}
