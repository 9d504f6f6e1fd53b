//! Convex and concave hulls over dot sets. The concave hull is what gives a
//! dense dot figure a sensible outline for edge drawing and filling when the
//! generator itself provides none.

use crate::metrics::Bounds;
use crate::point::Point;
use std::collections::HashMap;

/// Indices of the convex hull vertices, in counterclockwise order.
///
/// Sets with fewer than three points are returned as-is.
#[must_use]
pub fn convex_hull(points: &[Point]) -> Vec<usize> {
    if points.len() < 3 {
        return (0..points.len()).collect();
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        points[a]
            .x
            .total_cmp(&points[b].x)
            .then(points[a].y.total_cmp(&points[b].y))
    });

    let cross = |o: usize, a: usize, b: usize| -> f64 {
        let oa = points[a] - points[o];
        let ob = points[b] - points[o];
        oa.x * ob.y - oa.y * ob.x
    };

    let mut hull: Vec<usize> = Vec::with_capacity(points.len() + 1);

    // Lower hull, then upper hull.
    for &i in &order {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], i) <= 0.0 {
            hull.pop();
        }
        hull.push(i);
    }

    let lower_len = hull.len() + 1;
    for &i in order.iter().rev() {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], i) <= 0.0
        {
            hull.pop();
        }
        hull.push(i);
    }

    hull.pop();
    hull
}

/// A triangle of a Delaunay triangulation, as indices into the point set.
type Triangle = [usize; 3];

/// Delaunay triangulation of the point set, by Bowyer-Watson insertion.
/// Degenerate inputs (fewer than three points, all collinear) produce an
/// empty triangulation.
#[must_use]
pub fn delaunay(points: &[Point]) -> Vec<Triangle> {
    if points.len() < 3 {
        return Vec::new();
    }

    let Some(bounds) = Bounds::of(points) else {
        return Vec::new();
    };

    // A triangle comfortably enclosing every input point.
    let span = bounds.width().max(bounds.height()).max(1.0);
    // Near-cocircular dots (every polar figure) need a tolerance here,
    // or the triangulation comes out with holes. The determinant scales
    // with the fourth power of the coordinates.
    let tolerance = 1e-9 * span.powi(4);
    let center = bounds.center();
    let mut all: Vec<Point> = points.to_vec();
    let super_base = all.len();
    all.push(Point::new(center.x - 20.0 * span, center.y - span));
    all.push(Point::new(center.x + 20.0 * span, center.y - span));
    all.push(Point::new(center.x, center.y + 20.0 * span));

    let mut triangles: Vec<Triangle> = vec![[super_base, super_base + 1, super_base + 2]];

    for i in 0..super_base {
        let p = all[i];

        // Triangles whose circumcircle contains the new point.
        let mut bad: Vec<Triangle> = Vec::new();
        triangles.retain(|t| {
            if in_circumcircle(&all, *t, p, tolerance) {
                bad.push(*t);
                false
            } else {
                true
            }
        });

        // The boundary of the cavity: edges not shared by two bad triangles.
        let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
        for t in &bad {
            for e in tri_edges(*t) {
                *edge_count.entry(e).or_insert(0) += 1;
            }
        }

        for t in &bad {
            for (a, b) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                let key = (a.min(b), a.max(b));
                if edge_count[&key] == 1 {
                    triangles.push([a, b, i]);
                }
            }
        }
    }

    triangles.retain(|t| t.iter().all(|&v| v < super_base));
    triangles
}

fn tri_edges(t: Triangle) -> [(usize, usize); 3] {
    [
        (t[0].min(t[1]), t[0].max(t[1])),
        (t[1].min(t[2]), t[1].max(t[2])),
        (t[2].min(t[0]), t[2].max(t[0])),
    ]
}

fn in_circumcircle(points: &[Point], t: Triangle, p: Point, tolerance: f64) -> bool {
    let a = points[t[0]] - p;
    let b = points[t[1]] - p;
    let c = points[t[2]] - p;

    let det = (a.dot(a)) * (b.x * c.y - c.x * b.y) - (b.dot(b)) * (a.x * c.y - c.x * a.y)
        + (c.dot(c)) * (a.x * b.y - b.x * a.y);

    // Sign convention depends on triangle orientation. A dot exactly on
    // the circle counts as inside.
    let orient = {
        let ab = points[t[1]] - points[t[0]];
        let ac = points[t[2]] - points[t[0]];
        ab.x * ac.y - ab.y * ac.x
    };

    let signed = if orient > 0.0 { det } else { -det };
    signed > -tolerance
}

fn circumradius(a: Point, b: Point, c: Point) -> f64 {
    let la = a.dist(b);
    let lb = b.dist(c);
    let lc = a.dist(c);

    let s = (la + lb + lc) / 2.0;
    let area = (s * (s - la) * (s - lb) * (s - lc)).max(0.0).sqrt();

    if area == 0.0 {
        f64::INFINITY
    } else {
        la * lb * lc / (4.0 * area)
    }
}

/// Indices of an alpha-shape outline of the point set, as an ordered ring.
///
/// Triangulates, keeps triangles whose circumradius stays below
/// `scale / alpha` (where `scale` is half the bounding-box diagonal), then
/// walks the edges left on the boundary. Larger `alpha` values hug the dots
/// more tightly; too large a value erodes the figure away. Falls back to the
/// convex hull whenever the filtered boundary does not close.
#[must_use]
pub fn concave_hull(points: &[Point], alpha: f64) -> Vec<usize> {
    if points.len() < 4 {
        return (0..points.len()).collect();
    }

    let Some(bounds) = Bounds::of(points) else {
        return Vec::new();
    };
    let scale = bounds.radius();
    let limit = scale / alpha;

    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
    for t in delaunay(points) {
        if circumradius(points[t[0]], points[t[1]], points[t[2]]) < limit {
            for e in tri_edges(t) {
                *edge_count.entry(e).or_insert(0) += 1;
            }
        }
    }

    // Edges bordering exactly one kept triangle form the outline.
    let mut neighbors: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut boundary = 0usize;
    for (&(a, b), &n) in &edge_count {
        if n == 1 {
            neighbors.entry(a).or_default().push(b);
            neighbors.entry(b).or_default().push(a);
            boundary += 1;
        }
    }

    let Some((&start, _)) = neighbors.iter().min_by_key(|(&v, _)| v) else {
        return convex_hull(points);
    };

    let mut ring = vec![start];
    let mut prev = usize::MAX;
    let mut current = start;

    loop {
        let Some(next) = neighbors
            .get(&current)
            .and_then(|ns| ns.iter().find(|&&n| n != prev).copied())
        else {
            return convex_hull(points);
        };

        if next == start {
            break;
        }

        ring.push(next);
        prev = current;
        current = next;

        if ring.len() > boundary {
            // The boundary is not a single closed loop.
            return convex_hull(points);
        }
    }

    ring
}

#[cfg(test)]
mod tests {
    use super::{concave_hull, convex_hull, delaunay};
    use crate::metrics::ring_area;
    use crate::point::Point;
    use crate::util::full_turn;

    #[test]
    fn convex_hull_of_square_with_interior_dots() {
        let mut points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        // Interior dots must not appear on the hull.
        points.push(Point::new(2.0, 2.0));
        points.push(Point::new(1.0, 3.0));

        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);

        let ring: Vec<Point> = hull.iter().map(|&i| points[i]).collect();
        assert!((ring_area(&ring) - 16.0).abs() < 1e-9);
    }

    #[test]
    fn delaunay_of_square_has_two_triangles() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];

        let triangles = delaunay(&points);
        assert_eq!(triangles.len(), 2);
    }

    #[test]
    fn delaunay_of_collinear_dots_is_empty() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];

        assert!(delaunay(&points).is_empty());
    }

    #[test]
    fn concave_hull_of_a_ring_visits_every_dot() {
        let points: Vec<Point> = full_turn(24)
            .into_iter()
            .map(|theta| Point::polar(5.0, theta))
            .collect();

        let hull = concave_hull(&points, 1.0);
        assert_eq!(hull.len(), 24);
    }

    #[test]
    fn concave_hull_falls_back_on_sparse_input() {
        // Alpha far too large erodes everything, leaving the convex hull.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 3.0),
            Point::new(0.0, 3.0),
            Point::new(1.5, 1.5),
        ];

        let hull = concave_hull(&points, 1e6);
        assert_eq!(hull.len(), 4);
    }
}
