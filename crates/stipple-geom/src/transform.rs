//! Transformations over coordinate sets. All of them operate on a mutable
//! point slice; the merging reflections return a new, larger set instead.
//!
//! Angles are always radians. Rotations are counterclockwise.

use crate::point::Point;
use crate::ParamError;

/// Shift every point by `(dx, dy)`.
pub fn translate(points: &mut [Point], dx: f64, dy: f64) {
    for p in points {
        p.x += dx;
        p.y += dy;
    }
}

/// Shift every point along the x-axis.
pub fn translate_x(points: &mut [Point], dx: f64) {
    translate(points, dx, 0.0);
}

/// Shift every point along the y-axis.
pub fn translate_y(points: &mut [Point], dy: f64) {
    translate(points, 0.0, dy);
}

/// Scale both axes around the origin.
pub fn scale(points: &mut [Point], factor: f64) {
    scale_xy(points, factor, factor);
}

/// Scale each axis around the origin by its own factor.
pub fn scale_xy(points: &mut [Point], sx: f64, sy: f64) {
    for p in points {
        p.x *= sx;
        p.y *= sy;
    }
}

/// Scale the x-axis only.
pub fn scale_x(points: &mut [Point], sx: f64) {
    scale_xy(points, sx, 1.0);
}

/// Scale the y-axis only.
pub fn scale_y(points: &mut [Point], sy: f64) {
    scale_xy(points, 1.0, sy);
}

/// Rotate in the xy-plane, that is about the z-axis.
pub fn rotate(points: &mut [Point], angle: f64) {
    let (sin, cos) = angle.sin_cos();

    for p in points {
        *p = Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
    }
}

/// Rotate about the x-axis and project back onto the plane. The figure
/// foreshortens vertically.
pub fn rotate_x(points: &mut [Point], angle: f64) {
    let cos = angle.cos();

    for p in points {
        p.y *= cos;
    }
}

/// Rotate about the y-axis and project back onto the plane. The figure
/// foreshortens horizontally.
pub fn rotate_y(points: &mut [Point], angle: f64) {
    let cos = angle.cos();

    for p in points {
        p.x *= cos;
    }
}

/// Full 3D rotation (yaw about z, pitch about y, roll about x) projected
/// back onto the plane.
pub fn rotate_3d(points: &mut [Point], yaw: f64, pitch: f64, roll: f64) {
    let (s1, c1) = yaw.sin_cos();
    let (s2, c2) = pitch.sin_cos();
    let (s3, c3) = roll.sin_cos();

    for p in points {
        let x = p.x * c1 * c2 + p.y * (c1 * s2 * s3 - s1 * c3);
        let y = p.x * s1 * c2 + p.y * (s1 * s2 * s3 + c1 * c3);
        *p = Point::new(x, y);
    }
}

/// Skew along both axes.
pub fn skew(points: &mut [Point], ax: f64, ay: f64) {
    let tx = ax.tan();
    let ty = ay.tan();

    for p in points {
        *p = Point::new(p.x + p.y * tx, p.x * ty + p.y);
    }
}

/// Skew horizontally.
pub fn skew_x(points: &mut [Point], angle: f64) {
    let t = angle.tan();

    for p in points {
        p.x += p.y * t;
    }
}

/// Skew vertically.
pub fn skew_y(points: &mut [Point], angle: f64) {
    let t = angle.tan();

    for p in points {
        p.y += p.x * t;
    }
}

/// Mirror through the point `pivot`.
pub fn flip(points: &mut [Point], pivot: Point) {
    for p in points {
        *p = Point::new(2.0 * pivot.x - p.x, 2.0 * pivot.y - p.y);
    }
}

/// Mirror about the x-axis.
pub fn flip_x(points: &mut [Point]) {
    for p in points {
        p.y = -p.y;
    }
}

/// Mirror about the y-axis.
pub fn flip_y(points: &mut [Point]) {
    for p in points {
        p.x = -p.x;
    }
}

/// Mirror through the origin.
pub fn flip_origin(points: &mut [Point]) {
    for p in points {
        *p = -*p;
    }
}

/// Mirror about the line `y = x`.
pub fn flip_diagonal(points: &mut [Point]) {
    for p in points {
        *p = Point::new(p.y, p.x);
    }
}

/// Multiply every point, as a row vector, by the 2x2 matrix
/// `[[m[0][0], m[0][1]], [m[1][0], m[1][1]]]`.
pub fn apply(points: &mut [Point], m: [[f64; 2]; 2]) {
    for p in points {
        *p = Point::new(
            p.x * m[0][0] + p.y * m[1][0],
            p.x * m[0][1] + p.y * m[1][1],
        );
    }
}

fn merged_with(points: &[Point], mirror: impl FnOnce(&mut [Point])) -> Vec<Point> {
    let mut reflected = points.to_vec();
    mirror(&mut reflected);

    let mut merged = points.to_vec();
    merged.extend(reflected);
    dedup_points(&mut merged);

    merged
}

/// The point set together with its mirror image through `pivot`,
/// coincident points removed.
#[must_use]
pub fn reflect(points: &[Point], pivot: Point) -> Vec<Point> {
    merged_with(points, |m| flip(m, pivot))
}

/// The point set together with its mirror image about the x-axis.
#[must_use]
pub fn reflect_x(points: &[Point]) -> Vec<Point> {
    merged_with(points, flip_x)
}

/// The point set together with its mirror image about the y-axis.
#[must_use]
pub fn reflect_y(points: &[Point]) -> Vec<Point> {
    merged_with(points, flip_y)
}

/// The point set together with its mirror image through the origin.
#[must_use]
pub fn reflect_origin(points: &[Point]) -> Vec<Point> {
    merged_with(points, flip_origin)
}

/// The point set together with its mirror image about the line `y = x`.
#[must_use]
pub fn reflect_diagonal(points: &[Point]) -> Vec<Point> {
    merged_with(points, flip_diagonal)
}

/// Sort lexicographically and drop coincident duplicates. Zero compares
/// equal to negative zero, so mirrored dots on an axis collapse.
pub fn dedup_points(points: &mut Vec<Point>) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points.dedup_by(|a, b| a.x == b.x && a.y == b.y);
}

/// The radial lens model used by [`distort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lens {
    /// Magnification decreases with distance from the center.
    Barrel,
    /// Magnification increases with distance from the center.
    Pincushion,
}

/// Apply a radial lens distortion around the centroid of the set.
///
/// # Errors
/// Pincushion distortion requires `rate < 1`.
pub fn distort(points: &mut [Point], lens: Lens, rate: f64) -> Result<(), ParamError> {
    if lens == Lens::Pincushion && rate >= 1.0 {
        return Err(ParamError::Range {
            kind: "distort",
            param: "rate",
            expected: "a value below 1 for pincushion distortion",
        });
    }

    let rate = match lens {
        Lens::Barrel => rate,
        Lens::Pincushion => -rate,
    };

    let center = crate::metrics::centroid(points).unwrap_or_default();
    focus(points, center, rate);

    Ok(())
}

/// Pull the whole set towards the pivot point. Dots far from the pivot
/// move the most.
pub fn focus(points: &mut [Point], pivot: Point, rate: f64) {
    let Some(radius) = max_dist(points, pivot) else {
        return;
    };

    for p in points {
        let r = p.dist(pivot) / radius;
        let d = (1.0 + rate * r * r).sqrt();
        *p = pivot + (*p - pivot) * (1.0 / d);
    }
}

/// Repel the whole set away from the pivot point. Dots near the pivot
/// move the most.
pub fn shatter(points: &mut [Point], pivot: Point, rate: f64) {
    let Some(radius) = max_dist(points, pivot) else {
        return;
    };

    for p in points {
        let r = (radius - p.dist(pivot)) / radius;
        let d = (1.0 + rate * r * r).sqrt();
        *p = (*p + pivot) * (1.0 / d) - pivot;
    }
}

fn max_dist(points: &[Point], pivot: Point) -> Option<f64> {
    let radius = points.iter().map(|p| p.dist(pivot)).fold(0.0_f64, f64::max);
    (radius > 0.0).then_some(radius)
}
