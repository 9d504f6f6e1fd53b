//! Small numeric helpers shared by the shape generators.

use num_traits::FloatConst;

/// `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// With `n == 1` only `start` is produced.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }

    let step = (end - start) / (n - 1) as f64;

    (0..n).map(|i| start + step * i as f64).collect()
}

/// `n` angles covering a full turn, endpoint excluded. This is the sampling
/// used by every closed polar figure: the last dot does not coincide with
/// the first.
#[must_use]
pub fn full_turn(n: usize) -> Vec<f64> {
    let mut angles = linspace(0.0, f64::TAU(), n + 1);
    angles.pop();
    angles
}

#[cfg(test)]
mod tests {
    use super::{full_turn, linspace};
    use num_traits::FloatConst;

    #[test]
    fn linspace_includes_both_ends() {
        let v = linspace(-2.0, 2.0, 5);
        assert_eq!(v, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn full_turn_excludes_the_endpoint() {
        let v = full_turn(4);
        assert_eq!(v.len(), 4);
        assert!((v[0]).abs() < 1e-12);
        assert!((v[2] - f64::PI()).abs() < 1e-12);
        assert!(v.last().copied().unwrap() < f64::TAU());
    }
}
