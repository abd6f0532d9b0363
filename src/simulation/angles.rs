//! Angle ↔ grid-index conversion
//!
//! Display layers bucket angles into an N-entry colour map. The integrated
//! state is never wrapped; wrapping happens only here.

use std::f64::consts::PI;

/// Bucket an angle into `0..n`
///
/// `floor(θ·n / 2π) mod n`, with a modulo that is always non-negative, so
/// θ and θ + 2πk land in the same bucket and negative angles wrap to the
/// top of the range. Non-finite angles map to bucket 0.
///
/// # Panics
///
/// Panics when `n == 0`.
///
/// # Example
///
/// ```rust
/// use std::f64::consts::PI;
/// use pendulum_rs::simulation::theta_to_index;
///
/// assert_eq!(theta_to_index(0.0, 8), 0);
/// assert_eq!(theta_to_index(PI + 0.1, 8), 4);
/// assert_eq!(theta_to_index(-0.1, 8), 7);
/// ```
pub fn theta_to_index(theta: f64, n: usize) -> usize {
    assert!(n > 0, "grid size must be at least 1");

    let bucket = (theta * n as f64 / (2.0 * PI)).floor();
    let wrapped = bucket.rem_euclid(n as f64);

    if wrapped.is_finite() {
        (wrapped as usize).min(n - 1)
    } else {
        0
    }
}

/// Lower edge of bucket `index` out of `n`, in radians: `index·2π / n`
pub fn index_to_theta(index: usize, n: usize) -> f64 {
    index as f64 * 2.0 * PI / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_theta_to_index_basic_buckets() {
        assert_eq!(theta_to_index(0.0, 4), 0);
        assert_eq!(theta_to_index(PI / 4.0, 4), 0);
        assert_eq!(theta_to_index(3.0 * PI / 4.0, 4), 1);
        assert_eq!(theta_to_index(5.0 * PI / 4.0, 4), 2);
        assert_eq!(theta_to_index(7.0 * PI / 4.0, 4), 3);
    }

    #[test]
    fn test_theta_to_index_wraps_negative() {
        assert_eq!(theta_to_index(-PI / 4.0, 4), 3);
        assert_eq!(theta_to_index(-3.0 * PI / 4.0, 4), 2);
        assert_eq!(theta_to_index(-PI / 4.0 - 10.0 * PI, 4), 3);
    }

    #[test]
    fn test_theta_to_index_single_bucket() {
        assert_eq!(theta_to_index(123.4, 1), 0);
        assert_eq!(theta_to_index(-123.4, 1), 0);
    }

    #[test]
    fn test_theta_to_index_non_finite() {
        assert_eq!(theta_to_index(f64::NAN, 10), 0);
        assert_eq!(theta_to_index(f64::INFINITY, 10), 0);
    }

    #[test]
    #[should_panic(expected = "grid size must be at least 1")]
    fn test_theta_to_index_zero_grid() {
        theta_to_index(1.0, 0);
    }

    #[test]
    fn test_index_to_theta() {
        assert_eq!(index_to_theta(0, 10), 0.0);
        assert_relative_eq!(index_to_theta(5, 10), PI, epsilon = 1e-15);

        // Bucket centres map back to their own index
        for i in 0..16 {
            let centre = index_to_theta(i, 16) + PI / 16.0;
            assert_eq!(theta_to_index(centre, 16), i);
        }
    }
}
