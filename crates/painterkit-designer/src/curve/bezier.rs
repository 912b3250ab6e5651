//! Bernstein-basis Bézier evaluation and stride-3 cubic segmentation.

use painterkit_core::{Color, Point};
use smallvec::SmallVec;

use super::CURVE_PALETTE;

/// Number of sampled intervals per Bézier group.
pub const SAMPLES_PER_SEGMENT: usize = 20;

/// Exact binomial coefficient via the multiplicative formula.
///
/// Out-of-range indices yield 0. Exact for the control-point counts this
/// library deals in (n up to ~20); each intermediate product stays integral
/// so no floating arithmetic is involved.
pub fn binomial(n: i64, k: i64) -> u64 {
    if k < 0 || k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for j in 1..=k {
        result = result * (n - k + j) as u64 / j as u64;
    }
    result
}

/// Evaluates the degree-`n` Bernstein-basis curve at `t` for `n + 1`
/// control points.
pub fn bezier_point(t: f64, control: &[Point]) -> Point {
    let n = control.len() - 1;
    let mut x = 0.0;
    let mut y = 0.0;
    for (i, p) in control.iter().enumerate() {
        let weight = binomial(n as i64, i as i64) as f64
            * t.powi(i as i32)
            * (1.0 - t).powi((n - i) as i32);
        x += weight * p.x;
        y += weight * p.y;
    }
    Point::new(x, y)
}

/// Samples the general-degree curve over `t ∈ [0, 1]`.
pub fn sample_polyline(control: &[Point], samples: usize) -> Vec<Point> {
    if control.is_empty() {
        return Vec::new();
    }
    if control.len() == 1 {
        return control.to_vec();
    }
    let samples = samples.max(1);
    (0..=samples)
        .map(|j| bezier_point(j as f64 / samples as f64, control))
        .collect()
}

/// One independently-rendered Bézier group.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSegment {
    pub color: Color,
    pub points: Vec<Point>,
}

/// Splits the control points into stride-3 groups and samples each as an
/// independent cubic (or lower-degree tail), cycling through the palette so
/// group boundaries stay visible.
///
/// Adjacent groups share only their boundary control point, so the joined
/// curve is generally not tangent-continuous there. That is intended: the
/// color rotation exists to make exactly those boundaries visible. Fewer
/// than four control points fall back to a single piecewise-linear segment
/// through all points.
pub fn segments(control: &[Point]) -> Vec<BezierSegment> {
    if control.len() < 2 {
        return Vec::new();
    }
    if control.len() < 4 {
        return vec![BezierSegment {
            color: CURVE_PALETTE[0],
            points: control.to_vec(),
        }];
    }

    let mut out = Vec::new();
    let mut start = 0;
    while start + 1 < control.len() {
        let end = (start + 4).min(control.len());
        let group: SmallVec<[Point; 4]> = control[start..end].iter().copied().collect();
        out.push(BezierSegment {
            color: CURVE_PALETTE[out.len() % CURVE_PALETTE.len()],
            points: sample_polyline(&group, SAMPLES_PER_SEGMENT),
        });
        start += 3;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(20, 10), 184_756);
    }

    #[test]
    fn test_binomial_out_of_range_is_zero() {
        assert_eq!(binomial(4, -1), 0);
        assert_eq!(binomial(4, 5), 0);
        assert_eq!(binomial(-2, 0), 0);
    }

    #[test]
    fn test_curve_endpoints_equal_control_endpoints() {
        let control = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 40.0),
            Point::new(30.0, -20.0),
            Point::new(40.0, 0.0),
        ];
        let p0 = bezier_point(0.0, &control);
        let p1 = bezier_point(1.0, &control);
        assert!(p0.distance_to(&control[0]) < 1e-9);
        assert!(p1.distance_to(&control[3]) < 1e-9);
    }

    #[test]
    fn test_quadratic_midpoint() {
        // B(0.5) of a quadratic = 0.25 p0 + 0.5 p1 + 0.25 p2.
        let control = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 4.0),
            Point::new(4.0, 0.0),
        ];
        let mid = bezier_point(0.5, &control);
        assert!((mid.x - 2.0).abs() < 1e-9);
        assert!((mid.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_fallback_below_four_points() {
        let control = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
        ];
        let segs = segments(&control);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].points, control.to_vec());
    }

    #[test]
    fn test_stride_three_grouping() {
        // 7 points -> groups [0..3], [3..6] (both cubic). The trailing
        // point at index 6 closes the second group; no 1-point tail exists.
        let control: Vec<Point> = (0..7).map(|i| Point::new(i as f64, 0.0)).collect();
        let segs = segments(&control);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].points.len(), SAMPLES_PER_SEGMENT + 1);
        // Groups share the boundary control point.
        let first_end = *segs[0].points.last().unwrap();
        let second_start = segs[1].points[0];
        assert!(first_end.distance_to(&second_start) < 1e-9);
        assert!(first_end.distance_to(&control[3]) < 1e-9);
    }

    #[test]
    fn test_short_tail_group_is_lower_degree() {
        // 5 points -> cubic group [0..3] plus a linear tail [3..5].
        let control: Vec<Point> = (0..5).map(|i| Point::new(i as f64, i as f64)).collect();
        let segs = segments(&control);
        assert_eq!(segs.len(), 2);
        assert_eq!(*segs[1].points.last().unwrap(), control[4]);
    }

    #[test]
    fn test_rotating_segment_colors_differ() {
        let control: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 0.0)).collect();
        let segs = segments(&control);
        assert_eq!(segs.len(), 3);
        assert_ne!(segs[0].color, segs[1].color);
        assert_ne!(segs[1].color, segs[2].color);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let control: Vec<Point> = (0..6).map(|i| Point::new(i as f64, (i * i) as f64)).collect();
        assert_eq!(segments(&control), segments(&control));
        assert_eq!(
            sample_polyline(&control, 40),
            sample_polyline(&control, 40)
        );
    }
}
