//! Catmull-Rom spline sampling.

use painterkit_core::Point;

/// Number of sampled segments per 4-point window.
pub const SEGMENTS_PER_WINDOW: usize = 20;

/// Evaluates the uniform Catmull-Rom basis at `t` for one 4-point window.
///
/// The curve runs from `p1` (t = 0) to `p2` (t = 1); `p0` and `p3` shape
/// the tangents.
pub fn catmull_rom_point(t: f64, p0: Point, p1: Point, p2: Point, p3: Point) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    Point::new(
        0.5 * ((2.0 * p1.x)
            + (-p0.x + p2.x) * t
            + (2.0 * p0.x - 5.0 * p1.x + 4.0 * p2.x - p3.x) * t2
            + (-p0.x + 3.0 * p1.x - 3.0 * p2.x + p3.x) * t3),
        0.5 * ((2.0 * p1.y)
            + (-p0.y + p2.y) * t
            + (2.0 * p0.y - 5.0 * p1.y + 4.0 * p2.y - p3.y) * t2
            + (-p0.y + 3.0 * p1.y - 3.0 * p2.y + p3.y) * t3),
    )
}

/// Samples a dense polyline through the control points.
///
/// Windows of four control points advance one point at a time, each sampled
/// at [`SEGMENTS_PER_WINDOW`] intervals, so the curve passes through every
/// interior control point. The first and last control points are prepended
/// and appended so the polyline starts and ends exactly on them. With two
/// or three control points no cubic window exists and the control points
/// themselves form the polyline (the host draws it smoothed).
pub fn sample_polyline(control: &[Point]) -> Vec<Point> {
    if control.len() < 4 {
        return control.to_vec();
    }

    let windows = control.len() - 3;
    let mut out = Vec::with_capacity(2 + windows * (SEGMENTS_PER_WINDOW + 1));
    out.push(control[0]);
    for i in 0..windows {
        let (p0, p1, p2, p3) = (control[i], control[i + 1], control[i + 2], control[i + 3]);
        for j in 0..=SEGMENTS_PER_WINDOW {
            let t = j as f64 / SEGMENTS_PER_WINDOW as f64;
            out.push(catmull_rom_point(t, p0, p1, p2, p3));
        }
    }
    out.push(control[control.len() - 1]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new(i as f64 * 10.0, if i % 2 == 0 { 0.0 } else { 20.0 }))
            .collect()
    }

    #[test]
    fn test_endpoints_are_pinned() {
        let control = zigzag(6);
        let samples = sample_polyline(&control);
        assert_eq!(samples[0], control[0]);
        assert_eq!(*samples.last().unwrap(), control[5]);
    }

    #[test]
    fn test_curve_passes_through_interior_control_points() {
        let control = zigzag(5);
        let samples = sample_polyline(&control);
        // t = 0 of each window lands exactly on an interior control point.
        for target in &control[1..4] {
            assert!(
                samples
                    .iter()
                    .any(|s| s.distance_to(target) < 1e-9),
                "missing {target:?}"
            );
        }
    }

    #[test]
    fn test_sample_count() {
        let control = zigzag(4);
        // One window: endpoints + 21 window samples.
        assert_eq!(sample_polyline(&control).len(), 2 + SEGMENTS_PER_WINDOW + 1);
    }

    #[test]
    fn test_few_points_degenerate_to_control_polyline() {
        let two = zigzag(2);
        assert_eq!(sample_polyline(&two), two);
        let three = zigzag(3);
        assert_eq!(sample_polyline(&three), three);
    }

    #[test]
    fn test_sampling_is_idempotent() {
        let control = zigzag(7);
        assert_eq!(sample_polyline(&control), sample_polyline(&control));
    }

    #[test]
    fn test_collinear_control_points_stay_on_line() {
        let control: Vec<Point> = (0..5).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect();
        for s in sample_polyline(&control) {
            assert!((s.y - 2.0 * s.x).abs() < 1e-9);
        }
    }
}
