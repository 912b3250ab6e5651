//! Spline editing state machine: one in-progress curve, a finished list.

use painterkit_core::{CurveError, Point};
use tracing::debug;

use crate::curve::{CurveKind, SplineCurve, CURVE_PALETTE};

/// Editing state of the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerState {
    /// No curve is being built.
    Idle,
    /// A curve is collecting control points.
    Building,
}

/// Owns every curve in the scene: an append-only finished list plus at most
/// one in-progress curve.
///
/// The minimum control-point count for finishing depends on the curve kind
/// the manager builds: 2 for the simple Catmull-Rom build, 4 for the
/// cubic-segment Bézier build.
#[derive(Debug, Clone)]
pub struct SplineManager {
    finished: Vec<SplineCurve>,
    current: Option<SplineCurve>,
    kind: CurveKind,
    color_index: usize,
}

impl SplineManager {
    /// Creates a manager building curves of the given kind.
    pub fn new(kind: CurveKind) -> Self {
        Self {
            finished: Vec::new(),
            current: None,
            kind,
            color_index: 0,
        }
    }

    /// Current editing state.
    pub fn state(&self) -> ManagerState {
        if self.current.is_some() {
            ManagerState::Building
        } else {
            ManagerState::Idle
        }
    }

    /// Minimum control points required to finish a curve.
    pub fn min_points(&self) -> usize {
        match self.kind {
            CurveKind::CatmullRom => 2,
            CurveKind::BezierSegments => 4,
        }
    }

    /// Begins a new curve in the next palette color.
    ///
    /// Any in-progress curve is discarded, not finished.
    pub fn start_new(&mut self) -> &SplineCurve {
        if let Some(dropped) = &self.current {
            debug!(
                points = dropped.control_points().len(),
                "discarding in-progress curve"
            );
        }
        let color = CURVE_PALETTE[self.color_index % CURVE_PALETTE.len()];
        self.color_index += 1;
        self.current.insert(SplineCurve::with_kind(color, self.kind))
    }

    /// The in-progress curve, if any.
    pub fn current(&self) -> Option<&SplineCurve> {
        self.current.as_ref()
    }

    /// Mutable access to the in-progress curve (style toggles, tension).
    pub fn current_mut(&mut self) -> Option<&mut SplineCurve> {
        self.current.as_mut()
    }

    /// Appends a control point to the in-progress curve and returns the new
    /// control-point count.
    pub fn add_point(&mut self, point: Point) -> Result<usize, CurveError> {
        let curve = self.current.as_mut().ok_or(CurveError::NoActiveCurve)?;
        curve.add_control_point(point);
        Ok(curve.control_points().len())
    }

    /// Promotes the in-progress curve to the finished list.
    ///
    /// Fails without changing any state when no curve is being built or the
    /// curve is below the minimum control-point count.
    pub fn finish(&mut self) -> Result<&SplineCurve, CurveError> {
        let required = self.min_points();
        let curve = self.current.take().ok_or(CurveError::NoActiveCurve)?;
        let actual = curve.control_points().len();
        if actual < required {
            // Hand the curve back untouched.
            self.current = Some(curve);
            return Err(CurveError::InsufficientPoints { required, actual });
        }
        debug!(points = actual, total = self.finished.len() + 1, "finished curve");
        self.finished.push(curve);
        Ok(&self.finished[self.finished.len() - 1])
    }

    /// Removes the most recent control point from the in-progress curve.
    pub fn remove_last_point(&mut self) -> Option<Point> {
        self.current.as_mut()?.remove_last_control_point()
    }

    /// Empties the in-progress curve without leaving the Building state.
    pub fn clear_current(&mut self) {
        if let Some(curve) = self.current.as_mut() {
            curve.clear_control_points();
        }
    }

    /// Removes and returns the most recently finished curve.
    pub fn remove_last_finished(&mut self) -> Option<SplineCurve> {
        self.finished.pop()
    }

    /// Drops every curve, finished and in-progress, returning to Idle.
    pub fn clear_all(&mut self) {
        self.finished.clear();
        self.current = None;
    }

    /// The finished curves, oldest first.
    pub fn finished(&self) -> &[SplineCurve] {
        &self.finished
    }

    /// Restores a finished curve (used when loading a design file).
    pub(crate) fn push_finished(&mut self, curve: SplineCurve) {
        self.finished.push(curve);
    }

    /// Number of finished curves.
    pub fn curve_count(&self) -> usize {
        self.finished.len()
    }

    /// Control points across every curve, in-progress included.
    pub fn total_control_points(&self) -> usize {
        let current = self
            .current
            .as_ref()
            .map_or(0, |c| c.control_points().len());
        self.finished
            .iter()
            .map(|c| c.control_points().len())
            .sum::<usize>()
            + current
    }

    /// Intermediate markers across every curve, in-progress included.
    pub fn total_intermediate_points(&self) -> usize {
        let current = self
            .current
            .as_ref()
            .map_or(0, |c| c.intermediate_points().len());
        self.finished
            .iter()
            .map(|c| c.intermediate_points().len())
            .sum::<usize>()
            + current
    }
}

impl Default for SplineManager {
    fn default() -> Self {
        Self::new(CurveKind::CatmullRom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(manager: &mut SplineManager, n: usize) {
        manager.start_new();
        for i in 0..n {
            manager
                .add_point(Point::new(i as f64 * 10.0, 0.0))
                .expect("building");
        }
    }

    #[test]
    fn test_finish_below_minimum_fails_and_preserves_state() {
        let mut manager = SplineManager::default();
        build(&mut manager, 1);
        let err = manager.finish().unwrap_err();
        assert_eq!(
            err,
            CurveError::InsufficientPoints {
                required: 2,
                actual: 1
            }
        );
        // Still building, single point intact.
        assert_eq!(manager.state(), ManagerState::Building);
        assert_eq!(manager.current().unwrap().control_points().len(), 1);
    }

    #[test]
    fn test_finish_at_minimum_succeeds() {
        let mut manager = SplineManager::default();
        build(&mut manager, 2);
        assert!(manager.finish().is_ok());
        assert_eq!(manager.state(), ManagerState::Idle);
        assert_eq!(manager.curve_count(), 1);
    }

    #[test]
    fn test_cubic_segment_rule_requires_four_points() {
        let mut manager = SplineManager::new(CurveKind::BezierSegments);
        build(&mut manager, 3);
        assert_eq!(
            manager.finish().unwrap_err(),
            CurveError::InsufficientPoints {
                required: 4,
                actual: 3
            }
        );
        manager.add_point(Point::new(30.0, 0.0)).unwrap();
        assert!(manager.finish().is_ok());
    }

    #[test]
    fn test_finish_when_idle_fails() {
        let mut manager = SplineManager::default();
        assert_eq!(manager.finish().unwrap_err(), CurveError::NoActiveCurve);
    }

    #[test]
    fn test_add_point_when_idle_fails() {
        let mut manager = SplineManager::default();
        assert_eq!(
            manager.add_point(Point::new(0.0, 0.0)).unwrap_err(),
            CurveError::NoActiveCurve
        );
    }

    #[test]
    fn test_start_new_discards_in_progress_curve() {
        let mut manager = SplineManager::default();
        build(&mut manager, 3);
        manager.start_new();
        assert_eq!(manager.current().unwrap().control_points().len(), 0);
        assert_eq!(manager.curve_count(), 0);
    }

    #[test]
    fn test_palette_rotates_per_curve() {
        let mut manager = SplineManager::default();
        let first = manager.start_new().color;
        let second = manager.start_new().color;
        assert_ne!(first, second);
        // The eighth curve wraps around to the first color.
        for _ in 0..6 {
            manager.start_new();
        }
        assert_eq!(manager.start_new().color, first);
    }

    #[test]
    fn test_clear_current_keeps_building_state() {
        let mut manager = SplineManager::default();
        build(&mut manager, 3);
        manager.clear_current();
        assert_eq!(manager.state(), ManagerState::Building);
        assert_eq!(manager.current().unwrap().control_points().len(), 0);
    }

    #[test]
    fn test_clear_all_returns_to_idle() {
        let mut manager = SplineManager::default();
        build(&mut manager, 2);
        manager.finish().unwrap();
        build(&mut manager, 1);
        manager.clear_all();
        assert_eq!(manager.state(), ManagerState::Idle);
        assert_eq!(manager.curve_count(), 0);
        assert_eq!(manager.total_control_points(), 0);
    }

    #[test]
    fn test_statistics_count_current_and_finished() {
        let mut manager = SplineManager::default();
        build(&mut manager, 3);
        manager.finish().unwrap();
        build(&mut manager, 2);
        assert_eq!(manager.curve_count(), 1);
        assert_eq!(manager.total_control_points(), 5);
        // 2 segments in the finished curve, 1 in the current: 3 * 2 markers.
        assert_eq!(manager.total_intermediate_points(), 6);
    }

    #[test]
    fn test_remove_last_finished() {
        let mut manager = SplineManager::default();
        build(&mut manager, 2);
        manager.finish().unwrap();
        assert!(manager.remove_last_finished().is_some());
        assert!(manager.remove_last_finished().is_none());
    }
}
