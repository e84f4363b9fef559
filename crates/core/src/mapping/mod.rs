use serde::Serialize;

use crate::{geometry::Point3, Result, StudioError};

/// Half-width, in scene units, that data is scaled to when no target is given.
pub const DEFAULT_TARGET_SCALE: f64 = 4.0;

/// Floor for the data span so coincident points do not divide by zero.
pub const MIN_SPAN: f64 = 1e-8;

/// Raw data coordinate.
pub type Point2 = [f64; 2];

/// Maps raw 2D data into scene coordinates by centering on the data mean and
/// scaling uniformly so the larger extent equals the target scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Normalizer {
    center: Point2,
    scale: f64,
}

impl Normalizer {
    /// Fits a normalizer to the union of `point_sets`.
    ///
    /// The center is the mean of every point across all sets, not the mean
    /// of the per-set means.
    pub fn fit<S>(point_sets: &[S], target_scale: f64) -> Result<Self>
    where
        S: AsRef<[Point2]>,
    {
        if !(target_scale.is_finite() && target_scale > 0.0) {
            return Err(StudioError::InvalidArgument(format!(
                "target scale must be positive and finite, got {target_scale}"
            )));
        }

        let mut count = 0usize;
        let mut center = [0.0, 0.0];
        let mut min = [f64::INFINITY, f64::INFINITY];
        let mut max = [f64::NEG_INFINITY, f64::NEG_INFINITY];

        for point in point_sets.iter().flat_map(|set| set.as_ref()) {
            count += 1;
            for axis in 0..2 {
                // Running mean; a plain sum overflows for large coordinates.
                center[axis] += (point[axis] - center[axis]) / count as f64;
                min[axis] = min[axis].min(point[axis]);
                max[axis] = max[axis].max(point[axis]);
            }
        }

        if count == 0 {
            return Err(StudioError::EmptyInput);
        }

        let span = (max[0] - min[0]).max(max[1] - min[1]).max(MIN_SPAN);
        let scale = target_scale / span;

        tracing::debug!(points = count, ?center, span, scale, "fitted normalizer");
        Ok(Self { center, scale })
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn apply(&self, point: Point2) -> Point3 {
        Point3::new(
            (point[0] - self.center[0]) * self.scale,
            (point[1] - self.center[1]) * self.scale,
            0.0,
        )
    }

    pub fn apply_all(&self, points: &[Point2]) -> Vec<Point3> {
        points.iter().map(|p| self.apply(*p)).collect()
    }
}

/// Builds a function mapping data points to scene points.
///
/// See [`Normalizer::fit`] for how the center and scale are derived. The
/// returned closure only captures plain numbers, so it can be shared across
/// threads freely.
pub fn make_normalizer<S>(
    point_sets: &[S],
    target_scale: f64,
) -> Result<impl Fn(Point2) -> Point3 + Copy + Send + Sync>
where
    S: AsRef<[Point2]>,
{
    let normalizer = Normalizer::fit(point_sets, target_scale)?;
    Ok(move |point: Point2| normalizer.apply(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn center_maps_to_origin() {
        let to_scene = make_normalizer(&[vec![[0.0, 0.0], [10.0, 10.0]]], DEFAULT_TARGET_SCALE)
            .unwrap();
        let p = to_scene([5.0, 5.0]);
        assert!(close(p.x, 0.0) && close(p.y, 0.0));
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn edge_maps_to_half_target_scale() {
        let to_scene = make_normalizer(&[[[0.0, 0.0], [10.0, 0.0]]], 5.0).unwrap();
        let edge = to_scene([10.0, 0.0]);
        assert!(close(edge.x, 2.5));
        assert_eq!(edge.z, 0.0);
    }

    #[test]
    fn center_is_mean_of_combined_points() {
        let a = vec![[0.0, 0.0], [5.0, 5.0]];
        let b = vec![[10.0, 10.0], [15.0, 15.0]];
        let to_scene = make_normalizer(&[a, b], 4.0).unwrap();
        let p = to_scene([7.5, 7.5]);
        assert!(close(p.x, 0.0) && close(p.y, 0.0));
    }

    #[test]
    fn uneven_sets_weight_points_not_sets() {
        let a: &[Point2] = &[[0.0, 0.0]];
        let b: &[Point2] = &[[3.0, 0.0], [3.0, 0.0], [3.0, 0.0]];
        let normalizer = Normalizer::fit(&[a, b], 4.0).unwrap();
        assert!(close(normalizer.center()[0], 2.25));
    }

    #[test]
    fn coincident_points_give_finite_output() {
        let to_scene = make_normalizer(&[[[2.0, 2.0], [2.0, 2.0], [2.0, 2.0]]], 4.0).unwrap();
        let at = to_scene([2.0, 2.0]);
        assert_eq!(at, Point3::new(0.0, 0.0, 0.0));
        let off = to_scene([2.5, 2.0]);
        assert!(off.x.is_finite() && off.x > 0.0);
    }

    #[test]
    fn huge_coordinates_do_not_overflow_the_mean() {
        let to_scene = make_normalizer(&[[[1e308, 0.0], [1e308, 0.0], [1e308, 0.0]]], 4.0).unwrap();
        assert_eq!(to_scene([1e308, 0.0]), Point3::new(0.0, 0.0, 0.0));

        let spread = Normalizer::fit(&[[[1e308, 0.0], [1.5e308, 0.0]]], 4.0).unwrap();
        assert!(spread.center()[0].is_finite());
        let edge = spread.apply([1.5e308, 0.0]);
        assert!((edge.x - 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_is_rejected() {
        let none: [Vec<Point2>; 0] = [];
        assert!(matches!(
            Normalizer::fit(&none, 4.0),
            Err(StudioError::EmptyInput)
        ));
        assert!(matches!(
            Normalizer::fit(&[Vec::<Point2>::new(), Vec::new()], 4.0),
            Err(StudioError::EmptyInput)
        ));
    }

    #[test]
    fn non_positive_target_scale_is_rejected() {
        let data = [[[0.0, 0.0], [1.0, 1.0]]];
        assert!(matches!(
            Normalizer::fit(&data, 0.0),
            Err(StudioError::InvalidArgument(_))
        ));
        assert!(Normalizer::fit(&data, f64::NAN).is_err());
    }

    #[test]
    fn larger_extent_sets_the_scale() {
        let normalizer = Normalizer::fit(&[[[0.0, 0.0], [2.0, 8.0]]], 4.0).unwrap();
        assert!(close(normalizer.scale(), 0.5));
        let mapped = normalizer.apply_all(&[[0.0, 0.0], [2.0, 8.0]]);
        assert!(close(mapped[0].y, -2.0) && close(mapped[1].y, 2.0));
    }

    #[test]
    fn serializes_fitted_parameters() {
        let normalizer = Normalizer::fit(&[[[0.0, 0.0], [4.0, 2.0]]], 4.0).unwrap();
        let json = serde_json::to_value(normalizer).unwrap();
        assert_eq!(json, serde_json::json!({ "center": [2.0, 1.0], "scale": 1.0 }));
    }

    #[test]
    fn usable_from_other_threads() {
        let to_scene = make_normalizer(&[[[0.0, 0.0], [4.0, 4.0]]], 4.0).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || to_scene([4.0, 4.0])))
            .collect();
        for handle in handles {
            let p = handle.join().unwrap();
            assert!(close(p.x, 2.0) && close(p.y, 2.0));
        }
    }
}
