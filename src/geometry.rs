//! Shape-outline reconstruction and extent summaries.
//!
//! A shape is an ordered segment list; the curve from segment `i` ends at
//! segment `i + 1`'s start (wrapping back to the first segment), drawn as a
//! cubic, quadratic or straight piece depending on how many control points
//! the segment carries. Malformed segment data never aborts a render: it is
//! logged and the shape contributes no path.

use crate::model::{Point, Shape};
use log::debug;

/// Convert a shape into SVG path data: one `M`, one draw command per
/// segment, one `Z`. Returns an empty string for an empty or malformed
/// shape. Coordinates are emitted with fixed two-decimal precision so
/// identical input yields identical output.
pub fn shape_to_path(shape: &Shape) -> String {
    let segments = shape.segments();
    if segments.is_empty() {
        return String::new();
    }

    let Some(first) = segments[0].start else {
        debug!("segment missing start point, skipping shape");
        return String::new();
    };
    let mut parts = Vec::with_capacity(segments.len() + 2);
    parts.push(format!("M {:.2} {:.2}", first.x, first.y));

    for (i, segment) in segments.iter().enumerate() {
        // End point is the start of the next segment, or close to first.
        let Some(end) = segments[(i + 1) % segments.len()].start else {
            debug!("segment missing start point, skipping shape");
            return String::new();
        };
        let Some(control_points) = segment.control_points() else {
            debug!("segment has unusable control points, skipping shape");
            return String::new();
        };
        match control_points {
            [c1, c2, ..] => parts.push(format!(
                "C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
                c1.x, c1.y, c2.x, c2.y, end.x, end.y
            )),
            [c] => parts.push(format!("Q {:.2} {:.2}, {:.2} {:.2}", c.x, c.y, end.x, end.y)),
            [] => parts.push(format!("L {:.2} {:.2}", end.x, end.y)),
        }
    }

    parts.push("Z".to_string());
    parts.join(" ")
}

/// Arithmetic mean of the segment start points. `(0, 0)` for an empty or
/// malformed shape; a defined fallback, not an error.
pub fn centroid(shape: &Shape) -> (f64, f64) {
    let segments = shape.segments();
    if segments.is_empty() {
        return (0.0, 0.0);
    }
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for segment in segments {
        let Some(start) = segment.start else {
            return (0.0, 0.0);
        };
        sum_x += start.x;
        sum_y += start.y;
    }
    let count = segments.len() as f64;
    (sum_x / count, sum_y / count)
}

/// The smaller of the x-range and y-range across segment start points, used
/// as a sizing proxy for badges and labels. 0 when fewer than two points
/// are available.
pub fn extent(shape: &Shape) -> f64 {
    let starts: Vec<Point> = shape.segments().iter().filter_map(|s| s.start).collect();
    if starts.len() < 2 {
        return 0.0;
    }
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for point in &starts {
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }
    (max_x - min_x).min(max_y - min_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Shape {
        serde_json::from_str(
            r#"{"segments": [
                {"start": {"x": 0, "y": 0}},
                {"start": {"x": 10, "y": 0}},
                {"start": {"x": 10, "y": 10}},
                {"start": {"x": 0, "y": 10}}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn square_path_has_one_move_four_draws_one_close() {
        let d = shape_to_path(&square());
        assert_eq!(
            d,
            "M 0.00 0.00 L 10.00 0.00 L 10.00 10.00 L 0.00 10.00 L 0.00 0.00 Z"
        );
        assert_eq!(d.matches('M').count(), 1);
        assert_eq!(d.matches('L').count(), 4);
        assert_eq!(d.matches('Z').count(), 1);
    }

    #[test]
    fn control_point_count_selects_curve_command() {
        let shape: Shape = serde_json::from_str(
            r#"{"segments": [
                {"start": {"x": 0, "y": 0},
                 "bezierControlPoints": [{"x": 1, "y": 1}, {"x": 2, "y": 1}]},
                {"start": {"x": 3, "y": 0},
                 "bezierControlPoints": [{"x": 4, "y": 1}]},
                {"start": {"x": 5, "y": 0}}
            ]}"#,
        )
        .unwrap();
        let d = shape_to_path(&shape);
        assert!(d.contains("C 1.00 1.00, 2.00 1.00, 3.00 0.00"));
        assert!(d.contains("Q 4.00 1.00, 5.00 0.00"));
        assert!(d.ends_with("L 0.00 0.00 Z"));
    }

    #[test]
    fn empty_shape_yields_no_path() {
        assert_eq!(shape_to_path(&Shape::default()), "");
    }

    #[test]
    fn malformed_segment_yields_no_path() {
        let shape: Shape = serde_json::from_str(
            r#"{"segments": [
                {"start": {"x": 0, "y": 0}},
                {"start": {"x": "broken", "y": 1}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(shape_to_path(&shape), "");
    }

    #[test]
    fn centroid_of_square_is_center() {
        assert_eq!(centroid(&square()), (5.0, 5.0));
    }

    #[test]
    fn centroid_falls_back_to_origin() {
        assert_eq!(centroid(&Shape::default()), (0.0, 0.0));
        let malformed: Shape =
            serde_json::from_str(r#"{"segments": [{"start": null}]}"#).unwrap();
        assert_eq!(centroid(&malformed), (0.0, 0.0));
    }

    #[test]
    fn extent_is_smaller_axis_range() {
        let shape: Shape = serde_json::from_str(
            r#"{"segments": [
                {"start": {"x": 0, "y": 0}},
                {"start": {"x": 40, "y": 0}},
                {"start": {"x": 40, "y": 10}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(extent(&shape), 10.0);
    }

    #[test]
    fn extent_of_single_point_is_zero() {
        let shape: Shape =
            serde_json::from_str(r#"{"segments": [{"start": {"x": 3, "y": 4}}]}"#).unwrap();
        assert_eq!(extent(&shape), 0.0);
    }
}
