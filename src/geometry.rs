//! Rectangle intersection and edge-distance math for annotation placement.

use serde::Serialize;

use crate::types::Rect;

/// Signed edge-to-edge gaps between a target rect and its container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeDistances {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Whether two rects overlap on both axes. Touching edges count.
pub fn is_intersect(a: &Rect, b: &Rect) -> bool {
    is_intersect_x(a, b) && is_intersect_y(a, b)
}

/// Overlap test on the x axis.
///
/// Three cases, kept as written rather than reduced to the usual interval
/// test so that boundary behavior stays inclusive:
pub fn is_intersect_x(a: &Rect, b: &Rect) -> bool {
    (a.x >= b.x && a.x <= b.max_x()) // left edge of a within b's x span
        || (a.max_x() >= b.x && a.max_x() <= b.max_x()) // right edge of a within b's x span
        || (a.x < b.x && a.max_x() > b.max_x()) // a's x span contains b's
}

/// Overlap test on the y axis.
pub fn is_intersect_y(a: &Rect, b: &Rect) -> bool {
    (a.y >= b.y && a.y <= b.max_y()) // top edge of a within b's y span
        || (a.max_y() >= b.y && a.max_y() <= b.max_y()) // bottom edge of a within b's y span
        || (a.y < b.y && a.max_y() > b.max_y()) // a's y span contains b's
}

/// Distances from a target rect's edges to its container's edges.
///
/// No clamping: a negative value means the target extends past that side of
/// the container.
pub fn edge_distances(target: &Rect, container: &Rect) -> EdgeDistances {
    EdgeDistances {
        top: target.y - container.y,
        right: container.max_x() - target.max_x(),
        bottom: container.max_y() - target.max_y(),
        left: target.x - container.x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_intersect_overlapping_both_ways() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(is_intersect(&a, &b));
        assert!(is_intersect(&b, &a));
    }

    #[test]
    fn test_intersect_disjoint_both_ways() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(!is_intersect(&a, &b));
        assert!(!is_intersect(&b, &a));
    }

    #[test]
    fn test_intersect_touching_edges_inclusive() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(is_intersect(&a, &b));
        assert!(is_intersect(&b, &a));
    }

    #[test]
    fn test_intersect_a_contains_b() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(is_intersect(&a, &b));
        assert!(is_intersect(&b, &a));
    }

    #[test]
    fn test_intersect_x_only_is_not_enough() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 50.0, 10.0, 10.0);
        assert!(is_intersect_x(&a, &b));
        assert!(!is_intersect_y(&a, &b));
        assert!(!is_intersect(&a, &b));
    }

    #[test]
    fn test_edge_distances() {
        let target = Rect::new(10.0, 10.0, 5.0, 5.0);
        let container = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(
            edge_distances(&target, &container),
            EdgeDistances {
                top: 10.0,
                right: 85.0,
                bottom: 85.0,
                left: 10.0,
            }
        );
    }

    #[test]
    fn test_edge_distances_negative_when_escaping() {
        let target = Rect::new(-5.0, 0.0, 120.0, 50.0);
        let container = Rect::new(0.0, 0.0, 100.0, 100.0);
        let d = edge_distances(&target, &container);
        assert_eq!(d.left, -5.0);
        assert_eq!(d.right, -15.0);
        assert_eq!(d.top, 0.0);
        assert_eq!(d.bottom, 50.0);
    }
}
