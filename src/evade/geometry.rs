//! Axis-aligned rectangle math for placement decisions

use glam::Vec2;

/// Axis-aligned box in container-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn from_coords(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// AABB overlap test. Edge-touching boxes do not count as
    /// intersecting, so zero-area rects never intersect anything.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}

/// Usable placement span on one axis: `[padding, axis - item - padding]`.
/// Degenerate containers clamp to an empty span at `padding`.
#[inline]
pub fn placement_span(axis: f32, item: f32, padding: f32) -> f32 {
    (axis - item - 2.0 * padding).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_coords(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_coords(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_edge_touch() {
        // Sharing an edge is not an overlap
        let a = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_coords(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_contained() {
        let outer = Rect::from_coords(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::from_coords(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_placement_span() {
        assert_eq!(placement_span(400.0, 80.0, 12.0), 296.0);
        assert_eq!(placement_span(200.0, 36.0, 12.0), 140.0);
        // Container smaller than the item clamps to zero
        assert_eq!(placement_span(50.0, 80.0, 12.0), 0.0);
    }
}
