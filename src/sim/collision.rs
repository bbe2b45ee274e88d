//! Geometric tests shared by the integrator and the spawner
//!
//! Bullets are points, so bullet contact is a circle test with radius 0.

use glam::Vec2;

/// True if two circles touch or overlap
#[inline]
pub fn circles_overlap(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    center_a.distance(center_b) <= radius_a + radius_b
}

/// True if `pos` lies outside `[-margin, width + margin] × [-margin, height + margin]`
#[inline]
pub fn is_out_of_bounds(pos: Vec2, margin: f32, width: f32, height: f32) -> bool {
    pos.x < -margin || pos.x > width + margin || pos.y < -margin || pos.y > height + margin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circles_overlap() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_overlap(a, 10.0, Vec2::new(15.0, 0.0), 10.0));
        assert!(!circles_overlap(a, 10.0, Vec2::new(25.0, 0.0), 10.0));
    }

    #[test]
    fn test_circles_touching_counts() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!(circles_overlap(a, 2.0, b, 3.0));
        assert!(circles_overlap(b, 3.0, a, 2.0));
    }

    #[test]
    fn test_point_in_circle() {
        let rock = Vec2::new(100.0, 100.0);
        assert!(circles_overlap(rock, 30.0, Vec2::new(120.0, 100.0), 0.0));
        assert!(!circles_overlap(rock, 30.0, Vec2::new(131.0, 100.0), 0.0));
    }

    #[test]
    fn test_out_of_bounds_zero_margin() {
        assert!(!is_out_of_bounds(Vec2::new(0.0, 0.0), 0.0, 800.0, 500.0));
        assert!(!is_out_of_bounds(Vec2::new(800.0, 500.0), 0.0, 800.0, 500.0));
        assert!(is_out_of_bounds(Vec2::new(800.1, 250.0), 0.0, 800.0, 500.0));
        assert!(is_out_of_bounds(Vec2::new(400.0, -0.1), 0.0, 800.0, 500.0));
    }

    #[test]
    fn test_out_of_bounds_with_margin() {
        assert!(!is_out_of_bounds(Vec2::new(850.0, 250.0), 120.0, 800.0, 500.0));
        assert!(is_out_of_bounds(Vec2::new(921.0, 250.0), 120.0, 800.0, 500.0));
        assert!(!is_out_of_bounds(Vec2::new(-100.0, -100.0), 120.0, 800.0, 500.0));
    }
}
