//! Perspective-depth projection shared by every depth consumer
//!
//! The pseudo-3D look comes from one pair of formulas: depth eases
//! quadratically toward the floor, and lateral offsets shrink by the
//! same factor. Spawn placement, motion, collision and the renderer
//! all go through these functions; recomputing them inline anywhere
//! else is how draw/collide drift bugs happen, so don't.

use glam::Vec2;

use crate::consts::{CENTER_X, HORIZON_Y, VIEW_HEIGHT};

/// Foreshortening factor for a normalized depth
#[inline]
pub fn scale(z: f32) -> f32 {
    z * z
}

/// Vertical screen position for a depth between horizon and floor
#[inline]
pub fn screen_y(z: f32, horizon_y: f32, floor_y: f32) -> f32 {
    horizon_y + scale(z) * (floor_y - horizon_y)
}

/// Horizontal screen position for a depth-space lateral offset
#[inline]
pub fn screen_x(z: f32, depth_offset: f32, center_x: f32) -> f32 {
    center_x + depth_offset * scale(z)
}

/// Project a depth-space point onto the fixed course view
#[inline]
pub fn project(z: f32, x_offset: f32) -> Vec2 {
    Vec2::new(
        screen_x(z, x_offset, CENTER_X),
        screen_y(z, HORIZON_Y, VIEW_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_quadratic() {
        assert_eq!(scale(0.0), 0.0);
        assert_eq!(scale(0.5), 0.25);
        assert_eq!(scale(1.0), 1.0);
    }

    #[test]
    fn test_screen_y_spans_horizon_to_floor() {
        assert_eq!(screen_y(0.0, 300.0, 600.0), 300.0);
        assert_eq!(screen_y(1.0, 300.0, 600.0), 600.0);
        // Quadratic ease: halfway in depth is a quarter of the way down
        assert_eq!(screen_y(0.5, 300.0, 600.0), 375.0);
    }

    #[test]
    fn test_screen_x_converges_at_horizon() {
        // At z=0 every lateral offset collapses onto the center line
        assert_eq!(screen_x(0.0, 300.0, 400.0), 400.0);
        assert_eq!(screen_x(0.0, -300.0, 400.0), 400.0);
        assert_eq!(screen_x(1.0, 300.0, 400.0), 700.0);
    }

    #[test]
    fn test_project_matches_component_formulas() {
        for &(z, x_offset) in &[(0.0, 0.0), (0.3, -120.0), (0.77, 295.0), (1.49, 42.0)] {
            let p = project(z, x_offset);
            assert_eq!(p.x, screen_x(z, x_offset, CENTER_X));
            assert_eq!(p.y, screen_y(z, HORIZON_Y, VIEW_HEIGHT));
        }
    }
}
