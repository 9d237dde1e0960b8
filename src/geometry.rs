//! Angle and polar-projection helpers shared by the icon and compass code.
//!
//! Two angle conventions coexist on this screen and are easy to mix up:
//!
//! - [`AngleConvention::Drawing`]: 0° points right and angles grow clockwise,
//!   because y grows downward on the canvas. Icon rays and decorations use
//!   this one.
//! - [`AngleConvention::Compass`]: the vertical displacement is sign-flipped,
//!   so angles grow counter-clockwise on screen. Combined with
//!   [`rose_angle`], this puts bearing 0 at the top of the compass rose with
//!   bearings growing clockwise, the meteorological reading.
//!
//! Every projection goes through [`polar_point`] with an explicit convention
//! argument so the flip is never implicit in ad hoc trigonometry.

use embedded_graphics::prelude::Point;

use crate::config::{MIN_ICON_SIZE, MIN_RADIUS};

/// Which way the vertical axis runs for a polar projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleConvention {
    /// 0° points right, clockwise on a y-down screen.
    Drawing,
    /// 0° points right, counter-clockwise on screen (y displacement flipped).
    Compass,
}

/// Project a polar coordinate onto the pixel grid.
///
/// Returns the point `radius` pixels from `center` at `angle_deg`, rounded to
/// the nearest integer pixel. The two conventions produce the same horizontal
/// displacement and vertically mirrored ones.
pub fn polar_point(center: Point, radius: f32, angle_deg: f32, convention: AngleConvention) -> Point {
    let rad = angle_deg.to_radians();
    let dx = radius * rad.cos();
    let dy = match convention {
        AngleConvention::Drawing => radius * rad.sin(),
        AngleConvention::Compass => -(radius * rad.sin()),
    };
    Point::new(center.x + dx.round() as i32, center.y + dy.round() as i32)
}

/// Convert a meteorological bearing (0° = north, clockwise) into the
/// [`AngleConvention::Compass`] angle that projects it north-up on screen.
pub fn rose_angle(bearing_deg: f32) -> f32 {
    90.0 - bearing_deg
}

/// Clamp a ring or arrow radius to the smallest drawable value.
///
/// Zero or negative radii would degenerate circles and arrowheads into
/// points; callers clamp instead of erroring.
pub fn clamp_radius(radius: f32) -> f32 {
    radius.max(MIN_RADIUS)
}

/// Clamp an icon size to the smallest drawable value.
pub fn clamp_icon_size(size: i32) -> i32 {
    size.max(MIN_ICON_SIZE)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_convention_axes() {
        let c = Point::new(100, 100);
        assert_eq!(polar_point(c, 10.0, 0.0, AngleConvention::Drawing), Point::new(110, 100));
        // 90° goes down the screen under the drawing convention
        assert_eq!(polar_point(c, 10.0, 90.0, AngleConvention::Drawing), Point::new(100, 110));
        assert_eq!(polar_point(c, 10.0, 180.0, AngleConvention::Drawing), Point::new(90, 100));
        assert_eq!(polar_point(c, 10.0, 270.0, AngleConvention::Drawing), Point::new(100, 90));
    }

    #[test]
    fn test_compass_convention_axes() {
        let c = Point::new(100, 100);
        // 90° goes up the screen under the compass convention
        assert_eq!(polar_point(c, 10.0, 90.0, AngleConvention::Compass), Point::new(100, 90));
        assert_eq!(polar_point(c, 10.0, 270.0, AngleConvention::Compass), Point::new(100, 110));
    }

    #[test]
    fn test_conventions_differ_only_in_vertical_sign() {
        let c = Point::new(0, 0);
        let mut bearing = 0.0f32;
        while bearing < 360.0 {
            let drawing = polar_point(c, 57.0, bearing, AngleConvention::Drawing);
            let compass = polar_point(c, 57.0, bearing, AngleConvention::Compass);
            assert_eq!(drawing.x, compass.x, "x displacement must match at {bearing}°");
            assert_eq!(drawing.y, -compass.y, "y displacement must be mirrored at {bearing}°");
            bearing += 1.0;
        }
    }

    #[test]
    fn test_rose_angle_puts_north_up() {
        let c = Point::new(100, 100);
        let north = polar_point(c, 10.0, rose_angle(0.0), AngleConvention::Compass);
        assert_eq!(north, Point::new(100, 90), "bearing 0 projects straight up");

        let east = polar_point(c, 10.0, rose_angle(90.0), AngleConvention::Compass);
        assert_eq!(east, Point::new(110, 100), "bearing 90 projects right");

        let south = polar_point(c, 10.0, rose_angle(180.0), AngleConvention::Compass);
        assert_eq!(south, Point::new(100, 110), "bearing 180 projects down");
    }

    #[test]
    fn test_zero_radius_projects_to_center() {
        let c = Point::new(42, 17);
        assert_eq!(polar_point(c, 0.0, 123.0, AngleConvention::Drawing), c);
    }

    #[test]
    fn test_degenerate_clamps() {
        assert_eq!(clamp_radius(0.0), MIN_RADIUS);
        assert_eq!(clamp_radius(-80.0), MIN_RADIUS);
        assert_eq!(clamp_radius(80.0), 80.0);

        assert_eq!(clamp_icon_size(0), MIN_ICON_SIZE);
        assert_eq!(clamp_icon_size(-120), MIN_ICON_SIZE);
        assert_eq!(clamp_icon_size(120), 120);
    }
}
