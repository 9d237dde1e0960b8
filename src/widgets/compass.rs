//! Compass rose and wind arrow.
//!
//! The rose is two concentric rings with eight labeled spokes; the wind
//! arrow is drawn over it along the current bearing. Both go through
//! [`rose_angle`] so bearing 0 is north-up on screen and bearings grow
//! clockwise, and the arrowhead is the only filled shape on the whole
//! dashboard.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Triangle},
    text::Text,
};

use crate::{
    geometry::{AngleConvention, clamp_radius, polar_point, rose_angle},
    palette::INK,
    styles::{CENTERED_MIDDLE, COMPASS_LABEL_STYLE},
};

/// Inner ring radius as a fraction of the rose radius.
const INNER_RING_SCALE: f32 = 0.7;

/// Spokes start at this fraction of the radius.
const SPOKE_INNER_SCALE: f32 = 0.3;

/// Cardinal labels sit this far out from the center.
const LABEL_SCALE: f32 = 1.2;

/// Arrow shaft length as a fraction of the rose radius.
const ARROW_SHAFT_SCALE: f32 = 0.8;

/// Arrowhead edge length as a fraction of the rose radius.
const ARROW_HEAD_SCALE: f32 = 0.2;

/// Angle between the shaft direction and each arrowhead back corner.
const ARROW_HEAD_SWEEP: f32 = 150.0;

/// The eight cardinal points: label and bearing.
const CARDINALS: [(&str, i32); 8] = [
    ("N", 0),
    ("NE", 45),
    ("E", 90),
    ("SE", 135),
    ("S", 180),
    ("SW", 225),
    ("W", 270),
    ("NW", 315),
];

/// Traditional Mediterranean wind names, one per 45° sector starting at
/// north and going clockwise.
const WIND_NAMES: [&str; 8] = [
    "Tramontana",
    "Grecale",
    "Levante",
    "Scirocco",
    "Ostro",
    "Libeccio",
    "Ponente",
    "Maestrale",
];

/// Name the wind blowing from `bearing_deg`.
///
/// The bearing is normalized with `rem_euclid(360)` (so 360 reads as 0) and
/// quantized to the nearest 45° sector. Ties at the exact 22.5° sector
/// boundaries round half-up: 22.5 is already Grecale.
pub fn wind_name(bearing_deg: f32) -> &'static str {
    let normalized = bearing_deg.rem_euclid(360.0);
    WIND_NAMES[((normalized / 45.0).round() as usize) % 8]
}

/// Draw the compass rose: rings, spokes, and cardinal labels.
///
/// Principal directions get a heavier spoke than the intermediate ones,
/// which is what keeps the rose readable at a glance on the panel.
pub fn draw_compass_rose<D>(display: &mut D, center: Point, radius: f32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let radius = clamp_radius(radius);
    let ring = PrimitiveStyle::with_stroke(INK, 1);

    Circle::with_center(center, (radius * 2.0) as u32)
        .into_styled(ring)
        .draw(display)
        .ok();
    Circle::with_center(center, (radius * INNER_RING_SCALE * 2.0) as u32)
        .into_styled(ring)
        .draw(display)
        .ok();

    for (label, bearing) in CARDINALS {
        let angle = rose_angle(bearing as f32);
        let principal = bearing % 90 == 0;
        let stroke = PrimitiveStyle::with_stroke(INK, if principal { 2 } else { 1 });

        let start = polar_point(center, radius * SPOKE_INNER_SCALE, angle, AngleConvention::Compass);
        let end = polar_point(center, radius, angle, AngleConvention::Compass);
        Line::new(start, end).into_styled(stroke).draw(display).ok();

        let label_at = polar_point(center, radius * LABEL_SCALE, angle, AngleConvention::Compass);
        Text::with_text_style(label, label_at, COMPASS_LABEL_STYLE, CENTERED_MIDDLE)
            .draw(display)
            .ok();
    }
}

/// Draw the wind arrow from the rose center along `bearing_deg`.
///
/// The shaft runs to 0.8 radius; the filled triangular head has its back
/// corners swept ±150° off the shaft direction.
pub fn draw_wind_arrow<D>(display: &mut D, center: Point, radius: f32, bearing_deg: f32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let radius = clamp_radius(radius);
    let angle = rose_angle(bearing_deg);

    let tip = polar_point(center, radius * ARROW_SHAFT_SCALE, angle, AngleConvention::Compass);
    Line::new(center, tip)
        .into_styled(PrimitiveStyle::with_stroke(INK, 2))
        .draw(display)
        .ok();

    let head_len = radius * ARROW_HEAD_SCALE;
    let left = polar_point(tip, head_len, angle + ARROW_HEAD_SWEEP, AngleConvention::Compass);
    let right = polar_point(tip, head_len, angle - ARROW_HEAD_SWEEP, AngleConvention::Compass);
    Triangle::new(tip, left, right)
        .into_styled(PrimitiveStyle::with_fill(INK))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
