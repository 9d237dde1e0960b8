//! Parametric weather condition icons.
//!
//! Every glyph is built from stroked primitives sized off a single scalar, so
//! the same recipes serve the large current-conditions icon and the small
//! forecast previews. Icons are outline-only; nothing here fills a region.
//!
//! Icon selection is a case-insensitive substring match over an ordered
//! keyword table. Provider descriptions arrive localized (the same feed
//! serves English and Italian text), so each icon kind is matched by both a
//! keyword pair.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Ellipse, Line, Polyline, PrimitiveStyle},
};

use crate::{
    geometry::{AngleConvention, clamp_icon_size, polar_point},
    palette::INK,
};

/// Stroke style shared by the icon outlines.
const OUTLINE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(INK, 2);

/// Thin stroke for small decorations (snow flakes).
const THIN_OUTLINE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(INK, 1);

/// The six renderable icon shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Sun,
    Cloud,
    Rain,
    Snow,
    Thunderstorm,
    Fog,
}

/// Ordered keyword table driving [`classify_condition`].
///
/// First match wins, so the order is a committed contract: rain before snow
/// before cloud before fog before thunderstorm. "thunderstorm with rain"
/// therefore classifies as rain. Keywords are lowercase; the input is
/// lowercased before matching.
const CONDITION_KEYWORDS: [(&str, IconKind); 10] = [
    ("pioggia", IconKind::Rain),
    ("rain", IconKind::Rain),
    ("neve", IconKind::Snow),
    ("snow", IconKind::Snow),
    ("nuvol", IconKind::Cloud),
    ("cloud", IconKind::Cloud),
    ("nebbia", IconKind::Fog),
    ("fog", IconKind::Fog),
    ("temporale", IconKind::Thunderstorm),
    ("thunder", IconKind::Thunderstorm),
];

/// Map a free-text condition description to an icon kind.
///
/// Total and deterministic: every input, including the empty string and
/// descriptions with no known keyword, yields exactly one kind. Clear-sky
/// wording is the fallback rather than a keyword.
pub fn classify_condition(description: &str) -> IconKind {
    let lowered = description.to_lowercase();
    for (keyword, kind) in CONDITION_KEYWORDS {
        if lowered.contains(keyword) {
            return kind;
        }
    }
    IconKind::Sun
}

/// Draw the icon for a condition description with its top-left at `anchor`.
pub fn draw_condition_icon<D>(display: &mut D, description: &str, anchor: Point, size: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_icon(display, classify_condition(description), anchor, size);
}

/// Draw a specific icon kind with its top-left at `anchor`.
///
/// `size` is clamped to the drawable minimum. Identical `(kind, anchor,
/// size)` inputs always produce pixel-identical output.
pub fn draw_icon<D>(display: &mut D, kind: IconKind, anchor: Point, size: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let size = clamp_icon_size(size);
    match kind {
        IconKind::Sun => draw_sun(display, anchor + Point::new(size / 2, size / 2), size),
        IconKind::Cloud => draw_cloud(display, anchor, size),
        IconKind::Rain => draw_rain(display, anchor, size),
        IconKind::Snow => draw_snow(display, anchor, size),
        IconKind::Thunderstorm => draw_thunderstorm(display, anchor, size),
        IconKind::Fog => draw_fog(display, anchor, size),
    }
}

/// Central disc plus eight rays at 45° steps.
///
/// Unlike the other recipes this one is centered: the dispatcher converts the
/// top-left anchor before calling.
fn draw_sun<D>(display: &mut D, center: Point, size: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let radius = size / 3;
    Circle::with_center(center, (radius * 2) as u32)
        .into_styled(OUTLINE)
        .draw(display)
        .ok();

    // Rays run from just outside the disc to half the icon size
    let ray_inner = (radius + 5) as f32;
    let ray_outer = (size / 2) as f32;
    for i in 0..8 {
        let angle = (i * 45) as f32;
        let start = polar_point(center, ray_inner, angle, AngleConvention::Drawing);
        let end = polar_point(center, ray_outer, angle, AngleConvention::Drawing);
        Line::new(start, end).into_styled(OUTLINE).draw(display).ok();
    }
}

/// Cumulus silhouette: a full-width base ellipse with two raised lobes.
fn draw_cloud<D>(display: &mut D, anchor: Point, size: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let width = size * 3 / 4;
    let height = size / 2;

    Ellipse::new(anchor, Size::new(width as u32, height as u32))
        .into_styled(OUTLINE)
        .draw(display)
        .ok();
    Ellipse::new(
        anchor + Point::new(width / 2, -height / 3),
        Size::new((width - width / 2) as u32, (height / 2 + height / 3) as u32),
    )
    .into_styled(OUTLINE)
    .draw(display)
    .ok();
    Ellipse::new(
        anchor + Point::new(width / 4, -height / 4),
        Size::new((width / 2) as u32, (height / 2 + height / 4) as u32),
    )
    .into_styled(OUTLINE)
    .draw(display)
    .ok();
}

/// Cloud at two-thirds scale with three diagonal streaks below.
fn draw_rain<D>(display: &mut D, anchor: Point, size: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_cloud(display, anchor, size * 2 / 3);

    let drop_top = anchor.y + size / 2;
    for i in 0..3 {
        let drop_x = anchor.x + i * size / 3;
        Line::new(
            Point::new(drop_x, drop_top),
            Point::new(drop_x - size / 6, drop_top + size / 3),
        )
        .into_styled(OUTLINE)
        .draw(display)
        .ok();
    }
}

/// Cloud at two-thirds scale with three ring flakes below.
fn draw_snow<D>(display: &mut D, anchor: Point, size: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_cloud(display, anchor, size * 2 / 3);

    let flake_y = anchor.y + size / 2 + size / 3;
    let flake_diameter = (size / 4) as u32;
    for i in 0..3 {
        let flake_x = anchor.x + i * size / 3;
        Circle::with_center(Point::new(flake_x, flake_y), flake_diameter)
            .into_styled(THIN_OUTLINE)
            .draw(display)
            .ok();
    }
}

/// Cloud at two-thirds scale with a four-point lightning zigzag.
fn draw_thunderstorm<D>(display: &mut D, anchor: Point, size: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_cloud(display, anchor, size * 2 / 3);

    let bolt = [
        anchor + Point::new(size / 2, size / 2),
        anchor + Point::new(size / 3, size * 2 / 3),
        anchor + Point::new(size / 2, size * 2 / 3),
        anchor + Point::new(size / 3, size),
    ];
    Polyline::new(&bolt).into_styled(OUTLINE).draw(display).ok();
}

/// Four stacked five-point wavy lines.
fn draw_fog<D>(display: &mut D, anchor: Point, size: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    for i in 0..4 {
        let y = anchor.y + i * size / 4;
        let wave = [
            Point::new(anchor.x, y),
            Point::new(anchor.x + size / 4, y - size / 8),
            Point::new(anchor.x + size / 2, y),
            Point::new(anchor.x + size * 3 / 4, y - size / 8),
            Point::new(anchor.x + size, y),
        ];
        Polyline::new(&wave).into_styled(OUTLINE).draw(display).ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
