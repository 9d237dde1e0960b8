//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are built once as `const` values instead
//! of being constructed in every draw function. All text is drawn in [`INK`]
//! on the two-tone surface, so unlike a color display there is exactly one
//! style per font role.
//!
//! The `iso_8859_1` font variants are used instead of `ascii` because the
//! dashboard needs the `°` and `·` glyphs.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        iso_8859_1::{FONT_9X15, FONT_9X15_BOLD, FONT_10X20},
    },
    pixelcolor::BinaryColor,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::palette::INK;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Left-aligned text anchored at its top edge, matching how the layout
/// constants address every block: by its top-left corner.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Centered text anchored at its top edge. Used for the wind line under the
/// compass, where the rasterizer's own metrics do the exact centering.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Centered text anchored at its middle. Used for compass cardinal labels,
/// which sit on a computed polar point.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Right-aligned text anchored at its top edge. Used for the status bar
/// clock.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Large digits for the temperature readout (`ProFont` 24pt).
pub const VALUE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_24_POINT, INK);

/// Section headings and the condition description (`ProFont` 18pt).
pub const HEADING_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_18_POINT, INK);

/// Body text for detail lines and readouts (10x20).
pub const BODY_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_10X20, INK);

/// Small text for the status bar and forecast annotations (9x15).
pub const SMALL_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_9X15, INK);

/// Bold compass cardinal labels (9x15 bold).
pub const COMPASS_LABEL_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_9X15_BOLD, INK);
