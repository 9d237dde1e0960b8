//! Two-tone palette for the e-paper surface.
//!
//! The panel is strictly monochrome, so the whole renderer works in terms of
//! two named colors instead of raw `BinaryColor` values.

use embedded_graphics::pixelcolor::BinaryColor;

/// Foreground pixels (black ink on the physical panel).
pub const INK: BinaryColor = BinaryColor::On;

/// Background pixels (blank paper on the physical panel).
pub const PAPER: BinaryColor = BinaryColor::Off;
