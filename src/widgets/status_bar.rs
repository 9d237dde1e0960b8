//! Bottom status bar: separator line, host load readouts, clock.
//!
//! The status bar is the one element drawn on every frame, including the
//! frame rendered when the weather fetch failed and both content regions are
//! suppressed.

use core::fmt::Write as _;

use chrono::NaiveDateTime;
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::Text,
};
use heapless::String;

use crate::{
    config::{SCREEN_WIDTH, STATUS_MARGIN_X, STATUS_SEPARATOR_Y, STATUS_STRIDE_X, STATUS_TEXT_X, STATUS_TEXT_Y},
    data::SystemStats,
    palette::INK,
    styles::{LEFT_ALIGNED, RIGHT_ALIGNED, SMALL_STYLE},
};

/// Fallback line for missing host telemetry.
pub const SYSTEM_PLACEHOLDER: &str = "System data not available";

/// Separator line endpoints, inset from both panel edges.
const SEPARATOR_START: Point = Point::new(STATUS_MARGIN_X, STATUS_SEPARATOR_Y);
const SEPARATOR_END: Point = Point::new(SCREEN_WIDTH as i32 - STATUS_MARGIN_X, STATUS_SEPARATOR_Y);

/// Anchor of the right-aligned clock.
const CLOCK_POS: Point = Point::new(SCREEN_WIDTH as i32 - STATUS_MARGIN_X, STATUS_TEXT_Y);

/// Draw the status bar: separator, labeled percentage readouts, clock.
pub fn draw_status_bar<D>(display: &mut D, stats: Option<&SystemStats>, now: NaiveDateTime)
where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(SEPARATOR_START, SEPARATOR_END)
        .into_styled(PrimitiveStyle::with_stroke(INK, 1))
        .draw(display)
        .ok();

    match stats {
        Some(stats) => {
            let readouts = [
                ("CPU", stats.cpu_percent),
                ("RAM", stats.memory_percent),
                ("DISK", stats.disk_percent),
            ];
            for (i, (label, value)) in readouts.into_iter().enumerate() {
                let mut text: String<16> = String::new();
                let _ = write!(text, "{label}: {value:.0}%");
                let at = Point::new(STATUS_TEXT_X + i as i32 * STATUS_STRIDE_X, STATUS_TEXT_Y);
                Text::with_text_style(&text, at, SMALL_STYLE, LEFT_ALIGNED)
                    .draw(display)
                    .ok();
            }
        }
        None => {
            Text::with_text_style(
                SYSTEM_PLACEHOLDER,
                Point::new(STATUS_TEXT_X, STATUS_TEXT_Y),
                SMALL_STYLE,
                LEFT_ALIGNED,
            )
            .draw(display)
            .ok();
        }
    }

    let mut clock: String<20> = String::new();
    let _ = write!(clock, "{}", now.format("%d/%m/%Y %H:%M"));
    Text::with_text_style(&clock, CLOCK_POS, SMALL_STYLE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
