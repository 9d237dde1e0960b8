//! Optional right-region panels: forecast preview, crypto summary, headline
//! ticker.
//!
//! Each panel draws at a fixed vertical position and degrades independently:
//! an enabled panel whose data source came back empty renders its fallback
//! string instead. The composer decides which panels are enabled at all; a
//! disabled panel leaves its rows blank.

use core::fmt::Write as _;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, text::Text};
use heapless::String;

use crate::{
    config::{
        CRYPTO_LINE_Y, FORECAST_COLUMN_STRIDE, FORECAST_HEADING_Y, FORECAST_ICON_SIZE, FORECAST_ROW_Y,
        FORECAST_SHOWN, HEADLINE_LINE_Y, SMALL_CHAR_WIDTH,
    },
    data::{CryptoQuote, ForecastPoint, Headline},
    styles::{BODY_STYLE, HEADING_STYLE, LEFT_ALIGNED, SMALL_STYLE},
    textfit::fit_to_width,
    widgets::icons::draw_condition_icon,
};

/// Fallback line for an empty forecast.
pub const FORECAST_PLACEHOLDER: &str = "Forecast data not available";

/// Fallback line for a missing crypto source.
pub const CRYPTO_PLACEHOLDER: &str = "Crypto data not available";

/// Fallback line for a missing news source.
pub const HEADLINE_PLACEHOLDER: &str = "News data not available";

/// Precipitation probability offset from the forecast icon anchor.
const PRECIP_OFFSET: Point = Point::new(55, 15);

/// Time/temperature line offset below the forecast icon anchor.
const FORECAST_LINE_OFFSET_Y: i32 = 60;

/// Absolute y used when a panel substitutes its placeholder for the
/// forecast rows.
const FORECAST_PLACEHOLDER_Y: i32 = FORECAST_ROW_Y + 15;

/// Draw the short-term forecast preview at region edge `x`.
///
/// Shows the first [`FORECAST_SHOWN`] points: a small condition icon, the
/// precipitation probability beside it when there is any, and an
/// `HH:MM · T°` line underneath.
pub fn draw_forecast_panel<D>(display: &mut D, x: i32, forecast: &[ForecastPoint])
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_text_style("Forecast:", Point::new(x, FORECAST_HEADING_Y), HEADING_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    if forecast.is_empty() {
        Text::with_text_style(
            FORECAST_PLACEHOLDER,
            Point::new(x, FORECAST_PLACEHOLDER_Y),
            SMALL_STYLE,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
        return;
    }

    for (i, point) in forecast.iter().take(FORECAST_SHOWN).enumerate() {
        let anchor = Point::new(x + i as i32 * FORECAST_COLUMN_STRIDE, FORECAST_ROW_Y);
        draw_condition_icon(display, &point.description, anchor, FORECAST_ICON_SIZE);

        let rain_pct = (point.precipitation * 100.0).round() as i32;
        if rain_pct > 0 {
            let mut pct: String<8> = String::new();
            let _ = write!(pct, "{rain_pct}%");
            Text::with_text_style(&pct, anchor + PRECIP_OFFSET, SMALL_STYLE, LEFT_ALIGNED)
                .draw(display)
                .ok();
        }

        let mut line: String<24> = String::new();
        let _ = write!(line, "{} · {}°", point.at.format("%H:%M"), point.temp.round() as i32);
        Text::with_text_style(
            &line,
            Point::new(anchor.x, anchor.y + FORECAST_LINE_OFFSET_Y),
            BODY_STYLE,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }
}

/// Draw the one-line crypto summary at region edge `x`.
pub fn draw_crypto_panel<D>(display: &mut D, x: i32, quotes: Option<&[CryptoQuote]>)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut line: String<96> = String::new();
    match quotes {
        Some(quotes) if !quotes.is_empty() => {
            for (i, quote) in quotes.iter().enumerate() {
                if i > 0 {
                    let _ = write!(line, " · ");
                }
                let _ = write!(line, "{} ${:.0} ({:+.1}%)", quote.symbol, quote.price, quote.change_pct);
            }
        }
        _ => {
            let _ = write!(line, "{CRYPTO_PLACEHOLDER}");
        }
    }
    Text::with_text_style(&line, Point::new(x, CRYPTO_LINE_Y), SMALL_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw the headline ticker at region edge `x`, fitted to `budget_px`.
pub fn draw_headline_panel<D>(display: &mut D, x: i32, budget_px: u32, headline: Option<&Headline>)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let line = match headline {
        Some(headline) => {
            let full = format!("[{}] {}", headline.at.format("%H:%M"), headline.title);
            fit_to_width(&full, SMALL_CHAR_WIDTH, budget_px)
        }
        None => HEADLINE_PLACEHOLDER.to_string(),
    };
    Text::with_text_style(&line, Point::new(x, HEADLINE_LINE_Y), SMALL_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
