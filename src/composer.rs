//! Single-pass frame composition.
//!
//! [`compose`] lays out one complete dashboard frame: divider, left
//! conditions region, right compass region with its optional panels, bottom
//! status bar. There is no branching back; each section draws once, top to
//! bottom, against the one mutable surface the caller owns.
//!
//! Failure semantics are asymmetric on purpose. A missing optional source
//! (crypto, headline, host telemetry, forecast) renders its placeholder and
//! the pass continues. A missing *weather* snapshot suppresses the divider
//! and both content regions entirely, leaving just the status bar.

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
    config::{
        COMPASS_OFFSET, COMPASS_RADIUS, CONDITION_ICON_SIZE, DESCRIPTION_OFFSET_Y, DETAIL_LINE_STEP,
        DETAILS_GAP_Y, DIVIDER_BOTTOM_Y, DIVIDER_TOP_Y, HEADING_CHAR_WIDTH, LEFT_ANCHOR, PanelConfig,
        RIGHT_MARGIN_X, RIGHT_TOP_Y, SCREEN_WIDTH, STATUS_MARGIN_X, TEMP_READOUT_OFFSET,
        WIND_LINE_OFFSET_Y,
    },
    data::{AuxSnapshot, WeatherSnapshot},
    palette::{INK, PAPER},
    styles::{BODY_STYLE, CENTERED, HEADING_STYLE, LEFT_ALIGNED, VALUE_STYLE},
    textfit::fit_to_width,
    widgets::{
        draw_compass_rose, draw_condition_icon, draw_crypto_panel, draw_forecast_panel,
        draw_headline_panel, draw_status_bar, draw_wind_arrow, wind_name,
    },
};

/// Compose one dashboard frame onto `display`.
///
/// The caller hands the cleared-or-dirty surface in; the pass starts by
/// clearing it, so two calls with identical inputs produce identical pixels
/// whatever was on the surface before.
pub fn compose<D>(
    display: &mut D,
    weather: Option<&WeatherSnapshot>,
    aux: &AuxSnapshot,
    panels: PanelConfig,
    now: NaiveDateTime,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(PAPER).ok();

    if let Some(weather) = weather {
        let divider_x = panels.divider_x();
        Line::new(
            Point::new(divider_x, DIVIDER_TOP_Y),
            Point::new(divider_x, DIVIDER_BOTTOM_Y),
        )
        .into_styled(PrimitiveStyle::with_stroke(INK, 1))
        .draw(display)
        .ok();

        draw_current_conditions(display, weather, divider_x);
        draw_wind_section(display, weather, divider_x);

        let right_x = divider_x + RIGHT_MARGIN_X;
        if panels.forecast {
            draw_forecast_panel(display, right_x, &weather.forecast);
        }
        if panels.crypto {
            draw_crypto_panel(display, right_x, aux.crypto.as_deref());
        }
        if panels.headline {
            let budget = (SCREEN_WIDTH as i32 - right_x - STATUS_MARGIN_X).max(0) as u32;
            draw_headline_panel(display, right_x, budget, aux.headline.as_ref());
        }
    }

    draw_status_bar(display, aux.system.as_ref(), now);
}

/// Left region: condition icon, temperature readout, description, detail
/// lines.
fn draw_current_conditions<D>(display: &mut D, weather: &WeatherSnapshot, divider_x: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_condition_icon(display, &weather.description, LEFT_ANCHOR, CONDITION_ICON_SIZE);

    let mut readout: String<12> = String::new();
    let _ = write!(readout, "{}°", weather.temp.round() as i32);
    Text::with_text_style(&readout, LEFT_ANCHOR + TEMP_READOUT_OFFSET, VALUE_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let budget = (divider_x - LEFT_ANCHOR.x).max(0) as u32;
    let description = fit_to_width(&capitalize(&weather.description), HEADING_CHAR_WIDTH, budget);
    Text::with_text_style(
        &description,
        Point::new(LEFT_ANCHOR.x, LEFT_ANCHOR.y + DESCRIPTION_OFFSET_Y),
        HEADING_STYLE,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    let mut details: [String<48>; 6] = core::array::from_fn(|_| String::new());
    let _ = write!(details[0], "Feels like: {}°", weather.feels_like.round() as i32);
    let _ = write!(
        details[1],
        "Min: {}° · Max: {}°",
        weather.temp_min.round() as i32,
        weather.temp_max.round() as i32
    );
    let _ = write!(details[2], "Humidity: {}%", weather.humidity);
    let _ = write!(details[3], "Pressure: {} hPa", weather.pressure);
    let _ = write!(details[4], "Visibility: {} km", weather.visibility);
    let _ = write!(
        details[5],
        "Sunrise: {} · Sunset: {}",
        weather.sunrise.format("%H:%M"),
        weather.sunset.format("%H:%M")
    );

    let mut y = LEFT_ANCHOR.y + DESCRIPTION_OFFSET_Y + DETAILS_GAP_Y;
    for detail in &details {
        Text::with_text_style(detail, Point::new(LEFT_ANCHOR.x, y), BODY_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
        y += DETAIL_LINE_STEP;
    }
}

/// Right region head: compass rose, wind arrow, centered wind line.
fn draw_wind_section<D>(display: &mut D, weather: &WeatherSnapshot, divider_x: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let right_x = divider_x + RIGHT_MARGIN_X;
    let center = Point::new(right_x + COMPASS_OFFSET.x, RIGHT_TOP_Y + COMPASS_OFFSET.y);
    draw_compass_rose(display, center, COMPASS_RADIUS);
    draw_wind_arrow(display, center, COMPASS_RADIUS, weather.wind_deg);

    // Centered under the rose with the rasterizer's own metrics, not the
    // coarse width estimate
    let mut line: String<40> = String::new();
    let _ = write!(
        line,
        "Wind: {} km/h - {}",
        weather.wind_speed.round() as i32,
        wind_name(weather.wind_deg)
    );
    Text::with_text_style(
        &line,
        Point::new(center.x, RIGHT_TOP_Y + WIND_LINE_OFFSET_Y),
        BODY_STYLE,
        CENTERED,
    )
    .draw(display)
    .ok();
}

/// Uppercase the first character, the way provider descriptions are shown.
fn capitalize(text: &str) -> std::string::String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => std::string::String::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::config::{CENTER_X, CRYPTO_LINE_Y, HEADLINE_LINE_Y, SCREEN_HEIGHT, STATUS_SEPARATOR_Y};
    use crate::data::{CryptoQuote, ForecastPoint, Headline, SystemStats};
    use crate::frame::{Frame, new_frame, pixel_on};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn weather(description: &str, wind_deg: f32) -> WeatherSnapshot {
        WeatherSnapshot {
            temp: 21.0,
            feels_like: 20.0,
            temp_min: 16.0,
            temp_max: 23.0,
            humidity: 60,
            pressure: 1018,
            description: description.to_string(),
            wind_speed: 10.0,
            wind_deg,
            cloud_cover: 10,
            sunrise: NaiveTime::from_hms_opt(6, 40, 0).unwrap(),
            sunset: NaiveTime::from_hms_opt(19, 50, 0).unwrap(),
            visibility: 10.0,
            forecast: vec![ForecastPoint {
                at: noon(),
                temp: 22.0,
                description: "few clouds".to_string(),
                precipitation: 0.2,
            }],
        }
    }

    fn full_aux() -> AuxSnapshot {
        AuxSnapshot {
            crypto: Some(vec![CryptoQuote {
                symbol: "BTC".to_string(),
                price: 67000.0,
                change_pct: 1.2,
            }]),
            headline: Some(Headline {
                title: "Local news of the day".to_string(),
                at: noon(),
            }),
            system: Some(SystemStats {
                cpu_percent: 10.0,
                memory_percent: 40.0,
                disk_percent: 70.0,
            }),
        }
    }

    /// Any ink inside the half-open pixel rectangle?
    fn ink_in_region(frame: &Frame, top_left: Point, bottom_right: Point) -> bool {
        (top_left.y..bottom_right.y).any(|y| {
            (top_left.x..bottom_right.x).any(|x| pixel_on(frame, Point::new(x, y)))
        })
    }

    // -------------------------------------------------------------------------
    // End-To-End Scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_clear_sky_renders_sun_and_north_arrow() {
        let snapshot = weather("clear sky", 0.0);
        let mut frame = new_frame();
        compose(&mut frame, Some(&snapshot), &full_aux(), PanelConfig::all(), noon());

        // Sun disc outline inside the big icon's box
        assert!(ink_in_region(&frame, Point::new(58, 58), Point::new(142, 142)));

        // Arrow shaft climbs straight up from the rose center; probes sit
        // below the inner ring and the north spoke, where only the shaft is
        let center_x = PanelConfig::all().divider_x() + RIGHT_MARGIN_X + COMPASS_OFFSET.x;
        let center_y = RIGHT_TOP_Y + COMPASS_OFFSET.y;
        assert!(pixel_on(&frame, Point::new(center_x, center_y - 10)));
        assert!(pixel_on(&frame, Point::new(center_x, center_y - 15)));

        // The wind line names the north wind
        assert_eq!(wind_name(snapshot.wind_deg), "Tramontana");
    }

    #[test]
    fn test_light_rain_renders_streaks_and_southwest_wind() {
        let snapshot = weather("light rain", 225.0);
        let mut frame = new_frame();
        compose(&mut frame, Some(&snapshot), &full_aux(), PanelConfig::all(), noon());

        // Rain streaks fall below the small cloud, clear of its ellipses
        assert!(ink_in_region(&frame, Point::new(20, 95), Point::new(165, 145)));
        assert_eq!(wind_name(snapshot.wind_deg), "Libeccio");
    }

    #[test]
    fn test_absent_aux_renders_placeholders_with_content_intact() {
        let snapshot = weather("clear sky", 0.0);
        let mut bare = new_frame();
        compose(&mut bare, Some(&snapshot), &AuxSnapshot::default(), PanelConfig::all(), noon());

        let right_x = PanelConfig::all().divider_x() + RIGHT_MARGIN_X;

        // Placeholder text occupies the crypto and headline rows
        assert!(ink_in_region(
            &bare,
            Point::new(right_x, CRYPTO_LINE_Y),
            Point::new(right_x + 300, CRYPTO_LINE_Y + 15),
        ));
        assert!(ink_in_region(
            &bare,
            Point::new(right_x, HEADLINE_LINE_Y),
            Point::new(right_x + 300, HEADLINE_LINE_Y + 15),
        ));

        // Left region and compass still render
        assert!(ink_in_region(&bare, Point::new(58, 58), Point::new(142, 142)));

        let mut full = new_frame();
        compose(&mut full, Some(&snapshot), &full_aux(), PanelConfig::all(), noon());
        assert_ne!(bare.data(), full.data());
    }

    #[test]
    fn test_absent_weather_leaves_only_the_status_bar() {
        let mut frame = new_frame();
        compose(&mut frame, None, &full_aux(), PanelConfig::all(), noon());

        // Nothing above the status separator, including the divider
        assert!(!ink_in_region(
            &frame,
            Point::new(0, 0),
            Point::new(SCREEN_WIDTH as i32, STATUS_SEPARATOR_Y),
        ));
        // The separator and readouts still render
        assert!(pixel_on(&frame, Point::new(400, STATUS_SEPARATOR_Y)));
        assert!(ink_in_region(
            &frame,
            Point::new(0, STATUS_SEPARATOR_Y),
            Point::new(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32),
        ));
    }

    // -------------------------------------------------------------------------
    // Layout And Determinism
    // -------------------------------------------------------------------------

    #[test]
    fn test_divider_position_follows_panel_config() {
        let snapshot = weather("clear sky", 0.0);
        let basic = PanelConfig {
            forecast: true,
            crypto: false,
            headline: false,
        };

        let mut basic_frame = new_frame();
        compose(&mut basic_frame, Some(&snapshot), &full_aux(), basic, noon());
        assert!(pixel_on(&basic_frame, Point::new(CENTER_X, 100)));

        let mut extended_frame = new_frame();
        compose(&mut extended_frame, Some(&snapshot), &full_aux(), PanelConfig::all(), noon());
        assert!(pixel_on(&extended_frame, Point::new(CENTER_X - 5, 100)));
        assert!(!pixel_on(&extended_frame, Point::new(CENTER_X, 100)));
    }

    #[test]
    fn test_disabled_panels_leave_their_rows_blank() {
        let snapshot = weather("clear sky", 0.0);
        let no_extras = PanelConfig {
            forecast: true,
            crypto: false,
            headline: false,
        };
        let mut frame = new_frame();
        compose(&mut frame, Some(&snapshot), &full_aux(), no_extras, noon());

        let right_x = no_extras.divider_x() + RIGHT_MARGIN_X;
        assert!(!ink_in_region(
            &frame,
            Point::new(right_x, CRYPTO_LINE_Y),
            Point::new(SCREEN_WIDTH as i32, HEADLINE_LINE_Y + 15),
        ));
    }

    #[test]
    fn test_compose_is_idempotent_per_input() {
        let snapshot = weather("scattered clouds", 130.0);
        let aux = full_aux();

        let mut first = new_frame();
        let mut second = new_frame();
        compose(&mut first, Some(&snapshot), &aux, PanelConfig::all(), noon());
        compose(&mut second, Some(&snapshot), &aux, PanelConfig::all(), noon());
        assert_eq!(first.data(), second.data());
    }

    #[test]
    fn test_compose_clears_leftover_pixels_first() {
        let snapshot = weather("clear sky", 0.0);
        let mut dirty = new_frame();
        // Pre-soil the surface
        compose(&mut dirty, Some(&weather("fog", 270.0)), &AuxSnapshot::default(), PanelConfig::all(), noon());
        compose(&mut dirty, Some(&snapshot), &full_aux(), PanelConfig::all(), noon());

        let mut fresh = new_frame();
        compose(&mut fresh, Some(&snapshot), &full_aux(), PanelConfig::all(), noon());
        assert_eq!(dirty.data(), fresh.data());
    }
}
