//! Data records handed to the composer by the fetch collaborators.
//!
//! Everything here is frame-scoped: built fresh by whatever fetched it,
//! borrowed by the composer for one pass, then dropped. Optional sources are
//! plain `Option`s; an absent record is a normal state the layout renders a
//! placeholder for, not an error.

use chrono::{NaiveDateTime, NaiveTime};

/// Current conditions from the weather provider.
///
/// Temperatures are kept as provided and rounded at render time. Wind
/// direction uses the meteorological convention: degrees clockwise from
/// north, naming the direction the wind comes from.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    /// Current temperature, °C.
    pub temp: f32,
    /// Perceived temperature, °C.
    pub feels_like: f32,
    /// Daily minimum, °C.
    pub temp_min: f32,
    /// Daily maximum, °C.
    pub temp_max: f32,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Sea-level pressure, hPa.
    pub pressure: u32,
    /// Free-text condition description; drives both the display line and
    /// icon classification.
    pub description: String,
    /// Wind speed, km/h.
    pub wind_speed: f32,
    /// Wind bearing, degrees 0-360.
    pub wind_deg: f32,
    /// Cloud cover, percent.
    pub cloud_cover: u8,
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
    /// Visibility, km.
    pub visibility: f32,
    /// Near-future forecast slots; the composer previews the first two.
    pub forecast: Vec<ForecastPoint>,
}

/// One short-term forecast slot.
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastPoint {
    pub at: NaiveDateTime,
    /// Forecast temperature, °C.
    pub temp: f32,
    /// Condition description for icon selection.
    pub description: String,
    /// Precipitation probability in `[0, 1]`.
    pub precipitation: f32,
}

/// Auxiliary telemetry, independent of the weather fetch.
///
/// Each source is nullable on its own; the composer substitutes a per-source
/// placeholder string for whatever is missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuxSnapshot {
    pub crypto: Option<Vec<CryptoQuote>>,
    pub headline: Option<Headline>,
    pub system: Option<SystemStats>,
}

/// One crypto price/change pair.
#[derive(Clone, Debug, PartialEq)]
pub struct CryptoQuote {
    /// Ticker symbol, e.g. "BTC".
    pub symbol: String,
    /// Spot price, EUR.
    pub price: f64,
    /// 24h change, percent.
    pub change_pct: f64,
}

/// Latest news headline with its publication time.
#[derive(Clone, Debug, PartialEq)]
pub struct Headline {
    pub title: String,
    pub at: NaiveDateTime,
}

/// Host load figures for the status bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemStats {
    /// CPU load, percent.
    pub cpu_percent: f32,
    /// Memory in use, percent.
    pub memory_percent: f32,
    /// Root filesystem in use, percent.
    pub disk_percent: f32,
}
