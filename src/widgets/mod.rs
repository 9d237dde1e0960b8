//! Widget components of the dashboard frame.
//!
//! Each submodule draws one visual element against any
//! `DrawTarget<Color = BinaryColor>`:
//!
//! - [`icons`]: parametric weather condition glyphs and their keyword
//!   classification
//! - [`compass`]: compass rose, wind arrow, and bearing naming
//! - [`panels`]: optional right-region panels (forecast, crypto, headline)
//! - [`status_bar`]: bottom separator, load readouts, clock
//!
//! Widgets never clear the surface and never read it back; the composer owns
//! draw order. All text goes through the static styles in
//! [`styles`](crate::styles), and fixed-size values are formatted into
//! `heapless::String` buffers.

mod compass;
mod icons;
mod panels;
mod status_bar;

pub use compass::{draw_compass_rose, draw_wind_arrow, wind_name};
pub use icons::{IconKind, classify_condition, draw_condition_icon, draw_icon};
pub use panels::{
    CRYPTO_PLACEHOLDER,
    FORECAST_PLACEHOLDER,
    HEADLINE_PLACEHOLDER,
    draw_crypto_panel,
    draw_forecast_panel,
    draw_headline_panel,
};
pub use status_bar::{SYSTEM_PLACEHOLDER, draw_status_bar};
