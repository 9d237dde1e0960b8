//! Desktop simulator for the e-paper weather dashboard.
//!
//! Stands in for every out-of-core collaborator at once: fabricates the data
//! records the fetchers would return, composes one frame through the
//! rendering core, and presents it either in a simulator window or as a PNG.
//! The `--no-*` flags drop individual data sources to exercise the
//! placeholder and status-bar-only paths without touching the network.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveTime};
use clap::Parser;
use embedded_graphics::{image::Image, pixelcolor::BinaryColor, prelude::*};
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettings, OutputSettingsBuilder, SimulatorDisplay, Window,
};
use log::{info, warn};

use epd_weather_dashboard::{
    composer::compose,
    config::{PanelConfig, SCREEN_HEIGHT, SCREEN_WIDTH},
    data::{AuxSnapshot, CryptoQuote, ForecastPoint, Headline, SystemStats, WeatherSnapshot},
    frame::{Frame, FrameSink, new_frame},
};

#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(about = "Desktop simulator for the e-paper weather dashboard", long_about = None)]
struct Cli {
    /// Write the frame to a PNG at this path instead of opening a window
    #[arg(long, value_name = "PATH")]
    png: Option<PathBuf>,

    /// Pixel scale of the window or PNG
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Simulate a failed weather fetch (status bar only)
    #[arg(long)]
    no_weather: bool,

    /// Simulate a missing crypto source
    #[arg(long)]
    no_crypto: bool,

    /// Simulate a missing news source
    #[arg(long)]
    no_headline: bool,

    /// Simulate missing host telemetry
    #[arg(long)]
    no_system: bool,

    /// Basic layout variant: weather and compass only, no extra sections
    #[arg(long)]
    basic: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let panels = if cli.basic {
        PanelConfig {
            forecast: true,
            crypto: false,
            headline: false,
        }
    } else {
        PanelConfig::all()
    };

    let weather = (!cli.no_weather).then(sample_weather);
    if weather.is_none() {
        warn!("weather unavailable, rendering status bar only");
    }
    let aux = AuxSnapshot {
        crypto: (!cli.no_crypto).then(sample_crypto),
        headline: (!cli.no_headline).then(sample_headline),
        system: (!cli.no_system).then(sample_system),
    };
    for (source, missing) in [
        ("crypto", aux.crypto.is_none()),
        ("headline", aux.headline.is_none()),
        ("system stats", aux.system.is_none()),
    ] {
        if missing {
            info!("{source} unavailable, rendering placeholder");
        }
    }

    let mut frame = new_frame();
    let started = Instant::now();
    compose(&mut frame, weather.as_ref(), &aux, panels, Local::now().naive_local());
    info!("frame composed in {:?}", started.elapsed());

    let settings = OutputSettingsBuilder::new()
        .scale(cli.scale.max(1))
        .theme(BinaryColorTheme::Inverted)
        .build();
    let mut sink: Box<dyn FrameSink> = match cli.png {
        Some(path) => Box::new(PngSink { path, settings }),
        None => Box::new(WindowSink { settings }),
    };
    sink.present(&frame)
}

// =============================================================================
// Frame Sinks
// =============================================================================

/// Copy the packed frame onto a simulator display for presentation.
fn rasterize(frame: &Frame) -> SimulatorDisplay<BinaryColor> {
    let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    Image::new(&frame.as_image(), Point::zero()).draw(&mut display).ok();
    display
}

/// Shows the frame in an SDL window until it is closed.
struct WindowSink {
    settings: OutputSettings,
}

impl FrameSink for WindowSink {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        let display = rasterize(frame);
        let mut window = Window::new("E-Paper Weather Dashboard", &self.settings);
        window.show_static(&display);
        Ok(())
    }
}

/// Writes the frame to a PNG file.
struct PngSink {
    path: PathBuf,
    settings: OutputSettings,
}

impl FrameSink for PngSink {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        let display = rasterize(frame);
        display
            .to_rgb_output_image(&self.settings)
            .save_png(&self.path)
            .with_context(|| format!("writing frame to {}", self.path.display()))?;
        info!("frame written to {}", self.path.display());
        Ok(())
    }
}

// =============================================================================
// Sample Data
// =============================================================================

fn sample_weather() -> WeatherSnapshot {
    let today = Local::now().date_naive();
    WeatherSnapshot {
        temp: 21.4,
        feels_like: 20.8,
        temp_min: 16.2,
        temp_max: 23.1,
        humidity: 62,
        pressure: 1018,
        description: "scattered clouds".to_string(),
        wind_speed: 14.0,
        wind_deg: 45.0,
        cloud_cover: 35,
        sunrise: NaiveTime::from_hms_opt(6, 42, 0).unwrap(),
        sunset: NaiveTime::from_hms_opt(19, 54, 0).unwrap(),
        visibility: 10.0,
        forecast: vec![
            ForecastPoint {
                at: today.and_hms_opt(15, 0, 0).unwrap(),
                temp: 22.5,
                description: "few clouds".to_string(),
                precipitation: 0.0,
            },
            ForecastPoint {
                at: today.and_hms_opt(18, 0, 0).unwrap(),
                temp: 19.0,
                description: "light rain".to_string(),
                precipitation: 0.35,
            },
        ],
    }
}

fn sample_crypto() -> Vec<CryptoQuote> {
    vec![
        CryptoQuote {
            symbol: "BTC".to_string(),
            price: 67412.0,
            change_pct: 1.8,
        },
        CryptoQuote {
            symbol: "ETH".to_string(),
            price: 3291.0,
            change_pct: -0.6,
        },
    ]
}

fn sample_headline() -> Headline {
    Headline {
        title: "Tide barriers raised ahead of the first autumn acqua alta".to_string(),
        at: Local::now().naive_local(),
    }
}

fn sample_system() -> SystemStats {
    SystemStats {
        cpu_percent: 7.0,
        memory_percent: 41.0,
        disk_percent: 68.0,
    }
}
