//! Display and layout configuration constants.
//!
//! Layout positions are computed at compile time as `const` and used
//! throughout the rendering code instead of being recalculated per frame.
//! The frame is composed exactly once per wake cycle, so the constants exist
//! for clarity more than speed: every anchor and stride has one name and one
//! value.

use embedded_graphics::prelude::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Panel width in pixels (7.5" e-paper module: 800x480).
pub const SCREEN_WIDTH: u32 = 800;

/// Panel height in pixels.
pub const SCREEN_HEIGHT: u32 = 480;

/// Canvas midline, the base position of the vertical region divider.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Region Divider
// =============================================================================

/// Top of the vertical divider between the two content regions.
pub const DIVIDER_TOP_Y: i32 = 20;

/// Bottom of the vertical divider; stops above the status bar.
pub const DIVIDER_BOTTOM_Y: i32 = (SCREEN_HEIGHT - 60) as i32;

/// Leftward shift of the divider when extra right-hand sections (crypto,
/// headline) are enabled and need the room.
pub const DIVIDER_PULL_IN: i32 = 5;

// =============================================================================
// Left Region (current conditions)
// =============================================================================

/// Anchor of the left content block.
pub const LEFT_ANCHOR: Point = Point::new(40, 40);

/// Size of the primary condition icon.
pub const CONDITION_ICON_SIZE: i32 = 120;

/// Offset of the large temperature readout from the left anchor.
pub const TEMP_READOUT_OFFSET: Point = Point::new(160, 10);

/// Vertical offset of the condition description below the left anchor.
pub const DESCRIPTION_OFFSET_Y: i32 = 140;

/// Gap between the description line and the first detail line.
pub const DETAILS_GAP_Y: i32 = 50;

/// Vertical step between consecutive detail lines.
pub const DETAIL_LINE_STEP: i32 = 30;

// =============================================================================
// Right Region (compass + secondary panels)
// =============================================================================

/// Left edge of the right region, relative to the canvas midline.
pub const RIGHT_MARGIN_X: i32 = 40;

/// Top of the right region.
pub const RIGHT_TOP_Y: i32 = 40;

/// Compass center offset into the right region.
pub const COMPASS_OFFSET: Point = Point::new(150, 100);

/// Compass rose outer radius.
pub const COMPASS_RADIUS: f32 = 80.0;

/// Vertical offset of the wind speed/name line below the region top.
pub const WIND_LINE_OFFSET_Y: i32 = 200;

/// Absolute y of the forecast section heading.
pub const FORECAST_HEADING_Y: i32 = 270;

/// Absolute y of the forecast entry row (icon anchors).
pub const FORECAST_ROW_Y: i32 = 300;

/// Horizontal stride between forecast entries.
pub const FORECAST_COLUMN_STRIDE: i32 = 150;

/// Icon size used for forecast entries.
pub const FORECAST_ICON_SIZE: i32 = 48;

/// Number of forecast points shown in the preview.
pub const FORECAST_SHOWN: usize = 2;

/// Absolute y of the crypto summary line.
pub const CRYPTO_LINE_Y: i32 = 385;

/// Absolute y of the headline ticker line.
pub const HEADLINE_LINE_Y: i32 = 405;

// =============================================================================
// Status Bar
// =============================================================================

/// Absolute y of the status bar separator line.
pub const STATUS_SEPARATOR_Y: i32 = (SCREEN_HEIGHT - 50) as i32;

/// Absolute y (top) of the status bar text row.
pub const STATUS_TEXT_Y: i32 = (SCREEN_HEIGHT - 40) as i32;

/// Horizontal inset of the separator line from both panel edges.
pub const STATUS_MARGIN_X: i32 = 20;

/// Left edge of the first status readout.
pub const STATUS_TEXT_X: i32 = 40;

/// Horizontal stride between status readouts.
pub const STATUS_STRIDE_X: i32 = 200;

// =============================================================================
// Text Width Estimates
// =============================================================================
//
// Coarse per-character pixel widths used by the truncation estimator. These
// are tuned to the font each role uses and are deliberately configuration
// values, not metrics derived from the font structs: swapping a font means
// retuning one constant here.

/// Estimated character width of the heading font (ProFont 18pt).
pub const HEADING_CHAR_WIDTH: u32 = 12;

/// Estimated character width of the body font (10x20).
pub const BODY_CHAR_WIDTH: u32 = 10;

/// Estimated character width of the small font (9x15).
pub const SMALL_CHAR_WIDTH: u32 = 9;

// =============================================================================
// Degenerate-Input Clamps
// =============================================================================

/// Smallest radius any circular element may be drawn with.
pub const MIN_RADIUS: f32 = 1.0;

/// Smallest size any icon may be drawn with.
pub const MIN_ICON_SIZE: i32 = 8;

// =============================================================================
// Panel Configuration
// =============================================================================

/// Which optional right-region panels are enabled.
///
/// Collapses the historical "basic" and "extended" dashboard variants into
/// one composer: a disabled panel is simply never drawn, while an enabled
/// panel with no data renders its placeholder string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    /// Short-term forecast preview under the compass.
    pub forecast: bool,
    /// Crypto price summary line.
    pub crypto: bool,
    /// News headline ticker line.
    pub headline: bool,
}

impl PanelConfig {
    /// Configuration with every optional panel enabled.
    pub const fn all() -> Self {
        Self {
            forecast: true,
            crypto: true,
            headline: true,
        }
    }

    /// Whether any of the extra sections (beyond the forecast the basic
    /// variant always had) are enabled.
    pub const fn has_extra_sections(&self) -> bool {
        self.crypto || self.headline
    }

    /// X position of the vertical region divider.
    ///
    /// The divider sits on the canvas midline, pulled in by
    /// [`DIVIDER_PULL_IN`] when extra sections need the extra room.
    pub const fn divider_x(&self) -> i32 {
        if self.has_extra_sections() {
            CENTER_X - DIVIDER_PULL_IN
        } else {
            CENTER_X
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::all()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
