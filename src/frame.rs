//! The 1-bit frame surface and the display handoff boundary.
//!
//! The composer draws one [`Frame`] per wake cycle and hands it to a
//! [`FrameSink`] exactly once. The frame is an ordinary owned value, passed
//! explicitly down the widget call tree; nothing in the crate holds onto a
//! surface between cycles.

use anyhow::Result;
use embedded_graphics::{
    framebuffer::{Framebuffer, buffer_size},
    image::GetPixel,
    pixelcolor::{
        BinaryColor,
        raw::{LittleEndian, RawU1},
    },
    prelude::Point,
};

use crate::{
    config::{SCREEN_HEIGHT, SCREEN_WIDTH},
    palette::INK,
};

/// Frame width in pixels, as a buffer dimension.
pub const FRAME_WIDTH: usize = SCREEN_WIDTH as usize;

/// Frame height in pixels, as a buffer dimension.
pub const FRAME_HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Packed byte size of one frame (1 bit per pixel).
pub const FRAME_BUFFER_SIZE: usize = buffer_size::<BinaryColor>(FRAME_WIDTH, FRAME_HEIGHT);

/// The in-memory canvas: an 800x480 1-bit framebuffer.
///
/// Drawing outside the frame is silently clipped by the `DrawTarget`
/// implementation, which matches what the panel would do.
pub type Frame = Framebuffer<BinaryColor, RawU1, LittleEndian, FRAME_WIDTH, FRAME_HEIGHT, FRAME_BUFFER_SIZE>;

/// Create a blank frame.
pub fn new_frame() -> Frame {
    Frame::new()
}

/// Whether the pixel at `point` carries ink. Off-frame points read as blank.
pub fn pixel_on(frame: &Frame, point: Point) -> bool {
    frame.pixel(point) == Some(INK)
}

/// Display-device collaborator consuming a finished frame.
///
/// Implementations own the transfer to whatever backs them (panel hardware,
/// a desktop window, a PNG on disk). `present` is called once per frame; a
/// failure here is fatal to the run, there is no way to retry a physical
/// panel write mid-cycle.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

// =============================================================================
// Unit Tests
// =============================================================================
