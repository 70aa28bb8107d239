#![forbid(unsafe_code)]

//! Frame = Buffer + metadata for a render pass.
//!
//! The `Frame` is the render target widgets draw into. It bundles the cell
//! grid ([`Buffer`]) with the hardware cursor position, which widgets set
//! during rendering and the presenter applies after painting.

use crate::buffer::Buffer;
use otpui_core::geometry::Rect;

/// A render pass target.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid for this frame.
    pub buffer: Buffer,

    /// Where the hardware cursor should be placed after presenting.
    ///
    /// `None` hides the cursor. Input widgets set this to their active
    /// position for accessibility and IME placement.
    pub cursor_position: Option<(u16, u16)>,
}

impl Frame {
    /// Create a frame with an empty buffer.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0 (see [`Buffer::new`]).
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            cursor_position: None,
        }
    }

    /// The full frame area.
    #[inline]
    pub const fn area(&self) -> Rect {
        self.buffer.area()
    }

    /// Set (or hide, with `None`) the hardware cursor position.
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor_position = position;
    }

    /// Reset the frame for reuse: clear cells and hide the cursor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = None;
    }
}
