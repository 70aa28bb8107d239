#![forbid(unsafe_code)]

//! otpui public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use otpui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
    PasteEvent,
};
pub use otpui_core::geometry::Rect;

// --- Render re-exports -----------------------------------------------------

pub use otpui_render::buffer::Buffer;
pub use otpui_render::cell::{Cell, CellAttrs, CellContent, PackedRgba};
pub use otpui_render::frame::Frame;
pub use otpui_render::presenter::Presenter;

// --- Style re-exports ------------------------------------------------------

pub use otpui_style::{Style, StyleFlags};

// --- Widget re-exports -----------------------------------------------------

pub use otpui_widgets::{OtpInput, OtpMode, Widget};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for otpui apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure during terminal operations.
    Io(std::io::Error),
    /// Terminal or session error with message.
    Terminal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Terminal(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for otpui APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    //! Commonly used types, for glob import.
    pub use crate::{
        Error, Event, Frame, KeyCode, KeyEvent, Modifiers, OtpInput, OtpMode, Presenter, Rect,
        Result, Style, Widget,
    };
}
