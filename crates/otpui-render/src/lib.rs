#![forbid(unsafe_code)]

//! Cell grid rendering for the otpui widget set.
//!
//! The pipeline is deliberately small: widgets draw [`Cell`]s into a
//! [`Buffer`] through a [`Frame`], and the [`Presenter`] serializes the
//! buffer to ANSI escape sequences for any `io::Write` sink. There is no
//! damage tracking; a segmented input repaints a handful of cells per
//! frame, so a full repaint is the simpler correct choice.

pub mod buffer;
pub mod cell;
pub mod frame;
pub mod presenter;

pub use buffer::Buffer;
pub use cell::{Cell, CellAttrs, CellContent, PackedRgba, StyleFlags};
pub use frame::Frame;
pub use presenter::Presenter;
