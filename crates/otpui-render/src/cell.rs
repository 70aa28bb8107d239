#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! The `Cell` is the fundamental unit of the terminal grid:
//!
//! ```text
//! Cell {
//!     content: CellContent,  // 4 bytes - packed char
//!     fg: PackedRgba,        // 4 bytes - foreground color
//!     bg: PackedRgba,        // 4 bytes - background color
//!     attrs: CellAttrs,      // 4 bytes - style flags
//! }
//! ```
//!
//! Every cell in this widget set holds at most one Unicode scalar of
//! display width 1; multi-codepoint clusters and wide glyphs are rejected
//! at the widget layer, so no interning pool or continuation markers are
//! needed here.

use bitflags::bitflags;
use unicode_width::UnicodeWidthChar;

/// Cell content: a single Unicode scalar packed into 4 bytes.
///
/// Value `0` is the `EMPTY` sentinel (NUL is not printable content).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CellContent(u32);

impl CellContent {
    /// Empty cell content (no character).
    pub const EMPTY: Self = Self(0);

    /// Create content from a single Unicode character.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self(c as u32)
    }

    /// Check if this cell is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Extract the character, or `None` for an empty cell.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        if self.is_empty() {
            None
        } else {
            char::from_u32(self.0)
        }
    }

    /// Display width of this content (0 for empty).
    #[inline]
    pub fn width(self) -> usize {
        match self.as_char() {
            Some(c) => UnicodeWidthChar::width(c).unwrap_or(0),
            None => 0,
        }
    }

    /// Raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl core::fmt::Debug for CellContent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            write!(f, "CellContent::EMPTY")
        } else if let Some(c) = self.as_char() {
            write!(f, "CellContent::Char({c:?})")
        } else {
            write!(f, "CellContent::Invalid({:#x})", self.0)
        }
    }
}

/// Packed RGBA color, `0xRRGGBBAA`.
///
/// Alpha 0 is the "terminal default color" sentinel: the presenter emits
/// no color sequence for it, leaving the terminal's own palette in charge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PackedRgba(u32);

impl PackedRgba {
    /// The terminal's default color (no override).
    pub const DEFAULT: Self = Self(0);

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    /// Create a color from RGBA components.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha component.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Check if this is the terminal-default sentinel.
    #[inline]
    pub const fn is_default(self) -> bool {
        self.a() == 0
    }
}

impl core::fmt::Debug for PackedRgba {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PackedRgba(#{:02x}{:02x}{:02x}{:02x})",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u16 {
        /// No attributes.
        const NONE          = 0;
        /// Bold / increased intensity.
        const BOLD          = 1 << 0;
        /// Dim / decreased intensity.
        const DIM           = 1 << 1;
        /// Italic.
        const ITALIC        = 1 << 2;
        /// Underline.
        const UNDERLINE     = 1 << 3;
        /// Reverse video.
        const REVERSE       = 1 << 4;
        /// Strikethrough.
        const STRIKETHROUGH = 1 << 5;
    }
}

/// Cell attribute word (style flags, with room to grow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct CellAttrs(u16);

impl CellAttrs {
    /// Extract the style flags.
    #[inline]
    pub const fn flags(self) -> StyleFlags {
        StyleFlags::from_bits_truncate(self.0)
    }

    /// Return a copy with the given flags.
    #[inline]
    pub const fn with_flags(self, flags: StyleFlags) -> Self {
        Self(flags.bits())
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// The displayed content.
    pub content: CellContent,
    /// Foreground color.
    pub fg: PackedRgba,
    /// Background color.
    pub bg: PackedRgba,
    /// Attribute flags.
    pub attrs: CellAttrs,
}

impl Cell {
    /// Create a cell displaying a single character with default colors.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self {
            content: CellContent::from_char(c),
            fg: PackedRgba::DEFAULT,
            bg: PackedRgba::DEFAULT,
            attrs: CellAttrs(0),
        }
    }

    /// Check if the cell has no content.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
