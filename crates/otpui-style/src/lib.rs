#![forbid(unsafe_code)]

//! Styling for the otpui widget set.
//!
//! A [`Style`] is an overlay: each channel is optional, and `None` leaves
//! the underlying cell untouched. This is what lets widgets layer an
//! active-box highlight over a base style without restating the rest.

pub use otpui_render::cell::StyleFlags;
use otpui_render::cell::PackedRgba;

/// An optional overlay of foreground, background, and attribute flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color override.
    pub fg: Option<PackedRgba>,
    /// Background color override.
    pub bg: Option<PackedRgba>,
    /// Attribute flags override.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style (no overrides).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color (builder).
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color (builder).
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the attribute flags (builder).
    #[must_use]
    pub const fn attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(flags);
        self
    }

    /// Add bold to the attribute flags (builder).
    #[must_use]
    pub fn bold(self) -> Self {
        self.add_flags(StyleFlags::BOLD)
    }

    /// Add dim to the attribute flags (builder).
    #[must_use]
    pub fn dim(self) -> Self {
        self.add_flags(StyleFlags::DIM)
    }

    /// Add underline to the attribute flags (builder).
    #[must_use]
    pub fn underlined(self) -> Self {
        self.add_flags(StyleFlags::UNDERLINE)
    }

    /// Add reverse video to the attribute flags (builder).
    #[must_use]
    pub fn reversed(self) -> Self {
        self.add_flags(StyleFlags::REVERSE)
    }

    fn add_flags(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(StyleFlags::NONE) | flags);
        self
    }

    /// Check if the style overrides nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Overlay `other` on top of this style; `other`'s channels win.
    #[must_use]
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: other.attrs.or(self.attrs),
        }
    }
}
