#![forbid(unsafe_code)]

//! Segmented one-time-code input widget.
//!
//! A row of single-character boxes for entering short codes (OTP, 2FA,
//! device pairing). One box is active at a time; typing fills the active
//! box and advances, pasting distributes characters across the remaining
//! boxes, and arrow keys move between boxes. The aggregate value is the
//! concatenation of filled boxes in order.

use otpui_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use otpui_core::geometry::Rect;
use otpui_render::cell::{Cell, StyleFlags};
use otpui_render::frame::Frame;
use otpui_style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::Widget;

/// Default number of boxes.
pub const DEFAULT_LEN: usize = 4;

/// Which characters a code input accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtpMode {
    /// Any printable single-width character.
    #[default]
    Any,
    /// ASCII digits only.
    Numeric,
}

/// A segmented single-character-per-box code input.
#[derive(Debug, Clone)]
pub struct OtpInput {
    /// One slot per box; `None` is an empty box.
    slots: Vec<Option<char>>,
    /// The box currently accepting input. `None` = no box focused.
    active: Option<usize>,
    /// Accepted character class.
    mode: OtpMode,
    /// When disabled, every event is ignored.
    disabled: bool,
    /// Mask character for secure entry.
    mask_char: Option<char>,
    /// Glyph shown in empty boxes.
    placeholder: char,
    /// Width of each box in cells.
    box_width: u16,
    /// Cells between adjacent boxes.
    gap: u16,
    /// Base style.
    style: Style,
    /// Style overlaid on the active box. Empty falls back to reverse video.
    active_style: Style,
    /// Style overlaid on placeholder glyphs.
    placeholder_style: Style,
    /// Style overlaid on every box while disabled.
    disabled_style: Style,
}

impl Default for OtpInput {
    fn default() -> Self {
        Self::new(DEFAULT_LEN)
    }
}

impl OtpInput {
    /// Create an input with `len` empty boxes and no active box.
    ///
    /// # Panics
    ///
    /// Panics if `len` is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "box count must be > 0");
        Self {
            slots: vec![None; len],
            active: None,
            mode: OtpMode::Any,
            disabled: false,
            mask_char: None,
            placeholder: '_',
            box_width: 3,
            gap: 1,
            style: Style::default(),
            active_style: Style::default(),
            placeholder_style: Style::default(),
            disabled_style: Style::default(),
        }
    }

    // --- Builder methods ---

    /// Set the initial value (builder). See [`set_value`](Self::set_value).
    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    /// Set the accepted character class (builder).
    #[must_use]
    pub fn with_mode(mut self, mode: OtpMode) -> Self {
        self.mode = mode;
        self
    }

    /// Activate the first box on construction (builder).
    #[must_use]
    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.active = if autofocus { Some(0) } else { None };
        self
    }

    /// Set secure entry with a mask character (builder).
    #[must_use]
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask_char = Some(mask);
        self
    }

    /// Set the empty-box placeholder glyph (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set whether the input is disabled (builder).
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the width of each box in cells, minimum 1 (builder).
    #[must_use]
    pub fn with_box_width(mut self, width: u16) -> Self {
        self.box_width = width.max(1);
        self
    }

    /// Set the spacing between boxes in cells (builder).
    #[must_use]
    pub fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Set the base style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the active-box style (builder).
    #[must_use]
    pub fn with_active_style(mut self, style: Style) -> Self {
        self.active_style = style;
        self
    }

    /// Set the placeholder style (builder).
    #[must_use]
    pub fn with_placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Set the disabled style (builder).
    #[must_use]
    pub fn with_disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = style;
        self
    }

    // --- Value access ---

    /// Number of boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when every box is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// True when every box is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The aggregate value: filled boxes concatenated in order.
    #[must_use]
    pub fn value(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    /// The aggregate value as a number.
    ///
    /// `None` when no box is filled or the value does not parse. The
    /// natural companion to [`OtpMode::Numeric`], where the value is
    /// digits by construction.
    #[must_use]
    pub fn numeric_value(&self) -> Option<u64> {
        let value = self.value();
        if value.is_empty() {
            None
        } else {
            value.parse().ok()
        }
    }

    /// The character in box `index`, if any.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Replace the value, distributing one character per box from box 0.
    ///
    /// Input is segmented into grapheme clusters and truncated to the box
    /// count; this is the controlled-component echo path, so characters
    /// are written as supplied without mode validation.
    pub fn set_value(&mut self, value: &str) {
        self.slots.fill(None);
        for (slot, cluster) in self.slots.iter_mut().zip(value.graphemes(true)) {
            *slot = cluster.chars().next();
        }
    }

    /// Clear every box.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// The accepted character class.
    #[must_use]
    pub fn mode(&self) -> OtpMode {
        self.mode
    }

    /// Whether the input is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Set the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    // --- Focus ---

    /// The active box index, or `None` when no box is focused.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Focus the box at `index`, clamped into range.
    ///
    /// A freshly focused box has overwrite semantics: the next typed
    /// character replaces its content outright.
    pub fn focus_box(&mut self, index: usize) {
        self.active = Some(index.min(self.slots.len() - 1));
    }

    /// Remove focus from all boxes.
    pub fn blur(&mut self) {
        self.active = None;
    }

    // --- Event handling ---

    /// Handle a terminal event.
    ///
    /// Returns `true` if the state changed; the owner then reads the
    /// recomposed value via [`value`](Self::value) or
    /// [`numeric_value`](Self::numeric_value).
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if self.disabled {
            return false;
        }
        match event {
            Event::Key(key)
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat =>
            {
                self.handle_key(key)
            }
            Event::Paste(paste) => self.paste(&paste.text),
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.ctrl() && !key.alt() => self.enter_char(c),
            KeyCode::Backspace => {
                let cleared = self.clear_active();
                let moved = self.move_active_by(-1);
                cleared || moved
            }
            KeyCode::Delete => self.clear_active(),
            KeyCode::Left => self.move_active_by(-1),
            KeyCode::Right => self.move_active_by(1),
            KeyCode::Home => self.move_active_to(0),
            KeyCode::End => self.move_active_to(self.slots.len() - 1),
            _ => false,
        }
    }

    /// Distribute pasted text one character per box from the active box.
    ///
    /// The text is segmented into grapheme clusters and truncated to the
    /// remaining box count; boxes before the start are untouched. If any
    /// distributed character is not accepted (non-digit in numeric mode,
    /// control, or wider than one cell) the entire paste is rejected.
    /// With no active box, distribution starts at box 0.
    fn paste(&mut self, text: &str) -> bool {
        let start = self.active.unwrap_or(0);
        let remaining = self.slots.len() - start;

        // Clipboards commonly carry a trailing newline; it is never code.
        let incoming: Vec<char> = text
            .trim()
            .graphemes(true)
            .take(remaining)
            .filter_map(|cluster| cluster.chars().next())
            .collect();
        if incoming.is_empty() || incoming.iter().any(|&c| !self.accepts(c)) {
            return false;
        }

        let mut changed = false;
        for (offset, &c) in incoming.iter().enumerate() {
            let slot = &mut self.slots[start + offset];
            if *slot != Some(c) {
                *slot = Some(c);
                changed = true;
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(start, count = incoming.len(), "paste distributed");
        changed
    }

    fn enter_char(&mut self, c: char) -> bool {
        let Some(index) = self.active else {
            return false;
        };
        if !self.accepts(c) {
            return false;
        }
        let written = self.slots[index] != Some(c);
        self.slots[index] = Some(c);
        let moved = self.move_active_by(1);
        written || moved
    }

    fn accepts(&self, c: char) -> bool {
        if c.is_control() || UnicodeWidthChar::width(c) != Some(1) {
            return false;
        }
        match self.mode {
            OtpMode::Numeric => c.is_ascii_digit(),
            OtpMode::Any => true,
        }
    }

    fn clear_active(&mut self) -> bool {
        let Some(index) = self.active else {
            return false;
        };
        self.slots[index].take().is_some()
    }

    fn move_active_by(&mut self, delta: isize) -> bool {
        let Some(index) = self.active else {
            return false;
        };
        let next = index
            .saturating_add_signed(delta)
            .min(self.slots.len() - 1);
        self.active = Some(next);
        next != index
    }

    fn move_active_to(&mut self, index: usize) -> bool {
        if self.active.is_none() {
            return false;
        }
        let clamped = index.min(self.slots.len() - 1);
        let moved = self.active != Some(clamped);
        self.active = Some(clamped);
        moved
    }

    // --- Geometry ---

    /// Total rendered width in cells.
    #[must_use]
    pub fn width(&self) -> u16 {
        let len = self.slots.len() as u16;
        len.saturating_mul(self.box_width)
            .saturating_add(len.saturating_sub(1).saturating_mul(self.gap))
    }

    /// Map a screen position to a box index.
    ///
    /// Returns `None` for positions outside the row, in a gap, or past
    /// the last box. Used by owners for click-to-focus.
    #[must_use]
    pub fn box_at(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if y != area.y || x < area.x || x >= area.right() {
            return None;
        }
        let rel = (x - area.x) as usize;
        let pitch = self.box_width as usize + self.gap as usize;
        let index = rel / pitch;
        if rel % pitch < self.box_width as usize && index < self.slots.len() {
            Some(index)
        } else {
            None
        }
    }

    /// Screen position of the active box's glyph within `area`.
    ///
    /// Useful for `Frame::set_cursor`; `render` already does this.
    #[must_use]
    pub fn screen_cursor(&self, area: Rect) -> Option<(u16, u16)> {
        let index = self.active?;
        let x = self.glyph_x(area, index);
        area.contains(x, area.y).then_some((x, area.y))
    }

    fn glyph_x(&self, area: Rect, index: usize) -> u16 {
        let pitch = u32::from(self.box_width) + u32::from(self.gap);
        let offset = index as u32 * pitch + u32::from(self.box_width / 2);
        area.x.saturating_add(offset.min(u32::from(u16::MAX)) as u16)
    }
}

impl Widget for OtpInput {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "OtpInput",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.width < 1 || area.height < 1 {
            return;
        }

        let y = area.y;
        let base = if self.disabled {
            self.style.patch(self.disabled_style)
        } else {
            self.style
        };

        let pitch = u32::from(self.box_width) + u32::from(self.gap);
        for (index, slot) in self.slots.iter().enumerate() {
            let box_x = area
                .x
                .saturating_add((index as u32 * pitch).min(u32::from(u16::MAX)) as u16);
            if box_x >= area.right() {
                break;
            }

            let is_active = !self.disabled && self.active == Some(index);
            let mut box_style = base;
            if is_active && !self.active_style.is_empty() {
                box_style = box_style.patch(self.active_style);
            }

            // Paint the box background; empty cells present as spaces.
            let box_rect = Rect::new(
                box_x,
                y,
                self.box_width.min(area.right().saturating_sub(box_x)),
                1,
            );
            crate::set_style_area(&mut frame.buffer, box_rect, box_style);

            // Glyph in the box center.
            let glyph_x = self.glyph_x(area, index);
            if glyph_x < area.right() {
                let (glyph, glyph_style) = match slot {
                    Some(c) => (self.mask_char.unwrap_or(*c), box_style),
                    None => (self.placeholder, box_style.patch(self.placeholder_style)),
                };
                let mut cell = Cell::from_char(glyph);
                crate::apply_style(&mut cell, glyph_style);
                if is_active && self.active_style.is_empty() {
                    // Default active marker: reverse video, like a cursor.
                    cell.attrs = cell.attrs.with_flags(cell.attrs.flags() ^ StyleFlags::REVERSE);
                }
                frame.buffer.set(glyph_x, y, cell);

                if is_active {
                    frame.set_cursor(Some((glyph_x, y)));
                }
            }
        }
    }

    fn is_essential(&self) -> bool {
        true
    }
}
