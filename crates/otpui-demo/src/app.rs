#![forbid(unsafe_code)]

//! Demo application state: one code input, a status line, and quit/submit
//! handling. The event loop in `main` owns the terminal; this module owns
//! everything in between.

use std::cell::Cell as StdCell;

use otpui::{
    Cell, Event, Frame, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEventKind,
    OtpInput, OtpMode, PackedRgba, Rect, Style, Widget,
};

use crate::cli::DemoOptions;

const TITLE: &str = "otpui demo";
const HINTS: &str = "Enter: submit | Backspace/Delete: clear | \u{2190}/\u{2192}: move | Esc: quit";

/// What the update step decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

pub struct DemoApp {
    input: OtpInput,
    /// Where the input was last rendered, for mouse hit testing.
    /// `StdCell` because `view` takes `&self` but runs before `update`.
    input_area: StdCell<Rect>,
    status: String,
    submitted: Option<String>,
}

impl DemoApp {
    pub fn new(options: &DemoOptions) -> Self {
        let mode = if options.numeric {
            OtpMode::Numeric
        } else {
            OtpMode::Any
        };
        let mut input = OtpInput::new(options.len)
            .with_mode(mode)
            .with_autofocus(true)
            .with_placeholder('_')
            .with_style(Style::new().fg(PackedRgba::rgb(220, 220, 220)))
            .with_active_style(
                Style::new()
                    .fg(PackedRgba::rgb(16, 16, 16))
                    .bg(PackedRgba::rgb(95, 175, 255)),
            )
            .with_placeholder_style(Style::new().fg(PackedRgba::rgb(110, 110, 110)));
        if options.secure {
            input = input.with_mask('\u{2022}');
        }

        let mut app = Self {
            input,
            input_area: StdCell::new(Rect::default()),
            status: String::new(),
            submitted: None,
        };
        app.update_status();
        app
    }

    pub fn update(&mut self, event: &Event) -> Outcome {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Escape,
                kind: KeyEventKind::Press,
                ..
            }) => return Outcome::Quit,
            Event::Key(key)
                if key.is_char('c')
                    && key.ctrl()
                    && key.kind == KeyEventKind::Press =>
            {
                return Outcome::Quit;
            }
            Event::Key(KeyEvent {
                code: KeyCode::Enter,
                kind: KeyEventKind::Press,
                ..
            }) => {
                self.submit();
            }
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
                    match self.input.box_at(self.input_area.get(), mouse.x, mouse.y) {
                        Some(index) => self.input.focus_box(index),
                        None => self.input.blur(),
                    }
                    self.update_status();
                }
            }
            _ => {
                if self.input.handle_event(event) {
                    self.submitted = None;
                    self.update_status();
                }
            }
        }
        Outcome::Continue
    }

    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        if area.is_empty() {
            return;
        }

        draw_text(frame, 2, 0, TITLE, Style::new().bold());

        let input_area = Rect::new(2, 2, self.input.width().min(area.width), 1);
        self.input_area.set(input_area);
        if area.height > 2 {
            self.input.render(input_area, frame);
        }

        if area.height > 4 {
            draw_text(frame, 2, 4, &self.status, Style::new());
        }
        if area.height > 6 {
            draw_text(
                frame,
                2,
                area.height - 1,
                HINTS,
                Style::new().fg(PackedRgba::rgb(110, 110, 110)),
            );
        }
    }

    fn submit(&mut self) {
        if self.input.is_complete() {
            self.submitted = Some(self.input.value());
        } else {
            self.submitted = None;
        }
        self.update_status();
    }

    fn update_status(&mut self) {
        self.status = match (&self.submitted, self.input.active()) {
            (Some(code), _) => format!("Submitted: {code}"),
            (None, _) if !self.input.is_empty() && !self.input.is_complete() => format!(
                "Entered {} of {} characters",
                self.input.value().chars().count(),
                self.input.len()
            ),
            (None, Some(index)) => format!("Box {} of {} active", index + 1, self.input.len()),
            (None, None) => "No box focused (click one)".to_string(),
        };
    }

    #[cfg(test)]
    fn value(&self) -> String {
        self.input.value()
    }
}

fn draw_text(frame: &mut Frame, x: u16, y: u16, text: &str, style: Style) {
    let max_x = frame.buffer.width();
    let mut x = x;
    for c in text.chars() {
        if x >= max_x {
            break;
        }
        let mut cell = Cell::from_char(c);
        if let Some(fg) = style.fg {
            cell.fg = fg;
        }
        if let Some(bg) = style.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = style.attrs {
            cell.attrs = cell.attrs.with_flags(attrs);
        }
        frame.buffer.set(x, y, cell);
        x = x.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otpui::PasteEvent;

    fn options() -> DemoOptions {
        DemoOptions::default()
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    #[test]
    fn escape_quits() {
        let mut app = DemoApp::new(&options());
        assert_eq!(app.update(&press(KeyCode::Escape)), Outcome::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = DemoApp::new(&options());
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL));
        assert_eq!(app.update(&event), Outcome::Quit);
    }

    #[test]
    fn typing_reaches_input() {
        let mut app = DemoApp::new(&options());
        assert_eq!(app.update(&press(KeyCode::Char('1'))), Outcome::Continue);
        assert_eq!(app.value(), "1");
        assert!(app.status.contains("1 of 4"));
    }

    #[test]
    fn enter_submits_complete_code() {
        let mut app = DemoApp::new(&options());
        for c in "1234".chars() {
            app.update(&press(KeyCode::Char(c)));
        }
        app.update(&press(KeyCode::Enter));
        assert_eq!(app.submitted.as_deref(), Some("1234"));
        assert!(app.status.contains("Submitted: 1234"));
    }

    #[test]
    fn enter_on_partial_code_does_not_submit() {
        let mut app = DemoApp::new(&options());
        app.update(&press(KeyCode::Char('1')));
        app.update(&press(KeyCode::Enter));
        assert!(app.submitted.is_none());
    }

    #[test]
    fn further_input_clears_submission() {
        let mut app = DemoApp::new(&options());
        for c in "1234".chars() {
            app.update(&press(KeyCode::Char(c)));
        }
        app.update(&press(KeyCode::Enter));
        assert!(app.submitted.is_some());
        app.update(&press(KeyCode::Backspace));
        assert!(app.submitted.is_none());
    }

    #[test]
    fn paste_reaches_input() {
        let mut app = DemoApp::new(&options());
        app.update(&Event::Paste(PasteEvent::bracketed("abcd")));
        assert_eq!(app.value(), "abcd");
    }

    #[test]
    fn view_renders_into_frame() {
        let app = DemoApp::new(&options());
        let mut frame = Frame::new(60, 8);
        app.view(&mut frame);
        // Title lands on the first row.
        assert_eq!(
            frame.buffer.get(2, 0).and_then(|c| c.content.as_char()),
            Some('o')
        );
        // The input area was recorded for hit testing.
        assert!(!app.input_area.get().is_empty());
    }

    #[test]
    fn numeric_option_restricts_input() {
        let mut demo_options = options();
        demo_options.numeric = true;
        let mut app = DemoApp::new(&demo_options);
        app.update(&press(KeyCode::Char('x')));
        assert_eq!(app.value(), "");
        app.update(&press(KeyCode::Char('5')));
        assert_eq!(app.value(), "5");
    }
}
