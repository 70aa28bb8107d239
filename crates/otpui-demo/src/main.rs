#![forbid(unsafe_code)]

//! Interactive demo for the segmented code input.
//!
//! Runs a raw-mode crossterm session in the alternate screen: read an
//! event, update the app, present the next frame. Bracketed paste is
//! enabled so clipboard input arrives as a single `Event::Paste`.

mod app;
mod cli;

use std::io::{self, Write};
use std::process;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use otpui::{Event, Frame, Presenter};

use crate::app::{DemoApp, Outcome};
use crate::cli::DemoOptions;

fn main() {
    let options = cli::parse_args();
    #[cfg(feature = "tracing")]
    init_tracing();
    if let Err(err) = run(&options) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(options: &DemoOptions) -> otpui::Result<()> {
    let mut stdout = io::stdout();
    let _session = TerminalSession::enter(&mut stdout, options.mouse)?;

    let mut app = DemoApp::new(options);
    let mut presenter = Presenter::new();

    loop {
        let (width, height) = terminal::size()?;
        let mut frame = Frame::new(width.max(1), height.max(1));
        app.view(&mut frame);
        presenter.present(&frame, &mut stdout)?;

        let raw = crossterm::event::read()?;
        let Some(event) = Event::from_crossterm(raw) else {
            continue;
        };
        if app.update(&event) == Outcome::Quit {
            return Ok(());
        }
    }
}

/// Raw-mode session guard: restores the terminal on drop, including the
/// early-return and panic paths.
struct TerminalSession {
    mouse: bool,
}

impl TerminalSession {
    fn enter<W: Write>(out: &mut W, mouse: bool) -> otpui::Result<Self> {
        terminal::enable_raw_mode()?;
        queue!(out, EnterAlternateScreen, EnableBracketedPaste)?;
        if mouse {
            queue!(out, EnableMouseCapture)?;
        }
        out.flush()?;
        Ok(Self { mouse })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, DisableBracketedPaste, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Route tracing output to stderr; redirect it to a file when running the
/// demo, e.g. `OTPUI_LOG=debug otpui-demo 2>demo.log`.
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("OTPUI_LOG"))
        .with_writer(io::stderr)
        .init();
    tracing::debug!("tracing initialized");
}
