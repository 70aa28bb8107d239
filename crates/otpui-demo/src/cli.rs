#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `OTPUI_DEMO_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
otpui-demo — segmented one-time-code input

USAGE:
    otpui-demo [OPTIONS]

OPTIONS:
    --len=N       Number of boxes, 1-12 (default: 4)
    --numeric     Accept ASCII digits only
    --secure      Mask entered characters
    --no-mouse    Disable mouse event capture
    --help, -h    Show this help message
    --version, -V Show version

KEYBINDINGS:
    0-9 a-z ...     Fill the active box and advance
    Left/Right      Move between boxes
    Home/End        Jump to first/last box
    Backspace       Clear the box and step back
    Delete          Clear the box in place
    Enter           Submit the code
    Esc / Ctrl+C    Quit
    Mouse click     Focus a box (click elsewhere to blur)

ENVIRONMENT VARIABLES:
    OTPUI_DEMO_LEN       Override --len
    OTPUI_DEMO_NUMERIC   Set to 1/true to force --numeric
    OTPUI_DEMO_SECURE    Set to 1/true to force --secure
";

const MAX_LEN: usize = 12;

/// Parsed demo options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    /// Number of boxes.
    pub len: usize,
    /// Digits-only mode.
    pub numeric: bool,
    /// Mask entered characters.
    pub secure: bool,
    /// Capture mouse events.
    pub mouse: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            len: 4,
            numeric: false,
            secure: false,
            mouse: true,
        }
    }
}

/// Parse process arguments, exiting on `--help`/`--version`/errors.
pub fn parse_args() -> DemoOptions {
    match parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(ParseOutcome::Help) => {
            print!("{HELP_TEXT}");
            process::exit(0);
        }
        Err(ParseOutcome::Version) => {
            println!("otpui-demo {VERSION}");
            process::exit(0);
        }
        Err(ParseOutcome::Invalid(msg)) => {
            eprintln!("error: {msg}");
            eprintln!("run with --help for usage");
            process::exit(2);
        }
    }
}

/// Non-option parse outcomes.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    Help,
    Version,
    Invalid(String),
}

fn parse(args: impl Iterator<Item = String>) -> Result<DemoOptions, ParseOutcome> {
    let mut options = DemoOptions::default();

    if let Ok(value) = env::var("OTPUI_DEMO_LEN") {
        options.len = parse_len(&value)?;
    }
    if env_flag("OTPUI_DEMO_NUMERIC") {
        options.numeric = true;
    }
    if env_flag("OTPUI_DEMO_SECURE") {
        options.secure = true;
    }

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Err(ParseOutcome::Help),
            "--version" | "-V" => return Err(ParseOutcome::Version),
            "--numeric" => options.numeric = true,
            "--secure" => options.secure = true,
            "--no-mouse" => options.mouse = false,
            _ => {
                if let Some(value) = arg.strip_prefix("--len=") {
                    options.len = parse_len(value)?;
                } else {
                    return Err(ParseOutcome::Invalid(format!("unknown argument: {arg}")));
                }
            }
        }
    }

    Ok(options)
}

fn parse_len(value: &str) -> Result<usize, ParseOutcome> {
    match value.parse::<usize>() {
        Ok(len) if (1..=MAX_LEN).contains(&len) => Ok(len),
        _ => Err(ParseOutcome::Invalid(format!(
            "--len must be 1-{MAX_LEN}, got {value:?}"
        ))),
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|v| matches!(v.as_str(), "1" | "true" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_vec(args: &[&str]) -> Result<DemoOptions, ParseOutcome> {
        parse(args.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn defaults_without_args() {
        let options = parse_vec(&[]).expect("empty args parse");
        assert_eq!(options, DemoOptions::default());
    }

    #[test]
    fn parses_len() {
        let options = parse_vec(&["--len=6"]).expect("--len=6 parses");
        assert_eq!(options.len, 6);
    }

    #[test]
    fn rejects_bad_len() {
        assert!(matches!(
            parse_vec(&["--len=0"]),
            Err(ParseOutcome::Invalid(_))
        ));
        assert!(matches!(
            parse_vec(&["--len=99"]),
            Err(ParseOutcome::Invalid(_))
        ));
        assert!(matches!(
            parse_vec(&["--len=abc"]),
            Err(ParseOutcome::Invalid(_))
        ));
    }

    #[test]
    fn parses_flags() {
        let options =
            parse_vec(&["--numeric", "--secure", "--no-mouse"]).expect("flags parse");
        assert!(options.numeric);
        assert!(options.secure);
        assert!(!options.mouse);
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse_vec(&["--help"]), Err(ParseOutcome::Help));
        assert_eq!(parse_vec(&["-V"]), Err(ParseOutcome::Version));
    }

    #[test]
    fn unknown_argument_is_invalid() {
        assert!(matches!(
            parse_vec(&["--frobnicate"]),
            Err(ParseOutcome::Invalid(_))
        ));
    }
}
