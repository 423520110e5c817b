//! Terminal output for CLI handlers.
//!
//! Text output comes in two kinds. Payload is what a command exists to
//! show: section titles, labeled fields, tables and warnings. Decoration is
//! everything around it: the app header, success marks, notes, hints and
//! spinners. `--quiet` drops decoration and keeps payload.
//!
//! With `--json` every text helper is silent. A handler prints exactly one
//! document through [`json_output`], and failures reach stderr through
//! [`error`] as a JSON object.

use std::fmt::Display;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use parking_lot::{const_rwlock, RwLock};
use serde_json::json;

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// One JSON document on stdout instead of text.
    pub json: bool,
    /// Drop decoration, keep payload.
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }

    fn prints(self, kind: Kind) -> bool {
        match kind {
            Kind::Payload => !self.json,
            Kind::Decoration => !self.json && !self.quiet,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Payload,
    Decoration,
}

static OUTPUT: RwLock<OutputConfig> = const_rwlock(OutputConfig::new(false, false, 0));

fn current() -> OutputConfig {
    *OUTPUT.read()
}

fn prints(kind: Kind) -> bool {
    current().prints(kind)
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    *OUTPUT.write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn is_quiet() -> bool {
    current().quiet
}

#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// App name and version, printed above a command's output.
pub fn header(version: &str) {
    if prints(Kind::Decoration) {
        println!("{} {}", "betboard".bold(), version.dimmed());
    }
}

pub fn section(title: &str) {
    if prints(Kind::Payload) {
        println!();
        println!("{}", title.bold());
    }
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if prints(Kind::Payload) {
        println!("  {:<14} {}", label.dimmed(), value);
    }
}

/// Print a block such as a rendered table, indented line by line.
pub fn lines(content: &str) {
    if prints(Kind::Payload) {
        for line in content.lines() {
            println!("  {line}");
        }
    }
}

pub fn warning(message: &str) {
    if prints(Kind::Payload) {
        println!("  {} {}", "⚠".yellow(), message);
    }
}

pub fn success(message: &str) {
    if prints(Kind::Decoration) {
        println!("  {} {}", "✓".green(), message);
    }
}

pub fn note(message: &str) {
    if prints(Kind::Decoration) {
        println!("  {}", message.dimmed());
    }
}

pub fn hint(message: &str) {
    if prints(Kind::Decoration) {
        println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
    }
}

/// Print a failure on stderr. Shown in every mode.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "error": message }));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

/// Print the single JSON document of a command.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a spinner on stderr. Hidden unless decoration is printed, so the
/// finishing calls below are no-ops in quiet and JSON mode.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = if prints(Kind::Decoration) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(SPINNER_FRAMES)
            .template("  {spinner:.cyan} {msg}")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message(message.to_string());
    pb
}

pub fn spinner_success(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("{} {}", "✓".green(), message));
}

pub fn spinner_fail(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("{} {}", "×".red(), message));
}

/// Color applied to a table cell or field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Bad,
    Muted,
}

/// Render `value` in `tone`.
pub fn toned(value: impl Display, tone: Tone) -> String {
    match tone {
        Tone::Good => value.green().to_string(),
        Tone::Bad => value.red().to_string(),
        Tone::Muted => value.dimmed().to_string(),
    }
}
