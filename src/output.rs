//! Terminal output formatting for the termscheme CLI.
//!
//! Status lines for the CLI, plus small formatting helpers for counts and
//! paths. Status goes to stderr so stdout can be piped straight into a
//! theme file.

use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

// Wide enough for "Unresolved" and "Suggested"
const VERB_WIDTH: usize = 12;

/// Status printer for the `termscheme` subcommands.
///
/// Writes one line per event to stderr with the verb right-aligned, the way
/// Cargo does:
///
/// ```text
///     Scanning /usr/share/termscheme/templates
///    Rendering kitty/default templates/kitty/templates/default.mustache
///   Unresolved {{cursor}} rendered empty
///         Wrote mocha.conf
///    Suggested kitty-themes/mocha.conf
/// ```
///
/// Rendered text and data dumps go to stdout and never pass through here.
pub struct Printer {
    color: bool,
}

impl Printer {
    /// Printer that colours verbs when stderr is a terminal.
    pub fn new() -> Self {
        Self::with_color(io::stderr().is_terminal())
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Work in progress: `Scanning`, `Rendering`.
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// A finished step: `Wrote`, `Found`, `Expanded`.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Information the user may act on: `Suggested`, and one `App` line per
    /// inventory entry.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Problems that do not stop the command: `Unresolved` tags, `Skipping`
    /// unreadable applications, an `Empty` catalog.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Secondary text such as template paths and homepage URLs.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "variant", "variants")` → "1 variant".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
