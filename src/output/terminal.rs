use std::io::{self, Write};

use colored::Colorize;

use super::{json, pretty};
use crate::cli::OutputFormat;
use crate::search::{DisplayMode, ResultsView, SearchView};

/// Search panel drawn on the terminal
///
/// Loading indicators go to stderr so piped stdout stays clean. Results are
/// only printed when `echo_results` is set; one-shot commands print the
/// outcome themselves instead.
pub struct TerminalView {
    format: OutputFormat,
    echo_results: bool,
    show_progress: bool,
}

impl TerminalView {
    /// View for the interactive session, printing every rendered panel
    pub fn interactive(format: OutputFormat, show_progress: bool) -> Self {
        Self {
            format,
            echo_results: true,
            show_progress,
        }
    }

    /// View that only reports loading; the caller prints the outcome
    pub fn quiet(format: OutputFormat, show_progress: bool) -> Self {
        Self {
            format,
            echo_results: false,
            show_progress,
        }
    }
}

impl SearchView for TerminalView {
    fn show_loading(&self, mode: DisplayMode) {
        if self.show_progress && self.format == OutputFormat::Pretty {
            let label = match mode {
                DisplayMode::Desktop => "Searching...",
                DisplayMode::Mobile => "...",
            };
            eprint!("{}", label.dimmed());
            let _ = io::stderr().flush();
        }
    }

    fn hide_loading(&self, _mode: DisplayMode) {
        if self.show_progress && self.format == OutputFormat::Pretty {
            // Clear the indicator line
            eprint!("\r\x1b[K");
            let _ = io::stderr().flush();
        }
    }

    fn hide_results(&self, _mode: DisplayMode) {}

    fn show_results(&self, mode: DisplayMode, view: &ResultsView) {
        if !self.echo_results {
            return;
        }
        match self.format {
            OutputFormat::Pretty => println!("{}", pretty::format_results(view, mode)),
            OutputFormat::Json => match json::format_json(view) {
                Ok(output) => println!("{output}"),
                Err(e) => tracing::error!(error = %e, "could not encode results"),
            },
        }
    }
}
