//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::shell::{OutputCallback, OutputLine};

use super::theme::SetupTheme;
use super::SpinnerHandle;

/// Longest live output line shown under a spinner.
const MAX_LIVE_LINE: usize = 72;

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: SetupTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: SetupTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    /// Create a spinner that doesn't show (for silent mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: SetupTheme::plain(),
        }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_and_clear(&mut self) {
        self.bar.finish_and_clear();
    }

    fn progress_bar(&self) -> Option<ProgressBar> {
        Some(self.bar.clone())
    }
}

fn truncate_line(text: &str) -> String {
    if text.chars().count() > MAX_LIVE_LINE {
        let head: String = text.chars().take(MAX_LIVE_LINE - 3).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Create an output callback that shows the last `max_lines` lines of a
/// subprocess's output beneath the spinner's base message.
pub fn live_output_callback(
    bar: ProgressBar,
    base_message: String,
    max_lines: usize,
) -> OutputCallback {
    let buffer: Arc<Mutex<VecDeque<String>>> = Arc::new(Mutex::new(VecDeque::new()));
    let dim = SetupTheme::new().dim;

    Box::new(move |line: OutputLine| {
        let text = match &line {
            OutputLine::Stdout(s) | OutputLine::Stderr(s) => s.trim_end(),
        };

        if text.is_empty() {
            return;
        }

        let Ok(mut buf) = buffer.lock() else {
            return;
        };
        buf.push_back(truncate_line(text));
        while buf.len() > max_lines {
            buf.pop_front();
        }

        let mut msg = base_message.clone();
        for line in buf.iter() {
            msg.push_str("\n  ");
            msg.push_str(&dim.apply_to(format!("» {}", line)).to_string());
        }

        bar.set_message(msg);
    })
}
