//! Terminal progress bar for batch conversion.

use std::io::{self, IsTerminal};

use indicatif::{ProgressBar, ProgressStyle};
use snp_core::ConversionObserver;

const TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}";

/// Drives an `indicatif` bar from conversion progress callbacks.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Bar for `total` files; hidden when stderr is not a terminal.
    pub fn new(total: usize) -> Self {
        let bar = if io::stderr().is_terminal() {
            ProgressBar::new(total as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ConversionObserver for ProgressReporter {
    fn on_progress(&mut self, current: usize, total: usize, file_name: &str) {
        self.bar.set_length(total as u64);
        self.bar.set_position(current as u64);
        self.bar.set_message(file_name.to_string());
    }
}
