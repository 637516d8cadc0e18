use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files - {msg}";

/// Console reporter writing every message to stderr, keeping stdout free for
/// `--tree` output.
///
/// The first `report_progress` call of a run starts a file-count bar. While
/// the bar is live, messages are printed through `ProgressBar::suspend` so
/// the bar is redrawn below them instead of being torn.
pub struct StderrProgressReporter {
    draw_target: fn() -> ProgressDrawTarget,
    bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr)
    }

    fn with_draw_target(draw_target: fn() -> ProgressDrawTarget) -> Self {
        Self {
            draw_target,
            bar: RefCell::new(None),
        }
    }

    fn bar_for_run(&self, file_count: usize) -> ProgressBar {
        self.bar
            .borrow_mut()
            .get_or_insert_with(|| {
                let bar =
                    ProgressBar::with_draw_target(Some(file_count as u64), (self.draw_target)());
                if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
                    bar.set_style(style.progress_chars("=>-"));
                }
                bar
            })
            .clone()
    }

    /// The bar, if one was started and has not been finished yet
    fn live_bar(&self) -> Option<ProgressBar> {
        self.bar
            .borrow()
            .as_ref()
            .filter(|bar| !bar.is_finished())
            .cloned()
    }

    fn print(&self, message: &str) {
        match self.live_bar() {
            Some(bar) => bar.suspend(|| eprintln!("{}", message)),
            None => eprintln!("{}", message),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let bar = self.bar_for_run(total);
        bar.set_position(current as u64);
        if let Some(file) = message {
            bar.set_message(file.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.print(message);
    }

    fn report_completion(&self, message: &str) {
        if let Some(bar) = self.live_bar() {
            bar.finish_and_clear();
        }
        eprintln!();
        eprintln!("{}", message);
    }
}
