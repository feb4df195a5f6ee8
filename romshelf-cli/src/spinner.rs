//! Loading spinner for one-shot commands.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// A single spinner shown while a listing downloads.
pub(crate) struct LoadSpinner {
    pb: ProgressBar,
}

impl LoadSpinner {
    /// When `quiet` is true the spinner is hidden.
    pub(crate) fn new(console: &str, quiet: bool) -> Self {
        let pb = ProgressBar::new_spinner();
        if quiet {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .expect("static pattern")
                .tick_chars("/-\\|"),
        );
        pb.set_message(format!("Loading {} listing...", console.to_uppercase()));
        Self { pb }
    }

    pub(crate) fn tick(&self) {
        self.pb.tick();
    }

    pub(crate) fn finish(self) {
        self.pb.finish_and_clear();
    }
}
