//! Terminal display of a batch of transfers.
//!
//! [`ProgressDisplay`] is the default [`ProgressSink`]: one line per
//! transfer plus an overall bar counting finished transfers.
//!
//! # Examples
//!
//! ```rust
//! use fetchbar::progress::{ProgressDisplay, ProgressSink, ProgressUpdate, StyleOptions};
//! use fetchbar::transfer::Status;
//! use std::time::Duration;
//!
//! let display = ProgressDisplay::new(StyleOptions::default(), 1, false);
//! display.publish(&ProgressUpdate {
//!     id: 0,
//!     label: "file.zip".into(),
//!     bytes: 512,
//!     total: Some(1024),
//!     elapsed: Duration::from_secs(1),
//!     status: Status::Downloading,
//! });
//! display.finish();
//! ```

use super::style::StyleOptions;
use super::update::{ProgressSink, ProgressUpdate};
use crate::transfer::Status;

use indicatif::{HumanDuration, MultiProgress, ProgressBar, ProgressDrawTarget};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

struct ChildBar {
    bar: ProgressBar,
    determinate: bool,
}

/// Progress display manager that coordinates multiple progress bars.
pub struct ProgressDisplay {
    /// The multi-progress instance for coordinating multiple progress bars.
    multi: Arc<MultiProgress>,
    /// The main progress bar for overall progress.
    main: Arc<ProgressBar>,
    style_options: StyleOptions,
    show_main_progress: bool,
    /// Live transfer bars, keyed by transfer id.
    children: Mutex<HashMap<usize, ChildBar>>,
}

impl ProgressDisplay {
    /// Create a new progress display manager.
    ///
    /// # Arguments
    /// * `style_options` - Style configuration for progress bars
    /// * `total_transfers` - Number of transfers for the main progress bar
    /// * `single_file_progress` - Whether to hide main progress for single file downloads
    pub fn new(
        style_options: StyleOptions,
        total_transfers: usize,
        single_file_progress: bool,
    ) -> Self {
        let multi = match style_options.is_enabled() {
            true => Arc::new(MultiProgress::new()),
            false => Arc::new(MultiProgress::with_draw_target(ProgressDrawTarget::hidden())),
        };

        let show_main_progress = !single_file_progress || total_transfers > 1;

        let main = if show_main_progress {
            Arc::new(
                multi.add(
                    style_options
                        .main()
                        .to_progress_bar(total_transfers as u64),
                ),
            )
        } else {
            Arc::new(ProgressBar::hidden())
        };

        if show_main_progress {
            main.tick();
        }

        Self {
            multi,
            main,
            style_options,
            show_main_progress,
            children: Mutex::new(HashMap::new()),
        }
    }

    pub fn multi(&self) -> Arc<MultiProgress> {
        self.multi.clone()
    }

    pub fn main(&self) -> Arc<ProgressBar> {
        self.main.clone()
    }

    /// Number of transfers currently shown.
    pub fn active(&self) -> usize {
        self.children().len()
    }

    fn children(&self) -> MutexGuard<'_, HashMap<usize, ChildBar>> {
        self.children.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn create_child(&self, update: &ProgressUpdate) -> ChildBar {
        let (bar, determinate) = match update.total {
            Some(total) => (self.style_options.child().to_progress_bar(total), true),
            None => (self.style_options.indeterminate().to_spinner(), false),
        };
        let bar = self.multi.add(bar);
        bar.set_prefix(update.label.clone());
        ChildBar { bar, determinate }
    }

    fn finish_child(&self, child: ChildBar, status: Status) {
        let opts = match child.determinate {
            true => self.style_options.child(),
            false => self.style_options.indeterminate(),
        };
        match status {
            Status::Failed => child.bar.abandon(),
            _ if opts.clear => child.bar.finish_and_clear(),
            _ => child.bar.finish(),
        }
    }
}

impl ProgressSink for ProgressDisplay {
    fn publish(&self, update: &ProgressUpdate) {
        let mut children = self.children();
        let child = children
            .entry(update.id)
            .or_insert_with(|| self.create_child(update));

        // The length may only become known after the first update.
        if let (Some(total), false) = (update.total, child.determinate) {
            child.bar.set_length(total);
            child
                .bar
                .set_style(self.style_options.child().to_progress_style());
            child.determinate = true;
        }

        child.bar.set_position(update.bytes);
        child.bar.set_message(format!(
            "{:<11} {:<5}",
            update.status,
            HumanDuration(update.elapsed).to_string()
        ));

        if update.is_terminal() {
            if let Some(child) = children.remove(&update.id) {
                self.finish_child(child, update.status);
            }
            self.main.inc(1);
        } else {
            child.bar.tick();
        }
    }

    fn finish(&self) {
        if self.show_main_progress {
            if self.style_options.main().clear {
                self.main.finish_and_clear();
            } else {
                self.main.finish();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressBarOpts;
    use std::time::Duration;

    fn update(id: usize, bytes: u64, total: Option<u64>, status: Status) -> ProgressUpdate {
        ProgressUpdate {
            id,
            label: format!("file-{}", id),
            bytes,
            total,
            elapsed: Duration::from_millis(1500),
            status,
        }
    }

    fn hidden_style() -> StyleOptions {
        StyleOptions::new(
            ProgressBarOpts::hidden(),
            ProgressBarOpts::hidden(),
            ProgressBarOpts::hidden(),
        )
    }

    #[test]
    fn test_bars_live_until_terminal_update() {
        let display = ProgressDisplay::new(hidden_style(), 2, false);
        display.publish(&update(0, 10, Some(100), Status::Downloading));
        display.publish(&update(1, 10, None, Status::Downloading));
        assert_eq!(display.active(), 2);

        display.publish(&update(0, 100, Some(100), Status::Done));
        assert_eq!(display.active(), 1);
        display.publish(&update(1, 20, None, Status::Failed));
        assert_eq!(display.active(), 0);
        display.finish();
    }

    #[test]
    fn test_main_counts_finished_transfers() {
        let display = ProgressDisplay::new(StyleOptions::default(), 3, false);
        assert_eq!(display.main().length(), Some(3));

        display.publish(&update(0, 5, Some(5), Status::Done));
        display.publish(&update(1, 0, None, Status::Failed));
        assert_eq!(display.main().position(), 2);
    }

    #[test]
    fn test_single_file_hides_main() {
        let display = ProgressDisplay::new(StyleOptions::default(), 1, true);
        assert!(display.main().is_hidden());
    }

    #[test]
    fn test_length_learned_late() {
        let display = ProgressDisplay::new(StyleOptions::default(), 1, false);
        display.publish(&update(0, 0, None, Status::Preparing));
        display.publish(&update(0, 50, Some(200), Status::Downloading));

        let children = display.children();
        let child = children.get(&0).unwrap();
        assert!(child.determinate);
        assert_eq!(child.bar.length(), Some(200));
        assert_eq!(child.bar.position(), 50);
    }
}
