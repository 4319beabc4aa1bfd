//! Progress bar styling and configuration options.
//!
//! # Examples
//!
//! ```rust
//! use fetchbar::progress::{StyleOptions, ProgressBarOpts};
//!
//! // Default styling: the overall bar stays, transfer bars clear when done.
//! let style_options = StyleOptions::default();
//! assert!(style_options.is_enabled());
//!
//! let hidden = StyleOptions::new(
//!     ProgressBarOpts::hidden(),
//!     ProgressBarOpts::hidden(),
//!     ProgressBarOpts::hidden(),
//! );
//! assert!(!hidden.is_enabled());
//! ```

use indicatif::{ProgressBar, ProgressStyle};

/// Define the display style options.
///
/// `main` styles the overall bar, `child` a transfer with a declared
/// length, and `indeterminate` a transfer whose length is unknown.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub(crate) main: ProgressBarOpts,
    pub(crate) child: ProgressBarOpts,
    pub(crate) indeterminate: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            main: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_BAR_WITH_POSITION.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
                enabled: true,
                clear: false,
            },
            child: ProgressBarOpts::with_transfer_style(),
            indeterminate: ProgressBarOpts::with_indeterminate_style(),
        }
    }
}

impl StyleOptions {
    /// Create new [`StyleOptions`].
    pub fn new(
        main: ProgressBarOpts,
        child: ProgressBarOpts,
        indeterminate: ProgressBarOpts,
    ) -> Self {
        Self {
            main,
            child,
            indeterminate,
        }
    }

    pub fn set_main(&mut self, main: ProgressBarOpts) {
        self.main = main;
    }

    pub fn set_child(&mut self, child: ProgressBarOpts) {
        self.child = child;
    }

    pub fn set_indeterminate(&mut self, indeterminate: ProgressBarOpts) {
        self.indeterminate = indeterminate;
    }

    /// Return `false` if no bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.main.enabled || self.child.enabled || self.indeterminate.enabled
    }

    pub fn main(&self) -> &ProgressBarOpts {
        &self.main
    }

    pub fn child(&self) -> &ProgressBarOpts {
        &self.child
    }

    pub fn indeterminate(&self) -> &ProgressBarOpts {
        &self.indeterminate
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// Template representing the bar and its position.
    ///
    ///`███████████████████████████████████████ 11/12 (99%) eta 00:00:02`
    pub const TEMPLATE_BAR_WITH_POSITION: &'static str =
        "{bar:40.blue} {pos:>}/{len} ({percent}%) eta {eta_precise:.blue}";
    /// One transfer with a known length.
    ///
    /// `file.pdf     downloading 3s   4.20 MiB/10.50 MiB ━━━━━━━━━━━━━━━╾──────────  40%`
    pub const TEMPLATE_TRANSFER: &'static str =
        "{prefix:<12.bold} {msg} {bytes:>10.green}/{total_bytes:<10.green} {bar:30.green/black} {percent:>3}%";
    /// One transfer with an unknown length: raw byte count, no percentage.
    ///
    /// `stream.bin   downloading 3s   ⠙ 4.20 MiB`
    pub const TEMPLATE_INDETERMINATE: &'static str =
        "{prefix:<12.bold} {msg} {spinner:.green} {bytes:>10.green}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";
    /// Use rough blocks as progress characters: `"█  "`.
    pub const CHARS_ROUGH: &'static str = "█  ";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// An invalid template falls back to the default bar template.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let mut style = match &self.template {
            Some(template) => ProgressStyle::with_template(template)
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
            None => ProgressStyle::default_bar(),
        };
        if let Some(progress_chars) = &self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(&self, len: u64) -> ProgressBar {
        // Return a hidden Progress bar if we disabled it.
        if !self.enabled {
            return ProgressBar::hidden();
        }
        ProgressBar::new(len).with_style(self.to_progress_style())
    }

    /// Create a spinner based on the provided options.
    pub fn to_spinner(&self) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        ProgressBar::new_spinner().with_style(self.to_progress_style())
    }

    /// Options for a transfer with a known length.
    pub fn with_transfer_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_TRANSFER.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
            enabled: true,
            clear: true,
        }
    }

    /// Options for a transfer with an unknown length.
    pub fn with_indeterminate_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_INDETERMINATE.into()),
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}
