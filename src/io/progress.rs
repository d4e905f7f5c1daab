//! Multi-file placement progress with automatic batching for large sets

use std::path::Path;
use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:30.green/white}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] layouts [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

#[derive(Debug, Clone, Default)]
struct FileState {
    label: String,
    placed: usize,
    total: usize,
    done: bool,
}

impl FileState {
    fn message(&self) -> String {
        let width = self.total.to_string().len();
        let mark = if self.done { " ✓" } else { "" };
        format!("{:>width$}/{} circles{mark}", self.placed, self.total)
    }
}

/// Coordinates progress display for batch layout runs
///
/// Small batches get one bar per file. Larger ones keep a rolling window of
/// the most recently started files plus an overall layout counter.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    files: Vec<Option<FileState>>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(MultiProgress::new())
    }

    /// Create a manager that draws nothing, for tests and non-interactive runs
    pub fn hidden() -> Self {
        Self::with_target(MultiProgress::with_draw_target(ProgressDrawTarget::hidden()))
    }

    const fn with_target(multi_progress: MultiProgress) -> Self {
        Self {
            multi_progress,
            batch_bar: None,
            file_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Create the bars for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let bar = self.multi_progress.add(ProgressBar::new(file_count as u64));
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(bar);
        }

        self.file_bars = (0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS))
            .map(|_| {
                let bar = self.multi_progress.add(ProgressBar::new(0));
                bar.set_style(PLACEMENT_STYLE.clone());
                bar
            })
            .collect();
    }

    /// Start tracking a file with `total` circles to place
    pub fn start_file(&mut self, index: usize, path: &Path, total: usize) {
        if self.files.len() <= index {
            self.files.resize(index + 1, None);
        }
        if let Some(slot) = self.files.get_mut(index) {
            *slot = Some(FileState {
                label: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                total,
                ..FileState::default()
            });
        }
        self.refresh();
    }

    /// Report how many circles of a file have been placed
    pub fn update_placement(&mut self, index: usize, placed: usize) {
        if let Some(Some(state)) = self.files.get_mut(index) {
            state.placed = placed.min(state.total);
            self.refresh();
        }
    }

    /// Mark a file as laid out and advance the batch counter
    pub fn complete_file(&mut self, index: usize) {
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
        if let Some(Some(state)) = self.files.get_mut(index) {
            state.placed = state.total;
            state.done = true;
        }
        self.refresh();
    }

    /// Placed and total circle counts recorded for a file
    ///
    /// Files that were skipped over before a later one started report `(0, 0)`.
    pub fn file_progress(&self, index: usize) -> Option<(usize, usize)> {
        self.files
            .get(index)
            .map(|slot| slot.as_ref().map_or((0, 0), |s| (s.placed, s.total)))
    }

    /// Number of individual file bars in use
    pub fn bar_count(&self) -> usize {
        self.file_bars.len()
    }

    /// Check whether the overall file counter is shown
    pub const fn has_batch_bar(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.finish_with_message("all layouts written");
        }
        let _ = self.multi_progress.clear();
    }

    // Show the most recently started files, oldest on top
    fn refresh(&self) {
        let started: Vec<&FileState> = self.files.iter().flatten().collect();
        let window = started
            .get(started.len().saturating_sub(self.file_bars.len())..)
            .unwrap_or_default();

        for (index, bar) in self.file_bars.iter().enumerate() {
            if let Some(state) = window.get(index) {
                bar.set_length(state.total as u64);
                bar.set_position(state.placed as u64);
                bar.set_prefix(state.label.clone());
                bar.set_message(state.message());
            } else {
                bar.reset();
                bar.set_length(0);
                bar.set_prefix(String::new());
                bar.set_message(String::new());
            }
        }
    }
}
