//! Per-file render progress with a rolling window of bars for large batches

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Stages a source file passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderStage {
    /// Reading and hashing the source bytes
    Hashing = 1,
    /// Drawing, quantizing and mirroring
    Composing = 2,
    /// Writing PNG files
    Exporting = 3,
}

impl RenderStage {
    /// Number of stages per file
    pub const COUNT: u64 = 3;

    /// Short label shown next to the file name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hashing => "hashing",
            Self::Composing => "composing",
            Self::Exporting => "exporting",
        }
    }

    /// Stages finished before this one starts
    const fn completed_before(self) -> u64 {
        self as u64 - 1
    }
}

// What one bar shows for one file
#[derive(Debug, Clone, Default)]
struct FileProgress {
    name: String,
    status: &'static str,
    completed: u64,
}

impl FileProgress {
    const fn is_started(&self) -> bool {
        !self.name.is_empty()
    }

    fn show_on(&self, bar: &ProgressBar) {
        bar.set_position(self.completed);
        bar.set_message(self.status);
        bar.set_prefix(self.name.clone());
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>10} [{bar:24.green/white}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Photos: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress display for a batch render
///
/// Small batches get one bar per file. Larger batches add an overall bar and
/// reuse the per-file bars for the most recently started files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    stage_bars: Vec<ProgressBar>,
    files: Vec<FileProgress>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an empty progress display
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            stage_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Create the bars for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64).with_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        self.stage_bars = (0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS))
            .map(|_| {
                let bar = ProgressBar::new(RenderStage::COUNT).with_style(STAGE_STYLE.clone());
                self.multi_progress.add(bar)
            })
            .collect();
    }

    /// Register a file before its first stage
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if index >= self.files.len() {
            self.files.resize_with(index + 1, FileProgress::default);
        }
        if let Some(file) = self.files.get_mut(index) {
            *file = FileProgress {
                name,
                status: "queued",
                completed: 0,
            };
        }
        self.redraw();
    }

    /// Report that a file entered a stage
    pub fn enter_stage(&mut self, index: usize, stage: RenderStage) {
        if let Some(file) = self.files.get_mut(index) {
            file.status = stage.label();
            file.completed = stage.completed_before();
        }
        self.redraw();
    }

    /// Mark a file as rendered
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(file) = self.files.get_mut(index) {
            file.name = format!("{} ({} ms)", file.name, elapsed.as_millis());
            file.status = "done";
            file.completed = RenderStage::COUNT;
        }
        self.redraw();
    }

    /// Remove every bar from the terminal
    pub fn finish(&self) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.finish_with_message("All photos rendered");
        }
        let _ = self.multi_progress.clear();
    }

    // Show the newest started files, blanking bars left over
    fn redraw(&self) {
        let started: Vec<&FileProgress> = self
            .files
            .iter()
            .filter(|file| file.is_started())
            .collect();
        let visible = started
            .get(started.len().saturating_sub(self.stage_bars.len())..)
            .unwrap_or(&[]);

        for (slot, bar) in self.stage_bars.iter().enumerate() {
            visible
                .get(slot)
                .map_or_else(FileProgress::default, |file| (*file).clone())
                .show_on(bar);
        }
    }
}
