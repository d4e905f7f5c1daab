//! Command-line interface for batch layout of motif JSON files

use crate::algorithm::engine::{LayoutConfig, PackingEngine};
use crate::algorithm::overlap::ShrinkRule;
use crate::algorithm::result::LayoutResult;
use crate::io::configuration::{
    DEFAULT_PREVIEW_SCALE, DEFAULT_SEED, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
    JITTER_SCALE, MOTIF_DENSITY, MOTIF_SIZE_MULTIPLIER, OUTPUT_SUFFIX, PREVIEW_SUFFIX,
};
use crate::io::error::{Result, WithPath, invalid_input};
use crate::io::image::export_layout_preview;
use crate::io::json::{read_motif_records, write_layout};
use crate::io::progress::ProgressManager;
use crate::spatial::canvas::Viewport;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "motifmap")]
#[command(
    author,
    version,
    about = "Lay out motif images as densely packed circles"
)]
/// Command-line arguments for the layout tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Motif JSON file or directory of motif JSON files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Viewport width, only its ratio to the height matters
    #[arg(short = 'W', long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub viewport_width: f64,

    /// Viewport height
    #[arg(short = 'H', long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub viewport_height: f64,

    /// Canvas area over total circle area (>= 1.0, the smaller, the denser)
    #[arg(short, long, default_value_t = MOTIF_DENSITY)]
    pub density: f64,

    /// Scale applied to every palette radius
    #[arg(short, long, default_value_t = MOTIF_SIZE_MULTIPLIER)]
    pub multiplier: f64,

    /// Keep at most this many motifs after shuffling
    #[arg(short, long)]
    pub fetch_limit: Option<usize>,

    /// Place this many motifs instead of all selected ones
    #[arg(short = 'n', long)]
    pub draw_count: Option<usize>,

    /// Split overlaps by each circle's share of the original radius sum
    #[arg(long)]
    pub proportional_shrink: bool,

    /// Keep motifs in file order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,

    /// Base URL prepended to relative image references
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Also write a PNG preview of each layout
    #[arg(short, long)]
    pub preview: bool,

    /// Preview pixels per canvas unit
    #[arg(long, default_value_t = DEFAULT_PREVIEW_SCALE)]
    pub preview_scale: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Viewport fixing the canvas aspect ratio
    pub const fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Layout configuration assembled from the flags
    pub const fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            size_multiplier: self.multiplier,
            density: self.density,
            fetch_limit: self.fetch_limit,
            draw_count: self.draw_count,
            jitter_scale: JITTER_SCALE,
            shrink_rule: if self.proportional_shrink {
                ShrinkRule::Proportional
            } else {
                ShrinkRule::Sequential
            },
            shuffle: !self.no_shuffle,
        }
    }
}

/// Orchestrates batch layout of motif files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, configuration or any layout fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.layout_config().validate()?;
        self.cli.viewport().aspect_ratio()?;

        let files = self.collect_files()?;

        if files.is_empty() {
            info!("nothing to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_motif_file(target) {
                Ok(self
                    .should_process_file(target)
                    .then(|| target.clone())
                    .into_iter()
                    .collect())
            } else {
                Err(invalid_input(&"Target file must be a motif JSON file"))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if is_motif_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_input(&"Target must be a JSON file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            info!(path = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        let records = read_motif_records(input_path)?;
        let mut engine = PackingEngine::new(self.cli.layout_config(), self.cli.seed)?;

        let entries = engine.select(&records, self.cli.base_url.as_deref());
        let layout = if entries.is_empty() {
            warn!(path = %input_path.display(), "no motif with an image reference, writing empty layout");
            LayoutResult::empty()
        } else {
            let motifs = engine.assign_radii(entries)?;
            let mut run = engine.begin(motifs, self.cli.viewport())?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(index, input_path, run.total());
            }

            while run.step() {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.update_placement(index, run.placed_count());
                }
            }

            run.finish()
        };

        debug!(
            residual_overlaps = layout.residual_overlaps(),
            "overlap resolution finished"
        );

        write_layout(&layout, &output_path)?;

        if self.cli.preview && layout.canvas.is_some() {
            let preview_path = Self::get_preview_path(input_path);
            export_layout_preview(&layout, self.cli.preview_scale, &preview_path)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        info!(
            path = %output_path.display(),
            circles = layout.len(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "layout written"
        );

        Ok(())
    }

    /// Layout output path for an input file, `<stem>_layout.json`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        sibling_path(input_path, &format!("{OUTPUT_SUFFIX}.json"))
    }

    /// Preview output path for an input file, `<stem>_preview.png`
    pub fn get_preview_path(input_path: &Path) -> PathBuf {
        sibling_path(input_path, &format!("{PREVIEW_SUFFIX}.png"))
    }
}

// Layout outputs share the extension, so they are excluded from inputs
fn is_motif_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("json")
        && !path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}

fn sibling_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
