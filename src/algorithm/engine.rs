use tracing::{debug, info};

use crate::algorithm::overlap::{ShrinkRule, resolve_overlaps};
use crate::algorithm::placement::GreedyPlacer;
use crate::algorithm::result::{LayoutResult, PlacedCircle};
use crate::io::configuration::{JITTER_SCALE, MOTIF_DENSITY, MOTIF_SIZE_MULTIPLIER};
use crate::io::error::{Result, invalid_parameter};
use crate::math::random::RandomSource;
use crate::motif::catalog::{Motif, MotifCatalog, MotifEntry, MotifRecord, validate_motifs};
use crate::motif::palette::SizePalette;
use crate::spatial::canvas::{Canvas, Viewport};
use crate::spatial::clearance::ClearanceGrid;

/// Layout parameters controlling motif selection, sizing and overlap handling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Scale applied to radii drawn from the palette
    pub size_multiplier: f64,
    /// Canvas area over total circle area (>= 1.0, higher is sparser)
    pub density: f64,
    /// Keep at most this many motifs after shuffling
    pub fetch_limit: Option<usize>,
    /// Place this many motifs instead of all selected ones
    pub draw_count: Option<usize>,
    /// Amplitude factor of the placement jitter, 0 disables it
    pub jitter_scale: f64,
    /// How overlapping pairs split their overlap
    pub shrink_rule: ShrinkRule,
    /// Shuffle motifs before selection
    pub shuffle: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            size_multiplier: MOTIF_SIZE_MULTIPLIER,
            density: MOTIF_DENSITY,
            fetch_limit: None,
            draw_count: None,
            jitter_scale: JITTER_SCALE,
            shrink_rule: ShrinkRule::default(),
            shuffle: true,
        }
    }
}

impl LayoutConfig {
    /// Check every parameter is within its usable range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if !self.density.is_finite() || self.density < 1.0 {
            return Err(invalid_parameter(
                "density",
                &self.density,
                &"must be a finite value >= 1.0",
            ));
        }
        if !self.size_multiplier.is_finite() || self.size_multiplier <= 0.0 {
            return Err(invalid_parameter(
                "size_multiplier",
                &self.size_multiplier,
                &"must be positive and finite",
            ));
        }
        if !self.jitter_scale.is_finite() || self.jitter_scale < 0.0 {
            return Err(invalid_parameter(
                "jitter_scale",
                &self.jitter_scale,
                &"must be non-negative and finite",
            ));
        }
        if self.fetch_limit == Some(0) {
            return Err(invalid_parameter(
                "fetch_limit",
                &0,
                &"must be at least 1 when set",
            ));
        }
        if self.draw_count == Some(0) {
            return Err(invalid_parameter(
                "draw_count",
                &0,
                &"must be at least 1 when set",
            ));
        }
        Ok(())
    }
}

/// Circle packing engine producing motif map layouts
///
/// Owns the random source, so consecutive layouts from one engine differ
/// while two engines built with the same seed reproduce each other exactly.
/// No state besides the random source survives between runs.
pub struct PackingEngine {
    config: LayoutConfig,
    palette: SizePalette,
    random: RandomSource,
}

impl PackingEngine {
    /// Create an engine with the default size palette
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration does not validate
    pub fn new(config: LayoutConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            palette: SizePalette::default(),
            random: RandomSource::new(seed),
        })
    }

    /// Replace the size palette radii are drawn from
    #[must_use]
    pub fn with_palette(mut self, palette: SizePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Active configuration
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Full pipeline from source records to a layout
    ///
    /// Selects motifs, assigns radii from the palette and packs them.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport is invalid, the draw count exceeds the
    /// selection, or the layout degenerates
    pub fn generate(
        &mut self,
        records: &[MotifRecord],
        base_url: Option<&str>,
        viewport: Viewport,
    ) -> Result<LayoutResult> {
        viewport.aspect_ratio()?;

        let entries = self.select(records, base_url);
        if entries.is_empty() {
            return Ok(LayoutResult::empty());
        }

        let motifs = self.assign_radii(entries)?;
        self.pack(&motifs, viewport)
    }

    /// Filter, shuffle and truncate source records
    pub fn select(&mut self, records: &[MotifRecord], base_url: Option<&str>) -> Vec<MotifEntry> {
        let catalog = MotifCatalog::from_records(records, base_url);
        let dropped = records.len() - catalog.len();
        if dropped > 0 {
            debug!(dropped, "skipping motifs without an image reference");
        }

        catalog.select(self.config.fetch_limit, self.config.shuffle, &mut self.random)
    }

    /// Draw a palette radius for each motif to place
    ///
    /// The k-th entry receives the k-th drawn radius. With a draw count set,
    /// only that many leading entries are kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the draw count exceeds the number of entries
    pub fn assign_radii(&mut self, entries: Vec<MotifEntry>) -> Result<Vec<Motif>> {
        let count = self.config.draw_count.unwrap_or(entries.len());
        if count > entries.len() {
            return Err(invalid_parameter(
                "draw_count",
                &count,
                &format!("only {} motifs are available", entries.len()),
            ));
        }

        let radii = self
            .palette
            .draw(count, self.config.size_multiplier, &mut self.random);

        Ok(entries
            .into_iter()
            .zip(radii)
            .map(|(entry, radius)| Motif {
                id: entry.id,
                source: entry.source,
                radius,
            })
            .collect())
    }

    /// Lay out motifs whose radii are already fixed
    ///
    /// An empty motif list yields an empty layout without a canvas.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a bad viewport or malformed motifs and
    /// `DegenerateLayout` when the canvas cannot be sized
    pub fn pack(&mut self, motifs: &[Motif], viewport: Viewport) -> Result<LayoutResult> {
        viewport.aspect_ratio()?;
        if motifs.is_empty() {
            return Ok(LayoutResult::empty());
        }

        let mut run = self.begin(motifs.to_vec(), viewport)?;
        while run.step() {}
        Ok(run.finish())
    }

    /// Size the canvas and grid and hand back a run placing one circle per step
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a bad viewport, an empty or malformed motif
    /// list, and `DegenerateLayout` when the canvas or grid cannot be sized
    pub fn begin(&mut self, motifs: Vec<Motif>, viewport: Viewport) -> Result<LayoutRun<'_>> {
        let aspect_ratio = viewport.aspect_ratio()?;
        validate_motifs(&motifs)?;

        let radii: Vec<f64> = motifs.iter().map(|m| m.radius).collect();
        let canvas = Canvas::from_radii(&radii, self.config.density, aspect_ratio)?;
        let grid = ClearanceGrid::for_canvas(&canvas)?;

        debug!(
            width = canvas.width,
            height = canvas.height,
            rows = grid.rows(),
            cols = grid.cols(),
            circles = motifs.len(),
            "canvas sized"
        );

        Ok(LayoutRun {
            canvas,
            placer: GreedyPlacer::new(grid, motifs, self.config.jitter_scale),
            random: &mut self.random,
            shrink_rule: self.config.shrink_rule,
        })
    }
}

/// A layout in progress on a sized canvas
pub struct LayoutRun<'a> {
    canvas: Canvas,
    placer: GreedyPlacer,
    random: &'a mut RandomSource,
    shrink_rule: ShrinkRule,
}

impl LayoutRun<'_> {
    /// Canvas the run lays out on
    pub const fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Number of circles this run places
    pub fn total(&self) -> usize {
        self.placer.total()
    }

    /// Number of circles placed so far
    pub fn placed_count(&self) -> usize {
        self.placer.placed_count()
    }

    /// Check whether every circle has been placed
    pub fn is_complete(&self) -> bool {
        self.placer.is_complete()
    }

    /// Circles placed so far, before overlap resolution
    pub fn placed(&self) -> &[PlacedCircle] {
        self.placer.placed()
    }

    /// Place the next circle; returns false once nothing is left to place
    pub fn step(&mut self) -> bool {
        self.placer.place_next(self.random).is_some()
    }

    /// Place any remaining circles and resolve overlaps
    pub fn finish(mut self) -> LayoutResult {
        while self.step() {}

        let mut circles = self.placer.into_circles();
        let adjustments = resolve_overlaps(&mut circles, self.shrink_rule);

        let result = LayoutResult {
            canvas: Some(self.canvas),
            circles,
        };

        info!(
            circles = result.len(),
            adjustments,
            width = self.canvas.width,
            height = self.canvas.height,
            "layout complete"
        );

        result
    }
}
