//! Motif records supplied by the content source and their selection for layout

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::io::error::{Result, invalid_input};
use crate::math::random::RandomSource;

/// Motif metadata as delivered by the content source
///
/// Image dimensions are carried along but never influence the layout;
/// circle sizes come from the size palette alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotifRecord {
    /// Motif identifier
    pub id: i64,
    /// Image location, absent for motifs without an uploaded image
    #[serde(default)]
    pub image_url: Option<String>,
    /// Source image width in pixels
    #[serde(default)]
    pub width: u32,
    /// Source image height in pixels
    #[serde(default)]
    pub height: u32,
}

/// A motif selected for layout: identifier and opaque source reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifEntry {
    /// Motif identifier
    pub id: i64,
    /// Opaque reference handed through to the render step
    pub source: String,
}

/// A motif with its target radius
#[derive(Debug, Clone, PartialEq)]
pub struct Motif {
    /// Motif identifier
    pub id: i64,
    /// Opaque reference handed through to the render step
    pub source: String,
    /// Target radius before overlap resolution
    pub radius: f64,
}

impl Motif {
    /// Create a motif with a fixed radius
    pub fn new(id: i64, source: impl Into<String>, radius: f64) -> Self {
        Self {
            id,
            source: source.into(),
            radius,
        }
    }
}

/// Motifs eligible for layout, in selection order
#[derive(Debug, Clone, Default)]
pub struct MotifCatalog {
    entries: Vec<MotifEntry>,
}

impl MotifCatalog {
    /// Keep only records that carry an image reference
    ///
    /// Relative references are resolved against `base_url` when one is given.
    pub fn from_records(records: &[MotifRecord], base_url: Option<&str>) -> Self {
        let entries = records
            .iter()
            .filter_map(|record| {
                let url = record.image_url.as_deref().filter(|u| !u.is_empty())?;
                Some(MotifEntry {
                    id: record.id,
                    source: resolve_url(url, base_url),
                })
            })
            .collect();

        Self { entries }
    }

    /// Number of eligible motifs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no motif is eligible
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Eligible motifs in current order
    pub fn entries(&self) -> &[MotifEntry] {
        &self.entries
    }

    /// Pick the motifs to lay out
    ///
    /// The catalog is shuffled when requested, then truncated to `limit` if
    /// the limit does not exceed the available count.
    pub fn select(
        mut self,
        limit: Option<usize>,
        shuffle: bool,
        random: &mut RandomSource,
    ) -> Vec<MotifEntry> {
        if shuffle {
            random.shuffle(&mut self.entries);
        }
        if let Some(limit) = limit.filter(|&l| l > 0 && l <= self.entries.len()) {
            self.entries.truncate(limit);
        }
        self.entries
    }
}

/// Reject motif lists the packing engine cannot lay out
///
/// Radii must be finite and non-negative and identifiers unique.
///
/// # Errors
///
/// Returns `InvalidInput` naming the first offending motif
pub fn validate_motifs(motifs: &[Motif]) -> Result<()> {
    let mut seen = HashSet::with_capacity(motifs.len());

    for motif in motifs {
        if !motif.radius.is_finite() || motif.radius < 0.0 {
            return Err(invalid_input(&format!(
                "motif {} has invalid radius {}",
                motif.id, motif.radius
            )));
        }
        if !seen.insert(motif.id) {
            return Err(invalid_input(&format!("duplicate motif id {}", motif.id)));
        }
    }

    Ok(())
}

fn resolve_url(url: &str, base_url: Option<&str>) -> String {
    match base_url {
        Some(base) if !url.contains("://") => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            url.trim_start_matches('/')
        ),
        _ => url.to_string(),
    }
}
