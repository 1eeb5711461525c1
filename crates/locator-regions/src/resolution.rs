// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Best-available label resolution.

Every pair starts unresolved. Sources are tried in priority order and each
one only fills pairs that are still unresolved, so the first source with a
usable value wins:

1. `stein.region` column
2. `das.region` column
3. whole-brain co-localization (both contacts of the pair carry the same atlas region)
4. `mni.region` column
5. `ind.region` column

A missing column simply contributes nothing. Co-localization never fails
outward; when its inputs are unusable the reason is logged and resolution
continues with the next source.
*/

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::records::{CellValue, Localization, PairTable, WholeBrainAtlas, LABEL_COLUMN};
use crate::types::{ColocalizationSkip, ReaderResult};

/// Values that mean "no information", compared case-sensitively after trimming
pub(crate) const NO_INFORMATION: &[&str] = &["unknown", "misc", "None", "nan", ""];

/// Annotation source a resolved location came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    SteinRegion,
    DasRegion,
    WholeBrain,
    MniRegion,
    IndRegion,
}

impl LocationSource {
    /// Sources in the order they are consulted
    pub const PRIORITY: [LocationSource; 5] = [
        LocationSource::SteinRegion,
        LocationSource::DasRegion,
        LocationSource::WholeBrain,
        LocationSource::MniRegion,
        LocationSource::IndRegion,
    ];

    /// Pair-table column for column-backed sources
    pub fn column(self) -> Option<&'static str> {
        match self {
            LocationSource::SteinRegion => Some("stein.region"),
            LocationSource::DasRegion => Some("das.region"),
            LocationSource::WholeBrain => None,
            LocationSource::MniRegion => Some("mni.region"),
            LocationSource::IndRegion => Some("ind.region"),
        }
    }
}

impl std::fmt::Display for LocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.column() {
            Some(column) => write!(f, "{}", column),
            None => write!(f, "whole-brain co-localization"),
        }
    }
}

/// Validity filter for a candidate region value
///
/// Returns the trimmed text when the cell is text and not a
/// [`NO_INFORMATION`] marker.
pub(crate) fn accept_candidate(cell: &CellValue) -> Option<String> {
    let text = cell.as_text()?.trim();
    if NO_INFORMATION.contains(&text) {
        return None;
    }
    Some(text.to_string())
}

/// Per-pair result of resolution, index-aligned with the pair table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedLocations {
    locations: Vec<Option<String>>,
    sources: Vec<Option<LocationSource>>,
}

impl ResolvedLocations {
    fn unresolved(pair_count: usize) -> Self {
        Self {
            locations: vec![None; pair_count],
            sources: vec![None; pair_count],
        }
    }

    /// Run every source against `pairs`
    ///
    /// `localization` is the outcome of loading the session's localization
    /// document; an error there only disables co-localization.
    pub fn resolve(pairs: &PairTable, localization: ReaderResult<Localization>) -> Self {
        let mut resolved = Self::unresolved(pairs.len());
        let mut localization = Some(localization);

        for source in LocationSource::PRIORITY {
            let filled = match source.column() {
                Some(column) => resolved.fill_from_column(pairs, column, source),
                None => match localization.take() {
                    Some(loaded) => resolved.fill_from_localization(pairs, loaded),
                    None => 0,
                },
            };
            debug!(
                target: "locator_regions",
                "{} resolved {} pair(s), {} still unresolved",
                source,
                filled,
                resolved.unresolved_count()
            );
        }

        resolved
    }

    pub fn locations(&self) -> &[Option<String>] {
        &self.locations
    }

    pub fn sources(&self) -> &[Option<LocationSource>] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn resolved_count(&self) -> usize {
        self.locations.iter().filter(|l| l.is_some()).count()
    }

    pub fn unresolved_count(&self) -> usize {
        self.len() - self.resolved_count()
    }

    pub fn into_parts(self) -> (Vec<Option<String>>, Vec<Option<LocationSource>>) {
        (self.locations, self.sources)
    }

    fn offer(&mut self, row: usize, cell: &CellValue, source: LocationSource) -> bool {
        if self.locations[row].is_some() {
            return false;
        }
        match accept_candidate(cell) {
            Some(region) => {
                self.locations[row] = Some(region);
                self.sources[row] = Some(source);
                true
            }
            None => false,
        }
    }

    fn fill_from_column(&mut self, pairs: &PairTable, column: &str, source: LocationSource) -> usize {
        let Some(cells) = pairs.column(column) else {
            return 0;
        };
        cells
            .iter()
            .enumerate()
            .filter(|(row, cell)| self.offer(*row, cell, source))
            .count()
    }

    fn fill_from_localization(&mut self, pairs: &PairTable, localization: ReaderResult<Localization>) -> usize {
        localization
            .map_err(ColocalizationSkip::LocalizationUnavailable)
            .and_then(|loc| loc.whole_brain())
            .and_then(|atlas| self.fill_from_whole_brain(pairs, &atlas))
            .unwrap_or_else(|skip| {
                debug!(target: "locator_regions", "Co-localization skipped: {}", skip);
                0
            })
    }

    /// Adopt the atlas region when both contacts of a pair share it
    ///
    /// An unresolved pair whose label is not text or has no `-` aborts the
    /// whole step; nothing found before it is kept.
    fn fill_from_whole_brain(&mut self, pairs: &PairTable, atlas: &WholeBrainAtlas) -> Result<usize, ColocalizationSkip> {
        let labels = pairs
            .column(LABEL_COLUMN)
            .ok_or(ColocalizationSkip::MissingLabelColumn(LABEL_COLUMN))?;

        let mut shared = Vec::new();
        for (row, label) in labels.iter().enumerate() {
            if self.locations[row].is_some() {
                continue;
            }
            let (first, second) = label
                .as_text()
                .and_then(split_pair_label)
                .ok_or(ColocalizationSkip::MalformedLabel(row))?;
            if let Some(region) = atlas.shared_region(first, second) {
                shared.push((row, region));
            }
        }

        Ok(shared
            .into_iter()
            .filter(|(row, region)| self.offer(*row, region, LocationSource::WholeBrain))
            .count())
    }
}

/// Split `"A1-A2"` into its two contact names
///
/// Only the first two `-`-separated parts are used; a label without `-`
/// yields `None`.
pub(crate) fn split_pair_label(label: &str) -> Option<(&str, &str)> {
    let mut parts = label.split('-');
    let first = parts.next()?;
    let second = parts.next()?;
    Some((first, second))
}
