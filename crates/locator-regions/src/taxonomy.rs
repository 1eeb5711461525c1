// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Region taxonomy: the curated alias lists behind every region mask.

Aliases are free-text labels, atlas abbreviations and quoted coding-system
identifiers as they appear in upstream annotations. Lists keep their
curated order and duplicates; matching treats them as a set.

Some groups are supersets of others:
- MTL contains every hippocampus alias
- Temporal contains every MTL and LTC alias
*/

use serde::{Deserialize, Serialize};

use crate::resolver::IntoAliases;

/// Version stamp of the alias tables below
pub const TAXONOMY_VERSION: &str = "2024.06.05";

pub const HIPPOCAMPUS_REGIONS: &[&str] = &[
    "CA1", "CA2", "CA3", "CA4", "Hippocampal", "Hippocampus", "Sub", "DG", "ba35", "ba35",
    "\"dg\"", "\"ca1\"", "\"sub\"", "\"ba35\"", "\"ba35\"",
];

pub const MTL_REGIONS: &[&str] = &[
    // hippocampus
    "CA1", "CA2", "CA3", "CA4", "Hippocampal", "Hippocampus", "Sub", "DG", "ba35", "ba35",
    "\"dg\"", "\"ca1\"", "\"sub\"", "\"ba35\"", "\"ba35\"",
    // extra-hippocampal
    "prc", "ec", "phc", "mtl wm", "amy", "parahippocampal", "entorhinal", "temporalpole",
    "amygdala", "ent entorhinal area", "hippocampus", "phg parahippocampal gyrus",
    "tmp temporal pole", "\"erc\"", "\"phc\"", "erc",
];

pub const LTC_REGIONS: &[&str] = &[
    "middle temporal gyrus", "stg", "mtg", "itg", "inferior temporal gyrus",
    "superior temporal gyrus", "tc", "bankssts", "middletemporal", "inferiortemporal",
    "superiortemporal", "itg inferior temporal gyrus", "mtg middle temporal gyrus",
    "stg superior temporal gyrus",
];

pub const TEMPORAL_REGIONS: &[&str] = &[
    // MTL
    "CA1", "CA2", "CA3", "CA4", "Hippocampal", "Hippocampus", "Sub", "DG", "ba35", "ba35",
    "\"dg\"", "\"ca1\"", "\"sub\"", "\"ba35\"", "\"ba35\"",
    "prc", "ec", "phc", "mtl wm", "amy", "parahippocampal", "entorhinal", "temporalpole",
    "amygdala", "ent entorhinal area", "hippocampus", "phg parahippocampal gyrus",
    "tmp temporal pole", "\"erc\"", "\"phc\"", "erc",
    // LTC
    "middle temporal gyrus", "stg", "mtg", "itg", "inferior temporal gyrus",
    "superior temporal gyrus", "tc", "bankssts", "middletemporal", "inferiortemporal",
    "superiortemporal", "itg inferior temporal gyrus", "mtg middle temporal gyrus",
    "stg superior temporal gyrus",
    // remaining temporal
    "fusiform gyrus wm", "fusiform", "transversetemporal",
];

pub const PFC_REGIONS: &[&str] = &[
    "caudal middle frontal cortex", "dlpfc", "precentral gyrus", "precentral gyrus",
    "superior frontal gyrus", "mfg middle frontal gyrus",
    "trifg triangular part of the inferior frontal gyrus", "caudalmiddlefrontal",
    "frontalpole", "lateralorbitofrontal", "medialorbitofrontal", "parsopercularis",
    "parsorbitalis", "parstriangularis", "rostralmiddlefrontal", "superiorfrontal",
];

pub const CINGULATE_REGIONS: &[&str] = &[
    "mcg", "acg", "pcg", "caudalanteriorcingulate", "isthmuscingulate", "posteriorcingulate",
    "rostralanteriorcingulate",
];

pub const PARIETAL_REGIONS: &[&str] = &[
    "supramarginal gyrus", "supramarginal gyrus", "inferiorparietal", "postcentral",
    "precuneus", "superiorparietal", "supramarginal",
];

/// Labels seen in sessions that belong to none of the named groups
///
/// "inf lat ventcerebral white matter" is two labels fused together in the
/// reference list. It is kept as-is so masks built from this list agree with
/// masks built elsewhere from the same reference.
pub const OTHER_REGIONS: &[&str] = &[
    "precentral gyrus", "none", "insula", "precentral gyrus", "nan", "misc", "insula",
    "precentral", "paracentral", "inf lat ventcerebral white matter", "lateral ventricle",
];

/// Named anatomical region group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionGroup {
    Hippocampus,
    /// Medial Temporal Lobe
    Mtl,
    /// Lateral Temporal Cortex
    Ltc,
    Temporal,
    /// Prefrontal Cortex
    Pfc,
    Cingulate,
    Parietal,
    Other,
}

impl RegionGroup {
    pub const ALL: [RegionGroup; 8] = [
        RegionGroup::Hippocampus,
        RegionGroup::Mtl,
        RegionGroup::Ltc,
        RegionGroup::Temporal,
        RegionGroup::Pfc,
        RegionGroup::Cingulate,
        RegionGroup::Parietal,
        RegionGroup::Other,
    ];

    /// Alias list for this group
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            RegionGroup::Hippocampus => HIPPOCAMPUS_REGIONS,
            RegionGroup::Mtl => MTL_REGIONS,
            RegionGroup::Ltc => LTC_REGIONS,
            RegionGroup::Temporal => TEMPORAL_REGIONS,
            RegionGroup::Pfc => PFC_REGIONS,
            RegionGroup::Cingulate => CINGULATE_REGIONS,
            RegionGroup::Parietal => PARIETAL_REGIONS,
            RegionGroup::Other => OTHER_REGIONS,
        }
    }

    /// Human-readable anatomical name
    pub fn name(self) -> &'static str {
        match self {
            RegionGroup::Hippocampus => "Hippocampus",
            RegionGroup::Mtl => "Medial Temporal Lobe",
            RegionGroup::Ltc => "Lateral Temporal Cortex",
            RegionGroup::Temporal => "Temporal Lobe",
            RegionGroup::Pfc => "Prefrontal Cortex",
            RegionGroup::Cingulate => "Cingulate Cortex",
            RegionGroup::Parietal => "Parietal Lobe",
            RegionGroup::Other => "Other",
        }
    }
}

impl std::fmt::Display for RegionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl IntoAliases for RegionGroup {
    fn into_aliases(self) -> Vec<String> {
        self.aliases().into_aliases()
    }
}

/// All alias lists, available without any session data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionTaxonomy {
    pub hippocampus_regions: &'static [&'static str],
    pub mtl_regions: &'static [&'static str],
    pub ltc_regions: &'static [&'static str],
    pub temporal_regions: &'static [&'static str],
    pub pfc_regions: &'static [&'static str],
    pub cingulate_regions: &'static [&'static str],
    pub parietal_regions: &'static [&'static str],
    pub other_regions: &'static [&'static str],
}

impl RegionTaxonomy {
    pub const STANDARD: RegionTaxonomy = RegionTaxonomy {
        hippocampus_regions: HIPPOCAMPUS_REGIONS,
        mtl_regions: MTL_REGIONS,
        ltc_regions: LTC_REGIONS,
        temporal_regions: TEMPORAL_REGIONS,
        pfc_regions: PFC_REGIONS,
        cingulate_regions: CINGULATE_REGIONS,
        parietal_regions: PARIETAL_REGIONS,
        other_regions: OTHER_REGIONS,
    };

    pub fn version(&self) -> &'static str {
        TAXONOMY_VERSION
    }

    pub fn group(&self, group: RegionGroup) -> &'static [&'static str] {
        match group {
            RegionGroup::Hippocampus => self.hippocampus_regions,
            RegionGroup::Mtl => self.mtl_regions,
            RegionGroup::Ltc => self.ltc_regions,
            RegionGroup::Temporal => self.temporal_regions,
            RegionGroup::Pfc => self.pfc_regions,
            RegionGroup::Cingulate => self.cingulate_regions,
            RegionGroup::Parietal => self.parietal_regions,
            RegionGroup::Other => self.other_regions,
        }
    }
}

impl Default for RegionTaxonomy {
    fn default() -> Self {
        Self::STANDARD
    }
}
