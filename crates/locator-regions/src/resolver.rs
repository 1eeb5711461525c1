// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Region resolver: resolve once, then answer mask queries.

```rust
use locator_regions::{PairTable, RegionResolver, StaticSessionReader};

let pairs = PairTable::new(2)
    .with_column("stein.region", [Some("CA1"), None])?
    .with_column("das.region", [None, Some("insula")])?;
let resolver = RegionResolver::from_reader(&StaticSessionReader::new(pairs))?;

assert_eq!(resolver.all(), vec![Some("CA1".to_string()), Some("insula".to_string())]);
assert_eq!(resolver.hippocampus(), vec![true, false]);
# Ok::<(), Box<dyn std::error::Error>>(())
```

All masks are index-aligned with the session's pair table. Matching is
exact after lowercasing and trimming both sides; "Left "/"Right " prefixes
select a hemisphere.
*/

use std::collections::HashSet;
use tracing::info;

use crate::reader::SessionReader;
use crate::resolution::{LocationSource, ResolvedLocations};
use crate::taxonomy::{RegionGroup, RegionTaxonomy};
use crate::types::{LocatorError, LocatorResult};

/// A single alias or a collection of aliases
pub trait IntoAliases {
    fn into_aliases(self) -> Vec<String>;
}

impl IntoAliases for &str {
    fn into_aliases(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoAliases for String {
    fn into_aliases(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoAliases for &String {
    fn into_aliases(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<T: AsRef<str>> IntoAliases for &[T] {
    fn into_aliases(self) -> Vec<String> {
        self.iter().map(|alias| alias.as_ref().to_string()).collect()
    }
}

impl<T: AsRef<str>, const N: usize> IntoAliases for [T; N] {
    fn into_aliases(self) -> Vec<String> {
        self.iter().map(|alias| alias.as_ref().to_string()).collect()
    }
}

impl<T: AsRef<str>, const N: usize> IntoAliases for &[T; N] {
    fn into_aliases(self) -> Vec<String> {
        self.as_slice().into_aliases()
    }
}

impl<T: AsRef<str>> IntoAliases for Vec<T> {
    fn into_aliases(self) -> Vec<String> {
        self.as_slice().into_aliases()
    }
}

impl<T: AsRef<str>> IntoAliases for &Vec<T> {
    fn into_aliases(self) -> Vec<String> {
        self.as_slice().into_aliases()
    }
}

/// Hemisphere selector for region masks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Unqualified, "Left " or "Right " labels
    Either,
    Left,
    Right,
}

impl Side {
    /// Label forms this side accepts for the given aliases
    pub fn expand(self, aliases: Vec<String>) -> Vec<String> {
        let prefixed = |prefix: &str| -> Vec<String> {
            aliases.iter().map(|alias| format!("{}{}", prefix, alias)).collect()
        };
        match self {
            Side::Left => prefixed("Left "),
            Side::Right => prefixed("Right "),
            Side::Either => {
                let mut all_sides = aliases.clone();
                all_sides.extend(prefixed("Left "));
                all_sides.extend(prefixed("Right "));
                all_sides
            }
        }
    }
}

fn normalize(label: &str) -> String {
    label.to_lowercase().trim().to_string()
}

/// Best-available labels for one session plus region-mask queries
#[derive(Debug, Clone, PartialEq)]
pub struct RegionResolver {
    taxonomy: RegionTaxonomy,
    locations: Vec<Option<String>>,
    sources: Vec<Option<LocationSource>>,
}

impl RegionResolver {
    /// Load the session's records and resolve every pair
    ///
    /// # Errors
    ///
    /// `LocatorError::PairsUnavailable` if the pair table cannot be loaded.
    /// Localization problems are absorbed.
    pub fn from_reader<R: SessionReader + ?Sized>(reader: &R) -> LocatorResult<Self> {
        let pairs = reader.load_pairs().map_err(LocatorError::PairsUnavailable)?;
        let resolved = ResolvedLocations::resolve(&pairs, reader.load_localization());

        info!(
            target: "locator_regions",
            "Resolved locations for {} of {} contact pairs",
            resolved.resolved_count(),
            resolved.len()
        );

        let (locations, sources) = resolved.into_parts();
        Ok(Self {
            taxonomy: RegionTaxonomy::STANDARD,
            locations,
            sources,
        })
    }

    /// Resolver without session data
    ///
    /// Only the taxonomy is meaningful; there are no pairs, so every query
    /// returns an empty sequence.
    pub fn taxonomy_only() -> Self {
        Self {
            taxonomy: RegionTaxonomy::STANDARD,
            locations: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn taxonomy(&self) -> &RegionTaxonomy {
        &self.taxonomy
    }

    /// Number of contact pairs
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Best-available label for every pair, in pair order
    ///
    /// Priority: `stein.region`, `das.region`, whole-brain atlas when both
    /// contacts agree, `mni.region`, `ind.region`.
    pub fn all(&self) -> Vec<Option<String>> {
        self.locations.clone()
    }

    /// Borrowing form of [`all`](Self::all)
    pub fn locations(&self) -> &[Option<String>] {
        &self.locations
    }

    /// Which source produced each label
    pub fn sources(&self) -> &[Option<LocationSource>] {
        &self.sources
    }

    /// Pairs whose label exactly matches one of `regions`, ignoring case and
    /// outer whitespace
    pub fn matching<A: IntoAliases>(&self, regions: A) -> Vec<bool> {
        let valid: HashSet<String> = regions
            .into_aliases()
            .iter()
            .map(|alias| normalize(alias))
            .collect();

        self.locations
            .iter()
            .map(|location| match location {
                Some(label) => valid.contains(&normalize(label)),
                None => false,
            })
            .collect()
    }

    /// Pairs in `regions` on the given side
    pub fn side_regions<A: IntoAliases>(&self, side: Side, regions: A) -> Vec<bool> {
        self.matching(side.expand(regions.into_aliases()))
    }

    /// Pairs in `regions` on either side or with no side given
    ///
    /// `None` selects every pair.
    pub fn regions<A: IntoAliases>(&self, regions: Option<A>) -> Vec<bool> {
        match regions {
            Some(regions) => self.side_regions(Side::Either, regions),
            None => vec![true; self.locations.len()],
        }
    }

    /// Pairs labelled `"Left " + alias`
    pub fn left_regions<A: IntoAliases>(&self, regions: A) -> Vec<bool> {
        self.side_regions(Side::Left, regions)
    }

    /// Pairs labelled `"Right " + alias`
    pub fn right_regions<A: IntoAliases>(&self, regions: A) -> Vec<bool> {
        self.side_regions(Side::Right, regions)
    }

    /// Mask for a named taxonomy group
    pub fn group(&self, group: RegionGroup, side: Side) -> Vec<bool> {
        self.side_regions(side, self.taxonomy.group(group))
    }

    pub fn hippocampus(&self) -> Vec<bool> {
        self.group(RegionGroup::Hippocampus, Side::Either)
    }

    pub fn left_hippocampus(&self) -> Vec<bool> {
        self.group(RegionGroup::Hippocampus, Side::Left)
    }

    pub fn right_hippocampus(&self) -> Vec<bool> {
        self.group(RegionGroup::Hippocampus, Side::Right)
    }

    /// Medial Temporal Lobe
    pub fn mtl(&self) -> Vec<bool> {
        self.group(RegionGroup::Mtl, Side::Either)
    }

    pub fn left_mtl(&self) -> Vec<bool> {
        self.group(RegionGroup::Mtl, Side::Left)
    }

    pub fn right_mtl(&self) -> Vec<bool> {
        self.group(RegionGroup::Mtl, Side::Right)
    }

    /// Lateral Temporal Cortex
    pub fn ltc(&self) -> Vec<bool> {
        self.group(RegionGroup::Ltc, Side::Either)
    }

    pub fn left_ltc(&self) -> Vec<bool> {
        self.group(RegionGroup::Ltc, Side::Left)
    }

    pub fn right_ltc(&self) -> Vec<bool> {
        self.group(RegionGroup::Ltc, Side::Right)
    }

    pub fn temporal(&self) -> Vec<bool> {
        self.group(RegionGroup::Temporal, Side::Either)
    }

    pub fn left_temporal(&self) -> Vec<bool> {
        self.group(RegionGroup::Temporal, Side::Left)
    }

    pub fn right_temporal(&self) -> Vec<bool> {
        self.group(RegionGroup::Temporal, Side::Right)
    }

    /// Prefrontal Cortex
    pub fn pfc(&self) -> Vec<bool> {
        self.group(RegionGroup::Pfc, Side::Either)
    }

    pub fn left_pfc(&self) -> Vec<bool> {
        self.group(RegionGroup::Pfc, Side::Left)
    }

    pub fn right_pfc(&self) -> Vec<bool> {
        self.group(RegionGroup::Pfc, Side::Right)
    }

    pub fn cingulate(&self) -> Vec<bool> {
        self.group(RegionGroup::Cingulate, Side::Either)
    }

    pub fn left_cingulate(&self) -> Vec<bool> {
        self.group(RegionGroup::Cingulate, Side::Left)
    }

    pub fn right_cingulate(&self) -> Vec<bool> {
        self.group(RegionGroup::Cingulate, Side::Right)
    }

    pub fn parietal(&self) -> Vec<bool> {
        self.group(RegionGroup::Parietal, Side::Either)
    }

    pub fn left_parietal(&self) -> Vec<bool> {
        self.group(RegionGroup::Parietal, Side::Left)
    }

    pub fn right_parietal(&self) -> Vec<bool> {
        self.group(RegionGroup::Parietal, Side::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::PairTable;
    use crate::reader::StaticSessionReader;
    use crate::types::{ReaderError, ReaderResult};
    use crate::records::Localization;

    fn resolver_for(labels: &[Option<&str>]) -> RegionResolver {
        let pairs = PairTable::new(labels.len())
            .with_column("ind.region", labels.iter().copied())
            .unwrap();
        RegionResolver::from_reader(&StaticSessionReader::new(pairs)).unwrap()
    }

    struct BrokenReader;

    impl SessionReader for BrokenReader {
        fn load_pairs(&self) -> ReaderResult<PairTable> {
            Err(ReaderError::NotFound("pairs.json".to_string()))
        }

        fn load_localization(&self) -> ReaderResult<Localization> {
            Ok(Localization::default())
        }
    }

    #[test]
    fn test_pairs_failure_is_fatal() {
        let err = RegionResolver::from_reader(&BrokenReader).unwrap_err();
        assert!(matches!(
            err,
            LocatorError::PairsUnavailable(ReaderError::NotFound(_))
        ));
    }

    #[test]
    fn test_side_expand_order() {
        let expanded = Side::Either.expand(vec!["CA1".to_string(), "DG".to_string()]);
        assert_eq!(
            expanded,
            vec!["CA1", "DG", "Left CA1", "Left DG", "Right CA1", "Right DG"]
        );
        assert_eq!(Side::Right.expand(vec!["CA1".to_string()]), vec!["Right CA1"]);
    }

    #[test]
    fn test_matching_is_exact_after_normalization() {
        let resolver = resolver_for(&[
            Some("CA1"),
            Some("  ca1 "),
            Some("CA1 anterior"),
            Some("Left CA1"),
            None,
        ]);

        assert_eq!(
            resolver.matching("CA1"),
            vec![true, true, false, false, false]
        );
        assert_eq!(
            resolver.matching(["left ca1 ", "ca3"]),
            vec![false, false, false, true, false]
        );
    }

    #[test]
    fn test_regions_either_side() {
        let resolver = resolver_for(&[
            Some("Hippocampus"),
            Some("left hippocampus"),
            Some("RIGHT HIPPOCAMPUS"),
            Some("Hippocampus Left"),
            Some("insula"),
        ]);

        assert_eq!(
            resolver.regions(Some(["Hippocampus"])),
            vec![true, true, true, false, false]
        );
        assert_eq!(
            resolver.left_regions("Hippocampus"),
            vec![false, true, false, false, false]
        );
        assert_eq!(
            resolver.right_regions(&vec!["Hippocampus".to_string()]),
            vec![false, false, true, false, false]
        );
    }

    #[test]
    fn test_regions_without_filter_selects_all() {
        let resolver = resolver_for(&[Some("CA1"), None, Some("nan")]);
        assert_eq!(resolver.regions(None::<&str>), vec![true, true, true]);
    }

    #[test]
    fn test_named_groups() {
        let resolver = resolver_for(&[
            Some("Left CA1"),
            Some("Right amygdala"),
            Some("stg"),
            Some("Left fusiform"),
            Some("Right dlpfc"),
            Some("acg"),
            Some("Left precuneus"),
            Some("insula"),
        ]);

        assert_eq!(resolver.hippocampus(), vec![true, false, false, false, false, false, false, false]);
        assert_eq!(resolver.left_hippocampus(), vec![true, false, false, false, false, false, false, false]);
        assert_eq!(resolver.right_hippocampus(), vec![false; 8]);
        assert_eq!(resolver.mtl(), vec![true, true, false, false, false, false, false, false]);
        assert_eq!(resolver.right_mtl(), vec![false, true, false, false, false, false, false, false]);
        assert_eq!(resolver.ltc(), vec![false, false, true, false, false, false, false, false]);
        assert_eq!(resolver.left_ltc(), vec![false; 8]);
        assert_eq!(resolver.temporal(), vec![true, true, true, true, false, false, false, false]);
        assert_eq!(resolver.left_temporal(), vec![true, false, false, true, false, false, false, false]);
        assert_eq!(resolver.pfc(), vec![false, false, false, false, true, false, false, false]);
        assert_eq!(resolver.right_pfc(), vec![false, false, false, false, true, false, false, false]);
        assert_eq!(resolver.cingulate(), vec![false, false, false, false, false, true, false, false]);
        assert_eq!(resolver.left_cingulate(), vec![false; 8]);
        assert_eq!(resolver.parietal(), vec![false, false, false, false, false, false, true, false]);
        assert_eq!(resolver.left_parietal(), vec![false, false, false, false, false, false, true, false]);
    }

    #[test]
    fn test_quoted_aliases_match_literally() {
        let resolver = resolver_for(&[Some("\"DG\""), Some("dg")]);
        assert_eq!(resolver.hippocampus(), vec![true, true]);
        assert_eq!(resolver.matching("dg"), vec![false, true]);
    }

    #[test]
    fn test_group_accepts_region_group() {
        let resolver = resolver_for(&[Some("Right pcg"), Some("mcg")]);
        assert_eq!(resolver.right_regions(RegionGroup::Cingulate), vec![true, false]);
        assert_eq!(
            resolver.group(RegionGroup::Cingulate, Side::Either),
            resolver.cingulate()
        );
    }

    #[test]
    fn test_queries_are_repeatable() {
        let resolver = resolver_for(&[Some("CA3"), Some("Left stg"), None]);
        assert_eq!(resolver.all(), resolver.all());
        assert_eq!(resolver.temporal(), resolver.temporal());
        assert_eq!(resolver.matching("CA3"), resolver.matching("CA3"));
    }

    #[test]
    fn test_taxonomy_only() {
        let resolver = RegionResolver::taxonomy_only();
        assert!(resolver.is_empty());
        assert!(resolver.all().is_empty());
        assert!(resolver.hippocampus().is_empty());
        assert!(resolver.regions(None::<&str>).is_empty());
        assert_eq!(resolver.taxonomy().hippocampus_regions.len(), 15);
    }
}
