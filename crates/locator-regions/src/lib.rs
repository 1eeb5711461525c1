// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Contact Region Resolution

Maps intracranial contact pairs to anatomical region labels and region
membership masks.

- **Resolution**: one best-available label per pair, chosen from several
  annotation sources in a fixed priority order
- **Taxonomy**: curated alias lists for hippocampus, MTL, LTC, temporal,
  prefrontal, cingulate and parietal regions
- **Masks**: boolean per-pair selections by alias list, group and side

## Usage

```rust,no_run
use locator_regions::{JsonSessionReader, RegionResolver};

let resolver = RegionResolver::from_reader(&JsonSessionReader::new("/data/R1001P_0"))?;
let left_mtl = resolver.left_mtl();
let labels = resolver.all();
# Ok::<(), locator_regions::LocatorError>(())
```

Alias lists are available without any session:

```rust
use locator_regions::RegionTaxonomy;

assert!(RegionTaxonomy::STANDARD.mtl_regions.contains(&"amygdala"));
```
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod reader;
pub mod records;
pub mod resolution;
pub mod resolver;
pub mod taxonomy;
pub mod types;

pub use reader::{JsonSessionReader, SessionReader, StaticSessionReader};
pub use records::{CellValue, Localization, PairTable, WholeBrainAtlas, LABEL_COLUMN, WHOLE_BRAIN_ATLAS};
pub use resolution::{LocationSource, ResolvedLocations};
pub use resolver::{IntoAliases, RegionResolver, Side};
pub use taxonomy::{
    RegionGroup, RegionTaxonomy, CINGULATE_REGIONS, HIPPOCAMPUS_REGIONS, LTC_REGIONS, MTL_REGIONS,
    OTHER_REGIONS, PARIETAL_REGIONS, PFC_REGIONS, TAXONOMY_VERSION, TEMPORAL_REGIONS,
};
pub use types::{ColocalizationSkip, LocatorError, LocatorResult, ReaderError, ReaderResult};
