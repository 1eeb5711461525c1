// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end: configuration file -> session files -> region masks

use std::fs;

use locator::prelude::*;
use serde_json::json;
use tempfile::tempdir;

#[test]
fn test_configured_session_resolves() {
    let root = tempdir().unwrap();
    let data_dir = root.path().join("sessions");
    let session_dir = data_dir.join("R1001P_0");
    fs::create_dir_all(&session_dir).unwrap();

    let pairs = json!([
        {"label": "LA1-LA2", "stein.region": "CA1", "das.region": "x"},
        {"label": "LA2-LA3", "das.region": "insula"},
        {"label": "RB1-RB2", "stein.region": "unknown", "mni.region": "Right superiortemporal"},
        {"label": "RC1-RC2"}
    ]);
    let localization = json!({
        "contacts": {
            "atlases.whole_brain": {"RC1": "Right precuneus", "RC2": "Right precuneus"}
        }
    });
    fs::write(session_dir.join("bipolar.json"), pairs.to_string()).unwrap();
    fs::write(session_dir.join("loc.json"), localization.to_string()).unwrap();

    let config_path = root.path().join("locator_configuration.toml");
    fs::write(
        &config_path,
        format!(
            "[reader]\ndata_dir = {:?}\npairs_file = \"bipolar.json\"\nlocalization_file = \"loc.json\"\n",
            data_dir.display().to_string()
        ),
    )
    .unwrap();

    let config = load_config(Some(&config_path)).unwrap();
    let resolver = locator::open_session(&config, "R1001P_0").unwrap();

    assert_eq!(
        resolver.all(),
        vec![
            Some("CA1".to_string()),
            Some("insula".to_string()),
            Some("Right superiortemporal".to_string()),
            Some("Right precuneus".to_string()),
        ]
    );
    assert_eq!(
        resolver.sources(),
        &[
            Some(LocationSource::SteinRegion),
            Some(LocationSource::DasRegion),
            Some(LocationSource::MniRegion),
            Some(LocationSource::WholeBrain),
        ]
    );
    assert_eq!(resolver.hippocampus(), vec![true, false, false, false]);
    assert_eq!(resolver.right_ltc(), vec![false, false, true, false]);
    assert_eq!(resolver.right_parietal(), vec![false, false, false, true]);
    assert_eq!(
        resolver.group(RegionGroup::Other, Side::Either),
        vec![false, true, false, false]
    );
    assert_eq!(resolver.group(RegionGroup::Parietal, Side::Left), vec![false; 4]);
}

#[test]
fn test_static_reader_through_prelude() {
    let pairs = locator::regions::PairTable::from_json_value(&json!({
        "label": ["A1-A2"],
        "ind.region": ["Left acg"]
    }))
    .unwrap();

    let resolver = RegionResolver::from_reader(&StaticSessionReader::new(pairs)).unwrap();
    assert_eq!(resolver.left_cingulate(), vec![true]);
    assert_eq!(resolver.regions(Some(["acg"])), vec![true]);
}
