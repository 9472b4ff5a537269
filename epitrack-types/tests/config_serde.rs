use std::time::Duration;

use epitrack_types::{EpiError, RefreshConfig, SnapshotLayout};

#[test]
fn refresh_config_defaults_match_deployment() {
    let cfg = RefreshConfig::default();
    assert_eq!(cfg.history_ttl, Duration::from_secs(7200));
    assert_eq!(cfg.snapshot_ttl, Duration::from_secs(300));
    assert_eq!(cfg.refresh_interval, Duration::from_secs(300));
    assert_eq!(cfg.window_days, 27);
    assert!(cfg.validate().is_ok());
}

#[test]
fn refresh_config_roundtrip() {
    let cfg = RefreshConfig {
        history_ttl: Duration::from_secs(3600),
        snapshot_ttl: Duration::from_secs(60),
        refresh_interval: Duration::from_secs(30),
        window_days: 14,
    };

    let json = serde_json::to_string(&cfg).expect("serialize refresh config");
    let de: RefreshConfig = serde_json::from_str(&json).expect("deserialize refresh config");
    assert_eq!(de, cfg);
}

#[test]
fn zero_window_is_rejected() {
    let cfg = RefreshConfig {
        window_days: 0,
        ..RefreshConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(EpiError::InvalidArg(_))));
}

#[test]
fn zero_snapshot_ttl_is_rejected() {
    let cfg = RefreshConfig {
        snapshot_ttl: Duration::ZERO,
        ..RefreshConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("snapshot_ttl"));
}

#[test]
fn snapshot_layout_defaults_follow_page_columns() {
    let layout = SnapshotLayout::default();
    assert_eq!(
        (layout.country, layout.confirmed, layout.deaths, layout.recovered),
        (1, 2, 4, 6)
    );
    assert_eq!(layout.skip_rows, 1);
    assert_eq!(layout.skip_fields, 1);
}
