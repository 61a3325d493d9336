#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use demlens_parser::{config, Verbosity};

#[test]
fn deny_unknown_fields() {
    let bad = r#"
version: 1
verbosity: 3
max_frame: 10 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.verbosity, Verbosity::INFO);
    assert_eq!(cfg.max_frames, None);
    assert!(!cfg.collect_events);
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
verbosity: 5
max_frames: 250
collect_events: true
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.verbosity, Verbosity::WORTHLESS);
    assert_eq!(cfg.max_frames, Some(250));
    assert!(cfg.collect_events);
}

#[test]
fn verbosity_out_of_range() {
    for bad in ["version: 1\nverbosity: 0\n", "version: 1\nverbosity: 6\n"] {
        let err = config::load_from_str(bad).expect_err("must fail");
        assert_eq!(err.code().as_str(), "CONFIG");
    }
}

#[test]
fn zero_frame_cap_rejected() {
    let err = config::load_from_str("version: 1\nmax_frames: 0\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

#[test]
fn verbosity_maps_to_tracing_levels() {
    use tracing::level_filters::LevelFilter;

    let levels = [
        (Verbosity::ERROR, LevelFilter::ERROR),
        (Verbosity::IMPORTANT, LevelFilter::WARN),
        (Verbosity::INFO, LevelFilter::INFO),
        (Verbosity::DEBUG, LevelFilter::DEBUG),
        (Verbosity::WORTHLESS, LevelFilter::TRACE),
    ];
    for (v, want) in levels {
        assert_eq!(v.level_filter(), want, "verbosity={v:?}");
    }
    assert!(Verbosity::DEBUG.at_least(Verbosity::INFO));
    assert!(!Verbosity::IMPORTANT.at_least(Verbosity::INFO));
}
