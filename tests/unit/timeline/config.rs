use super::*;
use crate::foundation::core::Progress;

#[test]
fn default_table_validates() {
    TimelineConfig::default().validate().unwrap();
}

#[test]
fn validate_names_the_offending_window() {
    let mut cfg = TimelineConfig::default();
    cfg.fit.end = cfg.fit.start;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("window 'fit'"));
}

#[test]
fn json_round_trip_preserves_table() {
    let cfg = TimelineConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let back = TimelineConfig::from_json_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(
        TimelineConfig::from_json_str("{ not json"),
        Err(crate::foundation::error::StageError::Serde(_))
    ));
}

#[test]
fn from_json_rejects_invalid_windows() {
    let mut cfg = TimelineConfig::default();
    cfg.exit.start = 1.0;
    cfg.exit.end = 0.5;
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(TimelineConfig::from_json_str(&json).is_err());
}

#[test]
fn interval_lerp_spans_endpoints() {
    let i = Interval::new(0.55, 0.42);
    assert_eq!(i.lerp(0.0), 0.55);
    assert_eq!(i.lerp(1.0), 0.42);
    assert!((i.lerp(0.5) - 0.485).abs() < 1e-12);
}

#[test]
fn default_windows_overlap_as_choreographed() {
    let cfg = TimelineConfig::default();
    // The fit window dominates: it opens before the frame reveal and
    // closes after the rounding window.
    assert!(cfg.fit.start < cfg.frame_reveal.start);
    assert!(cfg.fit.end > cfg.rounding.end);
    // The hint fades out before the exit window opens.
    assert!(cfg.hint_fade.end < cfg.exit.start);
    // The overlay settles before it intensifies.
    assert!(cfg.overlay_settle.end < cfg.exit.start);
    // The toss window sits inside the tail of the timeline.
    assert!(cfg.toss.start >= cfg.rounding.end);
}

#[test]
fn copy_is_fully_faded_mid_timeline() {
    let cfg = TimelineConfig::default();
    assert_eq!(cfg.copy_fade.eval(Progress(0.5)), 1.0);
    assert_eq!(cfg.copy_fade.eval(Progress(0.05)), 0.0);
}
