// spritegen-core/tests/plan_tests.rs

use spritegen_core::config::{MAX_FRAMES, MIN_FRAMES, SpriteConfig};
use spritegen_core::processing::plan::{frame_count_for, rows_for};
use spritegen_core::{CoreError, SamplingPlan};

#[test]
fn test_frame_count_matches_clamped_floor() {
    let mut d = 0.5;
    while d < 20_000.0 {
        let expected = ((d / 30.0) as u32).clamp(MIN_FRAMES, MAX_FRAMES);
        assert_eq!(frame_count_for(d), expected, "duration {d}");
        d += 17.3;
    }
}

#[test]
fn test_documented_durations() {
    let config = SpriteConfig::default();
    let cases = [
        (60.0, 100, 0.6),
        (3000.0, 100, 30.0),
        (6000.0, 200, 30.0),
        (12000.0, 300, 40.0),
    ];
    for (duration, frames, interval) in cases {
        let plan = SamplingPlan::new(duration, &config).unwrap();
        assert_eq!(plan.frame_count, frames, "duration {duration}");
        assert!(
            (plan.interval_secs - interval).abs() < 1e-9,
            "duration {duration}: interval {}",
            plan.interval_secs
        );
    }
}

#[test]
fn test_rows_with_default_columns() {
    assert_eq!(rows_for(100, 10), 10);
    assert_eq!(rows_for(205, 10), 21);
    assert_eq!(rows_for(300, 10), 30);
}

#[test]
fn test_custom_layout_flows_into_filter_chain() {
    let config = SpriteConfig {
        columns: 8,
        tile_width: 320,
        tile_height: 180,
        quality: 5,
    };
    let plan = SamplingPlan::new(9000.0, &config).unwrap();

    assert_eq!(plan.frame_count, 300);
    assert_eq!(plan.rows, 38);
    assert_eq!(plan.filter_chain(), "fps=1/30,scale=320:180,tile=8x38");
    assert_eq!(plan.sheet_dimensions(), (2560, 6840));
}

#[test]
fn test_plan_is_deterministic() {
    let config = SpriteConfig::default();
    let a = SamplingPlan::new(4321.0, &config).unwrap();
    let b = SamplingPlan::new(4321.0, &config).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.filter_chain(), b.filter_chain());
}

#[test]
fn test_invalid_duration() {
    let err = SamplingPlan::new(-3.0, &SpriteConfig::default()).unwrap_err();
    assert!(matches!(err, CoreError::InvalidDuration(d) if d == -3.0));
}

#[test]
fn test_metadata_uses_database_field_names() {
    let plan = SamplingPlan::new(6000.0, &SpriteConfig::default()).unwrap();
    let json = serde_json::to_value(plan.metadata()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "spriteInterval": 30.0,
            "spriteCols": 10,
            "spriteRows": 20,
            "spriteWidth": 160,
            "spriteHeight": 90,
        })
    );
}
