use scrub_core::{
    parse_keyframes_json, parse_scrub_json, MotionValue, OutputValue, Sample, Scrub, ScrubConfig,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn emitted(scrub: &Scrub, progress: f32) -> OutputValue {
    let mut sink = MotionValue::empty();
    match scrub.evaluate(progress, &mut sink).unwrap() {
        Sample::Emitted(v) => v,
        Sample::Held => panic!("expected emission at progress {progress}"),
    }
}

/// it should list every fixture named in the manifest
#[test]
fn manifest_lists_fixtures() {
    let mut keys = scrub_test_fixtures::scrubs::keys();
    keys.sort();
    assert_eq!(
        keys,
        vec!["color-fade", "numeric-ramp", "opacity-slide", "unit-track"]
    );
}

/// it should load a bare numeric keyframe map and evaluate it
#[test]
fn numeric_ramp_fixture() {
    let json = scrub_test_fixtures::scrubs::json("numeric-ramp").unwrap();
    let set = parse_keyframes_json(&json).unwrap();
    assert_eq!(set.len(), 3);

    let scrub = Scrub::new(set, ScrubConfig::default());
    match emitted(&scrub, 0.25) {
        OutputValue::Number(v) => approx(v, 25.0, 1e-4),
        other => panic!("expected number, got {other:?}"),
    }
}

/// it should load color keyframes from a bare map
#[test]
fn color_fade_fixture() {
    let json = scrub_test_fixtures::scrubs::json("color-fade").unwrap();
    let scrub = parse_scrub_json(&json).unwrap();
    assert_eq!(
        emitted(&scrub, 0.5),
        OutputValue::Text("rgba(127.5000,127.5000,127.5000,1)".into())
    );
}

/// it should load unit-string keyframes from a bare map
#[test]
fn unit_track_fixture() {
    let json = scrub_test_fixtures::scrubs::json("unit-track").unwrap();
    let scrub = parse_scrub_json(&json).unwrap();
    assert_eq!(emitted(&scrub, 0.3), OutputValue::Text("30.0000px".into()));
}

/// it should load a params object with buffer, channel and interval
#[test]
fn opacity_slide_fixture() {
    let json = scrub_test_fixtures::scrubs::json("opacity-slide").unwrap();
    let scrub = parse_scrub_json(&json).unwrap();
    approx(scrub.config().buffer, 0.1, 1e-6);
    assert_eq!(scrub.config().channel.as_deref(), Some("opacity"));

    // global 0.5 -> interval [0.2, 0.8] -> local 0.5 -> opacity keyframes
    // {0: 0, 60: 1, 100: 1} -> segment (0, 0.6), fraction 5/6.
    match emitted(&scrub, 0.5) {
        OutputValue::Number(v) => approx(v, 0.8333, 1e-4),
        other => panic!("expected number, got {other:?}"),
    }

    // Below the interval saturates to local 0 -> first keyframe value.
    match emitted(&scrub, 0.0) {
        OutputValue::Number(v) => approx(v, 0.0, 1e-6),
        other => panic!("expected number, got {other:?}"),
    }

    // Seeding uses the first keyframe that defines the channel.
    assert_eq!(scrub.initial().unwrap(), OutputValue::Number(0.0));
}
