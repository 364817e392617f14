use landing_reveal::{
    config::Config,
    engine::Engine,
    ids::{CounterId, RegionId},
    observer::HostVisibility,
    outputs::{Change, CoreEvent, Outputs},
    page::{CounterSpec, PageSpec, RegionSpec},
};

fn stats_page(target: u64) -> PageSpec {
    PageSpec {
        regions: vec![
            RegionSpec::new("hero"),
            RegionSpec::new("stats").with_counter(CounterSpec::new("followers", target)),
        ],
    }
}

fn engine(page: &PageSpec) -> Engine {
    Engine::from_page(Config::default(), page).expect("engine builds")
}

fn counter_texts(out: &Outputs) -> Vec<(CounterId, u64)> {
    out.changes
        .iter()
        .filter_map(|c| match c {
            Change::CounterText { counter, value, .. } => Some((*counter, *value)),
            _ => None,
        })
        .collect()
}

/// Drive frames every `step_ms` from `start` until the engine goes idle.
fn run_to_idle(eng: &mut Engine, start: f64, step_ms: f64) -> Vec<u64> {
    let mut values = Vec::new();
    let mut now = start;
    let mut guard = 0;
    while !eng.is_idle() {
        let out = eng.tick(now);
        values.extend(counter_texts(out).into_iter().map(|(_, v)| v));
        now += step_ms;
        guard += 1;
        assert!(guard < 10_000, "animation never finished");
    }
    values
}

#[test]
fn scenario_counter_reaches_target_after_duration() {
    let mut eng = engine(&stats_page(1234));
    let stats = eng.region_id("stats").unwrap();
    let followers = eng.counter_id("followers").unwrap();

    let out = eng.notify_visibility(stats, true);
    assert!(out.changes.iter().any(|c| matches!(
        c,
        Change::RegionClass { class, .. } if class == "fade-in-up"
    )));
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, CoreEvent::CounterStarted { target: 1234, .. })));

    // elapsed = 0
    let out = eng.tick(10_000.0);
    assert_eq!(out.counter_text(followers), Some("0"));
    assert_eq!(eng.counter(followers).unwrap().current(), 0);

    // elapsed = 2000
    let out = eng.tick(12_000.0);
    assert_eq!(out.counter_text(followers), Some("1,234"));
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, CoreEvent::CounterCompleted { value: 1234, .. })));
    let c = eng.counter(followers).unwrap();
    assert_eq!(c.current(), 1234);
    assert!(c.is_completed());
    assert!(eng.is_idle());
}

#[test]
fn scenario_region_without_counters_only_reveals() {
    let mut eng = engine(&stats_page(10));
    let hero = eng.region_id("hero").unwrap();

    let out = eng.notify_visibility(hero, true).clone();
    assert_eq!(out.changes.len(), 1);
    assert_eq!(out.events.len(), 1);
    assert!(matches!(out.events[0], CoreEvent::RegionRevealed { .. }));
    assert!(eng.region(hero).unwrap().is_revealed());
    assert!(eng.is_idle());
    assert!(!eng.counters()[0].is_started());
}

#[test]
fn scenario_double_trigger_runs_one_sequence() {
    let mut eng = engine(&stats_page(1000));
    let stats = eng.region_id("stats").unwrap();
    let followers = eng.counter_id("followers").unwrap();

    eng.notify_visibility(stats, true);
    eng.tick(0.0);
    let mid = eng.tick(1000.0).counter_text(followers).map(str::to_owned);
    let mid_value = eng.counter(followers).unwrap().current();
    assert!(mid_value > 0);
    assert!(mid.is_some());

    // Second visibility event while in flight: no restart, no extra scheduling.
    let out = eng.notify_visibility(stats, true);
    assert!(out.is_empty(), "re-trigger must be silent: {out:?}");
    assert!(!eng.animate(followers));

    let out = eng.tick(1016.0);
    assert_eq!(counter_texts(out).len(), 1);
    assert!(eng.counter(followers).unwrap().current() >= mid_value);

    let rest = run_to_idle(&mut eng, 1032.0, 16.0);
    assert_eq!(rest.last(), Some(&1000));
}

#[test]
fn scenario_zero_target_completes_on_first_frame() {
    let mut eng = engine(&stats_page(0));
    let stats = eng.region_id("stats").unwrap();
    eng.notify_visibility(stats, true);

    let out = eng.tick(5.0);
    assert_eq!(counter_texts(out), vec![(CounterId(0), 0)]);
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, CoreEvent::CounterCompleted { value: 0, .. })));
    assert!(eng.counters()[0].is_completed());
    assert!(eng.is_idle());
}

#[test]
fn missing_frame_timestamp_does_not_stall_counter() {
    let mut eng = engine(&stats_page(1234));
    let followers = eng.counter_id("followers").unwrap();
    eng.notify_visibility_by_key("stats", true).unwrap();

    let out = eng.tick(f64::NAN);
    assert_eq!(out.counter_text(followers), Some("0"));
    assert!(!eng.is_idle());

    let values = run_to_idle(&mut eng, 100.0, 100.0);
    assert_eq!(values.first(), Some(&0));
    assert_eq!(values.last(), Some(&1234));
    let c = eng.counter(followers).unwrap();
    assert!(c.is_completed());
    assert_eq!(c.current(), 1234);
}

#[test]
fn values_are_non_decreasing_and_bounded() {
    for target in [1u64, 7, 99, 1234, 1_500_000] {
        let mut eng = engine(&stats_page(target));
        let stats = eng.region_id("stats").unwrap();
        eng.notify_visibility(stats, true);
        let values = run_to_idle(&mut eng, 0.0, 16.6);
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "target {target}");
        assert!(values.iter().all(|v| *v <= target));
        assert_eq!(values.last(), Some(&target));
        assert_eq!(values.iter().filter(|v| **v == target).count(), 1);
    }
}

#[test]
fn completed_counter_is_not_restarted() {
    let mut eng = engine(&stats_page(50));
    let stats = eng.region_id("stats").unwrap();
    eng.notify_visibility(stats, true);
    run_to_idle(&mut eng, 0.0, 100.0);
    let frames = eng.frame_index();

    assert!(eng.notify_visibility(stats, true).is_empty());
    assert!(eng.is_idle());
    let out = eng.tick(99_999.0);
    assert!(out.is_empty());
    assert_eq!(eng.counters()[0].current(), 50);
    assert_eq!(eng.frame_index(), frames + 1);
}

#[test]
fn reveal_sequence_is_idempotent() {
    let page = stats_page(321);

    let mut once = engine(&page);
    let stats = once.region_id("stats").unwrap();
    once.notify_visibility(stats, true);
    run_to_idle(&mut once, 0.0, 50.0);

    let mut twice = engine(&page);
    twice.notify_visibility(stats, true);
    twice.notify_visibility(stats, true);
    run_to_idle(&mut twice, 0.0, 50.0);
    twice.notify_visibility(stats, true);

    for (a, b) in once.counters().iter().zip(twice.counters()) {
        assert_eq!(a.current(), b.current());
        assert_eq!(a.is_completed(), b.is_completed());
    }
    for (a, b) in once.regions().iter().zip(twice.regions()) {
        assert_eq!(a.is_revealed(), b.is_revealed());
    }
}

#[test]
fn leaving_the_viewport_never_unreveals() {
    let mut eng = engine(&stats_page(5));
    let hero = eng.region_id("hero").unwrap();
    eng.notify_visibility(hero, true);
    assert!(eng.notify_visibility(hero, false).is_empty());
    assert!(eng.region(hero).unwrap().is_revealed());
}

#[test]
fn counters_animate_independently() {
    let page = PageSpec {
        regions: vec![
            RegionSpec::new("a").with_counter(CounterSpec::new("a1", 100)),
            RegionSpec::new("b").with_counter(CounterSpec::new("b1", 100)),
        ],
    };
    let mut eng = engine(&page);
    eng.notify_visibility(RegionId(0), true);
    eng.tick(0.0);
    eng.tick(1000.0);
    // b starts a full second later and pins its own start time.
    eng.notify_visibility(RegionId(1), true);
    let out = eng.tick(2000.0);
    assert_eq!(
        counter_texts(out),
        vec![(CounterId(0), 100), (CounterId(1), 0)]
    );
    assert!(eng.counters()[0].is_completed());
    assert!(eng.counters()[1].is_running());
}

#[test]
fn unobserved_regions_ignore_visibility() {
    let mut eng = Engine::new(Config::default()).unwrap();
    let r = eng.add_region("late").unwrap();
    eng.add_counter(r, "n", 9).unwrap();
    assert!(eng.notify_visibility(r, true).is_empty());
    assert!(!eng.region(r).unwrap().is_revealed());

    eng.observe(r);
    assert!(!eng.notify_visibility(r, true).is_empty());
    assert!(eng.region(r).unwrap().is_revealed());
}

#[test]
fn reveal_immediately_bypasses_observation() {
    let mut eng = Engine::new(Config::default()).unwrap();
    eng.add_region("hero-content-compact").unwrap();
    let out = eng.reveal_immediately("hero-content-compact").unwrap();
    assert_eq!(out.changes.len(), 1);
    assert!(eng.reveal_immediately("missing").is_err());
}

#[test]
fn pump_applies_host_changes_in_order() {
    let mut eng = engine(&stats_page(3));
    let mut host = HostVisibility::new();
    host.push(RegionId(1), true);
    host.push(RegionId(0), false);
    host.push(RegionId(0), true);
    let out = eng.pump(&mut host);
    let revealed: Vec<&str> = out
        .events
        .iter()
        .filter_map(|e| match e {
            CoreEvent::RegionRevealed { key, .. } => Some(key.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(revealed, vec!["stats", "hero"]);
    assert!(host.is_empty());
}

#[test]
fn key_api_reports_unknown_regions() {
    let mut eng = engine(&stats_page(3));
    assert!(eng.notify_visibility_by_key("stats", true).is_ok());
    let err = eng.notify_visibility_by_key("footer", true).unwrap_err();
    assert_eq!(err.to_string(), "unknown region 'footer'");
}

#[test]
fn duplicate_keys_are_rejected_at_construction() {
    let mut eng = Engine::new(Config::default()).unwrap();
    let r = eng.add_region("a").unwrap();
    assert!(eng.add_region("a").is_err());
    eng.add_counter(r, "n", 1).unwrap();
    assert!(eng.add_counter(r, "n", 2).is_err());
    assert!(eng.add_counter(RegionId(42), "m", 2).is_err());
}

#[test]
fn invalid_config_fails_fast() {
    let mut cfg = Config::default();
    cfg.counter.duration_ms = -1.0;
    assert!(Engine::new(cfg).is_err());
}

#[test]
fn custom_separator_and_class_flow_through() {
    let mut cfg = Config::default();
    cfg.counter.group_separator = ".".into();
    cfg.counter.duration_ms = 10.0;
    cfg.reveal_class = "shown".into();
    let mut eng = Engine::from_page(cfg, &stats_page(1_500_000)).unwrap();
    let out = eng.notify_visibility(RegionId(1), true);
    assert!(matches!(
        &out.changes[0],
        Change::RegionClass { class, .. } if class == "shown"
    ));
    eng.tick(0.0);
    let out = eng.tick(10.0);
    assert_eq!(out.counter_text(CounterId(0)), Some("1.500.000"));
}
