use oneshot::presets;
use oneshot::OneShot;

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

#[test]
fn every_preset_runs_a_full_budget_end_to_end() {
    let budget = 12;
    for preset in presets::PRESETS {
        let search = preset
            .build(3, Some(budget), 42)
            .unwrap_or_else(|e| panic!("{}: {e}", preset.name));
        for _ in 0..budget {
            let x = search
                .ask()
                .unwrap_or_else(|e| panic!("{}: ask failed: {e}", preset.name));
            assert_eq!(x.len(), 3);
            assert!(x.iter().all(|v| v.is_finite()), "{}: {x:?}", preset.name);
            search.tell(&x, sphere(&x)).unwrap();
        }
        let recommendation = search
            .recommend()
            .unwrap_or_else(|e| panic!("{}: recommend failed: {e}", preset.name));
        assert_eq!(recommendation.len(), 3);
    }
}

#[test]
fn presets_are_deterministic_across_builds() {
    for name in [
        "RandomSearch",
        "QORandomSearch",
        "ScrHammersleySearch",
        "RescaleScrHammersleySearch",
        "CauchyLHSSearch",
        "RandomScaleRandomSearch",
    ] {
        let preset = presets::by_name(name).unwrap();
        let a = preset.build(4, Some(10), 7).unwrap();
        let b = preset.build(4, Some(10), 7).unwrap();
        for _ in 0..10 {
            assert_eq!(a.ask().unwrap(), b.ask().unwrap(), "{name} diverged");
        }
    }
}

#[test]
fn middle_point_presets_start_at_the_origin() {
    for name in [
        "RandomSearchPlusMiddlePoint",
        "HaltonSearchPlusMiddlePoint",
        "ScrHammersleySearchPlusMiddlePoint",
        "AvgHammersleySearchPlusMiddlePoint",
    ] {
        let search = presets::by_name(name).unwrap().build(5, Some(8), 0).unwrap();
        assert_eq!(search.ask().unwrap(), vec![0.0; 5], "{name}");
        assert_ne!(search.ask().unwrap(), vec![0.0; 5], "{name}");
    }
}

#[test]
fn opposition_presets_pair_their_candidates() {
    let search = presets::by_name("OScrHammersleySearch")
        .unwrap()
        .build(3, Some(10), 1)
        .unwrap();
    for _ in 0..5 {
        let base = search.ask().unwrap();
        let opposite = search.ask().unwrap();
        assert_eq!(opposite, base.iter().map(|x| -x).collect::<Vec<f64>>());
    }
}

#[test]
fn stupid_preset_recommends_without_history() {
    let search = presets::by_name("StupidRandom")
        .unwrap()
        .build(2, Some(4), 0)
        .unwrap();
    // No tell at all: a baseline recommendation must still come back.
    let recommendation = search.recommend().unwrap();
    assert_eq!(recommendation.len(), 2);
}
