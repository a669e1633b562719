//! Ask for a full one-shot batch, evaluate it, and compare recommendations
//! across a few presets on the shifted sphere function.
//!
//! Run with: `cargo run --example one_shot_batch`

use oneshot::presets;
use oneshot::OneShot;

fn shifted_sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| (v - 0.7) * (v - 0.7)).sum()
}

fn main() -> oneshot::Result<()> {
    let dimension = 5;
    let budget = 128;

    for name in [
        "RandomSearch",
        "QORandomSearch",
        "ScrHammersleySearch",
        "RescaleScrHammersleySearch",
        "AvgLHSSearch",
    ] {
        let preset = presets::by_name(name).expect("known preset");
        let search = preset.build(dimension, Some(budget), 42)?;

        // One-shot: the whole batch is independent of the evaluations, so
        // in a real setting these asks could be dispatched to any number
        // of parallel workers before a single tell happens.
        let batch: Vec<Vec<f64>> = (0..budget).map(|_| search.ask()).collect::<Result<_, _>>()?;
        for point in &batch {
            search.tell(point, shifted_sphere(point))?;
        }

        let recommendation = search.recommend()?;
        println!(
            "{name:>28}: f(recommendation) = {:.6}",
            shifted_sphere(&recommendation)
        );
    }
    Ok(())
}
