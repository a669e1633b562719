//! Opposition and middle-point sequencing of the candidate stream.
//!
//! A tiny per-instance state machine sits between the raw draw and the
//! caller: it can inject a guaranteed origin point on the very first ask,
//! and it can pair every fresh point with a mirrored partner emitted on the
//! following ask. The machine has two states, "empty" and "holding a
//! pending opposable point", and never holds more than one point.

use crate::error::Result;
use crate::optimizer::OppositionMode;

/// Mutable ask-side state, owned exclusively by one optimizer instance.
#[derive(Clone, Debug, Default)]
pub(crate) struct AskState {
    /// How many candidates have been emitted so far.
    pub(crate) num_asks: u64,
    /// The point whose mirrored partner has not yet been emitted.
    pub(crate) opposable: Option<Vec<f64>>,
}

/// Stream-shaping flags, fixed at optimizer construction.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SequencerPlan {
    pub(crate) dimension: usize,
    /// Emit the origin as the very first candidate.
    pub(crate) middle_point: bool,
    /// Whether the middle point is itself held for opposition. Random
    /// search holds it; its "opposite" is again the origin, an accepted
    /// no-op rather than a defect.
    pub(crate) hold_middle_point: bool,
    pub(crate) opposition: Option<OppositionMode>,
}

/// Emit one candidate: a pending opposite, the middle point, or a fresh
/// draw from `fresh`, in that precedence order.
///
/// Exactly one candidate is emitted per call, and `fresh` is invoked at
/// most once.
pub(crate) fn step<F>(
    state: &mut AskState,
    plan: &SequencerPlan,
    rng: &mut fastrand::Rng,
    fresh: F,
) -> Result<Vec<f64>>
where
    F: FnOnce(&mut fastrand::Rng) -> Result<Vec<f64>>,
{
    if let Some(mode) = plan.opposition {
        if let Some(held) = state.opposable.take() {
            let factor = match mode {
                OppositionMode::Opposite => -1.0,
                OppositionMode::Quasi => -rng.f64(),
            };
            state.num_asks += 1;
            return Ok(held.into_iter().map(|x| factor * x).collect());
        }
    }

    if plan.middle_point && state.num_asks == 0 {
        let origin = vec![0.0; plan.dimension];
        if plan.hold_middle_point && plan.opposition.is_some() {
            state.opposable = Some(origin.clone());
        }
        state.num_asks += 1;
        return Ok(origin);
    }

    let point = fresh(rng)?;
    if plan.opposition.is_some() {
        state.opposable = Some(point.clone());
    }
    state.num_asks += 1;
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(
        middle_point: bool,
        hold_middle_point: bool,
        opposition: Option<OppositionMode>,
    ) -> SequencerPlan {
        SequencerPlan {
            dimension: 3,
            middle_point,
            hold_middle_point,
            opposition,
        }
    }

    fn counting_fresh(counter: &mut f64) -> impl FnOnce(&mut fastrand::Rng) -> Result<Vec<f64>> + '_ {
        move |_| {
            *counter += 1.0;
            Ok(vec![*counter, 2.0 * *counter, -*counter])
        }
    }

    #[test]
    fn opposite_mode_negates_exactly() {
        let mut state = AskState::default();
        let mut rng = fastrand::Rng::with_seed(0);
        let plan = plan(false, false, Some(OppositionMode::Opposite));
        let mut c = 0.0;
        for _ in 0..4 {
            let base = step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap();
            let opposite = step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap();
            let negated: Vec<f64> = base.iter().map(|x| -x).collect();
            assert_eq!(opposite, negated);
            assert!(state.opposable.is_none());
        }
    }

    #[test]
    fn quasi_mode_uses_a_varying_uniform_factor() {
        let mut state = AskState::default();
        let mut rng = fastrand::Rng::with_seed(11);
        let plan = plan(false, false, Some(OppositionMode::Quasi));
        let mut c = 0.0;
        let mut factors = Vec::new();
        for _ in 0..8 {
            let base = step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap();
            let paired = step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap();
            let factor = paired[0] / base[0];
            assert!(factor <= 0.0 && factor > -1.0, "factor {factor} not in (-1, 0]");
            for (p, b) in paired.iter().zip(&base) {
                assert!((p - factor * b).abs() < 1e-12);
            }
            factors.push(factor);
        }
        let first = factors[0];
        assert!(factors.iter().any(|&f| (f - first).abs() > 1e-9));
    }

    #[test]
    fn middle_point_is_the_origin_and_only_ask_zero() {
        let mut state = AskState::default();
        let mut rng = fastrand::Rng::with_seed(0);
        let plan = plan(true, false, None);
        let mut c = 0.0;
        assert_eq!(
            step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap(),
            vec![0.0; 3]
        );
        for _ in 0..5 {
            let point = step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap();
            assert_ne!(point, vec![0.0; 3]);
        }
    }

    #[test]
    fn held_middle_point_yields_a_zero_opposite() {
        let mut state = AskState::default();
        let mut rng = fastrand::Rng::with_seed(0);
        let plan = plan(true, true, Some(OppositionMode::Opposite));
        let mut c = 0.0;
        assert_eq!(
            step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap(),
            vec![0.0; 3]
        );
        // Negating the origin is a no-op by design.
        assert_eq!(
            step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap(),
            vec![0.0; 3]
        );
        let fresh = step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap();
        assert_ne!(fresh, vec![0.0; 3]);
    }

    #[test]
    fn unheld_middle_point_skips_the_zero_pair() {
        let mut state = AskState::default();
        let mut rng = fastrand::Rng::with_seed(0);
        let plan = plan(true, false, Some(OppositionMode::Opposite));
        let mut c = 0.0;
        assert_eq!(
            step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap(),
            vec![0.0; 3]
        );
        let base = step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap();
        assert_ne!(base, vec![0.0; 3]);
        let opposite = step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap();
        assert_eq!(opposite, base.iter().map(|x| -x).collect::<Vec<f64>>());
    }

    #[test]
    fn buffer_never_nests() {
        let mut state = AskState::default();
        let mut rng = fastrand::Rng::with_seed(0);
        let plan = plan(false, false, Some(OppositionMode::Opposite));
        let mut c = 0.0;
        for ask in 0..10 {
            let _ = step(&mut state, &plan, &mut rng, counting_fresh(&mut c)).unwrap();
            // Holding exactly after base asks, empty after opposite asks.
            assert_eq!(state.opposable.is_some(), ask % 2 == 0);
        }
    }
}
