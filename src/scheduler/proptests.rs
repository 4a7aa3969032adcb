//! Property-based tests for learning rate schedulers

use super::*;
use crate::loss::Loss;
use proptest::prelude::*;
use std::sync::Arc;

struct FixedGradient(f64);

impl Loss for FixedGradient {
    fn gradient(&self, _y_pred: f64, _y_true: f64) -> f64 {
        self.0
    }

    fn name(&self) -> &str {
        "FixedGradient"
    }
}

fn arb_cyclic() -> impl Strategy<Value = Cyclic> {
    (1e-6f64..1.0, 0.0f64..1.0, 1u64..500).prop_map(|(lr1, frac, c)| {
        let lr2 = lr1 * frac;
        Cyclic::new(lr1, lr2, c).expect("lr2 <= lr1 and c >= 1")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_constant_independent_of_t(lr in -10.0f64..10.0, t1 in any::<u64>(), t2 in any::<u64>()) {
        let scheduler = Constant::new(lr);
        prop_assert_eq!(scheduler.get(t1), lr);
        prop_assert_eq!(scheduler.get(t2), lr);
    }

    #[test]
    fn prop_cyclic_within_bounds(scheduler in arb_cyclic(), t in 1u64..1_000_000) {
        let rate = scheduler.get(t);
        let tol = 1e-12;
        prop_assert!(
            rate >= scheduler.lr2() - tol && rate <= scheduler.lr1() + tol,
            "rate {} outside [{}, {}]", rate, scheduler.lr2(), scheduler.lr1()
        );
    }

    #[test]
    fn prop_cyclic_periodic(scheduler in arb_cyclic(), t in 1u64..1_000_000) {
        let c = scheduler.cycle_length();
        prop_assert_eq!(scheduler.get(t).to_bits(), scheduler.get(t + c).to_bits());
    }

    #[test]
    fn prop_cyclic_hits_lr2_at_cycle_end(scheduler in arb_cyclic(), k in 1u64..1000) {
        let c = scheduler.cycle_length();
        prop_assert_eq!(scheduler.get(k * c), scheduler.lr2());
    }

    #[test]
    fn prop_cyclic_rejects_inverted_rates(lr1 in 0.0f64..1.0, gap in 1e-6f64..1.0, c in 1u64..100) {
        prop_assert!(Cyclic::new(lr1, lr1 + gap, c).is_err());
    }

    #[test]
    fn prop_inverse_scaling_decreasing(
        lr in 1e-6f64..10.0,
        power in 0.01f64..2.0,
        t in 0u64..100_000,
    ) {
        let scheduler = InverseScaling::new(lr, power);
        prop_assert!(scheduler.get(t + 1) < scheduler.get(t));
    }

    #[test]
    fn prop_inverse_scaling_zero_power_matches_constant(lr in -10.0f64..10.0, t in any::<u64>()) {
        prop_assert_eq!(InverseScaling::new(lr, 0.0).get(t), Constant::new(lr).get(t));
    }

    #[test]
    fn prop_optimal_positive_and_decreasing(
        alpha in 1e-8f64..1.0,
        gradient in -100.0f64..100.0,
        t in 0u64..1_000_000,
    ) {
        let scheduler = Optimal::new(Arc::new(FixedGradient(gradient)), alpha).unwrap();
        let now = scheduler.get(t);
        prop_assert!(now.is_finite() && now > 0.0);
        prop_assert!(scheduler.get(t + 1) < now);
    }

    #[test]
    fn prop_optimal_first_rate_is_initial_eta0(alpha in 1e-8f64..1.0, gradient in 1.0f64..100.0) {
        let scheduler = Optimal::new(Arc::new(FixedGradient(gradient)), alpha).unwrap();
        let typw = (1.0 / alpha.sqrt()).sqrt();
        let expected = typw / gradient;
        prop_assert!((scheduler.get(0) - expected).abs() <= 1e-9 * expected);
    }

    #[test]
    fn prop_optimal_rejects_non_positive_alpha(alpha in -1.0f64..=0.0) {
        prop_assert!(Optimal::new(Arc::new(FixedGradient(1.0)), alpha).is_err());
    }
}
