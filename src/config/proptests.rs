//! Property-based tests for scheduler configuration

use super::*;
use crate::error::ScheduleError;
use crate::scheduler::Scheduler;
use proptest::prelude::*;

fn arb_buildable_spec() -> impl Strategy<Value = SchedulerSpec> {
    prop_oneof![
        (1e-6f64..1.0).prop_map(|learning_rate| SchedulerSpec::Constant { learning_rate }),
        (1e-6f64..1.0, 0.0f64..1.0, 1u32..1000).prop_map(|(lr1, frac, c)| {
            SchedulerSpec::Cyclic { lr1, lr2: lr1 * frac, c: f64::from(c) }
        }),
        (1e-6f64..1.0, 0.0f64..2.0).prop_map(|(learning_rate, power)| {
            SchedulerSpec::InverseScaling { learning_rate, power }
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_yaml_round_trip(spec in arb_buildable_spec()) {
        let yaml = spec.to_yaml().unwrap();
        prop_assert_eq!(SchedulerSpec::from_yaml(&yaml).unwrap(), spec);
    }

    #[test]
    fn prop_built_schedule_reports_its_spec(spec in arb_buildable_spec()) {
        let schedule = spec.build(None).unwrap();
        prop_assert_eq!(schedule.spec(), spec);
    }

    #[test]
    fn prop_built_rates_finite(spec in arb_buildable_spec(), t in 0u64..1_000_000) {
        let schedule = spec.build(None).unwrap();
        prop_assert!(schedule.get(t).is_finite());
    }

    #[test]
    fn prop_fractional_cycle_rejected(whole in 0u32..1000, frac in 0.01f64..0.99) {
        let spec = SchedulerSpec::Cyclic { lr1: 0.1, lr2: 0.01, c: f64::from(whole) + frac };
        let rejected = matches!(spec.build(None), Err(ScheduleError::InvalidParameter { .. }));
        prop_assert!(rejected, "fractional cycle length was accepted");
    }
}
