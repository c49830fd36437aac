//! Property-based tests for the filter engine using proptest.

use proptest::prelude::*;
use solid_filter::vehicle::{Brand, BrandSpecification, Color, ColorSpecification, Vehicle, VehicleType};
use solid_filter::{
    from_fn, AllOf, AlwaysFalse, AlwaysTrue, And, AnyOf, Filter, Not, Or, Specification,
};

// ============================================================================
// Test helpers
// ============================================================================

fn above(threshold: i64) -> impl Specification<i64> + Send + Sync + 'static {
    from_fn(move |n: &i64| *n > threshold)
}

fn divisible_by(d: i64) -> impl Specification<i64> + Send + Sync + 'static {
    from_fn(move |n: &i64| n % d == 0)
}

fn vehicle_strategy() -> impl Strategy<Value = Vehicle> {
    (
        prop::sample::select(Brand::ALL),
        prop::sample::select(VehicleType::ALL),
        prop::sample::select(Color::ALL),
        0.0f64..8.0,
    )
        .prop_map(|(brand, kind, color, volume)| Vehicle::new(brand, kind, color, volume))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// And agrees with the conjunction of its children.
    #[test]
    fn and_is_conjunction(n in any::<i64>(), t in any::<i64>(), d in 1i64..10) {
        let spec = And::new(above(t), divisible_by(d));
        prop_assert_eq!(
            spec.is_satisfied_by(&n),
            above(t).is_satisfied_by(&n) && divisible_by(d).is_satisfied_by(&n)
        );
    }

    /// Or agrees with the disjunction of its children.
    #[test]
    fn or_is_disjunction(n in any::<i64>(), t in any::<i64>(), d in 1i64..10) {
        let spec = Or::new(above(t), divisible_by(d));
        prop_assert_eq!(
            spec.is_satisfied_by(&n),
            above(t).is_satisfied_by(&n) || divisible_by(d).is_satisfied_by(&n)
        );
    }

    /// NOT (a AND b) == (NOT a) OR (NOT b).
    #[test]
    fn de_morgan(n in any::<i64>(), t in any::<i64>(), d in 1i64..10) {
        let left = Not::new(And::new(above(t), divisible_by(d)));
        let right = Or::new(Not::new(above(t)), Not::new(divisible_by(d)));
        prop_assert_eq!(left.is_satisfied_by(&n), right.is_satisfied_by(&n));
    }

    /// AllOf and AnyOf agree with folded And and Or.
    #[test]
    fn n_ary_matches_folded(n in any::<i64>(), divisors in prop::collection::vec(1i64..10, 0..6)) {
        let all = divisors
            .iter()
            .fold(AllOf::<i64>::new(), |acc, d| acc.with(divisible_by(*d)));
        let any = divisors
            .iter()
            .fold(AnyOf::<i64>::new(), |acc, d| acc.with(divisible_by(*d)));

        prop_assert_eq!(all.is_satisfied_by(&n), divisors.iter().all(|d| n % d == 0));
        prop_assert_eq!(any.is_satisfied_by(&n), divisors.iter().any(|d| n % d == 0));
    }

    /// Every match satisfies the spec and every satisfying item appears once, in order.
    #[test]
    fn filter_is_exact_ordered_subsequence(
        items in prop::collection::vec(any::<i64>(), 0..100),
        t in any::<i64>(),
    ) {
        let spec = above(t);
        let results: Vec<i64> = Filter.apply(&items, &spec).copied().collect();
        let expected: Vec<i64> = items.iter().copied().filter(|n| *n > t).collect();

        prop_assert!(results.iter().all(|n| spec.is_satisfied_by(n)));
        prop_assert_eq!(results, expected);
    }

    /// Filtering twice is the same as filtering once.
    #[test]
    fn filter_is_idempotent(items in prop::collection::vec(any::<i64>(), 0..100), d in 1i64..10) {
        let spec = divisible_by(d);
        let once = Filter.apply_cloned(&items, &spec);
        let twice = Filter.apply_cloned(&once, &spec);
        prop_assert_eq!(once, twice);
    }

    /// AlwaysTrue keeps everything, AlwaysFalse keeps nothing.
    #[test]
    fn constant_specifications(items in prop::collection::vec(any::<i64>(), 0..100)) {
        prop_assert_eq!(Filter.apply_cloned(&items, &AlwaysTrue), items.clone());
        prop_assert!(Filter.collect(&items, &AlwaysFalse).is_empty());
    }

    /// Reverse iteration yields the same matches backwards.
    #[test]
    fn reverse_iteration(items in prop::collection::vec(any::<i64>(), 0..60), t in any::<i64>()) {
        let spec = above(t);
        let mut forward: Vec<i64> = Filter.apply(&items, &spec).copied().collect();
        let backward: Vec<i64> = Filter.apply(&items, &spec).rev().copied().collect();
        forward.reverse();
        prop_assert_eq!(forward, backward);
    }

    /// The aggregate helpers agree with the iterator.
    #[test]
    fn aggregates_consistent_with_apply(
        items in prop::collection::vec(any::<i64>(), 0..60),
        d in 1i64..10,
    ) {
        let spec = divisible_by(d);
        let matches = Filter.collect(&items, &spec);

        prop_assert_eq!(Filter.count(&items, &spec), matches.len());
        prop_assert_eq!(Filter.any(&items, &spec), !matches.is_empty());
        prop_assert_eq!(Filter.all(&items, &spec), matches.len() == items.len());
        prop_assert_eq!(Filter.find(&items, &spec), matches.first().copied());

        let mut retained = items.clone();
        Filter.retain(&mut retained, &spec);
        prop_assert_eq!(retained, Filter.apply_cloned(&items, &spec));
    }

    /// Vehicle specifications compose like any other.
    #[test]
    fn vehicle_and_matches_attributes(
        lot in prop::collection::vec(vehicle_strategy(), 0..40),
        brand in prop::sample::select(Brand::ALL),
        color in prop::sample::select(Color::ALL),
    ) {
        let spec = BrandSpecification::new(brand).and(ColorSpecification::new(color));
        for v in Filter.apply(&lot, &spec) {
            prop_assert_eq!(v.brand(), brand);
            prop_assert_eq!(v.color(), color);
        }
        let expected = lot.iter().filter(|v| v.brand() == brand && v.color() == color).count();
        prop_assert_eq!(Filter.count(&lot, &spec), expected);
    }
}
