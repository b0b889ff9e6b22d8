//! Property-based tests for the algebraic laws of `Perm`.

use proptest::prelude::*;
use symperm::Perm;

// ============================================================================
//  Strategies
// ============================================================================

/// Strategy for a uniformly shuffled permutation of a degree in `0..=max_degree`.
fn perm(max_degree: usize) -> impl Strategy<Value = Perm> {
    (0..=max_degree).prop_flat_map(perm_of_degree)
}

fn perm_of_degree(degree: usize) -> impl Strategy<Value = Perm> {
    Just((0..degree as u32).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|images| Perm::<u32>::from_images(images).unwrap())
}

/// Strategy for two permutations of the same degree.
fn perm_pair(max_degree: usize) -> impl Strategy<Value = (Perm, Perm)> {
    (0..=max_degree).prop_flat_map(|degree| (perm_of_degree(degree), perm_of_degree(degree)))
}

fn perm_triple(max_degree: usize) -> impl Strategy<Value = (Perm, Perm, Perm)> {
    (0..=max_degree).prop_flat_map(|degree| {
        (
            perm_of_degree(degree),
            perm_of_degree(degree),
            perm_of_degree(degree),
        )
    })
}

// ============================================================================
//  Group laws
// ============================================================================

proptest! {
    #[test]
    fn identity_is_neutral(p in perm(40)) {
        let id = Perm::identity(p.degree());
        prop_assert_eq!(&id.compose(&p), &p);
        prop_assert_eq!(&p.compose(&id), &p);
    }

    #[test]
    fn inverse_cancels(p in perm(40)) {
        let id = Perm::identity(p.degree());
        prop_assert_eq!(&p.compose(&p.inverse()), &id);
        prop_assert_eq!(&p.inverse().compose(&p), &id);
        prop_assert_eq!(&p.inverse().inverse(), &p);
    }

    #[test]
    fn composition_is_associative((p, q, r) in perm_triple(30)) {
        prop_assert_eq!(p.compose(&q).compose(&r), p.compose(&q.compose(&r)));
    }

    #[test]
    fn in_place_composition_matches((p, q) in perm_pair(30)) {
        let mut target = p.clone();
        target.compose_in_place(&q);
        prop_assert_eq!(target, p.compose(&q));
    }

    #[test]
    fn composition_applies_left_first((p, q) in perm_pair(30)) {
        let product = p.compose(&q);
        for i in 0..p.degree() {
            prop_assert_eq!(product.image(i), q.image(p.image(i) as usize));
        }
    }
}

// ============================================================================
//  Powers
// ============================================================================

proptest! {
    #[test]
    fn small_powers(p in perm(40)) {
        prop_assert_eq!(&p.pow(1), &p);
        prop_assert_eq!(p.pow(0), Perm::identity(p.degree()));
        prop_assert_eq!(p.pow(-1), p.inverse());
        prop_assert_eq!(p.pow(2), p.compose(&p));
        prop_assert_eq!(p.pow(-2), p.inverse().compose(&p.inverse()));
    }

    #[test]
    fn powers_add(p in perm(25), a in -60i32..60, b in -60i32..60) {
        prop_assert_eq!(p.pow(a).compose(&p.pow(b)), p.pow(a + b));
    }

    #[test]
    fn powers_match_repeated_composition(p in perm(25), k in 0usize..30) {
        let mut expected = Perm::identity(p.degree());
        for _ in 0..k {
            expected.compose_in_place(&p);
        }
        prop_assert_eq!(p.pow(k), expected);
    }

    #[test]
    fn cycle_length_power_fixes_the_cycle(p in perm(40)) {
        for cycle in &p.cycles() {
            let power = p.pow(cycle.len() as i64);
            for &point in cycle {
                prop_assert_eq!(power.image(point as usize), point);
            }
        }
    }

    #[test]
    fn huge_exponents(p in perm(16), k in any::<i64>()) {
        // every cycle length up to 16 divides 720720
        prop_assert_eq!(p.pow(k), p.pow(k % 720_720));
    }
}

// ============================================================================
//  Parity and inversions
// ============================================================================

proptest! {
    #[test]
    fn parity_is_multiplicative((p, q) in perm_pair(40)) {
        prop_assert_eq!(p.compose(&q).is_odd(), p.is_odd() ^ q.is_odd());
        prop_assert_eq!(p.is_even(), !p.is_odd());
    }

    #[test]
    fn parity_of_inverse(p in perm(40)) {
        prop_assert_eq!(p.inverse().is_odd(), p.is_odd());
    }

    #[test]
    fn inversion_count_bounds_and_parity(p in perm(60)) {
        let n = p.degree() as u64;
        let count = p.inversion_count();
        prop_assert!(count <= n * n.saturating_sub(1) / 2);
        prop_assert_eq!(count % 2 == 1, p.is_odd());
        prop_assert_eq!(p.derangements_count(), count);
    }

    #[test]
    fn inversion_count_matches_enumeration(p in perm(30)) {
        let images = p.images();
        let mut expected = 0u64;
        for i in 0..images.len() {
            for j in i + 1..images.len() {
                if images[i] > images[j] {
                    expected += 1;
                }
            }
        }
        prop_assert_eq!(p.inversion_count(), expected);
        prop_assert_eq!(p.inverse().inversion_count(), expected);
    }
}

// ============================================================================
//  Sequencing and ordering
// ============================================================================

proptest! {
    #[test]
    fn next_and_previous_round_trip(p in perm(12)) {
        let reversed: Vec<u32> = (0..p.degree() as u32).rev().collect();
        let last: Perm = Perm::from_images(reversed).unwrap();
        let first = Perm::<u32>::identity(p.degree());

        if p != last {
            prop_assert_eq!(&p.next().previous(), &p);
            prop_assert!(p.next() > p);
        } else {
            prop_assert_eq!(&p.next(), &p);
        }

        if p != first {
            prop_assert_eq!(&p.previous().next(), &p);
            prop_assert!(p.previous() < p);
        } else {
            prop_assert_eq!(&p.previous(), &p);
        }
    }

    #[test]
    fn post_forms_return_the_prior_value(p in perm(12)) {
        let mut stepped = p.clone();
        let prior = stepped.post_advance();
        prop_assert_eq!(&prior, &p);
        prop_assert_eq!(&stepped, &p.next());

        let prior = stepped.post_retreat();
        prop_assert_eq!(prior, p.next());
        prop_assert_eq!(stepped, p.next().previous());
    }

    #[test]
    fn ordering_is_a_trichotomy((p, q) in perm_pair(10)) {
        let relations = [p < q, p == q, p > q];
        prop_assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
        prop_assert_eq!(p.cmp(&q), p.images().cmp(q.images()));
    }

    #[test]
    fn mixed_degrees_order_by_degree(p in perm(10), q in perm(10)) {
        if p.degree() != q.degree() {
            prop_assert_eq!(p.cmp(&q), p.degree().cmp(&q.degree()));
            prop_assert_ne!(&p, &q);
        }
    }
}

// ============================================================================
//  Acting on external data
// ============================================================================

proptest! {
    #[test]
    fn apply_then_inverse_restores(p in perm(50)) {
        let original: Vec<String> = (0..p.degree()).map(|i| format!("item{i}")).collect();
        let mut data = original.clone();

        p.apply(&mut data);
        for (i, item) in original.iter().enumerate() {
            prop_assert_eq!(&data[p.image(i) as usize], item);
        }

        p.inverse().apply(&mut data);
        prop_assert_eq!(data, original);
    }

    #[test]
    fn apply_agrees_with_composition((p, q) in perm_pair(30)) {
        let mut data: Vec<usize> = (0..p.degree()).collect();
        p.apply(&mut data);
        q.apply(&mut data);

        let mut expected: Vec<usize> = (0..p.degree()).collect();
        p.compose(&q).apply(&mut expected);
        prop_assert_eq!(data, expected);
    }

    #[test]
    fn display_lists_images(p in perm(20)) {
        let rendered = p.to_string();
        let parsed: Vec<u32> = rendered
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();
        prop_assert_eq!(parsed.as_slice(), p.images());
    }
}
