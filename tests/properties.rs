// tests/properties.rs
//
// Randomized algebraic identities over small signatures.

use ga_algebra::prelude::*;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const EPS: f64 = 1e-9;

fn random_multivector(alg: &Algebra, rng: &mut ChaCha8Rng) -> Multivector {
    (0..alg.basis().len())
        .filter_map(|i| rng.gen_bool(0.6).then(|| (i, rng.gen_range(-2.0..2.0))))
        .collect()
}

fn small_signature() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..=3, 0usize..=2, 0usize..=1)
}

fn coefficients(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-3.0f64..3.0, len)
}

#[test]
fn geometric_product_is_associative() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for (p, q, r) in [(3, 0, 0), (2, 1, 1), (3, 1, 0), (4, 1, 0)] {
        let alg = Algebra::from_counts(p, q, r).unwrap();
        for _ in 0..20 {
            let a = random_multivector(&alg, &mut rng);
            let b = random_multivector(&alg, &mut rng);
            let c = random_multivector(&alg, &mut rng);
            let left = alg.geometric_product(&alg.geometric_product(&a, &b), &c);
            let right = alg.geometric_product(&a, &alg.geometric_product(&b, &c));
            assert!(left.max_abs_diff(&right) < EPS, "({p},{q},{r})");
        }
    }
}

#[test]
fn wedge_is_associative_and_anti_wedge_too() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let alg = Algebra::from_counts(3, 1, 1).unwrap();
    for _ in 0..20 {
        let a = random_multivector(&alg, &mut rng);
        let b = random_multivector(&alg, &mut rng);
        let c = random_multivector(&alg, &mut rng);
        let w1 = alg.wedge(&alg.wedge(&a, &b), &c);
        let w2 = alg.wedge(&a, &alg.wedge(&b, &c));
        assert!(w1.max_abs_diff(&w2) < EPS);
        let v1 = alg.anti_wedge(&alg.anti_wedge(&a, &b), &c);
        let v2 = alg.anti_wedge(&a, &alg.anti_wedge(&b, &c));
        assert!(v1.max_abs_diff(&v2) < EPS);
    }
}

#[test]
fn reverse_is_an_anti_automorphism() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let alg = Algebra::from_counts(2, 2, 0).unwrap();
    for _ in 0..20 {
        let a = random_multivector(&alg, &mut rng);
        let b = random_multivector(&alg, &mut rng);
        let lhs = alg.reverse(&alg.geometric_product(&a, &b));
        let rhs = alg.geometric_product(&alg.reverse(&b), &alg.reverse(&a));
        assert!(lhs.max_abs_diff(&rhs) < EPS);
    }
}

proptest! {
    #[test]
    fn vector_square_is_metric_norm((p, q, r) in small_signature(), seed in any::<u64>()) {
        let alg = Algebra::from_counts(p, q, r).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let coeffs: Vec<f64> = (0..alg.dimension()).map(|_| rng.gen_range(-2.0..2.0)).collect();
        let v = alg.vector(&coeffs).unwrap();
        let square = alg.geometric_product(&v, &v);
        prop_assert!(alg.grades(&square).iter().all(|&g| g == 0));
        prop_assert!((alg.scalar_part(&square) - alg.metric_inner(&v, &v)).abs() < EPS);
    }

    #[test]
    fn vector_wedge_antisymmetry(a in coefficients(4), b in coefficients(4)) {
        let alg = Algebra::from_counts(2, 1, 1).unwrap();
        let va = alg.vector(&a).unwrap();
        let vb = alg.vector(&b).unwrap();
        let ab = alg.wedge(&va, &vb);
        let ba = alg.wedge(&vb, &va);
        prop_assert!(ab.max_abs_diff(&alg.scale(-1.0, &ba)) < EPS);
        prop_assert!(alg.wedge(&va, &va).max_abs_diff(&Multivector::zero()) < EPS);
    }

    #[test]
    fn dual_round_trip(coeffs in coefficients(16)) {
        let alg = Algebra::from_counts(3, 1, 0).unwrap();
        let v: Multivector = coeffs.iter().copied().enumerate().collect();
        prop_assert_eq!(alg.undual(&alg.dual(&v)), v.clone());
        prop_assert_eq!(alg.dual(&alg.undual(&v)), v);
    }

    #[test]
    fn geometric_product_of_vectors_splits(a in coefficients(3), b in coefficients(3)) {
        let alg = Algebra::from_counts(3, 0, 0).unwrap();
        let va = alg.vector(&a).unwrap();
        let vb = alg.vector(&b).unwrap();
        let gp = alg.geometric_product(&va, &vb);
        let split = alg.add(&alg.scalar(alg.scalar_product(&va, &vb)), &alg.wedge(&va, &vb));
        prop_assert!(gp.max_abs_diff(&split) < EPS);
    }
}
