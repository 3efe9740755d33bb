// tests/conformal_tests.rs
//
// 2D conformal model: the null pair {eo, ei} declared as a basis change of
// the Minkowski algebra R(3,1).

use std::sync::Arc;

use ga_algebra::prelude::*;

const EPS: f64 = 1e-12;

fn minkowski() -> Arc<Algebra> {
    Arc::new(Algebra::from_counts(3, 1, 0).unwrap())
}

fn null_basis() -> Signature {
    Signature::new(vec![
        BasisVector::new(Square::Positive, "1"),
        BasisVector::new(Square::Positive, "2"),
        BasisVector::new(Square::Null, "o"),
        BasisVector::new(Square::Null, "i"),
    ])
    .unwrap()
}

fn null_transform() -> Matrix {
    Matrix::from_rows(vec![
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0, 0.0],
        vec![0.0, 0.0, -0.5, 1.0],
        vec![0.0, 0.0, 0.5, 1.0],
    ])
    .unwrap()
}

fn cga() -> Algebra {
    Algebra::from_basis_spec_with_parent(null_basis(), minkowski(), null_transform()).unwrap()
}

/// Conformal embedding of a Euclidean point (x, y).
fn point(alg: &Algebra, x: f64, y: f64) -> Multivector {
    let half_sq = 0.5 * (x * x + y * y);
    alg.multivector(&[("e1", x), ("e2", y), ("ei", half_sq), ("eo", 1.0)])
        .unwrap()
}

#[test]
fn grade_one_metric_has_the_null_pair() {
    let alg = cga();
    let g = alg.metric(1).unwrap();
    let expected = [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, -1.0],
        [0.0, 0.0, -1.0, 0.0],
    ];
    for (r, row) in expected.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            assert!((g.get(r, c) - v).abs() < EPS, "G1[{r}][{c}] = {}", g.get(r, c));
        }
    }
    assert!(g.is_symmetric());
}

#[test]
fn origin_infinity_bivector_metric() {
    let alg = cga();
    let idx = alg.blade_index("eoi").unwrap() - alg.basis().grade_range(2).start;
    assert!((alg.metric(2).unwrap().get(idx, idx) + 1.0).abs() < EPS);

    let eoi = alg.blade("eoi").unwrap();
    let in_parent = alg.to_parent(&eoi);
    let parent = alg.parent().unwrap();
    assert_eq!(parent.to_labeled(&in_parent), vec![("e34", -1.0)]);
    assert!((parent.norm_squared(&in_parent) - alg.metric_inner(&eoi, &eoi)).abs() < EPS);
}

#[test]
fn every_grade_metric_is_symmetric() {
    let alg = cga();
    for k in 0..=alg.dimension() {
        assert!(alg.metric(k).unwrap().is_symmetric(), "grade {k}");
    }
    assert_eq!(alg.metric(4).unwrap().rows(), 1);
}

#[test]
fn embedded_points_are_null() {
    let alg = cga();
    let parent = alg.parent().unwrap();
    for (x, y) in [(1.0, 0.0), (0.0, 1.0), (-3.0, 2.5), (0.0, 0.0)] {
        let p = point(&alg, x, y);
        assert!(alg.metric_inner(&p, &p).abs() < EPS);
        assert!(parent.norm_squared(&alg.to_parent(&p)).abs() < EPS);
    }
}

#[test]
fn point_inner_product_is_half_squared_distance() {
    let alg = cga();
    let a = point(&alg, 1.0, 0.0);
    let c = point(&alg, -1.0, 0.0);
    assert!((alg.metric_inner(&a, &c) + 2.0).abs() < EPS);
}

#[test]
fn three_points_span_a_circle() {
    let alg = cga();
    let a = point(&alg, 1.0, 0.0);
    let b = point(&alg, 0.0, 1.0);
    let c = point(&alg, -1.0, 0.0);
    let circle = alg.wedge(&alg.wedge(&a, &b), &c);
    assert!(!circle.is_zero());
    assert_eq!(alg.grades(&circle), vec![3]);
}

#[test]
fn fourth_point_on_the_circle_is_incident() {
    let alg = cga();
    let circle = alg.wedge(
        &alg.wedge(&point(&alg, 1.0, 0.0), &point(&alg, 0.0, 1.0)),
        &point(&alg, -1.0, 0.0),
    );
    let on = alg.wedge(&circle, &point(&alg, 0.0, -1.0));
    assert!(on.iter().all(|(_, c)| c.abs() < EPS), "{on:?}");

    let off = alg.wedge(&circle, &point(&alg, 2.0, 0.0));
    assert!(off.iter().any(|(_, c)| c.abs() > 0.5));
}

#[test]
fn pulled_back_metric_matches_parent() {
    let alg = cga();
    let parent = alg.parent().unwrap();
    let v: Multivector = (0..alg.basis().len())
        .map(|i| (i, ((i * 7) % 5) as f64 - 2.0))
        .collect();
    let w = alg.to_parent(&v);
    assert!((alg.metric_inner(&v, &v) - parent.metric_inner(&w, &w)).abs() < 1e-9);
}

#[test]
fn identity_transform_reproduces_parent() {
    let parent = Arc::new(Algebra::from_counts(2, 1, 0).unwrap());
    let child = Algebra::from_basis_spec_with_parent(
        parent.signature().clone(),
        Arc::clone(&parent),
        Matrix::identity(3),
    )
    .unwrap();
    for k in 0..=3 {
        assert_eq!(child.metric(k).unwrap(), parent.metric(k).unwrap());
        assert_eq!(child.transform(k).unwrap(), &Matrix::identity(parent.basis().grade_range(k).len()));
    }
}

#[test]
fn child_of_lower_dimension() {
    // the plane e1,e2 rotated by 45 degrees, inside R(3,0)
    let parent = Arc::new(Algebra::from_counts(3, 0, 0).unwrap());
    let h = std::f64::consts::FRAC_1_SQRT_2;
    let m = Matrix::from_rows(vec![vec![h, -h], vec![h, h], vec![0.0, 0.0]]).unwrap();
    let child = Algebra::from_basis_spec_with_parent(
        Signature::from_counts(2, 0, 0).unwrap(),
        parent,
        m,
    )
    .unwrap();
    let g1 = child.metric(1).unwrap();
    assert!((g1.get(0, 0) - 1.0).abs() < EPS);
    assert!(g1.get(0, 1).abs() < EPS);
    assert!((child.metric(2).unwrap().get(0, 0) - 1.0).abs() < EPS);
    assert_eq!(child.transform(2).unwrap().rows(), 3);
}

#[test]
fn transform_validation() {
    let parent = minkowski();
    assert_eq!(
        Algebra::from_basis_spec_with_parent(null_basis(), Arc::clone(&parent), Matrix::identity(3))
            .unwrap_err(),
        ConstructionError::TransformShape {
            rows: 3,
            cols: 3,
            expected_rows: 4,
            expected_cols: 4
        }
    );

    let mut bad = null_transform();
    bad.set(2, 3, f64::NAN);
    assert_eq!(
        Algebra::from_basis_spec_with_parent(null_basis(), Arc::clone(&parent), bad).unwrap_err(),
        ConstructionError::NonFiniteTransform { row: 2, col: 3 }
    );

    let too_big = Signature::from_counts(5, 0, 0).unwrap();
    assert_eq!(
        Algebra::from_basis_spec_with_parent(too_big, parent, Matrix::zeros(4, 5)).unwrap_err(),
        ConstructionError::ChildExceedsParent { child: 5, parent: 4 }
    );
}

#[test]
fn child_tables_follow_declared_squares() {
    let alg = cga();
    let eo = alg.blade("eo").unwrap();
    assert!(alg.geometric_product(&eo, &eo).is_zero());
    assert_eq!(
        alg.blade_labels(),
        vec![
            "e", "e1", "e2", "eo", "ei", "e12", "e1o", "e1i", "e2o", "e2i", "eoi", "e12o", "e12i",
            "e1oi", "e2oi", "e12oi"
        ]
    );
}
