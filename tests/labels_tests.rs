// tests/labels_tests.rs

use ga_algebra::prelude::*;

fn custom() -> Algebra {
    Algebra::from_basis_spec(
        Signature::new(vec![
            BasisVector::new(Square::Positive, "x"),
            BasisVector::new(Square::Positive, "y"),
            BasisVector::new(Square::Positive, "z"),
            BasisVector::new(Square::Null, "inf"),
        ])
        .unwrap(),
    )
    .unwrap()
}

#[test]
fn every_label_round_trips() {
    for alg in [Algebra::from_counts(3, 1, 1).unwrap(), custom()] {
        for (i, name) in alg.blade_labels().into_iter().enumerate() {
            let b = alg.blade(name).unwrap();
            assert_eq!(alg.to_labeled(&b), vec![(name, 1.0)]);
            assert_eq!(alg.parse_blade(name), Ok((i, 1.0)));
            assert_eq!(alg.label(i), name);
        }
    }
}

#[test]
fn labeled_multivector_round_trips() {
    let alg = custom();
    let terms = [("e", 0.5), ("ey", -2.0), ("exz", 3.0), ("exyzinf", 1.25)];
    let v = alg.multivector(&terms).unwrap();
    assert_eq!(alg.to_labeled(&v), terms.to_vec());
}

#[test]
fn permuted_names_carry_their_sign() {
    let alg = custom();
    assert_eq!(alg.parse_blade("ezx"), Ok((alg.blade_index("exz").unwrap(), -1.0)));
    assert_eq!(alg.parse_blade("einfx"), Ok((alg.blade_index("exinf").unwrap(), -1.0)));
    assert_eq!(alg.parse_blade("eyzx"), Ok((alg.blade_index("exyz").unwrap(), 1.0)));

    let v = alg.multivector(&[("exy", 1.0), ("eyx", 1.0)]).unwrap();
    assert!(v.is_zero());
}

#[test]
fn parse_errors() {
    let alg = custom();
    assert_eq!(
        alg.parse_blade("exw"),
        Err(ParseError::UnknownSubscript {
            name: "exw".into(),
            remainder: "w".into()
        })
    );
    assert_eq!(
        alg.parse_blade("exx"),
        Err(ParseError::RepeatedVector {
            name: "exx".into(),
            label: "x".into()
        })
    );
    assert_eq!(
        alg.parse_blade("xy"),
        Err(ParseError::MissingPrefix { name: "xy".into() })
    );
    assert!(matches!(
        alg.multivector(&[("ex", 1.0), ("eq", 2.0)]),
        Err(Error::Parse(ParseError::UnknownSubscript { .. }))
    ));
}

#[test]
fn lookup_is_exact() {
    let alg = custom();
    assert_eq!(
        alg.blade("eyx"),
        Err(LookupError::UnknownBlade("eyx".into()))
    );
    assert!(alg.blade_index("exy").is_ok());
}

#[test]
fn colliding_blade_names_are_rejected() {
    let err = Signature::new(vec![
        BasisVector::new(Square::Positive, "a"),
        BasisVector::new(Square::Positive, "b"),
        BasisVector::new(Square::Positive, "ab"),
    ])
    .unwrap_err();
    assert_eq!(err, ConstructionError::AmbiguousBladeName { name: "eab".into() });

    assert_eq!(
        Signature::new(vec![BasisVector::new(Square::Positive, "")]).unwrap_err(),
        ConstructionError::EmptyLabel { position: 0 }
    );
}

#[test]
fn scalar_vector_pseudoscalar_helpers() {
    let alg = custom();
    assert_eq!(alg.to_labeled(&alg.scalar(3.0)), vec![("e", 3.0)]);
    assert_eq!(alg.to_labeled(&alg.pseudoscalar()), vec![("exyzinf", 1.0)]);
    let v = alg.vector(&[1.0, 0.0, 2.0, -1.0]).unwrap();
    assert_eq!(
        alg.to_labeled(&v),
        vec![("ex", 1.0), ("ez", 2.0), ("einf", -1.0)]
    );
    let biv = alg
        .from_grade_coefficients(2, &[1.0, 0.0, 0.0, 0.0, 0.0, 4.0])
        .unwrap();
    assert_eq!(alg.to_labeled(&biv), vec![("exy", 1.0), ("ezinf", 4.0)]);
}
