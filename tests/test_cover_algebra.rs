//! Cover algebra through the public API

use factor_logic::{Cover, CoverError, Cube, Literal};

fn lit(var: usize) -> Literal {
    Literal::positive(var)
}

/// The eight named variables of the classic examples
fn vars() -> [Literal; 8] {
    [
        lit(0),
        lit(1),
        lit(2),
        lit(3),
        lit(4),
        lit(5),
        lit(6),
        lit(7),
    ]
}

#[test]
fn sum_keeps_both_cubes_in_descending_order() {
    let [a, b, ..] = vars();
    let f = Cover::new(8, &[vec![a], vec![a, b]]).unwrap();
    let g = Cover::new(8, &[vec![a, b]]).unwrap();

    let sum = &f + &g;
    assert_eq!(sum.cube_num(), 2);
    // ab sorts before a under the descending canonical order
    assert_eq!(sum.literal_list(), vec![vec![a, b], vec![a]]);
}

#[test]
fn product_of_two_sums() {
    let [a, b, c, d, ..] = vars();
    let left = Cover::new(8, &[vec![a], vec![b]]).unwrap();
    let right = Cover::new(8, &[vec![c], vec![d]]).unwrap();

    let prod = &left * &right;
    assert_eq!(prod.cube_num(), 4);
    assert_eq!(prod.to_string(), "v0 v2 + v0 v3 + v1 v2 + v1 v3");
}

#[test]
fn algebraic_division_inverts_the_product() {
    let [a, b, c, d, ..] = vars();
    let ab = Cover::new(8, &[vec![a], vec![b]]).unwrap();
    let cd = Cover::new(8, &[vec![c], vec![d]]).unwrap();
    let prod = &ab * &cd;

    assert_eq!(&prod / &cd, ab);
    assert_eq!(&prod / &ab, cd);
}

#[test]
fn identity_and_absorption_laws() {
    let [a, b, c, ..] = vars();
    let f = Cover::new(8, &[vec![a, b], vec![c]]).unwrap();
    let zero = Cover::empty(8);
    let one = Cover::new(8, &[vec![]]).unwrap();

    // A + 0 = A
    assert_eq!(&f + &zero, f);
    // A * 1 = A
    assert_eq!(&f * &one, f);
    // A + A = A
    assert_eq!(&f + &f, f);
    // A - A = 0
    assert!((&f - &f).is_empty());
}

#[test]
fn commutativity_and_associativity() {
    let [a, b, c, d, e, ..] = vars();
    let f = Cover::new(8, &[vec![a, b], vec![c]]).unwrap();
    let g = Cover::new(8, &[vec![b], vec![d]]).unwrap();
    let h = Cover::new(8, &[vec![e], vec![a]]).unwrap();

    assert_eq!(&f + &g, &g + &f);
    assert_eq!(&f * &g, &g * &f);
    assert_eq!(&(&f + &g) + &h, &f + &(&g + &h));
    assert_eq!(&(&f * &g) * &h, &f * &(&g * &h));
}

#[test]
fn distributivity_after_canonicalisation() {
    let [a, b, c, d, ..] = vars();
    let f = Cover::new(8, &[vec![a]]).unwrap();
    let g = Cover::new(8, &[vec![b], vec![c]]).unwrap();
    let h = Cover::new(8, &[vec![d], vec![b]]).unwrap();

    let left = &f * &(&g + &h);
    let right = &(&f * &g) + &(&f * &h);
    assert_eq!(left, right);
}

#[test]
fn division_laws() {
    let [a, b, c, d, e, ..] = vars();
    let f = Cover::new(8, &[vec![a], vec![b, e]]).unwrap();
    let d_cover = Cover::new(8, &[vec![c], vec![d]]).unwrap();

    // algdiv(A D, D) recovers at least A
    let quotient = &(&f * &d_cover) / &d_cover;
    let diff = &f - &quotient;
    assert!(diff.is_empty(), "quotient lost cubes of A");

    // (A - D) + (A intersect D) = A, as cube sets
    let g = Cover::new(8, &[vec![a], vec![c, d]]).unwrap();
    let inter = &g - &(&g - &f);
    assert_eq!(&(&g - &f) + &inter, g);
}

#[test]
fn cube_and_literal_operands() {
    let [a, b, c, ..] = vars();
    let f = Cover::new(8, &[vec![a, b], vec![b, c]]).unwrap();
    let cube_b = Cube::new(8, &[b]).unwrap();

    assert_eq!((&f / &cube_b).to_string(), "v0 + v2");
    assert_eq!((&f / b).to_string(), "v0 + v2");
    assert_eq!(&(&f / b) * b, f);

    // subtracting a cube removes exactly that cube
    let ab = Cube::new(8, &[a, b]).unwrap();
    assert_eq!((&f - &ab).to_string(), "v1 v2");
    assert_eq!((&f + &ab), f);
}

#[test]
fn common_cube_of_a_cover() {
    let [a, b, c, d, ..] = vars();
    let f = Cover::new(8, &[vec![a, b, c], vec![a, b, d]]).unwrap();
    assert_eq!(f.common_cube().literal_list(), vec![a, b]);

    let g = Cover::new(8, &[vec![a], vec![b]]).unwrap();
    assert!(g.common_cube().is_empty());
}

#[test]
fn shape_errors_are_reported_with_values() {
    let f = Cover::empty(4);
    let g = Cover::empty(6);
    match f.checked_sum(&g) {
        Err(CoverError::VariableNumMismatch { left, right }) => {
            assert_eq!((left, right), (4, 6));
        }
        other => panic!("expected a shape error, got {:?}", other),
    }
}

#[test]
fn determinism_word_for_word() {
    let [a, b, c, d, ..] = vars();
    let f = Cover::new(8, &[vec![a], vec![b], vec![c, d]]).unwrap();
    let g = Cover::new(8, &[vec![c], vec![d, a]]).unwrap();

    let p1 = &f * &g;
    let p2 = &f * &g;
    assert_eq!(p1, p2);
    assert_eq!(p1.hash_code(), p2.hash_code());
    assert_eq!(
        p1.partial_cmp(&p2),
        Some(std::cmp::Ordering::Equal)
    );
}
