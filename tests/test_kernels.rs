//! Kernel enumeration fixtures
//!
//! The expected kernel lists are rendered as strings: the kernel, a
//! `|` separator, then the co-kernel cover, both in the default `v<N>`
//! notation.

use factor_logic::{Cover, Literal};

fn lit(var: usize) -> Literal {
    Literal::positive(var)
}

fn render(kernels: &[(Cover, Cover)]) -> Vec<String> {
    kernels
        .iter()
        .map(|(k, c)| format!("{}| {}", k, c))
        .collect()
}

#[test]
fn one_kernel() {
    // v0 v2 + v1 v2
    let cover = Cover::new(10, &[vec![lit(0), lit(2)], vec![lit(1), lit(2)]]).unwrap();
    assert_eq!(render(&cover.all_kernels()), vec!["v0 + v1| v2"]);
}

#[test]
fn kernels_of_a_two_by_two_product() {
    // v0 v2 + v1 v2 + v0 v3 + v1 v3
    let cover = Cover::new(
        10,
        &[
            vec![lit(0), lit(2)],
            vec![lit(1), lit(2)],
            vec![lit(0), lit(3)],
            vec![lit(1), lit(3)],
        ],
    )
    .unwrap();
    assert_eq!(
        render(&cover.all_kernels()),
        vec![
            "v2 + v3| v0 + v1",
            "v0 + v1| v2 + v3",
            "v0 v2 + v0 v3 + v1 v2 + v1 v3| {}",
        ]
    );
}

#[test]
fn kernels_of_the_eight_cube_cover() {
    // F = adf + aef + bdf + bef + cdf + cef + bfg + h
    // with a=v0, b=v1, c=v2, d=v3, e=v4, f=v5, g=v6, h=v7
    let cover = Cover::new(
        8,
        &[
            vec![lit(0), lit(3), lit(5)],
            vec![lit(0), lit(4), lit(5)],
            vec![lit(1), lit(3), lit(5)],
            vec![lit(1), lit(4), lit(5)],
            vec![lit(2), lit(3), lit(5)],
            vec![lit(2), lit(4), lit(5)],
            vec![lit(1), lit(5), lit(6)],
            vec![lit(7)],
        ],
    )
    .unwrap();

    assert_eq!(
        render(&cover.all_kernels()),
        vec![
            // d + e, from the co-kernels af and cf
            "v3 + v4| v0 v5 + v2 v5",
            // d + e + g, from bf
            "v3 + v4 + v6| v1 v5",
            // a + b + c, from df and ef
            "v0 + v1 + v2| v3 v5 + v4 v5",
            // the level-1 kernel F / f
            "v0 v3 + v0 v4 + v1 v3 + v1 v4 + v1 v6 + v2 v3 + v2 v4| v5",
            // F is cube-free, so it is its own kernel with co-kernel 1
            "v0 v3 v5 + v0 v4 v5 + v1 v3 v5 + v1 v4 v5 + v1 v5 v6 + v2 v3 v5 + v2 v4 v5 + v7| {}",
        ]
    );
}

#[test]
fn kernel_soundness_properties() {
    let cover = Cover::new(
        8,
        &[
            vec![lit(0), lit(3), lit(5)],
            vec![lit(0), lit(4), lit(5)],
            vec![lit(1), lit(3), lit(5)],
            vec![lit(1), lit(4), lit(5)],
            vec![lit(2), lit(3), lit(5)],
            vec![lit(2), lit(4), lit(5)],
            vec![lit(1), lit(5), lit(6)],
            vec![lit(7)],
        ],
    )
    .unwrap();

    for (kernel, cokernels) in cover.all_kernels() {
        // every kernel is cube-free with at least two cubes
        assert!(kernel.common_cube().is_empty(), "kernel {} not cube-free", kernel);
        assert!(kernel.cube_num() >= 2);
        assert!(cokernels.cube_num() >= 1);

        // dividing the cover by each co-kernel reproduces the kernel
        for cokernel in cokernels.cubes() {
            let quotient = &cover / &cokernel;
            let stripped = &quotient / &quotient.common_cube();
            assert_eq!(
                stripped, kernel,
                "co-kernel {} does not reproduce kernel {}",
                cokernel, kernel
            );
        }
    }
}

#[test]
fn kernels_of_the_seven_cube_cover() {
    // F = af + bf + ag + cg + ade + bde + cde
    let a = lit(0);
    let b = lit(1);
    let c = lit(2);
    let d = lit(3);
    let e = lit(4);
    let f = lit(5);
    let g = lit(6);

    let cover = Cover::new(
        7,
        &[
            vec![a, f],
            vec![b, f],
            vec![a, g],
            vec![c, g],
            vec![a, d, e],
            vec![b, d, e],
            vec![c, d, e],
        ],
    )
    .unwrap();

    assert_eq!(
        render(&cover.all_kernels()),
        vec![
            "v3 v4 + v6| v2",
            "v3 v4 + v5| v1",
            "v3 v4 + v5 + v6| v0",
            "v0 + v2| v6",
            "v0 + v1| v5",
            "v0 + v1 + v2| v3 v4",
            "v0 v3 v4 + v0 v5 + v0 v6 + v1 v3 v4 + v1 v5 + v2 v3 v4 + v2 v6| {}",
        ]
    );
}

#[test]
fn empty_input_is_a_degenerate_case_not_an_error() {
    let empty = Cover::empty(10);
    assert!(empty.all_kernels().is_empty());
    assert!(empty.best_kernel().is_empty());
}

#[test]
fn best_kernel_of_the_eight_cube_cover() {
    let cover = Cover::new(
        8,
        &[
            vec![lit(0), lit(3), lit(5)],
            vec![lit(0), lit(4), lit(5)],
            vec![lit(1), lit(3), lit(5)],
            vec![lit(1), lit(4), lit(5)],
            vec![lit(2), lit(3), lit(5)],
            vec![lit(2), lit(4), lit(5)],
            vec![lit(1), lit(5), lit(6)],
            vec![lit(7)],
        ],
    )
    .unwrap();

    // a + b + c scores (3-1)*4 + (2-1)*3 = 11, the highest value
    assert_eq!(cover.best_kernel().to_string(), "v0 + v1 + v2");

    // a custom evaluator can prefer small kernels instead
    let smallest = cover.best_kernel_with(|k, _| -(k.literal_num() as i64));
    assert_eq!(smallest.to_string(), "v3 + v4");
}
