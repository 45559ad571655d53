//! Enumerating the kernels and co-kernels of a cover
//!
//! Run with: `cargo run --example kernels`

use factor_logic::{Cover, Literal};

fn main() {
    let l = Literal::positive;

    // F = ac + ad + bc + bd + e
    let f = Cover::new(
        5,
        &[
            vec![l(0), l(2)],
            vec![l(0), l(3)],
            vec![l(1), l(2)],
            vec![l(1), l(3)],
            vec![l(4)],
        ],
    )
    .expect("a fixed, valid cube list");

    println!("F = {}", f);
    println!();
    println!("kernels (with their co-kernels):");
    for (kernel, cokernels) in f.all_kernels() {
        println!("  {:<30} <- {}", kernel.to_string(), cokernels);
    }

    println!();
    println!("best kernel: {}", f.best_kernel());
}
