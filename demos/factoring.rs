//! Factoring a flat sum-of-products into a nested expression
//!
//! Run with: `cargo run --example factoring`

use factor_logic::{Cover, Literal};

fn main() {
    // Named variables for readable output
    let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let l = Literal::positive;

    // F = adf + aef + bdf + bef + cdf + cef + bfg + h
    let f = Cover::new(
        8,
        &[
            vec![l(0), l(3), l(5)],
            vec![l(0), l(4), l(5)],
            vec![l(1), l(3), l(5)],
            vec![l(1), l(4), l(5)],
            vec![l(2), l(3), l(5)],
            vec![l(2), l(4), l(5)],
            vec![l(1), l(5), l(6)],
            vec![l(7)],
        ],
    )
    .expect("a fixed, valid cube list");

    let mut rendered = Vec::new();
    f.print(&mut rendered, &names).expect("writing to a Vec");
    println!("flat form      ({:2} literals): {}", f.literal_num(), String::from_utf8(rendered).unwrap());

    let quick = f.quick_factor();
    println!("quick_factor   ({:2} literals): {}", quick.literal_num(), quick);

    let good = f.good_factor();
    println!("good_factor    ({:2} literals): {}", good.literal_num(), good);

    let boolean = f.bool_factor();
    println!("bool_factor    ({:2} literals): {}", boolean.literal_num(), boolean);
}
