//! Kernel and co-kernel enumeration
//!
//! A **kernel** of a cover `F` is a cube-free cover of at least two
//! cubes obtained by dividing `F` by some cube and stripping the common
//! cube of the quotient; the dividing cube is the **co-kernel**. Kernels
//! are the candidate divisors of the factoring machinery: every
//! multiple-cube common divisor of a cover hides inside one of its
//! kernels.
//!
//! The enumeration is the classical recursion over literals of rising
//! frequency. Each recursion step divides by one literal, makes the
//! quotient cube-free, and prunes sub-problems whose common cube touches
//! a literal that was already factored out (those were reached earlier
//! through that literal).
//!
//! # Examples
//!
//! ```
//! use factor_logic::{Cover, Literal};
//!
//! let a = Literal::positive(0);
//! let b = Literal::positive(1);
//! let c = Literal::positive(2);
//!
//! // F = ac + bc
//! let f = Cover::new(3, &[vec![a, c], vec![b, c]]).unwrap();
//! let kernels = f.all_kernels();
//! assert_eq!(kernels.len(), 1);
//! assert_eq!(kernels[0].0.to_string(), "v0 + v1"); // kernel a + b
//! assert_eq!(kernels[0].1.to_string(), "v2");      // co-kernel c
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::cover::Cover;
use crate::cube::Cube;
use crate::literal::Literal;
use crate::litset::LitSet;

impl Cover {
    /// Enumerate all kernels with their co-kernel covers
    ///
    /// Each kernel appears once, paired with the cover accumulating
    /// every co-kernel cube that produces it. The list is sorted
    /// ascending by the canonical cover order, so the result is a pure
    /// function of the input. A cover whose common cube is empty is its
    /// own kernel, with the empty cube as co-kernel.
    pub fn all_kernels(&self) -> Vec<(Cover, Cover)> {
        KernelGen::new().all_kernels(self)
    }

    /// The kernel scoring best under the default evaluator
    ///
    /// The default value of a kernel `K` with co-kernel cover `C` is
    /// `(|K| - 1) * lits(C) + (|C| - 1) * lits(K)`, the literal count
    /// saved by extracting `K`. Returns an empty cover when the input
    /// has no useful kernel (fewer than two cubes, or only itself).
    pub fn best_kernel(&self) -> Cover {
        KernelGen::new().best_kernel(self, default_eval)
    }

    /// The kernel scoring best under a caller-supplied evaluator
    ///
    /// The evaluator sees each kernel and its co-kernel cover; the
    /// kernel with the strictly greatest value wins, with ties broken
    /// towards the smaller kernel in canonical order.
    pub fn best_kernel_with<F>(&self, eval: F) -> Cover
    where
        F: Fn(&Cover, &Cover) -> i64,
    {
        KernelGen::new().best_kernel(self, eval)
    }
}

/// The default kernel evaluator
fn default_eval(kernel: &Cover, cokernels: &Cover) -> i64 {
    let k_nc = kernel.cube_num() as i64;
    let k_nl = kernel.literal_num() as i64;
    let c_nc = cokernels.cube_num() as i64;
    let c_nl = cokernels.literal_num() as i64;
    (k_nc - 1) * c_nl + (c_nc - 1) * k_nl
}

/// One kernel-enumeration run
///
/// Collects kernels in a hash table keyed by the canonical kernel cover;
/// the table value accumulates the co-kernel cubes as a cover.
struct KernelGen {
    dict: HashMap<Cover, Cover>,
}

impl KernelGen {
    fn new() -> Self {
        KernelGen {
            dict: HashMap::new(),
        }
    }

    fn all_kernels(mut self, cover: &Cover) -> Vec<(Cover, Cover)> {
        self.generate(cover);
        let mut list: Vec<(Cover, Cover)> = self.dict.drain().collect();
        list.sort_by(|a, b| a.0.compare_same_space(&b.0));
        list
    }

    fn best_kernel<F>(mut self, cover: &Cover, eval: F) -> Cover
    where
        F: Fn(&Cover, &Cover) -> i64,
    {
        // a single cube cannot be divided any further
        if cover.cube_num() <= 1 {
            return Cover::empty(cover.variable_num());
        }

        self.generate(cover);

        // a cover that is its own only kernel has nothing to offer either
        if self.dict.len() == 1 {
            if let Some(cokernels) = self.dict.values().next() {
                if cokernels.cube_num() == 1 && cokernels.literal_num() == 0 {
                    return Cover::empty(cover.variable_num());
                }
            }
        }

        let mut list: Vec<(Cover, Cover)> = self.dict.drain().collect();
        list.sort_by(|a, b| a.0.compare_same_space(&b.0));

        let mut best: Option<(i64, Cover)> = None;
        for (kernel, cokernels) in list {
            let value = eval(&kernel, &cokernels);
            if best.as_ref().map_or(true, |(max, _)| value > *max) {
                best = Some((value, kernel));
            }
        }
        match best {
            Some((_, kernel)) => kernel,
            None => Cover::empty(cover.variable_num()),
        }
    }

    /// Run the recursion and fill the kernel table
    fn generate(&mut self, cover: &Cover) {
        debug!(
            cubes = cover.cube_num(),
            literals = cover.literal_num(),
            "enumerating kernels"
        );
        let lits = frequent_literals(cover);
        self.dict.clear();

        let ccube = Cube::empty(cover.variable_num());
        let plits = LitSet::new(cover.variable_num());
        self.kern_sub(cover, &lits, 0, &ccube, &plits);

        // the cover itself is a kernel when it is already cube-free
        let cc = cover.common_cube();
        if cc.is_empty() {
            self.add(cover.clone(), cc);
        }
    }

    /// The recursive kernel search over `lits[start..]`
    ///
    /// `ccube` is the co-kernel cube accumulated so far, `plits` the
    /// literals already factored out on this path.
    fn kern_sub(&mut self, cover: &Cover, lits: &[Literal], start: usize, ccube: &Cube, plits: &LitSet) {
        let mut plits1 = plits.clone();
        for p in start..lits.len() {
            let lit = lits[p];

            // the frequency may have dropped below two inside the recursion
            if cover.literal_num_of(lit) <= 1 {
                continue;
            }

            let mut cover1 = cover / lit;
            let ccube1 = cover1.common_cube();
            if plits1.intersects_cube(&ccube1) {
                // this sub-problem was already reached through an
                // earlier literal
                continue;
            }

            // make the quotient cube-free
            cover1 /= &ccube1;

            // the cube that produced it: ccube * ccube1 * lit
            let cokernel = ccube1
                .product(ccube)
                .and_then(|c| c.product_literal(lit))
                .expect("co-kernel literals never conflict");

            plits1.add(lit);
            self.kern_sub(&cover1, lits, p + 1, &cokernel, &plits1);

            trace!(literal = %lit, kernel = %cover1, cokernel = %cokernel, "kernel found");
            self.add(cover1, cokernel);
        }
    }

    /// Record one (kernel, co-kernel) pair
    fn add(&mut self, kernel: Cover, cokernel: Cube) {
        match self.dict.entry(kernel) {
            Entry::Occupied(mut e) => {
                *e.get_mut() += &cokernel;
            }
            Entry::Vacant(e) => {
                e.insert(Cover::from_cube(cokernel));
            }
        }
    }
}

/// Literals occurring at least twice, ascending by occurrence count
///
/// Ties keep variable order, so the recursion is deterministic.
fn frequent_literals(cover: &Cover) -> Vec<Literal> {
    let mut counted: Vec<(usize, Literal)> = Vec::new();
    for var in 0..cover.variable_num() {
        for lit in [Literal::positive(var), Literal::negative(var)] {
            let n = cover.literal_num_of(lit);
            if n >= 2 {
                counted.push((n, lit));
            }
        }
    }
    counted.sort_by_key(|&(n, _)| n);
    counted.into_iter().map(|(_, lit)| lit).collect()
}
