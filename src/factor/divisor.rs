//! Divisor strategies for the factoring driver

use crate::cover::Cover;
use crate::literal::Literal;

use super::Divisor;

/// Finds one level-0 kernel by repeated division
///
/// Starting from any literal that occurs at least twice, divide, strip
/// the common cube, and repeat until no literal occurs twice any more.
/// What remains is a level-0 kernel (a kernel with no kernels of its
/// own except itself).
pub struct OneLevel0Kernel;

/// The first literal of `f` occurring in at least two cubes
fn find_literal(f: &Cover) -> Option<Literal> {
    for lits in f.literal_list() {
        for lit in lits {
            if f.literal_num_of(lit) >= 2 {
                return Some(lit);
            }
        }
    }
    None
}

impl Divisor for OneLevel0Kernel {
    fn divisor(&self, f: &Cover) -> Cover {
        if f.cube_num() < 2 {
            // nothing left to divide
            return Cover::empty(f.variable_num());
        }
        let Some(mut lit) = find_literal(f) else {
            return Cover::empty(f.variable_num());
        };
        let mut f1 = f.clone();
        loop {
            f1 /= lit;
            let cc = f1.common_cube();
            f1 /= &cc;
            match find_literal(&f1) {
                Some(next) => lit = next,
                None => break,
            }
        }
        f1
    }
}

/// Divides by the kernel the evaluator scores highest
///
/// Runs the full kernel enumeration of [`Cover::all_kernels`] underneath
/// and picks the winner under the default evaluator; see
/// [`Cover::best_kernel`].
pub struct BestKernel;

impl Divisor for BestKernel {
    fn divisor(&self, f: &Cover) -> Cover {
        f.best_kernel()
    }
}
