//! Multi-level factoring of covers
//!
//! The generic driver [`GenFactor`] turns a flattened cover into a
//! nested factored [`Expr`]. It is parameterised on two strategies:
//!
//! - a [`Divisor`] chooses a candidate divisor of the current cover
//!   (a level-0 kernel, the best kernel, anything);
//! - a [`Divide`] splits the cover by that divisor into a quotient and
//!   a remainder.
//!
//! Three instantiations are offered on [`Cover`] directly:
//!
//! | method | divisor | divide |
//! |---|---|---|
//! | [`Cover::quick_factor`] | [`OneLevel0Kernel`] | [`WeakDivision`] |
//! | [`Cover::good_factor`] | [`BestKernel`] | [`WeakDivision`] |
//! | [`Cover::bool_factor`] | [`BestKernel`] | [`BoolDivision`] |
//!
//! The recursion terminates because every non-degenerate step reduces
//! the cube count or the literal count of the active cover.
//!
//! # Examples
//!
//! ```
//! use factor_logic::{Cover, Literal};
//!
//! let a = Literal::positive(0);
//! let b = Literal::positive(1);
//! let c = Literal::positive(2);
//! let d = Literal::positive(3);
//!
//! // ac + ad + bc + bd
//! let f = Cover::new(4, &[
//!     vec![a, c],
//!     vec![a, d],
//!     vec![b, c],
//!     vec![b, d],
//! ])
//! .unwrap();
//!
//! let expr = f.quick_factor();
//! assert_eq!(expr.to_string(), "(v0 + v1) (v2 + v3)");
//! assert_eq!(expr.literal_num(), 4);
//! ```

mod divide;
mod divisor;
mod sink;

pub use divide::{BoolDivision, WeakDivision};
pub use divisor::{BestKernel, OneLevel0Kernel};

use tracing::trace;

use crate::cover::Cover;
use crate::expr::Expr;
use crate::literal::Literal;
use crate::tvfunc::{isop, TvFunc};

use sink::cover_to_expr;

/// Chooses a divisor for one factoring step
pub trait Divisor {
    /// A candidate divisor of `f`; an empty cover means "none found"
    fn divisor(&self, f: &Cover) -> Cover;
}

/// Splits a cover by a divisor
pub trait Divide {
    /// `(quotient, remainder)` of `f` with respect to `d`
    fn divide(&self, f: &Cover, d: &Cover) -> (Cover, Cover);
}

/// The generic factoring driver
///
/// See the module docs for the role of the two strategies. The driver
/// itself is stateless; one value can factor any number of covers.
pub struct GenFactor<D, V> {
    divisor: D,
    divide: V,
}

/// Quick factoring: level-0 kernels with weak division
pub type QuickFactor = GenFactor<OneLevel0Kernel, WeakDivision>;

/// Good factoring: best kernels with weak division
pub type GoodFactor = GenFactor<BestKernel, WeakDivision>;

/// Boolean factoring: best kernels with Boolean division
pub type BoolFactor = GenFactor<BestKernel, BoolDivision>;

impl<D: Divisor, V: Divide> GenFactor<D, V> {
    /// Assemble a driver from its two strategies
    pub fn new(divisor: D, divide: V) -> Self {
        GenFactor { divisor, divide }
    }

    /// Factor a cover into a nested expression
    pub fn factor(&self, f: &Cover) -> Expr {
        trace!(cubes = f.cube_num(), cover = %f, "factor");
        if f.cube_num() == 0 {
            return Expr::zero();
        }
        let d = self.divisor.divisor(f);
        if d.cube_num() == 0 {
            // nothing to divide by: emit the cover verbatim
            return cover_to_expr(f);
        }
        let (q, r) = self.divide.divide(f, &d);
        trace!(divisor = %d, quotient = %q, remainder = %r, "divide");
        if q.literal_num() == 0 {
            // the quotient degenerated to a constant
            return self.factor(&d) | self.factor(&r);
        }
        if q.cube_num() == 1 {
            let lits = q
                .get_cube(0)
                .expect("single-cube quotient")
                .literal_list();
            return self.literal_factor(f, &lits);
        }

        // retry the division against the cube-free quotient
        let cc = q.common_cube();
        let q1 = &q / &cc;
        let (d1, r1) = self.divide.divide(f, &q1);
        trace!(divisor = %q1, quotient = %d1, remainder = %r1, "re-divide");
        if d1.literal_num() == 0 {
            return self.factor(&q1) | self.factor(&r1);
        }
        let cc1 = d1.common_cube();
        if cc1.is_empty() {
            (self.factor(&q1) & self.factor(&d1)) | self.factor(&r1)
        } else {
            self.literal_factor(f, &cc1.literal_list())
        }
    }

    /// Factor `f` around the most frequent literal of the candidate set
    fn literal_factor(&self, f: &Cover, lits: &[Literal]) -> Expr {
        debug_assert!(!lits.is_empty());
        let mut best = lits[0];
        let mut max_n = f.literal_num_of(best);
        for &lit in &lits[1..] {
            let n = f.literal_num_of(lit);
            if n > max_n {
                max_n = n;
                best = lit;
            }
        }
        let q = f / best;
        let r = f - &(&q * best);
        (self.factor(&q) & Expr::literal(best)) | self.factor(&r)
    }
}

impl Cover {
    /// Factor with a level-0 kernel divisor and weak division
    ///
    /// The cheapest of the three factoring flavours: the divisor search
    /// takes the first level-0 kernel it can reach, without enumerating
    /// alternatives.
    pub fn quick_factor(&self) -> Expr {
        GenFactor::new(OneLevel0Kernel, WeakDivision).factor(self)
    }

    /// Factor with the best-kernel divisor and weak division
    ///
    /// Enumerates all kernels at every step and divides by the one the
    /// kernel evaluator scores highest. Slower than
    /// [`quick_factor`](Cover::quick_factor), usually fewer literals.
    pub fn good_factor(&self) -> Expr {
        GenFactor::new(BestKernel, WeakDivision).factor(self)
    }

    /// Factor with the best-kernel divisor and Boolean division
    ///
    /// The input is first re-expressed as an irredundant cover of its
    /// own truth function, then factored with [`BoolDivision`]. Truth
    /// functions are dense, so this flavour is meant for the moderate
    /// variable counts of netlist node functions; it panics beyond
    /// [`MAX_VAR`](crate::tvfunc::MAX_VAR) variables.
    pub fn bool_factor(&self) -> Expr {
        let func = TvFunc::from_cover(self);
        let cubes = isop(&func, &TvFunc::zero(self.variable_num()));
        let normalised = Cover::from_cubes(self.variable_num(), &cubes)
            .expect("isop cubes share the cover's variable space");
        GenFactor::new(BestKernel, BoolDivision).factor(&normalised)
    }
}
