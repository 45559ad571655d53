//! Division strategies for the factoring driver

use tracing::trace;

use crate::cover::Cover;
use crate::tvfunc::{isop, TvFunc};

use super::Divide;

/// Weak (algebraic) division
///
/// The quotient is the algebraic quotient, the remainder the cubes of
/// `f` not reproduced by `q * d`. Purely structural: no Boolean
/// reasoning, no don't-cares.
pub struct WeakDivision;

impl Divide for WeakDivision {
    fn divide(&self, f: &Cover, d: &Cover) -> (Cover, Cover) {
        let q = f / d;
        let r = f - &(&q * d);
        (q, r)
    }
}

/// Boolean division through an SOP generator with don't-cares
///
/// Computes the quotient as an irredundant cover of `f` with `NOT d`
/// as don't-care, then the remainder as a cover of `f` with `d AND q`
/// as don't-care. When weak division would produce a result with no
/// more literals, its answer is returned instead.
///
/// Truth functions are dense, so this strategy carries the same
/// variable-count bound as [`TvFunc`].
pub struct BoolDivision;

fn total_literals(q: &Cover, d: &Cover, r: &Cover) -> usize {
    q.literal_num() + d.literal_num() + r.literal_num()
}

impl Divide for BoolDivision {
    fn divide(&self, f: &Cover, d: &Cover) -> (Cover, Cover) {
        let var_num = f.variable_num();
        let f_func = TvFunc::from_cover(f);
        let d_func = TvFunc::from_cover(d);

        // quotient: cover f, don't care outside d
        let q_cubes = isop(&f_func, &!&d_func);
        let q_func = TvFunc::from_cubes(var_num, &q_cubes);
        // remainder: cover f, don't care where d q already holds
        let r_cubes = isop(&f_func, &(&d_func & &q_func));

        let q = Cover::from_cubes(var_num, &q_cubes)
            .expect("isop cubes share the dividend's variable space");
        let r = Cover::from_cubes(var_num, &r_cubes)
            .expect("isop cubes share the dividend's variable space");

        // keep the weak-division answer when it is no worse
        let (q1, r1) = WeakDivision.divide(f, d);
        if q1.cube_num() > 0 && total_literals(&q, d, &r) > total_literals(&q1, d, &r1) {
            trace!(quotient = %q1, remainder = %r1, "boolean division fell back to weak division");
            return (q1, r1);
        }
        (q, r)
    }
}
