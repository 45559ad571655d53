//! Literal sets for pruning the kernel recursion
//!
//! A [`LitSet`] uses the same packed word layout as a cube but, unlike a
//! cube, may hold both polarities of a variable at once. It only exists
//! to answer "was one of these literals already factored out" inside the
//! kernel enumeration and never appears in public APIs.

use crate::bitpack::{self, PatWord};
use crate::cube::Cube;
use crate::literal::Literal;

/// A set of literals, possibly with both polarities of one variable
#[derive(Debug, Clone)]
pub(crate) struct LitSet {
    chunk: Vec<PatWord>,
}

impl LitSet {
    /// The empty set over `var_num` variables
    pub(crate) fn new(var_num: usize) -> Self {
        LitSet {
            chunk: vec![0; bitpack::cube_size(var_num)],
        }
    }

    /// Add one literal
    pub(crate) fn add(&mut self, lit: Literal) {
        let (blk, mask) = bitpack::lit_mask(lit);
        self.chunk[blk] |= mask;
    }

    /// Union with another set
    #[allow(dead_code)]
    pub(crate) fn add_set(&mut self, other: &LitSet) {
        for (d, &s) in self.chunk.iter_mut().zip(&other.chunk) {
            *d |= s;
        }
    }

    /// `true` if the literal is in the set
    #[allow(dead_code)]
    pub(crate) fn is_in(&self, lit: Literal) -> bool {
        let (blk, mask) = bitpack::lit_mask(lit);
        self.chunk[blk] & mask != 0
    }

    /// `true` if the cube carries at least one literal of the set
    pub(crate) fn intersects_cube(&self, cube: &Cube) -> bool {
        bitpack::intersects(&self.chunk, cube.words())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_and_union() {
        let a = Literal::positive(0);
        let mut set = LitSet::new(8);
        assert!(!set.is_in(a));
        set.add(a);
        set.add(!a);
        // both polarities may coexist
        assert!(set.is_in(a));
        assert!(set.is_in(!a));

        let mut other = LitSet::new(8);
        other.add(Literal::negative(5));
        set.add_set(&other);
        assert!(set.is_in(Literal::negative(5)));
    }

    #[test]
    fn cube_intersection() {
        let mut set = LitSet::new(8);
        set.add(Literal::positive(2));
        let cube = Cube::new(8, &[Literal::positive(2), Literal::positive(4)]).unwrap();
        assert!(set.intersects_cube(&cube));
        let other = Cube::new(8, &[Literal::negative(2)]).unwrap();
        assert!(!set.intersects_cube(&other));
    }
}
