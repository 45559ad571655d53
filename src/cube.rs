//! Single product terms
//!
//! A [`Cube`] is a conjunction of literals over a fixed variable space,
//! stored in the packed two-bits-per-variable representation. Cubes are
//! value types: operations return new cubes and never share buffers.
//!
//! Degenerate outcomes are in-band: a product that would need both
//! polarities of one variable, a quotient by a cube that is not
//! contained, and a cofactor against a disagreeing literal all return
//! `None` instead of an error.
//!
//! # Examples
//!
//! ```
//! use factor_logic::{Cube, Literal};
//!
//! let a = Literal::positive(0);
//! let b = Literal::positive(1);
//! let c = Literal::positive(2);
//!
//! let ab = Cube::new(8, &[a, b]).unwrap();
//! let bc = Cube::new(8, &[b, c]).unwrap();
//!
//! // product unions the literal sets
//! let abc = ab.product(&bc).unwrap();
//! assert_eq!(abc.literal_num(), 3);
//!
//! // quotient removes them again
//! let q = abc.quotient(&bc).unwrap();
//! assert_eq!(q.literal_list(), vec![a]);
//!
//! // and a conflicting product is `None`
//! let na = Cube::new(8, &[!a]).unwrap();
//! assert!(ab.product(&na).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;

use crate::bitpack::{self, PatWord};
use crate::error::CoverError;
use crate::literal::{Literal, Pat};

/// A cube: a conjunction of literals over a fixed variable space
///
/// A cube with no literals is the constant-one product term; this crate
/// calls it the *empty cube*. No live cube ever represents the constant
/// zero - conflicting operations report `None` before such a cube can
/// exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    var_num: usize,
    chunk: Vec<PatWord>,
}

impl Cube {
    /// The empty cube: no literals, the constant-one product term
    pub fn empty(var_num: usize) -> Self {
        Cube {
            var_num,
            chunk: vec![0; bitpack::cube_size(var_num)],
        }
    }

    /// A single-literal cube
    pub fn from_literal(var_num: usize, lit: Literal) -> Result<Self, CoverError> {
        Self::new(var_num, &[lit])
    }

    /// Build a cube from a list of literals
    ///
    /// Duplicate literals are accepted and set once. A list carrying both
    /// polarities of one variable is rejected: the half-built cube is
    /// discarded and [`CoverError::ConflictingLiterals`] is returned.
    pub fn new(var_num: usize, lits: &[Literal]) -> Result<Self, CoverError> {
        let mut cube = Cube::empty(var_num);
        for &lit in lits {
            cube.set_literal_checked(lit)?;
        }
        Ok(cube)
    }

    /// Add one literal, rejecting out-of-range variables and conflicts
    fn set_literal_checked(&mut self, lit: Literal) -> Result<(), CoverError> {
        if lit.var() >= self.var_num {
            return Err(CoverError::VariableOutOfRange {
                var: lit.var(),
                var_num: self.var_num,
            });
        }
        let (blk, opp) = bitpack::lit_mask(!lit);
        if self.chunk[blk] & opp != 0 {
            return Err(CoverError::ConflictingLiterals { var: lit.var() });
        }
        bitpack::set_literal(&mut self.chunk, lit);
        Ok(())
    }

    /// Wrap an already-valid chunk
    pub(crate) fn from_raw(var_num: usize, chunk: Vec<PatWord>) -> Self {
        debug_assert_eq!(chunk.len(), bitpack::cube_size(var_num));
        Cube { var_num, chunk }
    }

    /// The packed words of this cube
    pub(crate) fn words(&self) -> &[PatWord] {
        &self.chunk
    }

    /// The declared variable count
    pub fn variable_num(&self) -> usize {
        self.var_num
    }

    /// `true` if the cube has no literals
    pub fn is_empty(&self) -> bool {
        bitpack::is_empty(&self.chunk)
    }

    /// Number of literals in the cube
    pub fn literal_num(&self) -> usize {
        bitpack::literal_count(&self.chunk)
    }

    /// The pattern of one variable
    pub fn get_pat(&self, var: usize) -> Result<Pat, CoverError> {
        if var >= self.var_num {
            return Err(CoverError::VariableOutOfRange {
                var,
                var_num: self.var_num,
            });
        }
        Ok(bitpack::get_pat(&self.chunk, var))
    }

    /// `true` if the cube contains exactly this literal
    ///
    /// An out-of-range variable cannot appear, so it answers `false`.
    pub fn has_literal(&self, lit: Literal) -> bool {
        if lit.var() >= self.var_num {
            return false;
        }
        let (blk, mask) = bitpack::lit_mask(lit);
        self.chunk[blk] & mask != 0
    }

    /// The literals of this cube in variable order
    pub fn literal_list(&self) -> Vec<Literal> {
        let mut lits = Vec::with_capacity(self.literal_num());
        for var in 0..self.var_num {
            if let Some(lit) = bitpack::get_pat(&self.chunk, var).to_literal(var) {
                lits.push(lit);
            }
        }
        lits
    }

    /// Product with another cube, `None` on a polarity conflict
    ///
    /// # Panics
    ///
    /// Panics if the variable counts differ.
    pub fn product(&self, other: &Cube) -> Option<Cube> {
        self.expect_same_var_num(other);
        let mut dst = vec![0; self.chunk.len()];
        if bitpack::product(&mut dst, &self.chunk, &other.chunk) {
            Some(Cube::from_raw(self.var_num, dst))
        } else {
            None
        }
    }

    /// Product with a single literal, `None` on a polarity conflict
    pub fn product_literal(&self, lit: Literal) -> Option<Cube> {
        let (blk, opp) = bitpack::lit_mask(!lit);
        if self.chunk[blk] & opp != 0 {
            return None;
        }
        let mut cube = self.clone();
        bitpack::set_literal(&mut cube.chunk, lit);
        Some(cube)
    }

    /// Quotient by another cube, `None` when `other` is not contained
    ///
    /// # Panics
    ///
    /// Panics if the variable counts differ.
    pub fn quotient(&self, other: &Cube) -> Option<Cube> {
        self.expect_same_var_num(other);
        let mut dst = vec![0; self.chunk.len()];
        if bitpack::quotient(&mut dst, &self.chunk, &other.chunk) {
            Some(Cube::from_raw(self.var_num, dst))
        } else {
            None
        }
    }

    /// Quotient by a single literal, `None` when the literal is absent
    pub fn quotient_literal(&self, lit: Literal) -> Option<Cube> {
        if !self.has_literal(lit) {
            return None;
        }
        let mut cube = self.clone();
        let (blk, mask) = bitpack::lit_mask(lit);
        cube.chunk[blk] &= !mask;
        Some(cube)
    }

    /// Cofactor with respect to a literal
    ///
    /// Drops the literal if the cube agrees with it, returns `None` if
    /// the cube carries the opposite polarity.
    pub fn cofactor(&self, lit: Literal) -> Option<Cube> {
        let mut dst = vec![0; self.chunk.len()];
        if bitpack::cofactor(&mut dst, &self.chunk, lit) {
            Some(Cube::from_raw(self.var_num, dst))
        } else {
            None
        }
    }

    /// `true` if every literal of `other` is a literal of `self`
    ///
    /// # Panics
    ///
    /// Panics if the variable counts differ.
    pub fn contains(&self, other: &Cube) -> bool {
        self.expect_same_var_num(other);
        bitpack::contains(&self.chunk, &other.chunk)
    }

    /// `true` if the two cubes share at least one literal
    ///
    /// # Panics
    ///
    /// Panics if the variable counts differ.
    pub fn intersects(&self, other: &Cube) -> bool {
        self.expect_same_var_num(other);
        bitpack::intersects(&self.chunk, &other.chunk)
    }

    /// The 16-bit XOR fold of the packed words
    pub fn hash_code(&self) -> u64 {
        bitpack::hash(&self.chunk)
    }

    /// Write the cube using caller-supplied variable names
    ///
    /// Variables beyond `names` fall back to `v<N>`; an empty cube is
    /// written as `{}`.
    pub fn print<W: io::Write>(&self, w: &mut W, names: &[&str]) -> io::Result<()> {
        let mut out = String::new();
        append_cube(&mut out, self.var_num, &self.chunk, names);
        w.write_all(out.as_bytes())
    }

    fn expect_same_var_num(&self, other: &Cube) {
        if self.var_num != other.var_num {
            panic!(
                "{}",
                CoverError::VariableNumMismatch {
                    left: self.var_num,
                    right: other.var_num,
                }
            );
        }
    }
}

/// Canonical cube order; `None` across different variable spaces
impl PartialOrd for Cube {
    fn partial_cmp(&self, other: &Cube) -> Option<Ordering> {
        if self.var_num != other.var_num {
            return None;
        }
        Some(bitpack::compare(&self.chunk, &other.chunk))
    }
}

impl Hash for Cube {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        append_cube(&mut out, self.var_num, &self.chunk, &[]);
        f.write_str(&out)
    }
}

/// Append one cube to `out`: literals in variable order, separated by
/// spaces, negation marked with a trailing apostrophe. An empty cube is
/// rendered as `{}`.
pub(crate) fn append_cube(out: &mut String, var_num: usize, cube: &[PatWord], names: &[&str]) {
    use std::fmt::Write as _;

    let mut spc = "";
    for var in 0..var_num {
        let pat = bitpack::get_pat(cube, var);
        if pat == Pat::X {
            continue;
        }
        out.push_str(spc);
        spc = " ";
        if let Some(name) = names.get(var) {
            out.push_str(name);
        } else {
            let _ = write!(out, "v{}", var);
        }
        if pat == Pat::Zero {
            out.push('\'');
        }
    }
    if spc.is_empty() {
        out.push_str("{}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(var: usize) -> Literal {
        Literal::positive(var)
    }

    #[test]
    fn empty_cube_is_the_constant_one() {
        let cube = Cube::empty(8);
        assert!(cube.is_empty());
        assert_eq!(cube.literal_num(), 0);
        assert_eq!(cube.literal_list(), vec![]);
        assert_eq!(cube.to_string(), "{}");
    }

    #[test]
    fn constructor_is_idempotent_for_duplicates() {
        let cube = Cube::new(8, &[lit(1), lit(1), lit(3)]).unwrap();
        assert_eq!(cube.literal_num(), 2);
        assert!(cube.has_literal(lit(1)));
        assert!(cube.has_literal(lit(3)));
    }

    #[test]
    fn constructor_rejects_conflicts_and_bad_vars() {
        assert_eq!(
            Cube::new(8, &[lit(1), !lit(1)]),
            Err(CoverError::ConflictingLiterals { var: 1 })
        );
        assert_eq!(
            Cube::new(8, &[lit(8)]),
            Err(CoverError::VariableOutOfRange { var: 8, var_num: 8 })
        );
    }

    #[test]
    fn literal_list_roundtrip() {
        let lits = vec![lit(0), Literal::negative(2), lit(7)];
        let cube = Cube::new(8, &lits).unwrap();
        assert_eq!(cube.literal_list(), lits);
        assert_eq!(Cube::new(8, &cube.literal_list()).unwrap(), cube);
    }

    #[test]
    fn product_and_quotient_are_inverse() {
        let ab = Cube::new(8, &[lit(0), lit(1)]).unwrap();
        let c = Cube::new(8, &[lit(2)]).unwrap();
        let abc = ab.product(&c).unwrap();
        assert_eq!(abc.quotient(&c).unwrap(), ab);
        assert_eq!(abc.quotient(&ab).unwrap(), c);
        // dividing by something not contained fails
        let d = Cube::new(8, &[lit(3)]).unwrap();
        assert!(abc.quotient(&d).is_none());
    }

    #[test]
    fn literal_product_and_quotient() {
        let a = Cube::new(8, &[lit(0)]).unwrap();
        let ab = a.product_literal(lit(1)).unwrap();
        assert!(ab.has_literal(lit(1)));
        assert!(ab.product_literal(!lit(0)).is_none());
        assert_eq!(ab.quotient_literal(lit(1)).unwrap(), a);
        assert!(a.quotient_literal(lit(1)).is_none());
    }

    #[test]
    fn cofactor_in_band_sentinel() {
        let cube = Cube::new(8, &[lit(0), Literal::negative(1)]).unwrap();
        let cof = cube.cofactor(Literal::negative(1)).unwrap();
        assert_eq!(cof, Cube::new(8, &[lit(0)]).unwrap());
        assert!(cube.cofactor(lit(1)).is_none());
    }

    #[test]
    fn ordering_matches_variable_order() {
        let a = Cube::new(8, &[lit(0)]).unwrap();
        let b = Cube::new(8, &[lit(1)]).unwrap();
        let ab = Cube::new(8, &[lit(0), lit(1)]).unwrap();
        assert!(a > b);
        assert!(ab > a);
        let other_space = Cube::new(9, &[lit(0)]).unwrap();
        assert_eq!(a.partial_cmp(&other_space), None);
    }

    #[test]
    fn display_and_named_print() {
        let cube = Cube::new(4, &[lit(0), Literal::negative(2)]).unwrap();
        assert_eq!(cube.to_string(), "v0 v2'");

        let mut buf = Vec::new();
        cube.print(&mut buf, &["a", "b", "c", "d"]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a c'");
    }

    #[test]
    #[should_panic(expected = "variable count mismatch")]
    fn product_panics_on_mismatched_spaces() {
        let a = Cube::empty(4);
        let b = Cube::empty(5);
        let _ = a.product(&b);
    }
}
