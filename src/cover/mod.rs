//! Covers: sum-of-cubes representations of Boolean functions
//!
//! A [`Cover`] owns a contiguous chunk of packed words holding its cubes
//! back to back. Two invariants hold on every live cover:
//!
//! - **Canonical order.** Cubes are sorted strictly descending under the
//!   word-lexicographic cube compare; no two cubes are equal.
//! - **Fixed variable space.** The variable count is set at construction
//!   and every operation checks it against the other operand.
//!
//! All the algebra (`+`, `-`, `*`, `/`, their assign forms and the
//! fallible `checked_*` methods) lives in the `algebra` submodule of this
//! directory; kernel enumeration and factoring are implemented in their
//! own modules and surfaced as methods on [`Cover`].
//!
//! # What is a cover?
//!
//! A cover is a disjunction of cubes: `a b + a c' + d` is a cover of
//! three cubes. Covers are the flattened two-level form that
//! logic-synthesis front-ends hand to the factoring machinery of this
//! crate.
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
//! // (a + b) * (c + d)
//! let left = Cover::new(4, &[vec![a], vec![b]]).unwrap();
//! let right = Cover::new(4, &[vec![c], vec![d]]).unwrap();
//! let product = &left * &right;
//!
//! assert_eq!(product.cube_num(), 4);
//! assert_eq!(product.to_string(), "v0 v2 + v0 v3 + v1 v2 + v1 v3");
//!
//! // algebraic division inverts the product
//! assert_eq!(&product / &right, left);
//! ```

mod algebra;
mod sort;

pub(crate) use sort::Sorter;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;

use crate::bitpack::{self, PatWord};
use crate::cube::{append_cube, Cube};
use crate::error::CoverError;
use crate::literal::{Literal, Pat};

/// A cover: a disjunction of cubes in canonical descending order
///
/// The chunk always holds exactly `cube_num` cubes (spare `Vec` capacity
/// aside); operations that can shrink their result run the canonical
/// sort and truncate before the cover is handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    var_num: usize,
    cube_num: usize,
    chunk: Vec<PatWord>,
}

impl Cover {
    /// The empty cover: no cubes, the constant-zero function
    pub fn empty(var_num: usize) -> Self {
        Cover {
            var_num,
            cube_num: 0,
            chunk: Vec::new(),
        }
    }

    /// Build a cover from one literal list per cube
    ///
    /// The lists may arrive in any order and may repeat cubes; the result
    /// is canonicalised (sorted descending, duplicates removed). Each
    /// list must be conflict-free and name only variables below
    /// `var_num`.
    ///
    /// # Examples
    ///
    /// ```
    /// use factor_logic::{Cover, Literal};
    ///
    /// let a = Literal::positive(0);
    /// let b = Literal::positive(1);
    /// let f = Cover::new(2, &[vec![b], vec![a], vec![b]]).unwrap();
    /// assert_eq!(f.cube_num(), 2);
    /// assert_eq!(f.to_string(), "v0 + v1");
    /// ```
    pub fn new(var_num: usize, cube_list: &[Vec<Literal>]) -> Result<Self, CoverError> {
        let w = bitpack::cube_size(var_num);
        let mut chunk = Vec::with_capacity(cube_list.len() * w);
        for lits in cube_list {
            let cube = Cube::new(var_num, lits)?;
            chunk.extend_from_slice(cube.words());
        }
        Ok(Self::canonicalize(var_num, cube_list.len(), chunk))
    }

    /// Build a cover from existing cubes
    ///
    /// Fails with a shape error when some cube lives in a different
    /// variable space.
    pub fn from_cubes(var_num: usize, cubes: &[Cube]) -> Result<Self, CoverError> {
        let w = bitpack::cube_size(var_num);
        let mut chunk = Vec::with_capacity(cubes.len() * w);
        for cube in cubes {
            if cube.variable_num() != var_num {
                return Err(CoverError::VariableNumMismatch {
                    left: var_num,
                    right: cube.variable_num(),
                });
            }
            chunk.extend_from_slice(cube.words());
        }
        Ok(Self::canonicalize(var_num, cubes.len(), chunk))
    }

    /// Promote a single cube to a one-cube cover
    pub fn from_cube(cube: Cube) -> Self {
        let var_num = cube.variable_num();
        Cover {
            var_num,
            cube_num: 1,
            chunk: cube.words().to_vec(),
        }
    }

    /// Wrap a chunk that is already canonical
    pub(crate) fn from_parts(var_num: usize, cube_num: usize, chunk: Vec<PatWord>) -> Self {
        debug_assert_eq!(chunk.len(), cube_num * bitpack::cube_size(var_num));
        Cover {
            var_num,
            cube_num,
            chunk,
        }
    }

    /// Sort, dedup and truncate a freshly written chunk
    pub(crate) fn canonicalize(var_num: usize, cube_num: usize, mut chunk: Vec<PatWord>) -> Self {
        let mut sorter = Sorter::new(var_num);
        let cube_num = sorter.sort(cube_num, &mut chunk);
        chunk.truncate(cube_num * bitpack::cube_size(var_num));
        Self::from_parts(var_num, cube_num, chunk)
    }

    /// The declared variable count
    pub fn variable_num(&self) -> usize {
        self.var_num
    }

    /// Number of cubes
    pub fn cube_num(&self) -> usize {
        self.cube_num
    }

    /// `true` if the cover has no cubes (the constant-zero function)
    pub fn is_empty(&self) -> bool {
        self.cube_num == 0
    }

    /// Words per cube in this variable space
    pub(crate) fn cube_words(&self) -> usize {
        bitpack::cube_size(self.var_num)
    }

    /// The packed words of cube `i` (unchecked)
    pub(crate) fn cube_at(&self, i: usize) -> &[PatWord] {
        let w = self.cube_words();
        &self.chunk[i * w..(i + 1) * w]
    }

    /// The whole chunk
    pub(crate) fn words(&self) -> &[PatWord] {
        &self.chunk
    }

    /// Total number of literals over all cubes
    pub fn literal_num(&self) -> usize {
        bitpack::literal_count(&self.chunk)
    }

    /// Number of cubes containing exactly this literal
    pub fn literal_num_of(&self, lit: Literal) -> usize {
        if lit.var() >= self.var_num {
            return 0;
        }
        let (blk, mask) = bitpack::lit_mask(lit);
        (0..self.cube_num)
            .filter(|&i| self.cube_at(i)[blk] & mask != 0)
            .count()
    }

    /// The cubes as literal lists, in canonical cover order
    pub fn literal_list(&self) -> Vec<Vec<Literal>> {
        (0..self.cube_num)
            .map(|i| {
                let cube = self.cube_at(i);
                (0..self.var_num)
                    .filter_map(|var| bitpack::get_pat(cube, var).to_literal(var))
                    .collect()
            })
            .collect()
    }

    /// Copy out cube `i`
    pub fn get_cube(&self, i: usize) -> Result<Cube, CoverError> {
        if i >= self.cube_num {
            return Err(CoverError::CubeIndexOutOfRange {
                index: i,
                cube_num: self.cube_num,
            });
        }
        Ok(Cube::from_raw(self.var_num, self.cube_at(i).to_vec()))
    }

    /// The pattern of variable `var` in cube `i`
    pub fn get_pat(&self, i: usize, var: usize) -> Result<Pat, CoverError> {
        if i >= self.cube_num {
            return Err(CoverError::CubeIndexOutOfRange {
                index: i,
                cube_num: self.cube_num,
            });
        }
        if var >= self.var_num {
            return Err(CoverError::VariableOutOfRange {
                var,
                var_num: self.var_num,
            });
        }
        Ok(bitpack::get_pat(self.cube_at(i), var))
    }

    /// Iterate over the cubes as owned [`Cube`] values
    pub fn cubes(&self) -> impl Iterator<Item = Cube> + '_ {
        (0..self.cube_num).map(|i| Cube::from_raw(self.var_num, self.cube_at(i).to_vec()))
    }

    /// The 16-bit XOR fold of the packed words
    pub fn hash_code(&self) -> u64 {
        bitpack::hash(&self.chunk)
    }

    /// Write the cover using caller-supplied variable names
    ///
    /// Cubes are separated by `" + "`; variables beyond `names` fall
    /// back to `v<N>`. An empty cover writes nothing.
    pub fn print<W: io::Write>(&self, w: &mut W, names: &[&str]) -> io::Result<()> {
        let mut out = String::new();
        self.format_into(&mut out, names);
        w.write_all(out.as_bytes())
    }

    fn format_into(&self, out: &mut String, names: &[&str]) {
        let mut plus = "";
        for i in 0..self.cube_num {
            out.push_str(plus);
            plus = " + ";
            append_cube(out, self.var_num, self.cube_at(i), names);
        }
    }
}

impl From<Cube> for Cover {
    fn from(cube: Cube) -> Cover {
        Cover::from_cube(cube)
    }
}

/// Deterministic total order on canonical covers of one variable space:
/// cube-by-cube canonical compare, a strict prefix ordering before the
/// longer cover. `None` across different variable spaces.
impl PartialOrd for Cover {
    fn partial_cmp(&self, other: &Cover) -> Option<Ordering> {
        if self.var_num != other.var_num {
            return None;
        }
        Some(self.compare_same_space(other))
    }
}

impl Cover {
    /// Cube-by-cube compare against a cover of the same variable space
    pub(crate) fn compare_same_space(&self, other: &Cover) -> Ordering {
        let n = self.cube_num.min(other.cube_num);
        for i in 0..n {
            match bitpack::compare(self.cube_at(i), other.cube_at(i)) {
                Ordering::Equal => continue,
                non_eq => return non_eq,
            }
        }
        self.cube_num.cmp(&other.cube_num)
    }
}

impl Hash for Cover {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.format_into(&mut out, &[]);
        f.write_str(&out)
    }
}
