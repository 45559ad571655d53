//! Cover algebra: sum, difference, product, algebraic quotient
//!
//! Every binary operation first checks that both operands live in the
//! same variable space. The `checked_*` methods report a mismatch as
//! [`CoverError::VariableNumMismatch`]; the operator sugar (`+`, `-`,
//! `*`, `/` and the assign forms) panics with the same message, which is
//! the conventional behaviour for shape mismatches in operator position.
//!
//! Allocation discipline: each operation sizes its output chunk to the
//! worst case up front (`|a| + |b|` for sum, `|a| * |b|` for product,
//! `|a|` for difference and quotient), writes, and canonicalises, which
//! may shrink the result. No reallocation happens mid-operation.

use crate::bitpack::{self, PatWord};
use crate::cube::Cube;
use crate::error::CoverError;
use crate::literal::Literal;

use super::sort::dedup_cubes;
use super::Cover;

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

impl Cover {
    fn check_same_space(&self, other_var_num: usize) -> Result<(), CoverError> {
        if self.var_num != other_var_num {
            return Err(CoverError::VariableNumMismatch {
                left: self.var_num,
                right: other_var_num,
            });
        }
        Ok(())
    }

    /// Sum (disjunction) of two covers
    ///
    /// A linear merge of the two sorted cube lists; a cube present in
    /// both operands is emitted once.
    pub fn checked_sum(&self, other: &Cover) -> Result<Cover, CoverError> {
        self.check_same_space(other.var_num)?;
        let w = self.cube_words();
        if w == 0 {
            let nc = (self.cube_num + other.cube_num).min(1);
            return Ok(Cover::from_parts(self.var_num, nc, Vec::new()));
        }
        let mut dst = Vec::with_capacity((self.cube_num + other.cube_num) * w);
        let mut nc = 0;
        let mut i = 0;
        let mut j = 0;
        while i < self.cube_num && j < other.cube_num {
            let a = self.cube_at(i);
            let b = other.cube_at(j);
            match bitpack::compare(a, b) {
                Ordering::Greater => {
                    dst.extend_from_slice(a);
                    i += 1;
                }
                Ordering::Less => {
                    dst.extend_from_slice(b);
                    j += 1;
                }
                Ordering::Equal => {
                    dst.extend_from_slice(a);
                    i += 1;
                    j += 1;
                }
            }
            nc += 1;
        }
        while i < self.cube_num {
            dst.extend_from_slice(self.cube_at(i));
            i += 1;
            nc += 1;
        }
        while j < other.cube_num {
            dst.extend_from_slice(other.cube_at(j));
            j += 1;
            nc += 1;
        }
        Ok(Cover::from_parts(self.var_num, nc, dst))
    }

    /// Difference of two covers: the cubes of `self` that do not appear
    /// verbatim in `other`
    ///
    /// This is set difference on cubes, not Boolean subtraction.
    pub fn checked_diff(&self, other: &Cover) -> Result<Cover, CoverError> {
        self.check_same_space(other.var_num)?;
        let w = self.cube_words();
        if w == 0 {
            let nc = if self.cube_num > 0 && other.cube_num == 0 {
                1
            } else {
                0
            };
            return Ok(Cover::from_parts(self.var_num, nc, Vec::new()));
        }
        let mut dst = Vec::with_capacity(self.cube_num * w);
        let mut nc = 0;
        let mut i = 0;
        let mut j = 0;
        while i < self.cube_num && j < other.cube_num {
            let a = self.cube_at(i);
            let b = other.cube_at(j);
            match bitpack::compare(a, b) {
                Ordering::Greater => {
                    dst.extend_from_slice(a);
                    i += 1;
                    nc += 1;
                }
                Ordering::Less => {
                    j += 1;
                }
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        while i < self.cube_num {
            dst.extend_from_slice(self.cube_at(i));
            i += 1;
            nc += 1;
        }
        Ok(Cover::from_parts(self.var_num, nc, dst))
    }

    /// Algebraic product of two covers
    ///
    /// Cartesian product of the cube lists; pairs whose product would
    /// need both polarities of a variable are skipped, then the result
    /// is canonicalised.
    pub fn checked_product(&self, other: &Cover) -> Result<Cover, CoverError> {
        self.check_same_space(other.var_num)?;
        Ok(self.product_chunk(other.cube_num, other.words()))
    }

    /// Product with a single cube
    pub fn checked_product_cube(&self, cube: &Cube) -> Result<Cover, CoverError> {
        self.check_same_space(cube.variable_num())?;
        Ok(self.product_chunk(1, cube.words()))
    }

    /// Product with a single literal
    ///
    /// Cubes carrying the opposite literal are dropped; the literal's
    /// pattern is OR-ed into the survivors. Cube order is preserved, so
    /// only the duplicate sweep runs, not a full sort.
    pub fn checked_product_literal(&self, lit: Literal) -> Result<Cover, CoverError> {
        if lit.var() >= self.var_num {
            return Err(CoverError::VariableOutOfRange {
                var: lit.var(),
                var_num: self.var_num,
            });
        }
        let w = self.cube_words();
        let (blk, mask) = bitpack::lit_mask(lit);
        let (_, opp) = bitpack::lit_mask(!lit);
        let mut dst = Vec::with_capacity(self.cube_num * w);
        let mut nc = 0;
        for i in 0..self.cube_num {
            let cube = self.cube_at(i);
            if cube[blk] & opp != 0 {
                continue;
            }
            let base = dst.len();
            dst.extend_from_slice(cube);
            dst[base + blk] |= mask;
            nc += 1;
        }
        let nc = dedup_cubes(w, &mut dst, nc);
        dst.truncate(nc * w);
        Ok(Cover::from_parts(self.var_num, nc, dst))
    }

    /// Cartesian product against a raw chunk of `n2` cubes
    fn product_chunk(&self, n2: usize, chunk2: &[PatWord]) -> Cover {
        let w = self.cube_words();
        let n1 = self.cube_num;
        let mut dst = vec![0; n1 * n2 * w];
        let mut nc = 0;
        for i in 0..n1 {
            let a = self.cube_at(i);
            for j in 0..n2 {
                let b = &chunk2[j * w..(j + 1) * w];
                if bitpack::product(&mut dst[nc * w..(nc + 1) * w], a, b) {
                    nc += 1;
                }
            }
        }
        dst.truncate(nc * w);
        Cover::canonicalize(self.var_num, nc, dst)
    }

    /// Algebraic quotient of two covers
    ///
    /// The inverse of the algebraic product: a cube `q` is in the result
    /// exactly when `q * other` is a sub-cover of `self`. Division by an
    /// empty cover yields an empty cover.
    pub fn checked_algdiv(&self, other: &Cover) -> Result<Cover, CoverError> {
        self.check_same_space(other.var_num)?;
        let w = self.cube_words();
        let n1 = self.cube_num;
        let n2 = other.cube_num;
        if n2 == 0 {
            return Ok(Cover::empty(self.var_num));
        }
        if w == 0 {
            // the only non-empty zero-variable cover is the constant one
            return Ok(self.clone());
        }

        // Divide every cube of `self` by the first divisor cube that
        // will take it. A dividend cube divisible by two divisor cubes
        // contributes only the first quotient; the lost quotient always
        // overlaps the other divisor cube and so could never survive the
        // count test below.
        let mut scratch = vec![0; n1 * w];
        let mut mark = vec![false; n1];
        for i in 0..n1 {
            let a = self.cube_at(i);
            for j in 0..n2 {
                if bitpack::quotient(&mut scratch[i * w..(i + 1) * w], a, other.cube_at(j)) {
                    mark[i] = true;
                    break;
                }
            }
        }

        // A quotient is real when it was produced once per divisor cube.
        let mut dst = Vec::with_capacity(n1 * w);
        let mut nc = 0;
        for i in 0..n1 {
            if !mark[i] {
                continue;
            }
            let q = &scratch[i * w..(i + 1) * w];
            let mut count = 1;
            let mut dups = Vec::new();
            for i2 in i + 1..n1 {
                if mark[i2] && bitpack::compare(q, &scratch[i2 * w..(i2 + 1) * w]) == Ordering::Equal
                {
                    count += 1;
                    dups.push(i2);
                }
            }
            if count == n2 {
                dst.extend_from_slice(q);
                nc += 1;
                for pos in dups {
                    mark[pos] = false;
                }
            }
        }
        Ok(Cover::canonicalize(self.var_num, nc, dst))
    }

    /// Quotient by a single cube
    ///
    /// Emits `c - cube` for every cube `c` of `self` that contains
    /// `cube`. Cube order survives the removal, so no re-sort is needed.
    pub fn checked_algdiv_cube(&self, cube: &Cube) -> Result<Cover, CoverError> {
        self.check_same_space(cube.variable_num())?;
        let w = self.cube_words();
        if w == 0 {
            return Ok(self.clone());
        }
        let mut dst = Vec::with_capacity(self.cube_num * w);
        let mut nc = 0;
        for i in 0..self.cube_num {
            let a = self.cube_at(i);
            let base = dst.len();
            dst.resize(base + w, 0);
            if bitpack::quotient(&mut dst[base..], a, cube.words()) {
                nc += 1;
            } else {
                dst.truncate(base);
            }
        }
        Ok(Cover::from_parts(self.var_num, nc, dst))
    }

    /// Quotient by a single literal
    ///
    /// Emits every cube containing the literal, with the literal cleared.
    pub fn checked_algdiv_literal(&self, lit: Literal) -> Result<Cover, CoverError> {
        if lit.var() >= self.var_num {
            return Err(CoverError::VariableOutOfRange {
                var: lit.var(),
                var_num: self.var_num,
            });
        }
        let w = self.cube_words();
        let (blk, mask) = bitpack::lit_mask(lit);
        let mut dst = Vec::with_capacity(self.cube_num * w);
        let mut nc = 0;
        for i in 0..self.cube_num {
            let cube = self.cube_at(i);
            if cube[blk] & mask != 0 {
                let base = dst.len();
                dst.extend_from_slice(cube);
                dst[base + blk] &= !mask;
                nc += 1;
            }
        }
        Ok(Cover::from_parts(self.var_num, nc, dst))
    }

    /// The largest cube contained in every cube of the cover
    ///
    /// Word-wise AND over all cubes, stopping early once the running
    /// result has no literals left. An empty cover has an empty common
    /// cube.
    pub fn common_cube(&self) -> Cube {
        let w = self.cube_words();
        let mut dst = vec![0; w];
        if self.cube_num == 0 || w == 0 {
            return Cube::from_raw(self.var_num, dst);
        }
        dst.copy_from_slice(self.cube_at(0));
        for i in 1..self.cube_num {
            let cube = self.cube_at(i);
            let mut live = 0;
            for (d, &s) in dst.iter_mut().zip(cube) {
                *d &= s;
                live |= *d;
            }
            if live == 0 {
                break;
            }
        }
        Cube::from_raw(self.var_num, dst)
    }
}

fn expect<T>(result: Result<T, CoverError>) -> T {
    result.unwrap_or_else(|e| panic!("{}", e))
}

// ---------------------------------------------------------------------
// Operator sugar. Borrowed operands are the primary forms; the owned
// forms delegate. All of them panic on a variable-count mismatch.
// ---------------------------------------------------------------------

/// `&a + &b` is the cover sum
impl Add<&Cover> for &Cover {
    type Output = Cover;

    fn add(self, rhs: &Cover) -> Cover {
        expect(self.checked_sum(rhs))
    }
}

/// `a + b` for owned covers
impl Add for Cover {
    type Output = Cover;

    fn add(self, rhs: Cover) -> Cover {
        &self + &rhs
    }
}

/// `&a + &cube` adds a single cube
impl Add<&Cube> for &Cover {
    type Output = Cover;

    fn add(self, rhs: &Cube) -> Cover {
        expect(self.checked_sum(&Cover::from_cube(rhs.clone())))
    }
}

/// `&a - &b` is cube set difference
impl Sub<&Cover> for &Cover {
    type Output = Cover;

    fn sub(self, rhs: &Cover) -> Cover {
        expect(self.checked_diff(rhs))
    }
}

/// `a - b` for owned covers
impl Sub for Cover {
    type Output = Cover;

    fn sub(self, rhs: Cover) -> Cover {
        &self - &rhs
    }
}

/// `&a - &cube` removes a single cube
impl Sub<&Cube> for &Cover {
    type Output = Cover;

    fn sub(self, rhs: &Cube) -> Cover {
        expect(self.checked_diff(&Cover::from_cube(rhs.clone())))
    }
}

/// `&a * &b` is the algebraic product
impl Mul<&Cover> for &Cover {
    type Output = Cover;

    fn mul(self, rhs: &Cover) -> Cover {
        expect(self.checked_product(rhs))
    }
}

/// `a * b` for owned covers
impl Mul for Cover {
    type Output = Cover;

    fn mul(self, rhs: Cover) -> Cover {
        &self * &rhs
    }
}

/// `&a * &cube` multiplies by a single cube
impl Mul<&Cube> for &Cover {
    type Output = Cover;

    fn mul(self, rhs: &Cube) -> Cover {
        expect(self.checked_product_cube(rhs))
    }
}

/// `&a * lit` multiplies by a literal
impl Mul<Literal> for &Cover {
    type Output = Cover;

    fn mul(self, rhs: Literal) -> Cover {
        expect(self.checked_product_literal(rhs))
    }
}

/// `a * lit` for an owned cover
impl Mul<Literal> for Cover {
    type Output = Cover;

    fn mul(self, rhs: Literal) -> Cover {
        &self * rhs
    }
}

/// `&a / &b` is the algebraic quotient
impl Div<&Cover> for &Cover {
    type Output = Cover;

    fn div(self, rhs: &Cover) -> Cover {
        expect(self.checked_algdiv(rhs))
    }
}

/// `a / b` for owned covers
impl Div for Cover {
    type Output = Cover;

    fn div(self, rhs: Cover) -> Cover {
        &self / &rhs
    }
}

/// `&a / &cube` divides by a single cube
impl Div<&Cube> for &Cover {
    type Output = Cover;

    fn div(self, rhs: &Cube) -> Cover {
        expect(self.checked_algdiv_cube(rhs))
    }
}

/// `&a / lit` divides by a literal
impl Div<Literal> for &Cover {
    type Output = Cover;

    fn div(self, rhs: Literal) -> Cover {
        expect(self.checked_algdiv_literal(rhs))
    }
}

/// `a / lit` for an owned cover
impl Div<Literal> for Cover {
    type Output = Cover;

    fn div(self, rhs: Literal) -> Cover {
        &self / rhs
    }
}

// In-place variants: the new chunk is computed aside and swapped in.

impl AddAssign<&Cover> for Cover {
    fn add_assign(&mut self, rhs: &Cover) {
        *self = &*self + rhs;
    }
}

impl AddAssign<&Cube> for Cover {
    fn add_assign(&mut self, rhs: &Cube) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&Cover> for Cover {
    fn sub_assign(&mut self, rhs: &Cover) {
        *self = &*self - rhs;
    }
}

impl SubAssign<&Cube> for Cover {
    fn sub_assign(&mut self, rhs: &Cube) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&Cover> for Cover {
    fn mul_assign(&mut self, rhs: &Cover) {
        *self = &*self * rhs;
    }
}

impl MulAssign<&Cube> for Cover {
    fn mul_assign(&mut self, rhs: &Cube) {
        *self = &*self * rhs;
    }
}

impl MulAssign<Literal> for Cover {
    fn mul_assign(&mut self, rhs: Literal) {
        *self = &*self * rhs;
    }
}

impl DivAssign<&Cover> for Cover {
    fn div_assign(&mut self, rhs: &Cover) {
        *self = &*self / rhs;
    }
}

impl DivAssign<&Cube> for Cover {
    fn div_assign(&mut self, rhs: &Cube) {
        *self = &*self / rhs;
    }
}

impl DivAssign<Literal> for Cover {
    fn div_assign(&mut self, rhs: Literal) {
        *self = &*self / rhs;
    }
}
