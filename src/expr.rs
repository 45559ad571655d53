//! Factored Boolean expressions
//!
//! [`Expr`] is the output type of the factoring drivers: a nested
//! AND/OR/NOT tree over literals with no sum-of-products flattening
//! implied. The constructors perform only the cheap structural
//! simplifications (constant folding, associative flattening, double
//! negation); no Boolean reasoning happens here.
//!
//! The type also knows how to evaluate itself and how to expand back to
//! a [`Cover`], which is what the factoring tests use to check that a
//! factored form still describes the function it was derived from.
//!
//! # Examples
//!
//! ```
//! use factor_logic::{Expr, Literal};
//!
//! let a = Literal::positive(0);
//! let b = Literal::positive(1);
//!
//! let e = Expr::literal(a) & (Expr::literal(b) | Expr::one());
//! // b + 1 folds to 1, 1 is the AND identity
//! assert_eq!(e, Expr::literal(a));
//!
//! let f = Expr::literal(a) | Expr::literal(b);
//! assert_eq!(f.to_string(), "v0 + v1");
//! assert!(f.eval(&[true, false]));
//! assert!(!f.eval(&[false, false]));
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::cover::Cover;
use crate::cube::Cube;
use crate::error::CoverError;
use crate::literal::Literal;

/// A factored Boolean expression
///
/// `And`/`Or` nodes hold two or more operands; the constructors keep the
/// tree in that shape, so `And(vec![x])` never occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// The constant zero
    Zero,
    /// The constant one
    One,
    /// A single literal
    Literal(Literal),
    /// Conjunction of two or more sub-expressions
    And(Vec<Expr>),
    /// Disjunction of two or more sub-expressions
    Or(Vec<Expr>),
    /// Negation of a sub-expression
    Not(Box<Expr>),
}

impl Expr {
    /// The constant-zero expression
    pub fn zero() -> Expr {
        Expr::Zero
    }

    /// The constant-one expression
    pub fn one() -> Expr {
        Expr::One
    }

    /// A single-literal expression
    pub fn literal(lit: Literal) -> Expr {
        Expr::Literal(lit)
    }

    /// Conjunction of a list of expressions
    ///
    /// Drops `1` operands, folds to `0` on a `0` operand, flattens
    /// nested conjunctions. An empty list is the constant one.
    pub fn and_op<I: IntoIterator<Item = Expr>>(exprs: I) -> Expr {
        let mut operands = Vec::new();
        for e in exprs {
            match e {
                Expr::One => {}
                Expr::Zero => return Expr::Zero,
                Expr::And(inner) => operands.extend(inner),
                other => operands.push(other),
            }
        }
        match operands.len() {
            0 => Expr::One,
            1 => operands.pop().expect("one operand"),
            _ => Expr::And(operands),
        }
    }

    /// Disjunction of a list of expressions
    ///
    /// Drops `0` operands, folds to `1` on a `1` operand, flattens
    /// nested disjunctions. An empty list is the constant zero.
    pub fn or_op<I: IntoIterator<Item = Expr>>(exprs: I) -> Expr {
        let mut operands = Vec::new();
        for e in exprs {
            match e {
                Expr::Zero => {}
                Expr::One => return Expr::One,
                Expr::Or(inner) => operands.extend(inner),
                other => operands.push(other),
            }
        }
        match operands.len() {
            0 => Expr::Zero,
            1 => operands.pop().expect("one operand"),
            _ => Expr::Or(operands),
        }
    }

    /// `true` for the constant zero
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Zero)
    }

    /// `true` for the constant one
    pub fn is_one(&self) -> bool {
        matches!(self, Expr::One)
    }

    /// Number of literal leaves in the tree
    pub fn literal_num(&self) -> usize {
        match self {
            Expr::Zero | Expr::One => 0,
            Expr::Literal(_) => 1,
            Expr::And(list) | Expr::Or(list) => list.iter().map(Expr::literal_num).sum(),
            Expr::Not(inner) => inner.literal_num(),
        }
    }

    /// Evaluate under an assignment indexed by variable
    ///
    /// # Panics
    ///
    /// Panics if a literal names a variable outside the assignment.
    pub fn eval(&self, assignment: &[bool]) -> bool {
        match self {
            Expr::Zero => false,
            Expr::One => true,
            Expr::Literal(lit) => assignment[lit.var()] != lit.is_negative(),
            Expr::And(list) => list.iter().all(|e| e.eval(assignment)),
            Expr::Or(list) => list.iter().any(|e| e.eval(assignment)),
            Expr::Not(inner) => !inner.eval(assignment),
        }
    }

    /// Expand to a sum-of-cubes cover over `var_num` variables
    ///
    /// Negations are pushed down to the literals first, then products
    /// are distributed. The result is canonical but in general far from
    /// minimal; this exists so factored forms can be compared against
    /// their source covers.
    pub fn to_cover(&self, var_num: usize) -> Result<Cover, CoverError> {
        match self {
            Expr::Zero => Ok(Cover::empty(var_num)),
            Expr::One => Ok(Cover::from_cube(Cube::empty(var_num))),
            Expr::Literal(lit) => {
                let cube = Cube::from_literal(var_num, *lit)?;
                Ok(Cover::from_cube(cube))
            }
            Expr::And(list) => {
                let mut acc = Cover::from_cube(Cube::empty(var_num));
                for e in list {
                    acc = acc.checked_product(&e.to_cover(var_num)?)?;
                }
                Ok(acc)
            }
            Expr::Or(list) => {
                let mut acc = Cover::empty(var_num);
                for e in list {
                    acc = acc.checked_sum(&e.to_cover(var_num)?)?;
                }
                Ok(acc)
            }
            Expr::Not(inner) => inner.complement().to_cover(var_num),
        }
    }

    /// De Morgan complement with negations pushed to the literals
    fn complement(&self) -> Expr {
        match self {
            Expr::Zero => Expr::One,
            Expr::One => Expr::Zero,
            Expr::Literal(lit) => Expr::Literal(!*lit),
            Expr::And(list) => Expr::or_op(list.iter().map(Expr::complement)),
            Expr::Or(list) => Expr::and_op(list.iter().map(Expr::complement)),
            Expr::Not(inner) => (**inner).clone(),
        }
    }
}

/// `a & b` is the conjunction
impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        Expr::and_op([self, rhs])
    }
}

/// `a | b` is the disjunction
impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        Expr::or_op([self, rhs])
    }
}

/// `a ^ b` expands to `a b' + a' b`
impl BitXor for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: Expr) -> Expr {
        let left = self.clone() & !rhs.clone();
        let right = !self & rhs;
        left | right
    }
}

/// `!a` is the negation, with constants folded and double negation and
/// literal negation resolved structurally
impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        match self {
            Expr::Zero => Expr::One,
            Expr::One => Expr::Zero,
            Expr::Literal(lit) => Expr::Literal(!lit),
            Expr::Not(inner) => *inner,
            other => Expr::Not(Box::new(other)),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Zero => write!(f, "0"),
            Expr::One => write!(f, "1"),
            Expr::Literal(lit) => write!(f, "{}", lit),
            Expr::And(list) => {
                let mut spc = "";
                for e in list {
                    f.write_str(spc)?;
                    spc = " ";
                    if matches!(e, Expr::Or(_)) {
                        write!(f, "({})", e)?;
                    } else {
                        write!(f, "{}", e)?;
                    }
                }
                Ok(())
            }
            Expr::Or(list) => {
                let mut plus = "";
                for e in list {
                    f.write_str(plus)?;
                    plus = " + ";
                    write!(f, "{}", e)?;
                }
                Ok(())
            }
            Expr::Not(inner) => write!(f, "({})'", inner),
        }
    }
}
