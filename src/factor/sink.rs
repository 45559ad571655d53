//! Emission of factored expressions
//!
//! The single place where the factoring side touches the [`Expr`]
//! constructors. Keeping the emission behind these two functions means
//! the expression representation can change without touching the
//! driver or the strategies.

use crate::cover::Cover;
use crate::expr::Expr;
use crate::literal::Literal;

/// A cube as a conjunction of literal expressions
///
/// The empty cube becomes the constant one.
pub(crate) fn cube_to_expr(lits: &[Literal]) -> Expr {
    Expr::and_op(lits.iter().copied().map(Expr::literal))
}

/// A cover verbatim as an OR of ANDs
///
/// The empty cover becomes the constant zero; a cover holding only the
/// empty cube becomes the constant one.
pub(crate) fn cover_to_expr(f: &Cover) -> Expr {
    Expr::or_op(f.literal_list().iter().map(|lits| cube_to_expr(lits)))
}

impl Cover {
    /// This cover as a flat OR-of-ANDs expression
    ///
    /// No factoring happens; the structure mirrors the cube list. See
    /// [`Cover::quick_factor`] and friends for nested forms.
    pub fn expr(&self) -> Expr {
        cover_to_expr(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(var: usize) -> Literal {
        Literal::positive(var)
    }

    #[test]
    fn verbatim_emission() {
        let f = Cover::new(4, &[vec![lit(0), lit(1)], vec![!lit(2)]]).unwrap();
        let e = f.expr();
        assert_eq!(e.to_string(), "v0 v1 + v2'");

        assert_eq!(Cover::empty(4).expr(), Expr::zero());

        let tautology = Cover::new(4, &[vec![]]).unwrap();
        assert_eq!(tautology.expr(), Expr::one());
    }
}
