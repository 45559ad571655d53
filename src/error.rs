//! Error types for cover and cube construction and algebra
//!
//! Only two kinds of failure are fatal in this crate: shape errors (two
//! operands over different variable spaces) and range errors (a variable
//! or cube index outside its declared domain). Both are deterministic
//! functions of the arguments and are reported with the offending values.
//! Everything else that can "go wrong" during an algebraic operation -
//! a conflicting cube product, a non-divisible quotient, a vanished
//! common cube - is an expected outcome and is returned in-band as an
//! `Option` or as an empty cube/cover, never as an error.

use std::fmt;

/// Errors raised by cover and cube construction and by the fallible
/// algebra entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// Two operands of a binary operation have different variable counts
    VariableNumMismatch {
        /// Variable count of the left operand
        left: usize,
        /// Variable count of the right operand
        right: usize,
    },
    /// A variable index is outside the declared variable space
    VariableOutOfRange {
        /// The offending variable index
        var: usize,
        /// The declared variable count
        var_num: usize,
    },
    /// A cube index is outside the cover
    CubeIndexOutOfRange {
        /// The offending cube index
        index: usize,
        /// The number of cubes in the cover
        cube_num: usize,
    },
    /// A constructor literal list contains both polarities of one variable
    ConflictingLiterals {
        /// The variable that appears in both polarities
        var: usize,
    },
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::VariableNumMismatch { left, right } => write!(
                f,
                "variable count mismatch: left operand has {} variables, right operand has {}",
                left, right
            ),
            CoverError::VariableOutOfRange { var, var_num } => write!(
                f,
                "variable v{} is out of range for a variable space of size {}",
                var, var_num
            ),
            CoverError::CubeIndexOutOfRange { index, cube_num } => write!(
                f,
                "cube index {} is out of range for a cover of {} cubes",
                index, cube_num
            ),
            CoverError::ConflictingLiterals { var } => write!(
                f,
                "literal list contains both polarities of variable v{}",
                var
            ),
        }
    }
}

impl std::error::Error for CoverError {}
