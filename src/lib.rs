//! # Two-level Boolean logic algebra and factoring
//!
//! This crate represents Boolean functions as **covers** (sums of
//! product terms) and **cubes** (single product terms) over a fixed
//! variable space, and provides the algebraic toolbox that multi-level
//! logic synthesis builds on:
//!
//! - the packed two-bits-per-variable cube representation with
//!   word-parallel primitive operations;
//! - cover algebra: sum, difference, product, and algebraic division,
//!   all maintaining a canonical sorted, duplicate-free form;
//! - kernel and co-kernel enumeration;
//! - the `GEN_FACTOR` family of factoring drivers (quick, good and
//!   Boolean flavours) producing nested factored expressions.
//!
//! ## Covers and cubes
//!
//! A [`Cover`] is built from literal lists and behaves like a value:
//!
//! ```
//! use factor_logic::{Cover, Literal};
//!
//! let a = Literal::positive(0);
//! let b = Literal::positive(1);
//! let c = Literal::positive(2);
//! let d = Literal::positive(3);
//!
//! // f = ac + ad + bc + bd
//! let f = Cover::new(4, &[
//!     vec![a, c],
//!     vec![a, d],
//!     vec![b, c],
//!     vec![b, d],
//! ]).unwrap();
//!
//! // algebra with operators; division inverts multiplication
//! let cd = Cover::new(4, &[vec![c], vec![d]]).unwrap();
//! let q = &f / &cd;
//! assert_eq!(q.to_string(), "v0 + v1");
//! assert_eq!(&q * &cd, f);
//! ```
//!
//! ## Kernels
//!
//! Kernels are the cube-free quotients that expose every multiple-cube
//! divisor of a cover:
//!
//! ```
//! # use factor_logic::{Cover, Literal};
//! # let a = Literal::positive(0);
//! # let b = Literal::positive(1);
//! # let c = Literal::positive(2);
//! # let d = Literal::positive(3);
//! # let f = Cover::new(4, &[vec![a, c], vec![a, d], vec![b, c], vec![b, d]]).unwrap();
//! for (kernel, cokernels) in f.all_kernels() {
//!     println!("{}  <-  {}", kernel, cokernels);
//! }
//! assert_eq!(f.best_kernel().to_string(), "v2 + v3");
//! ```
//!
//! ## Factoring
//!
//! The factoring drivers turn a flat cover into a nested expression
//! that describes the same function with fewer literals:
//!
//! ```
//! # use factor_logic::{Cover, Literal};
//! # let a = Literal::positive(0);
//! # let b = Literal::positive(1);
//! # let c = Literal::positive(2);
//! # let d = Literal::positive(3);
//! # let f = Cover::new(4, &[vec![a, c], vec![a, d], vec![b, c], vec![b, d]]).unwrap();
//! let e = f.quick_factor();
//! assert_eq!(e.to_string(), "(v0 + v1) (v2 + v3)");
//! assert_eq!(e.to_cover(4).unwrap(), f);
//! ```
//!
//! ## Errors and sentinels
//!
//! Only shape errors (mismatched variable counts) and range errors are
//! fatal; they surface as [`CoverError`] from the `checked_*` methods
//! and constructors, and as panics from the operator sugar. Expected
//! degenerate outcomes - conflicting cube products, failed quotients,
//! vanished common cubes - are ordinary values: `None`, empty cubes,
//! empty covers.
//!
//! ## Scope
//!
//! The crate is a pure in-process library: no parsing, no file formats,
//! no variable-name management. Factored output is emitted as the
//! [`Expr`] builder type; Boolean division consults the dense
//! truth-function module [`tvfunc`]. Logging goes through the
//! [`tracing`] facade and is silent unless a subscriber is installed.

mod bitpack;
pub mod cover;
pub mod cube;
pub mod error;
pub mod expr;
pub mod factor;
mod kernel;
pub mod literal;
mod litset;
pub mod tvfunc;

pub use cover::Cover;
pub use cube::Cube;
pub use error::CoverError;
pub use expr::Expr;
pub use factor::{
    BestKernel, BoolDivision, BoolFactor, Divide, Divisor, GenFactor, GoodFactor, OneLevel0Kernel,
    QuickFactor, WeakDivision,
};
pub use literal::{Literal, Pat};
pub use tvfunc::{isop, TvFunc};
