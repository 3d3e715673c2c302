//! # cellgrid-formula
//!
//! Formula parser and evaluator for cellgrid.
//!
//! This crate provides:
//! - Formula parsing (`=NAME(ADDRESS[,ADDRESS])` → [`FormulaCall`])
//! - On-demand evaluation against a [`cellgrid_core::CellStore`], with cycle detection
//! - Built-in range aggregates and text functions, plus a suggestion catalog
//!
//! Evaluation failures never surface as faults in display text; they become
//! [`ERROR_SENTINEL`].
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::{CellAddress, CellStore};
//! use cellgrid_formula::Evaluator;
//!
//! let mut store = CellStore::new();
//! store.set(CellAddress::new(0, 0), "1", None).unwrap();
//! store.set(CellAddress::new(1, 0), "x", None).unwrap();
//! store.set(CellAddress::new(2, 0), "3", None).unwrap();
//!
//! let eval = Evaluator::new(&store);
//! assert_eq!(eval.display("=SUM(A1,A3)"), "4");
//! assert_eq!(eval.display("=SUM(A1"), "#ERROR!");
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;

pub use ast::FormulaCall;
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{
    evaluate, format_number, parse_number, EvaluationOptions, Evaluator, RecursionGuard,
    ERROR_SENTINEL,
};
pub use functions::{suggest_functions, FunctionDef, FunctionKind, FunctionRegistry};
pub use parser::parse_formula;
