//! SQL AST types, helpers for building them, and their conversion to text.

pub mod ast;
pub mod convert;
pub mod helpers;
pub mod string;
