//! Pascal-like source checker
//!
//! This module checks source text against the grammar without building a
//! tree:
//! - [`lexer`]: Tokenization (source text → tokens, one at a time)
//! - [`parse`]: The [`Checker`](parse::Checker) and its `match` primitive
//! - `declarations`, `commands`, `expressions`: one method per production
//!
//! # Supported Language
//!
//! - Header: `program name;` followed by a block and a final `.`
//! - Declarations: one `var` group of `integer`, `real` or `boolean`
//!   variables (several groups and procedures in the extended dialect)
//! - Commands: assignment, `begin ... end`, `if/then/else`, `while/do`
//! - Expressions: `+ - * /`, `and or not`, one relational operator
//!
//! # Checker Implementation
//!
//! Hand-written recursive descent with a single token of lookahead. The
//! output is a [`Transcript`](crate::transcript::Transcript) of trace lines
//! and diagnostics.

mod commands;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
