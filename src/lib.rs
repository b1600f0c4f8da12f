//! # Introduction
//!
//! pascheck checks the syntax of programs written in a small Pascal-like
//! language. It scans the source into tokens on demand and runs a
//! recursive-descent checker over them, recording trace lines and
//! diagnostics. It does not build a syntax tree, resolve names or run
//! anything.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Checker → Transcript → stdout / stderr
//! ```
//!
//! 1. [`parser::lexer`]: pull-based tokenizer, one token per call.
//! 2. [`parser::parse`]: the checker; one method per grammar production.
//! 3. [`transcript`]: ordered trace and diagnostic lines of one check.
//! 4. [`config`]: dialect, recovery policy and limits.
//! 5. [`errors`]: diagnostic and I/O error types.
//!
//! ## Example
//!
//! ```
//! use pascheck::{check, CheckerConfig};
//!
//! let transcript = check("program p; begin x := 1 end.", CheckerConfig::default());
//! assert!(transcript.is_clean());
//! ```

pub mod config;
pub mod errors;
pub mod parser;
pub mod transcript;

pub use config::{CheckerConfig, Dialect, Recovery};
pub use errors::{SourceError, SyntaxError};
pub use parser::lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::parse::{check, check_file, load_source, Checker};
pub use transcript::{Stream, Trace, Transcript, TranscriptLine};
