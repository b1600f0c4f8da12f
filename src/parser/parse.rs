//! Main checker coordinator
//!
//! This module provides the [`Checker`] struct: the current-token register,
//! the `match` primitive every production builds on, and the `program`
//! entry point.
//!
//! # Checker Architecture
//!
//! One method per grammar production, split across files with `impl Checker`
//! blocks:
//! - This module: Checker struct, helper methods, and `program`
//! - `declarations`: block, `var` sections, types, procedure declarations
//! - `commands`: compound, assignment, conditional, repetitive, call
//! - `expressions`: expression, simple expression, term, factor
//!
//! # Error Recovery
//!
//! A mismatch never aborts the check. It is recorded in the
//! [`Transcript`] and checking continues according to the configured
//! [`Recovery`](crate::config::Recovery): `Swallow` consumes the offending
//! token, `Insert` leaves it for the next production. Every loop and every
//! recursive descent is entered only on a consumed token, so the checker
//! terminates on any finite input under either policy.

use crate::config::CheckerConfig;
use crate::errors::{SourceError, SyntaxError};
use crate::parser::lexer::{Lexer, Token, TokenKind};
use crate::transcript::{Trace, Transcript};
use std::path::Path;
use tracing::debug;

/// Recursive descent syntax checker
pub struct Checker<'src> {
    pub(crate) lexer: Lexer<'src>,
    pub(crate) current: Token,
    pub(crate) config: CheckerConfig,
    pub(crate) transcript: Transcript,
    pub(crate) depth: usize,
}

impl<'src> Checker<'src> {
    /// Create a checker over `source` and load the first token.
    pub fn new(source: &'src str, config: CheckerConfig) -> Self {
        let mut lexer = Lexer::with_dialect(source, config.dialect);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            config,
            transcript: Transcript::new(),
            depth: 0,
        }
    }

    /// Check a whole program: `program IDENT ; block .`
    ///
    /// Unlike every other production, a missing `program` keyword is reported
    /// once and nothing else is attempted.
    pub fn parse_program(&mut self) {
        if !self.check(TokenKind::Program) {
            let found = self.current_kind();
            self.report_error(SyntaxError::Expected {
                expected: TokenKind::Program,
                found,
            });
            return;
        }

        self.match_token(TokenKind::Program);
        self.match_token(TokenKind::Identifier);
        self.match_token(TokenKind::Semicolon);
        self.parse_block();
        self.match_token(TokenKind::Dot);

        debug!(
            errors = self.transcript.error_count(),
            lines = self.transcript.len(),
            "check finished"
        );
    }

    pub fn report(&self) -> &Transcript {
        &self.transcript
    }

    pub fn into_report(self) -> Transcript {
        self.transcript
    }

    // ===== Helper methods =====

    /// The token in the lookahead register
    pub fn current(&self) -> &Token {
        &self.current
    }

    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consume the current token and refill the register
    pub(crate) fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Kind of the token after the current one, without consuming anything
    pub(crate) fn peek_next_kind(&self) -> TokenKind {
        self.lexer.peek_kind()
    }

    /// Require `kind` at the current position.
    ///
    /// A match is consumed silently. On a mismatch the current token is
    /// consumed only under `Recovery::Swallow`.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.check(kind) {
            self.advance();
            return Ok(());
        }

        let err = SyntaxError::Expected {
            expected: kind,
            found: self.current_kind(),
        };
        if self.config.recovery.consumes_mismatch() {
            self.advance();
        }
        Err(err)
    }

    /// `expect`, recording any mismatch and carrying on
    pub(crate) fn match_token(&mut self, kind: TokenKind) {
        if let Err(err) = self.expect(kind) {
            self.report_error(err);
        }
    }

    pub(crate) fn report_error(&mut self, err: SyntaxError) {
        debug!(error = %err, "syntax error");
        self.transcript.diagnostic(err);
    }

    pub(crate) fn trace(&mut self, trace: Trace) {
        self.transcript.trace(trace);
    }

    /// Run a recursive production one level deeper.
    ///
    /// Past `max_nesting` the production is replaced by a diagnostic and a
    /// single forced advance.
    pub(crate) fn nested(&mut self, production: impl FnOnce(&mut Self)) {
        if self.depth >= self.config.max_nesting {
            self.report_error(SyntaxError::NestingTooDeep {
                limit: self.config.max_nesting,
            });
            self.advance();
            return;
        }

        self.depth += 1;
        production(self);
        self.depth -= 1;
    }
}

/// Check `source` and return the transcript.
pub fn check(source: &str, config: CheckerConfig) -> Transcript {
    let mut checker = Checker::new(source, config);
    checker.parse_program();
    checker.into_report()
}

/// Read a source file. Invalid UTF-8 is replaced rather than rejected, so
/// stray bytes reach the lexer as error tokens.
pub fn load_source(path: &Path) -> Result<String, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read source");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a file and check its contents.
pub fn check_file(path: impl AsRef<Path>, config: CheckerConfig) -> Result<Transcript, SourceError> {
    let source = load_source(path.as_ref())?;
    Ok(check(&source, config))
}
