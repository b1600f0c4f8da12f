//! Command checking
//!
//! ```text
//! compound_command ::= BEGIN command {; command} END
//! command          ::= assignment | procedure_call | compound_command
//!                    | conditional | repetitive
//! assignment       ::= variable := expression
//! procedure_call   ::= IDENT [( expression_list )]
//! conditional      ::= IF expression THEN command [ELSE command]
//! repetitive       ::= WHILE expression DO command
//! ```
//!
//! The compound command, command dispatch and assignment emit trace lines
//! into the transcript as they are entered.

use crate::errors::SyntaxError;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Checker;
use crate::transcript::Trace;

impl Checker<'_> {
    /// Check `begin ... end`
    pub(crate) fn parse_compound_command(&mut self) {
        if !self.check(TokenKind::Begin) {
            let found = self.current_kind();
            self.report_error(SyntaxError::Expected {
                expected: TokenKind::Begin,
                found,
            });
            self.advance();
            return;
        }

        self.match_token(TokenKind::Begin);
        self.trace(Trace::Begin);
        self.parse_command();

        while self.check(TokenKind::Semicolon) {
            self.match_token(TokenKind::Semicolon);
            self.trace(Trace::Semicolon);
            self.parse_command();
        }

        self.match_token(TokenKind::End);
        self.trace(Trace::End);
    }

    /// Check one command, dispatching on the current token
    pub(crate) fn parse_command(&mut self) {
        self.nested(Self::dispatch_command);
    }

    fn dispatch_command(&mut self) {
        let kind = self.current_kind();
        self.trace(Trace::Command(kind));

        match kind {
            TokenKind::Identifier => {
                if self.config.dialect.has_procedures() && self.peek_next_kind() != TokenKind::Assign {
                    self.parse_procedure_call();
                } else {
                    self.parse_assignment();
                }
            }
            TokenKind::Begin => self.parse_compound_command(),
            TokenKind::If => self.parse_conditional_command(),
            TokenKind::While => self.parse_repetitive_command(),
            // Nothing left to skip
            TokenKind::EndOfFile => self.report_error(SyntaxError::Unexpected { found: kind }),
            found => {
                self.report_error(SyntaxError::Unexpected { found });
                self.advance();
            }
        }
    }

    pub(crate) fn parse_assignment(&mut self) {
        self.trace(Trace::Assignment);
        self.parse_variable();
        self.match_token(TokenKind::Assign);
        self.parse_expression();
    }

    pub(crate) fn parse_procedure_call(&mut self) {
        if !self.check(TokenKind::Identifier) {
            let found = self.current_kind();
            self.report_error(SyntaxError::Expected {
                expected: TokenKind::Identifier,
                found,
            });
            return;
        }

        self.match_token(TokenKind::Identifier);
        if self.check(TokenKind::LParen) {
            self.match_token(TokenKind::LParen);
            self.parse_expression_list();
            self.match_token(TokenKind::RParen);
        }
    }

    /// Check `if ... then ... [else ...]`
    pub(crate) fn parse_conditional_command(&mut self) {
        if !self.check(TokenKind::If) {
            let found = self.current_kind();
            self.report_error(SyntaxError::Expected {
                expected: TokenKind::If,
                found,
            });
            return;
        }

        self.match_token(TokenKind::If);
        self.parse_expression();
        self.match_token(TokenKind::Then);
        self.parse_command();

        if self.check(TokenKind::Else) {
            self.match_token(TokenKind::Else);
            self.parse_command();
        }
    }

    /// Check `while ... do ...`
    pub(crate) fn parse_repetitive_command(&mut self) {
        if !self.check(TokenKind::While) {
            let found = self.current_kind();
            self.report_error(SyntaxError::Expected {
                expected: TokenKind::While,
                found,
            });
            return;
        }

        self.match_token(TokenKind::While);
        self.parse_expression();
        self.match_token(TokenKind::Do);
        self.parse_command();
    }
}
