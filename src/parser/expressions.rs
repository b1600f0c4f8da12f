//! Expression checking
//!
//! ```text
//! expression        ::= simple_expression [relation simple_expression]
//! simple_expression ::= [+ | -] term {(+ | - | OR) term}
//! term              ::= factor {(* | / | AND) factor}
//! factor            ::= variable | NUM_INTEGER | NUM_REAL
//!                     | ( expression ) | NOT factor
//! relation          ::= = | <> | < | >      (extended: also <= and >=)
//! ```
//!
//! Relations do not chain: `a < b < c` stops after `a < b` and leaves the
//! second `<` to whatever production called in.

use crate::errors::SyntaxError;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Checker;
use crate::transcript::Trace;

impl Checker<'_> {
    pub(crate) fn parse_expression(&mut self) {
        self.trace(Trace::Expression);
        self.parse_simple_expression();

        if self.is_relational_operator(self.current_kind()) {
            self.advance();
            self.parse_simple_expression();
        }
    }

    pub(crate) fn parse_simple_expression(&mut self) {
        if matches!(self.current_kind(), TokenKind::Plus | TokenKind::Minus) {
            self.advance();
        }

        self.parse_term();
        while matches!(
            self.current_kind(),
            TokenKind::Plus | TokenKind::Minus | TokenKind::Or
        ) {
            self.advance();
            self.parse_term();
        }
    }

    pub(crate) fn parse_term(&mut self) {
        self.parse_factor();
        while matches!(
            self.current_kind(),
            TokenKind::Times | TokenKind::Div | TokenKind::And
        ) {
            self.advance();
            self.parse_factor();
        }
    }

    pub(crate) fn parse_factor(&mut self) {
        self.nested(Self::factor_alternatives);
    }

    fn factor_alternatives(&mut self) {
        match self.current_kind() {
            TokenKind::Identifier => self.parse_variable(),
            TokenKind::NumInteger | TokenKind::NumReal => self.advance(),
            TokenKind::LParen => {
                self.match_token(TokenKind::LParen);
                self.parse_expression();
                self.match_token(TokenKind::RParen);
            }
            TokenKind::Not => {
                self.match_token(TokenKind::Not);
                self.parse_factor();
            }
            found => {
                self.report_error(SyntaxError::ExpectedFactor { found });
                self.advance();
            }
        }
    }

    pub(crate) fn parse_variable(&mut self) {
        self.match_token(TokenKind::Identifier);
    }

    /// Comma-separated arguments of a procedure call
    pub(crate) fn parse_expression_list(&mut self) {
        self.parse_expression();
        while self.check(TokenKind::Comma) {
            self.match_token(TokenKind::Comma);
            self.parse_expression();
        }
    }

    fn is_relational_operator(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Equal | TokenKind::NotEqual | TokenKind::Less | TokenKind::Greater => true,
            TokenKind::LessEqual | TokenKind::GreaterEqual => {
                self.config.dialect.has_relational_pairs()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{CheckerConfig, Dialect};
    use crate::errors::SyntaxError;
    use crate::parser::lexer::TokenKind;
    use crate::parser::parse::Checker;

    /// Run `parse_expression` alone and return the checker
    fn expression(source: &str, dialect: Dialect) -> Checker<'_> {
        let mut checker = Checker::new(source, CheckerConfig::default().with_dialect(dialect));
        checker.parse_expression();
        checker
    }

    #[test]
    fn test_arithmetic_and_logic() {
        for source in [
            "a + b * c",
            "-a - (b / 2)",
            "+1",
            "a or b and not c",
            "not not a",
            "(a + 1) * (b - 2) = c",
        ] {
            let checker = expression(source, Dialect::Standard);
            assert!(checker.report().is_clean(), "{source}: {:?}", checker.report().get_output());
            assert!(checker.current().is_eof(), "{source} left input behind");
        }
    }

    #[test]
    fn test_relations_do_not_chain() {
        let checker = expression("a < b < c", Dialect::Standard);
        assert!(checker.report().is_clean());
        assert_eq!(checker.current().kind, TokenKind::Less);
    }

    #[test]
    fn test_bad_factor_is_skipped() {
        let checker = expression("a + ; b", Dialect::Standard);
        assert_eq!(
            checker.report().diagnostics().next(),
            Some(&SyntaxError::ExpectedFactor {
                found: TokenKind::Semicolon
            })
        );
        assert_eq!(checker.current().kind, TokenKind::Identifier);
    }

    #[test]
    fn test_relational_pairs_in_extended_dialect() {
        let checker = expression("a <= 1.5", Dialect::Extended);
        assert!(checker.report().is_clean());
        assert!(checker.current().is_eof());

        // Standard scans `<=` as an error token, which cannot continue the expression
        let checker = expression("a <= 1", Dialect::Standard);
        assert_eq!(checker.current().kind, TokenKind::Error);
    }

    #[test]
    fn test_expression_list() {
        let mut checker = Checker::new("a, b + 1, (c)", CheckerConfig::default());
        checker.parse_expression_list();
        assert!(checker.report().is_clean());
        assert!(checker.current().is_eof());
    }

    #[test]
    fn test_missing_close_paren() {
        let checker = expression("(a + 1", Dialect::Standard);
        assert_eq!(
            checker.report().get_output().last().map(String::as_str),
            Some("Erro de Sintaxe: esperado RPAREN mas recebeu END_OF_FILE")
        );
    }
}
