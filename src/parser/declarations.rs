//! Declaration checking
//!
//! Everything between the program header and the main compound command:
//!
//! ```text
//! block          ::= [var_section] {procedure_decl} compound_command
//! var_section    ::= VAR var_list ; {var_list ;}
//! var_list       ::= IDENT {, IDENT} : type
//! type           ::= INTEGER | REAL | BOOLEAN
//! procedure_decl ::= PROCEDURE IDENT [formal_params] ; block ;
//! formal_params  ::= ( param_section {; param_section} )
//! param_section  ::= [VAR] var_list
//! ```
//!
//! Repeated `var_list` groups and procedure declarations are only accepted in
//! the extended dialect; elsewhere a `var` section holds exactly one group.

use crate::errors::SyntaxError;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Checker;

impl Checker<'_> {
    /// Check a block: optional declarations, then a compound command
    pub(crate) fn parse_block(&mut self) {
        if self.check(TokenKind::Var) {
            self.parse_var_declaration();
        }

        if self.config.dialect.has_procedures() {
            while self.check(TokenKind::Procedure) {
                self.nested(Self::parse_procedure_declaration);
            }
        }

        self.parse_compound_command();
    }

    /// Check a `var` section
    pub(crate) fn parse_var_declaration(&mut self) {
        self.match_token(TokenKind::Var);
        self.parse_var_list();
        self.match_token(TokenKind::Semicolon);

        if self.config.dialect.repeats_var_groups() {
            while self.check(TokenKind::Identifier) {
                self.parse_var_list();
                self.match_token(TokenKind::Semicolon);
            }
        }
    }

    /// Check `a, b, c : type`
    pub(crate) fn parse_var_list(&mut self) {
        self.parse_variable();
        while self.check(TokenKind::Comma) {
            self.match_token(TokenKind::Comma);
            self.parse_variable();
        }
        self.match_token(TokenKind::Colon);
        self.parse_type();
    }

    /// Check a primitive type keyword
    pub(crate) fn parse_type(&mut self) {
        match self.current_kind() {
            TokenKind::Integer | TokenKind::Real | TokenKind::Boolean => self.advance(),
            found => {
                self.report_error(SyntaxError::ExpectedType { found });
                if self.config.recovery.consumes_mismatch() {
                    self.advance();
                }
            }
        }
    }

    pub(crate) fn parse_procedure_declaration(&mut self) {
        self.match_token(TokenKind::Procedure);
        self.match_token(TokenKind::Identifier);
        if self.check(TokenKind::LParen) {
            self.parse_formal_parameters();
        }
        self.match_token(TokenKind::Semicolon);
        self.parse_block();
        self.match_token(TokenKind::Semicolon);
    }

    pub(crate) fn parse_formal_parameters(&mut self) {
        self.match_token(TokenKind::LParen);
        self.parse_formal_parameter_section();
        while self.check(TokenKind::Semicolon) {
            self.match_token(TokenKind::Semicolon);
            self.parse_formal_parameter_section();
        }
        self.match_token(TokenKind::RParen);
    }

    /// `[var] a, b : type`
    pub(crate) fn parse_formal_parameter_section(&mut self) {
        if self.check(TokenKind::Var) {
            self.advance();
        }
        self.parse_var_list();
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{CheckerConfig, Dialect, Recovery};
    use crate::errors::SyntaxError;
    use crate::parser::lexer::TokenKind;
    use crate::parser::parse::{check, Checker};

    #[test]
    fn test_single_var_group() {
        let transcript = check(
            "program p; var a, b: integer; begin a := b end.",
            CheckerConfig::default(),
        );
        assert!(transcript.is_clean(), "{:?}", transcript.get_output());
    }

    #[test]
    fn test_second_var_group_needs_extended_dialect() {
        let source = "program p; var a: integer; b: real; begin a := b end.";

        let standard = check(source, CheckerConfig::default());
        assert!(!standard.is_clean());
        assert_eq!(
            standard.diagnostics().next(),
            Some(&SyntaxError::Expected {
                expected: TokenKind::Begin,
                found: TokenKind::Identifier,
            })
        );

        let extended = check(source, CheckerConfig::default().with_dialect(Dialect::Extended));
        assert!(extended.is_clean(), "{:?}", extended.get_output());
    }

    #[test]
    fn test_bad_type_is_swallowed() {
        let mut checker = Checker::new("a: text; begin", CheckerConfig::default());
        checker.parse_var_list();

        assert_eq!(checker.current().kind, TokenKind::Semicolon);
        assert_eq!(
            checker.report().get_output(),
            vec!["Erro de Sintaxe: esperado type mas recebeu IDENTIFIER"]
        );
    }

    #[test]
    fn test_bad_type_is_kept_under_insert() {
        let config = CheckerConfig::default().with_recovery(Recovery::Insert);
        let mut checker = Checker::new("a: ; begin", config);
        checker.parse_var_list();

        assert_eq!(checker.current().kind, TokenKind::Semicolon);
        assert_eq!(checker.report().error_count(), 1);
    }

    #[test]
    fn test_procedure_declarations() {
        let source = "program p;
            var n: integer;
            procedure inc(var x: integer; step: integer);
            begin x := x + step end;
            procedure reset;
            begin n := 0 end;
            begin inc(n, 2); reset end.";
        let transcript = check(source, CheckerConfig::default().with_dialect(Dialect::Extended));
        assert!(transcript.is_clean(), "{:?}", transcript.get_output());
    }
}
