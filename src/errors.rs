//! Error types for the syntax checker
//!
//! [`SyntaxError`] is a structural diagnostic. Checking never stops on one:
//! each is recorded in the [`Transcript`](crate::transcript::Transcript) and
//! the checker moves on. Its `Display` is the exact diagnostic line the
//! checker prints. [`SourceError`] covers failures to obtain the source text
//! in the first place.

use crate::parser::lexer::TokenKind;
use std::path::PathBuf;
use thiserror::Error;

/// A grammar violation found while checking
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A specific token kind was required
    #[error("Erro de Sintaxe: esperado {expected} mas recebeu {found}")]
    Expected { expected: TokenKind, found: TokenKind },

    /// A type keyword was required in a declaration
    #[error("Erro de Sintaxe: esperado type mas recebeu {found}")]
    ExpectedType { found: TokenKind },

    /// The token cannot start a command
    #[error("Erro de Sintaxe: inesperado token {found}")]
    Unexpected { found: TokenKind },

    /// The token cannot start a factor
    #[error("Erro de Sintaxe: Esperado UNKNOWN mas recebeu {found}")]
    ExpectedFactor { found: TokenKind },

    /// Commands, factors or procedures are nested past the configured bound
    #[error("Erro de Sintaxe: aninhamento excede o limite de {limit}")]
    NestingTooDeep { limit: usize },
}

/// Failure to read the text to check
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read standard input")]
    Stdin(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_wording() {
        let err = SyntaxError::Expected {
            expected: TokenKind::Assign,
            found: TokenKind::NumInteger,
        };
        assert_eq!(
            err.to_string(),
            "Erro de Sintaxe: esperado ASSIGN mas recebeu NUM_INTEGER"
        );

        let err = SyntaxError::Unexpected {
            found: TokenKind::EndOfFile,
        };
        assert_eq!(err.to_string(), "Erro de Sintaxe: inesperado token END_OF_FILE");

        let err = SyntaxError::ExpectedFactor {
            found: TokenKind::End,
        };
        assert_eq!(err.to_string(), "Erro de Sintaxe: Esperado UNKNOWN mas recebeu END");

        let err = SyntaxError::ExpectedType {
            found: TokenKind::Identifier,
        };
        assert_eq!(err.to_string(), "Erro de Sintaxe: esperado type mas recebeu IDENTIFIER");
    }

    #[test]
    fn test_source_error_chain() {
        use std::error::Error;

        let err = SourceError::Read {
            path: PathBuf::from("missing.pas"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read 'missing.pas'");
        assert!(err.source().is_some());
    }
}
