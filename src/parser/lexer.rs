//! Lexer (tokenizer) for Pascal-like source code
//!
//! Scans borrowed source text on demand: every call to [`Lexer::next_token`]
//! returns exactly one [`Token`] and moves the cursor past it. The lexer
//! never fails. Characters it cannot classify come back as
//! [`TokenKind::Error`] tokens and scanning carries on, leaving all reporting
//! to the checker.

use crate::config::{Dialect, MAX_LEXEME_LEN};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;
use tracing::trace;

/// Lexical category of a token.
///
/// The declaration order and the labels returned by [`TokenKind::name`] are
/// part of the diagnostic output and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Program,
    Identifier,
    Semicolon,
    Dot,
    Var,
    Integer,
    Real,
    Boolean,
    Procedure,
    LParen,
    RParen,
    Comma,
    Colon,
    Begin,
    End,
    Assign,
    If,
    Then,
    Else,
    While,
    Do,
    Plus,
    Minus,
    Or,
    Times,
    Div,
    And,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    NumInteger,
    NumReal,
    Not,
    EndOfFile,
    Error,
}

impl TokenKind {
    /// Stable upper-case label used in trace lines and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Program => "PROGRAM",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Dot => "DOT",
            TokenKind::Var => "VAR",
            TokenKind::Integer => "INTEGER",
            TokenKind::Real => "REAL",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Assign => "ASSIGN",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Or => "OR",
            TokenKind::Times => "TIMES",
            TokenKind::Div => "DIV",
            TokenKind::And => "AND",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::NumInteger => "NUM_INTEGER",
            TokenKind::NumReal => "NUM_REAL",
            TokenKind::Not => "NOT",
            TokenKind::EndOfFile => "END_OF_FILE",
            TokenKind::Error => "ERROR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token: its kind plus the matched source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    /// Build a token, truncating the lexeme to [`MAX_LEXEME_LEN`] characters.
    pub fn new(kind: TokenKind, text: &str) -> Self {
        let lexeme = match text.char_indices().nth(MAX_LEXEME_LEN) {
            Some((cut, _)) => text[..cut].to_string(),
            None => text.to_string(),
        };
        Token { kind, lexeme }
    }

    pub fn eof() -> Self {
        Token {
            kind: TokenKind::EndOfFile,
            lexeme: String::new(),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

/// Reserved words of the Standard and Extended dialects
const RESERVED_WORDS: [(&str, TokenKind); 16] = [
    ("program", TokenKind::Program),
    ("var", TokenKind::Var),
    ("integer", TokenKind::Integer),
    ("real", TokenKind::Real),
    ("boolean", TokenKind::Boolean),
    ("procedure", TokenKind::Procedure),
    ("begin", TokenKind::Begin),
    ("end", TokenKind::End),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("or", TokenKind::Or),
    ("and", TokenKind::And),
    ("not", TokenKind::Not),
];

fn reserved_words() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| RESERVED_WORDS.iter().copied().collect())
}

/// Case-sensitive reserved-word lookup for the given dialect
fn keyword_kind(word: &str, dialect: Dialect) -> Option<TokenKind> {
    if dialect.reserves_all_keywords() {
        reserved_words().get(word).copied()
    } else if word == "program" {
        Some(TokenKind::Program)
    } else {
        None
    }
}

fn is_operator_char(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '=' | '<' | '>')
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// The C `isspace` set
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Classify a maximal operator run. Only whole-run matches count, so a run
/// such as `+-` is an error rather than two tokens.
fn classify_operator(run: &str, dialect: Dialect) -> TokenKind {
    match run {
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Times,
        "/" => TokenKind::Div,
        "=" => TokenKind::Equal,
        "<" => TokenKind::Less,
        ">" => TokenKind::Greater,
        "<=" if dialect.has_relational_pairs() => TokenKind::LessEqual,
        ">=" if dialect.has_relational_pairs() => TokenKind::GreaterEqual,
        "<>" if dialect.has_relational_pairs() => TokenKind::NotEqual,
        _ => TokenKind::Error,
    }
}

/// Pull-based scanner over borrowed source text
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    input: &'src str,
    position: usize,
    dialect: Dialect,
}

impl<'src> Lexer<'src> {
    /// Create a lexer for the default dialect.
    pub fn new(input: &'src str) -> Self {
        Self::with_dialect(input, Dialect::default())
    }

    pub fn with_dialect(input: &'src str, dialect: Dialect) -> Self {
        Self {
            input,
            position: 0,
            dialect,
        }
    }

    /// Point the lexer at new text and rewind the cursor
    pub fn reset(&mut self, input: &'src str) {
        self.input = input;
        self.position = 0;
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    /// Scan the next token. Once the input is exhausted every call returns
    /// an end-of-file token.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        trace!(kind = %token.kind, lexeme = %token.lexeme, "scanned token");
        token
    }

    /// Kind of the next token, leaving the cursor where it is
    pub(crate) fn peek_kind(&self) -> TokenKind {
        Lexer::scan(&mut self.clone()).kind
    }

    fn scan(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let start = self.position;
        let Some(ch) = self.advance() else {
            return Token::eof();
        };

        let kind = match ch {
            '.' => TokenKind::Dot,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ':' => {
                if self.dialect.scans_assign() && self.peek() == Some('=') {
                    self.advance();
                    TokenKind::Assign
                } else {
                    TokenKind::Colon
                }
            }
            c if is_operator_char(c) => {
                self.eat_while(is_operator_char);
                classify_operator(&self.input[start..self.position], self.dialect)
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                self.eat_while(is_ident_char);
                keyword_kind(&self.input[start..self.position], self.dialect)
                    .unwrap_or(TokenKind::Identifier)
            }
            c if c.is_ascii_digit() => self.number_literal(),
            _ => TokenKind::Error,
        };

        Token::new(kind, &self.input[start..self.position])
    }

    /// Digit run, plus a fraction when the dialect has real literals
    fn number_literal(&mut self) -> TokenKind {
        self.eat_while(|c| c.is_ascii_digit());

        if self.dialect.scans_real_literals()
            && self.peek() == Some('.')
            && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance(); // '.'
            self.eat_while(|c| c.is_ascii_digit());
            return TokenKind::NumReal;
        }

        TokenKind::NumInteger
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(c) if is_space(c) => {
                    self.advance();
                }
                Some('{') if self.dialect.skips_comments() => {
                    // An unterminated comment runs to the end of input
                    self.eat_while(|c| c != '}');
                    self.advance();
                }
                _ => break,
            }
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input[self.position..].chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, not including, end of file
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

/// Scan the whole input. The result always ends with one end-of-file token.
pub fn tokenize(source: &str, dialect: Dialect) -> Vec<Token> {
    let mut lexer = Lexer::with_dialect(source, dialect);
    let mut tokens: Vec<Token> = lexer.by_ref().collect();
    tokens.push(Token::eof());
    tokens
}
