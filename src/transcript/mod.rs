// Trace and diagnostic capture for one check

use crate::errors::SyntaxError;
use crate::parser::lexer::TokenKind;
use std::fmt;

/// Progress line printed when the checker enters certain productions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace {
    Begin,
    Semicolon,
    End,
    Command(TokenKind),
    Assignment,
    Expression,
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trace::Begin => write!(f, "Parsing BEGIN"),
            Trace::Semicolon => write!(f, "Parsing SEMICOLON"),
            Trace::End => write!(f, "Parsing END"),
            Trace::Command(kind) => write!(f, "Parsing command with token: {}", kind),
            Trace::Assignment => write!(f, "Parsing assignment"),
            Trace::Expression => write!(f, "Parsing expression"),
        }
    }
}

/// Output stream a line belongs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One line of checker output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    Trace(Trace),
    Diagnostic(SyntaxError),
}

impl TranscriptLine {
    /// Traces go to stdout, diagnostics to stderr
    pub fn stream(&self) -> Stream {
        match self {
            TranscriptLine::Trace(_) => Stream::Stdout,
            TranscriptLine::Diagnostic(_) => Stream::Stderr,
        }
    }

    pub fn is_diagnostic(&self) -> bool {
        matches!(self, TranscriptLine::Diagnostic(_))
    }
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptLine::Trace(trace) => write!(f, "{}", trace),
            TranscriptLine::Diagnostic(err) => write!(f, "{}", err),
        }
    }
}

/// Ordered record of everything a check printed.
///
/// Lines keep the order in which the checker produced them, so rendering
/// the transcript reproduces the interleaving of trace output and
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    pub fn trace(&mut self, trace: Trace) {
        self.lines.push(TranscriptLine::Trace(trace));
    }

    pub fn diagnostic(&mut self, err: SyntaxError) {
        self.lines.push(TranscriptLine::Diagnostic(err));
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &SyntaxError> {
        self.lines.iter().filter_map(|line| match line {
            TranscriptLine::Diagnostic(err) => Some(err),
            TranscriptLine::Trace(_) => None,
        })
    }

    pub fn traces(&self) -> impl Iterator<Item = &Trace> {
        self.lines.iter().filter_map(|line| match line {
            TranscriptLine::Trace(trace) => Some(trace),
            TranscriptLine::Diagnostic(_) => None,
        })
    }

    /// Number of diagnostics recorded
    pub fn error_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_diagnostic()).count()
    }

    /// True when the check produced no diagnostics
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    /// Get all lines as rendered text, in order
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.to_string()).collect()
    }

    /// Rendered lines destined for one stream
    pub fn stream_output(&self, stream: Stream) -> Vec<String> {
        self.lines
            .iter()
            .filter(|line| line.stream() == stream)
            .map(|line| line.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
