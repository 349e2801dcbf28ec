//! Top-level parse failures and their rendering.

mod printer;


pub use printer::ParseErrorPrinter;

use llparse_core::Expected;

use crate::engine::Failure;

/// Input that did not match a grammar.
///
/// Carries the furthest offset the parser reached and everything that would
/// have been accepted there.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse error at offset {position}: expected {expected}")]
pub struct ParseError {
    pub position: usize,
    pub expected: Expected,
}

impl ParseError {
    pub fn new(position: usize, expected: Expected) -> Self {
        Self { position, expected }
    }

    /// 1-based line and column (in characters) of the failure offset.
    ///
    /// Offsets past the end of `source`, or inside a character, are clamped
    /// to the nearest preceding character boundary.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let mut offset = self.position.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }

    /// Short message used as the rendered title.
    pub fn message(&self) -> String {
        format!("expected {}", self.expected)
    }

    pub fn printer(&self) -> ParseErrorPrinter<'_, '_> {
        ParseErrorPrinter::new(self)
    }
}

impl From<Failure> for ParseError {
    fn from(failure: Failure) -> Self {
        Self::new(failure.position, failure.expected)
    }
}
