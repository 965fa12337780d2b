use std::path::PathBuf;

use thiserror::Error;

/// Parsing errors.
///
/// Defines the errors raised while tokenizing expressions, building expression
/// trees and splitting or classifying statements.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating an already built expression
/// tree.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure surfaced by the interpreter.
#[derive(Debug, Error)]
pub enum Error {
    /// Tokenization, expression or statement syntax failure.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failure.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The program text could not be read.
    #[error("Failed to read the input file '{}': {source}", .path.display())]
    SourceAccess {
        /// Path that was being read.
        path:   PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    #[must_use]
    pub const fn is_tokenization(&self) -> bool {
        matches!(self, Self::Parse(ParseError::Tokenization { .. }))
    }

    #[must_use]
    pub const fn is_expression_syntax(&self) -> bool {
        matches!(self, Self::Parse(ParseError::ExpressionSyntax { .. }))
    }

    #[must_use]
    pub const fn is_statement_syntax(&self) -> bool {
        matches!(self, Self::Parse(ParseError::StatementSyntax { .. }))
    }

    #[must_use]
    pub const fn is_unknown_symbol(&self) -> bool {
        matches!(self, Self::Runtime(RuntimeError::UnknownSymbol { .. }))
    }

    #[must_use]
    pub const fn is_source_access(&self) -> bool {
        matches!(self, Self::SourceAccess { .. })
    }
}
