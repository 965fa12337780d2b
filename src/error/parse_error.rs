use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing expressions or
/// assembling statements.
pub enum ParseError {
    /// A character sequence matched neither a number, a known variable nor a
    /// registered operator.
    #[error("Error in expression '{expression}': Unrecognized input '{fragment}'.")]
    Tokenization {
        /// The unrecognized text, starting at the offending position.
        fragment:   String,
        /// The expression being tokenized.
        expression: String,
    },
    /// The token stream did not form a well-shaped expression tree.
    #[error("Error in expression '{expression}': {details}.")]
    ExpressionSyntax {
        /// What went wrong while building the tree.
        details:    String,
        /// The expression being built.
        expression: String,
    },
    /// A statement could not be split or classified.
    #[error("Error in statement '{statement}': {details}.")]
    StatementSyntax {
        /// What went wrong while reading the statement.
        details:   String,
        /// The offending statement text.
        statement: String,
    },
}

impl ParseError {
    pub(crate) fn syntax(details: impl Into<String>, expression: &str) -> Self {
        Self::ExpressionSyntax { details:    details.into(),
                                 expression: expression.trim().to_string(), }
    }

    pub(crate) fn statement(details: impl Into<String>, statement: &str) -> Self {
        Self::StatementSyntax { details:   details.into(),
                                statement: statement.trim().to_string(), }
    }
}
