use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum RuntimeError {
    /// A tree node carried a symbol the operator registry does not know for
    /// the node's arity.
    #[error("Runtime error: Unknown operator or function '{symbol}'.")]
    UnknownSymbol {
        /// The symbol found on the node.
        symbol: String,
    },
    /// A number leaf held text that is not a floating-point literal.
    #[error("Runtime error: '{text}' is not a valid number.")]
    InvalidLiteral {
        /// The leaf text.
        text: String,
    },
}
