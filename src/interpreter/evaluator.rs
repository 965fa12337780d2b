/// Core evaluation logic and context management.
///
/// Contains the runtime context holding the variable store and the returned
/// values, and the statement executor.
pub mod core;

/// Expression tree evaluation.
///
/// Walks an expression tree and applies the operator registry semantics.
pub mod expression;

/// Evaluation of conditionals and loops.
///
/// Re-evaluates the condition against the current variables and runs the body
/// while it is non-zero.
pub mod control_flow;
