/// Expression parsing entry point.
///
/// Tokenizes expression text against the current variables and hands the
/// tokens to the tree builder.
pub mod core;

/// Shunting-yard tree construction.
///
/// Turns a flat token sequence into a precedence-correct expression tree using
/// an operand stack and an operator stack.
pub mod shunting_yard;

/// Statement splitting and block parsing.
///
/// Cuts program text at top-level semicolons and balanced brace blocks.
pub mod block;

/// Statement classification and construction.
///
/// Recognizes conditionals, loops, assignments and returns, and builds the
/// matching statement nodes, recursing into bodies.
pub mod statement;
