use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
        registry,
    },
};

/// Entries waiting on the operator stack.
enum Pending<'t> {
    /// A binary operator with its precedence.
    Binary { symbol: &'t str, precedence: u8 },
    /// A function whose parenthesized argument has not been closed yet.
    Function(&'t str),
    /// An open parenthesis, with the operand count at the time it was opened.
    Marker { depth: usize },
}

/// Operand and operator stacks of the shunting-yard algorithm.
struct Yard<'t> {
    operands:   Vec<Expr>,
    operators:  Vec<Pending<'t>>,
    expression: &'t str,
}

impl<'t> Yard<'t> {
    /// Operand count below which the innermost open parenthesis may not reach.
    fn floor(&self) -> usize {
        self.operators.iter()
                      .rev()
                      .find_map(|pending| match pending {
                          Pending::Marker { depth } => Some(*depth),
                          _ => None,
                      })
                      .unwrap_or(0)
    }

    fn pop_operand(&mut self, symbol: &str) -> ParseResult<Expr> {
        if self.operands.len() > self.floor()
           && let Some(operand) = self.operands.pop()
        {
            return Ok(operand);
        }
        Err(ParseError::syntax(format!("Missing operand for '{symbol}'"), self.expression))
    }

    fn reduce_binary(&mut self, symbol: &str) -> ParseResult<()> {
        let right = self.pop_operand(symbol)?;
        let left = self.pop_operand(symbol)?;
        self.operands.push(Expr::Binary { symbol: symbol.to_string(),
                                          left:   Box::new(left),
                                          right:  Box::new(right), });
        Ok(())
    }

    fn apply_unary(&mut self, symbol: &str) -> ParseResult<()> {
        let operand = self.pop_operand(symbol)?;
        self.operands.push(Expr::Unary { symbol:  symbol.to_string(),
                                         operand: Box::new(operand), });
        Ok(())
    }

    fn push_binary(&mut self, symbol: &'t str) -> ParseResult<()> {
        let precedence = registry::lookup(symbol).map(|def| def.precedence)
                                                 .ok_or_else(|| {
                                                     ParseError::syntax(format!("Unknown operator '{symbol}'"),
                                                                        self.expression)
                                                 })?;

        while let Some(&Pending::Binary { symbol: top,
                                          precedence: top_precedence, }) = self.operators.last()
        {
            if top_precedence < precedence {
                break;
            }
            self.operators.pop();
            self.reduce_binary(top)?;
        }

        self.operators.push(Pending::Binary { symbol, precedence });
        Ok(())
    }

    fn close_parenthesis(&mut self) -> ParseResult<()> {
        let depth = loop {
            match self.operators.pop() {
                Some(Pending::Binary { symbol, .. }) => self.reduce_binary(symbol)?,
                Some(Pending::Marker { depth }) => break depth,
                Some(Pending::Function(symbol)) => {
                    return Err(ParseError::syntax(format!("Function '{symbol}' must be followed by '('"),
                                                  self.expression));
                },
                None => {
                    return Err(ParseError::syntax("Closing parenthesis ')' has no matching '('",
                                                  self.expression));
                },
            }
        };

        match self.operands.len().saturating_sub(depth) {
            1 => {},
            0 => return Err(ParseError::syntax("Parentheses '()' enclose no expression", self.expression)),
            n => {
                return Err(ParseError::syntax(format!("{n} operands inside parentheses are not joined by an operator"),
                                              self.expression));
            },
        }

        if let Some(&Pending::Function(symbol)) = self.operators.last() {
            self.operators.pop();
            self.apply_unary(symbol)?;
        }
        Ok(())
    }

    fn finish(mut self) -> ParseResult<Expr> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Binary { symbol, .. } => self.reduce_binary(symbol)?,
                Pending::Marker { .. } => {
                    return Err(ParseError::syntax("Expected closing parenthesis ')' but none found",
                                                  self.expression));
                },
                Pending::Function(symbol) => {
                    return Err(ParseError::syntax(format!("Function '{symbol}' is missing its argument"),
                                                  self.expression));
                },
            }
        }

        let root = self.operands.pop().ok_or_else(|| {
                                           ParseError::syntax("Expression is empty",
                                                              self.expression)
                                       })?;
        if !self.operands.is_empty() {
            return Err(ParseError::syntax(format!("{} operands are not joined by an operator",
                                                  self.operands.len() + 1),
                                          self.expression));
        }
        Ok(root)
    }
}

/// Builds an expression tree from a token sequence.
///
/// Operands are pushed as leaves. Postfix unary operators wrap the latest
/// operand at once. Binary operators first reduce every pending binary
/// operator of equal or higher precedence, which makes them left-associative.
/// Functions wait on the operator stack until the parenthesis that follows them
/// closes. Every parenthesized group must reduce to exactly one operand of its
/// own; operators inside it never reach operands outside.
///
/// `expression` is the source text, used for error reporting only.
///
/// # Errors
/// Returns [`ParseError::ExpressionSyntax`] if an operand is missing, the
/// parentheses do not balance, a function has no parenthesized argument, or
/// the tokens do not reduce to exactly one tree.
///
/// # Example
/// ```
/// use shunt::{
///     ast::Expr,
///     interpreter::{
///         lexer::{Token, TokenKind},
///         parser::shunting_yard::build,
///     },
/// };
///
/// let tokens = [Token::new("2", TokenKind::Number),
///               Token::new("+", TokenKind::Operator),
///               Token::new("3", TokenKind::Number),
///               Token::new("*", TokenKind::Operator),
///               Token::new("4", TokenKind::Number)];
///
/// let tree = build(&tokens, "2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// assert!(build(&tokens[..2], "2 +").is_err());
/// ```
pub fn build(tokens: &[Token], expression: &str) -> ParseResult<Expr> {
    let mut yard = Yard { operands: Vec::new(),
                          operators: Vec::new(),
                          expression };

    for token in tokens {
        match token.kind {
            TokenKind::Number => yard.operands.push(Expr::Number { text: token.text.clone() }),
            TokenKind::Unary => yard.apply_unary(&token.text)?,
            TokenKind::Function => yard.operators.push(Pending::Function(&token.text)),
            TokenKind::Operator => yard.push_binary(&token.text)?,
            TokenKind::Parenthesis => match token.text.as_str() {
                "(" => {
                    let depth = yard.operands.len();
                    yard.operators.push(Pending::Marker { depth });
                },
                ")" => yard.close_parenthesis()?,
                other => {
                    return Err(ParseError::syntax(format!("Unexpected parenthesis token '{other}'"),
                                                  expression));
                },
            },
        }
    }

    let root = yard.finish()?;
    trace!(expression = expression.trim(), nodes = root.node_count(), "built expression tree");
    Ok(root)
}
