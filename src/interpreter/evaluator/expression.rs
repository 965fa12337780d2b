use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::core::Context, registry},
};

impl Context {
    /// Evaluates an expression tree.
    ///
    /// Leaves parse their text as a floating-point literal. Inner nodes
    /// evaluate their children first, left to right, and then apply the
    /// registry semantic of their symbol. The walk keeps its own stack, so the
    /// depth of the tree is not bounded by the thread stack. Division by zero and other IEEE-754 edge cases are not
    /// errors; infinities and NaN flow through the tree like any other value.
    ///
    /// Variables were substituted when the tree was built, so the evaluation
    /// does not read the variable store.
    ///
    /// # Errors
    /// - [`RuntimeError::InvalidLiteral`] if a leaf is not a number.
    /// - [`RuntimeError::UnknownSymbol`] if a node carries a symbol the
    ///   registry does not know for its arity.
    ///
    /// # Example
    /// ```
    /// use shunt::{
    ///     ast::Expr,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let leaf = |text: &str| Box::new(Expr::Number { text: text.to_string() });
    ///
    /// let sum = Expr::Binary { symbol: "+".to_string(),
    ///                          left:   leaf("2"),
    ///                          right:  leaf("3"), };
    /// assert_eq!(Context::eval_expr(&sum).unwrap(), 5.0);
    ///
    /// let bogus = Expr::Unary { symbol:  "cos".to_string(),
    ///                           operand: leaf("0"), };
    /// assert!(Context::eval_expr(&bogus).is_err());
    /// ```
    pub fn eval_expr(expr: &Expr) -> Result<f64, RuntimeError> {
        let mut work = vec![Step::Visit(expr)];
        let mut values: Vec<f64> = Vec::new();

        while let Some(step) = work.pop() {
            match step {
                Step::Visit(Expr::Number { text }) => {
                    let value = text.parse::<f64>()
                                    .map_err(|_| RuntimeError::InvalidLiteral { text: text.clone() })?;
                    values.push(value);
                },
                Step::Visit(Expr::Unary { symbol, operand }) => {
                    work.push(Step::Unary(symbol));
                    work.push(Step::Visit(operand));
                },
                Step::Visit(Expr::Binary { symbol, left, right }) => {
                    work.push(Step::Binary(symbol));
                    work.push(Step::Visit(right));
                    work.push(Step::Visit(left));
                },
                Step::Unary(symbol) => {
                    let Some(operand) = values.pop() else {
                        unreachable!("a unary node is applied after its operand")
                    };
                    let value = registry::lookup(symbol).and_then(|def| def.apply_unary(operand))
                                                        .ok_or_else(|| unknown(symbol))?;
                    values.push(value);
                },
                Step::Binary(symbol) => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("a binary node is applied after both operands")
                    };
                    let value = registry::lookup(symbol).and_then(|def| def.apply_binary(left, right))
                                                        .ok_or_else(|| unknown(symbol))?;
                    values.push(value);
                },
            }
        }

        let Some(value) = values.pop() else {
            unreachable!("a tree always yields a value")
        };
        Ok(value)
    }
}

/// Pending work of the tree walk: nodes still to visit, and operators whose
/// operands are already on the value stack.
enum Step<'e> {
    Visit(&'e Expr),
    Unary(&'e str),
    Binary(&'e str),
}

fn unknown(symbol: &str) -> RuntimeError {
    RuntimeError::UnknownSymbol { symbol: symbol.to_string() }
}
