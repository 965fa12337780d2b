use tracing::trace;

use crate::{
    ast::Statement,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// Any non-zero value, NaN included, counts as true.
#[allow(clippy::float_cmp)]
fn is_truthy(value: f64) -> bool {
    value != 0.0
}

impl Context {
    /// Evaluates an `if` statement.
    ///
    /// The condition is evaluated against the current variables; the body runs
    /// once if it is non-zero. There is no `else` branch.
    ///
    /// # Example
    /// ```
    /// use shunt::{ast::Statement, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new();
    /// let body = Statement::Return { value: "1".to_string() };
    ///
    /// context.eval_conditional("(2 > 3)", &body).unwrap();
    /// context.eval_conditional("(3 > 2)", &body).unwrap();
    /// assert_eq!(context.results(), &[1.0]);
    /// ```
    pub fn eval_conditional(&mut self, condition: &str, body: &Statement) -> EvalResult<()> {
        if is_truthy(self.evaluate_source(condition)?) {
            self.eval_statement(body)?;
        }
        Ok(())
    }

    /// Evaluates a `while` statement.
    ///
    /// The condition is evaluated before every iteration and the body runs
    /// while it is non-zero. There is no iteration limit: a condition that
    /// never becomes zero keeps the loop running.
    pub fn eval_loop(&mut self, condition: &str, body: &Statement) -> EvalResult<()> {
        let mut iterations = 0usize;

        while is_truthy(self.evaluate_source(condition)?) {
            self.eval_statement(body)?;
            iterations += 1;
        }

        trace!(condition, iterations, "loop finished");
        Ok(())
    }
}
