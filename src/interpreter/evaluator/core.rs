use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::Statement,
    error::Error,
    interpreter::parser::{block::parse_block, core::parse_expression},
};

/// Result type used by the statement executor.
///
/// Expressions are parsed again each time they are evaluated, so execution can
/// fail with parse errors as well as runtime errors.
pub type EvalResult<T> = Result<T, Error>;

/// The variable store: one global namespace from names to values.
pub type Variables = HashMap<String, f64>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable store written by
/// assignments and the values emitted by `return` statements, in order.
///
/// ## Usage
///
/// A `Context` is created once per program run. Separate contexts never share
/// state, so several programs can run side by side.
///
/// ```
/// use shunt::interpreter::evaluator::core::Context;
///
/// let mut context = Context::new();
/// context.run("x = 0; while (x < 3) { x = x + 1; } return x; return x * 2;").unwrap();
///
/// assert_eq!(context.variable("x"), Some(3.0));
/// assert_eq!(context.results(), &[3.0, 6.0]);
/// ```
#[derive(Debug, Default)]
pub struct Context {
    /// Current value of every assigned variable.
    pub variables: Variables,
    /// Values emitted by executed `return` statements.
    pub results:   Vec<f64>,
}

impl Context {
    /// Creates a context with no variables and no results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and executes a whole program.
    ///
    /// # Errors
    /// Returns the first parse or runtime error met. Statements executed
    /// before the failure keep their effects.
    pub fn run(&mut self, source: &str) -> EvalResult<()> {
        let program = parse_block(source)?;
        self.eval_statement(&program)
    }

    /// Executes a single statement.
    ///
    /// - `Sequence`: children run in order.
    /// - `Conditional` and `Loop`: see [`Context::eval_conditional`] and
    ///   [`Context::eval_loop`].
    /// - `Assignment`: the value is evaluated and stored, visible to every
    ///   later expression.
    /// - `Return`: the value is evaluated and appended to the results.
    ///   Execution continues with the next statement.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        debug!(kind = statement.kind(), "execute");
        match statement {
            Statement::Sequence(statements) => {
                for statement in statements {
                    self.eval_statement(statement)?;
                }
                Ok(())
            },
            Statement::Conditional { condition, body } => self.eval_conditional(condition, body),
            Statement::Loop { condition, body } => self.eval_loop(condition, body),
            Statement::Assignment { name, value } => {
                let value = self.evaluate_source(value)?;
                debug!(name = name.as_str(), value, "assign");
                self.variables.insert(name.clone(), value);
                Ok(())
            },
            Statement::Return { value } => {
                let value = self.evaluate_source(value)?;
                debug!(value, "return");
                self.results.push(value);
                Ok(())
            },
        }
    }

    /// Parses expression source against the current variables and evaluates
    /// it.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.variables.insert("x".to_string(), 5.0);
    ///
    /// assert_eq!(context.evaluate_source("x + 1").unwrap(), 6.0);
    /// assert!(context.evaluate_source("y + 1").is_err());
    /// ```
    pub fn evaluate_source(&self, source: &str) -> EvalResult<f64> {
        let tree = parse_expression(source, &self.variables)?;
        Ok(Self::eval_expr(&tree)?)
    }

    /// Current value of a variable, if it was ever assigned.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Values emitted so far, in execution order.
    #[must_use]
    pub fn results(&self) -> &[f64] {
        &self.results
    }

    /// Consumes the context and returns the emitted values.
    #[must_use]
    pub fn into_results(self) -> Vec<f64> {
        self.results
    }
}
