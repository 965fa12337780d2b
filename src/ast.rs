/// A node of an expression tree.
///
/// Leaves keep the literal text they were built from; inner nodes keep the
/// operator symbol as written in the registry. Children are owned exclusively,
/// so a tree is dropped as a whole once evaluated.
///
/// Evaluation, [`Expr::node_count`] and dropping walk the tree iteratively.
/// `Display`, `Clone` and the comparisons recurse and are meant for the
/// shallow trees of tests and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal, or the rendered value of a substituted variable.
    Number {
        /// The literal text, parsed as `f64` during evaluation.
        text: String,
    },
    /// A postfix unary operator (`++`) or a function (`sin`, `ctg`) applied to
    /// a single operand.
    Unary {
        /// The operator or function symbol.
        symbol:  String,
        /// The operand.
        operand: Box<Self>,
    },
    /// A binary operator applied to two operands.
    Binary {
        /// The operator symbol.
        symbol: String,
        /// Left operand.
        left:   Box<Self>,
        /// Right operand.
        right:  Box<Self>,
    },
}

impl Expr {
    /// Number of nodes in the tree.
    ///
    /// ## Example
    /// ```
    /// use shunt::ast::Expr;
    ///
    /// let expr = Expr::Binary { symbol: "+".to_string(),
    ///                           left:   Box::new(Expr::Number { text: "1".to_string() }),
    ///                           right:  Box::new(Expr::Number { text: "2".to_string() }), };
    ///
    /// assert_eq!(expr.node_count(), 3);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            match node {
                Self::Number { .. } => {},
                Self::Unary { operand, .. } => pending.push(operand),
                Self::Binary { left, right, .. } => {
                    pending.push(right);
                    pending.push(left);
                },
            }
        }
        count
    }

    /// Moves the children of this node into `into`, leaving empty leaves in
    /// their place.
    fn detach_children(&mut self, into: &mut Vec<Box<Self>>) {
        let leaf = || Box::new(Self::Number { text: String::new() });
        match self {
            Self::Number { .. } => {},
            Self::Unary { operand, .. } => into.push(std::mem::replace(operand, leaf())),
            Self::Binary { left, right, .. } => {
                into.push(std::mem::replace(left, leaf()));
                into.push(std::mem::replace(right, leaf()));
            },
        }
    }
}

// Long sums and `++` chains build trees thousands of levels deep; tear them
// down without recursing.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { text } => write!(f, "{text}"),
            Self::Unary { symbol, operand } => {
                if symbol.chars().all(char::is_alphabetic) {
                    write!(f, "{symbol}({operand})")
                } else {
                    write!(f, "({operand}{symbol})")
                }
            },
            Self::Binary { symbol, left, right } => write!(f, "({left} {symbol} {right})"),
        }
    }
}

/// A node of the statement tree.
///
/// Expressions embedded in statements are kept as source text and rebuilt
/// against the current variable store every time they are evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `if (condition) body`: runs `body` once when the condition is non-zero.
    Conditional {
        /// Condition source, parentheses included.
        condition: String,
        /// The guarded statement.
        body:      Box<Self>,
    },
    /// `while (condition) body`: pre-tested loop without an iteration cap.
    Loop {
        /// Condition source, parentheses included.
        condition: String,
        /// The repeated statement.
        body:      Box<Self>,
    },
    /// `name = value;`
    Assignment {
        /// The variable being written.
        name:  String,
        /// Source of the assigned expression.
        value: String,
    },
    /// `return value;`: appends the value to the results and carries on.
    Return {
        /// Source of the returned expression.
        value: String,
    },
    /// Statements executed in order.
    Sequence(Vec<Self>),
}

impl Statement {
    /// Short name of the statement kind, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Conditional { .. } => "if",
            Self::Loop { .. } => "while",
            Self::Assignment { .. } => "assignment",
            Self::Return { .. } => "return",
            Self::Sequence(_) => "sequence",
        }
    }
}
