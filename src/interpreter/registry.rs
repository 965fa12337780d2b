use crate::interpreter::lexer::TokenKind;

/// The numeric meaning of a registered operator.
#[derive(Clone, Copy)]
pub enum Semantic {
    /// Combines a left and a right operand.
    Binary(fn(f64, f64) -> f64),
    /// Transforms a single operand.
    Unary(fn(f64) -> f64),
}

/// Describes one operator or function symbol.
pub struct OperatorDef {
    /// The symbol as written in source (`+`, `==`, `sin`, ...).
    pub symbol:     &'static str,
    /// How the tree builder treats the symbol.
    pub kind:       TokenKind,
    /// Binding strength of binary operators. Postfix unary operators and
    /// functions carry one too, but the tree builder applies them as soon as
    /// their operand is complete.
    pub precedence: u8,
    /// What the symbol computes.
    pub semantic:   Semantic,
}

/// Defines the operator registry as a static table.
///
/// Each entry provides the symbol, its token kind, its precedence and the
/// function pointer implementing it.
macro_rules! operators {
    (
        $(
            $symbol:literal => {
                kind: $kind:expr,
                precedence: $precedence:expr,
                semantic: $semantic:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static OPERATORS: &[OperatorDef] = &[
            $(
                OperatorDef { symbol: $symbol, kind: $kind, precedence: $precedence, semantic: $semantic },
            )*
        ];
        /// Every symbol known to the registry, in declaration order.
        pub const OPERATOR_SYMBOLS: &[&str] = &[
            $($symbol,)*
        ];
    };
}

fn bool_to_f64(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

operators! {
    "+"   => { kind: TokenKind::Operator, precedence: 1, semantic: Semantic::Binary(|l, r| l + r) },
    "-"   => { kind: TokenKind::Operator, precedence: 1, semantic: Semantic::Binary(|l, r| l - r) },
    "/"   => { kind: TokenKind::Operator, precedence: 2, semantic: Semantic::Binary(|l, r| l / r) },
    "*"   => { kind: TokenKind::Operator, precedence: 2, semantic: Semantic::Binary(|l, r| l * r) },
    "=="  => { kind: TokenKind::Operator, precedence: 0, semantic: Semantic::Binary(|l, r| bool_to_f64(l == r)) },
    ">"   => { kind: TokenKind::Operator, precedence: 0, semantic: Semantic::Binary(|l, r| bool_to_f64(l > r)) },
    "<"   => { kind: TokenKind::Operator, precedence: 0, semantic: Semantic::Binary(|l, r| bool_to_f64(l < r)) },
    "^"   => { kind: TokenKind::Operator, precedence: 3, semantic: Semantic::Binary(f64::powf) },
    "++"  => { kind: TokenKind::Unary,    precedence: 1, semantic: Semantic::Unary(|x| x + 1.0) },
    "sin" => { kind: TokenKind::Function, precedence: 1, semantic: Semantic::Unary(f64::sin) },
    "ctg" => { kind: TokenKind::Function, precedence: 1, semantic: Semantic::Unary(|x: f64| 1.0 / x.tan()) },
}

/// Looks a symbol up in the registry.
///
/// # Example
/// ```
/// use shunt::interpreter::{lexer::TokenKind, registry::lookup};
///
/// let plus = lookup("+").unwrap();
/// assert_eq!(plus.kind, TokenKind::Operator);
/// assert_eq!(plus.precedence, 1);
///
/// assert!(lookup("cos").is_none());
/// ```
#[must_use]
pub fn lookup(symbol: &str) -> Option<&'static OperatorDef> {
    OPERATORS.iter().find(|def| def.symbol == symbol)
}

/// Returns the longest registered symbol that `text` starts with.
///
/// Multi-character symbols win over their single-character prefixes, so `==`
/// is preferred to a lone `=` and `++` to `+`.
///
/// # Example
/// ```
/// use shunt::interpreter::registry::longest_match;
///
/// assert_eq!(longest_match("++2").map(|d| d.symbol), Some("++"));
/// assert_eq!(longest_match("==3").map(|d| d.symbol), Some("=="));
/// assert_eq!(longest_match("+3").map(|d| d.symbol), Some("+"));
/// assert!(longest_match("=3").is_none());
/// ```
#[must_use]
pub fn longest_match(text: &str) -> Option<&'static OperatorDef> {
    OPERATORS.iter()
             .filter(|def| text.starts_with(def.symbol))
             .max_by_key(|def| def.symbol.len())
}

/// Tests whether `name` is taken by an operator or function.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    OPERATOR_SYMBOLS.contains(&name)
}

impl OperatorDef {
    /// Applies a binary operator. Returns `None` for unary entries.
    #[must_use]
    pub fn apply_binary(&self, left: f64, right: f64) -> Option<f64> {
        match self.semantic {
            Semantic::Binary(f) => Some(f(left, right)),
            Semantic::Unary(_) => None,
        }
    }

    /// Applies a unary operator or function. Returns `None` for binary entries.
    #[must_use]
    pub fn apply_unary(&self, operand: f64) -> Option<f64> {
        match self.semantic {
            Semantic::Unary(f) => Some(f(operand)),
            Semantic::Binary(_) => None,
        }
    }
}
