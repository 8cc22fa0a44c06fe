//! The flattened expression representation used for symbolic algebra.

use crate::primitive::{int, int_from_str, rational_from_str};
use rug::{Float, Integer, Rational};
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg};
use unc_parser::parser::{expr::Expr as AstExpr, literal::Literal, token::op::BinOpKind, Precedence};

/// A terminal node in a symbolic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// An integer, such as `2` or `-144`.
    Integer(Integer),

    /// An exact rational number. Decimal literals become rationals, so `3.14` is carried as
    /// `157/50` with no rounding.
    Rational(Rational),

    /// An arbitrary-precision float. These only appear through substitution of measurement
    /// values; the parser never produces one.
    Float(Float),

    /// A variable or constant, such as `x` or `pi`.
    Symbol(String),

    /// A function call, such as `sin(x)`.
    Call(String, Vec<SymExpr>),
}

impl Display for Primary {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Primary::Integer(n) => write!(f, "{}", n),
            Primary::Rational(n) => {
                if *n.denom() == 1 {
                    write!(f, "{}", n.numer())
                } else {
                    write!(f, "{}/{}", n.numer(), n.denom())
                }
            },
            Primary::Float(n) => write!(f, "{}", n.to_f64()),
            Primary::Symbol(name) => write!(f, "{}", name),
            Primary::Call(name, args) => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            },
        }
    }
}

/// A mathematical expression, flattened for symbolic manipulation.
///
/// Addition and multiplication are n-ary, and subtraction, division, and negation are desugared
/// away when converting from the syntax tree: `a - b` becomes `a + (-1 * b)` and `a / b` becomes
/// `a * b^-1`. The [`Add`] and [`Mul`] operator impls flatten nested sums and products as they
/// build, but nothing here combines numeric terms; expressions stay exactly as constructed.
#[derive(Debug, Clone)]
pub enum SymExpr {
    /// A terminal node.
    Primary(Primary),

    /// The sum of two or more expressions.
    Add(Vec<SymExpr>),

    /// The product of two or more expressions.
    Mul(Vec<SymExpr>),

    /// One expression raised to the power of another.
    Exp(Box<SymExpr>, Box<SymExpr>),
}

impl SymExpr {
    /// Returns the precedence of the operation this expression represents, or [`None`] for
    /// terminal nodes, which never need parenthesization.
    pub(crate) fn precedence(&self) -> Option<Precedence> {
        match self {
            SymExpr::Primary(_) => None,
            SymExpr::Add(_) => Some(BinOpKind::Add.precedence()),
            SymExpr::Mul(_) => Some(BinOpKind::Mul.precedence()),
            SymExpr::Exp(..) => Some(BinOpKind::Exp.precedence()),
        }
    }

    /// If this expression is a sum or product with zero or one operands, simplifies it to the
    /// equivalent terminal form: the empty sum is `0`, the empty product is `1`, and a singleton
    /// of either is its sole operand.
    pub fn downgrade(self) -> Self {
        match self {
            SymExpr::Add(mut terms) => match terms.len() {
                0 => SymExpr::Primary(Primary::Integer(int(0))),
                1 => terms.remove(0),
                _ => SymExpr::Add(terms),
            },
            SymExpr::Mul(mut factors) => match factors.len() {
                0 => SymExpr::Primary(Primary::Integer(int(1))),
                1 => factors.remove(0),
                _ => SymExpr::Mul(factors),
            },
            expr => expr,
        }
    }

    /// Returns true if the given symbol occurs anywhere in this expression.
    pub fn contains_symbol(&self, name: &str) -> bool {
        match self {
            SymExpr::Primary(Primary::Symbol(sym)) => sym == name,
            SymExpr::Primary(Primary::Call(_, args)) => {
                args.iter().any(|arg| arg.contains_symbol(name))
            },
            SymExpr::Primary(_) => false,
            SymExpr::Add(terms) => terms.iter().any(|term| term.contains_symbol(name)),
            SymExpr::Mul(factors) => factors.iter().any(|factor| factor.contains_symbol(name)),
            SymExpr::Exp(base, exponent) => {
                base.contains_symbol(name) || exponent.contains_symbol(name)
            },
        }
    }

    /// Replaces every occurrence of the given symbol with the given expression.
    ///
    /// The replacement is purely structural; nothing is evaluated or folded, so a derivation can
    /// render the result with the substituted values visibly in place.
    pub fn substitute(&self, name: &str, value: &SymExpr) -> SymExpr {
        match self {
            SymExpr::Primary(Primary::Symbol(sym)) if sym == name => value.clone(),
            SymExpr::Primary(Primary::Call(func, args)) => SymExpr::Primary(Primary::Call(
                func.clone(),
                args.iter().map(|arg| arg.substitute(name, value)).collect(),
            )),
            SymExpr::Primary(primary) => SymExpr::Primary(primary.clone()),
            SymExpr::Add(terms) => {
                SymExpr::Add(terms.iter().map(|term| term.substitute(name, value)).collect())
            },
            SymExpr::Mul(factors) => SymExpr::Mul(
                factors.iter().map(|factor| factor.substitute(name, value)).collect(),
            ),
            SymExpr::Exp(base, exponent) => SymExpr::Exp(
                Box::new(base.substitute(name, value)),
                Box::new(exponent.substitute(name, value)),
            ),
        }
    }
}

/// Creates a fraction: the numerator times the denominator raised to the power of negative one.
pub(crate) fn make_fraction(numerator: SymExpr, denominator: SymExpr) -> SymExpr {
    numerator
        * SymExpr::Exp(
            Box::new(denominator),
            Box::new(SymExpr::Primary(Primary::Integer(int(-1)))),
        )
}

impl From<AstExpr> for SymExpr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Integer(num)) => {
                SymExpr::Primary(Primary::Integer(int_from_str(&num.value)))
            },
            AstExpr::Literal(Literal::Float(num)) => {
                SymExpr::Primary(Primary::Rational(rational_from_str(&num.value)))
            },
            AstExpr::Literal(Literal::Symbol(sym)) => SymExpr::Primary(Primary::Symbol(sym.name)),
            AstExpr::Paren(paren) => Self::from(*paren.expr),
            AstExpr::Call(call) => SymExpr::Primary(Primary::Call(
                call.name.name,
                call.args.into_iter().map(Self::from).collect(),
            )),
            AstExpr::Unary(unary) => -Self::from(*unary.operand),
            AstExpr::Binary(binary) => {
                let lhs = Self::from(*binary.lhs);
                let rhs = Self::from(*binary.rhs);
                match binary.op.kind {
                    BinOpKind::Add => lhs + rhs,
                    BinOpKind::Sub => lhs + -rhs,
                    BinOpKind::Mul => lhs * rhs,
                    BinOpKind::Div => make_fraction(lhs, rhs),
                    BinOpKind::Exp => SymExpr::Exp(Box::new(lhs), Box::new(rhs)),
                }
            },
        }
    }
}

impl PartialEq for SymExpr {
    /// Compares two expressions structurally, ignoring the order of operands in sums and
    /// products. No algebraic identities are applied, so `x + x` and `2 * x` are not equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SymExpr::Primary(a), SymExpr::Primary(b)) => a == b,
            (SymExpr::Add(a), SymExpr::Add(b)) | (SymExpr::Mul(a), SymExpr::Mul(b)) => {
                a.len() == b.len() && a.iter().all(|operand| b.contains(operand))
            },
            (SymExpr::Exp(a_base, a_exp), SymExpr::Exp(b_base, b_exp)) => {
                a_base == b_base && a_exp == b_exp
            },
            _ => false,
        }
    }
}

impl Neg for SymExpr {
    type Output = SymExpr;

    /// Negates the expression. Numbers are negated in place; anything else is multiplied by -1.
    fn neg(self) -> SymExpr {
        match self {
            SymExpr::Primary(Primary::Integer(n)) => SymExpr::Primary(Primary::Integer(-n)),
            SymExpr::Primary(Primary::Rational(n)) => SymExpr::Primary(Primary::Rational(-n)),
            SymExpr::Primary(Primary::Float(n)) => SymExpr::Primary(Primary::Float(-n)),
            expr => SymExpr::Primary(Primary::Integer(int(-1))) * expr,
        }
    }
}

impl Add for SymExpr {
    type Output = SymExpr;

    fn add(self, rhs: SymExpr) -> SymExpr {
        match (self, rhs) {
            (SymExpr::Add(mut terms), SymExpr::Add(other)) => {
                terms.extend(other);
                SymExpr::Add(terms)
            },
            (SymExpr::Add(mut terms), rhs) => {
                terms.push(rhs);
                SymExpr::Add(terms)
            },
            (lhs, SymExpr::Add(mut terms)) => {
                terms.insert(0, lhs);
                SymExpr::Add(terms)
            },
            (lhs, rhs) => SymExpr::Add(vec![lhs, rhs]),
        }
    }
}

impl AddAssign for SymExpr {
    fn add_assign(&mut self, rhs: SymExpr) {
        let lhs = std::mem::replace(self, SymExpr::Add(Vec::new()));
        *self = lhs + rhs;
    }
}

impl Mul for SymExpr {
    type Output = SymExpr;

    fn mul(self, rhs: SymExpr) -> SymExpr {
        match (self, rhs) {
            (SymExpr::Mul(mut factors), SymExpr::Mul(other)) => {
                factors.extend(other);
                SymExpr::Mul(factors)
            },
            (SymExpr::Mul(mut factors), rhs) => {
                factors.push(rhs);
                SymExpr::Mul(factors)
            },
            (lhs, SymExpr::Mul(mut factors)) => {
                factors.insert(0, lhs);
                SymExpr::Mul(factors)
            },
            (lhs, rhs) => SymExpr::Mul(vec![lhs, rhs]),
        }
    }
}

impl MulAssign for SymExpr {
    fn mul_assign(&mut self, rhs: SymExpr) {
        let lhs = std::mem::replace(self, SymExpr::Mul(Vec::new()));
        *self = lhs * rhs;
    }
}

impl Display for SymExpr {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        // parenthesize a compound child that binds looser than its parent
        fn operand(f: &mut Formatter, parent: &SymExpr, child: &SymExpr) -> std::fmt::Result {
            let parens = match (parent.precedence(), child.precedence()) {
                (Some(parent), Some(child)) => child <= parent,
                _ => false,
            };
            if parens {
                write!(f, "({})", child)
            } else {
                write!(f, "{}", child)
            }
        }

        match self {
            SymExpr::Primary(primary) => write!(f, "{}", primary),
            SymExpr::Add(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i != 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}", term)?;
                }
                Ok(())
            },
            SymExpr::Mul(factors) => {
                for (i, factor) in factors.iter().enumerate() {
                    if i != 0 {
                        write!(f, " * ")?;
                    }
                    operand(f, self, factor)?;
                }
                Ok(())
            },
            SymExpr::Exp(base, exponent) => {
                operand(f, self, base)?;
                write!(f, "^")?;
                operand(f, self, exponent)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use unc_parser::parser::Parser;
    use crate::primitive::rational;
    use super::*;

    fn convert(source: &str) -> SymExpr {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        SymExpr::from(ast)
    }

    fn sym(name: &str) -> SymExpr {
        SymExpr::Primary(Primary::Symbol(name.to_string()))
    }

    fn num(n: i32) -> SymExpr {
        SymExpr::Primary(Primary::Integer(int(n)))
    }

    #[test]
    fn flattens_sums_and_products() {
        assert_eq!(convert("a + b + c + d"), SymExpr::Add(vec![
            sym("a"),
            sym("b"),
            sym("c"),
            sym("d"),
        ]));
        assert_eq!(convert("2 * x * y"), SymExpr::Mul(vec![num(2), sym("x"), sym("y")]));
    }

    #[test]
    fn desugars_sub_and_div() {
        assert_eq!(convert("a - b"), SymExpr::Add(vec![
            sym("a"),
            SymExpr::Mul(vec![num(-1), sym("b")]),
        ]));
        assert_eq!(convert("a / b"), SymExpr::Mul(vec![
            sym("a"),
            SymExpr::Exp(Box::new(sym("b")), Box::new(num(-1))),
        ]));
    }

    #[test]
    fn decimals_are_exact() {
        assert_eq!(
            convert("9.8"),
            SymExpr::Primary(Primary::Rational(rational((49, 5)))),
        );
    }

    #[test]
    fn parens_do_not_block_flattening() {
        assert_eq!(convert("a + b + (c + (d))"), convert("a + b + c + d"));
    }

    #[test]
    fn equality_ignores_operand_order() {
        assert_eq!(convert("a + b * c"), convert("c * b + a"));
        assert_ne!(convert("a - b"), convert("b - a"));
        assert_ne!(convert("x + x"), convert("2 * x"));
    }

    #[test]
    fn substitution_is_structural() {
        let expr = convert("x^2 + sin(x) + y");
        let replaced = expr.substitute("x", &num(3));
        assert_eq!(replaced, SymExpr::Add(vec![
            SymExpr::Exp(Box::new(num(3)), Box::new(num(2))),
            SymExpr::Primary(Primary::Call("sin".to_string(), vec![num(3)])),
            sym("y"),
        ]));
        assert!(!replaced.contains_symbol("x"));
        assert!(replaced.contains_symbol("y"));
    }

    #[test]
    fn downgrade_collapses_degenerate_operands() {
        assert_eq!(SymExpr::Add(Vec::new()).downgrade(), num(0));
        assert_eq!(SymExpr::Mul(Vec::new()).downgrade(), num(1));
        assert_eq!(SymExpr::Add(vec![sym("x")]).downgrade(), sym("x"));
    }

    #[test]
    fn display_parenthesizes_by_precedence() {
        assert_eq!(convert("(a + b) * c").to_string(), "(a + b) * c");
        assert_eq!(convert("a * (b + c)^2").to_string(), "a * (b + c)^2");
    }
}
