//! Symbolic scalar expressions.
//!
//! [`Expr`] is an immutable expression tree implementing [`Scalar`], so every
//! transform in this crate can be built over free symbols (joint angles,
//! link offsets) and evaluated later against concrete bindings.
//!
//! Constructors fold constants eagerly: `0 * x` is `0`, `1 * x` is `x`, and any
//! subtree whose leaves are all constants collapses to a single constant. This
//! keeps the structural zeros and ones of rotation and translation operators
//! exact, so a symbolic 6x6 operator stays as sparse as its numeric twin.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::sync::Arc;

use nalgebra as na;
use num_traits::{One, Zero};

use crate::{Result, Scalar, SpatialError};

/// Symbol-to-value map used by [`Expr::eval`].
pub type Bindings<'a> = HashMap<&'a str, f64>;

/// Unary operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Sqrt,
    Sin,
    Cos,
    Asin,
    Abs,
}

impl UnaryOp {
    fn apply(self, a: f64) -> f64 {
        match self {
            UnaryOp::Neg => -a,
            UnaryOp::Sqrt => a.sqrt(),
            UnaryOp::Sin => a.sin(),
            UnaryOp::Cos => a.cos(),
            UnaryOp::Asin => a.asin(),
            UnaryOp::Abs => a.abs(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Asin => "asin",
            UnaryOp::Abs => "abs",
        }
    }
}

/// Binary operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `atan2(lhs, rhs)`
    Atan2,
    Max,
}

impl BinOp {
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            BinOp::Div => a / b,
            BinOp::Atan2 => a.atan2(b),
            BinOp::Max => a.max(b),
        }
    }
}

/// A symbolic scalar expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Constant(f64),
    /// Free symbol, resolved at evaluation time.
    Symbol(Arc<str>),
    Unary(UnaryOp, Arc<Expr>),
    Binary(BinOp, Arc<Expr>, Arc<Expr>),
}

impl Expr {
    /// Create a constant.
    pub fn constant(value: f64) -> Self {
        Expr::Constant(value)
    }

    /// Create a free symbol.
    pub fn symbol(name: impl AsRef<str>) -> Self {
        Expr::Symbol(Arc::from(name.as_ref()))
    }

    /// The literal value, if this expression is a constant.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Constant(v) => Some(*v),
            _ => None,
        }
    }

    /// Evaluate with every symbol looked up in `bindings`.
    pub fn eval(&self, bindings: &Bindings<'_>) -> Result<f64> {
        match self {
            Expr::Constant(v) => Ok(*v),
            Expr::Symbol(name) => bindings
                .get(&**name)
                .copied()
                .ok_or_else(|| SpatialError::UnboundSymbol(name.to_string())),
            Expr::Unary(op, arg) => Ok(op.apply(arg.eval(bindings)?)),
            Expr::Binary(op, lhs, rhs) => Ok(op.apply(lhs.eval(bindings)?, rhs.eval(bindings)?)),
        }
    }

    fn unary(op: UnaryOp, arg: Expr) -> Expr {
        if let Some(a) = arg.as_constant() {
            return Expr::Constant(op.apply(a));
        }
        if let (UnaryOp::Neg, Expr::Unary(UnaryOp::Neg, inner)) = (op, &arg) {
            return (**inner).clone();
        }
        Expr::Unary(op, Arc::new(arg))
    }

    fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        match (op, lhs.as_constant(), rhs.as_constant()) {
            (_, Some(a), Some(b)) => Expr::Constant(op.apply(a, b)),
            (BinOp::Add, Some(a), None) if a == 0.0 => rhs,
            (BinOp::Add | BinOp::Sub, None, Some(b)) if b == 0.0 => lhs,
            (BinOp::Sub, Some(a), None) if a == 0.0 => Expr::unary(UnaryOp::Neg, rhs),
            (BinOp::Mul, Some(a), None) | (BinOp::Mul, None, Some(a)) if a == 0.0 => Expr::zero(),
            (BinOp::Mul, Some(a), None) if a == 1.0 => rhs,
            (BinOp::Mul, None, Some(b)) if b == 1.0 => lhs,
            (BinOp::Mul, Some(a), None) if a == -1.0 => Expr::unary(UnaryOp::Neg, rhs),
            (BinOp::Mul, None, Some(b)) if b == -1.0 => Expr::unary(UnaryOp::Neg, lhs),
            (BinOp::Div, Some(a), None) if a == 0.0 => Expr::zero(),
            (BinOp::Div, None, Some(b)) if b == 1.0 => lhs,
            _ => Expr::Binary(op, Arc::new(lhs), Arc::new(rhs)),
        }
    }
}

/// Evaluate every entry of a symbolic matrix.
pub fn eval_matrix<const R: usize, const C: usize>(
    m: &na::SMatrix<Expr, R, C>,
    bindings: &Bindings<'_>,
) -> Result<na::SMatrix<f64, R, C>> {
    let mut out = na::SMatrix::<f64, R, C>::zeros();
    for (dst, src) in out.iter_mut().zip(m.iter()) {
        *dst = src.eval(bindings)?;
    }
    Ok(out)
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Constant(value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(v) => write!(f, "{v}"),
            Expr::Symbol(name) => f.write_str(name),
            Expr::Unary(UnaryOp::Neg, arg) => match **arg {
                Expr::Binary(..) => write!(f, "-({arg})"),
                _ => write!(f, "-{arg}"),
            },
            Expr::Unary(op, arg) => write!(f, "{}({arg})", op.name()),
            Expr::Binary(BinOp::Atan2, lhs, rhs) => write!(f, "atan2({lhs}, {rhs})"),
            Expr::Binary(BinOp::Max, lhs, rhs) => write!(f, "max({lhs}, {rhs})"),
            Expr::Binary(op, lhs, rhs) => {
                let sym = match op {
                    BinOp::Add => '+',
                    BinOp::Sub => '-',
                    BinOp::Mul => '*',
                    _ => '/',
                };
                write!(f, "({lhs} {sym} {rhs})")
            }
        }
    }
}

impl Zero for Expr {
    fn zero() -> Self {
        Expr::Constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.as_constant() == Some(0.0)
    }
}

impl One for Expr {
    fn one() -> Self {
        Expr::Constant(1.0)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:expr) => {
        impl $trait for Expr {
            type Output = Expr;
            #[inline]
            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl $assign_trait for Expr {
            #[inline]
            fn $assign_method(&mut self, rhs: Expr) {
                let lhs = std::mem::replace(self, Expr::zero());
                *self = Expr::binary($op, lhs, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, BinOp::Add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, BinOp::Sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, BinOp::Mul);
impl_binary_op!(Div, div, DivAssign, div_assign, BinOp::Div);

impl Neg for Expr {
    type Output = Expr;
    #[inline]
    fn neg(self) -> Expr {
        Expr::unary(UnaryOp::Neg, self)
    }
}

impl Scalar for Expr {
    fn from_f64(value: f64) -> Self {
        Expr::Constant(value)
    }

    fn sqrt(self) -> Self {
        Expr::unary(UnaryOp::Sqrt, self)
    }

    fn sin(self) -> Self {
        Expr::unary(UnaryOp::Sin, self)
    }

    fn cos(self) -> Self {
        Expr::unary(UnaryOp::Cos, self)
    }

    fn atan2(self, other: Self) -> Self {
        Expr::binary(BinOp::Atan2, self, other)
    }

    fn asin(self) -> Self {
        Expr::unary(UnaryOp::Asin, self)
    }

    fn abs(self) -> Self {
        Expr::unary(UnaryOp::Abs, self)
    }

    fn max(self, other: Self) -> Self {
        Expr::binary(BinOp::Max, self, other)
    }
}
