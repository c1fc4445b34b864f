use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOpKind {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Num(i64),
    Var(String),
    Binary(BinOpKind, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn binary(kind: BinOpKind, left: Expr, right: Expr) -> Self {
        Expr::Binary(kind, Box::new(left), Box::new(right))
    }
}

/// Fully parenthesized rendering, e.g. `(a + (5 * (2 + 3)))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(n) => write!(f, "{}", n),
            Expr::Var(name) => f.write_str(name),
            Expr::Binary(kind, left, right) => write!(f, "({} {} {})", left, kind, right),
        }
    }
}
