use tracing::debug;

use crate::analyzer::Ty;
use crate::lexer::{Token, TokenKind};

use super::{BinOpKind, Expr, ParseError, Program, Stmt};

static EOF: Token = Token {
    kind: TokenKind::Eof,
    pos: 0,
};

#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

/// program    = stmt*
/// stmt       = decl | print_stmt | assignment | ";"
/// decl       = "int" ident ";"
/// print_stmt = "print" "(" expr ")" ";"
/// assignment = ident "=" expr ";"
/// expr       = term (("+" | "-") term)*
/// term       = factor (("*" | "/") factor)*
/// factor     = num | ident | "(" expr ")"
impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let program = self.parse_program()?;
        debug!(statements = program.0.len(), "parsed program");
        Ok(program)
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&EOF)
    }

    fn is_eof(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn advance(&mut self) -> Token {
        let t = self.peek().clone();
        if t.kind != TokenKind::Eof {
            self.index += 1;
        }
        t
    }

    fn consume(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind != kind {
            return false;
        }
        self.advance();
        true
    }

    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let t = self.peek();
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: t.kind.clone(),
            pos: t.pos,
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.consume(kind) {
            return Ok(());
        }
        Err(self.unexpected(kind.to_string()))
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            self.advance();
            return Ok(name);
        }
        Err(self.unexpected("identifier"))
    }

    fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut stmts = vec![];

        while !self.is_eof() {
            if let Some(stmt) = self.parse_stmt()? {
                stmts.push(stmt);
            }
        }

        Ok(Program(stmts))
    }

    /// A bare `;` yields `None`.
    fn parse_stmt(&mut self) -> Result<Option<Stmt>, ParseError> {
        let stmt = match self.peek().kind {
            TokenKind::SemiColon => {
                self.advance();
                return Ok(None);
            }
            TokenKind::Int => self.parse_decl()?,
            TokenKind::Print => self.parse_print()?,
            TokenKind::Ident(_) => self.parse_assignment()?,
            _ => return Err(self.unexpected("statement")),
        };
        Ok(Some(stmt))
    }

    fn parse_decl(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Int)?;
        let name = self.expect_ident()?;
        self.expect(&TokenKind::SemiColon)?;
        Ok(Stmt::VarDecl { name, ty: Ty::Int })
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Print)?;
        self.expect(&TokenKind::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        self.expect(&TokenKind::SemiColon)?;
        Ok(Stmt::Print(expr))
    }

    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let target = self.expect_ident()?;
        self.expect(&TokenKind::Equal)?;
        let value = self.parse_expr()?;
        self.expect(&TokenKind::SemiColon)?;
        Ok(Stmt::Assign { target, value })
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_term()?;

        loop {
            if self.consume(&TokenKind::Plus) {
                node = Expr::binary(BinOpKind::Add, node, self.parse_term()?);
            } else if self.consume(&TokenKind::Minus) {
                node = Expr::binary(BinOpKind::Sub, node, self.parse_term()?);
            } else {
                return Ok(node);
            }
        }
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_factor()?;

        loop {
            if self.consume(&TokenKind::Star) {
                node = Expr::binary(BinOpKind::Mul, node, self.parse_factor()?);
            } else if self.consume(&TokenKind::Slash) {
                node = Expr::binary(BinOpKind::Div, node, self.parse_factor()?);
            } else {
                return Ok(node);
            }
        }
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        match self.peek().kind.clone() {
            TokenKind::Num(n) => {
                self.advance();
                Ok(Expr::Num(n))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr::Var(name))
            }
            TokenKind::LeftParen => {
                self.advance();
                let node = self.parse_expr()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(node)
            }
            _ => Err(self.unexpected("expression")),
        }
    }
}
