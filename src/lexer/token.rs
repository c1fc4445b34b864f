use std::fmt;

use phf::phf_map;

pub(super) static KEYWORDS: phf::Map<&str, TokenKind> = phf_map! {
    "int" => TokenKind::Int,
    "print" => TokenKind::Print,
};

pub(super) static ONE_SYMBOL_TOKENS: phf::Map<char, TokenKind> = phf_map! {
    '=' => TokenKind::Equal,
    ';' => TokenKind::SemiColon,
    '+' => TokenKind::Plus,
    '-' => TokenKind::Minus,
    '*' => TokenKind::Star,
    '/' => TokenKind::Slash,
    '(' => TokenKind::LeftParen,
    ')' => TokenKind::RightParen,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Num(i64),
    Ident(String),

    Int,
    Print,

    Equal,
    SemiColon,
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Num(n) => write!(f, "integer {}", n),
            TokenKind::Ident(name) => write!(f, "identifier '{}'", name),
            TokenKind::Int => f.write_str("'int'"),
            TokenKind::Print => f.write_str("'print'"),
            TokenKind::Equal => f.write_str("'='"),
            TokenKind::SemiColon => f.write_str("';'"),
            TokenKind::Plus => f.write_str("'+'"),
            TokenKind::Minus => f.write_str("'-'"),
            TokenKind::Star => f.write_str("'*'"),
            TokenKind::Slash => f.write_str("'/'"),
            TokenKind::LeftParen => f.write_str("'('"),
            TokenKind::RightParen => f.write_str("')'"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Character offset of the first character of the token.
    pub pos: usize,
}
