use tracing::debug;

use super::{
    token::{KEYWORDS, ONE_SYMBOL_TOKENS},
    LexError, Token, TokenKind,
};

#[derive(Debug)]
pub struct Lexer {
    tokens: Vec<Token>,
    index: usize,
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: vec![],
            index: 0,
        }
    }

    fn new_token(&mut self, kind: TokenKind, len: usize) {
        self.tokens.push(Token {
            kind,
            pos: self.index,
        });
        self.index += len;
    }

    fn parse_number(&mut self, chars: &[char]) -> Result<(), LexError> {
        let s: String = chars.iter().take_while(|c| c.is_ascii_digit()).collect();
        let value = s.parse().map_err(|_| LexError::IntegerOutOfRange {
            literal: s.clone(),
            pos: self.index,
        })?;
        self.new_token(TokenKind::Num(value), s.len());
        Ok(())
    }

    fn parse_identifier(&mut self, chars: &[char]) {
        let s: String = chars
            .iter()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        let len = s.len();

        if let Some(kind) = KEYWORDS.get(s.as_str()) {
            self.new_token(kind.clone(), len);
        } else {
            self.new_token(TokenKind::Ident(s), len);
        }
    }

    fn _tokenize(&mut self, s: &str) -> Result<(), LexError> {
        let chars: Vec<_> = s.chars().collect();

        while self.index < chars.len() {
            let c = chars[self.index];

            if c.is_whitespace() {
                self.index += 1;
            } else if c.is_ascii_digit() {
                self.parse_number(&chars[self.index..])?;
            } else if c.is_ascii_alphabetic() {
                self.parse_identifier(&chars[self.index..]);
            } else if let Some(kind) = ONE_SYMBOL_TOKENS.get(&c) {
                self.new_token(kind.clone(), 1);
            } else {
                return Err(LexError::InvalidCharacter {
                    ch: c,
                    pos: self.index,
                });
            }
        }

        self.new_token(TokenKind::Eof, 0);
        Ok(())
    }

    /// Splits `s` into tokens. The last token is always [`TokenKind::Eof`].
    pub fn tokenize(s: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new();
        lexer._tokenize(s)?;
        debug!(tokens = lexer.tokens.len(), "lexed input");

        Ok(lexer.tokens)
    }
}
