//! The one-token lookahead view driving expression parsing.
//!
//! `TokenizerView` buffers exactly one token over a borrowed `Tokenizer`.
//! It is created once per parse and discarded with it; beyond the buffered
//! token it has no state of its own.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
};

pub struct TokenizerView<'t, 'src> {
    tokenizer: &'t mut Tokenizer<'src>,
    cur_token: Token,
}

impl<'t, 'src> TokenizerView<'t, 'src> {
    /// Creates the view, eagerly priming it with the first token.
    pub fn new(tokenizer: &'t mut Tokenizer<'src>) -> Result<TokenizerView<'t, 'src>, Error> {
        let cur_token = tokenizer.next()?;
        Ok(TokenizerView {
            tokenizer,
            cur_token,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.cur_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cur_token.kind
    }

    /// Pulls the next token from the tokenizer, replacing and returning
    /// the new current token.
    pub fn advance(&mut self) -> Result<&Token, Error> {
        self.cur_token = self.tokenizer.next()?;
        Ok(&self.cur_token)
    }

    /// Expects a token of the specified kind.
    ///
    /// Consumes and returns the token if the current token matches,
    /// otherwise returns an error without consuming anything.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.cur_token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnmatchedParenthesis {
                    token: String::from(self.cur_token.kind.lexeme()),
                },
                self.cur_token.offset,
            ));
        }

        let token = self.cur_token.clone();
        self.advance()?;
        Ok(token)
    }
}
