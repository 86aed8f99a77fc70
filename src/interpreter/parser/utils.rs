use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::core::ParseResult,
        position::Position,
    },
};

/// Stands in for the end of input when a token slice is empty.
static END_OF_INPUT: (Token, Position) = (Token::Eof, Position::start());

/// A rewindable read position in a token slice.
///
/// The parser moves forward with [`advance`](Self::advance) and backtracks
/// with [`reverse`](Self::reverse); the number of tokens a failed attempt
/// consumed is the difference between two [`index`](Self::index) readings.
///
/// The cursor never moves past the final [`Token::Eof`], so peeking at the end
/// of the stream keeps returning it.
pub struct TokenCursor<'a> {
    tokens:      &'a [(Token, Position)],
    index:       usize,
    /// The error of the last discarded statement attempt and the index it
    /// started at.
    backtracked: Option<(usize, ParseError)>,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [(Token, Position)]) -> Self {
        Self { tokens,
               index: 0,
               backtracked: None }
    }

    /// Returns the current token and its position without consuming it.
    #[must_use]
    pub fn current(&self) -> &'a (Token, Position) {
        self.tokens
            .get(self.index)
            .or_else(|| self.tokens.last())
            .unwrap_or(&END_OF_INPUT)
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        &self.current().0
    }

    /// Returns the position of the current token.
    #[must_use]
    pub fn position(&self) -> Position {
        self.current().1
    }

    /// Returns how many tokens have been consumed so far.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> &'a (Token, Position) {
        let entry = self.current();
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
        entry
    }

    /// Steps back over `count` consumed tokens.
    pub const fn reverse(&mut self, count: usize) {
        self.index = self.index.saturating_sub(count);
    }

    /// Checks whether the current token is `token`.
    #[must_use]
    pub fn is(&self, token: &Token) -> bool {
        self.peek() == token
    }

    /// Checks whether the current token is the keyword `keyword`.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.peek(), Token::Keyword(k) if *k == keyword)
    }

    /// Builds an error for the current token.
    #[must_use]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found:    self.peek().to_string(),
                                      position: self.position(), }
    }

    /// Consumes `token` or fails with an error naming `expected`.
    pub fn expect(&mut self, token: &Token, expected: &str) -> ParseResult<Position> {
        if self.is(token) {
            return Ok(self.advance().1);
        }
        Err(self.unexpected(expected))
    }

    /// Consumes `keyword` or fails with an error naming it.
    pub fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<Position> {
        if self.is_keyword(keyword) {
            return Ok(self.advance().1);
        }
        Err(self.unexpected(&format!("'{}'", keyword.as_str())))
    }

    /// Consumes an identifier and returns its name.
    pub fn expect_identifier(&mut self) -> ParseResult<String> {
        if let Token::Identifier(name) = self.peek() {
            self.advance();
            return Ok(name.clone());
        }
        Err(self.unexpected("identifier"))
    }

    /// Consumes every consecutive statement separator and returns how many
    /// there were.
    pub fn skip_newlines(&mut self) -> usize {
        let mut count = 0;
        while self.is(&Token::NewLine) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Remembers why a statement attempt starting at `index` was discarded.
    ///
    /// The first error recorded for an index is kept.
    pub fn record_backtrack(&mut self, index: usize, error: ParseError) {
        if matches!(&self.backtracked, Some((at, _)) if *at == index) {
            return;
        }
        self.backtracked = Some((index, error));
    }

    /// Returns the error of a statement attempt discarded at the current
    /// index, if there was one.
    pub fn take_backtracked(&mut self) -> Option<ParseError> {
        match self.backtracked.take() {
            Some((at, error)) if at == self.index => Some(error),
            other => {
                self.backtracked = other;
                None
            },
        }
    }

    /// Fails with the error of a discarded attempt at this index or, when
    /// there is none, with an error naming `expected`.
    pub fn unexpected_or_backtracked(&mut self, expected: &str) -> ParseError {
        self.take_backtracked().unwrap_or_else(|| self.unexpected(expected))
    }
}

/// Replaces an error with a generic one if the rule failed before consuming
/// any token.
///
/// Errors raised after at least one token was consumed are more specific and
/// are kept unchanged.
pub(in crate::interpreter::parser) fn expected_if_untouched<T>(tokens: &TokenCursor<'_>,
                                                               start: usize,
                                                               result: ParseResult<T>,
                                                               expected: &str)
                                                               -> ParseResult<T> {
    match result {
        Err(_) if tokens.index() == start => Err(tokens.unexpected(expected)),
        other => other,
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, call arguments and parameter
/// lists. An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Cursor positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (`]` or `)`).
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or if something other
/// than a comma or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    tokens: &mut TokenCursor<'_>,
    parse_item: impl Fn(&mut TokenCursor<'_>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if tokens.is(closing) {
        tokens.advance();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Token::Comma => {
                tokens.advance();
            },
            token if token == closing => {
                tokens.advance();
                return Ok(items);
            },
            _ => return Err(tokens.unexpected(&format!("',' or {closing}"))),
        }
    }
}

/// Converts a token into the binary operator it spells, if any.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
