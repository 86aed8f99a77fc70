use std::fmt;

use log::trace;
use logos::Logos;

use crate::{error::LexError, interpreter::position::Position};

/// Reserved words of the language.
///
/// `CONST`, `LET` and `DO` are reserved but not used by the grammar yet, so
/// they cannot be used as identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Const,
    Let,
    Var,
    If,
    Then,
    Elif,
    Else,
    For,
    To,
    Step,
    While,
    Do,
    Function,
    End,
}

impl Keyword {
    /// Returns the keyword as written in source code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Const => "CONST",
            Self::Let => "LET",
            Self::Var => "VAR",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Elif => "ELIF",
            Self::Else => "ELSE",
            Self::For => "FOR",
            Self::To => "TO",
            Self::Step => "STEP",
            Self::While => "WHILE",
            Self::Do => "DO",
            Self::Function => "FUNCTION",
            Self::End => "END",
        }
    }
}

/// The reason a piece of input could not be tokenized.
///
/// This is the error type logos works with; [`tokenize`] turns it into a
/// [`LexError`] carrying the offending text and its position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token starts with this character.
    #[default]
    IllegalCharacter,
    /// A run of operator symbols that names no operator.
    MalformedOperator,
    /// A string literal reaching the end of input.
    MalformedString,
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Integer literal tokens such as `42`. The raw digits are kept.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// Float literal tokens such as `3.14` or `2.`. The raw text is kept.
    #[regex(r"[0-9]+\.[0-9]*", |lex| lex.slice().to_string())]
    Float(String),
    /// String literal tokens. The value has its escapes resolved.
    #[token("\"", lex_string)]
    Str(String),
    /// Reserved words.
    #[token("CONST", |_| Keyword::Const)]
    #[token("LET", |_| Keyword::Let)]
    #[token("VAR", |_| Keyword::Var)]
    #[token("IF", |_| Keyword::If)]
    #[token("THEN", |_| Keyword::Then)]
    #[token("ELIF", |_| Keyword::Elif)]
    #[token("ELSE", |_| Keyword::Else)]
    #[token("FOR", |_| Keyword::For)]
    #[token("TO", |_| Keyword::To)]
    #[token("STEP", |_| Keyword::Step)]
    #[token("WHILE", |_| Keyword::While)]
    #[token("DO", |_| Keyword::Do)]
    #[token("FUNCTION", |_| Keyword::Function)]
    #[token("END", |_| Keyword::End)]
    Keyword(Keyword),
    /// Identifier tokens; variable or function names such as `x` or `año`.
    #[regex(r"[a-zA-ZñÑ][a-zA-Z0-9_À-ÖØ-öø-ÿ]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `!`
    #[token("!")]
    Bang,
    /// `=>`
    #[token("=>")]
    Arrow,
    /// Any other run of operator symbols. Always rejected.
    #[regex(r"[=!<>&|]+", malformed_operator, priority = 1)]
    Malformed(String),
    /// Statement separator: a line break or a pilcrow.
    #[token("\n")]
    #[token("⁋")]
    NewLine,
    /// End of input. Produced by [`tokenize`], never by logos itself.
    Eof,
}

/// Scans the body of a string literal after its opening quote.
///
/// A backslash makes the following character literal, so `\"` does not close
/// the string and `\\` yields one backslash.
///
/// # Returns
/// - `Ok(String)`: The literal's value, with the closing quote consumed.
/// - `Err(LexErrorKind::MalformedString)`: If the input ends first.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let mut value = String::new();
    let mut escaped = false;

    for (offset, ch) in lex.remainder().char_indices() {
        if escaped {
            value.push(ch);
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            lex.bump(offset + ch.len_utf8());
            return Ok(value);
        } else {
            value.push(ch);
        }
    }

    lex.bump(lex.remainder().len());
    Err(LexErrorKind::MalformedString)
}

/// Rejects a run of operator symbols that is not a known operator.
///
/// Known operators are matched by their own `#[token]` attributes, which win
/// over this pattern whenever the whole run is an operator.
const fn malformed_operator(_: &logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    Err(LexErrorKind::MalformedOperator)
}

/// Converts source text into a token stream.
///
/// Every token is paired with the position of its first character. The stream
/// always ends with exactly one [`Token::Eof`] positioned at the end of the
/// input. A newline token is positioned at the newline character itself.
///
/// # Errors
/// Returns the first [`LexError`] found; no further input is processed.
///
/// # Example
/// ```
/// use pilcrow::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Int("1".into()),
///                 Token::Plus,
///                 Token::Int("2".into()),
///                 Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, LexError> {
    let mut tokens = Vec::new();
    let mut cursor = Position::start();
    let mut consumed = 0;
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        cursor.advance_str(&source[consumed..span.start]);
        let start = cursor;
        cursor.advance_str(lexer.slice());
        consumed = span.end;

        match result {
            Ok(token) => tokens.push((token, start)),
            Err(kind) => return Err(lex_error(kind, lexer.slice(), start)),
        }
    }

    cursor.advance_str(&source[consumed..]);
    tokens.push((Token::Eof, cursor));
    trace!("tokenized {} characters into {} tokens", cursor.offset, tokens.len());

    Ok(tokens)
}

/// Builds the public error for a failed token.
fn lex_error(kind: LexErrorKind, slice: &str, position: Position) -> LexError {
    match kind {
        LexErrorKind::IllegalCharacter => {
            LexError::IllegalCharacter { character: slice.chars().next().unwrap_or('\0'),
                                         position }
        },
        LexErrorKind::MalformedOperator => LexError::MalformedOperator { operator: slice.to_string(),
                                                                         position },
        LexErrorKind::MalformedString => LexError::MalformedString { position },
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(text) | Self::Float(text) => write!(f, "number '{text}'"),
            Self::Str(value) => write!(f, "string \"{value}\""),
            Self::Keyword(keyword) => write!(f, "'{}'", keyword.as_str()),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Malformed(text) => write!(f, "'{text}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
            Self::Equals => write!(f, "'='"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::AndAnd => write!(f, "'&&'"),
            Self::OrOr => write!(f, "'||'"),
            Self::Bang => write!(f, "'!'"),
            Self::Arrow => write!(f, "'=>'"),
            Self::NewLine => write!(f, "newline"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}
