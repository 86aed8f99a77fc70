use crate::interpreter::position::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while splitting source text into
/// tokens.
///
/// Lexing stops at the first error, so a program produces at most one of
/// these.
pub enum LexError {
    /// A character that cannot start any token.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  Position,
    },
    /// A run of operator symbols (`= ! < > & |`) that names no operator,
    /// such as `=<` or a lone `&`.
    MalformedOperator {
        /// The whole run of symbols.
        operator: String,
        /// Where the run starts.
        position: Position,
    },
    /// A string literal without its closing quote.
    MalformedString {
        /// Where the opening quote appears.
        position: Position,
    },
}

impl LexError {
    /// Returns the position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::IllegalCharacter { position, .. }
            | Self::MalformedOperator { position, .. }
            | Self::MalformedString { position } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, position } => {
                write!(f, "Illegal character '{character}' at {position}.")
            },
            Self::MalformedOperator { operator, position } => {
                write!(f, "Malformed operator '{operator}' at {position}.")
            },
            Self::MalformedString { position } => {
                write!(f, "Malformed string starting at {position}: missing closing quote.")
            },
        }
    }
}

impl std::error::Error for LexError {}
