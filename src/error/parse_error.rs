use crate::interpreter::position::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the syntax tree.
pub enum ParseError {
    /// The parser found a token that does not fit the grammar here.
    UnexpectedToken {
        /// Description of what would have been accepted.
        expected: String,
        /// The token that was found instead.
        found:    String,
        /// Where the unexpected token starts.
        position: Position,
    },
    /// A block opened with `THEN` or a function header was never closed with
    /// `END`.
    UnclosedBlock {
        /// The construct whose block is unclosed (`IF`, `FOR`, ...).
        construct: String,
        /// The token found where `END` was required.
        found:     String,
        /// Where that token starts.
        position:  Position,
    },
}

impl ParseError {
    /// Returns the position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. } | Self::UnclosedBlock { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Syntax error at {position}: expected {expected}, found {found}.")
            },
            Self::UnclosedBlock { construct,
                                  found,
                                  position, } => write!(f,
                                                        "Syntax error at {position}: '{construct}' block is not closed, expected 'END' but found {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
