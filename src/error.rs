/// Lexing errors.
///
/// Raised while turning source text into tokens: characters that start no
/// token, malformed operator runs and unterminated strings.
pub mod lex_error;
/// Parsing errors.
///
/// Raised while turning tokens into a syntax tree: tokens that do not fit the
/// grammar and blocks that are never closed.
pub mod parse_error;
/// Runtime errors.
///
/// Raised during evaluation, such as undefined variables, division by zero,
/// out-of-bounds list access or calls with the wrong number of arguments.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::{RuntimeError, RuntimeErrorKind};

#[derive(Debug, Clone, PartialEq)]
/// Any error produced by the pipeline, tagged by the stage that raised it.
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a valid program.
    Parse(ParseError),
    /// The program failed while running.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
