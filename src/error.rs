/// Lexical errors.
///
/// Raised by the lexer when a character cannot start a lexeme, when a lexeme
/// is followed by a character that may not follow it, or when a numeric
/// literal does not fit in an integer.
pub mod scan_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream. Parse errors are fatal: the parser never resynchronizes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution,
/// such as undefined variables, division by zero, arity mismatches or
/// malformed input to a `read` statement.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;

/// Any failure of a full pipeline run: lexing, parsing or evaluating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source text could not be tokenized.
    Scan(ScanError),
    /// The token stream does not match the grammar.
    Parse(ParseError),
    /// Evaluation of the program failed.
    Runtime(RuntimeError),
}

impl From<ScanError> for Error {
    fn from(value: ScanError) -> Self {
        Self::Scan(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scan(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
